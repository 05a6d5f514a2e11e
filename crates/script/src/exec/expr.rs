// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expression evaluation.

use indexmap::IndexMap;

use crate::ast::*;
use crate::normalize::to_text;
use crate::value::{Object, Value};
use crate::Span;

use super::error::ExecError;
use super::interp::Interpreter;
use super::ops::{self, compare, loose_equals, strict_equals, to_number};
use super::property::Key;
use super::scope::{self, ScopeRef};

impl Interpreter {
    pub(crate) fn eval_expr(&mut self, expr: &Expr, scope: &ScopeRef) -> Result<Value, ExecError> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Str { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
            Expr::Null(_) => Ok(Value::Null),
            Expr::Template { segments, .. } => {
                let mut out = String::new();
                for segment in segments {
                    match segment {
                        TemplateSegment::Text(text) => out.push_str(text),
                        TemplateSegment::Expr(expr) => {
                            let value = self.eval_expr(expr, scope)?;
                            out.push_str(&self.render(&value)?);
                        }
                    }
                    self.check_string_len(out.len())?;
                }
                Ok(Value::Str(out.into()))
            }
            Expr::Ident { name, span } => self.lookup(name, scope).map_err(|e| e.at(*span)),
            Expr::This(_) => Ok(scope::this_value(scope)),
            Expr::Array { elements, span } => {
                let mut items = Vec::with_capacity(elements.len());
                for element in elements {
                    match element {
                        ArrayElement::Item(expr) => items.push(self.eval_expr(expr, scope)?),
                        ArrayElement::Spread(expr) => {
                            let value = self.eval_expr(expr, scope)?;
                            items.extend(self.iterate(&value, expr.span())?);
                        }
                    }
                }
                self.check_array_len(items.len()).map_err(|e| e.at(*span))?;
                Ok(self.new_array(items))
            }
            Expr::Object { props, .. } => self.eval_object(props, scope),
            Expr::Function(node) => Ok(self.make_closure(node, scope)),
            Expr::Unary { op, arg, span } => self.eval_unary(*op, arg, scope).map_err(|e| e.at(*span)),
            Expr::Update { op, prefix, target, span } => {
                self.eval_update(*op, *prefix, target, scope).map_err(|e| e.at(*span))
            }
            Expr::Binary { op, left, right, span } => {
                let left = self.eval_expr(left, scope)?;
                let right = self.eval_expr(right, scope)?;
                self.binary(*op, &left, &right).map_err(|e| e.at(*span))
            }
            Expr::Logical { op, left, right, .. } => {
                let left = self.eval_expr(left, scope)?;
                if short_circuits(*op, &left) {
                    Ok(left)
                } else {
                    self.eval_expr(right, scope)
                }
            }
            Expr::Assign { op, target, value, span } => {
                self.eval_assign(*op, target, value, scope).map_err(|e| e.at(*span))
            }
            Expr::Conditional { test, consequent, alternate, .. } => {
                if self.eval_expr(test, scope)?.truthy() {
                    self.eval_expr(consequent, scope)
                } else {
                    self.eval_expr(alternate, scope)
                }
            }
            Expr::Member { .. } | Expr::Call { .. } => Ok(self.eval_chain(expr, scope)?.unwrap_or_default()),
            Expr::Chain { expr, .. } => Ok(self.eval_chain(expr, scope)?.unwrap_or_default()),
            Expr::New { callee, args, span } => {
                let constructor = self.eval_expr(callee, scope)?;
                let args = self.eval_args(args, scope)?;
                self.construct(&constructor, args, callee.span()).map_err(|e| e.at(*span))
            }
            Expr::Sequence { exprs, .. } => {
                let mut last = Value::Undefined;
                for expr in exprs {
                    last = self.eval_expr(expr, scope)?;
                }
                Ok(last)
            }
        }
    }

    fn lookup(&mut self, name: &str, scope: &ScopeRef) -> Result<Value, ExecError> {
        scope::lookup(scope, name).map_err(|e| self.binding_error(e, name))
    }

    // -----------------------------------------------------------------------
    // Member access and calls
    // -----------------------------------------------------------------------

    /// Evaluate a member/call chain. `None` means an optional link
    /// (`?.`) short-circuited, making the whole chain `undefined`.
    fn eval_chain(&mut self, expr: &Expr, scope: &ScopeRef) -> Result<Option<Value>, ExecError> {
        match expr {
            Expr::Member { object, property, optional, span } => {
                let Some(object) = self.eval_chain(object, scope)? else {
                    return Ok(None);
                };
                if *optional && object.is_nullish() {
                    return Ok(None);
                }
                let key = self.member_key(property, scope)?;
                self.get_property(&object, &key).map(Some).map_err(|e| e.at(*span))
            }
            Expr::Call { callee, args, optional, span } => {
                let (func, this) = match callee.as_ref() {
                    Expr::Member { object, property, optional: member_optional, span: member_span } => {
                        let Some(object) = self.eval_chain(object, scope)? else {
                            return Ok(None);
                        };
                        if *member_optional && object.is_nullish() {
                            return Ok(None);
                        }
                        let key = self.member_key(property, scope)?;
                        let func = self.get_property(&object, &key).map_err(|e| e.at(*member_span))?;
                        (func, object)
                    }
                    other => match self.eval_chain(other, scope)? {
                        Some(func) => (func, Value::Undefined),
                        None => return Ok(None),
                    },
                };
                if *optional && func.is_nullish() {
                    return Ok(None);
                }
                let args = self.eval_args(args, scope)?;
                let Value::Function(func) = func else {
                    let message = format!("{} is not a function", self.snippet(callee.span()));
                    return Err(self.type_error(message).at(*span));
                };
                self.call_function(&func, this, args).map(Some).map_err(|e| e.at(*span))
            }
            other => self.eval_expr(other, scope).map(Some),
        }
    }

    pub(crate) fn member_key(&mut self, property: &MemberProp, scope: &ScopeRef) -> Result<Key, ExecError> {
        Ok(match property {
            MemberProp::Named(name) => Key::Name(name.clone()),
            MemberProp::Computed(expr) => {
                let value = self.eval_expr(expr, scope)?;
                Key::from_value(&value)
            }
        })
    }

    pub(crate) fn eval_args(&mut self, args: &[Argument], scope: &ScopeRef) -> Result<Vec<Value>, ExecError> {
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            match arg {
                Argument::Item(expr) => values.push(self.eval_expr(expr, scope)?),
                Argument::Spread(expr) => {
                    let value = self.eval_expr(expr, scope)?;
                    values.extend(self.iterate(&value, expr.span())?);
                }
            }
        }
        Ok(values)
    }

    fn eval_object(&mut self, props: &[ObjectProp], scope: &ScopeRef) -> Result<Value, ExecError> {
        let mut map = IndexMap::with_capacity(props.len());
        for prop in props {
            match prop {
                ObjectProp::KeyValue { key, value } => {
                    let key = match key {
                        PropKey::Named(name) => name.clone(),
                        PropKey::Computed(expr) => {
                            let key = self.eval_expr(expr, scope)?;
                            Key::from_value(&key).text()
                        }
                    };
                    let value = self.eval_expr(value, scope)?;
                    map.insert(key, value);
                }
                ObjectProp::Spread(expr) => {
                    let source = self.eval_expr(expr, scope)?;
                    for key in self.enumerate_keys(&source) {
                        let value = self.get_property(&source, &Key::from_name(key.clone()))?;
                        map.insert(key, value);
                    }
                }
            }
        }
        Ok(self.new_object(Object::plain(map)))
    }

    // -----------------------------------------------------------------------
    // Operators
    // -----------------------------------------------------------------------

    fn eval_unary(&mut self, op: UnaryOp, arg: &Expr, scope: &ScopeRef) -> Result<Value, ExecError> {
        match op {
            UnaryOp::Typeof => {
                // `typeof undeclared` is not a ReferenceError
                if let Expr::Ident { name, .. } = arg {
                    if !scope::is_declared(scope, name) {
                        return Ok(Value::str("undefined"));
                    }
                }
                let value = self.eval_expr(arg, scope)?;
                Ok(Value::str(value.type_of()))
            }
            UnaryOp::Delete => match arg {
                Expr::Member { object, property, .. } => {
                    let object = self.eval_expr(object, scope)?;
                    let key = self.member_key(property, scope)?;
                    Ok(Value::Bool(self.delete_property(&object, &key)?))
                }
                other => {
                    self.eval_expr(other, scope)?;
                    Ok(Value::Bool(true))
                }
            },
            _ => {
                let value = self.eval_expr(arg, scope)?;
                Ok(match op {
                    UnaryOp::Neg => Value::Number(-to_number(&value)),
                    UnaryOp::Plus => Value::Number(to_number(&value)),
                    UnaryOp::Not => Value::Bool(!value.truthy()),
                    _ => Value::Undefined,
                })
            }
        }
    }

    /// Binary operator on evaluated operands.
    pub(crate) fn binary(&mut self, op: BinaryOp, left: &Value, right: &Value) -> Result<Value, ExecError> {
        let number = |f: fn(f64, f64) -> f64| Value::Number(f(to_number(left), to_number(right)));
        Ok(match op {
            BinaryOp::Add => return self.add(left, right),
            BinaryOp::Sub => number(|a, b| a - b),
            BinaryOp::Mul => number(|a, b| a * b),
            BinaryOp::Div => number(|a, b| a / b),
            BinaryOp::Rem => number(|a, b| a % b),
            BinaryOp::Pow => number(ops::pow),
            BinaryOp::Eq => Value::Bool(loose_equals(left, right)),
            BinaryOp::NotEq => Value::Bool(!loose_equals(left, right)),
            BinaryOp::StrictEq => Value::Bool(strict_equals(left, right)),
            BinaryOp::StrictNotEq => Value::Bool(!strict_equals(left, right)),
            BinaryOp::Lt => Value::Bool(compare(left, right).is_some_and(|o| o.is_lt())),
            BinaryOp::Gt => Value::Bool(compare(left, right).is_some_and(|o| o.is_gt())),
            BinaryOp::LtEq => Value::Bool(compare(left, right).is_some_and(|o| o.is_le())),
            BinaryOp::GtEq => Value::Bool(compare(left, right).is_some_and(|o| o.is_ge())),
            BinaryOp::In => {
                let key = Key::from_value(left);
                Value::Bool(self.has_property(right, &key)?)
            }
            BinaryOp::Instanceof => Value::Bool(self.instance_of(left, right)?),
        })
    }

    /// `+`: string concatenation if either primitive operand is a string,
    /// numeric addition otherwise.
    fn add(&mut self, left: &Value, right: &Value) -> Result<Value, ExecError> {
        let (left, right) = (self.primitive(left)?, self.primitive(right)?);
        match (&left, &right) {
            (Value::Str(_), _) | (_, Value::Str(_)) => {
                let (a, b) = (to_text(&left), to_text(&right));
                self.check_string_len(a.len() + b.len())?;
                let mut out = String::with_capacity(a.len() + b.len());
                out.push_str(&a);
                out.push_str(&b);
                Ok(Value::Str(out.into()))
            }
            _ => Ok(Value::Number(to_number(&left) + to_number(&right))),
        }
    }

    fn eval_update(&mut self, op: UpdateOp, prefix: bool, target: &Pattern, scope: &ScopeRef) -> Result<Value, ExecError> {
        let delta = match op {
            UpdateOp::Increment => 1.0,
            UpdateOp::Decrement => -1.0,
        };
        let reference = self.resolve_reference(target, scope)?;
        let old = to_number(&self.read_reference(&reference, scope)?);
        let new = old + delta;
        self.write_reference(reference, Value::Number(new), scope)?;
        Ok(Value::Number(if prefix { new } else { old }))
    }

    fn eval_assign(&mut self, op: AssignOp, target: &Pattern, value: &Expr, scope: &ScopeRef) -> Result<Value, ExecError> {
        match op {
            AssignOp::Assign => match target {
                Pattern::Ident { name, .. } => {
                    let value = self.eval_expr(value, scope)?;
                    self.assign_name(name, value.clone(), scope)?;
                    Ok(value)
                }
                Pattern::Member(_) => {
                    let reference = self.resolve_reference(target, scope)?;
                    let value = self.eval_expr(value, scope)?;
                    self.write_reference(reference, value.clone(), scope)?;
                    Ok(value)
                }
                pattern => {
                    let value = self.eval_expr(value, scope)?;
                    self.bind_pattern(pattern, value.clone(), super::pattern::BindMode::Assign, scope)?;
                    Ok(value)
                }
            },
            AssignOp::Compound(op) => {
                let reference = self.resolve_reference(target, scope)?;
                let current = self.read_reference(&reference, scope)?;
                let rhs = self.eval_expr(value, scope)?;
                let result = self.binary(op, &current, &rhs)?;
                self.write_reference(reference, result.clone(), scope)?;
                Ok(result)
            }
            AssignOp::Logical(op) => {
                let reference = self.resolve_reference(target, scope)?;
                let current = self.read_reference(&reference, scope)?;
                if short_circuits(op, &current) {
                    return Ok(current);
                }
                let value = self.eval_expr(value, scope)?;
                self.write_reference(reference, value.clone(), scope)?;
                Ok(value)
            }
        }
    }

    /// Assignment through `obj.prop` or `obj[key]` as a destructuring target.
    pub(crate) fn assign_member(&mut self, expr: &Expr, value: Value, scope: &ScopeRef) -> Result<(), ExecError> {
        let pattern = Pattern::Member(Box::new(expr.clone()));
        let reference = self.resolve_reference(&pattern, scope)?;
        self.write_reference(reference, value, scope)
    }

    // -----------------------------------------------------------------------
    // References
    // -----------------------------------------------------------------------

    /// Evaluate the object and key of an assignment target once, so
    /// compound assignment reads and writes the same location.
    fn resolve_reference(&mut self, target: &Pattern, scope: &ScopeRef) -> Result<Reference, ExecError> {
        match target {
            Pattern::Ident { name, span } => Ok(Reference::Binding(name.clone(), *span)),
            Pattern::Member(expr) => match expr.as_ref() {
                Expr::Member { object, property, span, .. } => {
                    let object = self.eval_expr(object, scope)?;
                    let key = self.member_key(property, scope)?;
                    Ok(Reference::Property(object, key, *span))
                }
                other => Err(self.throw("SyntaxError", "Invalid left-hand side in assignment").at(other.span())),
            },
            other => Err(self.throw("SyntaxError", "Invalid left-hand side in assignment").at(other.span())),
        }
    }

    fn read_reference(&mut self, reference: &Reference, scope: &ScopeRef) -> Result<Value, ExecError> {
        match reference {
            Reference::Binding(name, span) => self.lookup(name, scope).map_err(|e| e.at(*span)),
            Reference::Property(object, key, span) => self.get_property(object, key).map_err(|e| e.at(*span)),
        }
    }

    fn write_reference(&mut self, reference: Reference, value: Value, scope: &ScopeRef) -> Result<(), ExecError> {
        match reference {
            Reference::Binding(name, span) => self.assign_name(&name, value, scope).map_err(|e| e.at(span)),
            Reference::Property(object, key, span) => self.set_property(&object, key, value).map_err(|e| e.at(span)),
        }
    }
}

enum Reference {
    Binding(std::rc::Rc<str>, Span),
    Property(Value, Key, Span),
}

/// True when a logical operator returns its left operand without
/// evaluating the right one.
fn short_circuits(op: LogicalOp, left: &Value) -> bool {
    match op {
        LogicalOp::And => !left.truthy(),
        LogicalOp::Or => left.truthy(),
        LogicalOp::Nullish => !left.is_nullish(),
    }
}
