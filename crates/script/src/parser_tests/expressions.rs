// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{binary, ident_name, number, parse_expr};
use crate::ast::*;
use yare::parameterized;

#[test]
fn multiplication_binds_tighter() {
    let expr = parse_expr("1 + 2 * 3");
    let (left, right) = binary(&expr, BinaryOp::Add);
    assert_eq!(number(left), 1.0);
    binary(right, BinaryOp::Mul);
}

#[test]
fn subtraction_is_left_associative() {
    let expr = parse_expr("a - b - c");
    let (left, right) = binary(&expr, BinaryOp::Sub);
    binary(left, BinaryOp::Sub);
    assert_eq!(ident_name(right), "c");
}

#[test]
fn exponent_is_right_associative() {
    let expr = parse_expr("2 ** 3 ** 2");
    let (left, right) = binary(&expr, BinaryOp::Pow);
    assert_eq!(number(left), 2.0);
    binary(right, BinaryOp::Pow);
}

#[test]
fn exponent_accepts_unary_exponent_and_parenthesised_base() {
    let expr = parse_expr("2 ** -1");
    let (_, right) = binary(&expr, BinaryOp::Pow);
    assert!(matches!(right, Expr::Unary { op: UnaryOp::Neg, .. }));

    let expr = parse_expr("(-2) ** 2");
    let (left, _) = binary(&expr, BinaryOp::Pow);
    assert!(matches!(left, Expr::Unary { op: UnaryOp::Neg, .. }));
}

#[test]
fn unary_binds_tighter_than_multiplication() {
    let expr = parse_expr("-a * b");
    let (left, _) = binary(&expr, BinaryOp::Mul);
    assert!(matches!(left, Expr::Unary { op: UnaryOp::Neg, .. }));
}

#[parameterized(
    nullish = { "a ?? b", LogicalOp::Nullish },
    or = { "a || b", LogicalOp::Or },
    and = { "a && b", LogicalOp::And },
)]
fn logical_operators(input: &str, expected: LogicalOp) {
    assert!(matches!(parse_expr(input), Expr::Logical { op, .. } if op == expected));
}

#[test]
fn and_binds_tighter_than_or() {
    let Expr::Logical { op: LogicalOp::Or, right, .. } = parse_expr("a || b && c") else {
        panic!("expected ||");
    };
    assert!(matches!(*right, Expr::Logical { op: LogicalOp::And, .. }));
}

#[test]
fn comparison_binds_tighter_than_equality() {
    let expr = parse_expr("a < b === c > d");
    let (left, right) = binary(&expr, BinaryOp::StrictEq);
    binary(left, BinaryOp::Lt);
    binary(right, BinaryOp::Gt);
}

#[test]
fn conditional_is_right_nested() {
    let Expr::Conditional { alternate, .. } = parse_expr("a ? b : c ? d : e") else {
        panic!("expected conditional");
    };
    assert!(matches!(*alternate, Expr::Conditional { .. }));
}

#[parameterized(
    plain = { "x = 1", AssignOp::Assign },
    add = { "x += 1", AssignOp::Compound(BinaryOp::Add) },
    pow = { "x **= 2", AssignOp::Compound(BinaryOp::Pow) },
    or = { "x ||= 1", AssignOp::Logical(LogicalOp::Or) },
    nullish = { "x ??= 1", AssignOp::Logical(LogicalOp::Nullish) },
)]
fn assignment_operators(input: &str, expected: AssignOp) {
    assert!(matches!(parse_expr(input), Expr::Assign { op, .. } if op == expected));
}

#[test]
fn assignment_is_right_associative() {
    let Expr::Assign { value, .. } = parse_expr("a = b = 1") else {
        panic!("expected assignment");
    };
    assert!(matches!(*value, Expr::Assign { .. }));
}

#[test]
fn update_prefix_and_postfix() {
    assert!(matches!(parse_expr("++i"), Expr::Update { op: UpdateOp::Increment, prefix: true, .. }));
    assert!(matches!(parse_expr("i--"), Expr::Update { op: UpdateOp::Decrement, prefix: false, .. }));
    assert!(matches!(parse_expr("a.b++"), Expr::Update { target, .. } if matches!(*target, Pattern::Member(_))));
}

#[test]
fn postfix_does_not_cross_newline() {
    let program = crate::Parser::parse("a\n++b").unwrap();
    assert_eq!(program.body.len(), 2);
    assert!(matches!(&program.body[1], Stmt::Expr(Expr::Update { prefix: true, .. })));
}

#[test]
fn member_and_call_chain() {
    let Expr::Call { callee, args, optional: false, .. } = parse_expr("a.b[0](1, ...rest)") else {
        panic!("expected call");
    };
    assert_eq!(args.len(), 2);
    assert!(matches!(args[1], Argument::Spread(_)));
    assert!(matches!(*callee, Expr::Member { property: MemberProp::Computed(_), .. }));
}

#[test]
fn keyword_member_names() {
    assert!(matches!(
        parse_expr("obj.default"),
        Expr::Member { property: MemberProp::Named(ref name), .. } if name.as_ref() == "default"
    ));
}

#[test]
fn optional_chain_wraps_whole_chain() {
    let Expr::Chain { expr, .. } = parse_expr("a?.b.c()") else {
        panic!("expected chain");
    };
    let Expr::Call { callee, .. } = *expr else {
        panic!("expected call inside chain");
    };
    let Expr::Member { object, optional: false, .. } = *callee else {
        panic!("expected member");
    };
    assert!(matches!(*object, Expr::Member { optional: true, .. }));
}

#[test]
fn optional_call_and_index() {
    assert!(matches!(parse_expr("f?.()"), Expr::Chain { .. }));
    assert!(matches!(parse_expr("a?.[0]"), Expr::Chain { .. }));
}

#[test]
fn new_with_and_without_arguments() {
    assert!(matches!(parse_expr("new Error('x')"), Expr::New { ref args, .. } if args.len() == 1));
    assert!(matches!(parse_expr("new Thing"), Expr::New { ref args, .. } if args.is_empty()));
}

#[test]
fn sequence_expression() {
    assert!(matches!(parse_expr("a, b, c"), Expr::Sequence { ref exprs, .. } if exprs.len() == 3));
}

#[test]
fn array_holes_and_spread() {
    let Expr::Array { elements, .. } = parse_expr("[1, , ...xs, 3,]") else {
        panic!("expected array");
    };
    assert_eq!(elements.len(), 4);
    assert!(matches!(&elements[1], ArrayElement::Item(Expr::Ident { name, .. }) if name.as_ref() == "undefined"));
    assert!(matches!(elements[2], ArrayElement::Spread(_)));
}

#[test]
fn object_literal_forms() {
    let Expr::Object { props, .. } = parse_expr("({ a: 1, b, 'c d': 2, 3: x, [k]: v, m() {}, ...rest })") else {
        panic!("expected object");
    };
    assert_eq!(props.len(), 7);
    assert!(matches!(&props[1], ObjectProp::KeyValue { value: Expr::Ident { .. }, .. }));
    assert!(matches!(&props[2], ObjectProp::KeyValue { key: PropKey::Named(k), .. } if k.as_ref() == "c d"));
    assert!(matches!(&props[3], ObjectProp::KeyValue { key: PropKey::Named(k), .. } if k.as_ref() == "3"));
    assert!(matches!(&props[4], ObjectProp::KeyValue { key: PropKey::Computed(_), .. }));
    assert!(matches!(&props[5], ObjectProp::KeyValue { value: Expr::Function(_), .. }));
    assert!(matches!(props[6], ObjectProp::Spread(_)));
}

#[test]
fn template_segments() {
    let Expr::Template { segments, .. } = parse_expr("`a ${x + 1} b`") else {
        panic!("expected template");
    };
    assert_eq!(segments.len(), 3);
    assert!(matches!(&segments[0], TemplateSegment::Text(t) if t == "a "));
    assert!(matches!(&segments[1], TemplateSegment::Expr(Expr::Binary { op: BinaryOp::Add, .. })));
    assert!(matches!(&segments[2], TemplateSegment::Text(t) if t == " b"));
}

#[test]
fn interpolation_spans_point_into_source() {
    let source = "`value: ${answer}`";
    let Expr::Template { segments, .. } = parse_expr(source) else {
        panic!("expected template");
    };
    let TemplateSegment::Expr(expr) = &segments[1] else {
        panic!("expected interpolation");
    };
    let span = expr.span();
    assert_eq!(&source[span.start..span.end], "answer");
}

#[test]
fn typeof_void_delete() {
    assert!(matches!(parse_expr("typeof x"), Expr::Unary { op: UnaryOp::Typeof, .. }));
    assert!(matches!(parse_expr("void 0"), Expr::Unary { op: UnaryOp::Void, .. }));
    assert!(matches!(parse_expr("delete o.k"), Expr::Unary { op: UnaryOp::Delete, .. }));
}

#[test]
fn in_and_instanceof() {
    let expr = parse_expr("'a' in o");
    binary(&expr, BinaryOp::In);
    let expr = parse_expr("e instanceof Error");
    binary(&expr, BinaryOp::Instanceof);
}
