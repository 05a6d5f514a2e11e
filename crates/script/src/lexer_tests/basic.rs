// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Basic lexer tests: identifiers, keywords, punctuation, comments, line
//! breaks.

use crate::lexer::Lexer;
use crate::token::{Keyword, Punct, TokenKind};

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.into())
}

fn punct(p: Punct) -> TokenKind {
    TokenKind::Punct(p)
}

lex_tests! {
    empty_input: "" => [],
    whitespace_only: "   \t  \n" => [],
    single_ident: "total" => [ident("total")],
    dollar_and_underscore: "$el _tmp" => [ident("$el"), ident("_tmp")],
    unicode_ident: "größe" => [ident("größe")],
}

lex_tests! {
    let_binding: "let x = 1;" => [
        TokenKind::Keyword(Keyword::Let),
        ident("x"),
        punct(Punct::Assign),
        TokenKind::Number(1.0),
        punct(Punct::Semi),
    ],
    contextual_words_are_idents: "of async await" => [ident("of"), ident("async"), ident("await")],
    literal_keywords: "true false null this" => [
        TokenKind::Keyword(Keyword::True),
        TokenKind::Keyword(Keyword::False),
        TokenKind::Keyword(Keyword::Null),
        TokenKind::Keyword(Keyword::This),
    ],
}

lex_tests! {
    longest_match_equality: "a === b !== c == d != e" => [
        ident("a"), punct(Punct::EqEqEq), ident("b"), punct(Punct::BangEqEq),
        ident("c"), punct(Punct::EqEq), ident("d"), punct(Punct::BangEq), ident("e"),
    ],
    arrow_and_spread: "(...xs) => xs" => [
        punct(Punct::LParen), punct(Punct::Ellipsis), ident("xs"), punct(Punct::RParen),
        punct(Punct::Arrow), ident("xs"),
    ],
    optional_chain_and_nullish: "a?.b ?? c" => [
        ident("a"), punct(Punct::QuestionDot), ident("b"), punct(Punct::QuestionQuestion), ident("c"),
    ],
    optional_chain_before_digit_is_conditional: "a?.5:1" => [
        ident("a"), punct(Punct::Question), TokenKind::Number(0.5), punct(Punct::Colon), TokenKind::Number(1.0),
    ],
    exponent_operators: "a ** b **= c" => [
        ident("a"), punct(Punct::StarStar), ident("b"), punct(Punct::StarStarAssign), ident("c"),
    ],
    logical_assignment: "a &&= b ||= c ??= d" => [
        ident("a"), punct(Punct::AndAndAssign), ident("b"), punct(Punct::OrOrAssign),
        ident("c"), punct(Punct::QuestionQuestionAssign), ident("d"),
    ],
    update_operators: "i++ + --j" => [
        ident("i"), punct(Punct::PlusPlus), punct(Punct::Plus), punct(Punct::MinusMinus), ident("j"),
    ],
}

lex_tests! {
    line_comment_skipped: "a // comment\nb" => [ident("a"), ident("b")],
    block_comment_skipped: "a /* x */ b" => [ident("a"), ident("b")],
    division_is_punct: "a / b" => [ident("a"), punct(Punct::Slash), ident("b")],
}

span_tests! {
    ident_spans: "foo bar" => [(0, 3), (4, 7)],
    punct_spans: "a===b" => [(0, 1), (1, 4), (4, 5)],
    unicode_spans: "é + 1" => [(0, 2), (3, 4), (5, 6)],
}

#[test]
fn newline_before_is_recorded() {
    let tokens = Lexer::tokenize("a\nb c /* \n */ d").unwrap();
    let flags: Vec<bool> = tokens.iter().map(|t| t.newline_before).collect();
    assert_eq!(flags, vec![false, true, false, true]);
}

#[test]
fn offset_lexing_shifts_spans() {
    let tokens = Lexer::tokenize_at("x + 1", 10).unwrap();
    assert_eq!(tokens[0].span.start, 10);
    assert_eq!(tokens[2].span.end, 15);
}
