// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    let_kw = { "let", Some(Keyword::Let) },
    instanceof_kw = { "instanceof", Some(Keyword::Instanceof) },
    class_kw = { "class", Some(Keyword::Class) },
    of_is_contextual = { "of", None },
    async_is_contextual = { "async", None },
    case_sensitive = { "Let", None },
)]
fn keyword_lookup(word: &str, expected: Option<Keyword>) {
    assert_eq!(Keyword::from_ident(word), expected);
}

#[test]
fn keyword_round_trips_through_text() {
    for word in ["break", "const", "typeof", "void", "while", "finally"] {
        let kw = Keyword::from_ident(word).unwrap();
        assert_eq!(kw.as_str(), word);
    }
}

#[test]
fn token_kind_display_is_readable() {
    assert_eq!(TokenKind::Punct(Punct::QuestionDot).to_string(), "'?.'");
    assert_eq!(TokenKind::Ident("foo".into()).to_string(), "identifier 'foo'");
    assert_eq!(TokenKind::Keyword(Keyword::Return).to_string(), "keyword 'return'");
    assert_eq!(TokenKind::Str("x".into()).to_string(), "string");
}

#[test]
fn ident_characters() {
    assert!(is_ident_start('$'));
    assert!(is_ident_start('_'));
    assert!(!is_ident_start('1'));
    assert!(is_ident_char('1'));
    assert!(!is_ident_char('-'));
}
