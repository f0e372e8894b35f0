//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: '@',
            code: 64,
        },
        Position::new(3, 10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            found: "Semicolon".to_string(),
        },
        Position::new(42, 7),
    );

    assert_eq!(error.get_position().line, 42);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_error_display_includes_location() {
    let error = Error::new(ErrorImpl::MultiCharacterConstant, Position::new(2, 5));

    assert_eq!(error.to_string(), "multi-character constant in line 2, column 5");
}

#[test]
fn test_unrecognised_character_message_has_code() {
    let error = ErrorImpl::UnrecognisedCharacter {
        character: '#',
        code: 35,
    };

    assert_eq!(error.to_string(), "unrecognized character: (35) '#'");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "RightParen".to_string(),
            found: "Semicolon".to_string(),
        },
        Position::new(1, 1),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_internal_error().to_string(),
        "expecting RightParen, found Semicolon"
    );
}

#[test]
fn test_lexical_error_kinds() {
    let lexical = [
        ErrorImpl::UnterminatedString,
        ErrorImpl::NewlineInString,
        ErrorImpl::UnterminatedComment,
        ErrorImpl::UnterminatedCharacter,
        ErrorImpl::UnknownEscape { escape: 't' },
        ErrorImpl::MultiCharacterConstant,
        ErrorImpl::EmptyCharacterConstant,
        ErrorImpl::InvalidToken {
            token: "1abc".to_string(),
        },
    ];

    for error_impl in lexical {
        let error = Error::new(error_impl, Position::new(1, 1));
        assert_eq!(error.kind(), ErrorKind::Lexical, "{}", error.get_error_name());
    }
}

#[test]
fn test_format_error_kinds() {
    let format = [
        ErrorImpl::UnknownTokenKind {
            name: "Op_power".to_string(),
        },
        ErrorImpl::MalformedTokenLine {
            line: "garbage".to_string(),
        },
        ErrorImpl::UnknownNodeKind {
            name: "Loop".to_string(),
        },
        ErrorImpl::MalformedAst {
            message: "unexpected end of input".to_string(),
        },
    ];

    for error_impl in format {
        let error = Error::new(error_impl, Position::new(1, 0));
        assert_eq!(error.kind(), ErrorKind::Format, "{}", error.get_error_name());
    }
}

#[test]
fn test_statement_error_is_syntax() {
    let error = Error::new(
        ErrorImpl::ExpectedStatement {
            found: "RightBrace".to_string(),
        },
        Position::new(1, 1),
    );

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_error_name(), "ExpectedStatement");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "Semicolon".to_string(),
            found: "RightBrace".to_string(),
        },
        Position::new(1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("did you miss a semicolon?")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_unknown_escape_tip() {
    let error = Error::new(ErrorImpl::UnknownEscape { escape: 't' }, Position::new(1, 1));

    assert_eq!(
        error.get_tip().to_string(),
        "unknown escape sequence `\\t`, only `\\n` and `\\\\` are supported"
    );
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 128 }, Position::new(2, 9));

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(
        error.to_string(),
        "nesting deeper than 128 levels in line 2, column 9"
    );
    assert!(error.get_tip().to_string().contains("temporary variables"));
}
