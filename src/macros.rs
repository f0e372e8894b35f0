//! Utility macros for the compiler front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Used by both the lexer and the token dump reader, which build tokens the
//! same way.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's payload (empty for operators and keywords)
/// * `$pos` - The source position of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), Position::new(1, 1));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $pos:expr) => {
        Token {
            kind: $kind,
            value: $value,
            pos: $pos,
        }
    };
}
