//! Text dumps of the two intermediate forms.
//!
//! - tokens: one line per token, readable back into a token list
//! - ast: pre-order node dump, readable back into a tree
//!
//! A token dump can be fed straight to the parser, so `lex` and `parse` can
//! run as separate steps.

pub mod ast;
pub mod tokens;

#[cfg(test)]
mod tests;
