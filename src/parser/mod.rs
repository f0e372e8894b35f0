//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses precedence climbing for
//! expressions and recursive descent for statements:
//!
//! - Statement parsing (assignment, `if`/`else`, `while`, `print`, `putc`)
//! - Expression parsing (binary and unary operators, literals, grouping)
//! - A static operator table with precedence and associativity
//!
//! The first malformed construct aborts the parse; there is no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
