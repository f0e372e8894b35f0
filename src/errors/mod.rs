//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while scanning, parsing and reading
//! dumps. It includes:
//!
//! - A positioned error structure with a line and column
//! - Specific error variants for each failure, grouped into lexical,
//!   syntax and format errors
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
