/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The Node tree and the NodeKind names used in AST dumps
/// - expressions: Binary and unary operator kinds
pub mod ast;
pub mod expressions;
