//! AST types for parsed mapping expressions.

/// A literal value appearing in mapping source, either standalone or as a
/// call argument. Arguments are literal-only because constructors resolve
/// them once, at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

/// A mapping query expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A bare literal, e.g. `"hello"`.
    Literal(Literal),
    /// A vocabulary function call, e.g. `greeting()`.
    FunctionCall { name: String, args: Vec<Literal> },
    /// A chained method call, e.g. the `.shout()` in `greeting().shout()`.
    /// The target is whatever expression the method is chained after.
    MethodCall {
        target: Box<Expr>,
        name: String,
        args: Vec<Literal>,
    },
}
