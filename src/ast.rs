use std::rc::Rc;

use crate::interpreter::lexer::Token;

/// An ordered list of statements, shared by every function value and loop
/// that runs it.
///
/// Blocks are immutable once parsed, so the same body can be executed any
/// number of times without copying.
pub type Block = Rc<[Node]>;

/// A literal numeric value as written in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A literal without a `.`, such as `42`.
    Int(i64),
    /// A literal with a `.`, such as `2.5`.
    Float(f64),
}

/// A node of the executable tree.
///
/// Every statement of a module becomes one node. Nodes are plain data; the
/// evaluator dispatches on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `let name`: creates a slot in the current frame.
    Declaration {
        /// The declared identifier.
        name: Token,
    },
    /// `left = right`.
    Assignment {
        /// A declaration or a variable.
        left:  Box<Self>,
        /// The assigned expression.
        right: Box<Self>,
    },
    /// A name resolved through the frame chain, including `this`.
    Variable {
        /// The identifier.
        name: Token,
    },
    /// `callee(arguments...)`.
    Call {
        /// The expression producing the function.
        callee:    Box<Self>,
        /// Argument expressions, in order.
        arguments: Vec<Self>,
    },
    /// `object.member(arguments...)`.
    MemberCall {
        /// The expression producing the record.
        object:    Box<Self>,
        /// The member holding the function.
        member:    Token,
        /// Argument expressions, in order.
        arguments: Vec<Self>,
    },
    /// A string literal. The token text still carries its quotes.
    StringLiteral {
        /// The literal token.
        token: Token,
    },
    /// A numeric literal.
    NumericLiteral {
        /// The parsed number.
        value: Number,
        /// The literal token.
        token: Token,
    },
    /// `true` or `false`.
    BoolLiteral {
        /// The value.
        value: bool,
        /// The keyword token.
        token: Token,
    },
    /// `[]`: a fresh, empty array.
    ArrayLiteral {
        /// The `[` token.
        token: Token,
    },
    /// `for (declaration in range) { body }`.
    ForLoop(ForLoop),
}

/// The parts of a `for` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    /// The `for` keyword.
    pub token:       Token,
    /// Evaluated once in the loop frame before the range.
    pub declaration: Box<Node>,
    /// Must evaluate to a record with a `next` member function.
    pub range:       Box<Node>,
    /// Runs once for every falsy result of `next`.
    pub body:        Block,
}

impl Node {
    /// The token that best identifies the node in messages.
    #[must_use]
    pub fn token(&self) -> &Token {
        match self {
            Self::Declaration { name } | Self::Variable { name } => name,
            Self::Assignment { left, .. } => left.token(),
            Self::Call { callee, .. } => callee.token(),
            Self::MemberCall { member, .. } => member,
            Self::StringLiteral { token }
            | Self::NumericLiteral { token, .. }
            | Self::BoolLiteral { token, .. }
            | Self::ArrayLiteral { token } => token,
            Self::ForLoop(for_loop) => &for_loop.token,
        }
    }
}
