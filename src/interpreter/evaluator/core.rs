use crate::{
    ast::{Node, Number},
    error::RuntimeError,
    interpreter::value::{
        array::Array,
        core::Value,
        record::{Record, RecordRef},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The name under which every call binds its receiver.
pub const THIS: &str = "this";

/// One execution frame.
///
/// A frame owns a local record and links to the frame that created it. Name
/// resolution walks this chain: first the local record, then the parent's,
/// and so on up to the root.
///
/// The parent of a call frame is the frame of the *caller*, not the frame the
/// function was defined in. A function body therefore sees whatever bindings
/// are live along the current call chain (dynamic scoping). Functions carry no
/// captured environment, so there is nothing lexical to fall back on.
///
/// Frames live on the host stack and are dropped when their call or block
/// finishes.
///
/// ## Usage
///
/// A root frame is created over the module record; every call and loop
/// derives a child frame from the frame it runs in.
pub struct Context<'p> {
    locals: RecordRef,
    parent: Option<&'p Context<'p>>,
}

impl<'p> Context<'p> {
    /// Creates a frame with no parent, using `locals` as its record.
    #[must_use]
    pub const fn root(locals: RecordRef) -> Self {
        Self { locals,
               parent: None }
    }

    /// Creates a frame below `parent` with a fresh local record.
    #[must_use]
    pub fn with_parent(parent: &'p Context<'p>, locals: Record) -> Self {
        Self { locals: locals.into_shared(),
               parent: Some(parent), }
    }

    /// The frame's own record.
    #[must_use]
    pub const fn locals(&self) -> &RecordRef {
        &self.locals
    }

    /// The frame this one was created from.
    #[must_use]
    pub const fn parent(&self) -> Option<&Context<'p>> {
        self.parent
    }

    /// The number of frames in the chain, this one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        std::iter::successors(Some(self), |frame| frame.parent).count()
    }

    /// Resolves `name` along the frame chain.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnresolvedName` if no frame in the chain has a
    /// slot for `name`.
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        let mut frame = Some(self);
        while let Some(current) = frame {
            if let Some(value) = current.locals.borrow().find(name) {
                return Ok(value.clone());
            }
            frame = current.parent;
        }
        Err(RuntimeError::UnresolvedName { name: name.to_string() })
    }

    /// Reads `name` from this frame's own record only.
    ///
    /// Native functions use this to read their parameters.
    ///
    /// # Errors
    /// Returns `RuntimeError::MemberNotFound` if the local record has no slot
    /// for `name`.
    pub fn local(&self, name: &str) -> EvalResult<Value> {
        self.locals.borrow().at(name).cloned()
    }

    /// Declares `name` in this frame's record.
    ///
    /// # Errors
    /// Returns `RuntimeError::DuplicateDeclaration` if the name is already
    /// declared in this frame. Declarations in parent frames do not count.
    pub fn declare(&self, name: &str) -> EvalResult<()> {
        self.locals.borrow_mut().declare(name).map(drop)
    }

    /// Writes `value` to the nearest frame that has a slot for `name`.
    ///
    /// When no frame in the chain has one, the slot is created in this frame.
    pub fn assign(&self, name: &str, value: Value) {
        let mut frame = Some(self);
        while let Some(current) = frame {
            if let Some(slot) = current.locals.borrow_mut().find_mut(name) {
                *slot = value;
                return;
            }
            frame = current.parent;
        }
        self.locals.borrow_mut().set(name, value);
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main entry point for node evaluation. Side effects of
    /// already evaluated nodes are kept when a later one fails.
    ///
    /// # Example
    /// ```
    /// use sprout::{
    ///     ast::Node,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         lexer::{Token, TokenType},
    ///         value::{core::Value, record::Record},
    ///     },
    /// };
    ///
    /// let root = Context::root(Record::new().into_shared());
    /// let name = Token::synthetic("x", TokenType::Identifier);
    ///
    /// root.eval(&Node::Declaration { name: name.clone() }).unwrap();
    /// assert_eq!(root.eval(&Node::Variable { name }).unwrap(), Value::Void);
    /// ```
    pub fn eval(&self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Declaration { name } => {
                self.declare(&name.text)?;
                Ok(Value::Void)
            },
            Node::Assignment { left, right } => self.eval_assignment(left, right),
            Node::Variable { name } => self.lookup(&name.text),
            Node::Call { callee, arguments } => self.eval_call(callee, arguments),
            Node::MemberCall { object,
                               member,
                               arguments, } => {
                self.eval_member_call(object, &member.text, arguments)
            },
            Node::StringLiteral { token } => Ok(Value::String(unquote(&token.text).to_string())),
            Node::NumericLiteral { value: Number::Int(n), .. } => Ok(Value::Int(*n)),
            Node::NumericLiteral { value: Number::Float(x), .. } => Ok(Value::Float(*x)),
            Node::BoolLiteral { value, .. } => Ok(Value::Bool(*value)),
            Node::ArrayLiteral { .. } => Ok(Array::new().into()),
            Node::ForLoop(for_loop) => self.eval_for(for_loop),
        }
    }

    /// Evaluates `left = right`.
    ///
    /// The right side is evaluated first. A declaration on the left creates the
    /// slot in this frame before it is written; a variable on the left is
    /// written where it resolves (see [`Context::assign`]). The assigned value
    /// is the result.
    fn eval_assignment(&self, left: &Node, right: &Node) -> EvalResult<Value> {
        let value = self.eval(right)?;
        match left {
            Node::Declaration { name } => {
                *self.locals.borrow_mut().declare(&name.text)? = value.clone();
            },
            Node::Variable { name } => self.assign(&name.text, value.clone()),
            _ => return Err(RuntimeError::NotAssignable),
        }
        Ok(value)
    }
}

/// Strips the enclosing quotes of a string literal token. No escape sequences
/// are processed.
fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}
