use std::{fmt, rc::Rc};

use crate::{
    ast::Block,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// A host-implemented function body.
///
/// A native receives the frame created for the call. Its arguments are bound
/// in that frame's local record under the declared parameter names, next to
/// `this`.
pub type NativeFn = Rc<dyn Fn(&Context<'_>) -> EvalResult<Value>>;

/// What a function runs when called.
#[derive(Clone)]
pub enum Body {
    /// Parsed statements; the value of the last one is returned.
    Script(Block),
    /// A host callable.
    Native(NativeFn),
}

/// A callable value.
///
/// Functions do not capture the frame they were created in. Names used in the
/// body are resolved through the frame chain of the *caller* at call time.
#[derive(Clone)]
pub struct Function {
    /// Parameter names, bound positionally.
    pub params: Vec<String>,
    /// The code to run.
    pub body:   Body,
}

impl Function {
    /// Creates a function running parsed statements.
    #[must_use]
    pub fn new(params: Vec<String>, body: Block) -> Self {
        Self { params,
               body: Body::Script(body) }
    }

    /// Creates a function backed by a host callable.
    ///
    /// # Example
    /// ```
    /// use sprout::interpreter::{
    ///     evaluator::core::Context,
    ///     value::{core::Value, function::Function, record::Record},
    /// };
    ///
    /// let double = Function::native(&["n"], |context: &Context<'_>| {
    ///     Ok(Value::Int(context.local("n")?.as_int()? * 2))
    /// });
    ///
    /// let root = Context::root(Record::new().into_shared());
    /// let result = root.call(&double, vec![Value::Int(21)], Value::Void).unwrap();
    /// assert_eq!(result, Value::Int(42));
    /// ```
    #[must_use]
    pub fn native<F>(params: &[&str], function: F) -> Self
        where F: Fn(&Context<'_>) -> EvalResult<Value> + 'static
    {
        Self { params: params.iter().map(ToString::to_string).collect(),
               body:   Body::Native(Rc::new(function)), }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = match &self.body {
            Body::Script(block) => format!("{} statement(s)", block.len()),
            Body::Native(_) => "native".to_string(),
        };
        write!(f, "fn({}) {{ {body} }}", self.params.join(", "))
    }
}
