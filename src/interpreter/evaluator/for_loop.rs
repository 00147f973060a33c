use log::debug;

use crate::{
    ast::ForLoop,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, record::Record},
    },
};

/// The member function a range must provide.
pub const NEXT: &str = "next";

impl Context<'_> {
    /// Evaluates a `for` loop.
    ///
    /// The loop runs in one child frame: the declaration is evaluated there,
    /// then the range. The range must be a record with a `next` member
    /// function. Before every iteration `next` is called with the range as its
    /// only argument and as its receiver:
    ///
    /// - a truthy result stops the loop;
    /// - a falsy result runs the body in the loop frame, then asks again.
    ///
    /// The result is the value of the last body statement evaluated, or `Void`
    /// if the body never ran. A range whose `next` never returns a truthy
    /// value loops forever.
    ///
    /// # Errors
    /// Fails if the range has no `next` function, if `next` returns a value
    /// with no boolean interpretation, or with any error raised by `next` or
    /// the body.
    ///
    /// # Example
    /// ```
    /// use std::{cell::Cell, rc::Rc};
    ///
    /// use sprout::{
    ///     ast::{ForLoop, Node},
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         lexer::{Token, TokenType},
    ///         value::{core::Value, function::Function, record::Record},
    ///     },
    /// };
    ///
    /// // `next` answers "not done" twice, then "done".
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let next = Function::native(&["range"], move |_| {
    ///     counter.set(counter.get() + 1);
    ///     Ok(Value::Bool(counter.get() > 2))
    /// });
    ///
    /// let mut range = Record::new();
    /// range.set("next", next.into());
    ///
    /// let root = Context::root(Record::new().into_shared());
    /// root.locals().borrow_mut().set("range", range.into());
    ///
    /// fn token(text: &str, ty: TokenType) -> Token {
    ///     Token::synthetic(text, ty)
    /// }
    ///
    /// // for (let i in range) { true; }
    /// let declaration = Node::Declaration { name: token("i", TokenType::Identifier) };
    /// let range = Node::Variable { name: token("range", TokenType::Identifier) };
    /// let body = Node::BoolLiteral { value: true,
    ///                                token: token("true", TokenType::True) };
    /// let for_loop = ForLoop { token:       token("for", TokenType::For),
    ///                          declaration: Box::new(declaration),
    ///                          range:       Box::new(range),
    ///                          body:        vec![body].into(), };
    ///
    /// assert_eq!(root.eval_for(&for_loop).unwrap(), Value::Bool(true));
    /// assert_eq!(calls.get(), 3);
    /// ```
    pub fn eval_for(&self, for_loop: &ForLoop) -> EvalResult<Value> {
        let frame = Context::with_parent(self, Record::new());
        frame.eval(&for_loop.declaration)?;
        let range = frame.eval(&for_loop.range)?;
        let next = range.member_function(NEXT)?;

        let mut last = Value::Void;
        let mut iteration = 0_usize;
        while !frame.call(&next, vec![range.clone()], range.clone())?
                    .truthy()?
        {
            iteration += 1;
            debug!("{}: loop iteration {iteration}", for_loop.token.location);
            last = frame.run_block(&for_loop.body)?;
        }
        Ok(last)
    }
}
