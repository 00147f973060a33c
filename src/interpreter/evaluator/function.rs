use log::trace;

use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{Context, EvalResult, THIS},
        value::{
            core::Value,
            function::{Body, Function},
            record::Record,
        },
    },
};

impl Context<'_> {
    /// Calls `function` with positional `arguments` and receiver `this`.
    ///
    /// A fresh record is created for the call. `this` is bound first, then
    /// each parameter is bound to the argument at the same position. Surplus
    /// arguments are ignored; parameters without an argument stay unbound, so
    /// the call itself never fails on arity. Reading such a parameter later
    /// resolves through the rest of the chain and fails if nothing there has
    /// the name.
    ///
    /// The new frame's parent is `self`, the caller.
    ///
    /// # Errors
    /// Propagates any error raised by the body.
    pub fn call(&self, function: &Function, arguments: Vec<Value>, this: Value) -> EvalResult<Value> {
        let mut locals = Record::new();
        locals.set(THIS, this);
        for (param, argument) in function.params.iter().zip(arguments) {
            locals.set(param, argument);
        }

        trace!("call {function:?} at depth {}", self.depth());
        let frame = Context::with_parent(self, locals);
        match &function.body {
            Body::Native(native) => native(&frame),
            Body::Script(block) => frame.run_block(block),
        }
    }

    /// Evaluates `callee(arguments...)`.
    ///
    /// The callee is evaluated before the arguments, which are evaluated left
    /// to right. The receiver is `Void`.
    pub(crate) fn eval_call(&self, callee: &Node, arguments: &[Node]) -> EvalResult<Value> {
        let callee = self.eval(callee)?;
        let function = callee.as_function()?;
        let arguments = self.eval_arguments(arguments)?;
        self.call(function, arguments, Value::Void)
    }

    /// Evaluates `object.member(arguments...)`.
    ///
    /// The member must be a function stored in the record the object evaluates
    /// to. The object is passed only as the receiver (`this`); it does not
    /// occupy an argument position.
    pub(crate) fn eval_member_call(&self,
                                   object: &Node,
                                   member: &str,
                                   arguments: &[Node])
                                   -> EvalResult<Value> {
        let object = self.eval(object)?;
        let function = object.member_function(member)?;
        let arguments = self.eval_arguments(arguments)?;
        self.call(&function, arguments, object)
    }

    fn eval_arguments(&self, arguments: &[Node]) -> EvalResult<Vec<Value>> {
        arguments.iter().map(|argument| self.eval(argument)).collect()
    }
}
