use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, record::RecordRef},
    },
};

/// The name the standard library record is bound under.
pub const STD: &str = "std";

/// The name of a module's entry function.
pub const MAIN: &str = "main";

impl Context<'_> {
    /// Runs statements in order in this frame.
    ///
    /// Returns the value of the last statement, or `Void` for an empty block.
    /// Evaluation stops at the first error; effects of earlier statements are
    /// kept.
    ///
    /// # Errors
    /// Propagates the first error raised by a statement.
    pub fn run_block(&self, statements: &[Node]) -> EvalResult<Value> {
        let mut last = Value::Void;
        for statement in statements {
            last = self.eval(statement)?;
        }
        Ok(last)
    }
}

/// Runs a parsed module.
///
/// Binds `std` in the module record, then calls the module's `main` from a
/// root frame over that record. Top-level statements therefore run one frame
/// below the module record: their declarations are local to `main`, while
/// `std` resolves through the chain.
///
/// # Errors
/// Fails if the module has no `main` function, or with the first runtime
/// error raised while running it.
///
/// # Example
/// ```
/// use sprout::interpreter::{
///     evaluator::block::run_module,
///     lexer::{Lexer, Source},
///     parser::module::parse_module,
///     value::{core::Value, record::Record},
/// };
///
/// let source = Source::new("let x = 3; x;");
/// let module = parse_module(&mut Lexer::new(&source)).unwrap();
///
/// let result = run_module(&module, Record::new().into_shared()).unwrap();
/// assert_eq!(result, Value::Int(3));
/// ```
pub fn run_module(module: &RecordRef, std: RecordRef) -> EvalResult<Value> {
    module.borrow_mut().set(STD, std.into());
    let main = Value::from(module.clone()).member_function(MAIN)?;
    let root = Context::root(module.clone());
    root.call(&main, Vec::new(), Value::Void)
}
