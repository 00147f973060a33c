/// Ordered name/value records.
///
/// A `Record` is the storage behind call frames, object namespaces and a
/// module's root namespace. Declarations keep their insertion order and are
/// found by linear scan.
pub mod record;
/// Function values.
///
/// A function is a list of parameter names plus either a parsed body or a
/// native callable. It captures no environment; the frame it runs in is
/// created at call time.
pub mod function;
/// Array values.
pub mod array;
/// Line-by-line file readers handed out by the standard library.
pub mod file;

pub mod core;
