#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A name was not found in any frame of the chain.
    UnresolvedName {
        /// The name that was looked up.
        name: String,
    },
    /// A record has no member with the requested name.
    MemberNotFound {
        /// The member name.
        name: String,
    },
    /// A value did not hold the kind an operation required.
    TypeMismatch {
        /// The kind the operation asked for.
        expected: &'static str,
        /// The kind the value actually held.
        found:    &'static str,
    },
    /// A name was declared twice in the same record.
    DuplicateDeclaration {
        /// The name of the declaration.
        name: String,
    },
    /// A value had no boolean interpretation.
    NotConvertibleToBool {
        /// The kind of the value.
        found: &'static str,
    },
    /// The left side of an assignment was neither a declaration nor a name.
    NotAssignable,
    /// Arithmetic overflowed.
    Overflow,
    /// A file could not be opened or read.
    Io {
        /// The path involved.
        path:   String,
        /// The underlying error.
        source: std::io::Error,
    },
    /// The output sink rejected a write.
    Output(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedName { name } => write!(f, "error: can not find '{name}'."),
            Self::MemberNotFound { name } => {
                write!(f, "error: could not find member '{name}' in record.")
            },
            Self::TypeMismatch { expected, found } => {
                write!(f, "error: cannot convert {found} to {expected}.")
            },
            Self::DuplicateDeclaration { name } => {
                write!(f, "error: variable '{name}' already exists.")
            },
            Self::NotConvertibleToBool { found } => {
                write!(f, "error: type {found} is not convertible to bool.")
            },
            Self::NotAssignable => write!(f, "error: left side of '=' cannot be assigned to."),
            Self::Overflow => write!(f, "error: integer overflow."),
            Self::Io { path, source } => write!(f, "error: i/o failure on '{path}': {source}."),
            Self::Output(source) => write!(f, "error: could not write output: {source}."),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } | Self::Output(source) => Some(source),
            _ => None,
        }
    }
}
