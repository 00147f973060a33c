use std::{
    fs,
    io::{self, Read},
    path::Path,
    rc::Rc,
};

/// Source text together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// The full text.
    pub text: String,
    /// The file the text was read from. `None` for standard input and for
    /// in-memory sources.
    pub path: Option<Rc<Path>>,
}

impl Source {
    /// Wraps in-memory text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(),
               path: None }
    }

    /// Reads a whole file.
    ///
    /// # Errors
    /// Returns the I/O error if the file cannot be opened or is not valid
    /// UTF-8.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Ok(Self { text,
                  path: Some(Rc::from(path)) })
    }

    /// Reads everything from `reader`, typically standard input.
    ///
    /// # Errors
    /// Returns the I/O error if reading fails or the input is not valid UTF-8.
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::new(text))
    }
}
