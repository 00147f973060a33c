use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// An open text file, consumed one line at a time.
pub struct LineReader {
    path:   String,
    reader: BufReader<File>,
}

impl LineReader {
    /// Opens `path` for reading.
    ///
    /// # Errors
    /// Returns `RuntimeError::Io` if the file cannot be opened.
    pub fn open(path: &str) -> EvalResult<Self> {
        let file = File::open(path).map_err(|source| RuntimeError::Io { path: path.to_string(),
                                                                        source })?;
        Ok(Self { path:   path.to_string(),
                  reader: BufReader::new(file), })
    }

    /// Reads the next line without its line terminator.
    ///
    /// Returns `None` at the end of the file.
    ///
    /// # Errors
    /// Returns `RuntimeError::Io` if reading fails or the line is not valid
    /// UTF-8.
    pub fn read_line(&mut self) -> EvalResult<Option<String>> {
        let mut line = String::new();
        let read = self.reader
                       .read_line(&mut line)
                       .map_err(|source| RuntimeError::Io { path: self.path.clone(),
                                                            source })?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

impl fmt::Debug for LineReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineReader")
         .field("path", &self.path)
         .finish_non_exhaustive()
    }
}
