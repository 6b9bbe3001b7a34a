use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::error::JexError;
use crate::json::Document;

/// Read JSON from stdin or a file
pub struct InputReader;

impl InputReader {
    /// Read and parse JSON from a file path, or from stdin when `path` is None
    ///
    /// # Returns
    /// * `Ok(Document)` - Parsed document
    /// * `Err(JexError::NoInput)` - No file given and stdin is a terminal
    /// * `Err(JexError)` - If JSON is invalid or an IO error occurs
    pub fn read_json(path: Option<&Path>) -> Result<Document, JexError> {
        match path {
            Some(file_path) => Self::read_from(File::open(file_path)?),
            None => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    return Err(JexError::NoInput);
                }
                Self::read_from(stdin.lock())
            }
        }
    }

    /// Read everything from `reader` and parse it as one JSON document
    pub fn read_from<R: Read>(mut reader: R) -> Result<Document, JexError> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;

        #[cfg(debug_assertions)]
        log::debug!("Read {} bytes of input", buffer.len());

        Document::parse(buffer)
    }
}
