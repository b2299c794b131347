use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum UIError {
    IoError(io::Error),
    NotATerminal,
}

impl fmt::Display for UIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UIError::IoError(e) => write!(f, "I/O error: {}", e),
            UIError::NotATerminal => write!(f, "stdin and stdout must be an interactive terminal"),
        }
    }
}

impl Error for UIError {}

impl From<io::Error> for UIError {
    fn from(error: io::Error) -> Self {
        UIError::IoError(error)
    }
}
