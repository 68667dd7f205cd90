pub mod capture;
pub mod keycodes;
pub mod replay;

/// A problem with a capture file, with the line it was found on.
#[derive(Debug, PartialEq, Eq)]
pub struct CaptureError {
    pub message: String,
    pub line: Option<usize>,
}

impl std::fmt::Display for CaptureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}\n    at line: {}", &self.message, line),
            None => write!(f, "{}", &self.message),
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<std::io::Error> for CaptureError {
    fn from(err: std::io::Error) -> Self {
        Self {
            message: err.to_string(),
            line: None,
        }
    }
}

impl From<&str> for CaptureError {
    fn from(err: &str) -> Self {
        Self {
            message: err.to_string(),
            line: None,
        }
    }
}

impl CaptureError {
    pub fn new(message: String, line: usize) -> Self {
        Self {
            message,
            line: Some(line),
        }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
