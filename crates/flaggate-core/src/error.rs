//! Unified Error Model
//!
//! A failed stage is a verdict, not an error. These variants cover the
//! conditions that stop a validation from happening at all.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("PROFILE/{0}")]
    ProfileError(String),

    #[error("INPUT/{0}")]
    InputError(String),

    #[error("SERIALIZE/{0}")]
    SerializeError(String),

    #[error("IO/{0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GateError {
    fn from(err: serde_json::Error) -> Self {
        GateError::SerializeError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_prefixes() {
        let err = GateError::ProfileError("prefix must not be empty".to_string());
        assert_eq!(err.to_string(), "PROFILE/prefix must not be empty");

        let err = GateError::InputError("no candidate".to_string());
        assert_eq!(err.to_string(), "INPUT/no candidate");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: GateError = io.into();
        assert!(err.to_string().starts_with("IO/"));
    }
}
