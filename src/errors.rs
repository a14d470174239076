// /src/errors.rs
//! Errors raised around the edit algorithm: replaying scripts, serializing them
//! and crossing the Python boundary. The algorithm itself never fails.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditError {
    #[error("Splice out of range: offset {offset} + {removed} removed items exceeds length {len}")]
    SpliceOutOfRange {
        offset: usize,
        removed: usize,
        len: usize,
    },

    #[error("Move out of range: offset {offset}, count {count}, distance {distance}, length {len}")]
    MoveOutOfRange {
        offset: usize,
        count: usize,
        distance: usize,
        len: usize,
    },

    #[error("Key mismatch at position {position}: spliced-out item does not match the sequence")]
    KeyMismatch { position: usize },

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[cfg(feature = "python-bindings")]
    #[error("Python call failed: {0}")]
    PythonError(String),
}

#[cfg(feature = "python-bindings")]
impl From<EditError> for pyo3::PyErr {
    fn from(err: EditError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(feature = "python-bindings")]
impl From<pyo3::PyErr> for EditError {
    fn from(err: pyo3::PyErr) -> Self {
        EditError::PythonError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_range() {
        let err = EditError::SpliceOutOfRange {
            offset: 4,
            removed: 2,
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "Splice out of range: offset 4 + 2 removed items exceeds length 5"
        );

        let err = EditError::MoveOutOfRange {
            offset: 1,
            count: 1,
            distance: 3,
            len: 4,
        };
        assert!(err.to_string().contains("distance 3"));
    }

    #[test]
    fn serde_errors_convert() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: EditError = serde_err.into();
        assert!(matches!(err, EditError::SerdeError(_)));
    }
}
