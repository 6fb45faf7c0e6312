use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum NetworkError {
    // Construction errors
    InvalidTopology(String),

    // Per-call shape errors; raised before any buffer or weight is touched
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    // Spec and config files
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NetworkError::InvalidTopology(msg) => write!(f, "Invalid topology: {}", msg),
            NetworkError::DimensionMismatch { what, expected, actual } => write!(
                f,
                "Dimension mismatch: expected {} {} values, got {}",
                expected, what, actual
            ),
            NetworkError::Io(err) => write!(f, "I/O error: {}", err),
            NetworkError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl Error for NetworkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetworkError::Io(err) => Some(err),
            NetworkError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NetworkError {
    fn from(err: std::io::Error) -> NetworkError {
        NetworkError::Io(err)
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> NetworkError {
        NetworkError::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Fails with `DimensionMismatch` unless `actual == expected`.
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::DimensionMismatch { what, expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = check_len("input", 2, 3).unwrap_err();
        assert_eq!(err.to_string(), "Dimension mismatch: expected 2 input values, got 3");
    }

    #[test]
    fn test_check_len_accepts_equal() {
        assert!(check_len("target", 1, 1).is_ok());
    }
}
