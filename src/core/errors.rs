use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocBuilderError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Vocabulary service unreachable: {0}")]
    Unreachable(Box<reqwest::Error>),

    #[error("Vocabulary service returned HTTP {status}: {body}")]
    RemoteService { status: u16, body: String },

    #[error("Response from {0} has no `data` field")]
    MissingData(String),

    #[error("No study list id given and no default list configured")]
    MissingListId,

    #[error("VocBuilderError: {0}")]
    Custom(String),
}

impl VocBuilderError {
    /// HTTP status of a non-success response, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            VocBuilderError::RemoteService { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of a non-success response.
    pub fn body(&self) -> Option<&str> {
        match self {
            VocBuilderError::RemoteService { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, VocBuilderError::Unreachable(_))
    }
}

impl From<std::io::Error> for VocBuilderError {
    fn from(error: std::io::Error) -> Self {
        VocBuilderError::Io(Box::new(error))
    }
}

// Connect and timeout failures map to `Unreachable`.
impl From<reqwest::Error> for VocBuilderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            VocBuilderError::Unreachable(Box::new(error))
        } else {
            VocBuilderError::Reqwest(Box::new(error))
        }
    }
}

pub type Result<T, E = VocBuilderError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_service_accessors() {
        let err = VocBuilderError::RemoteService { status: 404, body: "not found".to_string() };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some("not found"));
        assert!(!err.is_unreachable());
        assert_eq!(err.to_string(), "Vocabulary service returned HTTP 404: not found");

        let other = VocBuilderError::MissingListId;
        assert_eq!(other.status(), None);
        assert_eq!(other.body(), None);
    }

    #[test]
    fn test_io_error_is_boxed() {
        let err: VocBuilderError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, VocBuilderError::Io(_)));
    }
}
