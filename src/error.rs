use crate::transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum AmiiboError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unable to encode API endpoint: {0}")]
    Encoding(String),

    /// A transport failure caused by missing or broken connectivity. The
    /// original error (kind and message) is kept as the source.
    #[error("Unable to connect to the server")]
    Connectivity(#[source] TransportError),

    #[error("{0}")]
    Transport(#[source] TransportError),

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unable to parse lastUpdated to a timestamp: {0}")]
    TimestampParse(String),

    /// Local I/O failure outside any request, such as starting the runtime of
    /// the blocking client.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AmiiboError {
    /// The underlying transport failure, if this error came from the network.
    pub fn transport(&self) -> Option<&TransportError> {
        match self {
            AmiiboError::Connectivity(e) | AmiiboError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TransportError> for AmiiboError {
    fn from(err: TransportError) -> Self {
        if err.kind().is_connectivity() {
            AmiiboError::Connectivity(err)
        } else {
            AmiiboError::Transport(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, AmiiboError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportErrorKind;

    #[test]
    fn io_error_is_not_a_transport_failure() {
        let err: AmiiboError = std::io::Error::new(std::io::ErrorKind::Other, "too many open files").into();

        assert!(matches!(err, AmiiboError::Io(_)));
        assert!(err.transport().is_none());
        assert_eq!(err.to_string(), "IO error: too many open files");
    }

    #[test]
    fn transport_error_splits_on_kind() {
        let lost: AmiiboError = TransportError::new(TransportErrorKind::ConnectionLost, "reset").into();
        assert!(matches!(lost, AmiiboError::Connectivity(_)));

        let other: AmiiboError = TransportError::new(TransportErrorKind::Other, "bad certificate").into();
        assert!(matches!(other, AmiiboError::Transport(_)));
        assert_eq!(other.to_string(), "bad certificate");
    }
}
