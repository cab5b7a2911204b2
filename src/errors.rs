use std::string::FromUtf8Error;

/// All error types that can occur when driving the bulb.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize a request to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize a reply from JSON.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// A network socket operation failed while talking to the bulb.
    #[error("socket {action} error: {err:?}")]
    Socket { action: String, err: std::io::Error },

    /// The UDP reply from the bulb contained invalid UTF-8.
    #[error("utf8 decoding error: {0:?}")]
    Utf8Decode(FromUtf8Error),

    /// The bulb did not answer within the receive deadline.
    #[error("no reply within {0} ms")]
    Timeout(u64),

    /// A brightness argument outside 0-100.
    #[error("brightness value must be between 0 and 100, got {0}")]
    InvalidBrightness(i64),

    /// The exchange produced no usable reply.
    #[error("no reply from bulb")]
    NoReply,

    /// The status read that precedes a brightness change failed.
    #[error("could not retrieve bulb status")]
    StatusUnavailable,

    /// The bulb reported itself as off.
    #[error("bulb is off")]
    DeviceOff,

    /// An environment setting could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: String, value: String },

    /// No tool is registered under the given name.
    #[error("unknown tool {0}")]
    UnknownTool(String),

    /// A tool argument had the wrong shape.
    #[error("argument {name} {reason}")]
    InvalidArgument { name: String, reason: String },
}

impl Error {
    /// Create a new socket error
    pub fn socket(action: &str, err: std::io::Error) -> Self {
        Error::Socket {
            action: action.to_string(),
            err,
        }
    }

    /// Create a new invalid config error
    pub fn invalid_config(key: &str, value: &str) -> Self {
        Error::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(name: &str, reason: &str) -> Self {
        Error::InvalidArgument {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for receive deadline expiry, the expected "bulb stayed quiet" case.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
