use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("http error: {message}")]
    Http {
        message: String,
    },

    #[error("json error: {message}")]
    Json {
        message: String,
    },

    #[error("url parse error: {message}")]
    UrlParse {
        message: String,
    },

    #[error("server error: HTTP {status} - {body}")]
    Server {
        status: u16,
        body: String,
    },

    #[error("server rejected request: {message}")]
    Rejected {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("io error: {message}")]
    Io {
        message: String,
    },

    #[error("logger error: {message}")]
    Logger {
        message: String,
    },
}

impl From<reqwest::Error> for TrackerError {
    fn from(error: reqwest::Error) -> Self {
        TrackerError::Http {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(error: serde_json::Error) -> Self {
        TrackerError::Json {
            message: error.to_string(),
        }
    }
}

impl From<url::ParseError> for TrackerError {
    fn from(error: url::ParseError) -> Self {
        TrackerError::UrlParse {
            message: error.to_string(),
        }
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(error: std::io::Error) -> Self {
        TrackerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for TrackerError {
    fn from(error: toml::de::Error) -> Self {
        TrackerError::InvalidConfiguration {
            message: error.to_string(),
        }
    }
}

impl From<log::SetLoggerError> for TrackerError {
    fn from(error: log::SetLoggerError) -> Self {
        TrackerError::Logger {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
