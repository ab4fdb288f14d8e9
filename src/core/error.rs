//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Sink could not be opened at construction or rotation
    #[error("failed to open sink '{path}': {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Write or flush on an open sink failed
    #[error("sink write failed: {0}")]
    SinkWrite(#[from] std::io::Error),

    /// Configuration file could not be opened
    #[error("could not open configuration file '{path}': {source}")]
    ConfigOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read line by line
    #[error("configuration read failed for '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    /// Create a sink open error with its path
    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration open error
    pub fn config_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::ConfigOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration read error
    pub fn config_read(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::ConfigRead {
            path: path.into(),
            source,
        }
    }
}
