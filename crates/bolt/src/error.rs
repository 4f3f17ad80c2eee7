use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Upstream error kept by a [`BoltError`]. Shared, never copied.
pub type SharedCause = Arc<dyn Error + Send + Sync + 'static>;

/// The single Bolt error kind: a message, an upstream cause, or both.
#[derive(Clone, Debug)]
pub struct BoltError {
    message: String,
    cause: Option<SharedCause>,
}

pub type BoltResult<T> = Result<T, BoltError>;

impl BoltError {
    /// Builds an error carrying only `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Wraps `cause`; the message becomes the cause's display text.
    pub fn from_cause<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_shared_cause(Arc::new(cause))
    }

    /// Like [`BoltError::from_cause`], keeping the caller's `Arc`.
    pub fn from_shared_cause(cause: SharedCause) -> Self {
        Self {
            message: cause.to_string(),
            cause: Some(cause),
        }
    }

    /// Keeps `message` and `cause` independently.
    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::with_shared_cause(message, Arc::new(cause))
    }

    /// Like [`BoltError::with_cause`], keeping the caller's `Arc`.
    pub fn with_shared_cause(message: impl Into<String>, cause: SharedCause) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// The message, or the cause's text when built from a cause alone.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The upstream error, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// The upstream error as the same `Arc` it was built with.
    pub fn shared_cause(&self) -> Option<&SharedCause> {
        self.cause.as_ref()
    }
}

impl fmt::Display for BoltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for BoltError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}
