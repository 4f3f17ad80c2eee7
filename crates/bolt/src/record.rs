//! Serializable form of a [`BoltError`].
//!
//! A record snapshots the message and the display text of every error in the
//! cause chain. Receivers reject records carrying a different
//! [`SERIAL_VERSION_UID`].

use std::error::Error;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::BoltError;

/// Version tag stamped on every record; receivers reject any other value.
pub const SERIAL_VERSION_UID: i64 = -5_789_690_611_856_086_365;

/// Longest cause chain [`BoltError::from_record`] accepts.
pub const MAX_CAUSE_DEPTH: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoltErrorRecord {
    pub serial_version_uid: i64,
    pub message: String,
    /// Outermost cause first.
    #[serde(default)]
    pub causes: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("incompatible serial version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: i64, found: i64 },

    #[error("cause chain too deep: limit {limit}, found {found}")]
    TooDeep { limit: usize, found: usize },

    #[error("malformed error record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Cause rebuilt from a record; only its text survives the trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteCause {
    message: String,
    #[source]
    source: Option<Box<RemoteCause>>,
}

impl RemoteCause {
    pub fn message(&self) -> &str {
        &self.message
    }

    fn chain(causes: &[String]) -> Option<Self> {
        causes.iter().rev().fold(None, |source, message| {
            Some(Self {
                message: message.clone(),
                source: source.map(Box::new),
            })
        })
    }
}

impl BoltErrorRecord {
    pub fn to_json(&self) -> Result<Vec<u8>, RecordError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl BoltError {
    pub fn to_record(&self) -> BoltErrorRecord {
        let mut causes = Vec::new();
        let mut next = self.source();
        while let Some(cause) = next {
            causes.push(cause.to_string());
            next = cause.source();
        }

        BoltErrorRecord {
            serial_version_uid: SERIAL_VERSION_UID,
            message: self.message().to_string(),
            causes,
        }
    }

    pub fn from_record(record: BoltErrorRecord) -> Result<Self, RecordError> {
        if record.serial_version_uid != SERIAL_VERSION_UID {
            return Err(RecordError::IncompatibleVersion {
                expected: SERIAL_VERSION_UID,
                found: record.serial_version_uid,
            });
        }
        if record.causes.len() > MAX_CAUSE_DEPTH {
            return Err(RecordError::TooDeep {
                limit: MAX_CAUSE_DEPTH,
                found: record.causes.len(),
            });
        }

        Ok(match RemoteCause::chain(&record.causes) {
            Some(cause) => BoltError::with_shared_cause(record.message, Arc::new(cause)),
            None => BoltError::new(record.message),
        })
    }
}

impl TryFrom<BoltErrorRecord> for BoltError {
    type Error = RecordError;

    fn try_from(record: BoltErrorRecord) -> Result<Self, Self::Error> {
        BoltError::from_record(record)
    }
}
