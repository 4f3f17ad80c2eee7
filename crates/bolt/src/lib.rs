pub mod error;
pub mod record;

pub use error::{BoltError, BoltResult, SharedCause};
pub use record::{BoltErrorRecord, MAX_CAUSE_DEPTH, RecordError, RemoteCause, SERIAL_VERSION_UID};
