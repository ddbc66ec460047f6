//! Types shared between the GUI and the backend worker: wire protocol for the
//! task processing endpoint, submission identifiers, and envelope errors.

pub mod domain;
pub mod error;
pub mod protocol;
