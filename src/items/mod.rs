//! Response types of the Chrome Web Store items API.
//!
//! The client hands these back exactly as the store sent them. Every field
//! is optional on the wire so that partial or unexpected bodies still
//! deserialize; interpreting them is the caller's job.
//!
//! - [`UploadResponse`]: returned by uploads and status checks
//! - [`PublishResponse`]: returned by publish, either a success record or a
//!   Google API error envelope
//! - [`PublishTarget`]: the audience a publish action targets

mod publish;
mod upload;

pub use publish::{
    PublishError, PublishErrorDetail, PublishFailure, PublishResponse, PublishStatus,
    PublishSuccess, PublishTarget,
};
pub use upload::{ItemError, UploadResponse, UploadState};
