pub mod artifact;
pub mod response;

pub use artifact::ImportArtifact;
pub use response::{UploadResponse, GENERIC_UPLOAD_ERROR};
