pub mod admin;
pub mod comments;
pub mod error;
pub mod media;
pub mod posts;
pub mod profile;

pub use error::{ApiError, ApiResult};
