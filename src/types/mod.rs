use thiserror::Error;

mod colors;
mod domain_types;
mod ids;
mod opaque;

pub use colors::*;
pub use domain_types::*;
pub use ids::*;
pub use opaque::*;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid Notion API version: {version} - {reason}")]
    InvalidApiVersion { version: String, reason: String },
}
