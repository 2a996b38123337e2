// crates/ayayron-types/src/error.rs
// Error types shared by the front ends

use thiserror::Error;

use crate::routes::RouteError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("route table error: {0}")]
    Route(#[from] RouteError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("mount error: {0}")]
    Mount(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
