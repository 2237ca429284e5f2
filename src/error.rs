//! Application-wide error type.

use thiserror::Error;

use crate::csv_reader::CsvReadError;
use crate::session::SessionError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error(transparent)]
    CsvRead(#[from] CsvReadError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("background task failed: {0}")]
    Task(String),
}
