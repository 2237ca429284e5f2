use crate::domain::{Transaction, User};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CsvReadError {
    #[error("Path to CSV is invalid: {0}")]
    PathDoesNotExist(String),

    #[error("Failed to read CSV: {0}")]
    IoReadError(String),
}

pub fn open_csv(path: &Path) -> Result<File, CsvReadError> {
    if !path.exists() {
        return Err(CsvReadError::PathDoesNotExist(path.display().to_string()));
    }

    File::open(path).map_err(|err| CsvReadError::IoReadError(format!("{}: {err}", path.display())))
}

/// Deserializes every row of a headed CSV. Empty optional fields become `None`.
pub fn read_records<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>, CsvReadError> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader);

    let mut records: Vec<T> = Vec::new();
    for result in csv_reader.deserialize() {
        match result {
            Ok(record) => records.push(record),
            Err(err) => return Err(CsvReadError::IoReadError(err.to_string())),
        }
    }

    Ok(records)
}

pub fn read_transactions(path: &Path) -> Result<Vec<Transaction>, CsvReadError> {
    let file = open_csv(path)?;
    let records = read_records(BufReader::new(file))?;
    info!(path = %path.display(), count = records.len(), "loaded transactions from CSV");
    Ok(records)
}

pub fn read_users(path: &Path) -> Result<Vec<User>, CsvReadError> {
    let file = open_csv(path)?;
    let records = read_records(BufReader::new(file))?;
    info!(path = %path.display(), count = records.len(), "loaded users from CSV");
    Ok(records)
}
