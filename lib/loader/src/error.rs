use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column not found: {0} (tried: {1})")]
    MissingColumn(&'static str, String),

    #[error("No usable rows in catalog source")]
    Empty,

    #[error("Catalog error: {0}")]
    Catalog(#[from] peergrid_core::Error),
}
