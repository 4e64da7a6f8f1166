use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("CSV parse error in {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("CSV write error for {file}: {source}")]
    Write {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("invalid value for {column}: {value:?}")]
    InvalidValue { column: String, value: String },

    #[error("required column missing from input: {0}")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, EtlError>;
