use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("site store not found at '{0}'")]
    SourceNotFound(String),
    #[error("failure reading site store: {source}")]
    SourceUnavailable {
        #[from]
        source: rusqlite::Error,
    },
    #[error("failure materializing row from table '{table}': {source}")]
    RowError {
        table: String,
        source: rusqlite::Error,
    },
}
