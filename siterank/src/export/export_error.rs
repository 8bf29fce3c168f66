use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failure creating export destination '{path}': {source}")]
    DestinationUnwritable { path: PathBuf, source: csv::Error },
    #[error("failure writing ranked row: {source}")]
    RowWrite {
        #[from]
        source: csv::Error,
    },
    #[error("failure flushing export destination: {source}")]
    Flush {
        #[from]
        source: std::io::Error,
    },
}
