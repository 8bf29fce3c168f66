use crate::export::ExportError;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failure loading sites: {source}")]
    StoreError {
        #[from]
        source: StoreError,
    },
    #[error("failure exporting rankings: {source}")]
    ExportError {
        #[from]
        source: ExportError,
    },
}
