use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("unrecognized site kind '{0}', expected one of: Plant, Port")]
    InvalidKind(String),
}
