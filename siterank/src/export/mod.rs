mod export_error;
mod export_ops;

pub use export_error::ExportError;
pub use export_ops::write_rankings;
