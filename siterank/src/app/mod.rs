mod app_error;
mod operation;
mod siterank_app;

pub use app_error::AppError;
pub use operation::SiterankOperation;
pub use siterank_app::SiterankApp;
