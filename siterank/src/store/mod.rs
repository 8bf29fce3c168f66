mod store_error;
mod store_ops;

pub use store_error::StoreError;
pub use store_ops::load_sites;
