mod distance_record;
mod rank_ops;
mod site;
mod site_error;

pub use distance_record::DistanceRecord;
pub use rank_ops::rank_pairs;
pub use site::{Site, SiteKind};
pub use site_error::SiteError;
