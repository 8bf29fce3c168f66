use clap::Subcommand;
use serde::{Deserialize, Serialize};

use super::app_error::AppError;
use crate::export;
use crate::model;
use crate::store;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum SiterankOperation {
    /// rank every plant/port site pairing by planar distance, closest
    /// first, and export the ranking as a delimited table
    Rank {
        /// path to the sqlite store holding the location and ports tables
        #[arg(long, default_value_t=String::from("renewable.db"))]
        database: String,
        /// output path for the ranked pairings
        #[arg(long, default_value_t=String::from("output.csv"))]
        output: String,
    },
}

impl SiterankOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            SiterankOperation::Rank { database, output } => {
                let (plants, ports) = store::load_sites(database)?;
                log::info!(
                    "loaded {} plants and {} ports from {}",
                    plants.len(),
                    ports.len(),
                    database
                );
                let rankings = model::rank_pairs(&plants, &ports);
                log::info!("ranked {} plant/port pairings", rankings.len());
                export::write_rankings(&rankings, output)?;
                log::info!("wrote rankings to {}", output);
                Ok(())
            }
        }
    }
}
