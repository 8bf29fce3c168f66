use super::operation::SiterankOperation;
use clap::Parser;

/// command line tool for ranking candidate plant and port site pairings by
/// geographic proximity
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SiterankApp {
    #[command(subcommand)]
    pub op: SiterankOperation,
}
