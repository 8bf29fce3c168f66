//! ranks candidate plant and port site pairs by geographic proximity and
//! exports the ranking as a delimited table.
use clap::Parser;
use siterank::app::SiterankApp;

fn main() {
    env_logger::init();
    log::info!("starting app at {}", chrono::Local::now().to_rfc3339());
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = SiterankApp::parse();
    match args.op.run() {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
