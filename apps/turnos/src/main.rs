use std::io;

use dotenv::dotenv;
use tracing::info;

use shared_config::AppConfig;
use shared_utils::logging::init_tracing;

mod app;

fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    init_tracing();

    info!("Starting Turnos Medicos");

    let config = AppConfig::from_env();

    app::run(&config, &mut io::stdout().lock())?;

    info!("Done");

    Ok(())
}
