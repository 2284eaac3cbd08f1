use anyhow::Result;

use lexchat::{config, logging, ui};

#[tokio::main]
async fn main() -> Result<()> {
    config::initialize_config()?;
    let _logger = logging::init(&config::get_config().log_level)?;

    log::info!("starting lexchat against {}", config::get_config().base_url);
    ui::run_ui().await?;
    log::info!("goodbye");

    Ok(())
}
