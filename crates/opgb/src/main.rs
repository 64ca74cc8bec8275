use std::sync::Arc;

use opgb_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), opgb_core::Error> {
    opgb_core::logging::init("opgb")?;

    let cfg = Arc::new(Config::load()?);

    opgb_telegram::router::run_polling(cfg)
        .await
        .map_err(|e| opgb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
