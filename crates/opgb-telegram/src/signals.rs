use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Cancel `shutdown` once the process receives SIGINT or SIGTERM.
pub async fn cancel_on_signal(shutdown: CancellationToken) {
    if let Err(e) = wait_for_signal().await {
        warn!(error = %e, "failed to install signal handlers; relying on ctrl-c only");
        if signal::ctrl_c().await.is_err() {
            return;
        }
    }
    info!("received stop signal, shutting down");
    shutdown.cancel();
}

async fn wait_for_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        tokio::select! {
            res = signal::ctrl_c() => res?,
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await?;
    }

    Ok(())
}
