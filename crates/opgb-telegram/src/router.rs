use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use opgb_core::{
    config::Config,
    event_loop,
    messaging::{port::MessagingPort, types::IncomingUpdate},
    navigation::Navigator,
    store::ChatStore,
};

use crate::handlers;
use crate::signals;
use crate::TelegramMessenger;

/// Shared with every teloxide handler.
#[derive(Clone)]
pub struct AppState {
    pub updates: mpsc::UnboundedSender<IncomingUpdate>,
}

/// Run the bot until SIGINT/SIGTERM.
///
/// Fails only during startup (rejected token); once polling runs, every
/// per-update failure is contained in the navigator.
pub async fn run_polling(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_api_token.clone());

    let me = bot
        .get_me()
        .await
        .map_err(|e| anyhow::anyhow!("telegram rejected the API token: {e}"))?;
    info!(username = %me.username(), "authorized");

    if !cfg.promo_photo_path.is_file() {
        warn!(
            path = %cfg.promo_photo_path.display(),
            "promo photo not found, screens will fail to send until it exists"
        );
    }
    info!(mode = ?cfg.screen_mode, "screen mode");

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let navigator = Navigator::new(
        Arc::new(ChatStore::new()),
        messenger,
        cfg.promo_photo_path.clone(),
        cfg.screen_mode,
    );

    let (tx, rx) = mpsc::unbounded_channel();
    let state = Arc::new(AppState { updates: tx });

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|_| async {})
        .build();
    let polling_shutdown = dispatcher.shutdown_token();
    let polling = tokio::spawn(async move { dispatcher.dispatch().await });

    let shutdown = CancellationToken::new();
    tokio::spawn(signals::cancel_on_signal(shutdown.clone()));

    let dispatched = event_loop::run(rx, &navigator, shutdown).await;
    info!(dispatched, "stopping update polling");

    match polling_shutdown.shutdown() {
        Ok(done) => {
            done.await;
            let _ = polling.await;
        }
        // Dispatcher never got going; nothing to drain.
        Err(_) => polling.abort(),
    }

    Ok(())
}
