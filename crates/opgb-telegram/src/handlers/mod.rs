//! Telegram update handlers.
//!
//! Handlers only translate teloxide types into `IncomingUpdate` and queue them
//! for the core event loop; all decisions happen in `opgb-core`.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message},
};
use tracing::debug;

use opgb_core::messaging::types::IncomingUpdate;

use crate::router::AppState;
mod callback;
mod text;

pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    callback::handle_callback(bot, q, state).await
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    text::handle_text(msg, state).await
}

fn enqueue(state: &AppState, update: IncomingUpdate) {
    if let Err(e) = state.updates.send(update) {
        debug!(update = ?e.0, "event loop is gone, dropping update");
    }
}
