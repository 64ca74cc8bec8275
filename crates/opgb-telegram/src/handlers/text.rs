use std::sync::Arc;

use teloxide::prelude::*;

use opgb_core::{domain::ChatId, messaging::types::IncomingUpdate};

use crate::router::AppState;

use super::enqueue;

pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    // Stickers, photos, service messages and the like carry no text.
    let Some(text) = msg.text() else {
        return Ok(());
    };

    enqueue(
        &state,
        IncomingUpdate::from_text(ChatId(msg.chat.id.0), text),
    );
    Ok(())
}
