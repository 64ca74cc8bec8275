use std::sync::Arc;

use teloxide::prelude::*;
use tracing::warn;

use opgb_core::{
    domain::{ChatId, MessageId, MessageRef},
    messaging::types::IncomingUpdate,
};

use crate::router::AppState;

use super::enqueue;

/// Build the core update for a button press.
///
/// Presses on messages Telegram no longer exposes (no chat to answer into) and
/// presses without payload are dropped.
pub fn callback_update(
    chat_id: Option<i64>,
    message_id: Option<i32>,
    data: Option<&str>,
) -> Option<IncomingUpdate> {
    let chat_id = ChatId(chat_id?);
    let data = data.filter(|d| !d.is_empty())?;

    Some(IncomingUpdate::Callback {
        chat_id,
        data: data.to_string(),
        message: message_id.map(|id| MessageRef {
            chat_id,
            message_id: MessageId(id),
        }),
    })
}

pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    // Always answer so the client stops showing the spinner.
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(error = %e, "failed to answer callback query");
    }

    let update = callback_update(
        q.message.as_ref().map(|m| m.chat.id.0),
        q.message.as_ref().map(|m| m.id.0),
        q.data.as_deref(),
    );
    if let Some(update) = update {
        enqueue(&state, update);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_with_message_keeps_reference() {
        let u = callback_update(Some(12345), Some(77), Some("ru")).unwrap();
        assert_eq!(
            u,
            IncomingUpdate::Callback {
                chat_id: ChatId(12345),
                data: "ru".to_string(),
                message: Some(MessageRef {
                    chat_id: ChatId(12345),
                    message_id: MessageId(77),
                }),
            }
        );
    }

    #[test]
    fn press_without_chat_or_payload_is_dropped() {
        assert_eq!(callback_update(None, None, Some("en")), None);
        assert_eq!(callback_update(Some(1), Some(2), None), None);
        assert_eq!(callback_update(Some(1), Some(2), Some("")), None);
    }

    #[test]
    fn unknown_payload_is_still_forwarded() {
        let u = callback_update(Some(1), None, Some("something_else")).unwrap();
        assert!(matches!(u, IncomingUpdate::Callback { message: None, .. }));
    }
}
