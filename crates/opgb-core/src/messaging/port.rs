use std::path::Path;

use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::InlineKeyboard,
    Result,
};

/// Outbound half of the transport.
///
/// Implementations map their own failures (network, deleted message, rate
/// limits) into `Error::Delivery`; callers never retry.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<MessageRef>;

    async fn send_photo(
        &self,
        chat_id: ChatId,
        photo: &Path,
        caption: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<MessageRef>;

    /// Replace the caption (and keyboard) of a message the bot sent earlier.
    async fn edit_caption(
        &self,
        msg: MessageRef,
        caption: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<MessageRef>;
}
