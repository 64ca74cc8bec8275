//! Telegram adapter (teloxide).
//!
//! This crate implements the `opgb-core` MessagingPort over Telegram Bot API
//! and feeds Telegram updates into the core event loop.

use std::path::Path;

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, InputFile},
    ApiError, RequestError,
};
use tracing::debug;

pub mod handlers;
pub mod router;
pub mod signals;

use opgb_core::{
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    messaging::{
        port::MessagingPort,
        types::{ButtonAction, InlineKeyboard},
    },
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn tg_msg_id(message_id: MessageId) -> teloxide::types::MessageId {
        teloxide::types::MessageId(message_id.0)
    }

    fn map_err(e: RequestError) -> Error {
        Error::Delivery(format!("telegram error: {e}"))
    }

    fn msg_ref(chat_id: ChatId, msg: &Message) -> MessageRef {
        MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        }
    }
}

/// Telegram rejects an edit whose caption and markup equal the current ones.
fn is_not_modified(e: &RequestError) -> bool {
    matches!(e, RequestError::Api(ApiError::MessageNotModified))
}

/// Convert a core keyboard into Telegram's inline markup.
pub fn to_markup(keyboard: &InlineKeyboard) -> Result<InlineKeyboardMarkup> {
    let mut rows = Vec::with_capacity(keyboard.rows.len());
    for row in &keyboard.rows {
        let mut buttons = Vec::with_capacity(row.len());
        for b in row {
            let button = match &b.action {
                ButtonAction::Url(raw) => {
                    let url = reqwest::Url::parse(raw)
                        .map_err(|e| Error::External(format!("invalid button url {raw}: {e}")))?;
                    InlineKeyboardButton::url(b.label.clone(), url)
                }
                ButtonAction::Callback(data) => {
                    InlineKeyboardButton::callback(b.label.clone(), data.clone())
                }
            };
            buttons.push(button);
        }
        rows.push(buttons);
    }
    Ok(InlineKeyboardMarkup::new(rows))
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<MessageRef> {
        let mut req = self.bot.send_message(Self::tg_chat(chat_id), text.to_string());
        if let Some(kb) = keyboard {
            req = req.reply_markup(to_markup(kb)?);
        }
        let msg = req.await.map_err(Self::map_err)?;
        Ok(Self::msg_ref(chat_id, &msg))
    }

    async fn send_photo(
        &self,
        chat_id: ChatId,
        photo: &Path,
        caption: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<MessageRef> {
        if !photo.is_file() {
            return Err(Error::Delivery(format!(
                "photo not found: {}",
                photo.display()
            )));
        }

        let mut req = self
            .bot
            .send_photo(Self::tg_chat(chat_id), InputFile::file(photo.to_path_buf()))
            .caption(caption.to_string());
        if let Some(kb) = keyboard {
            req = req.reply_markup(to_markup(kb)?);
        }
        let msg = req.await.map_err(Self::map_err)?;
        Ok(Self::msg_ref(chat_id, &msg))
    }

    async fn edit_caption(
        &self,
        msg: MessageRef,
        caption: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<MessageRef> {
        let mut req = self
            .bot
            .edit_message_caption(Self::tg_chat(msg.chat_id), Self::tg_msg_id(msg.message_id))
            .caption(caption.to_string());
        if let Some(kb) = keyboard {
            req = req.reply_markup(to_markup(kb)?);
        }
        match req.await {
            Ok(edited) => Ok(Self::msg_ref(msg.chat_id, &edited)),
            // Same screen pressed twice; the message already shows it.
            Err(e) if is_not_modified(&e) => {
                debug!(
                    chat_id = msg.chat_id.0,
                    message_id = msg.message_id.0,
                    "caption unchanged"
                );
                Ok(msg)
            }
            Err(e) => Err(Self::map_err(e)),
        }
    }
}
