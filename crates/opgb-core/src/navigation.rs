//! Per-chat menu navigation.
//!
//! There is no stored state enum: the "state" of a chat is its stored
//! language plus whichever screen message it last received. Each update is
//! classified into an [`Event`] and applied reactively.

use std::{path::PathBuf, sync::Arc};

use tracing::{debug, info, warn};

use crate::{
    catalog::{self, tokens, Screen},
    config::ScreenMode,
    domain::{ChatId, Language, MessageRef},
    messaging::{port::MessagingPort, types::IncomingUpdate},
    store::ChatStore,
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Start,
    SelectLanguage(Language),
    BackToLanguage,
    SupportUs,
}

/// What handling a single update ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Sent(MessageRef),
    Edited(MessageRef),
    /// The transport rejected the call; the event was dropped.
    Failed,
}

/// Map an update to the event it triggers, if any.
pub fn classify(update: &IncomingUpdate) -> Option<Event> {
    match update {
        IncomingUpdate::Command { name, .. } => match name.as_str() {
            "start" => Some(Event::Start),
            _ => None,
        },
        IncomingUpdate::Text { text, .. } => {
            catalog::language_for_label(text).map(Event::SelectLanguage)
        }
        IncomingUpdate::Callback { data, .. } => match data.as_str() {
            tokens::SUPPORT_US => Some(Event::SupportUs),
            tokens::BACK_TO_LANGUAGE => Some(Event::BackToLanguage),
            other => Language::from_code(other).map(Event::SelectLanguage),
        },
    }
}

pub struct Navigator {
    store: Arc<ChatStore>,
    messenger: Arc<dyn MessagingPort>,
    promo_photo: PathBuf,
    mode: ScreenMode,
}

impl Navigator {
    pub fn new(
        store: Arc<ChatStore>,
        messenger: Arc<dyn MessagingPort>,
        promo_photo: impl Into<PathBuf>,
        mode: ScreenMode,
    ) -> Self {
        Self {
            store,
            messenger,
            promo_photo: promo_photo.into(),
            mode,
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &Arc<ChatStore> {
        &self.store
    }

    /// Handle one update. Never fails: delivery errors are logged and the
    /// event is dropped.
    pub async fn handle(&self, update: IncomingUpdate) -> Outcome {
        let chat_id = update.chat_id();
        let Some(event) = classify(&update) else {
            debug!(chat_id = chat_id.0, ?update, "ignoring unrecognized update");
            return Outcome::Ignored;
        };

        if let IncomingUpdate::Callback {
            message: Some(pressed),
            ..
        } = &update
        {
            let last = self.store.last_message_id(chat_id).await;
            if last != Some(pressed.message_id) {
                debug!(
                    chat_id = chat_id.0,
                    pressed = pressed.message_id.0,
                    last = ?last.map(|m| m.0),
                    "button pressed on a message other than the latest screen"
                );
            }
        }

        match self.apply(chat_id, event).await {
            Ok(outcome) => {
                info!(chat_id = chat_id.0, ?event, ?outcome, "handled update");
                outcome
            }
            Err(e) => {
                warn!(chat_id = chat_id.0, ?event, error = %e, "dropping event");
                Outcome::Failed
            }
        }
    }

    async fn apply(&self, chat_id: ChatId, event: Event) -> Result<Outcome> {
        match event {
            Event::Start => self.send_screen(chat_id, Screen::LanguageSelect).await,
            Event::SelectLanguage(lang) => {
                self.store.set_language(chat_id, lang).await;
                self.show(chat_id, Screen::Promo(lang)).await
            }
            // Stored language is kept; only the screen changes.
            Event::BackToLanguage => self.show(chat_id, Screen::LanguageSelect).await,
            Event::SupportUs => {
                let msg = self
                    .messenger
                    .send_text(chat_id, &catalog::support_text(), None)
                    .await?;
                Ok(Outcome::Sent(msg))
            }
        }
    }

    async fn show(&self, chat_id: ChatId, screen: Screen) -> Result<Outcome> {
        if self.mode == ScreenMode::Edit {
            if let Some(message_id) = self.store.last_message_id(chat_id).await {
                let rendered = catalog::render(screen);
                let msg = self
                    .messenger
                    .edit_caption(
                        MessageRef {
                            chat_id,
                            message_id,
                        },
                        rendered.caption,
                        Some(&rendered.keyboard),
                    )
                    .await?;
                return Ok(Outcome::Edited(msg));
            }
        }
        self.send_screen(chat_id, screen).await
    }

    async fn send_screen(&self, chat_id: ChatId, screen: Screen) -> Result<Outcome> {
        let rendered = catalog::render(screen);
        let msg = self
            .messenger
            .send_photo(
                chat_id,
                &self.promo_photo,
                rendered.caption,
                Some(&rendered.keyboard),
            )
            .await?;
        self.store.set_last_message_id(chat_id, msg.message_id).await;
        Ok(Outcome::Sent(msg))
    }
}
