use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::domain::{ChatId, Language, MessageId};

/// Everything the bot remembers about one chat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChatSession {
    pub language: Option<Language>,
    /// Most recent screen message the bot sent into this chat.
    pub last_message_id: Option<MessageId>,
}

/// In-memory per-chat state.
///
/// Sessions are created on first write and live for the process lifetime.
/// Every call takes the lock once, so each read or write is atomic per chat;
/// concurrent writers to the same chat resolve last-writer-wins.
#[derive(Debug, Default)]
pub struct ChatStore {
    inner: Mutex<HashMap<ChatId, ChatSession>>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_language(&self, chat_id: ChatId, language: Language) {
        let mut map = self.inner.lock().await;
        map.entry(chat_id).or_default().language = Some(language);
    }

    pub async fn language(&self, chat_id: ChatId) -> Option<Language> {
        self.inner.lock().await.get(&chat_id).and_then(|s| s.language)
    }

    pub async fn set_last_message_id(&self, chat_id: ChatId, message_id: MessageId) {
        let mut map = self.inner.lock().await;
        map.entry(chat_id).or_default().last_message_id = Some(message_id);
    }

    pub async fn last_message_id(&self, chat_id: ChatId) -> Option<MessageId> {
        self.inner
            .lock()
            .await
            .get(&chat_id)
            .and_then(|s| s.last_message_id)
    }

    pub async fn session(&self, chat_id: ChatId) -> Option<ChatSession> {
        self.inner.lock().await.get(&chat_id).copied()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}
