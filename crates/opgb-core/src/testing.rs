//! In-memory `MessagingPort` used by unit tests.

use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    messaging::{port::MessagingPort, types::InlineKeyboard},
    Result,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Text {
        chat_id: ChatId,
        text: String,
        keyboard: Option<InlineKeyboard>,
    },
    Photo {
        chat_id: ChatId,
        photo: PathBuf,
        caption: String,
        keyboard: Option<InlineKeyboard>,
    },
    EditCaption {
        msg: MessageRef,
        caption: String,
        keyboard: Option<InlineKeyboard>,
    },
}

/// Records every call; every attempt is recorded even when failing.
pub struct FakeMessenger {
    next_id: Mutex<i32>,
    calls: Mutex<Vec<Call>>,
    failing: AtomicBool,
}

impl FakeMessenger {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(1),
            calls: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Delivery("fake transport is down".to_string()));
        }
        Ok(())
    }

    fn alloc(&self, chat_id: ChatId) -> MessageRef {
        let mut guard = self.next_id.lock().unwrap();
        let id = *guard;
        *guard += 1;
        MessageRef {
            chat_id,
            message_id: MessageId(id),
        }
    }
}

#[async_trait]
impl MessagingPort for FakeMessenger {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<MessageRef> {
        self.record(Call::Text {
            chat_id,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        })?;
        Ok(self.alloc(chat_id))
    }

    async fn send_photo(
        &self,
        chat_id: ChatId,
        photo: &Path,
        caption: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<MessageRef> {
        self.record(Call::Photo {
            chat_id,
            photo: photo.to_path_buf(),
            caption: caption.to_string(),
            keyboard: keyboard.cloned(),
        })?;
        Ok(self.alloc(chat_id))
    }

    async fn edit_caption(
        &self,
        msg: MessageRef,
        caption: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<MessageRef> {
        self.record(Call::EditCaption {
            msg,
            caption: caption.to_string(),
            keyboard: keyboard.cloned(),
        })?;
        Ok(msg)
    }
}
