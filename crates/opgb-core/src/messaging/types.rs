use crate::domain::{ChatId, MessageRef};

/// Incoming update, already stripped of transport-specific fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncomingUpdate {
    Command {
        chat_id: ChatId,
        name: String,
    },
    Text {
        chat_id: ChatId,
        text: String,
    },
    Callback {
        chat_id: ChatId,
        data: String,
        /// Message the pressed button belongs to, when the platform still has it.
        message: Option<MessageRef>,
    },
}

impl IncomingUpdate {
    /// Build a `Text` or `Command` update from raw message text.
    ///
    /// Telegram may send `/cmd@botname arg1 ...`; the bot suffix and any
    /// arguments are dropped and the command name lowercased.
    pub fn from_text(chat_id: ChatId, text: &str) -> Self {
        let trimmed = text.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return IncomingUpdate::Text {
                chat_id,
                text: text.to_string(),
            };
        };

        let first = rest.split(char::is_whitespace).next().unwrap_or("");
        let name = first.split('@').next().unwrap_or("").to_lowercase();

        IncomingUpdate::Command { chat_id, name }
    }

    pub fn chat_id(&self) -> ChatId {
        match self {
            IncomingUpdate::Command { chat_id, .. }
            | IncomingUpdate::Text { chat_id, .. }
            | IncomingUpdate::Callback { chat_id, .. } => *chat_id,
        }
    }
}

/// What happens when an inline button is pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Url(String),
    Callback(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub action: ButtonAction,
}

impl InlineButton {
    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Url(url.into()),
        }
    }

    pub fn callback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(data.into()),
        }
    }
}

/// Inline keyboard laid out as rows of buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

impl InlineKeyboard {
    pub fn new(rows: Vec<Vec<InlineButton>>) -> Self {
        Self { rows }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &InlineButton> {
        self.rows.iter().flatten()
    }

    /// Callback payloads carried by this keyboard, in layout order.
    pub fn callback_tokens(&self) -> Vec<&str> {
        self.buttons()
            .filter_map(|b| match &b.action {
                ButtonAction::Callback(data) => Some(data.as_str()),
                ButtonAction::Url(_) => None,
            })
            .collect()
    }
}
