//! Static bot content: captions, keyboards and the callback tokens they carry.

use crate::{
    domain::Language,
    messaging::types::{InlineButton, InlineKeyboard},
};

/// Callback payloads attached to inline buttons.
///
/// These strings are the contract between the keyboards rendered here and the
/// navigator that interprets presses.
pub mod tokens {
    pub const EN: &str = "en";
    pub const RU: &str = "ru";
    pub const SUPPORT_US: &str = "support_us";
    pub const BACK_TO_LANGUAGE: &str = "back_to_language";
}

pub const TG_CHANNEL_URL: &str = "https://t.me/OPGtoken";
pub const DISCORD_URL: &str = "https://discord.gg/ztpURnD2S5";
pub const DONATION_ALERTS_URL: &str = "https://www.donationalerts.com/r/neyman_opg";

/// Labels of the old reply keyboard; still accepted as plain text.
pub const ENGLISH_LABEL: &str = "English 🇺🇸";
pub const RUSSIAN_LABEL: &str = "Русский 🇷🇺";

const PICKER_CAPTION: &str = "Select language / Выберите язык";

const PROMO_EN: &str = "🌟 Join the Future with OPG Token! 🌟

Dear Friends,

We are thrilled to introduce our new OPG token! Here are a few reasons why you should become part of our community and invest in OPG:

- Active and Large Community
- Based on a Real Person with a massive Twitch community
- Support and Interaction

Don't miss the opportunity to be part of something bigger and invest in the future with OPG Token. Together, we can reach new heights!

Best regards,
The OPG Token Team";

const PROMO_RU: &str = "🌟 Присоединяйтесь к будущему с токеном OPG! 🌟

Дорогие друзья,

Мы рады представить наш новый токен OPG! Вот несколько причин, почему вы должны стать частью нашего сообщества и инвестировать в OPG:

- Активное и большое сообщество
- Основан на реальном человеке с огромным сообществом на Twitch
- Поддержка и взаимодействие

Не упустите возможность стать частью чего-то большего и инвестировать в будущее с токеном OPG. Вместе мы можем достичь новых высот!

С уважением,
Команда токена OPG";

const WALLET: &str = "UQALnuvdPTMzLeSX67pfPrn3tvmlcN-Q7GsWgyQLIMd1QBBQ";

/// A screen the chat can be looking at. Derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    LanguageSelect,
    Promo(Language),
}

/// Caption plus keyboard, ready to send or to edit into an existing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub caption: &'static str,
    pub keyboard: InlineKeyboard,
}

pub fn render(screen: Screen) -> Rendered {
    match screen {
        Screen::LanguageSelect => render_language_picker(),
        Screen::Promo(lang) => render_promo(lang),
    }
}

pub fn render_language_picker() -> Rendered {
    Rendered {
        caption: PICKER_CAPTION,
        keyboard: InlineKeyboard::new(vec![vec![
            InlineButton::callback(ENGLISH_LABEL, tokens::EN),
            InlineButton::callback(RUSSIAN_LABEL, tokens::RU),
        ]]),
    }
}

pub fn render_promo(lang: Language) -> Rendered {
    let (caption, channel, support, community, back) = match lang {
        Language::En => (
            PROMO_EN,
            "tg channel",
            "support us",
            "discord community",
            "🔙 change language",
        ),
        Language::Ru => (
            PROMO_RU,
            "tg канал",
            "поддержи нас",
            "сообщество в discord",
            "🔙 сменить язык",
        ),
    };

    Rendered {
        caption,
        keyboard: InlineKeyboard::new(vec![
            vec![
                InlineButton::url(channel, TG_CHANNEL_URL),
                InlineButton::callback(support, tokens::SUPPORT_US),
            ],
            vec![InlineButton::url(community, DISCORD_URL)],
            vec![InlineButton::callback(back, tokens::BACK_TO_LANGUAGE)],
        ]),
    }
}

/// Donation details sent as a standalone plain-text message.
pub fn support_text() -> String {
    format!("BTC - {WALLET}\nTON - {WALLET}\ndonation alerts - {DONATION_ALERTS_URL}")
}

/// Map a legacy reply-keyboard label back to its language.
pub fn language_for_label(text: &str) -> Option<Language> {
    match text.trim() {
        ENGLISH_LABEL => Some(Language::En),
        RUSSIAN_LABEL => Some(Language::Ru),
        _ => None,
    }
}
