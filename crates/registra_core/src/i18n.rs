//! Localized message catalog.
//!
//! # Responsibility
//! - Map `(MessageKey, Language)` to a format template.
//! - Render templates with positional `{0}`, `{1}` arguments.
//!
//! # Invariants
//! - The catalog is built once at first use into process-wide immutable
//!   state.
//! - Lookup falls back to English when a key is missing for the active
//!   language, so the shell never prints a raw untranslated message.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Russian,
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "en"),
            Language::Russian => write!(f, "ru"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    // Recognized codes are exactly `en` and `ru` (case-insensitively);
    // anything else, including spelled-out names, is unsupported.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::English),
            "ru" => Ok(Language::Russian),
            _ => Err(format!("unsupported language: {s}")),
        }
    }
}

impl Language {
    /// Returns every language the catalog ships messages for.
    pub fn supported() -> &'static [Language] {
        &[Language::English, Language::Russian]
    }

    /// Returns this language's display name rendered in `in_language`.
    pub fn display_name(self, in_language: Language) -> String {
        let key = match self {
            Language::English => MessageKey::LanguageEnglish,
            Language::Russian => MessageKey::LanguageRussian,
        };
        translate(key, in_language)
    }
}

/// Keys for localized messages.
///
/// Each variant corresponds to one template in the catalog; `code()` gives
/// the stable dotted identifier used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    PromptCommand,
    ErrorNotFound,
    ErrorInvalidId,
    ErrorMissingParameter,
    ErrorUnknownCommand,
    ErrorUnknownLanguage,
    ErrorPersistence,
    InfoLanguageChanged,
    EntityFormat,
    SuccessAdd,
    ErrorAdd,
    SuccessUpdate,
    SuccessDelete,
    LanguageEnglish,
    LanguageRussian,
}

impl MessageKey {
    /// Stable dotted identifier for this key.
    pub fn code(self) -> &'static str {
        match self {
            Self::PromptCommand => "prompt.command",
            Self::ErrorNotFound => "error.not.found",
            Self::ErrorInvalidId => "error.invalid.id",
            Self::ErrorMissingParameter => "error.missing.parameter",
            Self::ErrorUnknownCommand => "error.unknown.command",
            Self::ErrorUnknownLanguage => "error.unknown.language",
            Self::ErrorPersistence => "error.persistence",
            Self::InfoLanguageChanged => "info.language.changed",
            Self::EntityFormat => "entity.format",
            Self::SuccessAdd => "success.add",
            Self::ErrorAdd => "error.add",
            Self::SuccessUpdate => "success.update",
            Self::SuccessDelete => "success.delete",
            Self::LanguageEnglish => "language.name.en",
            Self::LanguageRussian => "language.name.ru",
        }
    }
}

type Catalog = HashMap<MessageKey, &'static str>;

static CATALOGS: Lazy<HashMap<Language, Catalog>> = Lazy::new(|| {
    let mut catalogs = HashMap::new();
    catalogs.insert(Language::English, english_messages());
    catalogs.insert(Language::Russian, russian_messages());
    catalogs
});

fn english_messages() -> Catalog {
    HashMap::from([
        (MessageKey::PromptCommand, "Enter command:"),
        (MessageKey::ErrorNotFound, "Record not found"),
        (
            MessageKey::ErrorInvalidId,
            "Invalid id: expected an integer",
        ),
        (
            MessageKey::ErrorMissingParameter,
            "Missing required parameter",
        ),
        (MessageKey::ErrorUnknownCommand, "Unknown command"),
        (MessageKey::ErrorUnknownLanguage, "Unknown language"),
        (MessageKey::ErrorPersistence, "Storage operation failed"),
        (MessageKey::InfoLanguageChanged, "Language changed to {0}"),
        (MessageKey::EntityFormat, "Entity{id={0}, name={1}}"),
        (MessageKey::SuccessAdd, "Record added"),
        (MessageKey::ErrorAdd, "Record was not added"),
        (MessageKey::SuccessUpdate, "Record updated"),
        (MessageKey::SuccessDelete, "Record deleted"),
        (MessageKey::LanguageEnglish, "English"),
        (MessageKey::LanguageRussian, "Russian"),
    ])
}

fn russian_messages() -> Catalog {
    HashMap::from([
        (MessageKey::PromptCommand, "Введите команду:"),
        (MessageKey::ErrorNotFound, "Запись не найдена"),
        (
            MessageKey::ErrorInvalidId,
            "Неверный идентификатор: ожидалось целое число",
        ),
        (
            MessageKey::ErrorMissingParameter,
            "Отсутствует обязательный параметр",
        ),
        (MessageKey::ErrorUnknownCommand, "Неизвестная команда"),
        (MessageKey::ErrorUnknownLanguage, "Неизвестный язык"),
        (
            MessageKey::ErrorPersistence,
            "Ошибка при обращении к хранилищу",
        ),
        (MessageKey::InfoLanguageChanged, "Язык изменен на {0}"),
        (MessageKey::EntityFormat, "Entity{id={0}, name={1}}"),
        (MessageKey::SuccessAdd, "Запись добавлена"),
        (MessageKey::ErrorAdd, "Запись не была добавлена"),
        (MessageKey::SuccessUpdate, "Запись обновлена"),
        (MessageKey::SuccessDelete, "Запись удалена"),
        (MessageKey::LanguageEnglish, "Английский"),
        (MessageKey::LanguageRussian, "Русский"),
    ])
}

/// Returns the localized template for `key`, falling back to English.
pub fn translate(key: MessageKey, language: Language) -> String {
    lookup(key, language).to_string()
}

/// Returns the localized template for `key` with `{0}`, `{1}`, ... replaced
/// by `args` in order.
pub fn translate_with_args(key: MessageKey, args: &[&str], language: Language) -> String {
    let mut message = translate(key, language);
    for (index, arg) in args.iter().enumerate() {
        message = message.replace(&format!("{{{index}}}"), arg);
    }
    message
}

fn lookup(key: MessageKey, language: Language) -> &'static str {
    CATALOGS
        .get(&language)
        .and_then(|catalog| catalog.get(&key))
        .or_else(|| {
            CATALOGS
                .get(&Language::English)
                .and_then(|catalog| catalog.get(&key))
        })
        .copied()
        .unwrap_or_else(|| key.code())
}

/// Returns the interface language implied by the process environment.
///
/// Checks `LC_ALL` then `LANG`; defaults to English when neither names a
/// supported language.
pub fn system_language() -> Language {
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find_map(|value| language_for_locale_tag(&value))
        .unwrap_or_default()
}

/// Maps a POSIX locale tag such as `ru_RU.UTF-8` to a supported language.
fn language_for_locale_tag(tag: &str) -> Option<Language> {
    let primary = tag.split(['_', '.', '@']).next()?.trim();
    if primary.is_empty() {
        return None;
    }
    primary.parse::<Language>().ok()
}
