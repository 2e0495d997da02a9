use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark, use_preferred_languages};

use crate::{
    content::Localized,
    i18n::{Language, DICTIONARY, LANGUAGE_STORAGE_KEY},
    theme::{Theme, THEME_STORAGE_KEY},
};

/// Active language plus the lookup every component translates through.
#[derive(Debug, Clone, Copy)]
pub struct I18n {
    language: Signal<Language>,
    set_stored: WriteSignal<String>,
}

impl I18n {
    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, language: Language) {
        log::debug!("language -> {language}");
        self.set_stored.set(language.code().to_string());
    }

    /// Tracks the language, so calling it inside a closure keeps the text live.
    pub fn t(&self, key: &str, fallback: &str) -> String {
        DICTIONARY
            .translate(key, fallback, self.language.get())
            .to_string()
    }

    pub fn text(&self, text: &Localized) -> String {
        text.resolve(&DICTIONARY, self.language.get()).to_string()
    }
}

pub fn provide_i18n() -> I18n {
    // stored value wins, then the browser list, then English
    let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(LANGUAGE_STORAGE_KEY);
    let browser = use_preferred_languages();
    let language = Memo::new(move |_| {
        stored
            .get()
            .parse()
            .unwrap_or_else(|_| Language::from_browser(&browser.get()))
    });

    let i18n = I18n {
        language: language.into(),
        set_stored,
    };
    provide_context(i18n);
    i18n
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeState {
    theme: Signal<Theme>,
    prefers_dark: Signal<bool>,
    set_stored: WriteSignal<String>,
}

impl ThemeState {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark(self.prefers_dark.get())
    }

    pub fn class(&self) -> &'static str {
        self.theme.get().class(self.prefers_dark.get())
    }

    pub fn set_theme(&self, theme: Theme) {
        log::debug!("theme -> {theme}");
        self.set_stored.set(theme.to_string());
    }
}

pub fn provide_theme() -> ThemeState {
    let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
    let prefers_dark = use_preferred_dark();
    let theme = Memo::new(move |_| stored.get().parse().unwrap_or_default());

    let state = ThemeState {
        theme: theme.into(),
        prefers_dark,
        set_stored,
    };
    provide_context(state);
    state
}

pub fn use_theme() -> ThemeState {
    expect_context::<ThemeState>()
}
