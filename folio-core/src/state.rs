use tracing::debug;

use crate::i18n::Locale;
use crate::storage::Storage;

pub const LOCALE_KEY: &str = "lang";

/// Application-wide UI state, passed to whoever needs it instead of living in
/// a global.
#[derive(Debug, Clone)]
pub struct AppState {
    locale: Locale,
    menu_open: bool,
    storage: Storage,
}

impl AppState {
    pub fn new(storage: Storage) -> Self {
        Self::with_default_locale(storage, Locale::default())
    }

    pub fn with_default_locale(storage: Storage, default_locale: Locale) -> Self {
        let locale = storage.get(LOCALE_KEY, default_locale);
        debug!(locale = locale.code(), "app state initialised");
        Self {
            locale,
            menu_open: false,
            storage,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        // A failed write keeps the in-memory locale; the storage layer logs it.
        self.storage.set(LOCALE_KEY, &locale);
    }

    pub fn toggle_locale(&mut self) -> Locale {
        self.set_locale(self.locale.other());
        self.locale
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
