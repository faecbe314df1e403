//! Top-level UI state: active tab and display language.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::i18n::Locale;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Recycler,
    Assistant,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub active_tab: ActiveTab,
    pub locale: Locale,
}

impl UiState {
    pub fn set_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    /// Flip the locale and return the new value. The caller is responsible
    /// for discarding locale-bound content (AI output is not re-translatable)
    /// and re-greeting the chat.
    pub fn toggle_language(&mut self) -> Locale {
        self.locale = self.locale.toggled();
        self.locale
    }
}
