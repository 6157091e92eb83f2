use std::collections::BTreeMap;

use easytv_core::ConsoleResult;
use easytv_domain::entities::Language;
use easytv_domain::routes::{active_entries, NavEntry, HEADER_ENTRIES};

use crate::state::UiState;

pub struct HeaderController {
    state: UiState,
    active: BTreeMap<String, bool>,
}

impl HeaderController {
    pub fn new(state: UiState) -> Self {
        let view = state.navigator.view();
        let active = active_entries(HEADER_ENTRIES, view.as_deref());
        Self { state, active }
    }

    pub fn entries(&self) -> &'static [NavEntry] {
        HEADER_ENTRIES
    }

    pub fn active(&self) -> &BTreeMap<String, bool> {
        &self.active
    }

    /// `(display name, code)` pairs for the language menu
    pub fn language_list(&self) -> Vec<(&'static str, &'static str)> {
        Language::ALL
            .iter()
            .map(|l| (l.display_name(), l.code()))
            .collect()
    }

    pub fn language(&self) -> Language {
        self.state.session.language()
    }

    pub fn change_language(&self, language: Language) -> ConsoleResult<()> {
        self.state.session.set_language(language)
    }

    pub fn item_clicked(&mut self, name: &str) {
        self.active = active_entries(HEADER_ENTRIES, Some(name));
    }
}
