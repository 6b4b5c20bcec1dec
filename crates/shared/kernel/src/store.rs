//! The page's UI state.
//!
//! One [`UiState`] exists per session and is handed to components explicitly.
//! Only the theme survives a restart; see [`UiSnapshot`] and
//! [`crate::persistence`] for the load/save boundary.

use foh_domain::constants::CONTACT_MODAL_ID;
use foh_domain::theme::Theme;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The persisted slice of [`UiState`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSnapshot {
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    theme: Theme,
    active_modal: Option<String>,
    current_feature_index: usize,
    is_contact_form_open: bool,
    feature_count: usize,
}

impl UiState {
    /// Fresh state for a list of `feature_count` features.
    #[must_use]
    pub const fn new(feature_count: usize) -> Self {
        Self {
            theme: Theme::System,
            active_modal: None,
            current_feature_index: 0,
            is_contact_form_open: false,
            feature_count,
        }
    }

    /// Fresh state carrying the persisted theme. Everything else starts at its default.
    #[must_use]
    pub const fn restore(snapshot: UiSnapshot, feature_count: usize) -> Self {
        let mut state = Self::new(feature_count);
        state.theme = snapshot.theme;
        state
    }

    #[must_use]
    pub const fn snapshot(&self) -> UiSnapshot {
        UiSnapshot { theme: self.theme }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn active_modal(&self) -> Option<&str> {
        self.active_modal.as_deref()
    }

    #[must_use]
    pub const fn current_feature_index(&self) -> usize {
        self.current_feature_index
    }

    #[must_use]
    pub const fn is_contact_form_open(&self) -> bool {
        self.is_contact_form_open
    }

    #[must_use]
    pub const fn feature_count(&self) -> usize {
        self.feature_count
    }

    pub fn set_theme(&mut self, theme: Theme) {
        debug!(from = %self.theme, to = %theme, "Theme changed");
        self.theme = theme;
    }

    /// Light and dark swap; `System` switches to the opposite of the OS preference.
    pub fn toggle_theme(&mut self, os_prefers_dark: bool) -> Theme {
        let next = self.theme.toggled(os_prefers_dark);
        self.set_theme(next);
        next
    }

    pub fn open_modal(&mut self, id: impl Into<String>) {
        let id = id.into();
        debug!(modal = %id, "Modal opened");
        self.active_modal = Some(id);
    }

    pub fn close_modal(&mut self) {
        if let Some(id) = self.active_modal.take() {
            debug!(modal = %id, "Modal closed");
        }
    }

    /// Advances the carousel by one, wrapping at the end of the list.
    pub fn next_feature(&mut self) -> usize {
        self.set_feature_index(self.current_feature_index + 1)
    }

    /// Jumps to `index`, taken modulo the feature count.
    pub fn set_feature_index(&mut self, index: usize) -> usize {
        let next = index.checked_rem(self.feature_count).unwrap_or(0);
        debug!(from = self.current_feature_index, to = next, "Feature index changed");
        self.current_feature_index = next;
        next
    }

    /// `Some(open)` sets the form state, `None` flips it. Returns the new state.
    ///
    /// The form doubles as the contact modal: opening it marks it active, and closing
    /// it clears the active modal only if the contact modal is the one showing.
    pub fn toggle_contact_form(&mut self, open: Option<bool>) -> bool {
        let open = open.unwrap_or(!self.is_contact_form_open);
        self.is_contact_form_open = open;

        if open {
            self.open_modal(CONTACT_MODAL_ID);
        } else if self.active_modal() == Some(CONTACT_MODAL_ID) {
            self.close_modal();
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = UiState::new(9);
        assert_eq!(state.theme(), Theme::System);
        assert_eq!(state.active_modal(), None);
        assert_eq!(state.current_feature_index(), 0);
        assert!(!state.is_contact_form_open());
    }

    #[test]
    fn next_feature_wraps_at_end() {
        let mut state = UiState::new(9);
        state.set_feature_index(8);
        assert_eq!(state.next_feature(), 0);
    }

    #[test]
    fn direct_jump_is_taken_modulo() {
        let mut state = UiState::new(9);
        assert_eq!(state.set_feature_index(4), 4);
        assert_eq!(state.set_feature_index(11), 2);
    }

    #[test]
    fn empty_feature_list_pins_index_to_zero() {
        let mut state = UiState::new(0);
        assert_eq!(state.next_feature(), 0);
        assert_eq!(state.set_feature_index(3), 0);
    }

    #[test]
    fn theme_toggle_sequence() {
        let mut state = UiState::new(9);
        state.set_theme(Theme::Light);
        assert_eq!(state.toggle_theme(false), Theme::Dark);
        assert_eq!(state.toggle_theme(false), Theme::Light);
    }

    #[test]
    fn toggle_from_system_uses_os_preference() {
        let mut dark_os = UiState::new(9);
        assert_eq!(dark_os.toggle_theme(true), Theme::Light);

        let mut light_os = UiState::new(9);
        assert_eq!(light_os.toggle_theme(false), Theme::Dark);
    }

    #[test]
    fn contact_form_toggle_with_and_without_value() {
        let mut state = UiState::new(9);
        assert!(state.toggle_contact_form(None));
        assert_eq!(state.active_modal(), Some(CONTACT_MODAL_ID));
        assert!(state.toggle_contact_form(Some(true)));
        assert!(!state.toggle_contact_form(None));
        assert_eq!(state.active_modal(), None);
    }

    #[test]
    fn closing_form_leaves_other_modal_alone() {
        let mut state = UiState::new(9);
        state.open_modal("privacy");
        state.toggle_contact_form(Some(false));
        assert_eq!(state.active_modal(), Some("privacy"));
    }

    #[test]
    fn restore_keeps_only_theme() {
        let mut state = UiState::new(9);
        state.set_theme(Theme::Dark);
        state.set_feature_index(5);
        state.toggle_contact_form(Some(true));

        let restored = UiState::restore(state.snapshot(), 9);
        assert_eq!(restored.theme(), Theme::Dark);
        assert_eq!(restored.current_feature_index(), 0);
        assert!(!restored.is_contact_form_open());
        assert_eq!(restored.active_modal(), None);
    }
}
