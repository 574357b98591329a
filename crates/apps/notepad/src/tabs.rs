//! Tab-strip state for the notepad: an ordered list of documents with one
//! active tab. The strip never holds fewer than one tab.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: u32,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStrip {
    tabs: Vec<Tab>,
    active: u32,
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl TabStrip {
    pub fn new(first_title: &str) -> Self {
        Self {
            tabs: vec![Tab {
                id: 1,
                title: first_title.to_string(),
                content: String::new(),
            }],
            active: 1,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_id(&self) -> u32 {
        self.active
    }

    pub fn active_tab(&self) -> &Tab {
        self.tabs
            .iter()
            .find(|tab| tab.id == self.active)
            .unwrap_or_else(|| self.tabs.first().expect("tab strip is never empty"))
    }

    /// Appends a fresh tab (`id = max + 1`, titled after its id) and makes
    /// it active. Existing tabs are untouched.
    pub fn add_tab(&mut self) -> u32 {
        let id = self.tabs.iter().map(|tab| tab.id).max().unwrap_or(0) + 1;
        self.tabs.push(Tab {
            id,
            title: format!("Untitled {id}"),
            content: String::new(),
        });
        self.active = id;
        id
    }

    /// Removes a tab unless it is the last one remaining. When the active
    /// tab is closed, the last tab in the strip becomes active.
    pub fn close_tab(&mut self, id: u32) -> bool {
        if self.tabs.len() <= 1 {
            return false;
        }
        let before = self.tabs.len();
        self.tabs.retain(|tab| tab.id != id);
        if self.tabs.len() == before {
            return false;
        }
        if self.active == id {
            self.active = self.tabs.last().expect("tab strip is never empty").id;
        }
        true
    }

    pub fn set_active(&mut self, id: u32) -> bool {
        if self.tabs.iter().any(|tab| tab.id == id) {
            self.active = id;
            true
        } else {
            false
        }
    }

    /// Replaces the active tab's content; other tabs are never touched.
    pub fn set_active_content(&mut self, text: String) {
        let active = self.active;
        if let Some(tab) = self.tabs.iter_mut().find(|tab| tab.id == active) {
            tab.content = text;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn add_tab_appends_without_touching_existing_tabs() {
        let mut strip = TabStrip::default();
        strip.set_active_content("first".to_string());
        let existing = strip.tabs().to_vec();

        let id = strip.add_tab();

        assert_eq!(id, 2);
        assert_eq!(&strip.tabs()[..1], existing.as_slice());
        assert_eq!(strip.tabs()[1].title, "Untitled 2");
        assert_eq!(strip.active_id(), 2);
    }

    #[test]
    fn tab_ids_are_max_plus_one_even_after_closes() {
        let mut strip = TabStrip::default();
        strip.add_tab();
        strip.add_tab();
        assert!(strip.close_tab(3));

        assert_eq!(strip.add_tab(), 3);
    }

    #[test]
    fn closing_the_sole_tab_is_a_noop() {
        let mut strip = TabStrip::default();

        assert!(!strip.close_tab(1));
        assert_eq!(strip.len(), 1);
        assert_eq!(strip.active_id(), 1);
    }

    #[test]
    fn closing_the_active_tab_falls_back_to_the_last_tab() {
        let mut strip = TabStrip::default();
        strip.add_tab();
        strip.add_tab();
        assert!(strip.set_active(2));

        assert!(strip.close_tab(2));
        assert_eq!(strip.active_id(), 3);

        // Closing an inactive tab leaves the active tab alone.
        assert!(strip.close_tab(1));
        assert_eq!(strip.active_id(), 3);
    }

    #[test]
    fn edits_are_scoped_to_the_active_tab() {
        let mut strip = TabStrip::default();
        strip.set_active_content("kept".to_string());
        strip.add_tab();
        strip.set_active_content("scratch".to_string());

        assert_eq!(strip.tabs()[0].content, "kept");
        assert_eq!(strip.tabs()[1].content, "scratch");
    }

    #[test]
    fn add_then_close_first_matches_expected_sequence() {
        let mut strip = TabStrip::default();
        assert_eq!(strip.tabs()[0].title, "Untitled");

        strip.add_tab();
        assert_eq!(strip.len(), 2);
        assert_eq!(strip.tabs()[1].title, "Untitled 2");
        assert_eq!(strip.active_id(), 2);

        assert!(strip.close_tab(1));
        assert_eq!(strip.len(), 1);
        assert_eq!(strip.tabs()[0].id, 2);
        assert_eq!(strip.active_id(), 2);
    }

    #[test]
    fn set_active_rejects_unknown_ids() {
        let mut strip = TabStrip::default();
        assert!(!strip.set_active(5));
        assert_eq!(strip.active_id(), 1);
    }
}
