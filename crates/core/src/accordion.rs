//! Collapsible question/answer list with single and multi selection.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FaqError;
use crate::selection::{SelectionMode, SelectionState};

/// One collapsible entry. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FaqFile {
    #[serde(default)]
    items: Vec<FaqItem>,
}

/// Entries bundled with the binary.
#[must_use]
pub fn builtin_items() -> Vec<FaqItem> {
    vec![
        FaqItem::new(
            "1",
            "What is an accordion?",
            "A stack of headers that each reveal a block of content when activated.",
        ),
        FaqItem::new(
            "2",
            "How does single selection behave?",
            "Opening an entry closes whichever entry was open before. Activating the open entry closes it.",
        ),
        FaqItem::new(
            "3",
            "How does multi selection behave?",
            "Each entry opens and closes on its own, so any number can be expanded at once.",
        ),
        FaqItem::new(
            "4",
            "Is the open state remembered?",
            "Only while the widget is on screen. Nothing is written to disk.",
        ),
    ]
}

/// Load entries from a `.toml` (`[[items]]` tables) or `.json` (array) file.
pub fn load_items(path: &Path) -> Result<Vec<FaqItem>, FaqError> {
    let contents = fs::read_to_string(path).map_err(|source| FaqError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let items = match extension.as_deref() {
        Some("toml") => {
            toml::from_str::<FaqFile>(&contents)
                .map_err(|source| FaqError::Toml {
                    path: path.to_path_buf(),
                    source,
                })?
                .items
        }
        Some("json") => {
            serde_json::from_str::<Vec<FaqItem>>(&contents).map_err(|source| FaqError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            return Err(FaqError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    ensure_unique_ids(&items)?;
    Ok(items)
}

fn ensure_unique_ids(items: &[FaqItem]) -> Result<(), FaqError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(FaqError::DuplicateId {
                id: item.id.clone(),
            });
        }
    }
    Ok(())
}

/// Accordion widget state.
///
/// Single and multi selections are tracked independently, so flipping the
/// mode shows whatever was open the last time that mode was active.
#[derive(Debug, Clone)]
pub struct Accordion {
    items: Vec<FaqItem>,
    single: SelectionState<String>,
    multi: SelectionState<String>,
    multi_enabled: bool,
    cursor: usize,
}

impl Default for Accordion {
    fn default() -> Self {
        Self::new(builtin_items())
    }
}

impl Accordion {
    #[must_use]
    pub fn new(items: Vec<FaqItem>) -> Self {
        Self {
            items,
            single: SelectionState::single(),
            multi: SelectionState::multi(),
            multi_enabled: false,
            cursor: 0,
        }
    }

    #[must_use]
    pub fn with_multi(mut self, enabled: bool) -> Self {
        self.multi_enabled = enabled;
        self
    }

    #[must_use]
    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        if self.multi_enabled {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        }
    }

    /// Flip between single and multi selection.
    pub fn toggle_mode(&mut self) {
        self.multi_enabled = !self.multi_enabled;
        log::debug!("accordion switched to {} selection", self.mode().label());
    }

    /// Selection that drives what is currently shown.
    #[must_use]
    pub fn selection(&self) -> &SelectionState<String> {
        if self.multi_enabled {
            &self.multi
        } else {
            &self.single
        }
    }

    /// Toggle the entry with `id` under the current mode.
    pub fn toggle(&mut self, id: &str) {
        let state = if self.multi_enabled {
            &mut self.multi
        } else {
            &mut self.single
        };
        state.toggle(id.to_string());
    }

    /// Toggle the entry under the cursor.
    pub fn toggle_at_cursor(&mut self) {
        if let Some(id) = self.items.get(self.cursor).map(|item| item.id.clone()) {
            self.toggle(&id);
        }
    }

    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        match self.selection() {
            SelectionState::Single { active } => active.as_deref() == Some(id),
            SelectionState::Multi { active } => active.contains(id),
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn sample() -> Accordion {
        Accordion::new(vec![
            FaqItem::new("a", "qa", "aa"),
            FaqItem::new("b", "qb", "ab"),
            FaqItem::new("c", "qc", "ac"),
        ])
    }

    #[test]
    fn single_mode_opens_one_entry_at_a_time() {
        let mut accordion = sample();
        accordion.toggle("a");
        accordion.toggle("b");
        assert!(!accordion.is_open("a"));
        assert!(accordion.is_open("b"));
        accordion.toggle("b");
        assert!(!accordion.is_open("b"));
    }

    #[test]
    fn multi_mode_keeps_entries_open_independently() {
        let mut accordion = sample().with_multi(true);
        accordion.toggle("a");
        accordion.toggle("b");
        accordion.toggle("a");
        assert!(!accordion.is_open("a"));
        assert!(accordion.is_open("b"));
        assert_eq!(accordion.selection().active_count(), 1);
    }

    #[test]
    fn switching_mode_preserves_each_selection() {
        let mut accordion = sample();
        accordion.toggle("a");
        accordion.toggle_mode();
        assert_eq!(accordion.mode(), SelectionMode::Multi);
        assert!(!accordion.is_open("a"));
        accordion.toggle("b");
        accordion.toggle("c");
        accordion.toggle_mode();
        assert!(accordion.is_open("a"));
        assert!(!accordion.is_open("b"));
        accordion.toggle_mode();
        assert!(accordion.is_open("b"));
        assert!(accordion.is_open("c"));
    }

    #[test]
    fn cursor_stays_in_bounds_and_toggles_current_entry() {
        let mut accordion = sample();
        accordion.move_up();
        assert_eq!(accordion.cursor(), 0);
        for _ in 0..10 {
            accordion.move_down();
        }
        assert_eq!(accordion.cursor(), 2);
        accordion.toggle_at_cursor();
        assert!(accordion.is_open("c"));
    }

    #[test]
    fn empty_accordion_ignores_toggles() {
        let mut accordion = Accordion::new(Vec::new());
        accordion.toggle_at_cursor();
        accordion.move_down();
        assert!(accordion.is_empty());
        assert_eq!(accordion.selection().active_count(), 0);
    }

    #[test]
    fn builtin_items_have_unique_ids() {
        assert!(ensure_unique_ids(&builtin_items()).is_ok());
    }

    #[test]
    fn loads_toml_items() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[[items]]\nid = \"x\"\nquestion = \"Why?\"\nanswer = \"Because.\"\n"
        )
        .unwrap();
        let items = load_items(file.path()).unwrap();
        assert_eq!(items, vec![FaqItem::new("x", "Why?", "Because.")]);
    }

    #[test]
    fn loads_json_items() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"id": "1", "question": "q", "answer": "a"}}]"#
        )
        .unwrap();
        let items = load_items(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "1");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"id": "1", "question": "q", "answer": "a"}}, {{"id": "1", "question": "q2", "answer": "a2"}}]"#
        )
        .unwrap();
        let err = load_items(file.path()).unwrap_err();
        assert!(matches!(err, FaqError::DuplicateId { id } if id == "1"));
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let err = load_items(file.path()).unwrap_err();
        assert!(matches!(err, FaqError::UnsupportedFormat { .. }));
    }
}
