//! Filter and sort selection for the visitor list
//!
//! The committed selection is what the list query reads. While the selector
//! panel is open, edits go to a draft copy that only reaches the committed
//! pair through [`FilterSelection::apply`].

use serde::{Deserialize, Serialize};

use crate::models::enums::{BeachFilter, SortOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub sort_order: SortOrder,
    pub beach_filter: BeachFilter,
}

#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    committed: Selection,
    draft: Option<Selection>,
}

impl FilterSelection {
    pub fn new(committed: Selection) -> Self {
        Self {
            committed,
            draft: None,
        }
    }

    /// Values the list query uses
    pub fn committed(&self) -> Selection {
        self.committed
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<Selection> {
        self.draft
    }

    /// Open the panel with a draft copied from the committed values
    pub fn open(&mut self) {
        self.draft = Some(self.committed);
    }

    pub fn set_draft_sort(&mut self, sort_order: SortOrder) {
        if let Some(draft) = self.draft.as_mut() {
            draft.sort_order = sort_order;
        }
    }

    pub fn set_draft_beach(&mut self, beach_filter: BeachFilter) {
        if let Some(draft) = self.draft.as_mut() {
            draft.beach_filter = beach_filter;
        }
    }

    /// Reset the draft to defaults; the panel stays open
    pub fn reset(&mut self) {
        if self.draft.is_some() {
            self.draft = Some(Selection::default());
        }
    }

    /// Commit the draft and close. Returns true when the committed values changed.
    pub fn apply(&mut self) -> bool {
        match self.draft.take() {
            Some(draft) => {
                let changed = draft != self.committed;
                self.committed = draft;
                changed
            }
            None => false,
        }
    }

    /// Close without touching the committed values
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Whether the committed selection differs from the defaults
    pub fn is_filter_active(&self) -> bool {
        self.committed != Selection::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Beach;

    #[test]
    fn test_open_copies_committed() {
        let committed = Selection {
            sort_order: SortOrder::Oldest,
            beach_filter: BeachFilter::Only(Beach::Depok),
        };
        let mut selection = FilterSelection::new(committed);
        assert!(!selection.is_open());

        selection.open();
        assert_eq!(selection.draft(), Some(committed));
    }

    #[test]
    fn test_draft_does_not_leak_until_apply() {
        let mut selection = FilterSelection::default();
        selection.open();
        selection.set_draft_sort(SortOrder::Oldest);
        selection.set_draft_beach(BeachFilter::Only(Beach::Samas));

        assert_eq!(selection.committed(), Selection::default());

        assert!(selection.apply());
        assert!(!selection.is_open());
        assert_eq!(selection.committed().sort_order, SortOrder::Oldest);
        assert_eq!(selection.committed().beach_filter, BeachFilter::Only(Beach::Samas));
        assert!(selection.is_filter_active());
    }

    #[test]
    fn test_cancel_keeps_committed() {
        let mut selection = FilterSelection::default();
        selection.open();
        selection.set_draft_sort(SortOrder::Oldest);
        selection.cancel();

        assert!(!selection.is_open());
        assert_eq!(selection.committed(), Selection::default());
        assert!(!selection.is_filter_active());
    }

    #[test]
    fn test_reset_stays_open_with_defaults() {
        let mut selection = FilterSelection::new(Selection {
            sort_order: SortOrder::Oldest,
            beach_filter: BeachFilter::Only(Beach::Baros),
        });
        selection.open();
        selection.reset();

        assert!(selection.is_open());
        assert_eq!(selection.draft(), Some(Selection::default()));
        // committed untouched until apply
        assert_eq!(selection.committed().sort_order, SortOrder::Oldest);

        selection.apply();
        assert!(!selection.is_filter_active());
    }

    #[test]
    fn test_edits_while_closed_are_ignored() {
        let mut selection = FilterSelection::default();
        selection.set_draft_sort(SortOrder::Oldest);
        selection.reset();
        assert!(!selection.apply());
        assert_eq!(selection.committed(), Selection::default());
    }
}
