//! Explicit session state for the interactive shell.
//!
//! The original application kept the search term, filtered list, and selected
//! player in ambient UI state; here it is one plain value with small pure
//! update methods. The shell owns the read/update cycle, and the whole value
//! is rebuilt from scratch when the dataset is reloaded.

use crate::rank::{search, RankedDataset};

/// Interactive state threaded through the event loop.
///
/// `filtered_ids` is the current search result as player ids in dataset
/// order; `selected` indexes into it. `detail_id` is the player whose detail
/// pane is open, which may legitimately fall outside the filtered view (e.g.
/// after jumping through a similar-players entry).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub search_term: String,
    pub filtered_ids: Vec<String>,
    pub selected: Option<usize>,
    pub detail_id: Option<String>,
}

impl SessionState {
    /// Fresh session over a newly built dataset: empty term, full view.
    pub fn new(dataset: &RankedDataset) -> Self {
        let mut state = Self::default();
        state.apply_search(dataset, String::new());
        state
    }

    /// Set the search term and recompute the filtered view.
    ///
    /// Selection survives only if the selected player is still in the new
    /// view (at its new position); otherwise it is cleared.
    pub fn apply_search(&mut self, dataset: &RankedDataset, term: String) {
        let selected_id = self
            .selected
            .and_then(|i| self.filtered_ids.get(i))
            .cloned();

        self.filtered_ids = search(dataset, &term)
            .into_iter()
            .map(|r| r.id.clone())
            .collect();
        self.search_term = term;

        self.selected = selected_id.and_then(|id| self.filtered_ids.iter().position(|f| *f == id));
    }

    /// Id of the currently highlighted row, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.filtered_ids.get(i))
            .map(String::as_str)
    }

    /// Move the highlight by `delta` rows within the first `visible` rows,
    /// clamping at both ends. With no prior selection, any movement lands on
    /// the first row.
    pub fn move_selection(&mut self, delta: i64, visible: usize) {
        if visible == 0 {
            self.selected = None;
            return;
        }
        let max = visible - 1;
        self.selected = Some(match self.selected {
            None => 0,
            Some(current) => {
                let target = current as i64 + delta;
                target.clamp(0, max as i64) as usize
            }
        });
    }

    pub fn select_first(&mut self, visible: usize) {
        self.selected = (visible > 0).then_some(0);
    }

    pub fn select_last(&mut self, visible: usize) {
        self.selected = visible.checked_sub(1);
    }

    /// Open the detail pane for the highlighted row.
    pub fn open_selected(&mut self) {
        if let Some(id) = self.selected_id().map(str::to_string) {
            self.detail_id = Some(id);
        }
    }

    /// Open the detail pane for an explicit player id (similar-player jump).
    pub fn open_detail(&mut self, id: String) {
        self.detail_id = Some(id);
    }

    pub fn close_detail(&mut self) {
        self.detail_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::RawPlayerRow;
    use crate::rank::build_rankings;

    fn dataset() -> RankedDataset {
        let row = |id: &str, name: &str, county: &str, points: f64| RawPlayerRow {
            id: id.to_string(),
            name: name.to_string(),
            county: Some(county.to_string()),
            year: Some("2000".to_string()),
            points: Some(points),
        };
        build_rankings(vec![
            row("1", "Alice", "Cork", 100.0),
            row("2", "Bob", "Cork", 50.0),
            row("3", "Cara", "Clare", 75.0),
        ])
    }

    #[test]
    fn new_session_shows_everything() {
        let ds = dataset();
        let session = SessionState::new(&ds);

        assert_eq!(session.search_term, "");
        assert_eq!(session.filtered_ids, vec!["1", "3", "2"]);
        assert_eq!(session.selected, None);
        assert_eq!(session.detail_id, None);
    }

    #[test]
    fn apply_search_refilters() {
        let ds = dataset();
        let mut session = SessionState::new(&ds);

        session.apply_search(&ds, "cork".to_string());
        assert_eq!(session.filtered_ids, vec!["1", "2"]);

        session.apply_search(&ds, String::new());
        assert_eq!(session.filtered_ids.len(), 3);
    }

    #[test]
    fn selection_follows_its_player_across_refilters() {
        let ds = dataset();
        let mut session = SessionState::new(&ds);

        // Highlight Bob (position 2 in the unfiltered view 1,3,2)
        session.move_selection(1, 3);
        session.move_selection(1, 3);
        session.move_selection(1, 3);
        assert_eq!(session.selected_id(), Some("2"));

        // Bob is still present after filtering to Cork, at a new position
        session.apply_search(&ds, "cork".to_string());
        assert_eq!(session.selected_id(), Some("2"));
        assert_eq!(session.selected, Some(1));

        // Bob is gone from the Clare view, so the selection clears
        session.apply_search(&ds, "clare".to_string());
        assert_eq!(session.selected, None);
    }

    #[test]
    fn movement_clamps_to_visible_rows() {
        let ds = dataset();
        let mut session = SessionState::new(&ds);

        session.move_selection(-5, 3);
        assert_eq!(session.selected, Some(0));
        session.move_selection(10, 3);
        assert_eq!(session.selected, Some(2));
        session.move_selection(1, 0);
        assert_eq!(session.selected, None);
    }

    #[test]
    fn first_and_last_selection() {
        let ds = dataset();
        let mut session = SessionState::new(&ds);

        session.select_last(3);
        assert_eq!(session.selected, Some(2));
        session.select_first(3);
        assert_eq!(session.selected, Some(0));
        session.select_last(0);
        assert_eq!(session.selected, None);
    }

    #[test]
    fn detail_tracks_opens_and_closes() {
        let ds = dataset();
        let mut session = SessionState::new(&ds);

        session.open_selected();
        assert_eq!(session.detail_id, None);

        session.move_selection(1, 3);
        session.open_selected();
        assert_eq!(session.detail_id.as_deref(), Some("1"));

        session.open_detail("3".to_string());
        assert_eq!(session.detail_id.as_deref(), Some("3"));

        session.close_detail();
        assert_eq!(session.detail_id, None);
    }
}
