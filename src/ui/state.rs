//! Render-ready view state.
//!
//! The application rebuilds the mutable parts of this snapshot from the
//! ranked dataset and session after every state change; the renderer only
//! reads it. Cloning the visible rows keeps the renderer free of dataset
//! lifetimes, and the visible slice is small by construction.

use crate::rank::{GroupRank, PlayerRecord};

/// Display cap for the result list; matches the original application's
/// "showing first 100 results" truncation.
pub const MAX_VISIBLE_ROWS: usize = 100;

/// Overall rank at or above which a player counts as "Top 100".
pub const TOP_RANK_CUTOFF: u32 = 100;

/// Where the application is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Dataset fetch/parse/rank in progress
    Loading,
    /// Dataset built; interactive queries available
    Ready,
    /// Load or parse failed; non-fatal error screen with retry
    Failed(String),
}

/// Detail pane contents for one selected player.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub player: PlayerRecord,
    pub county_rank: Option<GroupRank>,
    pub year_rank: Option<GroupRank>,
    pub total_players: usize,
    pub similar: Vec<PlayerRecord>,
}

impl DetailView {
    /// Top-100 indicator from the original stats pane.
    pub fn in_top_100(&self) -> bool {
        self.player.overall_rank <= TOP_RANK_CUTOFF
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub phase: LoadPhase,

    /// Dataset source name for the status line
    pub source_name: String,

    pub search_term: String,
    /// True while keystrokes edit the search term
    pub entering_search: bool,

    /// Rows currently displayed, truncated to [`MAX_VISIBLE_ROWS`]
    pub visible: Vec<PlayerRecord>,
    /// Total matches before truncation
    pub match_count: usize,
    /// Valid players in the whole dataset
    pub total_count: usize,
    /// Highlighted row, an index into `visible`
    pub selected_row: Option<usize>,

    pub detail: Option<DetailView>,

    /// Transient status message
    pub message: Option<String>,

    /// Terminal dimensions
    pub width: u16,
    pub height: u16,
}

impl ViewState {
    pub fn new(source_name: impl Into<String>, width: u16, height: u16) -> Self {
        Self {
            phase: LoadPhase::Loading,
            source_name: source_name.into(),
            search_term: String::new(),
            entering_search: false,
            visible: Vec::new(),
            match_count: 0,
            total_count: 0,
            selected_row: None,
            detail: None,
            message: None,
            width,
            height,
        }
    }

    /// True when matches beyond the display cap were cut off.
    pub fn truncated(&self) -> bool {
        self.match_count > self.visible.len()
    }

    /// Rows the result list can use, after the fixed chrome (search bar,
    /// table header, status line).
    pub fn lines_per_page(&self) -> usize {
        usize::from(self.height.saturating_sub(5))
    }

    /// Update terminal dimensions. Returns true if they actually changed.
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.width != width || self.height != height;
        if changed {
            self.width = width;
            self.height = height;
        }
        changed
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Format the complete status line for this view state.
    pub fn format_status_line(&self) -> String {
        let body = match &self.phase {
            LoadPhase::Loading => "Loading player data...".to_string(),
            LoadPhase::Failed(_) => "Load failed | r: retry | q: quit".to_string(),
            LoadPhase::Ready => {
                if self.search_term.trim().is_empty() {
                    format!("{} players", self.total_count)
                } else {
                    format!("{} of {} players", self.match_count, self.total_count)
                }
            }
        };

        match &self.message {
            Some(message) => format!("{} | {} | {}", self.source_name, body, message),
            None => format!("{} | {}", self.source_name, body),
        }
    }
}
