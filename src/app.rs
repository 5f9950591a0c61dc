//! Application orchestration layer.
//!
//! Coordinates the dataset loader, ranking engine, session state, and UI
//! renderer without duplicating state that already lives in them. The loop is
//! simple: poll input, apply the action to the session, rebuild the view
//! snapshot, render. The dataset is loaded once up front and only ever
//! replaced wholesale by an explicit reload.

use crate::error::Result;
use crate::input::InputAction;
use crate::loader::{load_rows, DatasetSource};
use crate::rank::{build_rankings, find_similar, search, RankedDataset, DEFAULT_SIMILAR_LIMIT};
use crate::session::SessionState;
use crate::ui::{DetailView, LoadPhase, UIRenderer, ViewState, MAX_VISIBLE_ROWS};
use std::time::Duration;

/// Application orchestrator - owns the dataset snapshot and session.
pub struct Application {
    source: Box<dyn DatasetSource>,
    ui_renderer: Box<dyn UIRenderer>,
    dataset: RankedDataset,
    session: SessionState,
}

impl Application {
    /// Create the application. The dataset itself is loaded inside [`run`],
    /// so load failures surface as the non-fatal error screen, not a crash.
    pub fn new(source: Box<dyn DatasetSource>, ui_renderer: Box<dyn UIRenderer>) -> Self {
        Self {
            source,
            ui_renderer,
            dataset: RankedDataset::default(),
            session: SessionState::default(),
        }
    }

    /// Run the application event loop until quit.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;

        let (width, height) = self.ui_renderer.get_terminal_size()?;
        let mut view_state = ViewState::new(self.source.describe(), width, height);

        // Show the loading screen before the first (possibly slow) fetch
        self.ui_renderer.render(&view_state)?;
        self.reload(&mut view_state).await;
        self.ui_renderer.render(&view_state)?;

        let mut running = true;
        while running {
            match self
                .ui_renderer
                .handle_input(Some(Duration::from_millis(50)))
            {
                Ok(Some(action)) => {
                    running = self.execute_action(action, &mut view_state).await?;
                }
                Ok(None) => {
                    // No input this tick
                }
                Err(e) => {
                    log::error!("input error: {}", e);
                    break;
                }
            }

            self.ui_renderer.render(&view_state)?;

            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        self.ui_renderer.cleanup()?;
        Ok(())
    }

    /// Apply one input action. Returns false when the loop should quit.
    pub async fn execute_action(
        &mut self,
        action: InputAction,
        view_state: &mut ViewState,
    ) -> Result<bool> {
        // While the dataset is unavailable only retry, resize, and quit apply
        if !matches!(view_state.phase, LoadPhase::Ready) {
            match action {
                InputAction::Quit => return Ok(false),
                InputAction::Reload => {
                    self.reload(view_state).await;
                    return Ok(true);
                }
                InputAction::Resize { width, height } => {
                    view_state.update_terminal_size(width, height);
                    return Ok(true);
                }
                _ => return Ok(true),
            }
        }

        view_state.clear_message();

        match action {
            InputAction::Quit => return Ok(false),

            InputAction::SelectionDown(n) => {
                self.session.move_selection(n as i64, self.visible_len());
            }
            InputAction::SelectionUp(n) => {
                self.session.move_selection(-(n as i64), self.visible_len());
            }
            InputAction::PageDown => {
                let page = view_state.lines_per_page() as i64;
                self.session.move_selection(page, self.visible_len());
            }
            InputAction::PageUp => {
                let page = view_state.lines_per_page() as i64;
                self.session.move_selection(-page, self.visible_len());
            }
            InputAction::GoToFirst => self.session.select_first(self.visible_len()),
            InputAction::GoToLast => self.session.select_last(self.visible_len()),

            InputAction::OpenSelected => {
                if self.session.selected_id().is_some() {
                    self.session.open_selected();
                } else {
                    view_state.set_message("No player selected".to_string());
                }
            }
            InputAction::OpenSimilar(n) => {
                let target = self
                    .session
                    .detail_id
                    .as_deref()
                    .map(|id| find_similar(&self.dataset, id, DEFAULT_SIMILAR_LIMIT))
                    .and_then(|similar| {
                        n.checked_sub(1)
                            .and_then(|i| similar.get(i))
                            .map(|r| r.id.clone())
                    });
                match target {
                    Some(id) => self.session.open_detail(id),
                    None => view_state.set_message("No such similar player".to_string()),
                }
            }
            InputAction::Back => {
                if self.session.detail_id.is_some() {
                    self.session.close_detail();
                } else if !self.session.search_term.is_empty() {
                    self.session.apply_search(&self.dataset, String::new());
                }
            }

            InputAction::StartSearch => {
                view_state.entering_search = true;
                self.session.apply_search(&self.dataset, String::new());
            }
            InputAction::UpdateSearchTerm(term) => {
                self.session.apply_search(&self.dataset, term);
            }
            InputAction::CommitSearch => {
                view_state.entering_search = false;
            }
            InputAction::CancelSearch => {
                view_state.entering_search = false;
                self.session.apply_search(&self.dataset, String::new());
            }

            InputAction::Reload => {
                self.reload(view_state).await;
                if matches!(view_state.phase, LoadPhase::Ready) {
                    view_state.set_message("Reloaded".to_string());
                }
                return Ok(true);
            }
            InputAction::Resize { width, height } => {
                view_state.update_terminal_size(width, height);
            }

            InputAction::NoAction | InputAction::InvalidInput => {}
        }

        self.refresh_view(view_state);
        Ok(true)
    }

    /// Fetch, parse, and rank from scratch, replacing all prior state.
    ///
    /// On failure the previous dataset is discarded rather than kept as a
    /// stale partial result; the view enters the error phase with retry.
    async fn reload(&mut self, view_state: &mut ViewState) {
        view_state.phase = LoadPhase::Loading;
        view_state.clear_message();

        match load_rows(self.source.as_ref()).await {
            Ok(rows) => {
                self.dataset = build_rankings(rows);
                self.session = SessionState::new(&self.dataset);
                view_state.phase = LoadPhase::Ready;
                view_state.entering_search = false;
                self.refresh_view(view_state);
            }
            Err(e) => {
                log::warn!("dataset load failed: {}", e);
                self.dataset = RankedDataset::default();
                self.session = SessionState::default();
                view_state.phase = LoadPhase::Failed(e.to_string());
                view_state.visible = Vec::new();
                view_state.match_count = 0;
                view_state.total_count = 0;
                view_state.selected_row = None;
                view_state.detail = None;
            }
        }
    }

    /// Number of rows the list can currently show (filter result capped at
    /// the display limit).
    fn visible_len(&self) -> usize {
        self.session.filtered_ids.len().min(MAX_VISIBLE_ROWS)
    }

    /// Rebuild the render snapshot from dataset + session.
    fn refresh_view(&self, view_state: &mut ViewState) {
        let matches = search(&self.dataset, &self.session.search_term);

        view_state.search_term = self.session.search_term.clone();
        view_state.match_count = matches.len();
        view_state.total_count = self.dataset.len();
        view_state.visible = matches
            .iter()
            .take(MAX_VISIBLE_ROWS)
            .map(|r| (*r).clone())
            .collect();
        view_state.selected_row = self.session.selected;

        view_state.detail = self.session.detail_id.as_deref().and_then(|id| {
            self.dataset.get(id).map(|player| DetailView {
                player: player.clone(),
                county_rank: self.dataset.county_rank(id),
                year_rank: self.dataset.year_rank(id),
                total_players: self.dataset.len(),
                similar: find_similar(&self.dataset, id, DEFAULT_SIMILAR_LIMIT)
                    .into_iter()
                    .cloned()
                    .collect(),
            })
        });
    }
}
