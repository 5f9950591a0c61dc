//! Terminal UI implementation using ratatui.
//!
//! Pure presentation: draws the search bar, result list, detail pane, and
//! status line from a [`ViewState`], and feeds raw key events through the
//! input state machine. All data management lives in the application loop.

use crate::error::Result;
use crate::input::{InputAction, InputMode, InputStateMachine};
use crate::rank::PlayerRecord;
use crate::ui::{ColorTheme, DetailView, UIRenderer, ViewState};
use ratatui::crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

const NAME_WIDTH: usize = 28;
const COUNTY_WIDTH: usize = 14;
const YEAR_WIDTH: usize = 6;
const POINTS_WIDTH: usize = 10;
const RANK_WIDTH: usize = 6;

/// Terminal UI with a ratatui/crossterm backend.
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
    input: InputStateMachine,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme: ColorTheme::default(),
            input: InputStateMachine::new(),
        })
    }

    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
            input: InputStateMachine::new(),
        })
    }

    fn render_search_bar(frame: &mut Frame, area: Rect, view: &ViewState, theme: &ColorTheme) {
        let style = if view.entering_search {
            theme.search_active
        } else {
            Style::default()
        };
        let text = if view.search_term.is_empty() && !view.entering_search {
            Span::raw("Press / to search by player name or county")
        } else {
            Span::styled(format!("/{}", view.search_term), style)
        };

        let bar = Paragraph::new(Line::from(text))
            .block(Block::default().borders(Borders::ALL).title("Search"));
        frame.render_widget(bar, area);
    }

    fn render_loading(frame: &mut Frame, area: Rect) {
        let text = Paragraph::new("Loading player data...").centered();
        frame.render_widget(text, area);
    }

    fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &ColorTheme) {
        let lines = vec![
            Line::styled("Error loading data", Style::default().fg(theme.error_text)),
            Line::raw(""),
            Line::raw(message.to_string()),
            Line::raw(""),
            Line::raw("Press r to retry or q to quit."),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_results(frame: &mut Frame, area: Rect, view: &ViewState, theme: &ColorTheme) {
        let mut lines: Vec<Line> = Vec::with_capacity(view.visible.len() + 2);
        lines.push(Line::styled(header_row(), theme.table_header));

        for (index, player) in view.visible.iter().enumerate() {
            let row = player_row(player);
            if Some(index) == view.selected_row {
                lines.push(Line::styled(row, theme.selection));
            } else {
                lines.push(Line::raw(row));
            }
        }

        if view.truncated() {
            lines.push(Line::raw(format!(
                "Showing first {} of {} results. Refine your search.",
                view.visible.len(),
                view.match_count
            )));
        } else if view.visible.is_empty() && !view.search_term.trim().is_empty() {
            lines.push(Line::raw(
                "No players found matching your search. Try a different name or county.",
            ));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_detail(frame: &mut Frame, area: Rect, detail: &DetailView, theme: &ColorTheme) {
        let player = &detail.player;
        let mut lines = vec![
            Line::styled(player.name.clone(), theme.table_header),
            Line::raw(format!("Player ID: {}", player.id)),
            Line::raw(format!(
                "County: {}",
                player.county.as_deref().unwrap_or("Not specified")
            )),
            Line::raw(format!(
                "Birth Year: {}",
                player.birth_year.as_deref().unwrap_or("Not specified")
            )),
            Line::raw(format!(
                "Ranking Points: {}",
                format_points(player.points)
            )),
            Line::raw(format!(
                "Overall Rank: {} of {}",
                player.overall_rank, detail.total_players
            )),
        ];

        if let (Some(entry), Some(county)) = (detail.county_rank, player.county.as_deref()) {
            lines.push(Line::raw(format!(
                "County Rank: {} of {} in {}",
                entry.rank, entry.size, county
            )));
        }
        if let (Some(entry), Some(year)) = (detail.year_rank, player.birth_year.as_deref()) {
            lines.push(Line::raw(format!(
                "Birth Year Rank: {} of {} born in {}",
                entry.rank, entry.size, year
            )));
        }

        let (answer, color) = if detail.in_top_100() {
            ("Yes", theme.accent_good)
        } else {
            ("No", theme.accent_bad)
        };
        lines.push(Line::from(vec![
            Span::raw("Top 100: "),
            Span::styled(answer, Style::default().fg(color)),
        ]));

        if !detail.similar.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::styled("Similar Players", theme.table_header));
            for (index, similar) in detail.similar.iter().enumerate() {
                lines.push(Line::raw(format!(
                    "{}. {}",
                    index + 1,
                    player_row(similar).trim_end()
                )));
            }
        }

        let pane = Paragraph::new(lines)
            .block(Block::default().borders(Borders::TOP).title("Player"));
        frame.render_widget(pane, area);
    }

    fn render_status(frame: &mut Frame, area: Rect, view: &ViewState, theme: &ColorTheme) {
        let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
        let status = Paragraph::new(view.format_status_line()).style(status_style);
        frame.render_widget(status, area);
    }
}

fn header_row() -> String {
    format!(
        "{:<name$} {:<county$} {:>year$} {:>points$} {:>rank$}",
        "Player Name",
        "County",
        "Year",
        "Points",
        "Rank",
        name = NAME_WIDTH,
        county = COUNTY_WIDTH,
        year = YEAR_WIDTH,
        points = POINTS_WIDTH,
        rank = RANK_WIDTH,
    )
}

fn player_row(player: &PlayerRecord) -> String {
    format!(
        "{:<name$} {:<county$} {:>year$} {:>points$} {:>rank$}",
        clip(&player.name, NAME_WIDTH),
        clip(player.county.as_deref().unwrap_or("-"), COUNTY_WIDTH),
        clip(player.birth_year.as_deref().unwrap_or("-"), YEAR_WIDTH),
        format_points(player.points),
        player.overall_rank,
        name = NAME_WIDTH,
        county = COUNTY_WIDTH,
        year = YEAR_WIDTH,
        points = POINTS_WIDTH,
        rank = RANK_WIDTH,
    )
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        value.chars().take(width.saturating_sub(1)).collect::<String>() + "…"
    }
}

fn format_points(points: Option<f64>) -> String {
    match points {
        None => "-".to_string(),
        Some(p) if p.fract() == 0.0 => format!("{}", p as i64),
        Some(p) => format!("{:.1}", p),
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;

            terminal.draw(move |frame| {
                let size = frame.size();

                // Search bar, body, status line
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints(
                        [
                            Constraint::Length(3),
                            Constraint::Min(0),
                            Constraint::Length(1),
                        ]
                        .as_ref(),
                    )
                    .split(size);

                Self::render_search_bar(frame, chunks[0], view_state, theme);

                match &view_state.phase {
                    crate::ui::LoadPhase::Loading => Self::render_loading(frame, chunks[1]),
                    crate::ui::LoadPhase::Failed(message) => {
                        Self::render_error(frame, chunks[1], message, theme)
                    }
                    crate::ui::LoadPhase::Ready => {
                        if let Some(detail) = &view_state.detail {
                            let halves = Layout::default()
                                .direction(Direction::Vertical)
                                .constraints(
                                    [Constraint::Percentage(50), Constraint::Percentage(50)]
                                        .as_ref(),
                                )
                                .split(chunks[1]);
                            Self::render_results(frame, halves[0], view_state, theme);
                            Self::render_detail(frame, halves[1], detail, theme);
                        } else {
                            Self::render_results(frame, chunks[1], view_state, theme);
                        }
                    }
                }

                Self::render_status(frame, chunks[2], view_state, theme);
            })?;
        }
        Ok(())
    }

    fn handle_input(&mut self, timeout: Option<Duration>) -> Result<Option<InputAction>> {
        let timeout_duration = timeout.unwrap_or(Duration::from_millis(100));

        if event::poll(timeout_duration)? {
            match event::read()? {
                Event::Key(key_event) => {
                    let action = self.input.handle_key_event(key_event);
                    return Ok(match action {
                        InputAction::NoAction | InputAction::InvalidInput => None,
                        other => Some(other),
                    });
                }
                Event::Resize(width, height) => {
                    return Ok(Some(InputAction::Resize { width, height }));
                }
                _ => {}
            }
        }

        Ok(None)
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl TerminalUI {
    /// Current input mode, used by the application to mirror search-entry
    /// state into the view.
    pub fn input_mode(&self) -> InputMode {
        self.input.mode()
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
