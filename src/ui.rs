//! Terminal user interface components.
//!
//! [`ViewState`] is the owned, render-ready snapshot the shell rebuilds after
//! every state change; [`UIRenderer`] is the seam between the application
//! loop and the concrete ratatui terminal in [`TerminalUI`].

pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

pub use renderer::UIRenderer;
pub use state::{DetailView, LoadPhase, ViewState, MAX_VISIBLE_ROWS, TOP_RANK_CUTOFF};
pub use terminal::TerminalUI;
pub use theme::ColorTheme;
