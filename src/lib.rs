//! # courtrank - Terminal Player Ranking Viewer
//!
//! An interactive terminal viewer for tennis player ranking CSVs. The dataset
//! is loaded once into memory; search-as-you-type, computed rankings
//! (overall, by county, by birth year), and similar-player recommendations
//! all run as pure queries over that immutable snapshot.
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - [`error`] - Centralized error types and handling
//! - [`loader`] - Dataset retrieval and CSV parsing
//! - [`rank`] - The ranking engine: ranks, search, similarity
//! - [`session`] - Explicit interactive session state
//! - [`input`] - Key event to action state machine
//! - [`ui`] - Terminal user interface components
//! - [`app`] - Application core and component coordination

// Core modules
pub mod error;
pub mod loader;
pub mod rank;

// Interactive shell
pub mod app;
pub mod input;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use error::{CourtrankError, Result};

// Public API surface for external usage
pub use app::Application;
pub use loader::{DatasetSource, FileSource};
pub use rank::{build_rankings, find_similar, search, PlayerRecord, RankedDataset};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
