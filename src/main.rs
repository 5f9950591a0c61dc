//! courtrank - Terminal Player Ranking Viewer
//!
//! Loads a player ranking CSV and serves interactive search, rankings, and
//! similar-player lookups in the terminal.

use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("courtrank")
        .version(courtrank::VERSION)
        .about("An interactive terminal viewer for player ranking CSVs")
        .long_about(
            "courtrank loads a CSV of player rankings once into memory, then serves \
             search-as-you-type over names and counties, computed overall/county/birth-year \
             rankings, and similar-player recommendations.",
        )
        .arg(
            Arg::new("file")
                .help("Path to the player ranking CSV file")
                .required(true)
                .index(1),
        )
        .get_matches();

    let file_path = PathBuf::from(
        matches
            .get_one::<String>("file")
            .expect("file argument is required"),
    );

    // Fail fast on unusable paths before the UI takes over the screen
    if let Err(e) = courtrank::loader::validate_source_path(&file_path) {
        anyhow::bail!("{}", e);
    }

    use courtrank::ui::TerminalUI;
    use courtrank::{Application, FileSource};

    let source = Box::new(FileSource::new(&file_path));
    let ui_renderer = Box::new(TerminalUI::new()?);
    let mut app = Application::new(source, ui_renderer);

    app.run().await?;

    Ok(())
}
