//! Per-game summary files.
//!
//! Each session appends its rounds to `game_summary<N>.txt`, where `N` is the
//! session's game number. The file is opened in append mode for every round
//! and closed again straight after.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SummaryError;
use crate::result::RoundRecord;

/// Appends round summaries to one game's file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryWriter {
    path: PathBuf,
}

impl SummaryWriter {
    /// Creates a writer for game `game_number` inside `dir`.
    ///
    /// Nothing is touched on disk until the first round is appended.
    #[must_use]
    pub fn new(dir: &Path, game_number: usize) -> Self {
        Self {
            path: dir.join(file_name(game_number)),
        }
    }

    /// Returns the summary file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one round, creating the directory and file if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Io`] if the file cannot be created or written.
    pub fn append(&self, record: &RoundRecord) -> Result<(), SummaryError> {
        let io_error = |source| SummaryError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(io_error)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_error)?;
        file.write_all(render(record).as_bytes())
            .map_err(io_error)?;

        debug!(path = %self.path.display(), round = record.round, "appended round summary");
        Ok(())
    }
}

/// File name used for game `game_number`.
#[must_use]
pub fn file_name(game_number: usize) -> String {
    format!("game_summary{game_number}.txt")
}

/// Renders one round the way it is stored in the summary file.
///
/// ```text
/// ROUND 1:
/// Player Hand:
/// <card drawings>
/// Dealer Hand:
/// <card drawings>
/// Winner of ROUND 1: Player
///
/// ```
#[must_use]
pub fn render(record: &RoundRecord) -> String {
    format!(
        "ROUND {round}:\nPlayer Hand:\n{player}\nDealer Hand:\n{dealer}\nWinner of ROUND {round}: {winner}\n\n",
        round = record.round,
        player = record.player.art(),
        dealer = record.dealer.art(),
        winner = record.outcome.winner_label(),
    )
}
