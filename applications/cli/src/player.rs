//! External media player launcher.

use std::io;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// Player binary invoked for playable items.
const DEFAULT_PLAYER: &str = "vlc";

/// Errors raised when launching the player. Both are recoverable: the
/// caller reports them and the session continues.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Player binary is not on PATH
    #[error("{program} not found. Please install the {program} media player.")]
    NotFound { program: String },

    /// Any other spawn failure
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Spawns the external player detached: the CLI neither waits for it nor
/// inspects its exit code.
pub struct Player {
    program: String,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER)
    }
}

impl Player {
    /// Create a launcher for the given player binary.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Launch the player on a stream URL with a window title.
    ///
    /// Success means only that the spawn call itself succeeded; playback
    /// is not confirmed.
    pub fn launch(&self, url: &str, title: &str) -> Result<(), PlayerError> {
        debug!(program = %self.program, url = %url, "Launching player");

        let spawned = Command::new(&self.program)
            .arg(url)
            .arg("--no-video-title-show")
            .arg("--input-title-format")
            .arg(title)
            .spawn();

        match spawned {
            Ok(_child) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(PlayerError::NotFound {
                program: self.program.clone(),
            }),
            Err(source) => Err(PlayerError::Spawn {
                program: self.program.clone(),
                source,
            }),
        }
    }
}
