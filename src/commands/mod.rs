/// Command layer between a control channel and the session engine
pub mod parser;
pub mod playback;
pub mod playlists;
pub mod types;

pub use types::*;

pub use playback::{play_playlist, play_track, status};
pub use playlists::{list_playlists, list_tracks};

use crate::session::SessionEngine;
use std::sync::Arc;

/// A parsed client request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListPlaylists,
    ListTracks { playlist: usize },
    PlayPlaylist { playlist: usize },
    PlayTrack { playlist: usize, track: usize },
    Status,
}

/// Routes commands to the session engine and renders their results
///
/// Holds nothing but the engine handle, so one dispatcher can be shared
/// across any number of concurrent clients.
#[derive(Clone)]
pub struct Dispatcher {
    session: Arc<dyn SessionEngine>,
    format: OutputFormat,
}

impl Dispatcher {
    pub fn new(session: Arc<dyn SessionEngine>) -> Self {
        Self {
            session,
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub async fn execute(&self, command: &Command) -> Response {
        tracing::debug!("Executing {:?}", command);
        let session = self.session.as_ref();

        let result = match *command {
            Command::ListPlaylists => list_playlists(session).await,
            Command::ListTracks { playlist } => list_tracks(session, playlist).await,
            Command::PlayPlaylist { playlist } => play_playlist(session, playlist).await,
            Command::PlayTrack { playlist, track } => play_track(session, playlist, track).await,
            Command::Status => status(session).await,
        };

        if let Err(e) = &result {
            tracing::debug!("{:?} failed: {}", command, e);
        }
        Response(result)
    }

    /// Parse and execute one request line; parse failures become error responses
    pub async fn execute_line(&self, line: &str) -> Response {
        match line.parse::<Command>() {
            Ok(command) => self.execute(&command).await,
            Err(e) => {
                tracing::warn!("Rejected request {:?}: {}", line, e);
                Response(Err(e))
            }
        }
    }

    /// Append the complete rendered response for `command` to `result`
    pub async fn run_into(&self, command: &Command, result: &mut String) {
        let rendered = self.execute(command).await.render(self.format);
        result.push_str(&rendered);
    }

    /// Like [`Dispatcher::run_into`], for an unparsed request line
    pub async fn run_line_into(&self, line: &str, result: &mut String) {
        let rendered = self.execute_line(line).await.render(self.format);
        result.push_str(&rendered);
    }
}
