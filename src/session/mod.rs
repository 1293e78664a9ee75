/// Session engine boundary and implementations
pub mod memory;

use crate::models::{PlaybackInfo, PlaybackStart, Playlist};
use async_trait::async_trait;

pub use memory::MemorySession;

/// Error type for session engine operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no session available")]
    Unavailable,

    #[error("playback backend not ready: {0}")]
    NotReady(String),

    #[error("no such playlist {index} ({count} playlists)")]
    NoSuchPlaylist { index: usize, count: usize },

    #[error("no such track {index} in playlist {playlist} ({count} tracks)")]
    NoSuchTrack {
        playlist: usize,
        index: usize,
        count: usize,
    },

    #[error("playlist {0} is empty")]
    EmptyPlaylist(usize),
}

/// Live playlist, track and playback state the command layer talks to
///
/// Every call observes one consistent snapshot of the session. `play`
/// validates its indices against the same state it mutates, so a playlist
/// changing between a caller's check and the call shows up as an error.
#[async_trait]
pub trait SessionEngine: Send + Sync {
    /// Current ordered collection of playlists
    async fn playlists(&self) -> Result<Vec<Playlist>, SessionError>;

    /// A single playlist by position
    async fn playlist(&self, index: usize) -> Result<Playlist, SessionError>;

    /// Start playback of a playlist, at `track` or at its first track
    ///
    /// The returned names and track come from the state the indices were
    /// validated against.
    async fn play(&self, playlist: usize, track: Option<usize>)
        -> Result<PlaybackStart, SessionError>;

    /// What is playing right now
    async fn playback(&self) -> Result<PlaybackInfo, SessionError>;
}
