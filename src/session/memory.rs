/// In-memory session engine backed by a playlist library file
use super::{SessionEngine, SessionError};
use crate::models::{PlaybackInfo, PlaybackStart, PlaybackState, Playlist};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::RwLock;

/// On-disk library layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

impl Library {
    /// Read a library from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read library file: {}", path.display()))?;
        let library: Library = toml::from_str(&content)
            .with_context(|| format!("Failed to parse library file: {}", path.display()))?;

        tracing::debug!(
            "Loaded {} playlists from {}",
            library.playlists.len(),
            path.display()
        );
        Ok(library)
    }
}

struct SessionState {
    library: Library,
    playback: PlaybackInfo,
    available: bool,
    not_ready: Option<String>,
}

/// Session engine holding everything in memory
///
/// Library and playback state live behind one lock so that index checks and
/// the playback change they guard happen on the same state.
pub struct MemorySession {
    state: RwLock<SessionState>,
}

impl MemorySession {
    pub fn new(playlists: Vec<Playlist>) -> Self {
        Self {
            state: RwLock::new(SessionState {
                library: Library { playlists },
                playback: PlaybackInfo::default(),
                available: true,
                not_ready: None,
            }),
        }
    }

    pub fn from_library(library: Library) -> Self {
        Self::new(library.playlists)
    }

    pub fn from_library_file(path: &Path) -> Result<Self> {
        Ok(Self::from_library(Library::load(path)?))
    }

    /// Simulate losing (or regaining) the session
    pub async fn set_available(&self, available: bool) {
        let mut state = self.state.write().await;
        state.available = available;
        tracing::info!("Session availability set to {}", available);
    }

    /// Mark the playback backend as not ready; `None` clears it
    pub async fn set_not_ready(&self, reason: Option<String>) {
        let mut state = self.state.write().await;
        state.not_ready = reason;
    }

    /// Replace the playlist collection, as a sync with the backend would
    pub async fn replace_playlists(&self, playlists: Vec<Playlist>) {
        let mut state = self.state.write().await;
        state.library.playlists = playlists;
    }
}

impl Default for MemorySession {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl SessionState {
    fn check_available(&self) -> Result<(), SessionError> {
        if self.available {
            Ok(())
        } else {
            Err(SessionError::Unavailable)
        }
    }

    fn playlist(&self, index: usize) -> Result<&Playlist, SessionError> {
        self.library
            .playlists
            .get(index)
            .ok_or(SessionError::NoSuchPlaylist {
                index,
                count: self.library.playlists.len(),
            })
    }
}

#[async_trait]
impl SessionEngine for MemorySession {
    async fn playlists(&self) -> Result<Vec<Playlist>, SessionError> {
        let state = self.state.read().await;
        state.check_available()?;
        Ok(state.library.playlists.clone())
    }

    async fn playlist(&self, index: usize) -> Result<Playlist, SessionError> {
        let state = self.state.read().await;
        state.check_available()?;
        state.playlist(index).cloned()
    }

    async fn play(
        &self,
        playlist: usize,
        track: Option<usize>,
    ) -> Result<PlaybackStart, SessionError> {
        let mut state = self.state.write().await;
        state.check_available()?;

        let pl = state.playlist(playlist)?;
        let track_index = match track {
            Some(index) if index >= pl.track_count() => {
                return Err(SessionError::NoSuchTrack {
                    playlist,
                    index,
                    count: pl.track_count(),
                });
            }
            Some(index) => index,
            None if pl.tracks.is_empty() => return Err(SessionError::EmptyPlaylist(playlist)),
            None => 0,
        };
        let start = PlaybackStart {
            playlist_index: playlist,
            playlist_name: pl.name.clone(),
            track_index,
            track: pl.tracks[track_index].clone(),
        };

        if let Some(reason) = &state.not_ready {
            return Err(SessionError::NotReady(reason.clone()));
        }

        state.playback = PlaybackInfo {
            state: PlaybackState::Playing,
            playlist_index: Some(playlist),
            track_index: Some(track_index),
            current_track: Some(start.track.clone()),
        };

        tracing::info!(
            "Started playback of playlist {} at track {}",
            playlist,
            track_index
        );
        Ok(start)
    }

    async fn playback(&self) -> Result<PlaybackInfo, SessionError> {
        let state = self.state.read().await;
        state.check_available()?;
        Ok(state.playback.clone())
    }
}
