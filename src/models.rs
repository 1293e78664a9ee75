/// Core data models shared by the session engine and the command layer
use serde::{Deserialize, Serialize};

/// A single track within a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub duration_ms: u64,
}

impl Track {
    /// Duration formatted as `m:ss`
    pub fn duration_display(&self) -> String {
        let total_secs = self.duration_ms / 1000;
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }
}

/// An ordered collection of tracks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub name: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            tracks,
        }
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    Stopped,
    Playing,
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackState::Stopped => write!(f, "stopped"),
            PlaybackState::Playing => write!(f, "playing"),
        }
    }
}

/// Snapshot of what the session is currently playing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackInfo {
    pub state: PlaybackState,
    pub playlist_index: Option<usize>,
    pub track_index: Option<usize>,
    pub current_track: Option<Track>,
}

/// A playback start, described from the same state the indices were checked against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackStart {
    pub playlist_index: usize,
    pub playlist_name: String,
    pub track_index: usize,
    pub track: Track,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            state: PlaybackState::Stopped,
            playlist_index: None,
            track_index: None,
            current_track: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_display() {
        let track = Track {
            title: "Song".to_string(),
            artist: "Artist".to_string(),
            album: String::new(),
            duration_ms: 185_400,
        };
        assert_eq!(track.duration_display(), "3:05");
    }

    #[test]
    fn test_playback_state_names() {
        assert_eq!(PlaybackState::Stopped.to_string(), "stopped");
        assert_eq!(PlaybackState::Playing.to_string(), "playing");
        assert!(serde_json::from_str::<PlaybackState>("\"paused\"").is_err());
    }

    #[test]
    fn test_default_playback_is_stopped() {
        let info = PlaybackInfo::default();
        assert_eq!(info.state, PlaybackState::Stopped);
        assert!(info.current_track.is_none());
    }
}
