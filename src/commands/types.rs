/// Command response types
use crate::models::{PlaybackInfo, Playlist, Track};
use crate::session::SessionError;
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub index: usize,
    pub name: String,
    pub track_count: usize,
}

impl PlaylistEntry {
    pub fn from_playlist(index: usize, playlist: &Playlist) -> Self {
        Self {
            index,
            name: playlist.name.clone(),
            track_count: playlist.track_count(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    pub index: usize,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
}

impl TrackEntry {
    pub fn from_track(index: usize, track: &Track) -> Self {
        Self {
            index,
            title: track.title.clone(),
            artist: track.artist.clone(),
            album: track.album.clone(),
            duration: track.duration_display(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PlaybackStarted {
    pub playlist: usize,
    pub playlist_name: String,
    /// Set when a specific track was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_track: Option<usize>,
    pub track: usize,
    pub title: String,
    pub artist: String,
}

/// Successful outcome of a command
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandOutput {
    Playlists { playlists: Vec<PlaylistEntry> },
    Tracks { playlist: usize, tracks: Vec<TrackEntry> },
    Playing(PlaybackStarted),
    Status(PlaybackInfo),
}

/// Every way a command can fail
///
/// None of these are fatal; they are rendered as a single `error:` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandError {
    #[error("no such playlist {index} ({count} playlists)")]
    NoSuchPlaylist { index: usize, count: usize },

    #[error("no such track {index} in playlist {playlist} ({count} tracks)")]
    NoSuchTrack {
        playlist: usize,
        index: usize,
        count: usize,
    },

    #[error("playlist {index} is empty")]
    EmptyPlaylist { index: usize },

    #[error("no session available")]
    Unavailable,

    #[error("could not start playback: {reason}")]
    PlaybackFailed { reason: String },

    #[error("empty command")]
    EmptyCommand,

    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    #[error("wrong number of arguments for {name}")]
    WrongArity { name: String },

    #[error("invalid {what} index: {value:?}")]
    InvalidIndex { what: String, value: String },
}

impl From<SessionError> for CommandError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Unavailable => CommandError::Unavailable,
            SessionError::NotReady(reason) => CommandError::PlaybackFailed { reason },
            SessionError::NoSuchPlaylist { index, count } => {
                CommandError::NoSuchPlaylist { index, count }
            }
            SessionError::NoSuchTrack {
                playlist,
                index,
                count,
            } => CommandError::NoSuchTrack {
                playlist,
                index,
                count,
            },
            SessionError::EmptyPlaylist(index) => CommandError::EmptyPlaylist { index },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The complete answer to one command, ready to be sent back to a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response(pub Result<CommandOutput, CommandError>);

impl Response {
    pub fn is_ok(&self) -> bool {
        self.0.is_ok()
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.render_text(),
            OutputFormat::Json => self.render_json(),
        }
    }

    /// Newline-terminated text; never empty
    pub fn render_text(&self) -> String {
        let lines = match &self.0 {
            Ok(output) => output_lines(output),
            Err(err) => vec![format!("error: {}", err)],
        };
        lines.iter().map(|line| format!("{}\n", line)).collect()
    }

    /// One JSON object per response, `{"ok": ...}` or `{"error": ...}`
    pub fn render_json(&self) -> String {
        let value = match &self.0 {
            Ok(output) => serde_json::json!({ "ok": output }),
            Err(err) => serde_json::json!({
                "error": { "message": err.to_string(), "detail": err },
            }),
        };
        match serde_json::to_string(&value) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(e) => format!("{{\"error\":{{\"message\":\"{}\"}}}}\n", e),
        }
    }
}

/// One entry per output line, without terminators
fn output_lines(output: &CommandOutput) -> Vec<String> {
    match output {
        CommandOutput::Playlists { playlists } if playlists.is_empty() => {
            vec!["no playlists".to_string()]
        }
        CommandOutput::Playlists { playlists } => playlists
            .iter()
            .map(|pl| format!("{} {} ({})", pl.index, pl.name, pl.track_count))
            .collect(),
        CommandOutput::Tracks { playlist, tracks } if tracks.is_empty() => {
            vec![format!("playlist {} is empty", playlist)]
        }
        CommandOutput::Tracks { tracks, .. } => tracks
            .iter()
            .map(|tr| {
                format!(
                    "{} {} -- \"{}\" -- \"{}\" ({})",
                    tr.index, tr.artist, tr.title, tr.album, tr.duration
                )
            })
            .collect(),
        CommandOutput::Playing(started) => vec![match started.requested_track {
            Some(track) => format!(
                "playing track {} of playlist {}: {} -- \"{}\"",
                track, started.playlist, started.artist, started.title
            ),
            None => format!(
                "playing playlist {} \"{}\": {} -- \"{}\"",
                started.playlist, started.playlist_name, started.artist, started.title
            ),
        }],
        CommandOutput::Status(info) => {
            let mut line = info.state.to_string();
            if let (Some(pl), Some(tr), Some(track)) =
                (info.playlist_index, info.track_index, &info.current_track)
            {
                line.push_str(&format!(
                    " {} {} {} -- \"{}\"",
                    pl, tr, track.artist, track.title
                ));
            }
            vec![line]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaybackState;

    #[test]
    fn test_render_playlists() {
        let response = Response(Ok(CommandOutput::Playlists {
            playlists: vec![
                PlaylistEntry {
                    index: 0,
                    name: "Favorites".to_string(),
                    track_count: 3,
                },
                PlaylistEntry {
                    index: 1,
                    name: "Road Trip".to_string(),
                    track_count: 0,
                },
            ],
        }));
        assert_eq!(response.render_text(), "0 Favorites (3)\n1 Road Trip (0)\n");
    }

    #[test]
    fn test_render_empty_listings_are_not_empty_text() {
        let playlists = Response(Ok(CommandOutput::Playlists {
            playlists: Vec::new(),
        }));
        assert_eq!(playlists.render_text(), "no playlists\n");

        let tracks = Response(Ok(CommandOutput::Tracks {
            playlist: 4,
            tracks: Vec::new(),
        }));
        assert_eq!(tracks.render_text(), "playlist 4 is empty\n");
    }

    #[test]
    fn test_render_error() {
        let response = Response(Err(CommandError::NoSuchPlaylist { index: 7, count: 2 }));
        assert_eq!(
            response.render_text(),
            "error: no such playlist 7 (2 playlists)\n"
        );
    }

    #[test]
    fn test_render_playback_lines() {
        let started = PlaybackStarted {
            playlist: 1,
            playlist_name: "Road Trip".to_string(),
            requested_track: None,
            track: 0,
            title: "Highway".to_string(),
            artist: "Band".to_string(),
        };
        let response = Response(Ok(CommandOutput::Playing(started.clone())));
        assert_eq!(
            response.render_text(),
            "playing playlist 1 \"Road Trip\": Band -- \"Highway\"\n"
        );

        let response = Response(Ok(CommandOutput::Playing(PlaybackStarted {
            requested_track: Some(0),
            ..started
        })));
        assert_eq!(
            response.render_text(),
            "playing track 0 of playlist 1: Band -- \"Highway\"\n"
        );
    }

    #[test]
    fn test_render_playing_status() {
        let info = PlaybackInfo {
            state: PlaybackState::Playing,
            playlist_index: Some(1),
            track_index: Some(0),
            current_track: Some(Track {
                title: "Highway".to_string(),
                artist: "Band".to_string(),
                album: String::new(),
                duration_ms: 0,
            }),
        };
        let response = Response(Ok(CommandOutput::Status(info)));
        assert_eq!(response.render_text(), "playing 1 0 Band -- \"Highway\"\n");
    }

    #[test]
    fn test_render_stopped_status() {
        let response = Response(Ok(CommandOutput::Status(PlaybackInfo::default())));
        assert_eq!(response.render_text(), "stopped\n");
    }

    #[test]
    fn test_render_json_error() {
        let response = Response(Err(CommandError::Unavailable));
        let json: serde_json::Value =
            serde_json::from_str(response.render(OutputFormat::Json).trim_end()).unwrap();
        assert_eq!(json["error"]["message"], "no session available");
        assert_eq!(json["error"]["detail"]["kind"], "unavailable");
    }

    #[test]
    fn test_render_json_status() {
        let info = PlaybackInfo {
            state: PlaybackState::Playing,
            playlist_index: Some(0),
            track_index: Some(2),
            current_track: None,
        };
        let response = Response(Ok(CommandOutput::Status(info)));
        let json: serde_json::Value =
            serde_json::from_str(response.render_json().trim_end()).unwrap();
        assert_eq!(json["ok"]["kind"], "status");
        assert_eq!(json["ok"]["state"], "playing");
        assert_eq!(json["ok"]["track_index"], 2);
    }
}
