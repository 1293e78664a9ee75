/// Playback control commands
use crate::commands::{CommandError, CommandOutput, PlaybackStarted};
use crate::models::PlaybackStart;
use crate::session::SessionEngine;

/// Play a playlist from its first track
pub async fn play_playlist(
    session: &dyn SessionEngine,
    playlist: usize,
) -> Result<CommandOutput, CommandError> {
    let pl = session.playlist(playlist).await.map_err(|e| {
        tracing::warn!("Rejected play of playlist {}: {}", playlist, e);
        CommandError::from(e)
    })?;

    if pl.tracks.is_empty() {
        return Err(CommandError::EmptyPlaylist { index: playlist });
    }

    // The engine re-checks the index under its own lock; only its answer is reported
    let start = session.play(playlist, None).await?;
    Ok(started(start, None))
}

/// Play a specific track within a playlist
pub async fn play_track(
    session: &dyn SessionEngine,
    playlist: usize,
    track: usize,
) -> Result<CommandOutput, CommandError> {
    let pl = session.playlist(playlist).await.map_err(|e| {
        tracing::warn!("Rejected play of playlist {}: {}", playlist, e);
        CommandError::from(e)
    })?;

    if track >= pl.track_count() {
        tracing::warn!(
            "Rejected play of track {} in playlist {} ({} tracks)",
            track,
            playlist,
            pl.track_count()
        );
        return Err(CommandError::NoSuchTrack {
            playlist,
            index: track,
            count: pl.track_count(),
        });
    }

    let start = session.play(playlist, Some(track)).await?;
    Ok(started(start, Some(track)))
}

/// Report what is currently playing
pub async fn status(session: &dyn SessionEngine) -> Result<CommandOutput, CommandError> {
    let info = session.playback().await?;
    Ok(CommandOutput::Status(info))
}

fn started(start: PlaybackStart, requested_track: Option<usize>) -> CommandOutput {
    CommandOutput::Playing(PlaybackStarted {
        playlist: start.playlist_index,
        playlist_name: start.playlist_name,
        requested_track,
        track: start.track_index,
        title: start.track.title,
        artist: start.track.artist,
    })
}
