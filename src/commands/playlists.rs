/// Playlist listing commands
use crate::commands::{CommandError, CommandOutput, PlaylistEntry, TrackEntry};
use crate::session::SessionEngine;

/// List every playlist in the session with its index and track count
pub async fn list_playlists(session: &dyn SessionEngine) -> Result<CommandOutput, CommandError> {
    let playlists = session.playlists().await?;

    let entries = playlists
        .iter()
        .enumerate()
        .map(|(i, pl)| PlaylistEntry::from_playlist(i, pl))
        .collect();

    Ok(CommandOutput::Playlists { playlists: entries })
}

/// List the tracks of one playlist
pub async fn list_tracks(
    session: &dyn SessionEngine,
    playlist: usize,
) -> Result<CommandOutput, CommandError> {
    // Index check and enumeration come from the same snapshot
    let pl = session.playlist(playlist).await.map_err(|e| {
        tracing::warn!("Rejected track listing for playlist {}: {}", playlist, e);
        CommandError::from(e)
    })?;

    let tracks = pl
        .tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackEntry::from_track(i, t))
        .collect();

    Ok(CommandOutput::Tracks { playlist, tracks })
}
