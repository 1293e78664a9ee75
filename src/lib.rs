/// spop - playback command layer for a media-control daemon
pub mod commands;
pub mod config;
pub mod models;
pub mod session;

pub use commands::{Command, CommandError, CommandOutput, Dispatcher, OutputFormat, Response};
pub use config::Config;
pub use models::{PlaybackInfo, PlaybackStart, PlaybackState, Playlist, Track};
pub use session::{MemorySession, SessionEngine, SessionError};
