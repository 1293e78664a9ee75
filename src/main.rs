/// Main entry point for the spop CLI
use anyhow::Context;
use clap::{Parser, Subcommand};
use spop::{Command, Config, Dispatcher, MemorySession, OutputFormat};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "spop",
    version = "0.1.0",
    about = "Playlist and playback control commands",
    long_about = None
)]
struct Args {
    #[command(subcommand)]
    command: Option<CliCommand>,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Playlist library file (overrides the configured one)
    #[arg(short = 'L', long)]
    library: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print responses as JSON
    #[arg(short, long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// List playlists, or the tracks of one playlist
    Ls {
        /// Playlist index
        playlist: Option<usize>,
    },

    /// Play a playlist, or one track of it
    Play {
        /// Playlist index
        playlist: usize,

        /// Track index within the playlist
        track: Option<usize>,
    },

    /// Show current playback status
    Status,

    /// Read commands from stdin, one per line
    Shell,
}

impl CliCommand {
    /// The dispatcher command this maps to; `None` for the interactive shell
    fn to_command(&self) -> Option<Command> {
        match *self {
            CliCommand::Ls { playlist: None } => Some(Command::ListPlaylists),
            CliCommand::Ls {
                playlist: Some(playlist),
            } => Some(Command::ListTracks { playlist }),
            CliCommand::Play {
                playlist,
                track: None,
            } => Some(Command::PlayPlaylist { playlist }),
            CliCommand::Play {
                playlist,
                track: Some(track),
            } => Some(Command::PlayTrack { playlist, track }),
            CliCommand::Status => Some(Command::Status),
            CliCommand::Shell => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, written_default) = match &args.config {
        Some(path) => (Config::load_from(path)?, None),
        None => {
            let path = Config::default_path()?;
            let (config, created) = Config::load_or_create(&path)?;
            (config, created.then_some(path))
        }
    };

    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.general.log_level.clone());
    init_logging(&log_level)?;

    if let Some(path) = written_default {
        info!("Wrote default configuration to {}", path.display());
    }

    let session = match args.library.clone().or_else(|| config.library_path()) {
        Some(path) => MemorySession::from_library_file(&path)?,
        None => {
            info!("No library configured, starting with an empty session");
            MemorySession::default()
        }
    };

    let format = if args.json || config.general.json_output {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let dispatcher = Dispatcher::new(Arc::new(session)).with_format(format);

    let command = args.command.unwrap_or(CliCommand::Shell);
    match command.to_command() {
        Some(command) => {
            let mut result = String::new();
            dispatcher.run_into(&command, &mut result).await;
            print!("{}", result);
        }
        None => run_shell(&dispatcher).await?,
    }

    Ok(())
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let level_filter: tracing_subscriber::filter::LevelFilter = level
        .parse()
        .with_context(|| format!("Invalid log level: {}", level))?;
    tracing_subscriber::fmt()
        .with_max_level(level_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn run_shell(dispatcher: &Dispatcher) -> anyhow::Result<()> {
    info!("Reading commands from stdin");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "bye") {
            break;
        }

        let mut result = String::new();
        dispatcher.run_line_into(line, &mut result).await;
        stdout.write_all(result.as_bytes()).await?;
        stdout.flush().await?;
    }

    Ok(())
}
