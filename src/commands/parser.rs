/// Text command parsing
use crate::commands::{Command, CommandError};
use std::str::FromStr;

fn parse_index(what: &str, value: &str) -> Result<usize, CommandError> {
    value.parse::<usize>().map_err(|_| CommandError::InvalidIndex {
        what: what.to_string(),
        value: value.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse one request line: `ls`, `ls N`, `play N`, `play N M` or `status`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::EmptyCommand)?;
        let args: Vec<&str> = words.collect();

        match (name, args.as_slice()) {
            ("ls", []) => Ok(Command::ListPlaylists),
            ("ls", [pl]) => Ok(Command::ListTracks {
                playlist: parse_index("playlist", pl)?,
            }),
            ("play", [pl]) => Ok(Command::PlayPlaylist {
                playlist: parse_index("playlist", pl)?,
            }),
            ("play", [pl, tr]) => Ok(Command::PlayTrack {
                playlist: parse_index("playlist", pl)?,
                track: parse_index("track", tr)?,
            }),
            ("status", []) => Ok(Command::Status),
            ("ls" | "play" | "status", _) => Err(CommandError::WrongArity {
                name: name.to_string(),
            }),
            _ => Err(CommandError::UnknownCommand {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("ls".parse::<Command>(), Ok(Command::ListPlaylists));
        assert_eq!(
            "ls 3".parse::<Command>(),
            Ok(Command::ListTracks { playlist: 3 })
        );
        assert_eq!(
            "  play 1  ".parse::<Command>(),
            Ok(Command::PlayPlaylist { playlist: 1 })
        );
        assert_eq!(
            "play 1 4".parse::<Command>(),
            Ok(Command::PlayTrack {
                playlist: 1,
                track: 4
            })
        );
        assert_eq!("status".parse::<Command>(), Ok(Command::Status));
    }

    #[test]
    fn test_parse_negative_index() {
        assert_eq!(
            "play 0 -1".parse::<Command>(),
            Err(CommandError::InvalidIndex {
                what: "track".to_string(),
                value: "-1".to_string()
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::EmptyCommand));
        assert_eq!(
            "play".parse::<Command>(),
            Err(CommandError::WrongArity {
                name: "play".to_string()
            })
        );
        assert_eq!(
            "shuffle".parse::<Command>(),
            Err(CommandError::UnknownCommand {
                name: "shuffle".to_string()
            })
        );
    }
}
