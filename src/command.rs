use crate::errors::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tab(String),
    Period(String),
    Show,
    Quit,
}

impl Command {
    /// Parses a line of input. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(None);
        };
        let argument = parts.next();
        if parts.next().is_some() {
            return Err(CommandError::TrailingInput(line.trim().to_string()));
        }

        let command = match (verb, argument) {
            ("tab", Some(tab)) => Command::Tab(tab.to_string()),
            ("period", Some(period)) => Command::Period(period.to_string()),
            ("tab" | "period", None) => return Err(CommandError::MissingArgument(verb.to_string())),
            ("show", None) => Command::Show,
            ("quit" | "exit", None) => Command::Quit,
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selection_commands() {
        assert_eq!(
            Command::parse("tab playlists").unwrap(),
            Some(Command::Tab("playlists".into()))
        );
        assert_eq!(
            Command::parse("  period   long_term ").unwrap(),
            Some(Command::Period("long_term".into()))
        );
        assert_eq!(Command::parse("show").unwrap(), Some(Command::Show));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(matches!(
            Command::parse("tab"),
            Err(CommandError::MissingArgument(verb)) if verb == "tab"
        ));
        assert!(matches!(
            Command::parse("tab a b"),
            Err(CommandError::TrailingInput(_))
        ));
        assert!(matches!(
            Command::parse("reload"),
            Err(CommandError::Unknown(_))
        ));
        assert!(matches!(
            Command::parse("show now"),
            Err(CommandError::Unknown(_))
        ));
    }
}
