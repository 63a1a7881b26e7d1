//! Command parser for the : command line

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Review moderation
    Review(String),
    Approve,
    Deny,
    Dismiss,

    // Panels
    Map,
    Trends,

    Export,
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        "review" | "rev" | "open" => {
            if let Some(id) = args {
                Command::Review(id)
            } else {
                Command::Unknown(input.to_string())
            }
        }
        "approve" | "ok" => Command::Approve,
        "deny" | "reject" => Command::Deny,
        "dismiss" | "close" => Command::Dismiss,

        "map" | "regions" => Command::Map,
        "trends" | "spark" => Command::Trends,

        "export" | "exp" => Command::Export,
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_review_commands() {
        assert_eq!(parse_command("review 111"), Command::Review("111".to_string()));
        assert_eq!(parse_command("  rev   222 "), Command::Review("222".to_string()));
        assert_eq!(parse_command("approve"), Command::Approve);
        assert_eq!(parse_command("DENY"), Command::Deny);
        assert_eq!(parse_command("close"), Command::Dismiss);
    }

    #[test]
    fn test_review_requires_id() {
        assert_eq!(parse_command("review"), Command::Unknown("review".to_string()));
        assert_eq!(parse_command("review   "), Command::Unknown("review".to_string()));
    }

    #[test]
    fn test_parse_panel_commands() {
        assert_eq!(parse_command("map"), Command::Map);
        assert_eq!(parse_command("trends"), Command::Trends);
        assert_eq!(parse_command("export"), Command::Export);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }
}
