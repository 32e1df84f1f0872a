//! Line-oriented session commands.
//!
//! A command line is whitespace separated; the first token names the
//! command (case-insensitive) and the rest are its arguments.

use std::path::PathBuf;

use kindred_tree::Color;

use crate::session::SessionError;

/// A parsed session command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert a node: `add <id> [parents...]`
    Add { id: String, parents: Vec<String> },
    /// Replace the tree with one read from a file
    Open(PathBuf),
    /// Write the tree to a file
    Save(PathBuf),
    /// Print the tree
    Print,
    /// Render SVG to a file, or to the output when no file is given
    Render(Option<PathBuf>),
    /// Print the lowest common ancestors of two nodes
    LowestCommonAncestors(String, String),
    /// Print every ancestor of a node
    Ancestors(String),
    /// Merge a tree read from a file into the current one
    Merge(PathBuf),
    /// Fix the render color of a node
    Pin { id: String, color: Color },
    Help,
    Exit,
}

/// Usage text printed by `help`
pub const HELP: &str = "\
Commands:
  add|addnode <id> [parents...]      add a node (no parents or exactly two)
  open <file>                        replace the tree with the one in <file>
  save <file>                        write the tree to <file>
  print                              print the tree
  render [file]                      render SVG to [file] or to the output
  lca|lowestcommonancestors <a> <b>  print the lowest common ancestors of <a> and <b>
  ancestors <id>                     print every ancestor of <id>
  merge <file>                       merge the tree in <file> into this one
  pin <id> <color>                   draw <id> in <color> (none, a name, rgb(r,g,b), rgba(r,g,b,a))
  help                               show this message
  exit                               leave the session";

impl Command {
    /// Parse one input line; blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// * [`SessionError::UnknownCommand`] for an unrecognized name
    /// * [`SessionError::MissingArgument`] when a required argument is absent
    /// * [`SessionError::InvalidColor`] for a bad `pin` color
    pub fn parse(line: &str) -> Result<Option<Self>, SessionError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let name = name.to_lowercase();
        let mut arg = |expected: &'static str| {
            tokens
                .next()
                .map(str::to_string)
                .ok_or_else(|| SessionError::missing_argument(&name, expected))
        };

        let command = match name.as_str() {
            "add" | "addnode" => {
                let id = arg("<id>")?;
                Self::Add {
                    id,
                    parents: tokens.map(str::to_string).collect(),
                }
            }
            "open" => Self::Open(arg("<file>")?.into()),
            "save" => Self::Save(arg("<file>")?.into()),
            "print" => Self::Print,
            "render" => Self::Render(tokens.next().map(PathBuf::from)),
            "lca" | "lowestcommonancestors" => {
                let first = arg("<a>")?;
                let second = arg("<b>")?;
                Self::LowestCommonAncestors(first, second)
            }
            "ancestors" => Self::Ancestors(arg("<id>")?),
            "merge" => Self::Merge(arg("<file>")?.into()),
            "pin" => {
                let id = arg("<id>")?;
                let color = arg("<color>")?.parse::<Color>()?;
                Self::Pin { id, color }
            }
            "help" => Self::Help,
            "exit" => Self::Exit,
            _ => return Err(SessionError::UnknownCommand(name)),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use kindred_tree::Rgb;

    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line_is_no_command() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_names_are_case_insensitive_with_aliases() {
        assert_eq!(parse("PRINT"), Command::Print);
        assert_eq!(
            parse("AddNode Cain Adam Eve"),
            Command::Add {
                id: "Cain".to_string(),
                parents: vec!["Adam".to_string(), "Eve".to_string()],
            }
        );
        assert_eq!(
            parse("LowestCommonAncestors a b"),
            parse("lca a b")
        );
    }

    #[test]
    fn test_render_file_is_optional() {
        assert_eq!(parse("render"), Command::Render(None));
        assert_eq!(
            parse("render out.svg"),
            Command::Render(Some(PathBuf::from("out.svg")))
        );
    }

    #[test]
    fn test_pin_parses_color() {
        assert_eq!(
            parse("pin Adam rgb(1,2,3)"),
            Command::Pin {
                id: "Adam".to_string(),
                color: Color::Rgb(Rgb::new(1, 2, 3)),
            }
        );
        assert!(matches!(
            Command::parse("pin Adam rgb(1,2)"),
            Err(SessionError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_missing_argument() {
        let err = Command::parse("lca onlyone").unwrap_err();
        assert!(matches!(
            err,
            SessionError::MissingArgument { ref command, expected: "<b>" } if command == "lca"
        ));
        assert!(matches!(
            Command::parse("open"),
            Err(SessionError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            Command::parse("frobnicate now"),
            Err(SessionError::UnknownCommand(ref name)) if name == "frobnicate"
        ));
    }
}
