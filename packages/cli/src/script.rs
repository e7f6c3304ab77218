//! Line-based editor scripts
//!
//! ```text
//! # comment
//! edit 0 Hello
//! add 0
//! component 1 Component1
//! undo
//! show
//! ```

use std::str::FromStr;
use strata_editor::BlockId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Append,
    Add { index: usize },
    Edit { block_id: BlockId, content: String },
    Component { block_id: BlockId, component_type: String },
    Delete { block_id: BlockId },
    Undo,
    Redo,
    Show,
}

/// A command with the line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ScriptCommand,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{name}'")]
    UnknownCommand { line: usize, name: String },

    #[error("line {line}: '{name}' expects {expected}")]
    MissingArgument {
        line: usize,
        name: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: '{value}' is not a number")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: unexpected '{extra}' after '{name}'")]
    TrailingInput {
        line: usize,
        name: &'static str,
        extra: String,
    },
}

/// Parse a whole script, skipping blank lines and `#` comments
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut commands = Vec::new();

    for (offset, raw) in source.lines().enumerate() {
        let line = offset + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        commands.push(ScriptLine {
            line,
            command: parse_line(text, line)?,
        });
    }

    Ok(commands)
}

fn parse_line(text: &str, line: usize) -> Result<ScriptCommand, ScriptError> {
    let (name, rest) = split_word(text);

    let command = match name {
        "append" => no_args("append", rest, line, ScriptCommand::Append)?,
        "undo" => no_args("undo", rest, line, ScriptCommand::Undo)?,
        "redo" => no_args("redo", rest, line, ScriptCommand::Redo)?,
        "show" => no_args("show", rest, line, ScriptCommand::Show)?,

        "add" => {
            let (index, extra) = split_word(rest);
            let index = number("add", index, "an index", line)?;
            no_args("add", extra, line, ScriptCommand::Add { index })?
        }

        "edit" => {
            let (id, content) = split_word(rest);
            ScriptCommand::Edit {
                block_id: BlockId(number("edit", id, "a block id", line)?),
                content: content.to_string(),
            }
        }

        "component" => {
            let (id, rest) = split_word(rest);
            let block_id = BlockId(number("component", id, "a block id", line)?);
            let (component_type, extra) = split_word(rest);
            if component_type.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line,
                    name: "component",
                    expected: "a component type",
                });
            }
            no_args(
                "component",
                extra,
                line,
                ScriptCommand::Component {
                    block_id,
                    component_type: component_type.to_string(),
                },
            )?
        }

        "delete" => {
            let (id, extra) = split_word(rest);
            let block_id = BlockId(number("delete", id, "a block id", line)?);
            no_args("delete", extra, line, ScriptCommand::Delete { block_id })?
        }

        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                name: other.to_string(),
            })
        }
    };

    Ok(command)
}

/// Split off the first whitespace-separated word
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

fn number<N: FromStr>(
    name: &'static str,
    word: &str,
    expected: &'static str,
    line: usize,
) -> Result<N, ScriptError> {
    if word.is_empty() {
        return Err(ScriptError::MissingArgument {
            line,
            name,
            expected,
        });
    }

    word.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: word.to_string(),
    })
}

fn no_args(
    name: &'static str,
    rest: &str,
    line: usize,
    command: ScriptCommand,
) -> Result<ScriptCommand, ScriptError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ScriptError::TrailingInput {
            line,
            name,
            extra: rest.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(source: &str) -> Vec<ScriptCommand> {
        parse_script(source)
            .unwrap()
            .into_iter()
            .map(|line| line.command)
            .collect()
    }

    #[test]
    fn test_parse_all_commands() {
        let source = "append\nadd 2\nedit 3 Hello world\ncomponent 4 Component1\ndelete 5\nundo\nredo\nshow\n";

        assert_eq!(
            commands(source),
            vec![
                ScriptCommand::Append,
                ScriptCommand::Add { index: 2 },
                ScriptCommand::Edit {
                    block_id: BlockId(3),
                    content: "Hello world".to_string(),
                },
                ScriptCommand::Component {
                    block_id: BlockId(4),
                    component_type: "Component1".to_string(),
                },
                ScriptCommand::Delete {
                    block_id: BlockId(5)
                },
                ScriptCommand::Undo,
                ScriptCommand::Redo,
                ScriptCommand::Show,
            ]
        );
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let parsed = parse_script("# setup\n\n  edit 0 x\n   # note\nshow").unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].line, 3);
        assert_eq!(parsed[1].line, 5);
    }

    #[test]
    fn test_edit_without_text_clears_block() {
        assert_eq!(
            commands("edit 7"),
            vec![ScriptCommand::Edit {
                block_id: BlockId(7),
                content: String::new(),
            }]
        );
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        assert_eq!(
            parse_script("show\nfrobnicate"),
            Err(ScriptError::UnknownCommand {
                line: 2,
                name: "frobnicate".to_string(),
            })
        );

        assert_eq!(
            parse_script("\n\ndelete abc"),
            Err(ScriptError::InvalidNumber {
                line: 3,
                value: "abc".to_string(),
            })
        );

        let err = parse_script("add").unwrap_err();
        assert_eq!(err.to_string(), "line 1: 'add' expects an index");

        let err = parse_script("undo now").unwrap_err();
        assert!(matches!(err, ScriptError::TrailingInput { line: 1, .. }));
    }

    #[test]
    fn test_component_requires_type() {
        let err = parse_script("component 1").unwrap_err();
        assert_eq!(
            err,
            ScriptError::MissingArgument {
                line: 1,
                name: "component",
                expected: "a component type",
            }
        );
    }
}
