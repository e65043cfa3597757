//! Command-line argument parsing for the `quill` binary
//!
//! Supports:
//! - Toggling bold / italic on a string
//! - Stripping styles back to plain ASCII
//! - Per-character style detection (plain or JSON)
//! - Replaying a multi-cursor insert or backspace over a string

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::EditorConfig;
use crate::editable::Offset;
use crate::messages::{CursorMsg, EditMsg, Msg};
use crate::model::EditorModel;
use crate::style::{self, Classification, StyleBit};
use crate::update::update;

/// Unicode bold/italic styling and multi-cursor editing
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Unicode bold/italic text styling")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Toggle bold on the input
    Bold {
        /// Text to style (reads stdin when omitted)
        text: Option<String>,
    },
    /// Toggle italic on the input
    Italic {
        /// Text to style (reads stdin when omitted)
        text: Option<String>,
    },
    /// Strip bold and italic, leaving plain ASCII letters and digits
    Normalize {
        /// Text to normalize (reads stdin when omitted)
        text: Option<String>,
    },
    /// Report the style of every character
    Detect {
        /// Text to inspect (reads stdin when omitted)
        text: Option<String>,
        /// Emit JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
    /// Apply one edit at several carets at once
    Edit {
        /// Caret offset in UTF-16 code units (repeatable; the first is primary)
        #[arg(long = "cursor", value_name = "N", required = true)]
        cursors: Vec<Offset>,
        /// Insert TEXT at every caret
        #[arg(long, value_name = "TEXT", conflicts_with = "delete")]
        insert: Option<String>,
        /// Delete the character before every caret
        #[arg(long)]
        delete: bool,
        /// Text to edit (reads stdin when omitted)
        text: Option<String>,
    },
}

/// Multi-cursor edit replayed by `quill edit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Insert(String),
    Delete,
}

/// What to do with the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Toggle(StyleBit),
    Normalize,
    Detect { json: bool },
    Edit { cursors: Vec<Offset>, op: EditOp },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub action: Action,
    /// Input given on the command line; `None` means read stdin
    pub text: Option<String>,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig> {
        let (action, text) = match self.command {
            Command::Bold { text } => (Action::Toggle(StyleBit::BOLD), text),
            Command::Italic { text } => (Action::Toggle(StyleBit::ITALIC), text),
            Command::Normalize { text } => (Action::Normalize, text),
            Command::Detect { text, json } => (Action::Detect { json }, text),
            Command::Edit {
                cursors,
                insert,
                delete,
                text,
            } => {
                if cursors.is_empty() {
                    bail!("edit needs at least one --cursor");
                }
                let op = match (insert, delete) {
                    (Some(inserted), false) => EditOp::Insert(inserted),
                    (None, true) => EditOp::Delete,
                    (Some(_), true) => bail!("--insert and --delete are mutually exclusive"),
                    (None, false) => bail!("edit needs --insert TEXT or --delete"),
                };
                (Action::Edit { cursors, op }, text)
            }
        };
        Ok(RunConfig { action, text })
    }
}

/// One row of `quill detect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharReport {
    pub char: char,
    /// Plain form, `None` for characters with no styled counterpart
    pub base: Option<char>,
    pub style: &'static str,
}

impl CharReport {
    pub fn of(ch: char) -> Self {
        match style::classify(ch) {
            Classification::Styleable { base, style } => Self {
                char: ch,
                base: Some(base),
                style: style.name(),
            },
            Classification::Unstyleable => Self {
                char: ch,
                base: None,
                style: StyleBit::NORMAL.name(),
            },
        }
    }
}

impl Action {
    /// Run the action over `input`, returning what to print
    pub fn run(&self, input: &str, config: &EditorConfig) -> Result<String> {
        match self {
            Action::Toggle(bit) => Ok(style::toggle(*bit, input)),
            Action::Normalize => Ok(style::normalize(input)),
            Action::Detect { json } => {
                let reports: Vec<CharReport> = input.chars().map(CharReport::of).collect();
                if *json {
                    Ok(serde_json::to_string_pretty(&reports)?)
                } else {
                    Ok(reports
                        .iter()
                        .map(|r| {
                            let base = r.base.map_or_else(|| "-".to_string(), String::from);
                            format!("{}\t{}\t{}", r.char.escape_debug(), base, r.style)
                        })
                        .collect::<Vec<_>>()
                        .join("\n"))
                }
            }
            Action::Edit { cursors, op } => Ok(replay_edit(input, cursors, op, config)),
        }
    }
}

/// Click the first caret, add the rest, then send one edit message
fn replay_edit(input: &str, cursors: &[Offset], op: &EditOp, config: &EditorConfig) -> String {
    let mut model = EditorModel::with_text(input);
    model.config = config.clone();

    let mut offsets = cursors.iter().copied();
    if let Some(first) = offsets.next() {
        update(&mut model, Msg::Cursor(CursorMsg::Click(first)));
    }
    for offset in offsets {
        update(&mut model, Msg::Cursor(CursorMsg::AddCursor(offset)));
    }

    let msg = match op {
        EditOp::Insert(text) => EditMsg::InsertText(text.clone()),
        EditOp::Delete => EditMsg::DeleteBackward,
    };
    update(&mut model, Msg::Edit(msg));
    model.text()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit_args(cursors: Vec<Offset>, insert: Option<&str>, delete: bool) -> CliArgs {
        CliArgs {
            command: Command::Edit {
                cursors,
                insert: insert.map(String::from),
                delete,
                text: Some("abcdef".to_string()),
            },
        }
    }

    #[test]
    fn test_bold_subcommand() {
        let args = CliArgs {
            command: Command::Bold { text: None },
        };
        let config = args.into_config().unwrap();
        assert_eq!(config.action, Action::Toggle(StyleBit::BOLD));
        assert_eq!(config.text, None);
    }

    #[test]
    fn test_detect_json_flag() {
        let args = CliArgs {
            command: Command::Detect {
                text: Some("x".to_string()),
                json: true,
            },
        };
        let config = args.into_config().unwrap();
        assert_eq!(config.action, Action::Detect { json: true });
        assert_eq!(config.text.as_deref(), Some("x"));
    }

    #[test]
    fn test_edit_insert() {
        let config = edit_args(vec![1, 3], Some("-"), false).into_config().unwrap();
        assert_eq!(
            config.action,
            Action::Edit {
                cursors: vec![1, 3],
                op: EditOp::Insert("-".to_string())
            }
        );
    }

    #[test]
    fn test_edit_requires_an_operation() {
        assert!(edit_args(vec![1], None, false).into_config().is_err());
        assert!(edit_args(vec![1], Some("x"), true).into_config().is_err());
        assert!(edit_args(vec![], None, true).into_config().is_err());
    }

    #[test]
    fn test_parse_from_argv() {
        let args = CliArgs::try_parse_from([
            "quill", "edit", "--cursor", "2", "--cursor", "4", "--delete", "abcdef",
        ])
        .unwrap();
        let config = args.into_config().unwrap();
        let output = config
            .action
            .run(config.text.as_deref().unwrap(), &EditorConfig::default())
            .unwrap();
        assert_eq!(output, "acef");
    }

    #[test]
    fn test_insert_and_delete_conflict_in_argv() {
        let parsed = CliArgs::try_parse_from([
            "quill", "edit", "--cursor", "1", "--insert", "x", "--delete",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_run_toggle_and_normalize() {
        let config = EditorConfig::default();
        let bold = Action::Toggle(StyleBit::BOLD).run("Hi 5", &config).unwrap();
        assert_eq!(bold, "\u{1D5DB}\u{1D5F6} \u{1D7F1}");
        assert_eq!(Action::Normalize.run(&bold, &config).unwrap(), "Hi 5");
    }

    #[test]
    fn test_detect_plain_output() {
        let out = Action::Detect { json: false }
            .run("a\u{1D622} ", &EditorConfig::default())
            .unwrap();
        assert_eq!(out, "a\ta\tnormal\n\u{1D622}\ta\titalic\n \t-\tnormal");
    }

    #[test]
    fn test_detect_json_output() {
        let out = Action::Detect { json: true }
            .run("\u{1D5EE}", &EditorConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["base"], "a");
        assert_eq!(value[0]["style"], "bold");
    }

    #[test]
    fn test_single_cursor_edit_uses_default_editing() {
        let out = Action::Edit {
            cursors: vec![3],
            op: EditOp::Insert("!".to_string()),
        }
        .run("abc", &EditorConfig::default())
        .unwrap();
        assert_eq!(out, "abc!");
    }
}
