//! Interactive line shell.
//!
//! Reads one command per line, runs it through [`wordtrix_core::execute`],
//! and prints the result. The shell never saves: the caller owns the session
//! and closes it once the loop returns.

use std::io::{self, Write};

use tracing::debug;
use wordtrix_core::{execute, Collection, CollectionError, Command, Confirmation};

use crate::input::{Event, LineSource};
use crate::render::{write_error, write_result, SHELL_HELP_HINT};

pub const INTRO: &str = "Welcome to the Wordtrix. Type help or ? to list commands.";
pub const PROMPT: &str = "(wordtrix) ";
pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all words? (y/n): ";

const COMMANDS: &[(&str, &str)] = &[
    (
        "anagram_check",
        "Check two text objects for anagram: anagram_check <subject1>, <subject2>",
    ),
    (
        "anagram_match",
        "Check a subject for an anagram in the list: anagram_match <subject>",
    ),
    ("list", "List all stored words."),
    (
        "delete",
        "Delete a word entry by specifying the row number: delete <row_number>",
    ),
    ("clear", "Clear all words (cannot be undone) with confirmation."),
    ("exit", "Exit the Words Manager."),
    ("help", "List available commands with \"help\" or detailed help with \"help cmd\"."),
];

/// What a single input line asks the shell to do.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Run(Command),
    Help(Option<String>),
    Exit,
    Nothing,
    Invalid(CollectionError),
    Unknown(String),
}

fn parse_line(line: &str) -> Action {
    let line = line.trim();
    if line.is_empty() {
        return Action::Nothing;
    }

    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    match verb {
        "anagram_check" => {
            if arg.is_empty() {
                return Action::Invalid(usage("anagram_check needs two subjects"));
            }
            let subjects: Vec<&str> = arg.split(',').map(str::trim).collect();
            match Command::check_from_args(&subjects) {
                Ok(cmd) => Action::Run(cmd),
                Err(err) => Action::Invalid(err),
            }
        }
        "anagram_match" => {
            if arg.is_empty() {
                return Action::Invalid(usage("anagram_match needs a subject"));
            }
            Action::Run(Command::Match {
                query: arg.to_string(),
            })
        }
        "list" => Action::Run(Command::List),
        "delete" => Action::Run(Command::Delete {
            position: arg.to_string(),
        }),
        "clear" => Action::Run(Command::Clear),
        "exit" => Action::Exit,
        "help" | "?" => Action::Help((!arg.is_empty()).then(|| arg.to_string())),
        _ if line.starts_with('?') => Action::Help(Some(line[1..].trim().to_string())),
        _ => Action::Unknown(line.to_string()),
    }
}

fn usage(message: &str) -> CollectionError {
    CollectionError::Usage(message.to_string())
}

/// Ask for confirmation on `output` and read the answer from `source`.
///
/// End of input or a read error counts as "no". An interrupt gives `None`.
pub fn prompt_confirmation<S: LineSource, W: Write>(
    source: &mut S,
    output: &mut W,
) -> Option<Confirmation> {
    if write!(output, "{CLEAR_PROMPT}").and_then(|_| output.flush()).is_err() {
        return Some(Confirmation::No);
    }
    match source.next_event() {
        Event::Line(answer) => Some(Confirmation::from_response(&String::from_utf8_lossy(&answer))),
        Event::Interrupt => None,
        Event::Eof | Event::Failed(_) => Some(Confirmation::No),
    }
}

pub struct Shell<'a, S, W> {
    collection: &'a mut Collection,
    source: S,
    output: W,
}

impl<'a, S: LineSource, W: Write> Shell<'a, S, W> {
    pub fn new(collection: &'a mut Collection, source: S, output: W) -> Self {
        Self {
            collection,
            source,
            output,
        }
    }

    /// Run until `exit`, end of input or an interrupt.
    ///
    /// Returns `Err` only when the terminal itself fails; the collection is
    /// left as the completed commands made it.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{INTRO}")?;
        writeln!(self.output)?;

        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let line = match self.source.next_event() {
                Event::Line(bytes) => bytes,
                Event::Eof => {
                    writeln!(self.output)?;
                    break;
                }
                Event::Interrupt => {
                    writeln!(self.output)?;
                    writeln!(self.output, "Interrupted. Exiting Words Manager.")?;
                    break;
                }
                Event::Failed(e) => return Err(e),
            };

            let action = match String::from_utf8(line) {
                Ok(line) => parse_line(&line),
                Err(_) => Action::Invalid(usage("input line is not valid UTF-8")),
            };
            debug!(?action, "shell input");
            match action {
                Action::Run(command) => {
                    let mut interrupted = false;
                    let result = execute(&mut *self.collection, command, || {
                        prompt_confirmation(&mut self.source, &mut self.output).unwrap_or_else(|| {
                            interrupted = true;
                            Confirmation::No
                        })
                    });
                    if interrupted {
                        writeln!(self.output)?;
                        writeln!(self.output, "Interrupted. Exiting Words Manager.")?;
                        break;
                    }
                    write_result(&mut self.output, &result, SHELL_HELP_HINT)?;
                }
                Action::Help(topic) => self.help(topic.as_deref())?,
                Action::Exit => {
                    writeln!(self.output, "Exiting Words Manager.")?;
                    break;
                }
                Action::Nothing => {}
                Action::Invalid(err) => write_error(&mut self.output, &err, SHELL_HELP_HINT)?,
                Action::Unknown(line) => writeln!(self.output, "*** Unknown syntax: {line}")?,
            }
        }
        Ok(())
    }

    fn help(&mut self, topic: Option<&str>) -> io::Result<()> {
        match topic {
            Some(topic) => match COMMANDS.iter().find(|(name, _)| *name == topic) {
                Some((_, doc)) => writeln!(self.output, "{doc}"),
                None => writeln!(self.output, "*** No help on {topic}"),
            },
            None => {
                writeln!(self.output)?;
                writeln!(self.output, "Documented commands (type help <topic>):")?;
                writeln!(self.output, "========================================")?;
                let names: Vec<&str> = COMMANDS.iter().map(|(name, _)| *name).collect();
                writeln!(self.output, "{}", names.join("  "))?;
                writeln!(self.output)
            }
        }
    }
}
