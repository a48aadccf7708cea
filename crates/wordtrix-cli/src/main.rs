mod input;
mod render;
mod shell;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordtrix_core::{
    execute, with_session, Collection, CollectionError, Command, Config, Confirmation, ErrorKind,
    JsonFileStore,
};

use crate::input::{ChannelSource, ReaderSource};
use crate::render::{write_result, CLI_HELP_HINT};
use crate::shell::{prompt_confirmation, Shell};

#[derive(Parser)]
#[command(name = "wordtrix", version, about = "WordTrix Anagram Manager CLI")]
struct Cli {
    /// Interactive mode.
    #[arg(long, group = "mode")]
    interactive: bool,

    /// List anagrams in db.
    #[arg(long, group = "mode")]
    list: bool,

    /// Clear anagrams in db (asks for confirmation unless --yes).
    #[arg(long, group = "mode")]
    clear: bool,

    /// Check for anagram and store the pair on success.
    #[arg(long, group = "mode", num_args = 2, value_names = ["SUB1", "SUB2"])]
    check: Option<Vec<String>>,

    /// Check for anagram match in db.
    #[arg(long = "match", group = "mode", value_name = "SUB1")]
    match_subject: Option<String>,

    /// Delete the entry at a 1-based row number.
    #[arg(long, group = "mode", value_name = "ROW", allow_hyphen_values = true)]
    delete: Option<String>,

    /// Skip the confirmation prompt of --clear.
    #[arg(long)]
    yes: bool,

    /// Database file (overrides WORDTRIX_DB).
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Keep the database in the per-user data directory.
    #[arg(long, conflicts_with = "db")]
    user: bool,

    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

/// Selected operation mode.
enum Mode {
    Interactive,
    Single(Command),
}

impl Cli {
    fn mode(&self) -> Result<Option<Mode>, CollectionError> {
        // clap's `requires` sees the implicit `false` of a flag as present.
        if self.yes && !self.clear {
            return Err(CollectionError::Usage("--yes only applies to --clear".to_string()));
        }

        let command = if self.interactive {
            return Ok(Some(Mode::Interactive));
        } else if self.list {
            Command::List
        } else if self.clear {
            Command::Clear
        } else if let Some(subjects) = &self.check {
            Command::check_from_args(subjects.as_slice())?
        } else if let Some(query) = &self.match_subject {
            Command::Match {
                query: query.clone(),
            }
        } else if let Some(position) = &self.delete {
            Command::Delete {
                position: position.clone(),
            }
        } else {
            return Ok(None);
        };
        Ok(Some(Mode::Single(command)))
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mode = match cli.mode() {
        Ok(Some(mode)) => mode,
        Ok(None) => {
            eprintln!("ERROR: Please select an operation mode. {CLI_HELP_HINT}");
            return Ok(ExitCode::from(2));
        }
        Err(err) => {
            eprintln!("ERROR: {err}. {CLI_HELP_HINT}");
            return Ok(ExitCode::from(2));
        }
    };

    let config = Config::from_env(cli.db.as_deref(), cli.user)
        .context("failed to resolve database location")?;
    debug!(db = %config.db_path.display(), "using database");

    let store = JsonFileStore::new(&config.db_path);
    // The session is saved before any front-end error is propagated.
    let outcome = with_session(store, |collection| match mode {
        Mode::Interactive => run_interactive(collection),
        Mode::Single(command) => run_single(collection, command, cli.yes),
    })
    .with_context(|| format!("database {}", config.db_path.display()))?;
    outcome
}

fn run_interactive(collection: &mut Collection) -> Result<ExitCode> {
    let source = ChannelSource::stdin_with_interrupt();
    Shell::new(collection, source, io::stdout().lock())
        .run()
        .context("interactive shell I/O failed")?;
    Ok(ExitCode::SUCCESS)
}

fn run_single(
    collection: &mut Collection,
    command: Command,
    assume_yes: bool,
) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Welcome to the Wordtrix.")?;
    writeln!(stdout)?;

    let result = execute(collection, command, || {
        if assume_yes {
            Confirmation::Yes
        } else {
            prompt_confirmation(&mut ReaderSource(io::stdin().lock()), &mut stdout)
                .unwrap_or(Confirmation::No)
        }
    });
    write_result(&mut stdout, &result, CLI_HELP_HINT)?;

    Ok(match result {
        Err(err) if err.kind() == ErrorKind::Usage => ExitCode::from(2),
        _ => ExitCode::SUCCESS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Event;
    use clap::CommandFactory;
    use wordtrix_core::{AnagramPair, MemoryStore};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_takes_two_values() {
        let cli = Cli::try_parse_from(["wordtrix", "--check", "listen", "silent"]).unwrap();
        assert!(matches!(
            cli.mode(),
            Ok(Some(Mode::Single(Command::Check { .. })))
        ));
        assert!(Cli::try_parse_from(["wordtrix", "--check", "listen"]).is_err());
    }

    #[test]
    fn modes_are_exclusive() {
        assert!(Cli::try_parse_from(["wordtrix", "--list", "--clear"]).is_err());
        assert!(Cli::try_parse_from(["wordtrix", "--interactive", "--match", "tops"]).is_err());
    }

    #[test]
    fn yes_requires_clear() {
        let cli = Cli::try_parse_from(["wordtrix", "--list", "--yes"]).unwrap();
        assert!(matches!(cli.mode(), Err(CollectionError::Usage(_))));
        let cli = Cli::try_parse_from(["wordtrix", "--yes"]).unwrap();
        assert!(matches!(cli.mode(), Err(CollectionError::Usage(_))));

        let cli = Cli::try_parse_from(["wordtrix", "--clear", "--yes"]).unwrap();
        assert!(matches!(cli.mode(), Ok(Some(Mode::Single(Command::Clear)))));
    }

    #[test]
    fn shell_failure_still_saves_session() {
        let (tx, source) = ChannelSource::channel();
        tx.send(Event::Line(b"anagram_check stop, pots\n".to_vec())).unwrap();
        tx.send(Event::Failed(io::Error::new(io::ErrorKind::BrokenPipe, "closed")))
            .unwrap();

        let mut store = MemoryStore::default();
        let outcome = with_session(&mut store, |collection| {
            Shell::new(collection, source, Vec::new()).run()
        })
        .unwrap();

        assert!(outcome.is_err());
        assert_eq!(store.records(), &[AnagramPair::new("stop", "pots")]);
    }

    #[test]
    fn negative_delete_reaches_core() {
        let cli = Cli::try_parse_from(["wordtrix", "--delete", "-1"]).unwrap();
        assert!(matches!(
            cli.mode(),
            Ok(Some(Mode::Single(Command::Delete { ref position }))) if position == "-1"
        ));
    }

    #[test]
    fn no_mode_selected() {
        let cli = Cli::try_parse_from(["wordtrix"]).unwrap();
        assert!(matches!(cli.mode(), Ok(None)));
    }
}
