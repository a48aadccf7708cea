//! Turns command results into the text both front ends print.

use std::io::{self, Write};

use wordtrix_core::{CollectionError, Entry, Reply};

/// Printed after a usage error in the interactive shell.
pub const SHELL_HELP_HINT: &str = "Type help or ? to list commands.";

/// Printed after a usage error in single-shot mode.
pub const CLI_HELP_HINT: &str = "Use --help for usage.";

pub fn write_reply<W: Write>(out: &mut W, reply: &Reply) -> io::Result<()> {
    match reply {
        Reply::Added(entry) => writeln!(out, "Anagram found. Row added: {}", row(entry)),
        Reply::Matches { query, hits } => {
            for hit in hits {
                writeln!(out, "Match for >>{query}<< found at {}. row:", hit.position)?;
                writeln!(out, "  >>{}<< >>{}<<", hit.pair.subject1, hit.pair.subject2)?;
            }
            Ok(())
        }
        Reply::Listing(entries) => {
            for entry in entries {
                writeln!(out, "{}", row(entry))?;
            }
            Ok(())
        }
        Reply::Empty => writeln!(out, "No words available."),
        Reply::Deleted(entry) => writeln!(out, "Deleted {}", row_with_label(entry)),
        Reply::Cleared { .. } => writeln!(out, "All words cleared."),
    }
}

/// Report a failed command. `hint` follows usage errors only.
pub fn write_error<W: Write>(out: &mut W, err: &CollectionError, hint: &str) -> io::Result<()> {
    match err {
        CollectionError::Usage(message) => writeln!(out, "FAILED: {message}. {hint}"),
        CollectionError::NotAnagram { subject1, subject2 } => {
            writeln!(out, "No anagram found on >>{subject1}<< >>{subject2}<<")
        }
        CollectionError::InvalidPosition { .. } => writeln!(out, "Invalid row number."),
        CollectionError::NoMatch { query } => writeln!(out, "No anagram found in db for >>{query}<<"),
        CollectionError::Aborted => writeln!(out, "Clear aborted."),
    }
}

pub fn write_result<W: Write>(
    out: &mut W,
    result: &Result<Reply, CollectionError>,
    hint: &str,
) -> io::Result<()> {
    match result {
        Ok(reply) => write_reply(out, reply),
        Err(err) => write_error(out, err, hint),
    }
}

fn row(entry: &Entry) -> String {
    format!("{}. {} {}", entry.position, entry.pair.subject1, entry.pair.subject2)
}

fn row_with_label(entry: &Entry) -> String {
    format!(
        "{}. row: {} {}",
        entry.position, entry.pair.subject1, entry.pair.subject2
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordtrix_core::AnagramPair;

    fn entry(position: usize, s1: &str, s2: &str) -> Entry {
        Entry {
            position,
            pair: AnagramPair::new(s1, s2),
        }
    }

    fn reply_text(reply: &Reply) -> String {
        let mut out = Vec::new();
        write_reply(&mut out, reply).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn error_text(err: &CollectionError) -> String {
        let mut out = Vec::new();
        write_error(&mut out, err, SHELL_HELP_HINT).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn listing_is_numbered() {
        let text = reply_text(&Reply::Listing(vec![
            entry(1, "stop", "pots"),
            entry(2, "evil", "vile"),
        ]));
        assert_eq!(text, "1. stop pots\n2. evil vile\n");
    }

    #[test]
    fn match_prints_each_hit() {
        let text = reply_text(&Reply::Matches {
            query: "tops".into(),
            hits: vec![entry(1, "stop", "pots"), entry(3, "spot", "post")],
        });
        assert_eq!(
            text,
            "Match for >>tops<< found at 1. row:\n  >>stop<< >>pots<<\n\
             Match for >>tops<< found at 3. row:\n  >>spot<< >>post<<\n"
        );
    }

    #[test]
    fn deleted_and_added() {
        assert_eq!(
            reply_text(&Reply::Deleted(entry(2, "evil", "vile"))),
            "Deleted 2. row: evil vile\n"
        );
        assert_eq!(
            reply_text(&Reply::Added(entry(4, "evil", "vile"))),
            "Anagram found. Row added: 4. evil vile\n"
        );
    }

    #[test]
    fn usage_error_carries_hint() {
        let text = error_text(&CollectionError::Usage("check needs two subjects".into()));
        assert_eq!(
            text,
            "FAILED: check needs two subjects. Type help or ? to list commands.\n"
        );
    }

    #[test]
    fn not_found_messages() {
        assert_eq!(
            error_text(&CollectionError::InvalidPosition { position: 9, len: 1 }),
            "Invalid row number.\n"
        );
        assert_eq!(
            error_text(&CollectionError::NoMatch { query: "tops".into() }),
            "No anagram found in db for >>tops<<\n"
        );
        assert_eq!(error_text(&CollectionError::Aborted), "Clear aborted.\n");
    }
}
