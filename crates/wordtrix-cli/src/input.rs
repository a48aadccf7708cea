//! Line sources for the interactive shell.
//!
//! Interactive stdin is read on its own thread and merged with Ctrl-C
//! notifications on one channel, so an interrupt ends the session even while
//! the shell is waiting for a line.

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, warn};

#[derive(Debug)]
pub enum Event {
    /// Raw bytes of one line, newline included. Not necessarily UTF-8.
    Line(Vec<u8>),
    Eof,
    Interrupt,
    Failed(io::Error),
}

pub trait LineSource {
    fn next_event(&mut self) -> Event;
}

/// Reads lines straight from a `BufRead`. Never reports an interrupt.
pub struct ReaderSource<R>(pub R);

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_event(&mut self) -> Event {
        read_event(&mut self.0)
    }
}

/// Receives events from other threads. A closed channel reads as end of input.
pub struct ChannelSource {
    rx: Receiver<Event>,
}

impl ChannelSource {
    pub fn channel() -> (Sender<Event>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self { rx })
    }

    /// Stdin on a background thread plus a Ctrl-C handler, both feeding one
    /// channel.
    pub fn stdin_with_interrupt() -> Self {
        let (tx, source) = Self::channel();

        let interrupt_tx = tx.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            let _ = interrupt_tx.send(Event::Interrupt);
        }) {
            warn!("failed to set Ctrl+C handler: {e}");
        }

        thread::spawn(move || {
            let mut stdin = io::stdin().lock();
            loop {
                let event = read_event(&mut stdin);
                let last = matches!(event, Event::Eof | Event::Failed(_));
                if tx.send(event).is_err() || last {
                    break;
                }
            }
            debug!("stdin reader finished");
        });

        source
    }
}

impl LineSource for ChannelSource {
    fn next_event(&mut self) -> Event {
        self.rx.recv().unwrap_or(Event::Eof)
    }
}

fn read_event<R: BufRead>(reader: &mut R) -> Event {
    let mut buf = Vec::new();
    loop {
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) if buf.is_empty() => return Event::Eof,
            Ok(_) => return Event::Line(buf),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Event::Failed(e),
        }
    }
}
