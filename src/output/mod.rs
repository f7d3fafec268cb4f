//! Destinations for rendered markup

use std::fmt;
use std::io::{self, Write};

/// Somewhere rendered fragments can be appended to. Fragments arrive in
/// render order and are written with no separators between them.
pub trait Sink {
    fn append(&mut self, fragment: &str) -> io::Result<()>;
}

/// Accumulates the rendered document in memory.
#[derive(Debug, Default)]
pub struct Buffer {
    content: String,
}

impl Buffer {
    pub fn new() -> Buffer {
        Buffer {
            content: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

impl Sink for Buffer {
    fn append(&mut self, fragment: &str) -> io::Result<()> {
        self.content
            .push_str(fragment);
        Ok(())
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Writes fragments straight through to a writer owned by the caller. The
/// writer is never flushed or closed here; that remains the caller's job.
pub struct Stream<'w, W: Write + ?Sized> {
    writer: &'w mut W,
}

impl<'w, W: Write + ?Sized> Stream<'w, W> {
    pub fn new(writer: &'w mut W) -> Self {
        Stream { writer }
    }
}

impl<W: Write + ?Sized> Sink for Stream<'_, W> {
    fn append(&mut self, fragment: &str) -> io::Result<()> {
        self.writer
            .write_all(fragment.as_bytes())
    }
}
