//! `fold` engine – wrap a byte stream so that a line feed appears no later than
//! at the break column of every output line.
//!
//! The engine is a single pass with O(1) state: the current column. Bytes are
//! counted, not glyphs. Every input byte is copied in order; the only bytes
//! added are line feeds placed before the byte that would land on the break
//! column. Existing line feeds are never moved or removed, and no trailing
//! line feed is forced at end of input.

use std::convert::Infallible;
use std::io::{self, BufReader, Read, Write};

use tracing::{debug, error};

use crate::common::{FoldError, FoldResult};
use crate::config::{BreakColumn, LINE_TERMINATOR};

/// Destination that accepts one byte at a time or fails.
pub trait ByteSink {
    type Error;

    fn put(&mut self, byte: u8) -> Result<(), Self::Error>;
}

impl ByteSink for Vec<u8> {
    type Error = Infallible;

    fn put(&mut self, byte: u8) -> Result<(), Infallible> {
        self.push(byte);
        Ok(())
    }
}

/// [`ByteSink`] over any writer.
#[derive(Debug)]
pub struct WriteSink<W> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for WriteSink<W> {
    type Error = io::Error;

    fn put(&mut self, byte: u8) -> io::Result<()> {
        self.inner.write_all(&[byte])
    }
}

/// Column-tracking state machine.
///
/// Invariant between calls: `0 <= column <= break_column`.
#[derive(Debug, Clone)]
pub struct Folder {
    break_column: usize,
    column: usize,
    breaks_inserted: u64,
}

impl Folder {
    pub fn new(break_column: BreakColumn) -> Self {
        Self {
            break_column: break_column.get(),
            column: 0,
            breaks_inserted: 0,
        }
    }

    /// Bytes already placed on the current output line, terminator included.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn breaks_inserted(&self) -> u64 {
        self.breaks_inserted
    }

    /// Emit `byte`, preceded by an inserted line feed if it would otherwise
    /// occupy the break column.
    pub fn push<S>(&mut self, byte: u8, sink: &mut S) -> Result<(), S::Error>
    where
        S: ByteSink + ?Sized,
    {
        self.column += 1;

        if self.column == self.break_column && byte != LINE_TERMINATOR {
            sink.put(LINE_TERMINATOR)?;
            sink.put(byte)?;
            self.column = 1;
            self.breaks_inserted += 1;
        } else if byte == LINE_TERMINATOR {
            sink.put(byte)?;
            self.column = 0;
        } else {
            sink.put(byte)?;
        }
        Ok(())
    }

    /// Feed a chunk. Chunk boundaries have no effect on the output.
    pub fn push_all<S>(&mut self, bytes: &[u8], sink: &mut S) -> Result<(), S::Error>
    where
        S: ByteSink + ?Sized,
    {
        for &byte in bytes {
            self.push(byte, sink)?;
        }
        Ok(())
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldStats {
    pub bytes_read: u64,
    pub breaks_inserted: u64,
}

/// Copy `input` to `output`, inserting line feeds per [`Folder`].
///
/// Each byte is handed to `output` as soon as it is read; buffering is left to
/// the caller's writer. Returns once `input` reports a clean end of stream and
/// `output` has been flushed. Any read or write failure aborts the pass with
/// [`FoldError::Io`].
pub fn fold<R, W>(input: R, output: W, break_column: BreakColumn) -> FoldResult<FoldStats>
where
    R: Read,
    W: Write,
{
    debug!(%break_column, "folding stream");

    let mut folder = Folder::new(break_column);
    let mut sink = WriteSink::new(output);
    let mut bytes_read: u64 = 0;

    for byte in BufReader::new(input).bytes() {
        let byte = byte.map_err(|e| {
            error!(error = %e, bytes_read, "read from input failed");
            FoldError::Io(e)
        })?;
        bytes_read += 1;
        folder.push(byte, &mut sink).map_err(|e| {
            error!(error = %e, bytes_read, "write to output failed");
            FoldError::Io(e)
        })?;
    }

    sink.flush().map_err(|e| {
        error!(error = %e, "flushing output failed");
        FoldError::Io(e)
    })?;

    let stats = FoldStats {
        bytes_read,
        breaks_inserted: folder.breaks_inserted(),
    };
    debug!(
        bytes_read = stats.bytes_read,
        breaks_inserted = stats.breaks_inserted,
        "fold complete"
    );
    Ok(stats)
}

/// Fold an in-memory buffer.
pub fn fold_bytes(input: &[u8], break_column: BreakColumn) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() + input.len() / break_column.get() + 1);
    match Folder::new(break_column).push_all(input, &mut out) {
        Ok(()) => out,
        Err(never) => match never {},
    }
}
