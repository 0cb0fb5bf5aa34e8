//! Mask emission: where accepted masks go.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::mask::ClassCounts;
use crate::terminal::format_runtime;

/// Per-engine detail attached to an emitted mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    /// Observed occurrence from the frequency table.
    Occurrence(u64),
    /// Positions per class, from the policy enumerator.
    Counts(ClassCounts),
}

/// One mask accepted by an engine, in emission order.
#[derive(Debug, Clone, Copy)]
pub struct Emitted<'a> {
    pub mask: &'a str,
    pub length: usize,
    pub seconds: u128,
    pub detail: Detail,
}

impl Emitted<'_> {
    /// Human readable detail line for display mode.
    pub fn detail_line(&self) -> String {
        let time = format_runtime(self.seconds);
        match self.detail {
            Detail::Occurrence(occurrence) => format!(
                "[{:>2}] {:<30} [{:<7}] [{:>8}]",
                self.length, self.mask, occurrence, time
            ),
            Detail::Counts(c) => format!(
                "[{:>2}] {:<30} [l:{:>2} u:{:>2} d:{:>2} s:{:>2}] [{:>8}]",
                self.length, self.mask, c.lower, c.upper, c.digit, c.special, time
            ),
        }
    }
}

/// Header printed above occurrence detail lines.
pub const OCCURRENCE_HEADER: &str = "[L:] Mask:                          [ Occ:  ] [ Time:  ]";

/// Destination for emitted masks. Emission is append-only and order-preserving.
pub trait MaskSink {
    fn emit(&mut self, mask: &Emitted<'_>) -> Result<()>;
}

impl MaskSink for Vec<String> {
    fn emit(&mut self, mask: &Emitted<'_>) -> Result<()> {
        self.push(mask.mask.to_string());
        Ok(())
    }
}

/// Discards everything; used when only the summary matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl MaskSink for NullSink {
    fn emit(&mut self, _: &Emitted<'_>) -> Result<()> {
        Ok(())
    }
}

/// Writes one mask per line.
pub struct LineSink<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl LineSink<File> {
    /// Create (or truncate) a mask file, creating parent directories.
    pub fn create(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> MaskSink for LineSink<W> {
    fn emit(&mut self, mask: &Emitted<'_>) -> Result<()> {
        self.out.write_all(mask.mask.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> Drop for LineSink<W> {
    fn drop(&mut self) {
        let _ = self.out.flush();
    }
}

/// Fans every mask out to an optional file, the terminal in display mode, and
/// an optional clipboard buffer.
#[derive(Default)]
pub struct OutputSink {
    pub file: Option<LineSink<File>>,
    pub show_masks: bool,
    pub clipboard: Option<String>,
    pub emitted: u64,
}

impl OutputSink {
    pub fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl MaskSink for OutputSink {
    fn emit(&mut self, mask: &Emitted<'_>) -> Result<()> {
        if self.show_masks {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(mask.detail_line().as_bytes())?;
            out.write_all(b"\n")?;
        }
        if let Some(file) = self.file.as_mut() {
            file.emit(mask)?;
        }
        if let Some(buf) = self.clipboard.as_mut() {
            buf.push_str(mask.mask);
            buf.push('\n');
        }
        self.emitted += 1;
        Ok(())
    }
}
