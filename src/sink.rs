//! Frame sinks for the terminal host.

use std::io::{self, Write};
use tiles_core::FrameRecord;

/// Writes each frame as one line of truecolor blocks, one block per panel.
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_frame(&mut self, frames: &[FrameRecord]) -> io::Result<()> {
        for f in frames {
            let c = f.color;
            write!(self.out, "\x1b[48;2;{};{};{}m  ", c.r, c.g, c.b)?;
        }
        writeln!(self.out, "\x1b[0m")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Running totals over every emitted frame.
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    pub frames: u64,
    pub records: u64,
    pub lit_records: u64,
    brightness_sum: f64,
}

impl FrameStats {
    /// Count one tick's records. Empty slices (warm-up) are not frames.
    pub fn record(&mut self, frames: &[FrameRecord]) {
        if frames.is_empty() {
            return;
        }
        self.frames += 1;
        for f in frames {
            let c = f.color;
            let brightness = (c.r as f64 + c.g as f64 + c.b as f64) / (3.0 * 255.0);
            self.brightness_sum += brightness;
            self.records += 1;
            if brightness > 0.0 {
                self.lit_records += 1;
            }
        }
    }

    /// Average brightness over all records, 0..1.
    pub fn mean_brightness(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            self.brightness_sum / self.records as f64
        }
    }

    pub fn lit_ratio(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            self.lit_records as f64 / self.records as f64
        }
    }
}
