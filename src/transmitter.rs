//! Word serializer on top of an [`OutputLine`]

use embassy_time::Duration;

use crate::OutputLine;
use crate::symbol::Symbol;
use crate::timing::{TimingProfile, WordWidth};

/// Hold the calling context for `delay`.
///
/// Default latch implementation for lines that have nothing better to do
/// while the data line stays low.
pub fn hold_low(delay: Duration) {
    if delay.as_ticks() > 0 {
        embassy_time::block_for(delay);
    }
}

/// Serializes packed pixel words onto a single output line.
///
/// The transmitter owns the line for its whole lifetime, so two frames can
/// never interleave on the same wire.
pub struct Transmitter<L: OutputLine> {
    line: L,
    profile: TimingProfile,
}

impl<L: OutputLine> Transmitter<L> {
    /// Bind to a line and configure it for `profile`
    pub fn configure(mut line: L, profile: TimingProfile) -> Result<Self, L::Error> {
        line.configure(&profile)?;
        Ok(Self { line, profile })
    }

    /// Timing profile the line was configured with
    pub const fn profile(&self) -> &TimingProfile {
        &self.profile
    }

    /// Send `words` in order, `width` bits each
    ///
    /// Blocks until the last word is handed to the line. The first line error
    /// aborts the frame and is returned as is.
    pub fn transmit(&mut self, words: &[u32], width: WordWidth) -> Result<(), L::Error> {
        for &word in words {
            self.line.write_word(word, width)?;
        }
        Ok(())
    }

    /// Hold the line low for `delay` so the LEDs latch the frame
    ///
    /// Always emitted, even for a zero delay.
    pub fn latch(&mut self, delay: Duration) -> Result<(), L::Error> {
        self.line.write_symbol(Symbol::Latch(delay))
    }

    /// Get a reference to the line.
    pub fn line(&self) -> &L {
        &self.line
    }

    /// Get a mutable reference to the line.
    pub fn line_mut(&mut self) -> &mut L {
        &mut self.line
    }

    /// Give the line back
    pub fn release(self) -> L {
        self.line
    }
}
