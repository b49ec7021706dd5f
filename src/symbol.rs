//! Three-symbol line encoding
//!
//! A frame is a sequence of `Zero` and `One` symbols, one per data bit, most
//! significant bit first, terminated by a single `Latch`.

use embassy_time::Duration;

use crate::timing::{BitTiming, WordWidth};

/// A symbol on the data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Data bit `0`
    Zero,
    /// Data bit `1`
    One,
    /// Hold the line low so the LEDs commit the received frame
    Latch(Duration),
}

/// High/low pulse lengths in nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub high_ns: u32,
    pub low_ns: u32,
}

impl Symbol {
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::One } else { Self::Zero }
    }

    /// Pulse shape of a data symbol
    ///
    /// Returns `None` for `Latch`, which has no high phase.
    pub const fn pulse(self, timing: &BitTiming) -> Option<Pulse> {
        let (high_ns, low_ns) = match self {
            Self::Zero => timing.zero_ns(),
            Self::One => timing.one_ns(),
            Self::Latch(_) => return None,
        };
        Some(Pulse { high_ns, low_ns })
    }
}

/// Iterator over the data symbols of one packed word, MSB first
#[derive(Debug, Clone)]
pub struct WordSymbols {
    word: u32,
    remaining: u8,
}

impl WordSymbols {
    /// Symbols for the low `width` bits of `word`
    pub const fn new(word: u32, width: WordWidth) -> Self {
        Self {
            word,
            remaining: width.bits(),
        }
    }
}

impl Iterator for WordSymbols {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(Symbol::from_bit((self.word >> self.remaining) & 1 != 0))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.remaining);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WordSymbols {}
