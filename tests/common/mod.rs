#![allow(dead_code)]

use core::fmt;

use myrtio_pixel_strip::{OutputLine, Symbol, TimingProfile, WordWidth};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFault;

impl fmt::Display for LineFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line fault")
    }
}

/// Line that records every symbol it is asked to emit
#[derive(Debug, Default)]
pub struct RecordingLine {
    pub symbols: Vec<Symbol>,
    pub profile: Option<TimingProfile>,
    /// Fail once this many symbols have been written
    pub fail_after: Option<usize>,
    pub reject_profile: bool,
}

impl RecordingLine {
    pub fn failing_after(symbols: usize) -> Self {
        Self {
            fail_after: Some(symbols),
            ..Self::default()
        }
    }

    /// Data words reassembled from the recorded bits
    pub fn words(&self, width: WordWidth) -> Vec<u32> {
        let bits: Vec<u32> = self
            .symbols
            .iter()
            .filter_map(|symbol| match symbol {
                Symbol::Zero => Some(0),
                Symbol::One => Some(1),
                Symbol::Latch(_) => None,
            })
            .collect();
        bits.chunks(usize::from(width.bits()))
            .map(|chunk| chunk.iter().fold(0, |word, bit| (word << 1) | bit))
            .collect()
    }

    pub fn latches(&self) -> Vec<Symbol> {
        self.symbols
            .iter()
            .copied()
            .filter(|symbol| matches!(symbol, Symbol::Latch(_)))
            .collect()
    }
}

impl OutputLine for RecordingLine {
    type Error = LineFault;

    fn configure(&mut self, profile: &TimingProfile) -> Result<(), LineFault> {
        if self.reject_profile {
            return Err(LineFault);
        }
        self.profile = Some(*profile);
        Ok(())
    }

    fn write_symbol(&mut self, symbol: Symbol) -> Result<(), LineFault> {
        if self.fail_after.is_some_and(|limit| self.symbols.len() >= limit) {
            return Err(LineFault);
        }
        self.symbols.push(symbol);
        Ok(())
    }
}

/// Word-oriented line, like a PIO FIFO fed with whole words
#[derive(Debug, Default)]
pub struct WordLine {
    pub words: Vec<(u32, WordWidth)>,
    pub latched: usize,
}

impl OutputLine for WordLine {
    type Error = LineFault;

    fn write_symbol(&mut self, symbol: Symbol) -> Result<(), LineFault> {
        match symbol {
            Symbol::Latch(delay) => {
                myrtio_pixel_strip::hold_low(delay);
                self.latched += 1;
                Ok(())
            }
            Symbol::Zero | Symbol::One => Err(LineFault),
        }
    }

    fn write_word(&mut self, word: u32, width: WordWidth) -> Result<(), LineFault> {
        self.words.push((word, width));
        Ok(())
    }
}
