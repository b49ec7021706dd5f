#![no_std]

pub mod buffer;
pub mod channel_order;
pub mod color;
pub mod config;
pub mod error;
pub mod gradient;
pub mod math8;
pub mod shared;
pub mod strip;
pub mod symbol;
pub mod timing;
pub mod transmitter;

pub use buffer::{Direction, PixelBuffer};
pub use channel_order::{Channel, ChannelOrder};
pub use color::{Color, Rgb, Rgbw};
pub use config::{DEFAULT_BRIGHTNESS, DEFAULT_MODE, DEFAULT_RESET_DELAY, StripConfig};
pub use error::{ConfigError, PixelError, ShowError, StripError};
pub use gradient::SegmentOptions;
pub use shared::SharedStrip;
pub use strip::Strip;
pub use symbol::{Pulse, Symbol, WordSymbols};
pub use timing::{BitTiming, Protocol, TimingProfile, WordWidth};
pub use transmitter::{Transmitter, hold_low};

pub use embassy_time::Duration;

/// Abstract single-wire output line
///
/// Implement this trait to support different hardware platforms: a PIO or
/// RMT peripheral, an SPI bus shaping pulses, or a bit-banged GPIO. The
/// transmitter is generic over this trait.
pub trait OutputLine {
    /// Hardware error, passed to the caller unchanged
    type Error;

    /// Prepare the line for the given timing profile
    fn configure(&mut self, _profile: &TimingProfile) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Emit a single symbol
    ///
    /// `Symbol::Latch` must keep the line low for at least the given time
    /// before returning; [`hold_low`] does exactly that.
    fn write_symbol(&mut self, symbol: Symbol) -> Result<(), Self::Error>;

    /// Emit the low `width` bits of a packed word, MSB first
    ///
    /// Word-oriented peripherals can override this and push the whole word
    /// at once.
    fn write_word(&mut self, word: u32, width: WordWidth) -> Result<(), Self::Error> {
        for symbol in WordSymbols::new(word, width) {
            self.write_symbol(symbol)?;
        }
        Ok(())
    }
}
