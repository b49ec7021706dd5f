//! Mapping of logical color channels to byte lanes of a transmission word.
//!
//! A mode string such as `"GRB"` or `"WRGB"` lists the channels in the order
//! the LED expects them on the wire. Words are shifted out most significant
//! bit first, so the first letter occupies the highest lane:
//!
//! ```text
//! "GRB"  -> 0x00_GG_RR_BB
//! "GRBW" -> 0xGG_RR_BB_WW
//! ```

use core::fmt::{self, Write};
use core::str::FromStr;

use crate::color::Color;
use crate::error::ConfigError;
use crate::timing::WordWidth;

/// Logical color channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
    White = 3,
}

impl Channel {
    const ALL: [Self; 4] = [Self::Red, Self::Green, Self::Blue, Self::White];

    const fn from_ascii(letter: u8) -> Option<Self> {
        match letter {
            b'R' => Some(Self::Red),
            b'G' => Some(Self::Green),
            b'B' => Some(Self::Blue),
            b'W' => Some(Self::White),
            _ => None,
        }
    }

    const fn as_char(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::White => 'W',
        }
    }
}

/// Channel to lane lookup table, built once from a mode string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOrder {
    /// Bit shift of each channel, indexed by `Channel as usize`
    shifts: [u8; 4],
    width: WordWidth,
}

impl ChannelOrder {
    /// Parse a mode string like `"GRB"` or `"RGBW"`.
    ///
    /// The string must contain each of `R`, `G`, `B` exactly once, optionally
    /// followed or interleaved by a single `W`.
    pub fn parse(mode: &str) -> Result<Self, ConfigError> {
        let letters = mode.as_bytes();
        let width = match letters.len() {
            3 => WordWidth::Rgb,
            4 => WordWidth::Rgbw,
            _ => return Err(ConfigError::InvalidMode),
        };

        let mut shifts: [Option<u8>; 4] = [None; 4];
        for (position, letter) in letters.iter().enumerate() {
            let channel = Channel::from_ascii(*letter).ok_or(ConfigError::InvalidMode)?;
            let slot = &mut shifts[channel as usize];
            if slot.is_some() {
                return Err(ConfigError::InvalidMode);
            }
            #[allow(clippy::cast_possible_truncation)]
            let lane = (letters.len() - 1 - position) as u8;
            *slot = Some(lane * 8);
        }

        // Three letters can only be valid when W is absent, four when present
        let [Some(r), Some(g), Some(b), w] = shifts else {
            return Err(ConfigError::InvalidMode);
        };
        if w.is_some() != (width == WordWidth::Rgbw) {
            return Err(ConfigError::InvalidMode);
        }

        Ok(Self {
            shifts: [r, g, b, w.unwrap_or(0)],
            width,
        })
    }

    /// Returns true if the order carries a white channel
    pub const fn has_white(&self) -> bool {
        matches!(self.width, WordWidth::Rgbw)
    }

    /// Number of meaningful bits in a packed word
    pub const fn word_width(&self) -> WordWidth {
        self.width
    }

    /// Bit shift of a channel inside the packed word
    ///
    /// Returns `None` for the white channel of RGB orders.
    pub const fn shift(&self, channel: Channel) -> Option<u8> {
        if matches!(channel, Channel::White) && !self.has_white() {
            return None;
        }
        Some(self.shifts[channel as usize])
    }

    /// Pack already scaled `[r, g, b, w]` channels into a word
    pub fn pack(&self, channels: [u8; 4]) -> u32 {
        Channel::ALL
            .iter()
            .filter_map(|&channel| {
                let shift = self.shift(channel)?;
                Some(u32::from(channels[channel as usize]) << shift)
            })
            .fold(0, |word, lane| word | lane)
    }

    /// Split a word back into `[r, g, b, w]` channels
    #[allow(clippy::cast_possible_truncation)]
    pub fn unpack_channels(&self, word: u32) -> [u8; 4] {
        let mut channels = [0u8; 4];
        for channel in Channel::ALL {
            if let Some(shift) = self.shift(channel) {
                channels[channel as usize] = (word >> shift) as u8;
            }
        }
        channels
    }

    /// Split a word back into a color of this order's channel count
    pub fn unpack(&self, word: u32) -> Color {
        Color::from_channels(self.unpack_channels(word), self.has_white())
    }
}

impl FromStr for ChannelOrder {
    type Err = ConfigError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        Self::parse(mode)
    }
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lanes: u8 = if self.has_white() { 4 } else { 3 };
        for lane in (0..lanes).rev() {
            let channel = Channel::ALL
                .iter()
                .find(|&&channel| self.shift(channel) == Some(lane * 8));
            if let Some(channel) = channel {
                f.write_char(channel.as_char())?;
            }
        }
        Ok(())
    }
}
