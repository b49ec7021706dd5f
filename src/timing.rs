//! Single-wire bit timing profiles
//!
//! Every bit starts high and ends low. With slot lengths `T1`, `T2`, `T3`:
//!
//! ```text
//! bit 0: high T3,      low T1 + T2
//! bit 1: high T3 + T1, low T2
//! ```

use embassy_time::Duration;

use crate::error::ConfigError;

/// Number of bits sent per pixel word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WordWidth {
    /// 24 bits, three channels
    Rgb = 24,
    /// 32 bits, four channels
    Rgbw = 32,
}

impl WordWidth {
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Slot lengths of a bit, in units of `unit_ns` nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTiming {
    pub t1: u8,
    pub t2: u8,
    pub t3: u8,
    pub unit_ns: u32,
}

impl BitTiming {
    /// WS2812/SK6812 slots at an 8 MHz unit clock (1.25 µs per bit)
    pub const DEFAULT: Self = Self {
        t1: 2,
        t2: 5,
        t3: 3,
        unit_ns: 125,
    };

    pub const fn new(t1: u8, t2: u8, t3: u8, unit_ns: u32) -> Result<Self, ConfigError> {
        if t1 == 0 || t2 == 0 || t3 == 0 || unit_ns == 0 {
            return Err(ConfigError::InvalidTiming);
        }
        Ok(Self {
            t1,
            t2,
            t3,
            unit_ns,
        })
    }

    /// High and low time of a `0` bit in nanoseconds
    pub const fn zero_ns(&self) -> (u32, u32) {
        (
            self.t3 as u32 * self.unit_ns,
            (self.t1 as u32 + self.t2 as u32) * self.unit_ns,
        )
    }

    /// High and low time of a `1` bit in nanoseconds
    pub const fn one_ns(&self) -> (u32, u32) {
        (
            (self.t3 as u32 + self.t1 as u32) * self.unit_ns,
            self.t2 as u32 * self.unit_ns,
        )
    }

    /// Length of a single bit in nanoseconds
    pub const fn bit_period_ns(&self) -> u32 {
        (self.t1 as u32 + self.t2 as u32 + self.t3 as u32) * self.unit_ns
    }
}

impl Default for BitTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// LED protocol family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// Three channel WS2812B class
    Ws2812,
    /// Four channel SK6812 class
    Sk6812,
}

/// Protocol plus the bit timing used to drive it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingProfile {
    pub protocol: Protocol,
    pub timing: BitTiming,
}

impl TimingProfile {
    pub const WS2812: Self = Self {
        protocol: Protocol::Ws2812,
        timing: BitTiming::DEFAULT,
    };

    pub const SK6812: Self = Self {
        protocol: Protocol::Sk6812,
        timing: BitTiming::DEFAULT,
    };

    /// Pick the profile matching a word width
    pub const fn for_width(width: WordWidth) -> Self {
        match width {
            WordWidth::Rgb => Self::WS2812,
            WordWidth::Rgbw => Self::SK6812,
        }
    }

    /// Override the bit timing
    #[must_use]
    pub const fn with_timing(mut self, timing: BitTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Word width expected by the protocol
    pub const fn word_width(&self) -> WordWidth {
        match self.protocol {
            Protocol::Ws2812 => WordWidth::Rgb,
            Protocol::Sk6812 => WordWidth::Rgbw,
        }
    }

    /// Time needed to send `num_leds` words and latch them
    pub fn frame_duration(&self, num_leds: usize, reset_delay: Duration) -> Duration {
        let bits = num_leds as u64 * u64::from(self.word_width().bits());
        let data_ns = bits * u64::from(self.timing.bit_period_ns());
        Duration::from_micros(data_ns.div_ceil(1000)) + reset_delay
    }
}
