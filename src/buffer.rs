//! Packed pixel storage
//!
//! Colors are scaled by the current brightness and packed into transmission
//! words as soon as they are written. Changing the brightness afterwards does
//! not touch pixels that are already stored; write them again to apply it.

use embassy_time::Duration;
use heapless::Vec;

use crate::channel_order::ChannelOrder;
use crate::color::Color;
use crate::config::StripConfig;
use crate::error::{ConfigError, PixelError};
use crate::math8::scale_round;

/// Direction of a rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Pixel `i` moves to `i - offset`
    Left,
    /// Pixel `i` moves to `i + offset`
    Right,
}

/// Fixed-length array of packed pixel words
///
/// `MAX_LEDS` is the storage capacity; the actual LED count is set once at
/// construction.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const MAX_LEDS: usize> {
    words: Vec<u32, MAX_LEDS>,
    order: ChannelOrder,
    brightness: u8,
    reset_delay: Duration,
}

impl<const MAX_LEDS: usize> PixelBuffer<MAX_LEDS> {
    /// Create a buffer with all pixels off
    pub fn new(config: &StripConfig<'_>) -> Result<Self, ConfigError> {
        let order = ChannelOrder::parse(config.mode)?;
        if config.num_leds == 0 {
            return Err(ConfigError::NoLeds);
        }

        let mut words = Vec::new();
        words
            .resize(config.num_leds, 0)
            .map_err(|()| ConfigError::TooManyLeds {
                requested: config.num_leds,
                capacity: MAX_LEDS,
            })?;

        Ok(Self {
            words,
            order,
            brightness: clamp_brightness(i32::from(config.brightness)),
            reset_delay: config.reset_delay,
        })
    }

    /// Number of LEDs
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false, buffers hold at least one LED
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub const fn order(&self) -> &ChannelOrder {
        &self.order
    }

    pub const fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    /// Current brightness
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set brightness for subsequent writes, clamped to `1..=255`
    ///
    /// Returns the applied value. Already stored pixels keep their scaling.
    pub fn set_brightness(&mut self, value: i32) -> u8 {
        self.brightness = clamp_brightness(value);
        self.brightness
    }

    /// Packed words in LED order
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Packed word of a single pixel
    pub fn word(&self, index: usize) -> Option<u32> {
        self.words.get(index).copied()
    }

    /// Stored (already scaled) color of a pixel
    pub fn pixel(&self, index: usize) -> Option<Color> {
        self.word(index).map(|word| self.order.unpack(word))
    }

    /// Scale and pack a color with the current brightness
    pub fn pack(&self, color: impl Into<Color>) -> u32 {
        let mut channels = color.into().channels();
        for channel in &mut channels {
            *channel = scale_round(*channel, self.brightness);
        }
        self.order.pack(channels)
    }

    /// Set a single pixel
    pub fn set_pixel(&mut self, index: usize, color: impl Into<Color>) -> Result<(), PixelError> {
        let len = self.len();
        let word = self.pack(color);
        let slot = self
            .words
            .get_mut(index)
            .ok_or(PixelError::IndexOutOfRange { index, len })?;
        *slot = word;
        Ok(())
    }

    /// Set every pixel between `first` and `last` (inclusive, any order)
    pub fn set_pixel_range(
        &mut self,
        first: usize,
        last: usize,
        color: impl Into<Color>,
    ) -> Result<(), PixelError> {
        let (left, right) = self.span(first, last)?;
        let word = self.pack(color);
        self.words[left..=right].fill(word);
        Ok(())
    }

    /// Set all pixels
    pub fn fill(&mut self, color: impl Into<Color>) {
        let word = self.pack(color);
        self.words.fill(word);
    }

    /// Turn all pixels off
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Circular shift of the stored words
    ///
    /// An offset of zero shifts by one. Offsets wrap modulo the LED count; a
    /// negative offset shifts in the opposite direction.
    pub fn rotate(&mut self, offset: isize, direction: Direction) {
        let offset = if offset == 0 { 1 } else { offset };
        let len = self.len().cast_signed();
        let shift = offset.rem_euclid(len).cast_unsigned();
        match direction {
            Direction::Left => self.words.rotate_left(shift),
            Direction::Right => self.words.rotate_right(shift),
        }
    }

    /// Shorthand for `rotate(offset, Direction::Left)`
    pub fn rotate_left(&mut self, offset: isize) {
        self.rotate(offset, Direction::Left);
    }

    /// Shorthand for `rotate(offset, Direction::Right)`
    pub fn rotate_right(&mut self, offset: isize) {
        self.rotate(offset, Direction::Right);
    }

    /// Validate both endpoints and return them ordered
    pub(crate) fn span(&self, first: usize, last: usize) -> Result<(usize, usize), PixelError> {
        let len = self.len();
        if first >= len || last >= len {
            return Err(PixelError::InvalidRange { first, last, len });
        }
        Ok((first.min(last), first.max(last)))
    }

    /// Overwrite a pixel known to be in range
    pub(crate) fn put(&mut self, index: usize, color: Color) {
        let word = self.pack(color);
        self.words[index] = word;
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn clamp_brightness(value: i32) -> u8 {
    if value < 1 {
        1
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}
