//! Pixel buffer bound to a transmitter

use embassy_time::Duration;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::OutputLine;
use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::config::StripConfig;
use crate::error::{ConfigError, StripError};
use crate::timing::TimingProfile;
use crate::transmitter::Transmitter;

/// An LED strip: pixel buffer plus the line it is shown on
///
/// The timing profile follows the channel order: RGB orders use WS2812
/// timing, RGBW orders SK6812.
pub struct Strip<L: OutputLine, const MAX_LEDS: usize> {
    buffer: PixelBuffer<MAX_LEDS>,
    transmitter: Transmitter<L>,
}

impl<L: OutputLine, const MAX_LEDS: usize> Strip<L, MAX_LEDS> {
    /// Validate the config and configure the line
    pub fn new(line: L, config: &StripConfig<'_>) -> Result<Self, StripError<L::Error>> {
        let buffer = PixelBuffer::new(config)?;
        let profile = TimingProfile::for_width(buffer.order().word_width());
        Self::with_profile(line, buffer, profile)
    }

    /// Build a strip from an existing buffer with a custom timing profile
    ///
    /// The profile must send words of the buffer's width; a mismatch is
    /// rejected before the line is configured.
    pub fn with_profile(
        line: L,
        buffer: PixelBuffer<MAX_LEDS>,
        profile: TimingProfile,
    ) -> Result<Self, StripError<L::Error>> {
        if profile.word_width() != buffer.order().word_width() {
            return Err(ConfigError::ProfileMismatch.into());
        }
        let transmitter = Transmitter::configure(line, profile).map_err(StripError::Line)?;
        #[cfg(feature = "esp32-log")]
        println!(
            "[Strip.new] {} LEDs, order {}, brightness {}",
            buffer.len(),
            buffer.order(),
            buffer.brightness()
        );
        Ok(Self {
            buffer,
            transmitter,
        })
    }

    /// Send the buffer and latch it
    ///
    /// Blocks for roughly [`Self::frame_duration`]. The buffer is not modified,
    /// so a failed frame can simply be shown again.
    pub fn show(&mut self) -> Result<(), L::Error> {
        let width = self.buffer.order().word_width();
        let result = self
            .transmitter
            .transmit(self.buffer.words(), width)
            .and_then(|()| self.transmitter.latch(self.buffer.reset_delay()));
        #[cfg(feature = "esp32-log")]
        if result.is_err() {
            println!("[Strip.show] transmission of {} LEDs failed", self.buffer.len());
        }
        result
    }

    /// Time a single [`Self::show`] call blocks for
    pub fn frame_duration(&self) -> Duration {
        self.transmitter
            .profile()
            .frame_duration(self.buffer.len(), self.buffer.reset_delay())
    }

    /// Get a reference to the pixel buffer.
    pub fn buffer(&self) -> &PixelBuffer<MAX_LEDS> {
        &self.buffer
    }

    /// Get a mutable reference to the pixel buffer.
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer<MAX_LEDS> {
        &mut self.buffer
    }

    /// Get a reference to the transmitter.
    pub fn transmitter(&self) -> &Transmitter<L> {
        &self.transmitter
    }

    /// Split into buffer and line
    pub fn release(self) -> (PixelBuffer<MAX_LEDS>, L) {
        (self.buffer, self.transmitter.release())
    }
}

impl<L: OutputLine, const MAX_LEDS: usize> SmartLedsWrite for Strip<L, MAX_LEDS> {
    type Error = L::Error;
    type Color = Color;

    /// Write colors starting at the first LED, then show the frame
    ///
    /// Extra colors beyond the strip length are ignored; LEDs without a color
    /// keep their current value.
    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let len = self.buffer.len();
        for (index, color) in iterator.into_iter().take(len).enumerate() {
            self.buffer.put(index, color.into());
        }
        self.show()
    }
}
