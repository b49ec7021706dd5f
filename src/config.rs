use embassy_time::Duration;

/// Channel order of the common WS2812B strips
pub const DEFAULT_MODE: &str = "GRB";

/// Full brightness
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Reset/latch time after every frame.
///
/// WS2812B needs at least 50 µs, newer revisions up to 280 µs.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_micros(100);

/// Configuration for a pixel buffer
#[derive(Debug, Clone, Copy)]
pub struct StripConfig<'a> {
    /// Number of LEDs on the strip
    pub num_leds: usize,
    /// Channel order on the wire, e.g. `"GRB"` or `"RGBW"`
    pub mode: &'a str,
    /// Initial brightness, clamped to `1..=255`
    pub brightness: u8,
    /// Low time after each frame
    pub reset_delay: Duration,
}

impl<'a> StripConfig<'a> {
    /// Create a config with default mode, brightness and reset delay
    pub const fn new(num_leds: usize) -> Self {
        Self {
            num_leds,
            mode: DEFAULT_MODE,
            brightness: DEFAULT_BRIGHTNESS,
            reset_delay: DEFAULT_RESET_DELAY,
        }
    }

    /// Set the channel order
    #[must_use]
    pub const fn with_mode(mut self, mode: &'a str) -> Self {
        self.mode = mode;
        self
    }

    /// Set the initial brightness
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the reset delay
    ///
    /// A zero delay is accepted; the caller then has to make sure enough time
    /// passes between frames.
    #[must_use]
    pub const fn with_reset_delay(mut self, reset_delay: Duration) -> Self {
        self.reset_delay = reset_delay;
        self
    }
}
