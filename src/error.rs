//! Error types
//!
//! Validation errors are reported before any pixel is written. Errors coming
//! from the output line are passed through untouched.

use core::fmt;

/// Invalid strip configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Mode string is not a permutation of `RGB` or `RGBW`.
    InvalidMode,

    /// Strip must have at least one LED.
    NoLeds,

    /// Requested LED count does not fit into the buffer.
    TooManyLeds { requested: usize, capacity: usize },

    /// Bit timing has a zero-length slot.
    InvalidTiming,

    /// Timing profile sends words of a different width than the channel order.
    ProfileMismatch,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMode => {
                write!(f, "mode must be a permutation of RGB or RGBW")
            }
            ConfigError::NoLeds => write!(f, "strip must have at least one LED"),
            ConfigError::TooManyLeds {
                requested,
                capacity,
            } => write!(
                f,
                "requested {requested} LEDs, buffer capacity is {capacity}"
            ),
            ConfigError::InvalidTiming => {
                write!(f, "bit timing slots must be non-zero")
            }
            ConfigError::ProfileMismatch => {
                write!(f, "timing profile word width does not match channel order")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Invalid pixel addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelError {
    /// Pixel index is outside of `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },

    /// One of the range endpoints is outside of `[0, len)`.
    InvalidRange { first: usize, last: usize, len: usize },

    /// Segmented gradient needs at least one color.
    EmptyPalette,
}

impl fmt::Display for PixelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelError::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {index} out of range for {len} LEDs")
            }
            PixelError::InvalidRange { first, last, len } => {
                write!(f, "pixel range {first}..={last} out of range for {len} LEDs")
            }
            PixelError::EmptyPalette => write!(f, "gradient needs at least one color"),
        }
    }
}

impl core::error::Error for PixelError {}

/// Failure of a shared strip access.
///
/// Returned by both [`SharedStrip::update`](crate::SharedStrip::update) and
/// [`SharedStrip::show`](crate::SharedStrip::show); `update` never touches the
/// line, so it only ever reports `Busy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowError<E> {
    /// The output line reported an error.
    Io(E),

    /// The strip is already borrowed by an access further up the stack.
    Busy,
}

impl<E: fmt::Display> fmt::Display for ShowError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowError::Io(err) => write!(f, "transmission failed: {err}"),
            ShowError::Busy => write!(f, "strip is already in use"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for ShowError<E> {}

impl<E> From<E> for ShowError<E> {
    fn from(err: E) -> Self {
        ShowError::Io(err)
    }
}

/// Failure to set up a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError<E> {
    /// Invalid configuration, the line was not touched.
    Config(ConfigError),

    /// The output line refused the timing profile.
    Line(E),
}

impl<E: fmt::Display> fmt::Display for StripError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripError::Config(err) => write!(f, "invalid strip config: {err}"),
            StripError::Line(err) => write!(f, "line configuration failed: {err}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for StripError<E> {}

impl<E> From<ConfigError> for StripError<E> {
    fn from(err: ConfigError) -> Self {
        StripError::Config(err)
    }
}
