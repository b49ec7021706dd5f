//! Pixel color values
//!
//! A color carries either three (`Rgb`) or four (`Rgbw`) 8-bit channels.
//! Buffers decide at pack time whether the white channel is used.

use smart_leds::RGB8;

use crate::math8::lerp_round;

pub type Rgb = RGB8;

/// Four channel color for SK6812-class LEDs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl Rgbw {
    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }
}

/// Logical color of a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(Rgb),
    Rgbw(Rgbw),
}

impl Color {
    pub const BLACK: Self = Self::Rgb(Rgb { r: 0, g: 0, b: 0 });

    /// Channel values in `[r, g, b, w]` order, white is zero for RGB colors
    pub const fn channels(self) -> [u8; 4] {
        match self {
            Self::Rgb(c) => [c.r, c.g, c.b, 0],
            Self::Rgbw(c) => [c.r, c.g, c.b, c.w],
        }
    }

    /// Returns true if the color carries a white channel
    pub const fn has_white(self) -> bool {
        matches!(self, Self::Rgbw(_))
    }

    /// Build a color from `[r, g, b, w]` channels
    pub const fn from_channels(channels: [u8; 4], white: bool) -> Self {
        let [r, g, b, w] = channels;
        if white {
            Self::Rgbw(Rgbw { r, g, b, w })
        } else {
            Self::Rgb(Rgb { r, g, b })
        }
    }

    /// Interpolate between two colors at `step / steps`.
    ///
    /// Each channel is rounded half to even. The result carries a white
    /// channel if either side does.
    pub(crate) fn lerp(self, other: Self, step: usize, steps: usize) -> Self {
        let a = self.channels();
        let b = other.channels();
        let mut out = [0u8; 4];
        for (c, value) in out.iter_mut().enumerate() {
            *value = lerp_round(a[c], b[c], step, steps);
        }
        Self::from_channels(out, self.has_white() || other.has_white())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        Self::Rgb(color)
    }
}

impl From<Rgbw> for Color {
    fn from(color: Rgbw) -> Self {
        Self::Rgbw(color)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Rgb(Rgb { r, g, b })
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, w): (u8, u8, u8, u8)) -> Self {
        Self::Rgbw(Rgbw { r, g, b, w })
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::Rgb(Rgb { r, g, b })
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, w]: [u8; 4]) -> Self {
        Self::Rgbw(Rgbw { r, g, b, w })
    }
}
