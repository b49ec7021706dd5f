//! Gradient fills on a [`PixelBuffer`]
//!
//! Channels are interpolated with exact integer math and rounded half to
//! even, then scaled by the buffer brightness like any other write.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::PixelError;

/// Options for [`PixelBuffer::segmented_gradient`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Write the first segment of a two-color gradient from its end back to
    /// its start
    pub reverse: bool,
    /// Treat a two-color palette as a closed cycle instead of mirroring it
    pub rainbow: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            reverse: true,
            rainbow: false,
        }
    }
}

impl SegmentOptions {
    #[must_use]
    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    #[must_use]
    pub const fn with_rainbow(mut self, rainbow: bool) -> Self {
        self.rainbow = rainbow;
        self
    }
}

impl<const MAX_LEDS: usize> PixelBuffer<MAX_LEDS> {
    /// Two-color gradient between `first` and `last` (inclusive)
    ///
    /// `start` lands on the lower index, `end` on the higher one. Does
    /// nothing when both indices are equal.
    pub fn linear_gradient(
        &mut self,
        first: usize,
        last: usize,
        start: impl Into<Color>,
        end: impl Into<Color>,
    ) -> Result<(), PixelError> {
        let (left, right) = self.span(first, last)?;
        if left == right {
            return Ok(());
        }
        let (start, end) = (start.into(), end.into());
        let steps = right - left;
        for step in 0..=steps {
            self.put(left + step, start.lerp(end, step, steps));
        }
        Ok(())
    }

    /// Multi-color gradient split into `colors.len()` equal segments
    ///
    /// Segment `i` blends `colors[i]` into `colors[i + 1]`; the segment that
    /// reaches `last` blends back into `colors[0]`. Adjacent segments share
    /// their boundary pixel.
    ///
    /// Segments run forward, so every shared boundary pixel gets the same
    /// palette color from both sides. Two-color palettes outside rainbow mode
    /// are mirrored instead: the first segment runs forward unless
    /// `options.reverse` is set and the second is written from its end back
    /// to its start. With `reverse` set this gives a seam-free `b..a..b`
    /// gradient. Rainbow mode turns mirroring off.
    pub fn segmented_gradient<C>(
        &mut self,
        colors: &[C],
        first: usize,
        last: usize,
        options: SegmentOptions,
    ) -> Result<(), PixelError>
    where
        C: Into<Color> + Copy,
    {
        let (left, right) = self.span(first, last)?;
        if colors.is_empty() {
            return Err(PixelError::EmptyPalette);
        }
        if left == right {
            return Ok(());
        }

        let count = colors.len();
        let mirrored = count == 2 && !options.rainbow;
        let width = (right - left + 1) / count;

        for (i, &color) in colors.iter().enumerate() {
            let seg_start = left + i * width;
            if seg_start > right {
                break;
            }
            let seg_end = if i + 1 == count {
                right
            } else {
                (seg_start + width).min(right)
            };
            let steps = seg_end - seg_start;
            if steps == 0 {
                continue;
            }

            let from: Color = color.into();
            let to: Color = if seg_end >= right {
                colors[0].into()
            } else {
                colors[i + 1].into()
            };
            let reversed = mirrored && (i > 0 || options.reverse);

            for step in 0..=steps {
                let index = if reversed {
                    seg_end - step
                } else {
                    seg_start + step
                };
                self.put(index, from.lerp(to, step, steps));
            }
        }
        Ok(())
    }
}
