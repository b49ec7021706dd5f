//! Strip shared between execution contexts.
//!
//! Wraps a [`Strip`] in a `critical-section` mutex so it can live in a
//! `static` and be touched from the main loop as well as from interrupts.
//! Every access runs inside a critical section; a `show` started from within
//! another access on the same strip is refused with `ShowError::Busy`
//! instead of nesting.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::OutputLine;
use crate::buffer::PixelBuffer;
use crate::error::ShowError;
use crate::strip::Strip;

/// A strip guarded by a critical section.
pub struct SharedStrip<L: OutputLine, const MAX_LEDS: usize> {
    inner: Mutex<RefCell<Strip<L, MAX_LEDS>>>,
}

impl<L: OutputLine, const MAX_LEDS: usize> SharedStrip<L, MAX_LEDS> {
    pub const fn new(strip: Strip<L, MAX_LEDS>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(strip)),
        }
    }

    /// Run `f` with exclusive access to the pixel buffer.
    ///
    /// Returns `Err(ShowError::Busy)` when called from inside another access.
    /// The line is never touched here, so `Io` is not returned.
    pub fn update<R>(
        &self,
        f: impl FnOnce(&mut PixelBuffer<MAX_LEDS>) -> R,
    ) -> Result<R, ShowError<L::Error>> {
        critical_section::with(|cs| {
            let mut strip = self
                .inner
                .borrow(cs)
                .try_borrow_mut()
                .map_err(|_| ShowError::Busy)?;
            Ok(f(strip.buffer_mut()))
        })
    }

    /// Transmit the current buffer.
    ///
    /// The whole frame, including the latch delay, is sent inside one
    /// critical section.
    pub fn show(&self) -> Result<(), ShowError<L::Error>> {
        critical_section::with(|cs| {
            let mut strip = self
                .inner
                .borrow(cs)
                .try_borrow_mut()
                .map_err(|_| ShowError::Busy)?;
            strip.show().map_err(ShowError::Io)
        })
    }

    /// Take the strip back out of the mutex.
    pub fn into_inner(self) -> Strip<L, MAX_LEDS> {
        self.inner.into_inner().into_inner()
    }
}
