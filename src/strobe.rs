//! Strobe buffer: logical per-pixel colors plus a flash-to-white override.
//!
//! Colors written with [`StrobeBuffer::write_pixel`] only land in the logical
//! buffer. [`StrobeBuffer::render`] decides what each pixel actually shows and
//! hands the frame to the wrapped [`StripDriver`].

use tracing::{debug, trace};

use crate::color;
use crate::driver::{OpenStrip, StripDriver};
use crate::error::{Error, Result};
use crate::layout::ColorLayout;

/// Fixed buffer capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 16;

/// White level forced onto four-channel strips while strobing.
pub const DEFAULT_STROBE_BRIGHTNESS: u8 = 0xFF;

pub struct StrobeBuffer<D, const N: usize = DEFAULT_CAPACITY> {
    driver: D,
    colors: [u32; N],
    strobe_active: bool,
    strobe_brightness: u8,
}

impl<D: OpenStrip, const N: usize> StrobeBuffer<D, N> {
    /// Open the underlying driver and wrap it.
    ///
    /// `pixel_count` must equal the buffer capacity `N`; the driver is not
    /// opened otherwise.
    pub fn open(pixel_count: usize, pin: D::Pin, layout: ColorLayout) -> Result<Self> {
        Self::open_with_brightness(pixel_count, pin, layout, DEFAULT_STROBE_BRIGHTNESS)
    }

    pub fn open_with_brightness(
        pixel_count: usize,
        pin: D::Pin,
        layout: ColorLayout,
        strobe_brightness: u8,
    ) -> Result<Self> {
        check_capacity::<N>(pixel_count)?;
        let driver = D::open(pixel_count, pin, layout)?;
        Self::from_driver(driver, strobe_brightness)
    }
}

impl<D: StripDriver, const N: usize> StrobeBuffer<D, N> {
    /// Wrap an already opened driver.
    pub fn from_driver(driver: D, strobe_brightness: u8) -> Result<Self> {
        check_capacity::<N>(driver.pixel_count())?;
        debug!(
            capacity = N,
            layout = %driver.layout(),
            strobe_brightness,
            "strobe buffer ready"
        );
        Ok(StrobeBuffer {
            driver,
            colors: [color::OFF; N],
            strobe_active: false,
            strobe_brightness,
        })
    }

    /// Buffer a logical color. Nothing reaches the strip until [`render`].
    ///
    /// [`render`]: StrobeBuffer::render
    pub fn write_pixel(&mut self, index: usize, color: u32) -> Result<()> {
        let slot = self.colors.get_mut(index).ok_or(Error::IndexOutOfRange {
            index,
            capacity: N,
        })?;
        *slot = color;
        Ok(())
    }

    pub fn pixel(&self, index: usize) -> Option<u32> {
        self.colors.get(index).copied()
    }

    pub fn pixels(&self) -> &[u32; N] {
        &self.colors
    }

    pub fn clear_all(&mut self) {
        self.colors = [color::OFF; N];
    }

    /// Stage every pixel's effective color and transmit the frame once.
    pub fn render(&mut self) {
        let white_channel = self.driver.has_white_channel();
        for (index, &logical) in self.colors.iter().enumerate() {
            let effective = if self.strobe_active {
                strobe_color(logical, white_channel, self.strobe_brightness)
            } else {
                logical
            };
            self.driver.set_channel_color(index, effective);
        }
        trace!(strobe = self.strobe_active, "transmitting frame");
        self.driver.transmit();
    }

    /// Switch strobe mode and render straight away, even if the mode is
    /// unchanged.
    pub fn set_strobe_mode(&mut self, enabled: bool) {
        if self.strobe_active != enabled {
            debug!(enabled, "strobe mode changed");
        }
        self.strobe_active = enabled;
        self.render();
    }

    pub fn is_strobe_active(&self) -> bool {
        self.strobe_active
    }

    pub fn strobe_brightness(&self) -> u8 {
        self.strobe_brightness
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }
}

/// Color shown for a pixel while strobing.
///
/// Strips without a white channel flash full RGB white. Strips with one keep
/// the buffered color channels and drive white at `brightness`.
pub fn strobe_color(logical: u32, white_channel: bool, brightness: u8) -> u32 {
    if white_channel {
        color::with_white(logical, brightness)
    } else {
        color::WHITE
    }
}

fn check_capacity<const N: usize>(configured: usize) -> Result<()> {
    if configured != N {
        return Err(Error::ConfigurationMismatch {
            configured,
            capacity: N,
        });
    }
    Ok(())
}
