//! Strip driver seam.
//!
//! A [`StripDriver`] owns the staged colors for a physical strip and knows how
//! to push them out. The strobe buffer only ever stages colors and asks for a
//! transmit; bit timing and channel order belong to the driver.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::Result;
use crate::layout::ColorLayout;

pub trait StripDriver {
    /// Number of pixels the driver was opened with.
    fn pixel_count(&self) -> usize;

    fn layout(&self) -> ColorLayout;

    /// Whether packed colors carry a dedicated white channel.
    fn has_white_channel(&self) -> bool {
        self.layout().has_white_channel()
    }

    /// Stage one pixel's packed color. Indices past `pixel_count` are ignored.
    fn set_channel_color(&mut self, index: usize, packed: u32);

    /// Zero every staged color.
    fn clear_staged(&mut self);

    /// Push all staged colors to the strip. Blocks until the frame is written.
    fn transmit(&mut self);
}

/// A driver that can be opened from a pixel count, an output identifier and a
/// layout tag.
pub trait OpenStrip: StripDriver + Sized {
    /// Output identifier: a GPIO number, a serial port, ...
    type Pin;

    fn open(pixel_count: usize, pin: Self::Pin, layout: ColorLayout) -> Result<Self>;
}

/// Number of transmitted frames a [`MemoryStrip`] keeps.
pub const MEMORY_HISTORY_LEN: usize = 32;

/// Driver that keeps the most recent transmitted frames in memory.
#[derive(Debug, Clone)]
pub struct MemoryStrip {
    layout: ColorLayout,
    staged: Vec<u32>,
    history: VecDeque<Vec<u32>>,
    frames_sent: u64,
}

impl MemoryStrip {
    pub fn new(pixel_count: usize, layout: ColorLayout) -> Self {
        MemoryStrip {
            layout,
            staged: vec![0; pixel_count],
            history: VecDeque::with_capacity(MEMORY_HISTORY_LEN),
            frames_sent: 0,
        }
    }

    pub fn staged(&self) -> &[u32] {
        &self.staged
    }

    /// Up to [`MEMORY_HISTORY_LEN`] most recent frames, oldest first.
    pub fn history(&self) -> &VecDeque<Vec<u32>> {
        &self.history
    }

    /// Total frames transmitted, including ones dropped from the history.
    pub fn frames_sent(&self) -> u64 {
        self.frames_sent
    }

    pub fn last_frame(&self) -> Option<&[u32]> {
        self.history.back().map(Vec::as_slice)
    }
}

impl StripDriver for MemoryStrip {
    fn pixel_count(&self) -> usize {
        self.staged.len()
    }

    fn layout(&self) -> ColorLayout {
        self.layout
    }

    fn set_channel_color(&mut self, index: usize, packed: u32) {
        if let Some(slot) = self.staged.get_mut(index) {
            *slot = packed;
        }
    }

    fn clear_staged(&mut self) {
        self.staged.fill(0);
    }

    fn transmit(&mut self) {
        debug!(
            frame = self.frames_sent,
            "memory strip frame: {:08x?}", self.staged
        );
        if self.history.len() == MEMORY_HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(self.staged.clone());
        self.frames_sent += 1;
    }
}

impl OpenStrip for MemoryStrip {
    type Pin = ();

    fn open(pixel_count: usize, _pin: (), layout: ColorLayout) -> Result<Self> {
        Ok(MemoryStrip::new(pixel_count, layout))
    }
}
