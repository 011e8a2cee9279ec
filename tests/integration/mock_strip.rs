//! Mock strip driver for integration tests.
//!
//! Records every driver call in order so tests can assert on the exact
//! staging/transmit sequence a render produces.

use neopixel_strobe::{ColorLayout, OpenStrip, StripDriver};

#[derive(Debug, Clone, PartialEq)]
pub enum StripCall {
    SetColor { index: usize, packed: u32 },
    ClearStaged,
    Transmit,
}

pub struct RecordingStrip {
    pub layout: ColorLayout,
    pub pixel_count: usize,
    pub calls: Vec<StripCall>,
}

#[allow(dead_code)]
impl RecordingStrip {
    pub fn new(pixel_count: usize, layout: &str) -> Self {
        Self {
            layout: layout.parse().unwrap(),
            pixel_count,
            calls: Vec::new(),
        }
    }

    pub fn transmit_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == StripCall::Transmit)
            .count()
    }

    /// Colors staged since the previous transmit, indexed by pixel.
    pub fn last_frame(&self) -> Vec<u32> {
        let end = self
            .calls
            .iter()
            .rposition(|c| *c == StripCall::Transmit)
            .expect("no frame transmitted");
        let start = self.calls[..end]
            .iter()
            .rposition(|c| *c == StripCall::Transmit)
            .map_or(0, |i| i + 1);

        let mut frame = vec![0; self.pixel_count];
        for call in &self.calls[start..end] {
            if let StripCall::SetColor { index, packed } = call {
                frame[*index] = *packed;
            }
        }
        frame
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl StripDriver for RecordingStrip {
    fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    fn layout(&self) -> ColorLayout {
        self.layout
    }

    fn set_channel_color(&mut self, index: usize, packed: u32) {
        self.calls.push(StripCall::SetColor { index, packed });
    }

    fn clear_staged(&mut self) {
        self.calls.push(StripCall::ClearStaged);
    }

    fn transmit(&mut self) {
        self.calls.push(StripCall::Transmit);
    }
}

impl OpenStrip for RecordingStrip {
    type Pin = u8;

    fn open(pixel_count: usize, _pin: u8, layout: ColorLayout) -> neopixel_strobe::Result<Self> {
        Ok(Self {
            layout,
            pixel_count,
            calls: Vec::new(),
        })
    }
}
