use std::io::Write;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serialport::SerialPort;
use tracing::{debug, info, warn};

use crate::driver::{OpenStrip, StripDriver};
use crate::error::Result;
use crate::layout::ColorLayout;
use crate::protocol::Protocol;

/// Serial output a strip controller listens on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialPin {
    pub port: String,
    pub baud_rate: u32,
    #[serde(default)]
    pub protocol: Protocol,
}

/// Strip driven through a serial-attached controller (Adalight / AWA
/// firmware). Every transmit writes one complete frame.
pub struct SerialStrip<W: Write = Box<dyn SerialPort>> {
    writer: W,
    name: String,
    layout: ColorLayout,
    protocol: Protocol,
    staged: Vec<u32>,
    frames_sent: u64,
    frames_failed: u64,
}

impl<W: Write> SerialStrip<W> {
    /// Drive a strip through any byte sink.
    pub fn from_writer(
        writer: W,
        name: impl Into<String>,
        pixel_count: usize,
        layout: ColorLayout,
        protocol: Protocol,
    ) -> Self {
        SerialStrip {
            writer,
            name: name.into(),
            layout,
            protocol,
            staged: vec![0; pixel_count],
            frames_sent: 0,
            frames_failed: 0,
        }
    }

    /// Serialise the staged colors into a wire frame.
    pub fn encode_frame(&self) -> Vec<u8> {
        let data = self.layout.encode_frame(&self.staged);
        self.protocol.build_frame(&data, self.layout.bytes_per_pixel())
    }

    pub fn frames_sent(&self) -> u64 {
        self.frames_sent
    }

    pub fn frames_failed(&self) -> u64 {
        self.frames_failed
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn write_frame(&mut self, frame: &[u8]) -> std::io::Result<()> {
        self.writer.write_all(frame)?;
        self.writer.flush()
    }
}

impl<W: Write> StripDriver for SerialStrip<W> {
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
        let frame = self.encode_frame();
        if frame.is_empty() {
            debug!(port = %self.name, "no pixels, nothing to send");
            return;
        }
        debug!(
            port = %self.name,
            bytes = frame.len(),
            pixels = self.staged.len(),
            "sending frame"
        );

        match self.write_frame(&frame) {
            Ok(()) => self.frames_sent += 1,
            Err(e) => {
                // No acknowledgement channel: count it and move on.
                self.frames_failed += 1;
                warn!(port = %self.name, error = %e, "serial write failed");
            }
        }
    }
}

impl OpenStrip for SerialStrip {
    type Pin = SerialPin;

    fn open(pixel_count: usize, pin: SerialPin, layout: ColorLayout) -> Result<Self> {
        let port = open_port(&pin)?;
        info!(
            port = %pin.port,
            baud = pin.baud_rate,
            protocol = %pin.protocol,
            %layout,
            pixel_count,
            "opened serial strip"
        );
        Ok(SerialStrip::from_writer(
            port,
            pin.port,
            pixel_count,
            layout,
            pin.protocol,
        ))
    }
}

fn open_port(pin: &SerialPin) -> Result<Box<dyn SerialPort>> {
    let mut port = serialport::new(&pin.port, pin.baud_rate)
        .data_bits(serialport::DataBits::Eight)
        .parity(serialport::Parity::None)
        .stop_bits(serialport::StopBits::One)
        .flow_control(serialport::FlowControl::None)
        .timeout(Duration::from_millis(1000))
        .open()?;

    // Many controllers reset or stay silent until DTR is asserted.
    if let Err(e) = port.write_data_terminal_ready(true) {
        warn!(port = %pin.port, error = %e, "failed to set DTR");
    }

    // Allow device to initialize
    thread::sleep(Duration::from_millis(100));

    Ok(port)
}
