//! Channel layout of a strip: wire channel order plus signalling speed.
//!
//! Layout tags are written the way strip vendors print them, e.g. `GRB`,
//! `GRBW+KHZ800` or `RGB+KHZ400`. Any permutation of `RGB` or `RGBW` is
//! accepted as a channel order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    White,
}

impl Channel {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Channel::Red),
            'G' => Some(Channel::Green),
            'B' => Some(Channel::Blue),
            'W' => Some(Channel::White),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Channel::Red => 'R',
            Channel::Green => 'G',
            Channel::Blue => 'B',
            Channel::White => 'W',
        }
    }

    fn extract(self, packed: u32) -> u8 {
        match self {
            Channel::Red => color::red(packed),
            Channel::Green => color::green(packed),
            Channel::Blue => color::blue(packed),
            Channel::White => color::white(packed),
        }
    }
}

/// Order in which channels are shifted out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOrder {
    channels: [Channel; 4],
    len: usize,
}

impl ChannelOrder {
    pub const RGB: ChannelOrder =
        ChannelOrder::three([Channel::Red, Channel::Green, Channel::Blue]);
    pub const GRB: ChannelOrder =
        ChannelOrder::three([Channel::Green, Channel::Red, Channel::Blue]);
    pub const BGR: ChannelOrder =
        ChannelOrder::three([Channel::Blue, Channel::Green, Channel::Red]);
    pub const RGBW: ChannelOrder = ChannelOrder::four([
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::White,
    ]);
    pub const GRBW: ChannelOrder = ChannelOrder::four([
        Channel::Green,
        Channel::Red,
        Channel::Blue,
        Channel::White,
    ]);

    const fn three(c: [Channel; 3]) -> Self {
        // The fourth slot is never read when len == 3.
        ChannelOrder {
            channels: [c[0], c[1], c[2], Channel::White],
            len: 3,
        }
    }

    const fn four(channels: [Channel; 4]) -> Self {
        ChannelOrder { channels, len: 4 }
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels[..self.len]
    }

    pub fn has_white_channel(&self) -> bool {
        self.len == 4
    }
}

impl FromStr for ChannelOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidLayout(s.to_string());

        let parsed: Vec<Channel> = s
            .trim()
            .chars()
            .map(Channel::from_char)
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;

        // Each channel at most once, and R, G, B always present.
        let count = |ch: Channel| parsed.iter().filter(|&&c| c == ch).count();
        let rgb_ok = [Channel::Red, Channel::Green, Channel::Blue]
            .iter()
            .all(|&ch| count(ch) == 1);

        match parsed.len() {
            3 if rgb_ok => Ok(ChannelOrder::three([parsed[0], parsed[1], parsed[2]])),
            4 if rgb_ok && count(Channel::White) == 1 => Ok(ChannelOrder::four([
                parsed[0], parsed[1], parsed[2], parsed[3],
            ])),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.channels() {
            write!(f, "{}", ch.as_char())?;
        }
        Ok(())
    }
}

/// Bit-rate class of the strip's data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalSpeed {
    #[default]
    Khz800,
    Khz400,
}

impl FromStr for SignalSpeed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KHZ800" | "800" => Ok(SignalSpeed::Khz800),
            "KHZ400" | "400" => Ok(SignalSpeed::Khz400),
            _ => Err(Error::InvalidLayout(s.to_string())),
        }
    }
}

impl fmt::Display for SignalSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalSpeed::Khz800 => write!(f, "KHZ800"),
            SignalSpeed::Khz400 => write!(f, "KHZ400"),
        }
    }
}

/// Channel order and signalling speed, passed through to the strip driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorLayout {
    pub order: ChannelOrder,
    pub speed: SignalSpeed,
}

impl ColorLayout {
    pub const fn new(order: ChannelOrder, speed: SignalSpeed) -> Self {
        ColorLayout { order, speed }
    }

    pub fn has_white_channel(&self) -> bool {
        self.order.has_white_channel()
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.order.channels().len()
    }

    /// Append one packed color to `out` in wire channel order.
    pub fn encode(&self, packed: u32, out: &mut Vec<u8>) {
        out.extend(self.order.channels().iter().map(|ch| ch.extract(packed)));
    }

    /// Encode a whole frame of packed colors.
    pub fn encode_frame(&self, colors: &[u32]) -> Vec<u8> {
        let mut data = Vec::with_capacity(colors.len() * self.bytes_per_pixel());
        for &c in colors {
            self.encode(c, &mut data);
        }
        data
    }
}

impl Default for ColorLayout {
    fn default() -> Self {
        ColorLayout::new(ChannelOrder::GRB, SignalSpeed::Khz800)
    }
}

impl FromStr for ColorLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('+') {
            Some((order, speed)) => Ok(ColorLayout::new(order.parse()?, speed.parse()?)),
            None => Ok(ColorLayout::new(s.parse()?, SignalSpeed::default())),
        }
    }
}

impl TryFrom<String> for ColorLayout {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ColorLayout> for String {
    fn from(layout: ColorLayout) -> String {
        layout.to_string()
    }
}

impl fmt::Display for ColorLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.order, self.speed)
    }
}
