//! Serial framing for LED controllers that do the strip timing themselves.

mod adalight;
mod awa;

pub use adalight::build_adalight_frame;
pub use awa::build_awa_frame;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Adalight,
    /// HyperSerial AWA framing with Fletcher checksums.
    Awa,
}

impl Protocol {
    /// Wrap already channel-ordered pixel bytes into a frame.
    pub fn build_frame(self, pixel_data: &[u8], stride: usize) -> Vec<u8> {
        match self {
            Protocol::Adalight => build_adalight_frame(pixel_data, stride),
            Protocol::Awa => build_awa_frame(pixel_data, stride),
        }
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "adalight" => Ok(Protocol::Adalight),
            "awa" => Ok(Protocol::Awa),
            _ => Err(Error::InvalidProtocol(s.to_string())),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Adalight => write!(f, "adalight"),
            Protocol::Awa => write!(f, "awa"),
        }
    }
}
