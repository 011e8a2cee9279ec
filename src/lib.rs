//! Strobe (flash-to-white) overlay for addressable LED strips.
//!
//! [`StrobeBuffer`] keeps the logical colors of a fixed number of pixels and,
//! when strobe mode is on, replaces them with a flash color at render time
//! before handing the frame to a [`StripDriver`].

pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod layout;
pub mod output;
pub mod protocol;
pub mod strobe;

pub use driver::{MemoryStrip, OpenStrip, StripDriver};
pub use error::{Error, Result};
pub use layout::{ChannelOrder, ColorLayout, SignalSpeed};
pub use output::{SerialPin, SerialStrip};
pub use protocol::Protocol;
pub use strobe::{StrobeBuffer, DEFAULT_CAPACITY, DEFAULT_STROBE_BRIGHTNESS};
