//! Integration tests for the strobe buffer against a recording strip driver.

mod mock_strip;
mod strobe_tests;
