use neopixel_strobe::color::{GREEN, RED, WHITE};
use neopixel_strobe::{Error, Protocol, SerialStrip, StrobeBuffer, DEFAULT_STROBE_BRIGHTNESS};

use crate::mock_strip::{RecordingStrip, StripCall};

fn buffer(layout: &str) -> StrobeBuffer<RecordingStrip> {
    StrobeBuffer::from_driver(RecordingStrip::new(16, layout), DEFAULT_STROBE_BRIGHTNESS)
        .unwrap()
}

#[test]
fn render_stages_every_pixel_then_transmits_once() {
    let mut strobe = buffer("GRB");
    strobe.render();

    let calls = &strobe.driver().calls;
    assert_eq!(calls.len(), 17);
    for (i, call) in calls[..16].iter().enumerate() {
        assert_eq!(*call, StripCall::SetColor { index: i, packed: 0 });
    }
    assert_eq!(calls[16], StripCall::Transmit);
}

#[test]
fn render_does_not_use_driver_clear() {
    let mut strobe = buffer("GRB");
    strobe.write_pixel(0, RED).unwrap();
    strobe.clear_all();
    strobe.render();
    assert!(!strobe.driver().calls.contains(&StripCall::ClearStaged));
    assert!(strobe.driver().last_frame().iter().all(|&c| c == 0));
}

#[test]
fn red_green_then_strobe_scenario() {
    let mut strobe = buffer("GRB");
    strobe.write_pixel(0, 0x00FF_0000).unwrap();
    strobe.write_pixel(1, 0x0000_FF00).unwrap();
    strobe.render();

    let frame = strobe.driver().last_frame();
    assert_eq!(frame[0], RED);
    assert_eq!(frame[1], GREEN);
    assert!(frame[2..].iter().all(|&c| c == 0x0000_0000));
    assert_eq!(strobe.driver().transmit_count(), 1);

    strobe.set_strobe_mode(true);
    assert_eq!(strobe.driver().transmit_count(), 2);
    assert_eq!(strobe.driver().last_frame(), vec![0x00FF_FFFF; 16]);
}

#[test]
fn repeated_strobe_calls_each_render() {
    let mut strobe = buffer("GRBW");
    strobe.set_strobe_mode(true);
    strobe.set_strobe_mode(true);
    strobe.set_strobe_mode(false);
    assert_eq!(strobe.driver().transmit_count(), 3);
}

#[test]
fn strobe_keeps_logical_buffer() {
    let mut strobe = buffer("GRB");
    strobe.write_pixel(7, RED).unwrap();
    strobe.set_strobe_mode(true);
    assert_eq!(strobe.pixel(7), Some(RED));
    assert_eq!(strobe.driver().last_frame()[7], WHITE);
}

#[test]
fn open_builds_driver_from_pin_and_layout() {
    let strobe: StrobeBuffer<RecordingStrip> =
        StrobeBuffer::open(16, 6, "RGBW+KHZ400".parse().unwrap()).unwrap();
    assert!(strobe.driver().layout.has_white_channel());
    assert!(strobe.driver().calls.is_empty());
}

#[test]
fn open_rejects_pixel_count_mismatch() {
    let result = StrobeBuffer::<RecordingStrip, 16>::open(60, 6, Default::default());
    match result {
        Err(Error::ConfigurationMismatch {
            configured,
            capacity,
        }) => {
            assert_eq!(configured, 60);
            assert_eq!(capacity, 16);
        }
        _ => panic!("expected ConfigurationMismatch"),
    }
}

#[test]
fn out_of_range_write_reports_index() {
    let mut strobe = buffer("GRB");
    let err = strobe.write_pixel(99, RED).unwrap_err();
    assert_eq!(err.to_string(), "Pixel index 99 out of range (capacity 16)");
}

#[test]
fn serial_strip_strobe_frame_on_rgb_wire() {
    let strip = SerialStrip::from_writer(
        Vec::new(),
        "mem",
        16,
        "GRB".parse().unwrap(),
        Protocol::Adalight,
    );
    let mut strobe: StrobeBuffer<_> = StrobeBuffer::from_driver(strip, 0xFF).unwrap();
    strobe.write_pixel(0, RED).unwrap();
    strobe.set_strobe_mode(true);

    let bytes = strobe.driver().writer();
    assert_eq!(&bytes[..6], &[0x41, 0x64, 0x61, 0x00, 0x0F, 0x5A]);
    assert!(bytes[6..].iter().all(|&b| b == 0xFF));
    assert_eq!(bytes.len(), 6 + 16 * 3);
}

#[test]
fn serial_strip_strobe_frame_on_rgbw_wire() {
    let strip = SerialStrip::from_writer(
        Vec::new(),
        "mem",
        16,
        "GRBW".parse().unwrap(),
        Protocol::Adalight,
    );
    let mut strobe: StrobeBuffer<_> = StrobeBuffer::from_driver(strip, 0x80).unwrap();
    strobe.write_pixel(0, RED).unwrap();
    strobe.set_strobe_mode(true);

    let bytes = strobe.driver().writer();
    // pixel 0: G, R, B, W
    assert_eq!(&bytes[6..10], &[0x00, 0xFF, 0x00, 0x80]);
    // pixel 1: white only
    assert_eq!(&bytes[10..14], &[0x00, 0x00, 0x00, 0x80]);
}
