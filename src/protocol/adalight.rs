/// Build an Adalight frame: `Ada`, LED count minus one (big endian),
/// checksum, pixels.
///
/// Adalight receivers cannot express an empty strip, so zero pixels yield an
/// empty frame and nothing should be sent.
pub fn build_adalight_frame(pixel_data: &[u8], stride: usize) -> Vec<u8> {
    let led_count = pixel_data.len() / stride.max(1);
    if led_count == 0 {
        return Vec::new();
    }

    let [count_hi, count_lo] = ((led_count - 1) as u16).to_be_bytes();
    let checksum = count_hi ^ count_lo ^ 0x55;

    let mut frame = Vec::with_capacity(6 + pixel_data.len());
    frame.extend_from_slice(b"Ada");
    frame.extend_from_slice(&[count_hi, count_lo, checksum]);
    frame.extend_from_slice(pixel_data);
    frame
}
