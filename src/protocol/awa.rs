/// Build an AWA frame (HyperSerialPico): `Awa`, LED count minus one, CRC,
/// pixels, then three Fletcher checksum bytes.
///
/// Zero pixels yield an empty frame; the header has no way to say "no LEDs".
pub fn build_awa_frame(pixel_data: &[u8], stride: usize) -> Vec<u8> {
    let led_count = pixel_data.len() / stride.max(1);
    if led_count == 0 {
        return Vec::new();
    }

    let [count_hi, count_lo] = ((led_count - 1) as u16).to_be_bytes();
    let crc = (count_hi ^ count_lo) ^ 0x55;

    let mut frame = Vec::with_capacity(6 + pixel_data.len() + 3);
    frame.extend_from_slice(b"Awa");
    frame.extend_from_slice(&[count_hi, count_lo, crc]);
    frame.extend_from_slice(pixel_data);

    let mut fletcher1: u16 = 0;
    let mut fletcher2: u16 = 0;
    let mut fletcher_ext: u16 = 0;

    for (position, &byte) in pixel_data.iter().enumerate() {
        fletcher1 = (fletcher1 + byte as u16) % 255;
        fletcher2 = (fletcher2 + fletcher1) % 255;
        fletcher_ext = (fletcher_ext + ((byte as u16) ^ (position as u16))) % 255;
    }

    // 'A' would look like the start of the next header.
    if fletcher_ext == 0x41 {
        fletcher_ext = 0xaa;
    }

    frame.extend_from_slice(&[fletcher1 as u8, fletcher2 as u8, fletcher_ext as u8]);
    frame
}
