use crate::mode::WebpInput;

use anyhow::anyhow;

/// Lossy quality on libwebp's 0-100 scale.
pub const WEBP_QUALITY: f32 = 85.0;

pub fn encode_webp(input: &WebpInput, quality: f32) -> anyhow::Result<Vec<u8>> {
    let (width, height) = input.dimensions();

    let encoder = match input {
        WebpInput::Rgb(buffer) => webp::Encoder::from_rgb(buffer.as_raw(), width, height),
        WebpInput::Rgba(buffer) => webp::Encoder::from_rgba(buffer.as_raw(), width, height),
    };

    // `encode` panics when libwebp rejects the picture, `encode_simple` reports it.
    let memory = encoder
        .encode_simple(false, quality)
        .map_err(|error| anyhow!("WebP encoding failed: {:?}", error))?;

    Ok(memory.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn encodes_a_riff_webp_container() {
        let input = WebpInput::Rgba(RgbaImage::from_pixel(16, 16, Rgba([200, 30, 90, 128])));

        let bytes = encode_webp(&input, WEBP_QUALITY).unwrap();

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }
}
