use image::{ColorType, DynamicImage, ImageFormat, RgbImage, RgbaImage};
use std::fmt;
use std::io::Cursor;

/// How the pixels of the source file are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Palette,
    Grayscale,
    GrayscaleAlpha,
    Rgb,
    Rgba,
}

impl ColorMode {
    pub fn from_png_color_type(color_type: png::ColorType) -> Self {
        match color_type {
            png::ColorType::Indexed => ColorMode::Palette,
            png::ColorType::Grayscale => ColorMode::Grayscale,
            png::ColorType::GrayscaleAlpha => ColorMode::GrayscaleAlpha,
            png::ColorType::Rgb => ColorMode::Rgb,
            png::ColorType::Rgba => ColorMode::Rgba,
        }
    }

    pub fn from_color_type(color_type: ColorType) -> Self {
        match (color_type.has_color(), color_type.has_alpha()) {
            (false, false) => ColorMode::Grayscale,
            (false, true) => ColorMode::GrayscaleAlpha,
            (true, false) => ColorMode::Rgb,
            (true, true) => ColorMode::Rgba,
        }
    }

    /// Palette and grayscale images may carry transparency in a `tRNS` chunk, so they are widened to RGBA.
    pub fn needs_alpha_expansion(self) -> bool {
        matches!(self, ColorMode::Palette | ColorMode::Grayscale)
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, ColorMode::GrayscaleAlpha | ColorMode::Rgba)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Palette => "P",
            ColorMode::Grayscale => "L",
            ColorMode::GrayscaleAlpha => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
        };
        f.write_str(name)
    }
}

/// A decoded image can no longer tell a palette PNG from a true-color one, so PNG input is classified by its header.
pub fn detect_color_mode(bytes: &[u8], format: ImageFormat, image: &DynamicImage) -> anyhow::Result<ColorMode> {
    if format != ImageFormat::Png {
        return Ok(ColorMode::from_color_type(image.color()));
    }

    let reader = png::Decoder::new(Cursor::new(bytes)).read_info()?;

    Ok(ColorMode::from_png_color_type(reader.info().color_type))
}

/// Pixel buffers in one of the two layouts the WebP encoder accepts.
pub enum WebpInput {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl WebpInput {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            WebpInput::Rgb(buffer) => buffer.dimensions(),
            WebpInput::Rgba(buffer) => buffer.dimensions(),
        }
    }
}

pub fn normalize(image: DynamicImage, color_mode: ColorMode) -> WebpInput {
    if color_mode.needs_alpha_expansion() || color_mode.has_alpha() {
        WebpInput::Rgba(image.into_rgba8())
    } else {
        WebpInput::Rgb(image.into_rgb8())
    }
}
