const BYTES_PER_KILOBYTE: f64 = 1024.0;
const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub converted_files: u64,
    pub skipped_files: u64,
    pub failed_files: u64,
    /// Sum of `original size - webp size` over all conversions. Negative when the WebP output is larger.
    pub saved_bytes: i64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_conversion(&mut self, original_size: u64, webp_size: u64) {
        self.saved_bytes += original_size as i64 - webp_size as i64;
        self.converted_files += 1;
    }

    pub fn saved_megabytes(&self) -> f64 {
        self.saved_bytes as f64 / BYTES_PER_MEGABYTE
    }
}

pub fn bytes_to_kilobytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_KILOBYTE
}
