use crate::encode::{WEBP_QUALITY, encode_webp};
use crate::mode::{detect_color_mode, normalize};
use crate::report;
use crate::statistics::Statistics;

use anyhow::Context;
use std::fs;
use std::ops::Not;
use std::path::{Path, PathBuf};

pub const TARGET_EXTENSION: &str = "webp";

pub fn webp_path_for(source_path: &Path) -> PathBuf {
    source_path.with_extension(TARGET_EXTENSION)
}

/// A WebP sibling only counts as up to date when it is strictly newer than its source.
pub fn is_up_to_date(source_path: &Path, webp_path: &Path) -> anyhow::Result<bool> {
    if webp_path.exists().not() {
        return Ok(false);
    }

    let source_modified = fs::metadata(source_path)
        .and_then(|metadata| metadata.modified())
        .with_context(|| format!("Failed to read the modification time of {}", source_path.display()))?;
    let webp_modified = fs::metadata(webp_path)
        .and_then(|metadata| metadata.modified())
        .with_context(|| format!("Failed to read the modification time of {}", webp_path.display()))?;

    Ok(webp_modified > source_modified)
}

pub fn write_webp(source_path: &Path, webp_path: &Path) -> anyhow::Result<()> {
    let bytes = fs::read(source_path).with_context(|| format!("Failed to read {}", source_path.display()))?;

    let format = image::guess_format(&bytes).context("Failed to recognize the image format")?;
    let image = image::load_from_memory_with_format(&bytes, format).context("Failed to decode image")?;
    let color_mode = detect_color_mode(&bytes, format, &image).context("Failed to read the PNG header")?;

    if color_mode.needs_alpha_expansion() {
        log::debug!("Expanding {} image {} to RGBA", color_mode, source_path.display());
    }

    let webp_bytes = encode_webp(&normalize(image, color_mode), WEBP_QUALITY)?;

    fs::write(webp_path, webp_bytes).with_context(|| format!("Failed to write {}", webp_path.display()))
}

pub fn convert_file(source_path: &Path, delete_original: bool, statistics: &mut Statistics) {
    if let Err(error) = try_convert_file(source_path, delete_original, statistics) {
        println!("{}", report::conversion_failed(source_path, &error));
        statistics.failed_files += 1;
    }
}

fn try_convert_file(source_path: &Path, delete_original: bool, statistics: &mut Statistics) -> anyhow::Result<()> {
    let webp_path = webp_path_for(source_path);

    if is_up_to_date(source_path, &webp_path)? {
        log::debug!("Skipping {}: {} is newer", source_path.display(), webp_path.display());
        statistics.skipped_files += 1;
        return Ok(());
    }

    write_webp(source_path, &webp_path)?;

    let original_size = file_size(source_path)?;
    let webp_size = file_size(&webp_path)?;
    statistics.record_conversion(original_size, webp_size);

    let file_name = file_name_of(source_path);
    println!("{}", report::converted(&file_name, original_size, webp_size));

    if delete_original {
        fs::remove_file(source_path).with_context(|| format!("Failed to delete {}", source_path.display()))?;
        println!("{}", report::deleted_original(&file_name));
    }

    Ok(())
}

fn file_size(path: &Path) -> anyhow::Result<u64> {
    Ok(fs::metadata(path)
        .with_context(|| format!("Failed to read the size of {}", path.display()))?
        .len())
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|file_name| file_name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
