//! Console lines printed while converting. The wording is stable so existing scripts parsing the output keep working.

use crate::statistics::{Statistics, bytes_to_kilobytes};

use std::path::Path;

pub fn directory_missing(directory: &Path) -> String {
    format!("El directorio {} no existe.", directory.display())
}

pub fn conversion_started(directory: &Path) -> String {
    format!("🔄 Iniciando conversión de imágenes en: {}", directory.display())
}

pub fn converted(file_name: &str, original_size: u64, webp_size: u64) -> String {
    format!(
        "✅ Convertido: {} ({:.1}KB -> {:.1}KB)",
        file_name,
        bytes_to_kilobytes(original_size),
        bytes_to_kilobytes(webp_size)
    )
}

pub fn deleted_original(file_name: &str) -> String {
    format!("🗑️ Eliminado original: {}", file_name)
}

pub fn conversion_failed(path: &Path, error: &anyhow::Error) -> String {
    format!("❌ Error convirtiendo {}: {:#}", path.display(), error)
}

/// The final block, preceded by an empty line.
pub fn summary(statistics: &Statistics) -> String {
    format!(
        "\n🎉 Proceso finalizado.\n🖼️ Imágenes procesadas: {}\n💾 Espacio ahorrado (estimado): {:.2} MB",
        statistics.converted_files,
        statistics.saved_megabytes()
    )
}
