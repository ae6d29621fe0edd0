pub mod preview;

use std::path::Path;

pub use preview::{build_preview, Preview, PreviewBody, PreviewError};

/// What the File Tools page knows how to do with a file, decided by
/// extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Json,
    Text,
    Image,
    Audio,
}

impl FileKind {
    pub fn detect(path: &Path) -> Option<FileKind> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(FileKind::Csv),
            "json" => Some(FileKind::Json),
            "txt" | "md" | "log" | "rs" | "py" | "js" | "ts" | "toml" | "yaml" | "yml" | "sh" => {
                Some(FileKind::Text)
            }
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" => Some(FileKind::Image),
            "mp3" | "wav" | "ogg" | "flac" => Some(FileKind::Audio),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Csv => "CSV",
            FileKind::Json => "JSON",
            FileKind::Text => "Text",
            FileKind::Image => "Image",
            FileKind::Audio => "Audio",
        }
    }
}

/// Format a byte count the way the status line shows it.
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;

    if bytes >= GIB {
        format!("{:.2} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.2} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.2} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detection_by_extension() {
        assert_eq!(
            FileKind::detect(&PathBuf::from("report.CSV")),
            Some(FileKind::Csv)
        );
        assert_eq!(
            FileKind::detect(&PathBuf::from("data.json")),
            Some(FileKind::Json)
        );
        assert_eq!(
            FileKind::detect(&PathBuf::from("notes.md")),
            Some(FileKind::Text)
        );
        assert_eq!(
            FileKind::detect(&PathBuf::from("cover.jpeg")),
            Some(FileKind::Image)
        );
        assert_eq!(
            FileKind::detect(&PathBuf::from("song.flac")),
            Some(FileKind::Audio)
        );
        assert_eq!(FileKind::detect(&PathBuf::from("archive.zip")), None);
        assert_eq!(FileKind::detect(&PathBuf::from("Makefile")), None);
    }

    #[test]
    fn size_formatting() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KiB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MiB");
    }
}
