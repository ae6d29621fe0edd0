//! Build an in-memory preview of a selected file. Nothing here writes
//! anywhere; the preview lives only until the next selection replaces
//! it.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{format_size, FileKind};

/// Cap on lines held for text-ish previews; the page scrolls within
/// this window.
const MAX_PREVIEW_LINES: usize = 400;
/// Cap on CSV rows held for the table preview.
const MAX_CSV_ROWS: usize = 200;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("unsupported file type: {}", .0.display())]
    Unsupported(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// What the File Tools page renders for the selected file.
#[derive(Debug, Clone)]
pub struct Preview {
    pub name: String,
    pub kind: FileKind,
    pub size: String,
    pub body: PreviewBody,
}

#[derive(Debug, Clone)]
pub enum PreviewBody {
    /// Parsed CSV: header row, data rows (capped), and the true totals.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        total_rows: usize,
        total_columns: usize,
    },
    /// Pretty-printed JSON or plain text lines (capped).
    Lines { lines: Vec<String>, truncated: bool },
    /// Media files get metadata only; the terminal can't play them.
    MetadataOnly,
}

/// Read the file and build whatever preview its kind supports.
pub fn build_preview(path: &Path) -> Result<Preview, PreviewError> {
    let kind =
        FileKind::detect(path).ok_or_else(|| PreviewError::Unsupported(path.to_path_buf()))?;

    let meta = std::fs::metadata(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let size = format_size(meta.len());

    let body = match kind {
        FileKind::Csv => preview_csv(path)?,
        FileKind::Json => preview_json(path)?,
        FileKind::Text => preview_text(path)?,
        FileKind::Image | FileKind::Audio => PreviewBody::MetadataOnly,
    };

    Ok(Preview {
        name,
        kind,
        size,
        body,
    })
}

fn preview_csv(path: &Path) -> Result<PreviewBody, PreviewError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    let mut total_rows = 0;
    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                // A torn row shouldn't kill the whole preview.
                tracing::warn!("skipping malformed CSV record: {}", e);
                continue;
            }
        };
        total_rows += 1;
        if rows.len() < MAX_CSV_ROWS {
            rows.push(record.iter().map(|f| f.to_string()).collect());
        }
    }

    Ok(PreviewBody::Table {
        total_columns: headers.len(),
        headers,
        rows,
        total_rows,
    })
}

/// Parse and pretty-print JSON; malformed content falls back to a raw
/// text preview rather than surfacing an error.
fn preview_json(path: &Path) -> Result<PreviewBody, PreviewError> {
    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(value) => {
            let pretty =
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| content.clone());
            Ok(lines_of(&pretty))
        }
        Err(e) => {
            tracing::warn!("JSON parse failed, falling back to text: {}", e);
            Ok(lines_of(&content))
        }
    }
}

fn preview_text(path: &Path) -> Result<PreviewBody, PreviewError> {
    let content = std::fs::read_to_string(path)?;
    Ok(lines_of(&content))
}

fn lines_of(content: &str) -> PreviewBody {
    let all: Vec<&str> = content.lines().collect();
    let truncated = all.len() > MAX_PREVIEW_LINES;
    PreviewBody::Lines {
        lines: all
            .into_iter()
            .take(MAX_PREVIEW_LINES)
            .map(|l| l.to_string())
            .collect(),
        truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn csv_preview_counts_rows_and_columns() {
        let (_dir, path) = write_temp("t.csv", "name,age\nalice,30\nbob,25\n");
        let preview = build_preview(&path).unwrap();
        assert_eq!(preview.kind, FileKind::Csv);
        match preview.body {
            PreviewBody::Table {
                headers,
                rows,
                total_rows,
                total_columns,
            } => {
                assert_eq!(headers, vec!["name", "age"]);
                assert_eq!(total_rows, 2);
                assert_eq!(total_columns, 2);
                assert_eq!(rows[1], vec!["bob", "25"]);
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn valid_json_is_pretty_printed() {
        let (_dir, path) = write_temp("t.json", r#"{"b":1,"a":[1,2]}"#);
        let preview = build_preview(&path).unwrap();
        match preview.body {
            PreviewBody::Lines { lines, .. } => {
                // Pretty printing spreads the object over several lines.
                assert!(lines.len() > 1);
                assert!(lines.iter().any(|l| l.contains("\"a\"")));
            }
            other => panic!("expected lines, got {:?}", other),
        }
    }

    #[test]
    fn invalid_json_falls_back_to_raw_text() {
        let raw = "{not json at all";
        let (_dir, path) = write_temp("broken.json", raw);
        let preview = build_preview(&path).unwrap();
        match preview.body {
            PreviewBody::Lines { lines, truncated } => {
                assert_eq!(lines, vec![raw.to_string()]);
                assert!(!truncated);
            }
            other => panic!("expected lines, got {:?}", other),
        }
    }

    #[test]
    fn media_files_get_metadata_only() {
        let (_dir, path) = write_temp("x.png", "not really a png");
        let preview = build_preview(&path).unwrap();
        assert_eq!(preview.kind, FileKind::Image);
        assert!(matches!(preview.body, PreviewBody::MetadataOnly));
        assert!(!preview.size.is_empty());
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let (_dir, path) = write_temp("x.zip", "zzz");
        assert!(matches!(
            build_preview(&path),
            Err(PreviewError::Unsupported(_))
        ));
    }

    #[test]
    fn long_text_is_truncated() {
        let content: String = (0..500).map(|i| format!("line {}\n", i)).collect();
        let (_dir, path) = write_temp("big.txt", &content);
        match build_preview(&path).unwrap().body {
            PreviewBody::Lines { lines, truncated } => {
                assert_eq!(lines.len(), MAX_PREVIEW_LINES);
                assert!(truncated);
            }
            other => panic!("expected lines, got {:?}", other),
        }
    }
}
