//! Filesystem utilities for the conversion pipeline.

use std::path::Path;

use crate::error::ConversionError;
use crate::models::GeneratedFile;

/// Filesystem utility functions.
pub struct FsUtils;

impl FsUtils {
    /// Ensure `path` names an existing regular file.
    pub async fn ensure_source_file(path: &Path) -> Result<(), ConversionError> {
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(ConversionError::SourceNotFound {
                path: path.to_path_buf(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ConversionError::SourceNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => Err(ConversionError::Io(e)),
        }
    }

    /// Create the output directory (and parents) if missing.
    ///
    /// Returns `true` when the directory had to be created.
    pub async fn prepare_output_dir(path: &Path) -> Result<bool, ConversionError> {
        let existed = tokio::fs::try_exists(path).await?;
        tokio::fs::create_dir_all(path).await?;
        Ok(!existed)
    }

    /// List the entries of `dir`, sorted by name.
    pub async fn list_generated(dir: &Path) -> Result<Vec<GeneratedFile>, ConversionError> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            let is_dir = metadata.is_dir();
            files.push(GeneratedFile {
                name: entry.file_name().to_string_lossy().to_string(),
                size_bytes: if is_dir { 0 } else { metadata.len() },
                is_dir,
            });
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }
}
