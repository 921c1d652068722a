//! In-memory file payload for multipart uploads.

use std::path::Path;

/// A file to send as one multipart part.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk, keeping only its final path component as name.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self { file_name, bytes })
    }

    /// True for `.xlsx`/`.xls` names, the only formats the lead importer takes.
    pub fn is_excel(&self) -> bool {
        let name = self.file_name.to_ascii_lowercase();
        name.ends_with(".xlsx") || name.ends_with(".xls")
    }

    pub(crate) fn into_part(self) -> reqwest::multipart::Part {
        reqwest::multipart::Part::bytes(self.bytes).file_name(self.file_name)
    }
}
