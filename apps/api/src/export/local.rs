use std::path::PathBuf;

use async_trait::async_trait;

use crate::export::{ExportError, ExportRequest, ExportTarget};

/// Writes exports to a directory on local disk.
#[derive(Debug, Clone)]
pub struct LocalExportTarget {
    root: PathBuf,
}

impl LocalExportTarget {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ExportTarget for LocalExportTarget {
    async fn export(&self, request: ExportRequest) -> Result<String, ExportError> {
        let path = self.root.join(&request.key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &request.body).await?;
        Ok(path.display().to_string())
    }

    fn backend(&self) -> &'static str {
        "local"
    }
}
