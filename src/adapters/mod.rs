use crate::core::ArtifactSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::Path;

/// Filesystem-backed artifact source rooted at a base directory.
#[derive(Debug, Clone)]
pub struct LocalArtifacts {
    base_path: String,
}

impl LocalArtifacts {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

#[async_trait]
impl ArtifactSource for LocalArtifacts {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }
}
