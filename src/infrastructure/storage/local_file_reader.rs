use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::FileReader;

pub struct LocalFileReader;

#[async_trait]
impl FileReader for LocalFileReader {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}
