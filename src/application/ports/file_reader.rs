use std::io;
use std::path::Path;

use async_trait::async_trait;

#[async_trait]
pub trait FileReader: Send + Sync {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}
