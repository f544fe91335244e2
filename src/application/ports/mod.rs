mod blob_fetcher;
mod file_loader;
mod file_reader;

pub use blob_fetcher::{BlobFetcher, FetchedBlob, RetrievalError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use file_reader::FileReader;
