mod http_blob_fetcher;

pub use http_blob_fetcher::HttpBlobFetcher;
