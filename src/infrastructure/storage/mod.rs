mod local_file_reader;

pub use local_file_reader::LocalFileReader;
