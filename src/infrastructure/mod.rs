pub mod observability;
pub mod retrieval;
pub mod storage;
pub mod text_processing;

mod converter_factory;

pub use converter_factory::{ConverterFactory, ConverterFactoryError, DefaultConverter};
