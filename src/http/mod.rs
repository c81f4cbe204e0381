pub mod fetcher;
pub mod request_builder;
pub mod response_converter;

pub use fetcher::HttpResourceFetcher;
pub use request_builder::RequestBuilderImpl;
pub use response_converter::ResponseConverterImpl;
