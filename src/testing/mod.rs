pub mod mocks;

pub use mocks::{MockResourceFetcher, MockUriChecker};
