mod chrome;
mod fetcher;
mod mock;

pub use chrome::ChromeFetcher;
pub use fetcher::Fetcher;
pub use mock::MockFetcher;
