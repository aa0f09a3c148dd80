mod errors;
pub mod pipeline;
mod record;

#[cfg(test)]
mod tests;

pub use errors::{ScrapeError, ScrapeResult};
pub use record::{Record, NO_LINK, NO_PRICE, NO_RATING, NO_TITLE};
