pub mod ask;
pub mod generate;
pub mod headlines;
pub mod scrape;
