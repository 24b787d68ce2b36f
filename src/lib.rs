// Re-export modules
pub mod bot;
pub mod categories;
pub mod config;
pub mod fetchers;
pub mod lookup;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use bot::{Bot, Inbound, Reply, User};
pub use categories::CategoryPage;
pub use config::BotConfig;
pub use lookup::Lookup;
pub use parsers::extract_limited_items;
pub use results::LimitedItem;
