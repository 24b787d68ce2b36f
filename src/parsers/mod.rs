pub mod menu;

#[cfg(test)]
mod tests;

pub use menu::{UNKNOWN, extract_limited_items, extract_limited_items_str};
