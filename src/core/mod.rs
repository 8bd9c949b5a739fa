pub mod catalog;
pub mod error;
pub mod loader;
pub mod model;
pub mod output;
pub mod registry;
pub mod slug;
