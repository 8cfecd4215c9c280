pub mod filters;
pub mod intent;
pub mod models;

pub use intent::{classify, wants_search, ResponseCategory};
pub use models::*;
