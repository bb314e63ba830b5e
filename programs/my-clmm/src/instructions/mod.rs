pub mod admin;
pub use admin::*;

pub mod create_pool;
pub use create_pool::*;

pub mod initialize;
pub use initialize::*;
