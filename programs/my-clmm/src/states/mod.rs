pub mod config;
pub use config::*;

pub mod pool;
pub use pool::*;

pub mod oracle;
pub use oracle::*;

pub mod operation_account;
pub use operation_account::*;

pub mod tickarray_bitmap_extension;
pub use tickarray_bitmap_extension::*;
