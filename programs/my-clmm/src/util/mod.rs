pub mod system;
pub use system::*;

pub mod token;
pub use token::*;
