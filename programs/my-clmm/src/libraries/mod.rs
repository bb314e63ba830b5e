pub mod big_num;
pub use big_num::*;

pub mod fixed_point_64;
pub use fixed_point_64::*;

pub mod full_math;
pub use full_math::*;

pub mod tick_math;
pub use tick_math::*;
