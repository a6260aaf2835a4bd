pub mod duration;
pub mod math;
pub mod validate;
