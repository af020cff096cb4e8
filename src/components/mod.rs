pub mod general;

#[allow(unused_imports)]
pub use general::*;
