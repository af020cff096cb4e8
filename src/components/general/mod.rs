pub mod modal;

#[allow(unused_imports)]
pub use modal::*;
