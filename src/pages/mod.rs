pub mod home_page;

#[allow(unused_imports)]
pub use home_page::*;
