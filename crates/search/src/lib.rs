pub mod controller;
pub mod filters;
pub mod form;

pub use controller::*;
pub use filters::*;
pub use form::*;
