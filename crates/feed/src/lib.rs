pub mod client;
pub mod point;

pub use client::*;
pub use point::*;
