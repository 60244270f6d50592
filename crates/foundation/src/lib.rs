pub mod color;
pub mod diag;
pub mod geo;
pub mod http;
pub mod nav;

// Foundation crate: small, well-tested primitives only.
pub use color::*;
pub use diag::*;
pub use geo::*;
pub use http::*;
pub use nav::*;
