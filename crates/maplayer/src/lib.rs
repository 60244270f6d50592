pub mod click;
pub mod render;
pub mod surface;
pub mod symbology;

pub use click::*;
pub use render::*;
pub use surface::*;
pub use symbology::*;
