//! The garment catalog: built-in styles and fabrics.

mod fabric;
mod style;

pub use fabric::{CUSTOM_FABRIC_PREFIX, Fabric, FabricImage, fabrics, find_fabric};
pub use style::{Style, find_style, styles, styles_for};
