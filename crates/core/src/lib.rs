//! Shared types for PatternFit.
//!
//! - [`Gender`] and [`Height`]: the body inputs a fitting starts from
//! - [`constraint`]: type-level numeric invariants used by those inputs
//! - [`catalog`]: built-in garment [`Style`]s and [`Fabric`]s

pub mod catalog;
pub mod constraint;

mod gender;
mod height;

pub use catalog::{Fabric, FabricImage, Style};
pub use gender::{Gender, ParseGenderError};
pub use height::Height;
