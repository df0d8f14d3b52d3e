//! jsd-export: JSD document serialization and file export.
//!
//! The top-level entry point for producing a `.jsd` file from an evaluated
//! scene:
//!
//! ```ignore
//! use jsd_export::{export, ExportOptions};
//!
//! export(&scene, Path::new("scene.jsd"), &ExportOptions::new())?;
//! ```
//!
//! Emits the revised JSD schema with top-level `objects`, `cameras` and
//! `world` keys. The legacy objects-only revision is not supported.

pub mod error;
pub mod writer;

pub use error::{ExportError, Result};
pub use writer::{export, serialize, ExportOptions};
