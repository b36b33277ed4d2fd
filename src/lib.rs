//! # docmark
//!
//! Renders source documentation comments as markdown.
//!
//! The crate has three layers:
//!
//! - [`lang`] turns package descriptions into entities whose doc comments
//!   are parsed into paragraphs, headers, code blocks and lists, with doc
//!   links resolved against the package's symbol table.
//! - [`format`] implements the markdown dialects (GitHub, Azure DevOps and
//!   plain markdown) as sets of text primitives.
//! - [`render`] composes those primitives through an overridable template
//!   library into whole documents.
//!
//! [`config`] layers the command-line configuration over embedded defaults.
//!
//! ```ignore
//! let pkg = Package::new(Config::new(dir, work_dir), source);
//! let markdown = Renderer::new()?.render_package(&pkg)?;
//! ```

pub mod config;
pub mod format;
pub mod lang;
pub mod render;

pub use format::{Format, FormatError, FormatRegistry};
pub use lang::{File, Package, PackageSource};
pub use render::{RenderError, Renderer, RendererBuilder};
