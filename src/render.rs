//! Template-driven rendering of documentation entities.
//!
//! Templates form a small named library (`file`, `package`, `type`, `func`,
//! `value`, `index`, `example`, `doc`, `list`, `import`) evaluated with
//! minijinja. Every [`Format`](crate::format::Format) primitive is exposed to
//! the templates as a function bound to the active dialect, next to a few
//! structural helpers (see [`helpers`]).

pub mod context;
pub mod helpers;
pub mod renderer;
pub mod templates;

pub use context::{
    ExampleContext, FileContext, FuncContext, PackageContext, TypeContext, ValueContext,
};
pub use renderer::{Renderer, RendererBuilder};

use crate::lang::LangError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid template name \"{0}\"")]
    InvalidTemplateName(String),

    #[error("unable to read template \"{name}\" from {path}: {source}")]
    TemplateFile {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Source(#[from] LangError),
}
