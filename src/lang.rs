//! Documentation model: doc comment parsing and the entity views handed to
//! the renderer.
//!
//! Raw package descriptions ([`source`]) are wrapped in entity types
//! ([`Package`], [`Type`], [`Func`], [`Value`], [`Example`]). Every entity
//! parses its doc comment on demand into a [`Doc`] of [`Block`]s, resolving
//! doc links against the package's [`SymbolTable`].

pub mod block;
pub mod config;
pub mod doc;
pub mod error;
pub mod example;
pub mod file;
pub mod func;
pub mod list;
pub mod location;
pub mod package;
pub mod parser;
pub mod source;
pub mod span;
pub mod symbol;
pub mod text;
pub mod typ;
pub mod value;

pub use block::{Block, BlockKind};
pub use config::Config;
pub use doc::Doc;
pub use error::LangError;
pub use example::Example;
pub use file::File;
pub use func::Func;
pub use list::{Item, ItemKind, List};
pub use location::{Location, Position, Repo};
pub use package::Package;
pub use source::{ExampleSource, FuncSource, PackageSource, SourceSpan, TypeSource, ValueSource};
pub use span::{Span, SpanKind};
pub use symbol::{Symbol, SymbolKind, SymbolTable};
pub use typ::Type;
pub use value::Value;

fn location_of(cfg: &Config, span: &SourceSpan) -> Location {
    Location::new(
        span.start,
        span.end,
        span.filepath.clone(),
        cfg.work_dir().to_string_lossy(),
        cfg.repo.clone(),
    )
}
