//! Package descriptions supplied by the source extraction step.
//!
//! These are plain data: names, raw doc comment text, declaration text and
//! positions. They are usually read from JSON or YAML and wrapped by the
//! entity types in [`crate::lang`] before rendering.

use super::location::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Span of a declaration in a source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub filepath: String,
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageSource {
    pub name: String,
    pub import_path: String,
    pub dir: String,
    pub doc: String,
    pub consts: Vec<ValueSource>,
    pub vars: Vec<ValueSource>,
    pub funcs: Vec<FuncSource>,
    pub types: Vec<TypeSource>,
    pub examples: Vec<ExampleSource>,
    /// Package name to import path for packages the doc comments may link to.
    pub imports: BTreeMap<String, String>,
}

/// A const or var declaration, possibly declaring a group of names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueSource {
    pub names: Vec<String>,
    pub doc: String,
    pub decl: String,
    pub location: SourceSpan,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuncSource {
    pub name: String,
    /// Receiver type as written, e.g. `*Client`. Empty for plain functions.
    pub recv: String,
    pub doc: String,
    pub decl: String,
    pub location: SourceSpan,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeSource {
    pub name: String,
    pub doc: String,
    pub decl: String,
    pub location: SourceSpan,
    /// Names of struct fields, used to resolve `[Type.Field]` links.
    pub fields: Vec<String>,
    /// Constructors and other package-level funcs associated with the type.
    pub funcs: Vec<FuncSource>,
    pub methods: Vec<FuncSource>,
    pub consts: Vec<ValueSource>,
    pub vars: Vec<ValueSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleSource {
    /// Suffix of the example function, e.g. `Client_Do_retries`.
    pub name: String,
    pub doc: String,
    pub code: String,
    pub output: Option<String>,
}
