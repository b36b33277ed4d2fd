//! Symbol table used to resolve in-package doc links.
//!
//! Every linkable declaration of a package is recorded under its qualified
//! name: the bare name for package-level symbols, `Recv.Name` for methods and
//! struct fields. Parents are stored as qualified names rather than pointers
//! and resolved back through the table when computing anchors.

use super::source::{PackageSource, TypeSource, ValueSource};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Type,
    Func,
    Const,
    Var,
    Method,
    Field,
}

/// Identity of a linkable symbol in a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub receiver: String,
    pub name: String,
    pub kind: SymbolKind,
    /// Qualified name of the symbol whose section this one is documented in.
    pub parent: Option<String>,
}

impl Symbol {
    pub fn new(kind: SymbolKind, name: impl Into<String>) -> Self {
        Self {
            receiver: String::new(),
            name: name.into(),
            kind,
            parent: None,
        }
    }

    pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = receiver.into();
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Key under which this symbol is stored in a [`SymbolTable`].
    pub fn qualified_name(&self) -> String {
        qualified_name(&self.receiver, &self.name)
    }

    /// Anchor of this symbol when it has no parent.
    fn own_anchor(&self) -> String {
        match self.kind {
            SymbolKind::Method | SymbolKind::Field => {
                format!("{}.{}", self.receiver.trim_start_matches('*'), self.name)
            }
            _ => self.name.clone(),
        }
    }
}

/// Build the qualified name for a receiver and a symbol name, dropping pointer
/// markers from both.
pub fn qualified_name(receiver: &str, name: &str) -> String {
    let receiver = receiver.trim_start_matches('*');
    let name = name.trim_start_matches('*');
    if receiver.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", receiver, name)
    }
}

/// Qualified name to symbol lookup for one package.
///
/// Built once before any doc comment of the package is parsed and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the symbols of every declaration in the package.
    pub fn build(pkg: &PackageSource) -> Self {
        let mut table = Self::new();

        for group in &pkg.consts {
            table.insert_group(SymbolKind::Const, group);
        }
        for group in &pkg.vars {
            table.insert_group(SymbolKind::Var, group);
        }
        for func in &pkg.funcs {
            table.insert(Symbol::new(SymbolKind::Func, &func.name));
        }
        for typ in &pkg.types {
            table.insert_type(typ);
        }

        table
    }

    /// Add a symbol, replacing any symbol with the same qualified name.
    pub fn insert(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.qualified_name(), symbol);
    }

    fn insert_group(&mut self, kind: SymbolKind, group: &ValueSource) {
        let Some(first) = group.names.first() else {
            return;
        };

        for name in &group.names {
            let symbol = Symbol::new(kind, name);
            // The first name anchors the group; giving it a parent would
            // point it at itself.
            if name == first {
                self.insert(symbol);
            } else {
                self.insert(symbol.with_parent(first.as_str()));
            }
        }
    }

    fn insert_type(&mut self, typ: &TypeSource) {
        self.insert(Symbol::new(SymbolKind::Type, &typ.name));

        for method in &typ.methods {
            self.insert(Symbol::new(SymbolKind::Method, &method.name).with_receiver(&typ.name));
        }
        for field in &typ.fields {
            self.insert(
                Symbol::new(SymbolKind::Field, field)
                    .with_receiver(&typ.name)
                    .with_parent(typ.name.as_str()),
            );
        }

        // Constructors and typed values are still package-level symbols.
        for func in &typ.funcs {
            self.insert(Symbol::new(SymbolKind::Func, &func.name));
        }
        for group in &typ.consts {
            self.insert_group(SymbolKind::Const, group);
        }
        for group in &typ.vars {
            self.insert_group(SymbolKind::Var, group);
        }
    }

    pub fn get(&self, qualified: &str) -> Option<&Symbol> {
        self.symbols.get(qualified)
    }

    /// Look a reference such as `Name`, `Recv.Name` or `*Recv.Name` up.
    pub fn lookup(&self, reference: &str) -> Option<&Symbol> {
        let reference = reference.trim_start_matches('*');
        match reference.split_once('.') {
            Some((recv, name)) => self.get(&qualified_name(recv, name)),
            None => self.get(reference),
        }
    }

    /// Anchor of `symbol`, following parent links through the table.
    ///
    /// A dangling parent or a parent chain that loops back on itself stops at
    /// the last symbol reached.
    pub fn anchor(&self, symbol: &Symbol) -> String {
        let mut current = symbol;
        let mut seen = vec![current.qualified_name()];

        while let Some(parent) = current.parent.as_deref() {
            if seen.iter().any(|s| s == parent) {
                break;
            }
            match self.get(parent) {
                Some(next) => {
                    seen.push(parent.to_string());
                    current = next;
                }
                None => break,
            }
        }

        current.own_anchor()
    }

    /// Anchor for a doc link reference, if it names a symbol of this package.
    pub fn resolve(&self, reference: &str) -> Option<String> {
        self.lookup(reference).map(|symbol| self.anchor(symbol))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.symbols.iter().map(|(k, v)| (k.as_str(), v))
    }
}
