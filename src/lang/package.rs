//! Packages: the root of every rendered document.

use super::config::Config;
use super::doc::Doc;
use super::example::{examples_for, Example};
use super::func::Func;
use super::source::{ExampleSource, PackageSource, ValueSource};
use super::symbol::SymbolTable;
use super::text::{dir_name, extract_summary};
use super::typ::Type;
use super::value::Value;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Package {
    cfg: Config,
    src: Arc<PackageSource>,
    examples: Arc<Vec<ExampleSource>>,
}

impl Package {
    /// Wrap a package description. The symbol table is built here, before
    /// any of the package's doc comments are parsed.
    pub fn new(cfg: Config, src: PackageSource) -> Self {
        let cfg = cfg
            .with_symbols(SymbolTable::build(&src))
            .with_imports(src.imports.clone());
        let examples = Arc::new(src.examples.clone());
        Self {
            cfg,
            src: Arc::new(src),
            examples,
        }
    }

    pub fn level(&self) -> usize {
        self.cfg.level
    }

    pub fn dir(&self) -> &str {
        &self.src.dir
    }

    /// Name of the package directory, used to title `main` packages.
    pub fn dirname(&self) -> &str {
        dir_name(&self.src.dir)
    }

    pub fn name(&self) -> &str {
        &self.src.name
    }

    pub fn import_path(&self) -> &str {
        &self.src.import_path
    }

    /// Import statement for the package.
    pub fn import(&self) -> String {
        format!("import \"{}\"", self.src.import_path)
    }

    pub fn summary(&self) -> String {
        extract_summary(&self.src.doc)
    }

    pub fn doc(&self) -> Doc {
        Doc::new(&self.cfg.inc(1), &self.src.doc)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.cfg.symbols
    }

    pub fn consts(&self) -> Vec<Value> {
        self.values(&self.src.consts)
    }

    pub fn vars(&self) -> Vec<Value> {
        self.values(&self.src.vars)
    }

    pub fn funcs(&self) -> Vec<Func> {
        self.src
            .funcs
            .iter()
            .map(|f| Func::new(self.cfg.inc(1), f.clone(), Arc::clone(&self.examples)))
            .collect()
    }

    pub fn types(&self) -> Vec<Type> {
        self.src
            .types
            .iter()
            .map(|t| Type::new(self.cfg.inc(1), t.clone(), Arc::clone(&self.examples)))
            .collect()
    }

    /// Package-level examples: `Example` and `Example_suffix`.
    pub fn examples(&self) -> Vec<Example> {
        examples_for(&self.cfg, "", &self.examples, |_| false)
    }

    fn values(&self, values: &[ValueSource]) -> Vec<Value> {
        values
            .iter()
            .map(|v| Value::new(self.cfg.inc(1), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::block::BlockKind;
    use crate::lang::source::TypeSource;
    use crate::lang::span::SpanKind;

    fn package() -> Package {
        let src = PackageSource {
            name: "main".into(),
            import_path: "example.com/tools/cmd/fetch".into(),
            dir: "/src/tools/cmd/fetch".into(),
            doc: "Fetch downloads things. See [Client].".into(),
            types: vec![TypeSource {
                name: "Client".into(),
                ..Default::default()
            }],
            examples: vec![
                ExampleSource {
                    name: "".into(),
                    ..Default::default()
                },
                ExampleSource {
                    name: "_verbose".into(),
                    ..Default::default()
                },
                ExampleSource {
                    name: "Client".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        Package::new(Config::new("/src/tools/cmd/fetch", "/src/tools"), src)
    }

    #[test]
    fn identity() {
        let pkg = package();
        assert_eq!(pkg.dirname(), "fetch");
        assert_eq!(pkg.import(), "import \"example.com/tools/cmd/fetch\"");
        assert_eq!(pkg.summary(), "Fetch downloads things.");
    }

    #[test]
    fn doc_links_resolve_against_package_symbols() {
        let doc = package().doc();
        let block = &doc.blocks()[0];

        assert_eq!(block.kind(), BlockKind::Paragraph);
        assert_eq!(block.spans()[1].kind(), SpanKind::LocalLink);
        assert_eq!(block.spans()[1].url(), "Client");
        assert_eq!(doc.level(), 2);
    }

    #[test]
    fn package_examples_exclude_symbol_examples() {
        let names: Vec<String> = package().examples().iter().map(Example::name).collect();
        assert_eq!(names, vec!["", "Verbose"]);
    }
}
