//! Data handed to the templates.
//!
//! Each context is a plain serializable snapshot of an entity, with every
//! fallible piece (pretty-printed declarations and example code) computed
//! up front so template evaluation itself only fails on template errors.
//! Field names avoid the names of template functions, which they would
//! otherwise shadow.

use crate::lang::{Doc, Example, File, Func, LangError, Location, Package, Type, Value};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ExampleContext {
    pub level: usize,
    pub name: String,
    pub title: String,
    pub summary: String,
    pub doc: Doc,
    pub code: String,
    pub has_output: bool,
    pub output: String,
}

impl TryFrom<&Example> for ExampleContext {
    type Error = LangError;

    fn try_from(example: &Example) -> Result<Self, Self::Error> {
        Ok(Self {
            level: example.level(),
            name: example.name(),
            title: example.title(),
            summary: example.summary(),
            doc: example.doc(),
            code: example.code()?,
            has_output: example.has_output(),
            output: example.output().to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValueContext {
    pub level: usize,
    pub names: Vec<String>,
    pub anchor_name: String,
    pub summary: String,
    pub doc: Doc,
    pub decl: String,
    pub location: Location,
}

impl TryFrom<&Value> for ValueContext {
    type Error = LangError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(Self {
            level: value.level(),
            names: value.names().to_vec(),
            anchor_name: value.anchor().to_string(),
            summary: value.summary(),
            doc: value.doc(),
            decl: value.decl()?,
            location: value.location(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FuncContext {
    pub level: usize,
    pub name: String,
    pub receiver: String,
    pub title: String,
    pub anchor_name: String,
    pub summary: String,
    pub doc: Doc,
    pub signature: String,
    pub location: Location,
    pub examples: Vec<ExampleContext>,
}

impl TryFrom<&Func> for FuncContext {
    type Error = LangError;

    fn try_from(func: &Func) -> Result<Self, Self::Error> {
        Ok(Self {
            level: func.level(),
            name: func.name().to_string(),
            receiver: func.receiver().to_string(),
            title: func.title(),
            anchor_name: func.anchor(),
            summary: func.summary(),
            doc: func.doc(),
            signature: func.signature()?,
            location: func.location(),
            examples: collect(&func.examples())?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeContext {
    pub level: usize,
    pub name: String,
    pub title: String,
    pub anchor_name: String,
    pub summary: String,
    pub doc: Doc,
    pub decl: String,
    pub location: Location,
    pub consts: Vec<ValueContext>,
    pub vars: Vec<ValueContext>,
    pub examples: Vec<ExampleContext>,
    pub funcs: Vec<FuncContext>,
    pub methods: Vec<FuncContext>,
}

impl TryFrom<&Type> for TypeContext {
    type Error = LangError;

    fn try_from(typ: &Type) -> Result<Self, Self::Error> {
        Ok(Self {
            level: typ.level(),
            name: typ.name().to_string(),
            title: typ.title(),
            anchor_name: typ.anchor().to_string(),
            summary: typ.summary(),
            doc: typ.doc(),
            decl: typ.decl()?,
            location: typ.location(),
            consts: collect(&typ.consts())?,
            vars: collect(&typ.vars())?,
            examples: collect(&typ.examples())?,
            funcs: collect(&typ.funcs())?,
            methods: collect(&typ.methods())?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageContext {
    pub level: usize,
    pub name: String,
    pub dirname: String,
    pub dir: String,
    pub import_path: String,
    pub import_decl: String,
    pub summary: String,
    pub doc: Doc,
    pub examples: Vec<ExampleContext>,
    pub consts: Vec<ValueContext>,
    pub vars: Vec<ValueContext>,
    pub funcs: Vec<FuncContext>,
    pub types: Vec<TypeContext>,
}

impl TryFrom<&Package> for PackageContext {
    type Error = LangError;

    fn try_from(pkg: &Package) -> Result<Self, Self::Error> {
        Ok(Self {
            level: pkg.level(),
            name: pkg.name().to_string(),
            dirname: pkg.dirname().to_string(),
            dir: pkg.dir().to_string(),
            import_path: pkg.import_path().to_string(),
            import_decl: pkg.import(),
            summary: pkg.summary(),
            doc: pkg.doc(),
            examples: collect(&pkg.examples())?,
            consts: collect(&pkg.consts())?,
            vars: collect(&pkg.vars())?,
            funcs: collect(&pkg.funcs())?,
            types: collect(&pkg.types())?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileContext {
    pub header_text: String,
    pub footer_text: String,
    pub packages: Vec<PackageContext>,
}

impl TryFrom<&File> for FileContext {
    type Error = LangError;

    fn try_from(file: &File) -> Result<Self, Self::Error> {
        Ok(Self {
            header_text: file.header.trim_end().to_string(),
            footer_text: file.footer.trim_end().to_string(),
            packages: collect(&file.packages)?,
        })
    }
}

fn collect<'a, E, C>(entities: &'a [E]) -> Result<Vec<C>, LangError>
where
    C: TryFrom<&'a E, Error = LangError>,
{
    entities.iter().map(C::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{Config, ExampleSource, FuncSource, PackageSource, TypeSource};

    fn package(decl: &str) -> Package {
        Package::new(
            Config::new("/src/app", "/src"),
            PackageSource {
                name: "app".into(),
                import_path: "example.com/app".into(),
                dir: "/src/app".into(),
                types: vec![TypeSource {
                    name: "Server".into(),
                    decl: decl.into(),
                    methods: vec![FuncSource {
                        name: "Run".into(),
                        recv: "*Server".into(),
                        decl: "func (s *Server) Run() error".into(),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                examples: vec![ExampleSource {
                    name: "Server_Run".into(),
                    code: "{\n\t_ = srv.Run()\n}".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        )
    }

    #[test]
    fn package_context_nests_entities() {
        let ctx = PackageContext::try_from(&package("type Server struct{}")).unwrap();

        assert_eq!(ctx.import_decl, "import \"example.com/app\"");
        let server = &ctx.types[0];
        assert_eq!(server.anchor_name, "Server");
        assert_eq!(server.level, 2);
        let run = &server.methods[0];
        assert_eq!(run.anchor_name, "Server.Run");
        assert_eq!(run.receiver, "*Server");
        assert_eq!(run.level, 3);
        assert_eq!(run.examples.len(), 1);
        assert_eq!(run.examples[0].level, 4);
    }

    #[test]
    fn declaration_failures_propagate() {
        let err = PackageContext::try_from(&package("  \n")).unwrap_err();
        assert!(matches!(err, LangError::EmptySource { what: "declaration" }));
    }

    #[test]
    fn serializes_with_template_field_names() {
        let ctx = PackageContext::try_from(&package("type Server struct{}")).unwrap();
        let json = serde_json::to_value(&ctx).unwrap();

        assert_eq!(json["types"][0]["methods"][0]["anchor_name"], "Server.Run");
        assert_eq!(json["types"][0]["location"]["filepath"], "");
        assert!(json["doc"]["blocks"].as_array().unwrap().is_empty());
    }
}
