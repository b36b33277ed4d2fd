//! The renderer and its builder.

use super::context::{ExampleContext, FileContext, FuncContext, PackageContext, TypeContext};
use super::helpers;
use super::templates::{is_template_name, TEMPLATES};
use super::RenderError;
use crate::format::{Format, GitHubFlavoredMarkdown};
use crate::lang::{Example, File, Func, Package, Type};
use minijinja::{Environment, Value};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Configures a [`Renderer`].
///
/// Defaults to GitHub Flavored Markdown and the built-in templates.
///
/// ```ignore
/// let renderer = RendererBuilder::new()
///     .with_format(registry.get("plain")?)
///     .with_template_override("import", "")
///     .build()?;
/// ```
pub struct RendererBuilder {
    format: Arc<dyn Format>,
    overrides: BTreeMap<String, String>,
    override_files: BTreeMap<String, PathBuf>,
    funcs: Vec<(String, Value)>,
}

impl RendererBuilder {
    pub fn new() -> Self {
        Self {
            format: Arc::new(GitHubFlavoredMarkdown),
            overrides: BTreeMap::new(),
            override_files: BTreeMap::new(),
            funcs: Vec::new(),
        }
    }

    pub fn with_format(mut self, format: Arc<dyn Format>) -> Self {
        self.format = format;
        self
    }

    /// Replace the template `name` with `text`. Takes precedence over a file
    /// override for the same name.
    pub fn with_template_override(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), text.into());
        self
    }

    /// Replace the template `name` with the contents of `path`, read when the
    /// renderer is built.
    pub fn with_template_override_file(
        mut self,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        self.override_files.insert(name.into(), path.into());
        self
    }

    /// Expose `func` to the templates as `name`. Wins over a built-in
    /// function of the same name.
    pub fn with_template_func(mut self, name: impl Into<String>, func: Value) -> Self {
        self.funcs.push((name.into(), func));
        self
    }

    /// Compile the template library. Unknown override names are rejected
    /// before anything is read or compiled.
    pub fn build(self) -> Result<Renderer, RenderError> {
        if let Some(name) = self
            .overrides
            .keys()
            .chain(self.override_files.keys())
            .find(|name| !is_template_name(name))
        {
            return Err(RenderError::InvalidTemplateName(name.clone()));
        }

        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        helpers::register_helpers(&mut env);
        helpers::register_format(&mut env, Arc::clone(&self.format));
        for (name, func) in &self.funcs {
            tracing::debug!(function = %name, "registering template function");
            env.add_global(name.clone(), func.clone());
        }

        for (name, default) in TEMPLATES {
            let source = self.template_source(name, default)?;
            env.add_template_owned(name.to_string(), source)?;
        }

        Ok(Renderer {
            env,
            format: self.format,
        })
    }

    fn template_source(&self, name: &str, default: &str) -> Result<String, RenderError> {
        if let Some(text) = self.overrides.get(name) {
            tracing::debug!(template = name, "using template override");
            return Ok(text.clone());
        }

        match self.override_files.get(name) {
            Some(path) => {
                tracing::debug!(template = name, path = %path.display(), "reading template override");
                fs::read_to_string(path).map_err(|source| RenderError::TemplateFile {
                    name: name.to_string(),
                    path: path.clone(),
                    source,
                })
            }
            None => Ok(default.to_string()),
        }
    }
}

impl Default for RendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders documentation entities to markdown with one dialect and one
/// template library. Rendering is deterministic: the same input always
/// yields the same text.
pub struct Renderer {
    env: Environment<'static>,
    format: Arc<dyn Format>,
}

impl Renderer {
    /// Renderer with the default templates and GitHub Flavored Markdown.
    pub fn new() -> Result<Self, RenderError> {
        RendererBuilder::new().build()
    }

    pub fn builder() -> RendererBuilder {
        RendererBuilder::new()
    }

    pub fn format(&self) -> &dyn Format {
        self.format.as_ref()
    }

    pub fn render_file(&self, file: &File) -> Result<String, RenderError> {
        self.render("file", FileContext::try_from(file)?)
    }

    pub fn render_package(&self, pkg: &Package) -> Result<String, RenderError> {
        self.render("package", PackageContext::try_from(pkg)?)
    }

    pub fn render_type(&self, typ: &Type) -> Result<String, RenderError> {
        self.render("type", TypeContext::try_from(typ)?)
    }

    pub fn render_func(&self, func: &Func) -> Result<String, RenderError> {
        self.render("func", FuncContext::try_from(func)?)
    }

    pub fn render_example(&self, example: &Example) -> Result<String, RenderError> {
        self.render("example", ExampleContext::try_from(example)?)
    }

    fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, RenderError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{AzureDevOpsMarkdown, PlainMarkdown};
    use crate::lang::{Config, ExampleSource, FuncSource, PackageSource, Repo, SourceSpan};
    use crate::lang::Position;
    use std::io::Write;

    fn package(doc: &str) -> Package {
        Package::new(
            Config::new("/src/app", "/src/app"),
            PackageSource {
                name: "app".into(),
                import_path: "example.com/app".into(),
                dir: "/src/app".into(),
                doc: doc.into(),
                ..Default::default()
            },
        )
    }

    fn open() -> Func {
        Func::new(
            Config::new("/src/app", "/src/app").with_level(2),
            FuncSource {
                name: "Open".into(),
                doc: "Open opens a file.".into(),
                decl: "func Open(name string) (*File, error)".into(),
                ..Default::default()
            },
            Arc::default(),
        )
    }

    #[test]
    fn renders_a_func() {
        let out = Renderer::new().unwrap().render_func(&open()).unwrap();
        assert_eq!(
            out,
            "## <a name=\"Open\"></a> func Open\n\n\
             ```go\nfunc Open(name string) (*File, error)\n```\n\n\
             Open opens a file\\.\n\n"
        );
    }

    #[test]
    fn func_header_links_to_source() {
        let func = Func::new(
            Config::new("/src/app", "/src")
                .with_level(2)
                .with_repo(Repo::new("https://github.com/org/app", "main", "/")),
            FuncSource {
                name: "Open".into(),
                decl: "func Open()".into(),
                location: SourceSpan {
                    filepath: "/src/app/open.go".into(),
                    start: Position::new(10, 1),
                    end: Position::new(12, 2),
                },
                ..Default::default()
            },
            Arc::default(),
        );

        let out = Renderer::new().unwrap().render_func(&func).unwrap();
        assert!(out.starts_with(
            "## <a name=\"Open\"></a> func [Open](<https://github.com/org/app/blob/main/app/open.go#L10-L12>)\n\n"
        ));
    }

    #[test]
    fn renders_method_headers_with_escaped_receiver() {
        let func = Func::new(
            Config::new("/p", "/p").with_level(3),
            FuncSource {
                name: "Do".into(),
                recv: "*Client".into(),
                decl: "func (c *Client) Do()".into(),
                ..Default::default()
            },
            Arc::default(),
        );
        let out = Renderer::builder()
            .with_format(Arc::new(PlainMarkdown))
            .build()
            .unwrap()
            .render_func(&func)
            .unwrap();
        assert!(out.starts_with("### func \\(\\*Client\\) Do\n\n\tfunc (c *Client) Do()\n\n"));
    }

    #[test]
    fn content_override_beats_file_override() {
        let renderer = RendererBuilder::new()
            .with_template_override("import", "custom import\n\n")
            .with_template_override_file("import", "/definitely/not/here.tmpl")
            .build()
            .unwrap();

        let out = renderer.render_package(&package("")).unwrap();
        assert!(out.contains("custom import"));
        assert!(!out.contains("example.com/app\""));
    }

    #[test]
    fn file_override_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{{{ codeBlock('sh', 'go get ' ~ import_path) }}}}").unwrap();

        let renderer = RendererBuilder::new()
            .with_template_override_file("import", file.path())
            .build()
            .unwrap();
        let out = renderer.render_package(&package("")).unwrap();
        assert!(out.contains("```sh\ngo get example.com/app\n```"));
    }

    #[test]
    fn missing_override_file_is_an_error() {
        let err = RendererBuilder::new()
            .with_template_override_file("doc", "/definitely/not/here.tmpl")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, RenderError::TemplateFile { ref name, .. } if name == "doc"));
    }

    #[test]
    fn unknown_template_name_is_rejected() {
        let err = RendererBuilder::new()
            .with_template_override("header", "x")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, RenderError::InvalidTemplateName(ref name) if name == "header"));
    }

    #[test]
    fn malformed_override_fails_the_build() {
        let err = RendererBuilder::new()
            .with_template_override("doc", "{% for %}")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, RenderError::Template(_)));
    }

    #[test]
    fn custom_functions_win_over_builtins() {
        let renderer = RendererBuilder::new()
            .with_template_func(
                "escape",
                Value::from_function(|text: String| text.to_uppercase()),
            )
            .build()
            .unwrap();

        let out = renderer.render_package(&package("Quiet words.")).unwrap();
        assert!(out.contains("QUIET WORDS.\n\n"));
    }

    #[test]
    fn custom_functions_reach_overridden_templates() {
        let renderer = RendererBuilder::new()
            .with_template_func("shout", Value::from_function(|text: String| text.to_uppercase()))
            .with_template_override("func", "{{ shout(name) }}")
            .build()
            .unwrap();

        assert_eq!(renderer.render_func(&open()).unwrap(), "OPEN");
    }

    #[test]
    fn primitive_errors_fail_the_render() {
        let renderer = RendererBuilder::new()
            .with_template_override("func", "{{ header(0, name) }}")
            .build()
            .unwrap();
        assert!(matches!(
            renderer.render_func(&open()),
            Err(RenderError::Template(_))
        ));
    }

    #[test]
    fn source_errors_fail_the_render() {
        let func = Func::new(Config::new("/p", "/p"), FuncSource::default(), Arc::default());
        assert!(matches!(
            Renderer::new().unwrap().render_func(&func),
            Err(RenderError::Source(_))
        ));
    }

    fn example() -> Example {
        Example::new(
            Config::new("/p", "/p").with_level(3),
            "",
            ExampleSource {
                name: "Open".into(),
                doc: "Opens a file.".into(),
                code: "f, _ := Open(\"x\")".into(),
                output: Some("ok".into()),
            },
        )
    }

    #[test]
    fn github_examples_are_collapsible() {
        let out = Renderer::new().unwrap().render_example(&example()).unwrap();
        assert_eq!(
            out,
            "<details><summary>Example</summary>\n<p>\n\n\
             Opens a file\\.\n\n\
             ```go\nf, _ := Open(\"x\")\n```\n\n\
             #### Output\n\n\
             ```\nok\n```\n\n\
             </p>\n</details>\n\n"
        );
    }

    #[test]
    fn plain_examples_fall_back_to_headers() {
        let out = RendererBuilder::new()
            .with_format(Arc::new(PlainMarkdown))
            .build()
            .unwrap()
            .render_example(&example())
            .unwrap();
        assert!(out.starts_with("###### Example\n\n"));
        assert!(!out.contains("<details>"));
        assert!(out.ends_with("\tok\n\n"));
    }

    #[test]
    fn list_spacing_follows_the_source() {
        let renderer = Renderer::new().unwrap();
        let tight = renderer
            .render_package(&package("Modes:\n\n  - fast\n  - safe\n"))
            .unwrap();
        let loose = renderer
            .render_package(&package("Modes:\n\n  - fast\n\n  - safe\n"))
            .unwrap();

        assert!(tight.contains("Modes:\n\n- fast\n- safe\n\n"));
        assert!(loose.contains("Modes:\n\n- fast\n\n- safe\n\n"));
    }

    #[test]
    fn bare_list_markers_render_nothing() {
        let out = Renderer::new()
            .unwrap()
            .render_package(&package("Modes:\n\n  -\n  - b\n"))
            .unwrap();
        assert!(out.contains("Modes:\n\n- b\n\n"));
        assert!(!out.contains("- \n"));
    }

    #[test]
    fn ordered_items_hang_under_their_marker() {
        let out = Renderer::new()
            .unwrap()
            .render_package(&package("Steps:\n\n  1. Build the\n     binary.\n  2. Run it.\n"))
            .unwrap();
        assert!(out.contains("1. Build the binary\\.\n2. Run it\\.\n\n"));
    }

    #[test]
    fn devops_uses_the_same_anchors() {
        let out = RendererBuilder::new()
            .with_format(Arc::new(AzureDevOpsMarkdown))
            .build()
            .unwrap()
            .render_func(&open())
            .unwrap();
        assert!(out.starts_with("## <a name=\"Open\"></a> func Open\n\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = Renderer::new().unwrap();
        let pkg = package("Package app does things.\n\nDetails\n\nMore text.");
        assert_eq!(
            renderer.render_package(&pkg).unwrap(),
            renderer.render_package(&pkg).unwrap()
        );
    }
}
