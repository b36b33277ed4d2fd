//! Default template library.
//!
//! Every block-level primitive (headers, code blocks, accordions, list
//! entries) ends with its own line breaks, so templates concatenate them
//! directly and only add `spacer()` after inline content.

pub const FILE: &str = r#"<!-- Code generated by docmark. DO NOT EDIT -->{{ spacer() }}
{%- if header_text %}{{ header_text }}{{ spacer() }}{% endif -%}
{%- for package in packages %}{{ include("package", package) }}{% endfor -%}
{%- if footer_text %}{{ footer_text }}{{ spacer() }}{% endif -%}
Generated by {{ link("docmark", "https://github.com/docmark/docmark") }}
"#;

pub const PACKAGE: &str = r#"
{%- if name == "main" %}{{ header(level, dirname) }}{% else %}{{ header(level, name) }}{% endif -%}
{%- include "import" -%}
{%- if doc.blocks %}{{ include("doc", doc) }}{% endif -%}
{%- for example in examples %}{{ include("example", example) }}{% endfor -%}
{{- header(add(level, 1), "Index") -}}
{%- include "index" -%}
{%- if consts -%}
  {{- header(add(level, 1), "Constants") -}}
  {%- for value in consts %}{{ include("value", value) }}{% endfor -%}
{%- endif -%}
{%- if vars -%}
  {{- header(add(level, 1), "Variables") -}}
  {%- for value in vars %}{{ include("value", value) }}{% endfor -%}
{%- endif -%}
{%- for func in funcs %}{{ include("func", func) }}{% endfor -%}
{%- for entry in types %}{{ include("type", entry) }}{% endfor -%}
"#;

pub const IMPORT: &str = r#"{{- codeBlock("go", import_decl) -}}"#;

pub const INDEX: &str = r#"
{%- macro func_entry(depth, func) -%}
  {{- listEntry(depth, link(escape(func.signature), rawLocalHref(func.anchor_name))) -}}
{%- endmacro -%}
{%- if consts %}{{ listEntry(0, link("Constants", localHref("Constants"))) }}{% endif -%}
{%- if vars %}{{ listEntry(0, link("Variables", localHref("Variables"))) }}{% endif -%}
{%- for func in funcs %}{{ func_entry(0, func) }}{% endfor -%}
{%- for entry in types -%}
  {{- listEntry(0, link(escape(entry.title), rawLocalHref(entry.anchor_name))) -}}
  {%- for func in entry.funcs %}{{ func_entry(1, func) }}{% endfor -%}
  {%- for func in entry.methods %}{{ func_entry(1, func) }}{% endfor -%}
{%- endfor -%}
{%- if consts or vars or funcs or types %}{{ inlineSpacer() }}{% endif -%}
"#;

pub const TYPE: &str = r#"
{{- rawAnchorHeader(level, "type " ~ link(escape(name), codeHref(location)), anchor_name) -}}
{{- include("doc", doc) -}}
{{- codeBlock("go", decl) -}}
{%- for value in consts %}{{ include("value", value) }}{% endfor -%}
{%- for value in vars %}{{ include("value", value) }}{% endfor -%}
{%- for example in examples %}{{ include("example", example) }}{% endfor -%}
{%- for func in funcs %}{{ include("func", func) }}{% endfor -%}
{%- for func in methods %}{{ include("func", func) }}{% endfor -%}
"#;

pub const FUNC: &str = r#"
{%- if receiver -%}
  {{- rawAnchorHeader(level, "func \\(" ~ escape(receiver) ~ "\\) " ~ link(escape(name), codeHref(location)), anchor_name) -}}
{%- else -%}
  {{- rawAnchorHeader(level, "func " ~ link(escape(name), codeHref(location)), anchor_name) -}}
{%- endif -%}
{{- codeBlock("go", signature) -}}
{{- include("doc", doc) -}}
{%- for example in examples %}{{ include("example", example) }}{% endfor -%}
"#;

pub const VALUE: &str = r#"
{%- set target = anchor(anchor_name) -%}
{%- if target %}{{ target }}{{ spacer() }}{% endif -%}
{{- include("doc", doc) -}}
{{- codeBlock("go", decl) -}}
"#;

pub const EXAMPLE: &str = r#"
{{- accordionHeader(title) -}}
{{- include("doc", doc) -}}
{{- codeBlock("go", code) -}}
{%- if has_output -%}
  {{- header(4, "Output") -}}
  {{- codeBlock("", output) -}}
{%- endif -%}
{{- accordionTerminator() -}}
"#;

pub const DOC: &str = r#"
{%- macro inline(spans) -%}
  {%- for span in spans -%}
    {%- if span.kind == "text" %}{{ escape(span.text) }}
    {%- elif span.kind == "link" %}{{ link(escape(span.text), span.url) }}
    {%- elif span.kind == "localLink" %}{{ link(escape(span.text), rawLocalHref(span.url)) }}
    {%- else %}{{ span.text }}{% endif -%}
  {%- endfor -%}
{%- endmacro -%}
{%- for block in blocks -%}
  {%- if block.kind == "paragraph" %}{{ inline(block.spans) }}{{ spacer() }}
  {%- elif block.kind == "header" %}{{ rawHeader(block.level, inline(block.spans)) }}
  {%- elif block.kind == "code" %}{{ codeBlock("", block.text) }}
  {%- elif block.kind == "list" %}{{ include("list", block.list) }}{{ spacer() }}
  {%- endif -%}
{%- endfor -%}
"#;

pub const LIST: &str = r#"
{%- for item in iter(items) -%}
  {%- set marker = (item.entry.number ~ ". ") if item.entry.kind == "ordered" else "- " -%}
  {{- marker ~ hangingIndent(include("doc", item.entry) | trim, marker | length) -}}
  {%- if not item.last -%}
    {%- if blankBetween %}{{ spacer() }}{% else %}{{ inlineSpacer() }}{% endif -%}
  {%- endif -%}
{%- endfor -%}
"#;

/// Template names with their default text.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("file", FILE),
    ("package", PACKAGE),
    ("type", TYPE),
    ("func", FUNC),
    ("value", VALUE),
    ("index", INDEX),
    ("example", EXAMPLE),
    ("doc", DOC),
    ("list", LIST),
    ("import", IMPORT),
];

pub fn is_template_name(name: &str) -> bool {
    TEMPLATES.iter().any(|(known, _)| *known == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_has_the_ten_templates() {
        let names: Vec<&str> = TEMPLATES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["file", "package", "type", "func", "value", "index", "example", "doc", "list", "import"]
        );
    }

    #[test]
    fn unknown_names_are_not_templates() {
        assert!(is_template_name("doc"));
        assert!(!is_template_name("header"));
        assert!(!is_template_name(""));
    }

    #[test]
    fn every_template_parses() {
        let mut env = minijinja::Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(*name, *source).unwrap();
        }
    }
}
