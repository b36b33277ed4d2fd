//! Command-line interface for docmark.
//!
//! Reads package descriptions (JSON or YAML) produced by a source extraction
//! step and renders them into a single markdown file.
//!
//! Usage:
//!   docmark `<package.json>...` [--format `<format>`] [--output `<file>`]
//!   docmark `<package.yaml>` --template doc=`<text>` --repository.url `<url>`

use clap::{Arg, ArgAction, ArgMatches, Command};
use docmark::config::{ConfigError, DocmarkConfig, Loader, LOCAL_CONFIG_FILE};
use docmark::format::{FormatError, FormatRegistry};
use docmark::lang::{Config, File, Package, PackageSource};
use docmark::render::{RenderError, RendererBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("unable to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid --{flag} value '{value}', expected NAME=VALUE")]
    Assignment { flag: &'static str, value: String },

    #[error("unable to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn command() -> Command {
    Command::new("docmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render package documentation as markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("inputs")
                .help("Package descriptions to document (.json, .yaml or .yml)")
                .required(true)
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Markdown dialect: github, azure-devops or plain"),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .short('t')
                .value_name("NAME=TEXT")
                .help("Replace a template with inline text")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("template-file")
                .long("template-file")
                .value_name("NAME=PATH")
                .help("Replace a template with the contents of a file")
                .action(ArgAction::Append),
        )
        .arg(Arg::new("header").long("header").help("Text placed before the packages"))
        .arg(
            Arg::new("header-file")
                .long("header-file")
                .help("File whose contents are placed before the packages"),
        )
        .arg(Arg::new("footer").long("footer").help("Text placed after the packages"))
        .arg(
            Arg::new("footer-file")
                .long("footer-file")
                .help("File whose contents are placed after the packages"),
        )
        .arg(
            Arg::new("repository.url")
                .long("repository.url")
                .help("Browsable repository URL used for source links"),
        )
        .arg(
            Arg::new("repository.default-branch")
                .long("repository.default-branch")
                .help("Branch that source links point at"),
        )
        .arg(
            Arg::new("repository.path")
                .long("repository.path")
                .help("Path of the working directory inside the repository"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(clap::value_parser!(PathBuf))
                .help("Configuration file (defaults to .docmark.toml if present)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write the markdown to a file instead of stdout"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for debug output)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = command().get_matches();

    let level = match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&matches) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let registry = FormatRegistry::with_defaults();

    let mut builder = RendererBuilder::new().with_format(registry.get(&config.format)?);
    for (name, text) in &config.template {
        builder = builder.with_template_override(name, text);
    }
    for (name, path) in &config.template_file {
        builder = builder.with_template_override_file(name, path);
    }
    let renderer = builder.build()?;

    let work_dir = std::env::current_dir().map_err(|source| CliError::Read {
        path: PathBuf::from("."),
        source,
    })?;
    let packages = matches
        .get_many::<PathBuf>("inputs")
        .into_iter()
        .flatten()
        .map(|path| load_package(path, &work_dir, &config))
        .collect::<Result<Vec<_>, _>>()?;

    let file = File::new(config.header_text()?, config.footer_text()?, packages);
    let markdown = renderer.render_file(&file)?;

    match matches.get_one::<PathBuf>("output") {
        Some(path) => {
            fs::write(path, markdown).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote documentation");
        }
        None => print!("{}", markdown),
    }
    Ok(())
}

/// Layer the configuration: defaults, then a config file, then flags.
fn load_config(matches: &ArgMatches) -> Result<DocmarkConfig, CliError> {
    let mut loader = match matches.get_one::<PathBuf>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG_FILE),
    };

    let flags = [
        ("format", "format"),
        ("header", "header"),
        ("header-file", "header_file"),
        ("footer", "footer"),
        ("footer-file", "footer_file"),
        ("repository.url", "repository.url"),
        ("repository.default-branch", "repository.default_branch"),
        ("repository.path", "repository.path"),
    ];
    for (flag, key) in flags {
        if let Some(value) = matches.get_one::<String>(flag) {
            loader = loader.set_override(key, value.as_str())?;
        }
    }

    for (flag, table) in [("template", "template"), ("template-file", "template_file")] {
        for assignment in matches.get_many::<String>(flag).into_iter().flatten() {
            let (name, value) = split_assignment(flag, assignment)?;
            loader = loader.set_override(&format!("{}.{}", table, name), value)?;
        }
    }

    Ok(loader.build()?)
}

fn split_assignment<'a>(flag: &'static str, assignment: &'a str) -> Result<(&'a str, &'a str), CliError> {
    match assignment.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => Err(CliError::Assignment {
            flag,
            value: assignment.to_string(),
        }),
    }
}

fn load_package(path: &Path, work_dir: &Path, config: &DocmarkConfig) -> Result<Package, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    let source: PackageSource = if is_yaml {
        serde_yaml::from_str(&text).map_err(|err| parse_error(path, err))?
    } else {
        serde_json::from_str(&text).map_err(|err| parse_error(path, err))?
    };
    tracing::debug!(package = %source.name, path = %path.display(), "loaded package");

    let mut cfg = Config::new(&source.dir, work_dir).with_doc_host(&config.doc_host);
    if let Some(repo) = config.repo() {
        cfg = cfg.with_repo(repo);
    }
    Ok(Package::new(cfg, source))
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> CliError {
    CliError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
