// Command-line interface for nbgist
//
// This binary renders gist-hosted notebook documents into self-contained HTML
// pages wired for interactive execution.
//
// The main role of the nbgist program is to resolve a render target (a gist
// identifier, a page URL carrying a gistID query parameter, or a local file),
// pull the document sources, and hand them to the nbgist-render strategies.
// One execution-widget binder is emitted per page, after every block has been
// rendered, targeting the kernel the last rendered document resolved.
//
// Usage:
//  nbgist <target> [-o <file>]            - Render a gist or local file (default)
//  nbgist render <target> [-o <file>]     - Same as above (explicit)
//  nbgist render                          - Render the configured default gist
//  nbgist --list-formats                  - List supported document formats

use nbgist_cli::{gist::GistClient, query};

use clap::{Arg, ArgAction, Command, ValueHint};
use nbgist_config::{Loader, NbgistConfig};
use nbgist_render::{ExecutionBinder, KernelSelection, Page, PageOptions, StrategyRegistry};
use std::fs;
use std::path::{Path, PathBuf};

fn build_cli() -> Command {
    Command::new("nbgist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render gist-hosted notebooks as executable HTML pages")
        .long_about(
            "nbgist fetches a gist's files, renders recognized documents\n\
            (Jupyter notebooks, Markdown, R Markdown) into a single HTML page,\n\
            and wires the page's code blocks to a remote execution widget.\n\n\
            Targets:\n  \
            - a gist identifier:            nbgist cb6da4c0f285713fb4b5\n  \
            - a URL with a gistID param:    nbgist '?gistID=cb6da4c0f285713fb4b5'\n  \
            - a local document:             nbgist analysis.ipynb\n\n\
            With no target, the configured default gist renders.\n\
            Output goes to stdout by default, or use -o to write a file.",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List supported document formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an nbgist.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render a gist or local document (default command)")
                .long_about(
                    "Render a target into one HTML page.\n\n\
                    Every file in a gist whose extension is recognized renders, in\n\
                    listing order: .ipynb as notebook cells, .md as markdown with\n\
                    executable fenced code blocks, .rmd as R Markdown with front\n\
                    matter. Other files are skipped silently.\n\n\
                    Examples:\n  \
                    nbgist render cb6da4c0f285713fb4b5             # Render a gist (stdout)\n  \
                    nbgist render analysis.ipynb -o page.html      # Render a local notebook\n  \
                    nbgist render --kernel python3 notes.md        # Override the kernel\n  \
                    nbgist cb6da4c0f285713fb4b5                    # 'render' is optional",
                )
                .arg(
                    Arg::new("target")
                        .help("Gist identifier, URL with a gistID parameter, or local file")
                        .required(false)
                        .index(1)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("kernel")
                        .long("kernel")
                        .help("Kernel name override for the execution widget")
                        .long_help(
                            "Kernel name handed to the execution widget, overriding\n\
                            whatever the rendered documents resolved (notebook\n\
                            kernelspec, fence language hint, or the default).",
                        )
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .try_init();

    let args: Vec<String> = std::env::args().collect();

    // Try to parse args. If no subcommand is provided, inject "render"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is not a flag and not a known subcommand is
            // treated as a render target
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "render"
                && args[1] != "help"
            {
                let mut new_args = vec![args[0].clone(), "render".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let target = sub_matches.get_one::<String>("target").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let kernel = sub_matches.get_one::<String>("kernel").map(|s| s.as_str());
            handle_render_command(target, output, kernel, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// A resolved render target.
enum Target {
    LocalFile(PathBuf),
    Gist(String),
}

fn resolve_target(target: Option<&str>, config: &NbgistConfig) -> Target {
    let Some(target) = target else {
        return Target::Gist(config.gist.default_id.clone());
    };

    let path = Path::new(target);
    if path.is_file() {
        return Target::LocalFile(path.to_path_buf());
    }

    // URLs and bare query strings carry the identifier as a parameter.
    if target.contains('?') || target.contains('=') {
        let id = query::gist_id(target).unwrap_or_else(|| config.gist.default_id.clone());
        return Target::Gist(id);
    }

    Target::Gist(target.to_string())
}

/// Handle the render command
fn handle_render_command(
    target: Option<&str>,
    output: Option<&str>,
    kernel_override: Option<&str>,
    config: &NbgistConfig,
) {
    let registry = StrategyRegistry::default();
    let mut page = Page::new();
    // One clear per full document render keeps re-rendering idempotent.
    page.clear();

    let kernel = match resolve_target(target, config) {
        Target::LocalFile(path) => render_local_file(&registry, &mut page, &path),
        Target::Gist(id) => render_gist(&registry, &mut page, &id, config),
    };

    // The binder is constructed only after every block exists on the page.
    let kernel_name = kernel_override.unwrap_or_else(|| kernel.name());
    let binder = ExecutionBinder::new(config.service.binder_options(kernel_name.to_string()));
    let bootstrap = binder.bootstrap_html(&page).unwrap_or_else(|e| {
        eprintln!("Render error: {e}");
        std::process::exit(1);
    });

    let html = page.to_html(&PageOptions {
        math: config.render.math,
        bootstrap: Some(bootstrap),
    });

    match output {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{html}"),
    }
}

/// Render a local document through the same classifier as gist files.
fn render_local_file(registry: &StrategyRegistry, page: &mut Page, path: &Path) -> KernelSelection {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();

    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {e}", path.display());
        std::process::exit(1);
    });

    match registry.render_file(&filename, &source, page) {
        Ok(Some(rendering)) => rendering.kernel,
        Ok(None) => {
            eprintln!("Error: Could not detect a document format from '{filename}'");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Render error in '{filename}': {e}");
            std::process::exit(1);
        }
    }
}

/// Fetch a gist and render every recognized file in listing order.
fn render_gist(
    registry: &StrategyRegistry,
    page: &mut Page,
    id: &str,
    config: &NbgistConfig,
) -> KernelSelection {
    let client = GistClient::new(&config.service.api_url).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let gist = client.fetch_gist(id).unwrap_or_else(|e| {
        eprintln!("Error fetching gist '{id}': {e}");
        std::process::exit(1);
    });

    let mut kernel = KernelSelection::resolve(Some(&config.service.default_kernel), None);

    for (filename, file) in gist.into_files() {
        let source = if file.truncated {
            let Some(raw_url) = file.raw_url.as_deref() else {
                log::warn!("'{filename}' is truncated but has no raw URL; skipping");
                continue;
            };
            client.fetch_raw(raw_url).unwrap_or_else(|e| {
                eprintln!("Error fetching raw content for '{filename}': {e}");
                std::process::exit(1);
            })
        } else {
            match file.content {
                Some(content) => content,
                None => {
                    log::warn!("'{filename}' has no inline content; skipping");
                    continue;
                }
            }
        };

        match registry.render_file(&filename, &source, page) {
            // Last rendered document's selection feeds the single binder.
            Ok(Some(rendering)) => kernel = rendering.kernel,
            Ok(None) => {}
            Err(e) => {
                eprintln!("Render error in '{filename}': {e}");
                std::process::exit(1);
            }
        }
    }

    kernel
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = StrategyRegistry::default();
    println!("Supported document formats:\n");
    for name in registry.list_strategies() {
        if let Ok(strategy) = registry.get(&name) {
            let extensions = strategy
                .file_extensions()
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {name:<12} {extensions:<18} {}", strategy.description());
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> NbgistConfig {
    let loader = Loader::new().with_optional_file("nbgist.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
