use crate::config::Config;
use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storefront_blocks::{decorate_page, put_block, take_blocks_named, BlockRegistry, PageReport};
use storefront_dom::{parse_fragment, render_nodes, Element, RenderOptions};
use storefront_mini_cart::{
    CartData, JsonPlaceholders, LoadedCartApi, LocalEventBus, MiniCartDeps, MiniCartError, PlaceholderSource,
    Placeholders, StaticCart, StaticMiniCart, BLOCK_NAME as MINI_CART,
};
use tokio::runtime::Runtime;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct DecorateArgs {
    /// File or directory to decorate (defaults to the configured source directory)
    pub path: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Indent the rendered markup
    #[arg(long)]
    pub pretty: bool,
}

/// What happened to the blocks of one page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileReport {
    pub page: PageReport,
    pub mini_carts: usize,
    pub failed_mini_carts: usize,
}

impl FileReport {
    pub fn decorated(&self) -> usize {
        self.page.decorated + self.mini_carts
    }

    pub fn undecorated(&self) -> usize {
        self.page.inert + self.failed_mini_carts
    }
}

/// Decorates whole pages: synchronous blocks through the registry, mini-carts
/// through the async decorator on a private runtime.
pub struct PageDecorator {
    registry: BlockRegistry,
    mini_cart: MiniCartDeps,
    runtime: Runtime,
    options: RenderOptions,
}

impl PageDecorator {
    pub fn new(config: &Config, cwd: &Path, pretty: bool) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        let cart = match &config.cart {
            Some(path) => {
                let path = cwd.join(path);
                runtime
                    .block_on(CartData::load(&path))
                    .with_context(|| format!("Failed to read cart {}", path.display()))?
            }
            None => CartData::default(),
        };

        let placeholders: Arc<dyn PlaceholderSource> = match &config.placeholders {
            Some(path) => Arc::new(JsonPlaceholders::new(cwd.join(path))),
            None => Arc::new(Placeholders::default()),
        };

        let mini_cart = MiniCartDeps {
            placeholders,
            cart: Arc::new(LoadedCartApi(Arc::new(StaticCart::from_items(&cart.items)))),
            renderer: Arc::new(StaticMiniCart::new(cart)),
            events: Arc::new(LocalEventBus::new()),
            root_path: config.root_path.clone(),
        };

        Ok(Self {
            registry: BlockRegistry::with_defaults(),
            mini_cart,
            runtime,
            options: if pretty { RenderOptions::pretty() } else { RenderOptions::default() },
        })
    }

    /// Decorate one page's markup. A leading doctype is kept as written.
    pub fn decorate_source(&self, source: &str) -> Result<(String, FileReport)> {
        let (doctype, markup) = split_doctype(source);
        let mut root = Element::new("body").with_children(parse_fragment(markup)?);

        let mut report = FileReport {
            page: decorate_page(&mut root, &self.registry),
            ..Default::default()
        };

        for (path, block) in take_blocks_named(&mut root, MINI_CART) {
            let original = block.clone();
            let block = match self
                .runtime
                .block_on(storefront_mini_cart::decorate(block, &self.mini_cart))
            {
                Ok(mini_cart) => {
                    report.mini_carts += 1;
                    mini_cart.into_block()
                }
                Err(MiniCartError::AlreadyDecorated) => {
                    report.page.already_decorated += 1;
                    original
                }
                Err(err) => {
                    warn!(error = %err, "Mini cart left undecorated");
                    report.failed_mini_carts += 1;
                    original
                }
            };
            put_block(&mut root, &path, block);
        }

        let body = render_nodes(&root.children, &self.options);
        let output = match doctype {
            Some(doctype) => format!("{}\n{}", doctype, body),
            None => body,
        };
        Ok((output, report))
    }
}

fn split_doctype(source: &str) -> (Option<&str>, &str) {
    let trimmed = source.trim_start();
    let is_doctype = trimmed
        .get(..9)
        .is_some_and(|head| head.eq_ignore_ascii_case("<!doctype"));

    match trimmed.find('>') {
        Some(end) if is_doctype => (Some(&trimmed[..=end]), &trimmed[end + 1..]),
        _ => (None, source),
    }
}

pub fn decorate(args: DecorateArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = match &args.path {
        Some(path) => cwd.join(path),
        None => config.get_src_dir(cwd),
    };

    if !input.exists() {
        bail!("Input path does not exist: {}", input.display());
    }

    println!("{}", "🔨 Decorating storefront pages...".bright_blue().bold());

    let html_files = find_html_files(&input);
    if html_files.is_empty() {
        println!("{}", "⚠️  No .html files found".yellow());
        return Ok(());
    }

    println!("Found {} files", html_files.len());

    let base = if input.is_dir() {
        input.clone()
    } else {
        input.parent().map(Path::to_path_buf).unwrap_or_default()
    };
    let out_dir = match &args.out_dir {
        Some(out) => cwd.join(out),
        None => config.get_out_dir(cwd),
    };
    let decorator = PageDecorator::new(&config, cwd, args.pretty || config.pretty)?;

    let mut success_count = 0;
    let mut error_count = 0;

    for html_file in &html_files {
        let relative_path = html_file.strip_prefix(&base).unwrap_or(html_file);
        match decorate_file(&decorator, html_file, relative_path, &out_dir, args.stdout) {
            Ok((output_path, report)) => {
                success_count += 1;
                println!(
                    "  {} {} → {} {}",
                    "✓".green(),
                    relative_path.display(),
                    output_path,
                    format!("({} decorated, {} undecorated)", report.decorated(), report.undecorated()).dimmed()
                );
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    format!("{:#}", e).red()
                );
            }
        }
    }

    println!();
    if error_count == 0 {
        println!("{} Decorated {} files successfully", "✅".green(), success_count);
    } else {
        println!(
            "{} Decorated {} files, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }

    Ok(())
}

fn find_html_files(input: &Path) -> Vec<PathBuf> {
    WalkDir::new(input)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("html"))
        .collect()
}

fn decorate_file(
    decorator: &PageDecorator,
    file_path: &Path,
    relative_path: &Path,
    out_dir: &Path,
    stdout: bool,
) -> Result<(String, FileReport)> {
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let (output, report) = decorator.decorate_source(&source)?;
    debug!(file = %file_path.display(), ?report, "Decorated file");

    if stdout {
        println!("{}", output);
        return Ok(("stdout".to_string(), report));
    }

    let output_file = out_dir.join(relative_path);
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_file, output)?;

    Ok((output_file.display().to_string(), report))
}
