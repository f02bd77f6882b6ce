use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory holding the authored pages
    #[arg(short, long, default_value = "pages")]
    pub src_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

const EXAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <main>
      <div class="hero-banner">
        <div><div><h1>Summer collection</h1><p><a href="/summer">Shop now</a></p></div></div>
      </div>
      <div class="column">
        <div><div>3</div></div>
        <div><div><picture><img src="/media/one.jpg" alt="" /></picture><h3>One</h3><p>First card</p></div></div>
        <div><div><picture><img src="/media/two.jpg" alt="" /></picture><h3>Two</h3><p>Second card</p></div></div>
        <div><div><picture><img src="/media/three.jpg" alt="" /></picture><h3>Three</h3><p>Third card</p></div></div>
      </div>
    </main>
  </body>
</html>
"#;

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing storefront project...".bright_blue().bold());

    let src_dir = cwd.join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    let example_file = src_dir.join("index.html");
    if !example_file.exists() {
        fs::write(&example_file, EXAMPLE_PAGE)?;
        println!("  {} Created index.html", "✓".green());
    }

    let config = Config {
        src_dir: args.src_dir.clone(),
        ..Config::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Author blocks in {}/index.html", args.src_dir);
    println!("  2. Run: storefront decorate");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}
