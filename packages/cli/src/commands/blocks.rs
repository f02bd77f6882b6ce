use anyhow::Result;
use clap::Args;
use colored::Colorize;
use storefront_blocks::BlockRegistry;
use storefront_mini_cart::BLOCK_NAME as MINI_CART;

#[derive(Debug, Args)]
pub struct BlocksArgs {
    /// Print names as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Every block `decorate` knows, sorted
pub fn block_names(registry: &BlockRegistry) -> Vec<&'static str> {
    let mut names = registry.names();
    names.push(MINI_CART);
    names.sort_unstable();
    names
}

pub fn blocks(args: BlocksArgs) -> Result<()> {
    let names = block_names(&BlockRegistry::with_defaults());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    println!("{}", "Registered blocks:".bright_blue().bold());
    for name in names {
        let kind = if name == MINI_CART { "async" } else { "sync" };
        println!("  {} {} {}", "•".green(), name, format!("({})", kind).dimmed());
    }

    Ok(())
}
