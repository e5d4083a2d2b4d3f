use std::path::PathBuf;

use clap::Parser;

use dist_tag::config::Config;
use dist_tag::manifest::PackageJsonReader;
use dist_tag::publish::determine_tag;
use dist_tag::registry::NpmRegistry;

#[derive(Parser)]
#[command(name = "dist-tag")]
#[command(
    version,
    about = "Print the npm dist-tag the package in package.json should be published under"
)]
struct Cli {
    /// Path to the package manifest [default: ./package.json]
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Registry to look up current dist-tags [default: $npm_config_registry or https://registry.npmjs.org]
    #[arg(long, value_name = "URL")]
    registry: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dist_tag::log::init(cli.verbose, cli.log_json)?;

    let config = Config::from_args(cli.manifest, cli.registry);
    let manifest = PackageJsonReader::new(config.manifest_path);
    let registry = NpmRegistry::new(&config.registry_url)?;

    let tag = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(determine_tag(&manifest, &registry))?;

    println!("{tag}");
    Ok(())
}
