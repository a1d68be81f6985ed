// ABOUTME: CLI for running the Pod URL filter over HTML files or stdin.
// ABOUTME: Layers global settings from a TOML file and environment under per-run flags.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use podfilter::{resolve, ConfigOverride, EffectiveConfig, GlobalSettings, PodFilter};

/// Rewrite Pod video URLs in HTML into embedded player frames.
#[derive(Parser, Debug)]
#[command(name = "podfilter-cli")]
#[command(about = "Rewrite Pod video URLs into player frames", long_about = None)]
struct Args {
    /// HTML file(s) to filter. Use "-" to read from stdin.
    #[arg(required = true)]
    targets: Vec<String>,

    /// TOML file with global settings (url, size, width, height).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pod server hostname override.
    #[arg(long)]
    url: Option<String>,

    /// Default video quality override.
    #[arg(long)]
    size: Option<u32>,

    /// Player width override in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Player height override in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Player width for interactive videos.
    #[arg(long)]
    interactive_width: Option<u32>,

    /// Player height for interactive videos.
    #[arg(long)]
    interactive_height: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut layers = Figment::from(Serialized::defaults(GlobalSettings::default()));
    if let Some(ref path) = args.config {
        layers = layers.merge(Toml::file(path));
    }
    let global: GlobalSettings = layers
        .merge(Env::prefixed("PODFILTER_"))
        .extract()
        .context("invalid global settings")?;

    let local = ConfigOverride {
        url: args.url,
        size: args.size,
        width: args.width,
        height: args.height,
        interactive_width: args.interactive_width,
        interactive_height: args.interactive_height,
    };

    let config = resolve(&EffectiveConfig::default(), &global, None, Some(&local));
    let filter = PodFilter::new(config)?;

    for target in &args.targets {
        let text = load_text(target)?;
        print!("{}", filter.rewrite(&text));
    }

    Ok(())
}

fn load_text(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    fs::read_to_string(target).with_context(|| format!("failed to read {target}"))
}
