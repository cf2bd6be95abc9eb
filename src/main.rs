use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use identicon::{Config, Digest, Hue, Identicon, Lightness, Rgba};

/// Render deterministic SVG identicons
#[derive(Parser, Debug)]
#[command(name = "identicon", version, about)]
struct Cli {
    /// Identity strings to render
    #[arg(required = true)]
    identities: Vec<String>,

    /// Fixed hue in degrees; negative derives the hue from the identity
    #[arg(long, allow_hyphen_values = true)]
    hues: Option<i32>,

    #[arg(long)]
    color_lightness1: Option<f64>,

    #[arg(long)]
    color_lightness2: Option<f64>,

    #[arg(long)]
    color_saturation: Option<f64>,

    #[arg(long)]
    grayscale_lightness1: Option<f64>,

    #[arg(long)]
    grayscale_lightness2: Option<f64>,

    #[arg(long)]
    grayscale_saturation: Option<f64>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Padding on each side as a fraction of the canvas
    #[arg(long)]
    padding: Option<f64>,

    /// Background as #rgb, #rrggbb or #rrggbbaa
    #[arg(long)]
    background: Option<String>,

    /// 24-character compact config; overrides every other style flag
    #[arg(long)]
    config: Option<String>,

    /// JSON config file used as the base for the style flags
    #[arg(long)]
    config_file: Option<PathBuf>,

    /// Print base64 data URIs instead of SVG markup
    #[arg(long)]
    data_uri: bool,

    /// Write `<digest>.svg` files into this directory instead of stdout
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn override_lightness(base: Lightness, first: Option<f64>, second: Option<f64>) -> Lightness {
    if first.is_none() && second.is_none() {
        return base;
    }
    let (a, b) = match base {
        Lightness::Undefined => (0.0, 0.0),
        Lightness::Fixed(l) => (l, l),
        Lightness::Range(a, b) => (a, b),
    };
    Lightness::Range(first.unwrap_or(a), second.unwrap_or(b))
}

fn build_config(cli: &Cli) -> Result<Config> {
    if let Some(compact) = &cli.config {
        return compact
            .parse::<Config>()
            .with_context(|| format!("invalid --config {:?}", compact));
    }

    let mut config = match &cli.config_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<Config>(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(h) = cli.hues {
        config.hue = Hue::from_degrees(h);
    }
    if let Some(s) = cli.color_saturation {
        config.colored.saturation = s;
    }
    if let Some(s) = cli.grayscale_saturation {
        config.grayscale.saturation = s;
    }
    config.colored.lightness =
        override_lightness(config.colored.lightness, cli.color_lightness1, cli.color_lightness2);
    config.grayscale.lightness = override_lightness(
        config.grayscale.lightness,
        cli.grayscale_lightness1,
        cli.grayscale_lightness2,
    );
    if let Some(w) = cli.width {
        config.width = w;
    }
    if let Some(h) = cli.height {
        config.height = h;
    }
    if let Some(p) = cli.padding {
        config.padding = p;
    }
    if let Some(bg) = &cli.background {
        config.background = Rgba::from_hex(bg)?;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    if let Some(dir) = &cli.out_dir {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
        let rendered = identicon::generate_many(&cli.identities, &config)?;
        for (identity, svg) in cli.identities.iter().zip(rendered) {
            let path = dir.join(format!("{}.svg", Digest::of(identity)));
            fs::write(&path, svg).with_context(|| format!("failed to write {}", path.display()))?;
            println!("{}\t{}", identity, path.display());
        }
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for identity in &cli.identities {
        let icon = Identicon::with_config(identity, &config)?;
        let text = if cli.data_uri {
            icon.to_data_uri()?
        } else {
            icon.svg()?
        };
        writeln!(out, "{}", text)?;
    }
    out.flush()?;
    Ok(())
}
