// File: crates/demo/src/main.rs
// Summary: Demo loads the CPU CSV, applies channel selections / platform filter from the
// command line and renders the scatter plot to PNG and SVG.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scatter_core::{theme, Attribute, Channel, ChartConfig, ChartController, RenderOptions};
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: cpu-scatter-demo [data.csv] [--x ATTR] [--y ATTR] [--size ATTR] [--opacity ATTR] \
[--filter PLATFORM] [--seed N] [--theme NAME] [--out DIR] [--no-labels]";

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    selections: Vec<(Channel, Attribute)>,
    filter: Option<String>,
    seed: Option<u64>,
    theme: Option<String>,
    out_dir: Option<PathBuf>,
    no_labels: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let raw = args.input.clone().unwrap_or_else(|| "data/cpus.csv".to_string());
    let (path, used_alt) = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());
    if used_alt {
        println!("  (extension swapped between .csv/.cvs)");
    }

    // Seeded runs give identical jitter, unseeded runs differ like the page does.
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut chart = ChartController::from_csv_path(&path, ChartConfig::default(), &mut rng)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!(
        "Loaded {} records across {} platforms",
        chart.records().len(),
        chart.platforms().len()
    );

    for &(channel, attribute) in &args.selections {
        chart.select(channel, attribute);
        tracing::info!(%channel, %attribute, "channel remapped");
    }
    if let Some(platform) = &args.filter {
        chart
            .filter_platform(platform)
            .with_context(|| format!("known platforms: {}", chart.platforms().platforms().join(", ")))?;
        tracing::info!(%platform, "showing single platform");
    }

    let mut opts = RenderOptions::default();
    if let Some(name) = &args.theme {
        opts.theme = theme::find(name);
    }
    opts.draw_labels = !args.no_labels;

    let out_dir = args.out_dir.clone().unwrap_or_else(|| PathBuf::from("target/out"));
    let out_png = out_name_with(&out_dir, &path, &chart);
    chart.render_to_png(&opts, &out_png)?;
    println!("Wrote {}", out_png.display());
    let out_svg = out_png.with_extension("svg");
    chart.render_to_svg(&opts, &out_svg)?;
    println!("Wrote {}", out_svg.display());

    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(arg) = it.next() {
        let mut value = |flag: &str| it.next().with_context(|| format!("{flag} needs a value\n{USAGE}"));
        match arg.as_str() {
            "--x" => args.selections.push((Channel::X, value("--x")?.parse()?)),
            "--y" => args.selections.push((Channel::Y, value("--y")?.parse()?)),
            "--size" => args.selections.push((Channel::Size, value("--size")?.parse()?)),
            "--opacity" => args.selections.push((Channel::Opacity, value("--opacity")?.parse()?)),
            "--filter" => args.filter = Some(value("--filter")?),
            "--seed" => args.seed = Some(value("--seed")?.parse().context("--seed expects an integer")?),
            "--theme" => args.theme = Some(value("--theme")?),
            "--out" => args.out_dir = Some(PathBuf::from(value("--out")?)),
            "--no-labels" => args.no_labels = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag}\n{USAGE}"),
            _ if args.input.is_none() => args.input = Some(arg),
            _ => anyhow::bail!("unexpected argument {arg}\n{USAGE}"),
        }
    }
    Ok(args)
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/scatter_<stem>_<x>_<y>.png
fn out_name_with(dir: &Path, input: &Path, chart: &ChartController) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let m = chart.mapping();
    let mut name = format!("scatter_{}_{}_{}", stem, m.x, m.y).to_lowercase();
    if let Some(p) = chart.active_filter() {
        name.push('_');
        name.push_str(&p.to_lowercase().replace(' ', "-"));
    }
    dir.join(format!("{name}.png"))
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_selections_in_order() {
        let a = args(&["cpus.csv", "--x", "Price", "--opacity", "year", "--seed", "9"]).unwrap();
        assert_eq!(a.input.as_deref(), Some("cpus.csv"));
        assert_eq!(a.selections, vec![(Channel::X, Attribute::Price), (Channel::Opacity, Attribute::Year)]);
        assert_eq!(a.seed, Some(9));
    }

    #[test]
    fn rejects_unknown_attribute_and_flag() {
        assert!(args(&["--size", "Cores"]).is_err());
        assert!(args(&["--zoom"]).is_err());
        assert!(args(&["--x"]).is_err());
    }
}
