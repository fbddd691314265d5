use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use orbit_map::{build, total_depth, transfers, RelationMap};

/// Count the direct and indirect orbits in an orbit map.
#[derive(Debug, Parser)]
#[command(name = "orbit-map", version)]
struct Cli {
    /// Map file, one `CENTER)ORBITER` per line
    #[arg(env = "ORBIT_MAP_INPUT", default_value = "data.txt")]
    input: PathBuf,

    /// Also count the transfers from the object this one orbits...
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// ...to the object this one orbits
    #[arg(long, requires = "from")]
    to: Option<String>,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("ERROR: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let map = load(&cli.input)?;

    let total = total_depth(&map)
        .with_context(|| format!("invalid data in file '{}'", cli.input.display()))?;
    println!("total orbits: {}", total);

    if let (Some(from), Some(to)) = (&cli.from, &cli.to) {
        let count = transfers(&map, from, to)?;
        println!("orbital transfers: {}", count);
    }

    Ok(())
}

fn load(path: &Path) -> Result<RelationMap> {
    if !path.exists() {
        let full = env::current_dir()
            .context("unable to resolve the current directory")?
            .join(path);
        bail!("file '{}' could not be found", full.display());
    }

    info!(path = %path.display(), "reading orbit map");

    let input = fs::read_to_string(path)
        .with_context(|| format!("unable to read '{}'", path.display()))?;

    build(input.lines()).with_context(|| format!("invalid data in file '{}'", path.display()))
}
