//! drive: replay a GPS trace against a route and print turn-by-turn progress.
//!
//! By default the demo uses a short synthetic route through downtown Mobile,
//! Alabama and an embedded ten-fix trace that wanders off Water St once.
//! Point `--route-json` and `--trace-csv` at real data to replay something
//! else; `--dump-route` writes the built-in route in the JSON shape
//! `--route-json` accepts.
//!
//! Logging is controlled through `RUST_LOG` (default `info`); set
//! `RUST_LOG=nav_progress=trace` to see how each fix is matched to a step.

mod route;

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nav_core::Position;
use nav_polyline::Precision;
use nav_progress::{DEFAULT_OFF_ROUTE_THRESHOLD_KM, Route, RouteProgressTracker, TrackerConfig};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "drive", about = "Replay position fixes against a route")]
struct Args {
    /// Distance from the route, in kilometers, beyond which a fix is off-route.
    #[arg(long, default_value_t = DEFAULT_OFF_ROUTE_THRESHOLD_KM)]
    off_route_threshold_km: f64,

    /// Route to follow, as JSON.  Defaults to the built-in demo route.
    #[arg(long)]
    route_json: Option<PathBuf>,

    /// Fixes to replay, as CSV with `seq,lon,lat` columns.
    #[arg(long)]
    trace_csv: Option<PathBuf>,

    /// Polyline precision of the built-in route.
    #[arg(long, default_value_t = 6)]
    precision: u32,

    /// Write the route being followed to this path as JSON and continue.
    #[arg(long)]
    dump_route: Option<PathBuf>,

    /// Print one JSON progress snapshot per fix instead of a table.
    #[arg(long)]
    json: bool,
}

// ── Fix trace ─────────────────────────────────────────────────────────────────

// North on Royal St, east on Government St, then a detour two blocks east of
// Water St (seq 7) before rejoining and arriving.
const TRACE_CSV: &str = "\
seq,lon,lat\n\
0,-88.04300,30.69000\n\
1,-88.04302,30.69120\n\
2,-88.04298,30.69310\n\
3,-88.04301,30.69480\n\
4,-88.04180,30.69502\n\
5,-88.03950,30.69498\n\
6,-88.03801,30.69400\n\
7,-88.03520,30.69300\n\
8,-88.03799,30.69230\n\
9,-88.03800,30.69200\n\
";

#[derive(Debug, Deserialize)]
struct FixRecord {
    seq: u32,
    lon: f64,
    lat: f64,
}

fn load_fixes<R: Read>(reader: R) -> Result<Vec<FixRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut fixes = Vec::new();
    for (row, record) in csv_reader.deserialize::<FixRecord>().enumerate() {
        let fix = record.with_context(|| format!("trace row {}", row + 1))?;
        let position = Position::from_lon_lat(fix.lon, fix.lat);
        anyhow::ensure!(position.is_valid(), "trace row {}: {position} is not a valid fix", row + 1);
        fixes.push(fix);
    }
    Ok(fixes)
}

fn load_route(args: &Args) -> Result<Route> {
    let route: Route = match &args.route_json {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing route {}", path.display()))?
        }
        None => {
            let precision = Precision::new(args.precision)?;
            route::build_route(precision)?
        }
    };
    route.validate().context("route failed validation")?;
    Ok(route)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // 1. Route and tracker.
    let route = load_route(&args)?;
    info!(
        legs = route.legs.len(),
        steps = route.step_count(),
        distance_m = route.distance,
        precision = %route.precision,
        "route loaded"
    );

    if let Some(path) = &args.dump_route {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &route)?;
        info!(path = %path.display(), "route written");
    }

    let config = TrackerConfig {
        off_route_threshold_km: args.off_route_threshold_km,
        ..TrackerConfig::default()
    };
    let tracker = RouteProgressTracker::new(config)?;

    // 2. Fixes.
    let fixes = match &args.trace_csv {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            load_fixes(BufReader::new(file))?
        }
        None => load_fixes(Cursor::new(TRACE_CSV))?,
    };
    info!(fixes = fixes.len(), "trace loaded");

    // 3. Replay.
    if !args.json {
        println!(
            "{:>4} {:<14} {:<16} {:>10} {:>10} {:>10} {:>5}",
            "seq", "step", "road", "off_m", "next_m", "end_m", "off"
        );
        println!("{}", "-".repeat(77));
    }

    let mut off_route_fixes = 0usize;
    for fix in &fixes {
        let position = Position::from_lon_lat(fix.lon, fix.lat);
        let progress = tracker
            .progress(position, &route)
            .with_context(|| format!("fix {}", fix.seq))?;

        if progress.off_route {
            off_route_fixes += 1;
            warn!(
                seq = fix.seq,
                distance_m = progress.distance_from_route * 1_000.0,
                "off route, a new route should be requested"
            );
        }

        if args.json {
            println!("{}", serde_json::to_string(&progress)?);
            continue;
        }

        let road = &route.step(progress.step)?.name;
        let next = progress
            .distance_to_next_step
            .map(|km| format!("{:.1}", km * 1_000.0))
            .unwrap_or_else(|| "-".to_owned());
        println!(
            "{:>4} {:<14} {:<16} {:>10.1} {:>10} {:>10.1} {:>5}",
            fix.seq,
            progress.step.to_string(),
            if road.is_empty() { "(arrive)" } else { road.as_str() },
            progress.distance_to_step * 1_000.0,
            next,
            progress.distance_to_end_of_route * 1_000.0,
            if progress.off_route { "yes" } else { "no" },
        );
    }

    info!(fixes = fixes.len(), off_route = off_route_fixes, "replay complete");
    Ok(())
}
