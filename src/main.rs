//! hull3d: generate a point set, compute its convex hull, report it.
//!
//! ```text
//! hull3d <pointCount> [generator] [--parallel] [--dedup] [--obj PATH]
//! ```
//!
//! After the first hull is reported, single-key commands are read from
//! stdin one per line (`i` random, `j` pyramid, `k` cross, `m` diamond,
//! `n` spring, `p` sphere of spheres, `s` vertical lines, `t` heart,
//! `w` droplet, `h` house, `q` quit). Each regeneration recomputes the hull.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use hull3d::export::save_obj;
use hull3d::operations::query::BoundingBox;
use hull3d::{
    Command, Flow, Generator, GeneratorParams, HullError, HullParams, Result, Session,
};
use tracing::{debug, info, warn};

const USAGE: &str =
    "usage: hull3d <nbPoints> [generator] [--parallel] [--dedup] [--obj PATH]";

struct Args {
    count: usize,
    generator: Generator,
    hull_params: HullParams,
    obj: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let count = args
        .next()
        .ok_or_else(|| HullError::InvalidInput("missing point count".into()))?;
    let count = count
        .parse::<usize>()
        .map_err(|e| HullError::InvalidInput(format!("point count {count:?}: {e}")))?;

    let mut parsed = Args {
        count,
        generator: Generator::Droplet,
        hull_params: HullParams::default(),
        obj: None,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--parallel" => parsed.hull_params = parsed.hull_params.with_parallel(true),
            "--dedup" => parsed.hull_params = parsed.hull_params.with_dedup(true),
            "--obj" => {
                let path = args
                    .next()
                    .ok_or_else(|| HullError::InvalidInput("--obj needs a path".into()))?;
                parsed.obj = Some(PathBuf::from(path));
            }
            name => parsed.generator = name.parse()?,
        }
    }
    Ok(parsed)
}

fn report(session: &Session) {
    let bounds = BoundingBox::of(session.points());
    println!(
        "{}: {} points, {} faces ({} distinct)",
        session.generator(),
        session.points().len(),
        session.hull().len(),
        session.hull().index_set().len(),
    );
    if let Some(b) = bounds {
        debug!(min = ?b.min, max = ?b.max, "Point set bounds");
    }
}

fn run(args: Args) -> Result<()> {
    info!(n = args.count, generator = %args.generator, "Starting");
    let mut session = Session::new(
        args.generator,
        GeneratorParams::with_count(args.count),
        args.hull_params,
    )?;
    for p in session.points() {
        debug!(x = p.x, y = p.y, z = p.z, "point");
    }
    report(&session);

    if let Some(path) = &args.obj {
        save_obj(session.points(), session.hull(), path)?;
        info!(path = %path.display(), "Wrote OBJ");
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(key) = line.trim().chars().next() else {
            continue;
        };
        let command = match Command::from_key(key) {
            Ok(command) => command,
            Err(e) => {
                warn!("{e}");
                continue;
            }
        };
        if session.apply(command)? == Flow::Quit {
            break;
        }
        report(&session);
    }
    Ok(())
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for hull3d.
    // Override with RUST_LOG env var (e.g. RUST_LOG=hull3d=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hull3d=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
