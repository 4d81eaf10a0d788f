//! Worked examples for the SE(2) transform algebra.
//!
//! Prints three frame-change examples, each next to its expected value,
//! and exits non-zero if any of them misses.
//!
//! # Usage
//!
//! ```bash
//! se2_demo
//! se2_demo --config tolerance.toml --verbose
//! ```

use std::f64::consts::SQRT_2;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gati::core::math::{deg_to_rad, rotate};
use gati::{ToleranceConfig, Transform2D};

/// SE(2) transform worked examples
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tolerance configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let tolerance = match &args.config {
        Some(path) => match ToleranceConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => ToleranceConfig::default(),
    };

    let results = [
        rotation_example(&tolerance),
        frame_change_example(&tolerance),
        rotated_frame_change_example(&tolerance),
    ];
    let failures = results.iter().filter(|passed| !**passed).count();

    if failures == 0 {
        log::info!("All {} examples match", results.len());
        ExitCode::SUCCESS
    } else {
        log::error!("{} of {} examples failed", failures, results.len());
        ExitCode::FAILURE
    }
}

/// Rotating (1, 0) by 45° keeps unit length: (√2/2, √2/2).
fn rotation_example(tolerance: &ToleranceConfig) -> bool {
    let (x, y) = rotate(1.0, 0.0, deg_to_rad(45.0));
    let (ex, ey) = (SQRT_2 / 2.0, SQRT_2 / 2.0);
    let passed = (x - ex).abs() <= tolerance.position_epsilon
        && (y - ey).abs() <= tolerance.position_epsilon;

    println!("rotate(1, 0, 45°)");
    println!("  result:   ({:.6}, {:.6})", x, y);
    println!("  expected: ({:.6}, {:.6}) {}", ex, ey, verdict(passed));
    passed
}

/// Goal (5, 5) seen from an unrotated robot at (2, 2).
fn frame_change_example(tolerance: &ToleranceConfig) -> bool {
    let goal = Transform2D::new(5.0, 5.0, 0.0);
    let robot = Transform2D::new(2.0, 2.0, 0.0);
    report(
        "[2, 2, 0]⁻¹ ⊕ [5, 5, 0]",
        robot.inverse().compose(&goal),
        Transform2D::new(3.0, 3.0, 0.0),
        tolerance,
    )
}

/// Goal (5, 5) seen from a robot at (2, 2) facing 45°: dead ahead at 3√2.
fn rotated_frame_change_example(tolerance: &ToleranceConfig) -> bool {
    let goal = Transform2D::new(5.0, 5.0, 0.0);
    let robot = Transform2D::new(2.0, 2.0, deg_to_rad(45.0));
    report(
        "[2, 2, 45°]⁻¹ ⊕ [5, 5, 0]",
        robot.inverse().compose(&goal),
        Transform2D::new(3.0 * SQRT_2, 0.0, deg_to_rad(-45.0)),
        tolerance,
    )
}

fn report(
    label: &str,
    result: Transform2D,
    expected: Transform2D,
    tolerance: &ToleranceConfig,
) -> bool {
    let passed = result.approx_eq(&expected, tolerance);
    log::debug!("{}: raw result {:?}", label, result);

    println!("{}", label);
    println!("  result:   {}", result);
    println!("  expected: {} {}", expected, verdict(passed));
    passed
}

fn verdict(passed: bool) -> &'static str {
    if passed { "ok" } else { "MISMATCH" }
}
