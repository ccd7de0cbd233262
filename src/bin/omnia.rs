//! Diagnostic driver for the omnia library.
//!
//! `omnia check` replays the reference tables and exits with the number of
//! mismatches; `omnia dist` reports how evenly a generator fills buckets and
//! how fast it runs.

use std::hint::black_box;
use std::process::ExitCode;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info, LevelFilter};
use omnia::integer::{gcd, lcm};
use omnia::random::{Generator, Kiss32, Kiss64, XorShift128Plus};
use omnia::rounding::{round_nearest, sig_digits};
use omnia::special::{acosh, asinh, atanh};
use omnia::stats::basic_stats;

#[derive(Parser)]
#[command(name = "omnia", about = "Self-checks and generator diagnostics")]
struct Cli {
    /// Incremental log verbosity (`-v`, `-vv`, ...); `RUST_LOG` overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Compare GCD/LCM, rounding, and hyperbolic results against known values
    Check {
        /// Print every comparison, not just failures
        #[arg(long)]
        all: bool,
    },
    /// Bucket distribution and throughput of a generator
    Dist {
        #[arg(long, value_enum, default_value_t = Engine::Xorshift)]
        generator: Engine,
        /// Number of draws per phase
        #[arg(long, default_value_t = 10_000_000)]
        samples: usize,
        /// Number of index buckets
        #[arg(long, default_value_t = 101)]
        buckets: usize,
        /// Seed; defaults to the current Unix time
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Engine {
    Xorshift,
    Kiss64,
    Kiss32,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Cmd::Check { all } => {
            let errors = run_checks(all);
            println!("found {errors} error(s)");
            Ok(ExitCode::from(u8::try_from(errors).unwrap_or(u8::MAX)))
        }
        Cmd::Dist {
            generator,
            samples,
            buckets,
            seed,
        } => {
            anyhow::ensure!(buckets > 0, "--buckets must be at least 1");
            let seed = seed.unwrap_or_else(clock_seed);
            info!("running {generator:?} with seed {seed}");
            match generator {
                Engine::Xorshift => {
                    let mut rng = XorShift128Plus::new([seed, seed.rotate_left(32)])
                        .context("seeding xorshift128+")?;
                    report(&mut rng, samples, buckets);
                }
                Engine::Kiss64 => report(&mut Kiss64::with_seed(seed), samples, buckets),
                Engine::Kiss32 => report(&mut Kiss32::with_seed(seed as u32), samples, buckets),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

// ============================================================================
// check
// ============================================================================

fn run_checks(all: bool) -> usize {
    check_gcd(all) + check_lcm(all) + check_rounding(all) + check_hyperbolic(all)
}

fn tally(all: bool, ok: bool, line: String) -> usize {
    if all || !ok {
        println!("{}{line}", if ok { "  " } else { "! " });
    }
    usize::from(!ok)
}

fn check_gcd(all: bool) -> usize {
    const TABLE: [(u64, u64, u64); 6] = [
        (0, 0, 0),
        (1, 4, 1),
        (156, 112, 4),
        (24, 36, 12),
        (28, 35, 7),
        (644, 805, 161),
    ];
    TABLE
        .iter()
        .map(|&(x, y, want)| {
            let got = gcd(x, y);
            tally(all, got == want, format!("gcd({x},{y}) = {got} (should be {want})"))
        })
        .sum()
}

fn check_lcm(all: bool) -> usize {
    const TABLE: [(u64, u64, u64); 7] = [
        (0, 0, 0),
        (1, 4, 4),
        (4, 6, 12),
        (25, 30, 150),
        (72, 90, 360),
        (36, 125, 4500),
        (12, 15, 60),
    ];
    TABLE
        .iter()
        .map(|&(x, y, want)| {
            let got = lcm(x, y);
            tally(
                all,
                got == Some(want),
                format!("lcm({x},{y}) = {got:?} (should be {want})"),
            )
        })
        .sum()
}

fn check_rounding(all: bool) -> usize {
    use std::f64::consts::PI;
    const E4: f64 = 27182.8182845905;
    const C: f64 = 299792.4562;

    let nearest = [
        (PI, 3.0),
        (-PI, -3.0),
        (E4, 27183.0),
        (-E4, -27183.0),
        (6.5, 6.0),
        (-6.5, -6.0),
        (17.5, 18.0),
        (-17.5, -18.0),
    ];
    let significant = [
        (PI, 5, 3.1416),
        (-PI, 8, -3.1415927),
        (E4, 1, 30000.0),
        (-E4, 4, -27180.0),
        (C, 1, 300000.0),
        (C, 2, 300000.0),
        (C, 3, 300000.0),
        (C, 4, 299800.0),
        (C, 5, 299790.0),
        (C, 6, 299792.0),
        (C, 7, 299792.5),
        (C, 8, 299792.46),
        (C, 9, 299792.456),
        (C, 10, 299792.4562),
        (6.5, 2, 6.5),
        (-6.5, 2, -6.5),
        (17.5, 2, 18.0),
        (-17.5, 2, -18.0),
    ];

    let mut errors = 0;
    for (x, want) in nearest {
        let got = round_nearest(x);
        errors += tally(
            all,
            got == want,
            format!("round_nearest({x}) = {got:.8} (should be {want:.8})"),
        );
    }
    for (x, n, want) in significant {
        let got = sig_digits(x, n);
        let ok = (got - want).abs() <= 1e-9 * want.abs().max(1.0);
        errors += tally(
            all,
            ok,
            format!("sig_digits({x},{n}) = {got:.8} (should be {want:.8})"),
        );
    }
    errors
}

fn check_hyperbolic(all: bool) -> usize {
    const TOL: f64 = 1e-9;
    let mut errors = 0;
    for a in [1.0, 1.333_333_333_333_333_3, 1.5_f64] {
        for x in [a, -a] {
            let t = atanh(x.tanh());
            errors += tally(
                all,
                (t - x).abs() < TOL,
                format!("atanh(tanh({x:11.8})) = {t:11.8}"),
            );
            let s = asinh(x.sinh());
            errors += tally(
                all,
                (s - x).abs() < TOL,
                format!("asinh(sinh({x:11.8})) = {s:11.8}"),
            );
            let c = acosh(x.cosh());
            errors += tally(
                all,
                (c - x.abs()).abs() < TOL,
                format!("acosh(cosh({x:11.8})) = {c:11.8}"),
            );
        }
    }
    errors
}

// ============================================================================
// dist
// ============================================================================

fn report<G: Generator>(rng: &mut G, samples: usize, buckets: usize) {
    let (mut smallest, mut largest) = (f64::INFINITY, f64::NEG_INFINITY);
    for _ in 0..samples {
        let r = rng.uniform_real();
        smallest = smallest.min(r);
        largest = largest.max(r);
    }
    println!("    largest = {largest:15.14}");
    println!("   smallest = {smallest:15.14}");
    println!();

    let mut counts = vec![0.0_f64; buckets];
    for _ in 0..samples {
        counts[rng.index(buckets)] += 1.0;
    }
    for (i, c) in counts.iter().enumerate() {
        println!("counts {:3}  = {c:10.0}", i + 1);
    }
    println!("      total = {:10.0}", counts.iter().sum::<f64>());

    if let Some(stats) = basic_stats(&counts) {
        println!("    average = {:10.0}", stats.mean);
        let relative = if stats.mean > 0.0 {
            stats.std_dev / stats.mean * 100.0
        } else {
            0.0
        };
        println!("   std. dev = {:10.0} ({relative:8.4}%)", stats.std_dev);
    }

    let start = Instant::now();
    for _ in 0..samples {
        black_box(rng.next());
    }
    let elapsed = start.elapsed().as_secs_f64();
    debug!("{samples} draws in {elapsed:.3}s");
    if elapsed > 0.0 {
        println!();
        println!("  throughput = {:.0} values/sec", samples as f64 / elapsed);
    }
}
