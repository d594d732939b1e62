use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::info;
use texel_format::{
    fixtures::TEST_CASES,
    harness::{run_all, Outcome},
    lookup, s3tc, InitOptions,
};

/// Checks every texel format against known packed and unpacked values
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Only run cases for formats whose name contains this text like "SRGB"
    filter: Option<String>,

    /// The native DXTn library used for S3TC formats.
    /// Defaults to the TEXEL_FORMAT_DXTN_LIBRARY environment variable.
    #[arg(long)]
    dxtn_library: Option<PathBuf>,

    /// Print passed and skipped cases as well as failures
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let options = match cli.dxtn_library {
        Some(path) => InitOptions {
            dxtn_library: Some(path),
        },
        None => InitOptions::from_env(),
    };
    texel_format::initialize_with(options);
    if !s3tc::is_available() {
        info!("S3TC test cases will be skipped");
    }

    let filter = cli.filter.map(|f| f.to_uppercase());
    let cases = TEST_CASES.iter().filter(|case| {
        filter
            .as_deref()
            .map(|f| lookup(case.format).name.contains(f))
            .unwrap_or(true)
    });

    let start = std::time::Instant::now();
    let summary = run_all(cases, |case, outcome| {
        let name = lookup(case.format).name;
        match outcome {
            Outcome::Passed if cli.verbose => println!("PASS {name} {:02x?}", packed(case)),
            Outcome::Skipped if cli.verbose => println!("SKIP {name}"),
            Outcome::Failed(errors) => {
                println!("FAIL {name} {:02x?}", packed(case));
                for error in errors {
                    println!("    {error}");
                }
            }
            _ => (),
        }
    });

    println!(
        "{} passed, {} skipped, {} failed in {:?}",
        summary.passed,
        summary.skipped,
        summary.failed,
        start.elapsed()
    );

    if summary.failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn packed(case: &texel_format::fixtures::FormatTestCase) -> &[u8] {
    &case.packed[..lookup(case.format).bytes_per_block()]
}
