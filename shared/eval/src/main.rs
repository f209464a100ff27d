use anyhow::Result;
use chisq_core::Lcg32;
use chisq_eval::{write_report, EvalConfig, GoodnessOfFit};
use clap::Parser;
use std::io::{self, Write};
use tracing::{info, Level};

#[derive(Parser, Debug, Clone)]
#[command(about = "Chi-square uniformity test of a 32-bit LCG")]
struct Args {
    /// Log evaluation details to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    let config = EvalConfig::default();
    let mut rng = Lcg32::new(config.seed);
    let fit = GoodnessOfFit::run(&mut rng, &config);
    info!(verdict = %fit.verdict, "finished uniformity test");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &mut io::stderr(), &fit)?;
    out.flush()?;
    Ok(())
}
