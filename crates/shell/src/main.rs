//! CLI for generating labeled Gaussian clusters.

mod checks;
mod commands;
mod logger;

use std::path::PathBuf;

use clap::Parser;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The random seed to use. Without one, the generator is seeded from system entropy.
    #[arg(short('s'), long)]
    seed: Option<u64>,

    /// The directory in which to write the output files.
    #[arg(short('o'), long, default_value = ".")]
    out_dir: PathBuf,

    /// Also log debug records.
    #[arg(short('v'), long)]
    verbose: bool,

    /// What to do with a random covariance that is not positive-semi-definite.
    #[arg(short('c'), long, default_value = "warn")]
    check: checks::Check,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    println!("Args: {args:?}");

    if !args.out_dir.exists() {
        std::fs::create_dir_all(&args.out_dir).map_err(|e| e.to_string())?;
    }
    let out_dir = args.out_dir.canonicalize().map_err(|e| e.to_string())?;

    let (_guard, log_path) = logger::configure_logger(&out_dir, "ndclusters", args.verbose)?;
    println!("Log file: {}", log_path.display());
    ftlog::info!("{args:?}");
    ftlog::info!("Output directory: {}", out_dir.display());

    let check = args.check.covariance_check();
    match args.command {
        Commands::Example { name } => commands::example::run(&out_dir, &name, args.seed, check)?,
        Commands::Random {
            name,
            dimension,
            clusters,
            count,
            spread,
            diag_base,
            diag_scale,
            off_base,
            off_scale,
        } => commands::random::run(
            &out_dir,
            &name,
            args.seed,
            check,
            &commands::random::Layout {
                dimension,
                clusters,
                count,
                spread,
                diagonal: (diag_base, diag_scale).into(),
                off_diagonal: (off_base, off_scale).into(),
            },
        )?,
    }

    Ok(())
}
