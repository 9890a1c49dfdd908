//! Command line entry point: plots the convergence of percolation threshold estimates.

use std::{
    path::PathBuf,
    process::ExitCode,
};

use clap::{
    Parser,
    Subcommand,
    ValueEnum,
};
use percolation_stats::{
    load_observations_from_csv,
    prelude::*,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot the running mean and std of the threshold against the number of trials
    Convergence {
        #[command(flatten)]
        common: CommonArgs,

        /// Output png
        #[arg(long, short, default_value = "plots.png")]
        output: PathBuf,

        /// Also write `mean.csv` and `std.csv` into this directory
        #[arg(long)]
        tables: Option<PathBuf>,

        /// Observations a size needs before its statistics are reported
        #[arg(long, default_value_t = 1)]
        min_periods: usize,
    },
    /// Plot the final mean and std of the threshold per lattice size
    Snapshot {
        #[command(flatten)]
        common: CommonArgs,

        /// Output png
        #[arg(long, short, default_value = "snapshot.png")]
        output: PathBuf,

        /// Also write the statistics to this csv file
        #[arg(long)]
        table: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct CommonArgs {
    /// Csv file with `size` and `threshold` columns
    #[arg(long, short, default_value = "out/percolation_thresholds.csv")]
    input: PathBuf,

    /// Standard deviation convention
    #[arg(long, value_enum, default_value_t = Convention::Sample)]
    convention: Convention,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 2000)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 1000)]
    height: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Convention {
    Sample,
    Population,
}

impl From<Convention> for StdConvention {
    fn from(value: Convention) -> Self {
        match value {
            Convention::Sample => StdConvention::Sample,
            Convention::Population => StdConvention::Population,
        }
    }
}

impl CommonArgs {
    fn render_options(&self) -> RenderOptions {
        RenderOptions::builder()
            .width(self.width)
            .height(self.height)
            .build()
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Convergence {
            common,
            output,
            tables,
            min_periods,
        } => {
            let config = Config::new(common.convention.into(), min_periods)?;
            let observations = load_observations_from_csv(&common.input)?;
            let table = convergence_table(&observations, &config)?;
            if let Some(dir) = tables {
                write_aligned_table(dir, &table)?;
            }
            render_convergence(output, &table, &common.render_options())
        }
        Command::Snapshot {
            common,
            output,
            table,
        } => {
            let config = Config::new(common.convention.into(), 1)?;
            let observations = load_observations_from_csv(&common.input)?;
            let stats = snapshot_table(&observations, &config)?;
            if let Some(path) = table {
                write_snapshot(std::fs::File::create(path)?, &stats)?;
            }
            render_snapshot(output, &stats, &common.render_options())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
