use anyhow::Context;
use clap::{Parser, Subcommand};
use lumen_cli::{Mode, bilateral_file, tone_map_file};
use lumen_filter::BilateralParams;
use lumen_tonemap::{LUMINANCE_EPSILON, ToneMapParams};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(version, about = "Bilateral smoothing and HDR tone mapping", long_about = None)]
struct Cli {
    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of worker threads (default: one per core)
    #[arg(short = 'j', long, value_name = "N", global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Edge-preserving smoothing of an 8-bit image
    Bilateral {
        /// Input image
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output image (format from extension)
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Range sigma on the normalized [0, 1] intensity scale
        #[arg(long, value_name = "FLOAT", default_value = "1.0")]
        l2norm: f32,

        /// Window radius in pixels
        #[arg(long, value_name = "N", default_value = "5")]
        radius: u32,

        /// Spatial sigma (default: radius / 2)
        #[arg(long, value_name = "FLOAT")]
        sigma: Option<f32>,

        /// Execution path
        #[arg(long, value_enum, default_value = "parallel")]
        mode: Mode,
    },

    /// Tone map an HDR image to 8 bits
    Hdr {
        /// Input image (Radiance .hdr, OpenEXR, or any 8-bit format)
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output image (format from extension)
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Luminance floor applied before the logarithm
        #[arg(long, value_name = "FLOAT", default_value_t = LUMINANCE_EPSILON)]
        epsilon: f32,

        /// Execution path
        #[arg(long, value_enum, default_value = "parallel")]
        mode: Mode,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Some(num_threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .context("configuring thread pool")?;
    }

    match cli.command {
        Commands::Bilateral {
            input,
            output,
            l2norm,
            radius,
            sigma,
            mode,
        } => {
            let mut params = BilateralParams::new(l2norm, radius);
            if let Some(sigma) = sigma {
                params = params.with_spatial_sigma(sigma);
            }
            bilateral_file(&input, &output, &params, mode)
        }
        Commands::Hdr {
            input,
            output,
            epsilon,
            mode,
        } => {
            let params = ToneMapParams {
                epsilon,
                ..ToneMapParams::default()
            };
            tone_map_file(&input, &output, &params, mode)
        }
    }
}
