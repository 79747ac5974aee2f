use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cooley_tukey::Engine;
use log::info;
use std::fs::File;
use std::io::{self, LineWriter};
use std::path::PathBuf;
use std::time::Instant;

mod signal;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum EngineArg {
    Recursive,
    Iterative,
}

impl From<EngineArg> for Engine {
    fn from(engine: EngineArg) -> Self {
        match engine {
            EngineArg::Recursive => Engine::Recursive,
            EngineArg::Iterative => Engine::Iterative,
        }
    }
}

/// Transforms a two-tone test signal and prints its spectrum, one `re,im` pair per line.
#[derive(Debug, Parser)]
#[command(name = "fft-demo", version)]
struct Args {
    /// Signal length, a power of two
    #[arg(long, default_value_t = 16384)]
    size: usize,

    /// Decimal places kept in the generated samples
    #[arg(long, default_value_t = 2)]
    input_precision: i32,

    /// Decimal places printed for each coefficient
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(..=17))]
    output_precision: u8,

    #[arg(long, value_enum, default_value_t = EngineArg::Recursive)]
    engine: EngineArg,

    /// Write the spectrum to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    info!("generating test data where size={}", args.size);
    let mut signal = signal::two_tones(args.size, args.input_precision);

    let fft = cooley_tukey::create_fft::<f64>(args.size, args.engine.into())
        .with_context(|| format!("cannot transform a signal of size {}", args.size))?;
    let now = Instant::now();
    fft.fft_in_place(&mut signal)?;
    info!("{:?} transform took {:?}", args.engine, now.elapsed());

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create `{}`", path.display()))?;
            signal::write_spectrum(LineWriter::new(file), &signal, args.output_precision)?;
            info!("wrote {} coefficients to `{}`", signal.len(), path.display());
        }
        None => signal::write_spectrum(io::stdout().lock(), &signal, args.output_precision)?,
    }
    Ok(())
}
