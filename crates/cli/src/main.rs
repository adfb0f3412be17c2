//! RV64 emulator CLI.
//!
//! This binary runs a program image on the emulator core. It performs:
//! 1. **Setup:** Builds the configuration from defaults, an optional JSON file and flags.
//! 2. **Loading:** Reads a flat binary (or ELF) image into DRAM.
//! 3. **Execution:** Steps the hart, dumping the register file after every step,
//!    until the program counter reaches zero, an instruction is unrecognized,
//!    or a fault occurs.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rvemu_core::config::Config;
use rvemu_core::core::Cpu;
use rvemu_core::core::cpu::execution::ExitReason;
use rvemu_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "rvemu",
    author,
    version,
    about = "RV64 instruction-set emulator",
    long_about = "Run a flat RV64 binary image loaded at the DRAM base.\n\nThe register file is printed after every step. Logging is controlled by RUST_LOG (default: warn).\n\nExamples:\n  rvemu program.bin\n  rvemu --trace --max-steps 100 program.bin\n  rvemu --config run.json program.bin"
)]
struct Cli {
    /// Program image to execute (flat binary or ELF).
    image: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every executed instruction.
    #[arg(long)]
    trace: bool,

    /// Do not print the register file after each step.
    #[arg(short, long)]
    quiet: bool,

    /// Stop after this many steps.
    #[arg(long)]
    max_steps: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let mut config = match cli.config.as_deref().map(Config::from_file).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if cli.trace {
        config.general.trace_instructions = true;
    }
    if cli.quiet {
        config.general.dump_registers = false;
    }
    if cli.max_steps.is_some() {
        config.general.max_steps = cli.max_steps;
    }

    let mut cpu = Cpu::with_config(&config);
    if let Err(e) = loader::load_file(&mut cpu, &cli.image) {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    info!(image = %cli.image.display(), "starting run");

    let dump = config.general.dump_registers;
    let outcome = cpu.run(config.general.max_steps, |cpu| {
        if dump {
            print!("{}", cpu.regs);
            println!();
        }
    });

    let code = match outcome {
        Ok(ExitReason::Halted) => {
            info!("program counter reached zero");
            ExitCode::SUCCESS
        }
        Ok(ExitReason::StepLimit) => {
            info!(steps = cpu.stats.steps, "step limit reached");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_unrecognized_instruction() => {
            eprintln!("{e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            cpu.dump_state();
            ExitCode::FAILURE
        }
    };

    if !cli.quiet {
        print!("{}", cpu.stats);
    }
    code
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `warn`, raised to
/// `trace` for the core crate when instruction tracing is requested.
fn init_tracing(trace: bool) {
    let default = if trace { "warn,rvemu_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
