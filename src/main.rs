//! `ls8` command-line runner.
//!
//! Loads an `.ls8` program into a fresh machine and runs it until `HLT`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use ls8::{disassemble, format_listing, load_file, LoadError, Ram, CPU};

#[derive(Parser, Debug)]
#[command(name = "ls8")]
#[command(about = "Run an LS-8 program", long_about = None)]
struct Cli {
    /// Program file: one binary byte per line, `#` comments
    program: PathBuf,

    /// Log the machine state before every instruction
    #[arg(long, action = ArgAction::SetTrue)]
    trace: bool,

    /// Enable debug logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Stop with an error if the program has not halted after this many instructions
    #[arg(long)]
    max_instructions: Option<u64>,

    /// Print a disassembly listing instead of running the program
    #[arg(long, action = ArgAction::SetTrue)]
    disassemble: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            eprintln!("{:?}", report);
            ExitCode::from(exit_code(&report))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    color_eyre::install()?;

    let level = if cli.trace {
        LevelFilter::Trace
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .wrap_err("failed to initialise logging")?;

    let program = load_file(&cli.program)
        .wrap_err_with(|| format!("failed to load {}", cli.program.display()))?;

    if cli.disassemble {
        print!("{}", format_listing(&disassemble(&program, 0)));
        return Ok(());
    }

    let mut cpu = CPU::new(Ram::new());
    cpu.load_program(&program)?;

    let executed = match cli.max_instructions {
        Some(budget) => cpu.run_for_instructions(budget)?,
        None => cpu.run()?,
    };

    if !cpu.halted() {
        return Err(eyre!(
            "program did not halt within {} instructions (PC {:#04X})",
            executed,
            cpu.pc()
        ));
    }

    info!("executed {} instructions", executed);
    Ok(())
}

/// Missing program files exit with 2; every other failure exits with 1.
fn exit_code(report: &Report) -> u8 {
    match report.downcast_ref::<LoadError>() {
        Some(LoadError::NotFound { .. }) => 2,
        _ => 1,
    }
}
