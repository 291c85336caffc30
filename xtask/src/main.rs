//! Build automation tasks for the christmas-lights project.
//!
//! Run with: `cargo xtask <command>`

mod capture;
mod positions;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::{Command, ExitCode};

const DEMOS: [&str; 2] = ["strip_lights", "tree_lights"];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for christmas-lights", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run host tests and build both demos for the Pico
    Check {
        #[arg(long, default_value = "pico1")]
        board: Board,
    },
    /// Build UF2 firmware file for flashing to Pico
    Uf2 {
        /// Demo name (strip_lights or tree_lights)
        name: String,
        #[arg(long, default_value = "pico1")]
        board: Board,
    },
    /// Find the lit pixel in each photo in a directory (file-name order) and write a capture
    Locate {
        dir: PathBuf,
        /// Pixel index of the first photo
        #[arg(long, default_value_t = 0)]
        first: usize,
        #[arg(short, long, default_value = "target/output.dat")]
        output: PathBuf,
        /// Where annotated copies of the photos go
        #[arg(long, default_value = "target/capture")]
        annotated: PathBuf,
    },
    /// Photograph the tree with the camera, one pixel per Enter press, and write a capture
    #[cfg(feature = "camera")]
    Capture {
        /// Pixel index of the first photo
        #[arg(long, default_value_t = 0)]
        first: usize,
        #[arg(short, long, default_value = "target/output.dat")]
        output: PathBuf,
        /// Where annotated copies of the photos go
        #[arg(long, default_value = "target/capture")]
        annotated: PathBuf,
    },
    /// Fuse four camera captures (front, left, back, right) into data/positions.csv
    Positions {
        first: PathBuf,
        second: PathBuf,
        third: PathBuf,
        fourth: PathBuf,
        #[arg(short, long, default_value = "data/positions.csv")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Board {
    Pico1,
    Pico2,
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Board::Pico1 => write!(f, "pico1"),
            Board::Pico2 => write!(f, "pico2"),
        }
    }
}

impl Board {
    fn target(self) -> &'static str {
        match self {
            Board::Pico1 => "thumbv6m-none-eabi",
            Board::Pico2 => "thumbv8m.main-none-eabihf",
        }
    }

    fn features(self) -> String {
        format!("{self},arm,defmt")
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { board } => check(board),
        Commands::Uf2 { name, board } => build_uf2(&name, board),
        Commands::Locate {
            dir,
            first,
            output,
            annotated,
        } => {
            println!("{}", format!("==> Locating pixels in {}...", dir.display()).cyan());
            report(capture::locate_dir(&dir, first, &output, &annotated), "locate pixels")
        }
        #[cfg(feature = "camera")]
        Commands::Capture {
            first,
            output,
            annotated,
        } => {
            println!("{}", "==> Press Enter once each pixel is lit; Ctrl-D to stop".cyan());
            report(
                capture::capture_from_camera(first, &output, &annotated),
                "capture pixels",
            )
        }
        Commands::Positions {
            first,
            second,
            third,
            fourth,
            output,
        } => {
            println!("{}", "==> Fusing camera captures...".cyan());
            report(
                positions::generate(
                    [
                        first.as_path(),
                        second.as_path(),
                        third.as_path(),
                        fourth.as_path(),
                    ],
                    &output,
                ),
                "generate positions",
            )
        }
    }
}

fn report(result: Result<(), Box<dyn std::error::Error>>, task: &str) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("Failed to {task}: {err}").red());
            ExitCode::FAILURE
        }
    }
}

fn check(board: Board) -> ExitCode {
    let workspace_root = workspace_root();

    println!("{}", "==> Running host tests...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "test",
        "--package",
        "christmas-lights",
        "--no-default-features",
        "--features",
        "host",
    ])) {
        return ExitCode::FAILURE;
    }
    if !run_command(
        Command::new("cargo")
            .current_dir(&workspace_root)
            .args(["test", "--package", "xtask"]),
    ) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", format!("==> Building demos ({board})...").cyan());
    for demo in DEMOS {
        println!("  {}", format!("- {demo}").bright_black());
        if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
            "build",
            "--bin",
            demo,
            "--target",
            board.target(),
            "--features",
            &board.features(),
            "--no-default-features",
        ])) {
            return ExitCode::FAILURE;
        }
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn build_uf2(name: &str, board: Board) -> ExitCode {
    if !DEMOS.contains(&name) {
        eprintln!(
            "{}",
            format!("Unknown demo '{name}'; expected one of {DEMOS:?}").red()
        );
        return ExitCode::FAILURE;
    }

    let workspace_root = workspace_root();
    let target = board.target();
    let features = board.features();

    println!("{}", format!("Building UF2 for demo '{name}' ({board})").cyan());
    println!("  Features: {}", features.bright_black());
    println!("  Target: {}", target.bright_black());

    // Build in release mode for UF2
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--bin",
        name,
        "--release",
        "--target",
        target,
        "--features",
        &features,
        "--no-default-features",
    ])) {
        return ExitCode::FAILURE;
    }

    // Convert to UF2 using elf2uf2-rs
    let elf_path = format!("target/{target}/release/{name}");
    let uf2_path = format!("{name}.uf2");

    println!("\n{}", "Converting to UF2 format...".cyan());

    if run_command(
        Command::new("elf2uf2-rs")
            .current_dir(&workspace_root)
            .args([&elf_path, &uf2_path]),
    ) {
        println!("{}", format!("UF2 created: {uf2_path}").green().bold());
        println!("{}", "Ready to drag-and-drop to your Pico!".bright_black());
        ExitCode::SUCCESS
    } else {
        println!(
            "{}",
            "Note: Install elf2uf2-rs with: cargo install elf2uf2-rs".yellow()
        );
        ExitCode::FAILURE
    }
}

fn workspace_root() -> PathBuf {
    // `cargo xtask` runs from the workspace root; xtask/ sits one level below it.
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map_or_else(|| PathBuf::from("."), PathBuf::from)
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
