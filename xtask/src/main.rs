use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride-hailing CLI workspace"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive ride session
    Run {
        /// Extra arguments passed through to ride_cli
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
    /// Run CI checks (fmt, clippy, tests)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Tests only
    Test,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn ci_check() {
    step("Format check");
    run_cargo(&["fmt", "--all", "--", "--check"]);
    step("Clippy");
    run_cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"]);
    ci_test();
}

fn ci_test() {
    step("Tests");
    run_cargo(&["test", "--workspace"]);
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run { args } => {
            let mut cargo_args = vec!["run", "-p", "ride_cli", "--"];
            cargo_args.extend(args.iter().map(String::as_str));
            run_cargo(&cargo_args);
        }
        Commands::Ci { job } => match job {
            CiJob::Check => ci_check(),
            CiJob::Test => ci_test(),
        },
    }
}
