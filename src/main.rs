use clap::{Parser, Subcommand};
use gemkit::commands::{self, LogArgs, LogContext};

#[derive(Parser)]
#[command(
    name = "gemkit",
    version,
    disable_version_flag = true,
    about = "Gemini Kit telemetry log tooling"
)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: (),

    /// Emit debug logs on stderr (filter with RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract relevant records from the configured telemetry file.
    Log(LogArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::debug!("gemkit debug logging enabled");
    }

    match cli.command {
        Command::Log(args) => {
            let ctx = LogContext::from_env()?;
            commands::handle_log_command(&args, &ctx, &mut std::io::stdout().lock())?;
        }
    }
    Ok(())
}
