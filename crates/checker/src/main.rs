use clap::Parser;
use state_checker::{
    error::{CheckerError, Result},
    rpc::DEFAULT_TIMEOUT,
    utils, AbiLoader, Description, HttpConnector, Reporter, StateChecker,
};
use std::{io::IsTerminal, path::PathBuf, process::ExitCode, time::Duration};
use tracing_subscriber::EnvFilter;

/// Checks deployed contracts against a deployment description.
#[derive(Debug, Parser)]
#[command(name = "state-checker", version, about)]
struct Args {
    /// Deployment description (YAML).
    description: PathBuf,

    /// Directory holding one `<Name>.json` ABI per contract interface.
    abi_dir: PathBuf,

    /// Per-request timeout of RPC calls, in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Echo the description before running the checks.
    #[arg(long)]
    print_description: bool,

    /// Do not color outcome marks.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let outcome = run(Args::parse());
    if let Err(err) = &outcome {
        eprintln!("error: {err}");
    }
    exit_code(&outcome)
}

/// Success only if the run completed and every check passed.
fn exit_code(outcome: &Result<bool>) -> ExitCode {
    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) | Err(_) => ExitCode::FAILURE,
    }
}

fn run(args: Args) -> Result<bool> {
    let content = utils::read_to_string(&args.description)?;
    let description = Description::parse(&content)?;

    let stdout = std::io::stdout();
    let tty = stdout.is_terminal();
    let mut reporter =
        Reporter::new(stdout.lock()).interactive(tty).colored(tty && !args.no_color);
    if args.print_description {
        reporter.banner("CONFIG")?;
        reporter.text(content.trim_end())?;
    }

    let checker = StateChecker::new(
        description,
        AbiLoader::new(args.abi_dir),
        HttpConnector::new(Duration::from_secs(args.timeout)),
    );
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| CheckerError::msg(format!("failed to start the async runtime: {err}")))?;
    let summary = runtime.block_on(checker.run(&mut reporter))?;
    Ok(summary.is_success())
}
