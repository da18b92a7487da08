use clap::Parser;

use doc_guard::cli::{Cli, Commands};
use doc_guard::commands::{run_init, run_lint};

const fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose, cli.quiet)),
    )
    .format_timestamp(None)
    .init();

    let exit_code = match &cli.command {
        Commands::Lint(args) => run_lint(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
