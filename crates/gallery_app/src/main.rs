mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let cli = platform::config::Cli::parse();
    platform::logging::initialize(cli.log_to, cli.log_level, &cli.log_file);

    platform::run_app(cli)
}
