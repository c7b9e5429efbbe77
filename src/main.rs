use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;

use passforge::cli::{handlers, menu, Args, CliCommand};
use passforge::core::Config;
use passforge::logging;

// Print to stdout; a closed pipe is not a generation failure
fn emit(text: &str) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", text) {
        log::warn!("Could not write output: {}", e);
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init_logging(&config).context("failed to initialise logging")?;
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    match &args.command {
        Some(CliCommand::Generate(generate)) => {
            let output = handlers::handle_generate(generate, &config);
            emit(&handlers::render_generate(&output, args.json).context("failed to render passwords")?);
        }
        Some(CliCommand::Score { password }) => {
            let password = match password {
                Some(password) => password.clone(),
                None => inquire::Password::new("Password to score:")
                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                    .without_confirmation()
                    .prompt()
                    .context("failed to read password")?,
            };
            let output = handlers::handle_score(&password);
            emit(&handlers::render_score(&output, args.json).context("failed to render score")?);
        }
        None => {
            log::info!("Launching interactive menu");
            menu::run_cli_menu(&config).context("interactive menu failed")?;
        }
    }

    Ok(())
}
