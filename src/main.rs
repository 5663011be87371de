// Entrypoint for the CLI application.
// - Keeps `main` small: parse the command, load config, create an API
//   client and hand both to the dispatch layer.
// - Only a config or client construction failure aborts with an error;
//   broker-side failures are printed and the process still exits 0.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use kaptaind_cli::{api::ApiClient, cli::Cli, config::Config, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Broker endpoint comes from `~/.kap/config`; missing or malformed
    // config is fatal, every command needs it.
    let config = Config::load(&Config::default_path())?;
    let api = ApiClient::new(&config.broker_url)?;

    // Spinner draws to stderr while the single round trip is in flight,
    // keeping stdout clean for table output.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Contacting broker...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let output = ui::dispatch(&api, cli.command);
    spinner.finish_and_clear();

    println!("{output}");
    Ok(())
}
