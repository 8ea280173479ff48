
mod config;
mod input;
mod view;

use std::fs::OpenOptions;
use std::io::Read;

use clap::Parser;

use oxo::Session;

use utils::*;

///
/// A structure representing command line arguments.
///
#[derive(Parser)]
struct CLIArgs
{
    #[clap(short, long, default_value = "config/config.toml")]
    config: String
}

fn main () -> Result<()>
{
    let args = CLIArgs::parse();
    let config = load_config(& args.config)?;

    let _logger = log::initialize(& config.log_path, "client")?;
    log::info!("Client startup with configuration '{}'.", & args.config);

    let mut session = Session::new(view::View::new(config.colour), input::Input::new());
    session.run_loop();

    log::info!("Client shutdown: {}", session.game().outcome());

    Ok(())
}

///
/// Reads the configuration at the given path. A missing file falls back to
/// the default configuration; a file that exists but does not parse is an
/// error.
///
fn load_config (path: & str) -> Result<config::Config>
{
    match OpenOptions::new().read(true).open(path)
    {
        Err(_)       => Ok(config::Config::default()),
        Ok(mut file) =>
        {
            let mut config_str = String::new();
            file.read_to_string(& mut config_str)?;

            Ok(toml::from_str(& config_str)?)
        }
    }
}
