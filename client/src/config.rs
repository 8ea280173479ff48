
use utils::{Serialize, Deserialize};

///
/// Represents a full client configuration.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config
{
    #[serde(default = "colour")]
    pub colour: bool,

    #[serde(default = "log_path")]
    pub log_path: String
}

impl Default for Config
{
    fn default () -> Config
    {
        Config { colour: colour(), log_path: log_path() }
    }
}

///
/// Returns the default colour setting.
///
fn colour () -> bool
{
    true
}

///
/// Returns the default log path.
///
fn log_path () -> String
{
    "logs".to_owned()
}
