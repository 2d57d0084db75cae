use std::path::PathBuf;

/// Look up the charsets every conforming runtime must support
#[derive(argh::FromArgs)]
#[argh(help_triggers("-h", "--help"))]
pub struct Args {
    /// charset names, symbols or aliases to resolve, lists every standard charset when empty
    #[argh(positional)]
    pub names: Vec<String>,
    /// print json instead of a table
    #[argh(switch, long = "json")]
    pub json: bool,
    /// include registered aliases
    #[argh(switch, short = 'a', long = "aliases")]
    pub aliases: bool,
    /// include the encoding_rs encoding each charset resolves to
    #[argh(switch, short = 'e', long = "encoding")]
    pub encoding: bool,
    /// options `error`, `warn`, `info`, `debug` or `trace`
    #[argh(option, long = "log-level")]
    pub log_level: Option<String>,
    /// path to a config file
    #[argh(option, short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    /// initialize default config
    #[argh(switch, long = "init")]
    pub init: bool,
    /// overwrite existing config
    #[argh(switch, long = "overwrite")]
    pub overwrite: bool,
}

pub fn parse() -> Args {
    argh::from_env()
}
