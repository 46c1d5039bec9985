mod app;
mod catalog;
mod config;
mod pages;
mod playback;
mod runtime;
mod ui;

use std::env;

const USAGE: &str = "\
Usage: doratunes [--print-config | --help]

  --print-config   print the default config.toml and exit
  --help           show this message

Settings are read from $DORATUNES_CONFIG_PATH or
$XDG_CONFIG_HOME/doratunes/config.toml, and DORATUNES__SECTION__KEY
environment variables override them.";

fn main() -> anyhow::Result<()> {
    match env::args().nth(1).as_deref() {
        Some("--print-config") => {
            print!("{}", config::Settings::default().to_toml()?);
            Ok(())
        }
        Some("-h" | "--help") => {
            println!("{USAGE}");
            Ok(())
        }
        Some(other) => anyhow::bail!("unknown argument `{other}`\n\n{USAGE}"),
        None => runtime::run(),
    }
}
