// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
iced_gallery - filterable image gallery with a lightbox

USAGE:
  iced_gallery [OPTIONS] [MANIFEST]

ARGS:
  MANIFEST              Gallery manifest (TOML); the built-in demo is used when omitted

OPTIONS:
  --lang <ID>           Interface language, e.g. en-US or fr
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("Invalid --lang value: {err}");
        None
    });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            eprintln!("Invalid --config-dir value: {err}");
            None
        });

    let manifest_path = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        config_dir,
        manifest_path,
    })
}
