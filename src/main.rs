// SPDX-License-Identifier: MPL-2.0
use taxboard::app::{self, Flags};
use taxboard::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Taxboard

USAGE:
  taxboard [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --config-dir DIR        Directory holding settings.toml
  --theme MODE            light, dark or system (overrides settings.toml)

ENVIRONMENT:
  TAXBOARD_CONFIG_DIR     Config directory when --config-dir is absent
  RUST_LOG                Log filter, e.g. taxboard=debug
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taxboard=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir = args
        .opt_value_from_str::<_, String>("--config-dir")
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring --config-dir");
            None
        });
    let theme = args
        .opt_value_from_str::<_, ThemeMode>("--theme")
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring --theme");
            None
        });

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    app::run(Flags { config_dir, theme })
}
