// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::app::{self, Flags};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        theme_mode: args.opt_value_from_str("--theme")?,
        auto_hide_ms: args.opt_value_from_str("--auto-hide-ms")?,
        config_dir: args.opt_value_from_os_str("--config-dir", |s| {
            Ok::<PathBuf, String>(PathBuf::from(s))
        })?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}
