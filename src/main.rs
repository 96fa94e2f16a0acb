// SPDX-License-Identifier: MPL-2.0
use binsearch_shell::app::{self, paths, Flags};
use binsearch_shell::logging;

fn opt_arg(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|error| {
        tracing::warn!(%error, key, "ignoring invalid argument");
        None
    })
}

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: opt_arg(&mut args, "--lang"),
        data_dir: opt_arg(&mut args, "--data-dir"),
        config_dir: opt_arg(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
