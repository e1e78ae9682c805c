//! Command-line entry point for the Lissa viewer.
//!
//! Parses an optional options TOML path, `--view` mode, and `--schema`
//! flag, then runs the windowed [`Viewer`].

use std::path::Path;

use lissa::{options::Options, scene::ViewMode, Viewer};

const USAGE: &str =
    "Usage: lissa [OPTIONS_TOML] [--view single|group] [--schema]";

// Schema and usage output must reach stdout so it can be piped.
#[allow(clippy::print_stdout)]
fn main() {
    env_logger::init();

    let mut options: Option<Options> = None;
    let mut view: Option<ViewMode> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--schema" => {
                match serde_json::to_string_pretty(&Options::json_schema()) {
                    Ok(schema) => println!("{schema}"),
                    Err(e) => {
                        log::error!("failed to serialize schema: {e}");
                        std::process::exit(1);
                    }
                }
                return;
            }
            "--view" => {
                let Some(name) = args.next() else {
                    log::error!("--view requires a mode\n{USAGE}");
                    std::process::exit(1);
                };
                match name.parse::<ViewMode>() {
                    Ok(mode) => view = Some(mode),
                    Err(e) => {
                        log::error!("{e}\n{USAGE}");
                        std::process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return;
            }
            path if !path.starts_with('-') => {
                match Options::load(Path::new(path)) {
                    Ok(loaded) => options = Some(loaded),
                    Err(e) => {
                        log::error!("failed to load options from {path}: {e}");
                        std::process::exit(1);
                    }
                }
            }
            other => {
                log::error!("unknown argument: {other}\n{USAGE}");
                std::process::exit(1);
            }
        }
    }

    let mut builder = Viewer::builder();
    if let Some(options) = options {
        builder = builder.with_options(options);
    }
    if let Some(view) = view {
        builder = builder.with_view(view);
    }

    if let Err(e) = builder.run() {
        log::error!("viewer exited with error: {e}");
        std::process::exit(1);
    }
}
