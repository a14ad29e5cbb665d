use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::DeckService;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DECK_DIR: &str = "decks";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    deck_service: Arc<DeckService>,
}

impl UiApp for DesktopApp {
    fn deck_service(&self) -> Arc<DeckService> {
        Arc::clone(&self.deck_service)
    }
}

struct Args {
    decks_dir: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--decks <dir>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --decks {DEFAULT_DECK_DIR}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DECKS_DIR");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut decks_dir = std::env::var("QUIZ_DECKS_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DECK_DIR), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--decks" => {
                    let value = require_value(args, "--decks")?;
                    decks_dir = PathBuf::from(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { decks_dir })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let deck_service = Arc::new(DeckService::new(&parsed.decks_dir));
    match deck_service.list_decks() {
        Ok(entries) if entries.is_empty() => {
            // The selection screen shows its own empty state; just note it.
            log::warn!(
                "no decks found in {}; the selection screen will be empty",
                parsed.decks_dir.display()
            );
        }
        Ok(entries) => log::info!(
            "starting with {} deck(s) from {}",
            entries.len(),
            parsed.decks_dir.display()
        ),
        Err(err) => log::warn!("could not scan deck directory: {err}"),
    }

    let app = DesktopApp { deck_service };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Flashcards")
            .with_inner_size(LogicalSize::new(960.0, 540.0))
            .with_min_inner_size(LogicalSize::new(720.0, 405.0))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
