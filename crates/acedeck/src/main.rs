#[cfg(feature = "native")]
use acedeck::data::deck_data::{builtin_deck, load_deck};
#[cfg(feature = "native")]
use acedeck::data::storage::DataDirectory;
#[cfg(feature = "native")]
use acedeck::{App, init_logging};
#[cfg(feature = "native")]
use acedeck_core::BoundaryPolicy;
#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "acedeck")]
#[command(about = "A terminal slide deck for the ACE paper walkthrough")]
struct Args {
    /// YAML deck to present instead of the built-in one
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Behavior past the first or last slide (clamp, wrap)
    #[arg(long, value_parser = parse_boundary)]
    boundary: Option<BoundaryPolicy>,

    /// Path to the data directory (default: ~/.acedeck/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print the slide titles and exit
    #[arg(long)]
    outline: bool,
}

#[cfg(feature = "native")]
fn parse_boundary(value: &str) -> Result<BoundaryPolicy, String> {
    BoundaryPolicy::from_name(value).ok_or_else(|| {
        let names: Vec<&str> = BoundaryPolicy::ALL.iter().map(|p| p.name()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // Load errors surface before the terminal is taken over
    let deck = match &args.deck {
        Some(path) => load_deck(path)?,
        None => builtin_deck()?,
    };

    if args.outline {
        for (i, title) in deck.titles().enumerate() {
            println!("{:>2}. {}", i + 1, title);
        }
        return Ok(());
    }

    let storage = DataDirectory::new(args.data_dir.unwrap_or_else(DataDirectory::default_path));
    init_logging(storage.root(), &args.log_level)?;

    if let Err(e) = storage.init() {
        tracing::warn!(error = %e, "Failed to initialize data directory");
    }
    let config = match storage.load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable config");
            Default::default()
        }
    };
    let keybindings = storage.load_keybindings();
    let policy = args.boundary.or(config.boundary).unwrap_or_default();

    tracing::info!(
        title = %deck.meta().title,
        slides = deck.len().get(),
        policy = policy.name(),
        "Starting presentation"
    );

    let mut app = App::new(deck, policy, keybindings);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    // Web entry point is handled via wasm_bindgen in lib.rs
    panic!("This binary requires the 'native' feature. For web, build the WASM target.");
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_flag() {
        let args = Args::parse_from(["acedeck", "--boundary", "Clamp"]);
        assert_eq!(args.boundary, Some(BoundaryPolicy::Clamp));
        assert_eq!(args.log_level, "info");
        assert!(!args.outline);

        assert!(Args::try_parse_from(["acedeck", "--boundary", "bounce"]).is_err());
    }

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["acedeck"]);
        assert!(args.deck.is_none());
        assert!(args.boundary.is_none());
    }
}
