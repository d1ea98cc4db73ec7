//! Demonstration of the library against the real process arguments.
//!
//! ```text
//! $ clom-demo --name Mark --height 5.2 --smart
//! Mark is 5.2 foot tall and is smart.
//! $ clom-demo --help
//! name: The name of our subject
//! height: The height of our subject in feet
//! is_smart: Whether our subject is smart
//! ```

use tracing_subscriber::EnvFilter;

use clom::{Parser, ParserOptions, Resolved};

struct Settings {
    name: String,
    height: f32,
    is_smart: bool,
}

impl Settings {
    fn from_resolved(resolved: &Resolved) -> clom::Result<Self> {
        Ok(Self {
            name: resolved.get("name")?,
            height: resolved.get("height")?,
            is_smart: resolved.get("is_smart")?,
        })
    }
}

fn parse() -> clom::Result<Settings> {
    let store = clom::init_store_from_env()?;

    // -h belongs to height, so only --help asks for the listing.
    let parser = Parser::with_options(ParserOptions {
        help_aliases: vec!["--help".to_string()],
        ..ParserOptions::default()
    })
    .string("name", &["--name", "-n"], "Mr X", "The name of our subject")
    .float("height", &["--height", "-h"], "6.0", "The height of our subject in feet")
    .flag("is_smart", &["--smart", "-s"], "Whether our subject is smart");

    Settings::from_resolved(&parser.resolve_all(store)?)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = parse().unwrap_or_else(|e| e.exit());

    println!(
        "{} is {} foot tall and is {}",
        settings.name,
        settings.height,
        if settings.is_smart { "smart." } else { "not smart." }
    );
}
