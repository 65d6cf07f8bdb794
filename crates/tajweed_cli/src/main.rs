//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `tajweed_core` linkage without the Flutter/FFI runtime.
//! - Print classified segments for ad-hoc inspection of rule output.

use clap::Parser;
use tajweed_core::{TajweedService, Theme};

/// Print Tajweed segments for Arabic text, or smoke lines when no text is given.
#[derive(Parser, Debug)]
#[command(name = "tajweed_cli", version, about)]
struct Args {
    /// Resolve colors for the dark theme
    #[arg(long)]
    dark: bool,

    /// Text to classify; multiple words are joined with single spaces
    text: Vec<String>,
}

impl Args {
    fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark)
    }
}

fn main() {
    let args = Args::parse();

    if args.text.is_empty() {
        println!("tajweed_core ping={}", tajweed_core::ping());
        println!("tajweed_core version={}", tajweed_core::core_version());
        return;
    }

    let service = TajweedService::default();
    for segment in service.parse(&args.text.join(" "), args.theme()).iter() {
        println!("{}\t{}\t{}", segment.rule, segment.color, segment.text);
    }
}
