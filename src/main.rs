use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use bookrack::core::config;
use bookrack::core::library;
use bookrack::tui;

#[derive(Parser)]
#[command(name = "bookrack", about = "Terminal book-catalog browser")]
struct Args {
    /// JSON library file to browse instead of the built-in catalog
    #[arg(short, long)]
    library: Option<PathBuf>,

    /// Initial sort order: name_asc, name_desc, year_asc, year_desc
    #[arg(short, long)]
    sort: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to bookrack.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("bookrack.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {e}");
        Default::default()
    });
    let resolved = config::resolve(&file_config, args.sort.as_deref(), args.library.as_deref());
    log::info!("bookrack starting up: {:?}", resolved);

    let seed = match &resolved.library_file {
        Some(path) => match library::load_library(path) {
            Ok(books) => books,
            Err(e) => {
                // Fail before touching the terminal so the message is visible.
                eprintln!("bookrack: cannot load library {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => library::builtin_seed(),
    };

    tui::run(resolved, seed)
}
