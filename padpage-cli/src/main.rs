#![deny(missing_docs)]
//! A command-line interface for generating printable one-time pad pages.

use clap::{Parser, Subcommand};
use log::{error, info};
use padpage_core::page_builder::{self, Page, PageLayout};
use padpage_core::symbol_source::OsSymbolSource;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Print one page with the default layout\npadpage-cli generate\n\n# Print three pages\npadpage-cli generate --pages 3\n\n# Write pages to files instead of stdout\npadpage-cli generate --pages 5 --output ./pads\n\n# Use a custom layout\npadpage-cli generate --messages 6 --rows 3 --groups 10 --group-size 4"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more pad pages
    Generate {
        /// The number of pages to generate
        #[arg(short, long, default_value_t = 1)]
        pages: usize,

        /// The number of messages per page
        #[arg(long, default_value_t = 9)]
        messages: usize,

        /// The number of rows per message
        #[arg(long, default_value_t = 4)]
        rows: usize,

        /// The number of symbol groups per row
        #[arg(long, default_value_t = 20)]
        groups: usize,

        /// The number of symbols per group
        #[arg(long, default_value_t = 5)]
        group_size: usize,

        /// Directory to write page files into. If omitted, pages are printed to stdout.
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

/// Renders a page as plain text, one numbered message block at a time.
fn page_text(page: &Page) -> String {
    let mut out = String::new();
    for message in &page.messages {
        out.push_str(&format!(
            "Message {}\n{}\n\n",
            message.ordinal, message.text
        ));
    }
    out
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate {
            pages,
            messages,
            rows,
            groups,
            group_size,
            output,
        } => {
            let layout = PageLayout {
                message_count: *messages,
                row_count: *rows,
                group_count: *groups,
                group_size: *group_size,
            };
            if let Err(e) = layout.validate() {
                error!("Refusing to generate: {e}");
                std::process::exit(1);
            }
            if *pages == 0 {
                error!("Refusing to generate: pages must be at least 1");
                std::process::exit(1);
            }

            if let Some(dir) = output {
                if let Err(e) = fs::create_dir_all(dir) {
                    error!("Failed to create output directory '{}': {e}", dir.display());
                    std::process::exit(1);
                }
            }

            info!("Generating {pages} page(s)...");
            let mut source = OsSymbolSource;
            for index in 1..=*pages {
                let page = match page_builder::generate_page(&mut source, &layout) {
                    Ok(page) => page,
                    Err(e) => {
                        error!("Failed to generate page {index}: {e}");
                        std::process::exit(1);
                    }
                };

                match output {
                    Some(dir) => {
                        let path = dir.join(format!("page-{index}.txt"));
                        if let Err(e) = fs::write(&path, page_text(&page)) {
                            error!("Failed to write '{}': {e}", path.display());
                            std::process::exit(1);
                        }
                        println!("{}", path.display());
                    }
                    None => print!("{}", page_text(&page)),
                }
            }
            info!("Successfully generated {pages} page(s).");
        }
    }
}
