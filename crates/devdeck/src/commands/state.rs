use anyhow::Result;
use colored::Colorize;

use crate::cli::StateCommands;
use crate::controller::{self, CURRENT_SLIDE_KEY};
use crate::deck;
use crate::storage::{FileStore, KeyValueStore};

pub fn run(command: StateCommands) -> Result<()> {
    let path = FileStore::default_path()?;
    let mut store = FileStore::open(&path);
    match command {
        StateCommands::Show => {
            println!("{} {}", "State file:".bold(), store.path().display());
            if store.entries().is_empty() {
                println!("{}", "(no saved state)".dimmed());
                return Ok(());
            }
            for (key, value) in store.entries() {
                println!("  {:<16}{}", key, value.cyan());
            }
            let slides = deck::assemble();
            let index = controller::restore_index(&store, slides.len());
            if let Some(slide) = slides.get(index) {
                println!();
                println!(
                    "Resumes on slide {} of {}: {}",
                    index + 1,
                    slides.len(),
                    slide.title.bold()
                );
            }
        }
        StateCommands::Reset => {
            store.remove(CURRENT_SLIDE_KEY)?;
            println!("{}", "Slide position reset. Next launch starts at slide 1.".green());
        }
    }
    Ok(())
}
