use colored::Colorize;

use crate::controller;
use crate::deck::{self, Renderable};
use crate::storage;

pub fn run() {
    let slides = deck::assemble();
    let resume = controller::restore_index(&storage::open_default(), slides.len());

    println!("{} ({} slides)", "Deck outline".bold(), slides.len());
    println!();
    for (i, slide) in slides.iter().enumerate() {
        let marker = if i == resume {
            "\u{25B6}".green().to_string()
        } else {
            " ".to_string()
        };
        let kind = format!("[{}]", slide.kind.name()).dimmed();
        let detail = match slide.renderable {
            Renderable::Feature(key) => {
                format!(" ({})", key.group_heading().0).dimmed().to_string()
            }
            _ => String::new(),
        };
        println!("{marker} {:>2}. {} {kind}{detail}", slide.id, slide.title);
    }
}
