//! Show command implementation
//!
//! Prints a detail card for one record, with placeholders for blank fields and
//! the author's tint as a swatch.

use super::shared::{load_catalog, load_configuration, setup_logging};
use crate::app::models::Book;
use crate::app::services::grouping::author_tint;
use crate::cli::args::{Args, ShowArgs};
use crate::config::CatalogConfig;
use anyhow::{Context, Result};
use colored::*;
use regex::Regex;

/// Show command runner
pub fn run_show(args: &Args, show: &ShowArgs) -> Result<()> {
    setup_logging(args)?;

    let config = load_configuration(args, &show.source)?;
    let catalog = load_catalog(&config)?;

    let book = catalog
        .find_by_asin(&show.asin)
        .with_context(|| format!("No book with ASIN {}", show.asin))?;

    print_card(book, &config)?;
    Ok(())
}

fn print_card(book: &Book, config: &CatalogConfig) -> Result<()> {
    let fields = book.fields();
    let label = |name: &str| format!("{:>14}", name).bright_cyan();
    let value = |text: &str| config.display_or_placeholder(text).to_string();

    println!("{}", value(&fields.title).bright_white().bold());
    if !fields.subtitle.trim().is_empty() {
        println!("{}", fields.subtitle.italic());
    }
    println!();

    let (tint_name, [r, g, b]) = author_tint(&fields.author);
    println!(
        "{} {} {} {}",
        label("Author:"),
        value(&fields.author),
        "  ".on_truecolor(r, g, b),
        tint_name.dimmed()
    );
    println!("{} {}", label("Narrator:"), value(&fields.narrator));
    println!(
        "{} {}",
        label("Series:"),
        config.series_or_placeholder(&fields.series)
    );
    println!("{} {}", label("Book:"), value(&fields.book_number));
    println!("{} {}", label("Length:"), value(&fields.length));
    println!("{} {}", label("Progress:"), value(&fields.progress));
    println!(
        "{} {} ({} ratings)",
        label("Rating:"),
        value(&fields.rating),
        value(&fields.ratings)
    );
    println!("{} {}", label("My rating:"), value(&fields.my_rating));
    println!("{} {}", label("Released:"), value(&fields.release_date));
    println!("{} {}", label("Publishers:"), value(&fields.publishers));
    println!("{} {}", label("Categories:"), value(&fields.categories));
    println!("{} {}", label("Tags:"), value(&fields.tags));
    println!("{} {}", label("Language:"), value(&fields.language));
    println!("{} {}", label("Format:"), value(&fields.format));
    println!("{} {}", label("ASIN:"), value(&fields.asin));
    println!("{} {}", label("ISBN-10:"), value(&fields.isbn10));
    println!("{} {}", label("ISBN-13:"), value(&fields.isbn13));
    println!("{} {}", label("Store page:"), value(&fields.store_page_url));
    println!("{} {}", label("Cover:"), value(&fields.cover));

    let summary = plain_text(&fields.summary)?;
    println!();
    println!("{}", value(&summary));

    Ok(())
}

/// Strip HTML tags from the summary for terminal output
fn plain_text(html: &str) -> Result<String> {
    let tags = Regex::new(r"<[^>]*>").context("Invalid tag pattern")?;
    let text = tags.replace_all(html, " ");
    Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_strips_tags() {
        assert_eq!(
            plain_text("<p>Ash falls <b>from</b> the sky.</p>").unwrap(),
            "Ash falls from the sky."
        );
        assert_eq!(plain_text("").unwrap(), "");
    }
}
