//! List command implementation
//!
//! Replays the requested actions against a freshly loaded catalog (selection,
//! filters, then each sort click) and prints the annotated view.

use super::shared::{load_catalog, load_configuration, setup_logging};
use crate::app::models::{Book, GroupStripe, SortColumn, SortDirection};
use crate::app::services::catalog::Catalog;
use crate::app::services::filter_engine::FilterRequest;
use crate::cli::args::{Args, ListArgs, OutputFormat};
use crate::config::CatalogConfig;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use tracing::{debug, info};

const TITLE_WIDTH: usize = 36;
const AUTHOR_WIDTH: usize = 22;
const SERIES_WIDTH: usize = 24;
const NARRATOR_WIDTH: usize = 20;

/// JSON document for the list command
#[derive(Debug, Serialize)]
struct ViewOutput<'a> {
    filter: String,
    sort: Option<(SortColumn, SortDirection)>,
    total: usize,
    shown: usize,
    books: Vec<&'a Book>,
}

/// List command runner
pub fn run_list(args: &Args, list: &ListArgs) -> Result<()> {
    setup_logging(args)?;
    list.validate()?;

    let config = load_configuration(args, &list.source)?;
    let mut catalog = load_catalog(&config)?;

    replay_actions(&mut catalog, list, &config)?;

    let view = catalog.current_view();
    let limit = list.limit.unwrap_or(view.len());
    let shown: Vec<&Book> = view.into_iter().take(limit).collect();

    info!("Showing {} of {} books", shown.len(), catalog.view_ids().len());

    match list.format {
        OutputFormat::Table => print_table(&catalog, &shown, &config),
        OutputFormat::Json => {
            let output = ViewOutput {
                filter: catalog.filter_state().describe(),
                sort: catalog.sort_state(),
                total: catalog.view_ids().len(),
                shown: shown.len(),
                books: shown,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("Failed to serialize view")?
            );
        }
    }

    Ok(())
}

/// Apply the command-line actions in a fixed order
fn replay_actions(catalog: &mut Catalog, list: &ListArgs, config: &CatalogConfig) -> Result<()> {
    if let Some(asin) = &list.select {
        let id = catalog
            .find_by_asin(asin)
            .map(Book::id)
            .with_context(|| format!("No book with ASIN {}", asin))?;
        catalog.set_selection(Some(id))?;
        debug!("Selected {} ({})", asin, id);
    }

    if let Some(same) = list.same {
        catalog.set_filter(FilterRequest::Same(same.into()))?;
    }
    if let Some(category) = list.progress {
        catalog.set_filter(FilterRequest::Progress(category))?;
    }
    if let Some(text) = &list.search {
        catalog.set_filter(FilterRequest::Search(text.clone()))?;
    }

    let sorts: Vec<SortColumn> = if list.sort.is_empty() {
        config.default_sort.into_iter().collect()
    } else {
        list.sort.clone()
    };
    for column in sorts {
        catalog.set_sort(column);
    }

    Ok(())
}

fn print_table(catalog: &Catalog, books: &[&Book], config: &CatalogConfig) {
    let sort_label = match catalog.sort_state() {
        Some((column, SortDirection::Ascending)) => format!("{} ^", column),
        Some((column, SortDirection::Descending)) => format!("{} v", column),
        None => "unsorted".to_string(),
    };

    println!(
        "{} {} {} {}",
        "Library:".bright_cyan(),
        format!("{} of {} books", catalog.view_ids().len(), catalog.books().len())
            .bright_white()
            .bold(),
        format!("[{}]", catalog.filter_state().describe()).bright_yellow(),
        format!("[{}]", sort_label).bright_yellow()
    );
    println!();

    let header = format!(
        "{:<tw$}  {:<aw$}  {:<sw$}  {:>5}  {:<nw$}  {:>6}  {}",
        "Title",
        "Author",
        "Series",
        "#",
        "Narrator",
        "Rating",
        "Progress",
        tw = TITLE_WIDTH,
        aw = AUTHOR_WIDTH,
        sw = SERIES_WIDTH,
        nw = NARRATOR_WIDTH,
    );
    println!("{}", header.bold());

    for book in books {
        let fields = book.fields();
        let row = format!(
            "{:<tw$}  {:<aw$}  {:<sw$}  {:>5}  {:<nw$}  {:>6}  {}",
            fit(&fields.title, TITLE_WIDTH),
            fit(config.display_or_placeholder(&fields.author), AUTHOR_WIDTH),
            fit(&fields.series, SERIES_WIDTH),
            fit(&fields.book_number, 5),
            fit(&fields.narrator, NARRATOR_WIDTH),
            fit(&fields.rating, 6),
            fields.progress,
            tw = TITLE_WIDTH,
            aw = AUTHOR_WIDTH,
            sw = SERIES_WIDTH,
            nw = NARRATOR_WIDTH,
        );

        match book.group_stripe() {
            GroupStripe::Primary => println!("{}", row),
            GroupStripe::Alternate => println!("{}", row.dimmed()),
        }
    }

    if books.len() < catalog.view_ids().len() {
        println!(
            "{}",
            format!("... {} more", catalog.view_ids().len() - books.len()).dimmed()
        );
    }
}

/// Truncate to a column width, counting characters
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        truncated.push('~');
        truncated
    }
}
