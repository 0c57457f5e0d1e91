use crate::prelude::{eprintln, println, *};
use crate::scryfall::{ScryfallClient, ScryfallConfig, ScryfallOptions};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use surveil_core::resolve::ResolvedItem;
use surveil_core::summary::{summarize, DeckSummary};
use tokio::io::AsyncReadExt;

#[derive(Debug, clap::Args)]
pub struct ResolveOptions {
    /// Decklist file to resolve; reads stdin when omitted or "-"
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Add purchase and image link columns to the table
    #[arg(long)]
    pub links: bool,

    #[command(flatten)]
    pub scryfall: ScryfallOptions,
}

#[derive(Debug, Serialize)]
struct ResolveOutput<'a> {
    items: &'a [ResolvedItem],
    summary: DeckSummary,
}

pub async fn run(options: ResolveOptions, global: crate::Global) -> Result<()> {
    let decklist = read_decklist(options.file.as_ref()).await?;

    let config = ScryfallConfig::try_from(options.scryfall)?;
    let client = ScryfallClient::new(&config)?;

    if global.verbose {
        eprintln!("Resolving decklist against {}", config.base_url);
    }

    let items = crate::pipeline::run_import(&client, &decklist).await?;
    let summary = summarize(&items);

    if options.json {
        let output = ResolveOutput {
            items: &items,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        output_formatted(&items, &summary, options.links);
    }

    Ok(())
}

async fn read_decklist(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => tokio::fs::read_to_string(path)
            .await
            .with_context(|| f!("Failed to read decklist from {}", path.display())),
        _ => {
            let mut decklist = String::new();
            tokio::io::stdin()
                .read_to_string(&mut decklist)
                .await
                .context("Failed to read decklist from stdin")?;
            Ok(decklist)
        }
    }
}

fn output_formatted(items: &[ResolvedItem], summary: &DeckSummary, links: bool) {
    build_table(items, links).printstd();

    println!(
        "\nResolved {} of {} lines",
        summary.resolved.to_string().green(),
        summary.total_lines
    );
    if summary.unresolved > 0 {
        println!(
            "{}",
            f!("{} lines could not be resolved", summary.unresolved).yellow()
        );
    }
    println!("Total (USD): {}", format_usd(Some(summary.total_usd)));

    if !summary.mana_curve.is_empty() {
        let curve: Vec<String> = summary
            .mana_curve
            .iter()
            .map(|bucket| f!("{}: {}", bucket.label, bucket.count))
            .collect();
        println!("Mana curve: {}", curve.join(", "));
    }
}

fn build_table(items: &[ResolvedItem], links: bool) -> prettytable::Table {
    let mut table = new_table();
    let mut titles = prettytable::row!["#", "Name", "Mana", "Type", "USD"];
    if links {
        titles.add_cell(prettytable::cell!("Buy"));
        titles.add_cell(prettytable::cell!("Image"));
    }
    table.set_titles(titles);

    for (index, item) in items.iter().enumerate() {
        let mut row = match &item.data {
            Some(card) => prettytable::row![
                index + 1,
                card.name,
                card.display_mana_cost().unwrap_or(""),
                card.type_line.as_deref().unwrap_or(""),
                format_usd(card.usd_price())
            ],
            None => prettytable::row![
                index + 1,
                item.name.red(),
                "",
                "not found".dimmed(),
                ""
            ],
        };

        if links {
            let card = item.data.as_ref();
            row.add_cell(prettytable::cell!(card
                .and_then(|c| c.purchase_link())
                .unwrap_or("")));
            row.add_cell(prettytable::cell!(card
                .and_then(|c| c.image_url())
                .unwrap_or("")));
        }

        table.add_row(row);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::card;

    fn items() -> Vec<ResolvedItem> {
        vec![
            ResolvedItem {
                name: "Sol Ring".to_string(),
                data: Some(card("Sol Ring")),
            },
            ResolvedItem {
                name: "Not A Real Card".to_string(),
                data: None,
            },
        ]
    }

    fn cell(table: &prettytable::Table, row: usize, column: usize) -> String {
        table
            .get_row(row)
            .and_then(|r| r.get_cell(column))
            .map(|c| c.get_content())
            .unwrap_or_default()
    }

    #[test]
    fn test_build_table_without_links() {
        let table = build_table(&items(), false);

        assert_eq!(table.len(), 2);
        assert_eq!(cell(&table, 0, 1), "Sol Ring");
        assert_eq!(cell(&table, 0, 4), "$1.00");
        assert_eq!(table.get_row(0).map(|r| r.len()), Some(5));
    }

    #[test]
    fn test_build_table_with_links() {
        let table = build_table(&items(), true);

        assert_eq!(cell(&table, 0, 5), "https://tcgplayer.example/Sol Ring");
        assert_eq!(cell(&table, 0, 6), "https://img.example/Sol Ring.jpg");
        assert_eq!(cell(&table, 1, 5), "");
        assert_eq!(cell(&table, 1, 6), "");
    }
}
