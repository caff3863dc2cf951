use crate::catalogue::Catalogue;
use crate::cli::OutputFormat;
use crate::error::{Result, SelectionError};
use colored::Colorize;

pub fn handle_list(category: Option<String>, format: OutputFormat) -> Result<()> {
    let catalogue = Catalogue::shared()?;

    // Pair every record with its menu position before filtering so the
    // printed numbers stay valid `armory install` targets.
    let rows: Vec<(usize, &crate::catalogue::ToolRecord)> = catalogue
        .iter()
        .enumerate()
        .filter(|(_, record)| match &category {
            Some(wanted) => record.category.eq_ignore_ascii_case(wanted),
            None => true,
        })
        .collect();

    if rows.is_empty() {
        if let Some(wanted) = category {
            return Err(SelectionError::UnknownSelection(format!("category:{}", wanted)).into());
        }
    }

    match format {
        OutputFormat::Json => {
            let records: Vec<_> = rows.iter().map(|(_, record)| record).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Table => {
            println!("📦 Tool Catalogue ({} tools)", rows.len());
            println!("{}", "=".repeat(60));
            for (index, record) in rows {
                print!(
                    "  [{}] {} {}",
                    index.to_string().cyan(),
                    record.name.bold(),
                    format!("({})", record.category).dimmed()
                );
                if let Some(description) = &record.description {
                    print!(" - {}", description);
                }
                println!();
            }
            println!("\n💡 Install with: armory install <index|name|all>");
        }
    }

    Ok(())
}

pub fn handle_categories(format: OutputFormat) -> Result<()> {
    let catalogue = Catalogue::shared()?;
    let categories = catalogue.categories();

    match format {
        OutputFormat::Json => {
            let summary: Vec<_> = categories
                .iter()
                .map(|name| {
                    serde_json::json!({
                        "category": name,
                        "tools": catalogue.by_category(name).len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Table => {
            println!("🗂  Categories ({})", categories.len());
            println!("{}", "=".repeat(60));
            for name in categories {
                let count = catalogue.by_category(name).len();
                println!(
                    "  {} ({} tool{})",
                    name.bold(),
                    count,
                    if count == 1 { "" } else { "s" }
                );
            }
            println!("\n💡 List one with: armory list --category <name>");
        }
    }

    Ok(())
}
