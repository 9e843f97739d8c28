//! Output formatting for the CLI.

use catalog_core::catalog::{Product, SortKey};
use console::{style, Term};

const COLUMNS: [&str; 5] = ["ID", "NAME", "CATEGORY", "PRICE", "DESCRIPTION"];

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print the catalog as a table.
    pub fn product_table(&self, products: &[Product]) {
        if self.json {
            self.json(&products);
            return;
        }
        if products.is_empty() {
            self.info("The catalog is empty.");
            return;
        }

        let rows: Vec<[String; 5]> = products.iter().map(product_row).collect();
        let widths = column_widths(&rows, self.term_width());

        let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
        println!("  {}", style(format_row(&header, &widths)).bold());
        for row in &rows {
            println!("  {}", format_row(row, &widths));
        }
    }

    /// Print one product as a detail card.
    pub fn product_card(&self, product: &Product) {
        if self.json {
            self.json(product);
            return;
        }
        println!("\n  {}", style(&product.name).bold());
        self.kv("ID", &product.id.to_string());
        self.kv("Category", &product.category);
        self.kv("Price", &product.price.to_string());
        self.kv("Description", &product.description);
    }

    /// Print the sort buttons with the active one highlighted.
    pub fn sort_bar(&self, active: Option<SortKey>) {
        if self.json {
            return;
        }
        let buttons: Vec<String> = [SortKey::Id, SortKey::Price]
            .into_iter()
            .map(|key| {
                let label = format!("[{}]", key.display_name());
                if active == Some(key) {
                    style(label).white().on_blue().bold().to_string()
                } else {
                    style(label).dim().to_string()
                }
            })
            .collect();
        println!("  {}", buttons.join(" "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Get terminal width.
    pub fn term_width(&self) -> usize {
        self.term.size().1 as usize
    }
}

fn product_row(product: &Product) -> [String; 5] {
    [
        product.id.to_string(),
        product.name.clone(),
        product.category.clone(),
        product.price.to_string(),
        product.description.clone(),
    ]
}

/// Column widths fitted to content, with the description column trimmed so
/// each row fits in `term_width`.
fn column_widths(rows: &[[String; 5]], term_width: usize) -> [usize; 5] {
    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    // Two leading spaces plus two between each column.
    let fixed: usize = 2 + widths[..4].iter().map(|w| w + 2).sum::<usize>();
    if term_width > fixed + COLUMNS[4].len() {
        widths[4] = widths[4].min(term_width - fixed);
    }
    widths
}

fn format_row(cols: &[String], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths)
        .map(|(col, &width)| format!("{:width$}", truncate(col, width), width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}
