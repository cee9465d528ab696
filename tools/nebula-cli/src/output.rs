//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use nebula_catalog::{Product, ProductId, ScoreBand};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
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
            eprintln!("{}", error_json(msg));
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

    /// Report an unknown product id.
    pub fn not_found(&self, id: ProductId) {
        if self.json {
            self.json(&not_found_json(id));
        } else {
            self.warn(&format!("Product {} not found.", id));
        }
    }

    /// Print one product as a table row.
    pub fn product_row(&self, product: &Product) {
        if self.json {
            return;
        }
        println!(
            "  {}  {}  {:<22} {}",
            style(format!("{:>4}", product.id)).dim(),
            grade_badge(product),
            product.brand,
            product.name
        );
    }

    /// Spinner shown while a delayed engine call is pending.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Rating badge coloured by score band, padded to a fixed width.
pub fn grade_badge(product: &Product) -> String {
    let label = product.rating.map(|g| g.as_str()).unwrap_or("?");
    let padded = format!("{:<2}", label);
    match product.band() {
        ScoreBand::A => style(padded).green().bold().to_string(),
        ScoreBand::B => style(padded).green().to_string(),
        ScoreBand::C => style(padded).yellow().to_string(),
        ScoreBand::D => style(padded).red().to_string(),
        ScoreBand::E => style(padded).red().bold().to_string(),
    }
}

/// Heart shown next to bookmarked products.
pub fn favorite_marker(favorite: bool) -> &'static str {
    if favorite {
        "❤️"
    } else {
        "🤍"
    }
}

fn error_json(msg: &str) -> String {
    serde_json::json!({ "error": msg }).to_string()
}

fn not_found_json(id: ProductId) -> serde_json::Value {
    serde_json::json!({ "id": id, "found": false })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_json_escapes_chains() {
        let msg = "Invalid catalog: C:\\data\\p.json\nCaused by: \"oops\"";
        let parsed: serde_json::Value = serde_json::from_str(&error_json(msg)).unwrap();
        assert_eq!(parsed["error"], msg);
    }

    #[test]
    fn test_not_found_json() {
        let value = not_found_json(ProductId::new(42));
        assert_eq!(value, serde_json::json!({ "id": 42, "found": false }));
    }

    #[test]
    fn test_favorite_marker() {
        assert_eq!(favorite_marker(true), "❤️");
        assert_eq!(favorite_marker(false), "🤍");
    }
}
