pub use crate::error::Error;

pub use anstream::eprintln;
pub use anstream::println;
pub use color_eyre::eyre::{eyre, Context, Result};
pub use std::format as f;

/// Borderless table used for decklist output
pub fn new_table() -> prettytable::Table {
    let mut table = prettytable::Table::new();

    let format = prettytable::format::FormatBuilder::new()
        .padding(1, 1)
        .build();

    table.set_format(format);

    table
}

/// `$1.23`, or `N/A` when the card has no USD price
pub fn format_usd(price: Option<f64>) -> String {
    price
        .map(|usd| f!("${usd:.2}"))
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Some(1.5)), "$1.50");
        assert_eq!(format_usd(Some(0.0)), "$0.00");
        assert_eq!(format_usd(None), "N/A");
    }
}
