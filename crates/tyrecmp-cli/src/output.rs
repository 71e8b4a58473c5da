//! Plain-text rendering for the terminal.

use rust_decimal::Decimal;
use tyrecmp_core::{format_price, is_cheapest, Offer, Summary, VendorSite};

const HEADERS: [&str; 6] = ["site", "brand", "pattern", "size", "stock", "price"];

/// Marker printed in front of every row at the minimum price.
const CHEAPEST_MARK: &str = "*";

pub(crate) fn render_sites(vendors: &[VendorSite]) -> Vec<String> {
    let width = vendors.iter().map(|v| v.key.len()).max().unwrap_or(0);
    vendors
        .iter()
        .map(|v| format!("{:<width$}  {}", v.key, v.label))
        .collect()
}

/// Renders `rows` as an aligned table, keeping their order. Rows at the
/// `cheapest` price are prefixed with `*`.
pub(crate) fn render_table(rows: &[Offer], cheapest: Option<Decimal>) -> Vec<String> {
    if rows.is_empty() {
        return vec!["no offers found".to_owned()];
    }

    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|o| {
            [
                o.site.clone(),
                o.brand.clone(),
                o.pattern.clone(),
                o.size.clone(),
                o.stock.to_string(),
                format_price(o.price, &o.currency),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(" ", &HEADERS.map(str::to_owned), &widths));
    for (offer, row) in rows.iter().zip(&cells) {
        let mark = if is_cheapest(offer, cheapest) {
            CHEAPEST_MARK
        } else {
            " "
        };
        lines.push(format_line(mark, row, &widths));
    }
    lines
}

fn format_line(mark: &str, cells: &[String; 6], widths: &[usize; 6]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    format!("{mark} {}", padded.join("  ")).trim_end().to_owned()
}

pub(crate) fn render_summary(summary: &Summary) -> Vec<String> {
    vec![
        format!("selected sites: {}", summary.selected_vendors),
        format!("offers found:   {}", summary.offer_count),
        format!("cheapest:       {}", summary.cheapest_display()),
    ]
}
