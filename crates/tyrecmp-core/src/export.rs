//! CSV export of a result set.
//!
//! Header line is unquoted; every data field is quoted with embedded `"`
//! doubled, so brands like `Michelin "Primacy 4+"` survive a round trip.

use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::descriptor::TyreSizeDescriptor;
use crate::error::ExportError;
use crate::offers::Offer;

/// Column order of the export. Also the literal header line.
pub const COLUMNS: [&str; 8] = [
    "site", "brand", "pattern", "size", "stock", "price", "currency", "url",
];

/// Serializes `rows` in the given order.
///
/// Callers are expected not to export an empty result; an empty slice
/// still yields the header line.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if a record cannot be written, or
/// [`ExportError::Encoding`] if the buffer is not UTF-8.
pub fn serialize(rows: &[Offer]) -> Result<String, ExportError> {
    let mut header = COLUMNS.join(",");
    header.push('\n');

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(header.into_bytes());

    for offer in rows {
        writer.write_record([
            offer.site.as_str(),
            offer.brand.as_str(),
            offer.pattern.as_str(),
            offer.size.as_str(),
            offer.stock.to_string().as_str(),
            offer.price.to_string().as_str(),
            offer.currency.as_str(),
            offer.url.as_str(),
        ])?;
    }

    let buf = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))?;
    String::from_utf8(buf).map_err(|_| ExportError::Encoding)
}

/// File name for an export of `size`, e.g. `prices_205-55 R16 91V.csv`.
///
/// Path separators in the size text are replaced with `-` so the name stays
/// a single path component.
#[must_use]
pub fn export_file_name(size: &TyreSizeDescriptor) -> String {
    let size_text: String = size
        .format()
        .chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect();
    format!("prices_{size_text}.csv")
}

/// Serializes `rows` and writes them to `dir/`[`export_file_name`].
///
/// Creates `dir` if it does not exist. Returns the written path.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the directory or file cannot be written,
/// or any error from [`serialize`].
pub fn write_export(
    dir: &Path,
    size: &TyreSizeDescriptor,
    rows: &[Offer],
) -> Result<PathBuf, ExportError> {
    let payload = serialize(rows)?;

    std::fs::create_dir_all(dir).map_err(|e| ExportError::Io {
        path: dir.display().to_string(),
        source: e,
    })?;

    let path = dir.join(export_file_name(size));
    std::fs::write(&path, payload).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(path)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
