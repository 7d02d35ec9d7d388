//! CSV building and browser-side file download.
//!
//! Server-generated exports arrive as raw bytes and go straight to
//! [`download_bytes`]. Client-side exports implement [`CsvExportable`].

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Nenhum dado para exportar.")]
    Empty,
    #[error("Falha no download: {0}")]
    Browser(String),
}

/// Rows that can be written to a CSV file.
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds a `;`-separated CSV document with a UTF-8 BOM so spreadsheet
/// applications pick the right encoding for accented names.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv = String::from('\u{FEFF}');
    csv.push_str(&T::headers().join(";"));
    csv.push('\n');
    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv.push_str(&row.join(";"));
        csv.push('\n');
    }
    csv
}

/// Builds the CSV for `data` and triggers its download as `filename`.
pub fn export_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), ExportError> {
    if data.is_empty() {
        return Err(ExportError::Empty);
    }
    download_bytes(build_csv(data).as_bytes(), filename, CSV_MIME)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Saves `bytes` through a temporary object URL and a hidden anchor.
pub fn download_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), ExportError> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    let blob = Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| ExportError::Browser(format!("blob: {:?}", e)))?;
    download_blob(&blob, filename)
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let browser = |what: &str| ExportError::Browser(what.to_string());

    let window = web_sys::window().ok_or_else(|| browser("no window"))?;
    let document = window.document().ok_or_else(|| browser("no document"))?;
    let body = document.body().ok_or_else(|| browser("no body"))?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| ExportError::Browser(format!("object url: {:?}", e)))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| ExportError::Browser(format!("anchor: {:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| ExportError::Browser(format!("anchor cast: {:?}", e)))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.style().set_property("display", "none");

    body.append_child(&anchor)
        .map_err(|e| ExportError::Browser(format!("append: {:?}", e)))?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    // Revoking right after click() is safe: the download already holds the blob.
    Url::revoke_object_url(&url)
        .map_err(|e| ExportError::Browser(format!("revoke: {:?}", e)))?;

    log::info!("Downloaded {}", filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Nome", "Valor"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), format!("{:.2}", self.1)]
        }
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("Café"), "Café");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("TV 50\""), "\"TV 50\"\"\"");
        assert_eq!(escape_csv_cell("linha\nnova"), "\"linha\nnova\"");
    }

    #[test]
    fn test_build_csv() {
        let csv = build_csv(&[Row("Arroz", 22.9), Row("Feijão; preto", 8.0)]);
        assert_eq!(
            csv,
            "\u{FEFF}Nome;Valor\nArroz;22.90\n\"Feijão; preto\";8.00\n"
        );
    }

    #[test]
    fn test_empty_export_is_rejected() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(export_csv(&rows, "x.csv"), Err(ExportError::Empty));
    }
}
