/// File name used when no category filter is active.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "produtos_geral.csv";

/// Download name for `GET /products/export-csv`.
///
/// The category name is trimmed and every whitespace run becomes a single `_`.
/// A missing or blank name falls back to [`DEFAULT_EXPORT_FILE_NAME`].
pub fn export_file_name(category_name: Option<&str>) -> String {
    let safe_name = category_name
        .map(|name| name.split_whitespace().collect::<Vec<_>>().join("_"))
        .unwrap_or_default();

    if safe_name.is_empty() {
        DEFAULT_EXPORT_FILE_NAME.to_string()
    } else {
        format!("produtos_{}.csv", safe_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(None), "produtos_geral.csv");
        assert_eq!(
            export_file_name(Some("Bebidas Quentes")),
            "produtos_Bebidas_Quentes.csv"
        );
        assert_eq!(
            export_file_name(Some("  Frios \t e   Laticínios ")),
            "produtos_Frios_e_Laticínios.csv"
        );
        assert_eq!(export_file_name(Some("Limpeza")), "produtos_Limpeza.csv");
    }

    #[test]
    fn test_blank_category_falls_back_to_default() {
        assert_eq!(export_file_name(Some("   ")), DEFAULT_EXPORT_FILE_NAME);
    }
}
