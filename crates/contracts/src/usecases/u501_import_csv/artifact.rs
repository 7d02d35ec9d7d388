use serde::{Deserialize, Serialize};

/// One of the three CSV import targets.
///
/// Declaration order is the recommended import order: a product row points at
/// a category, a sale row points at a product. The order is advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportArtifact {
    Categories,
    Products,
    Sales,
}

impl ImportArtifact {
    /// All artifacts in recommended import order.
    pub const ALL: [ImportArtifact; 3] = [
        ImportArtifact::Categories,
        ImportArtifact::Products,
        ImportArtifact::Sales,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ImportArtifact::Categories => "categories",
            ImportArtifact::Products => "products",
            ImportArtifact::Sales => "sales",
        }
    }

    /// Ingestion endpoint path relative to the API base
    pub fn upload_path(&self) -> String {
        format!("/{}/upload-csv", self.code())
    }

    /// 1-based position in the recommended order
    pub fn step(&self) -> usize {
        match self {
            ImportArtifact::Categories => 1,
            ImportArtifact::Products => 2,
            ImportArtifact::Sales => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ImportArtifact::Categories => "Categorias",
            ImportArtifact::Products => "Produtos",
            ImportArtifact::Sales => "Histórico de Vendas",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ImportArtifact::Categories => "categories.csv",
            ImportArtifact::Products => "products.csv",
            ImportArtifact::Sales => "sales.csv",
        }
    }

    /// Hint about what must already exist before this file is imported
    pub fn dependency_hint(&self) -> &'static str {
        match self {
            ImportArtifact::Categories => "Obrigatório importar primeiro.",
            ImportArtifact::Products => "Requer categorias cadastradas.",
            ImportArtifact::Sales => "Requer produtos cadastrados.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_follows_dependencies() {
        let mut sorted = ImportArtifact::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, ImportArtifact::ALL.to_vec());

        let steps: Vec<usize> = ImportArtifact::ALL.iter().map(|a| a.step()).collect();
        assert_eq!(steps, vec![1, 2, 3]);
    }

    #[test]
    fn test_upload_paths() {
        assert_eq!(ImportArtifact::Categories.upload_path(), "/categories/upload-csv");
        assert_eq!(ImportArtifact::Products.upload_path(), "/products/upload-csv");
        assert_eq!(ImportArtifact::Sales.upload_path(), "/sales/upload-csv");
    }
}
