use serde::{Deserialize, Serialize};

/// Backend-assigned category identifier.
pub type CategoryId = i64;

/// Product category. Names are unique; the backend rejects duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Body of `POST /categories/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryDto {
    pub name: String,
}

impl CreateCategoryDto {
    /// Builds the request from raw input; blank names are rejected.
    pub fn from_input(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(Self {
                name: name.to_string(),
            })
        }
    }
}

/// Looks a category up by id in an already loaded list.
pub fn find_category(categories: &[Category], id: CategoryId) -> Option<&Category> {
    categories.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category_trims_input() {
        assert_eq!(
            CreateCategoryDto::from_input("  Bebidas "),
            Some(CreateCategoryDto {
                name: "Bebidas".to_string()
            })
        );
        assert_eq!(CreateCategoryDto::from_input("   "), None);
    }

    #[test]
    fn test_find_category() {
        let categories = vec![
            Category {
                id: 1,
                name: "Bebidas".to_string(),
            },
            Category {
                id: 3,
                name: "Limpeza".to_string(),
            },
        ];
        assert_eq!(find_category(&categories, 3).map(|c| c.name.as_str()), Some("Limpeza"));
        assert!(find_category(&categories, 2).is_none());
    }
}
