pub mod aggregate;

pub use aggregate::{find_category, Category, CategoryId, CreateCategoryDto};
