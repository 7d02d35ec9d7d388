pub mod aggregate;
pub mod export;
pub mod query;

pub use aggregate::{Product, ProductCount, ProductId, ProductPayload};
pub use export::{export_file_name, DEFAULT_EXPORT_FILE_NAME};
pub use query::{ProductFilter, ProductPageQuery};
