pub mod aggregate;

pub use aggregate::{month_label, Sale, SaleId};
