pub mod api;
pub mod manual_entry;
pub mod state;
pub mod view;

pub use view::ImportCsvPage;
