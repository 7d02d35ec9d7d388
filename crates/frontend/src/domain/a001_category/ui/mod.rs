pub mod form;

pub use form::{CategoryForm, FormFeedback};
