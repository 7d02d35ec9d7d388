pub mod page_labels;
pub mod registry;

pub use page_labels::{is_known_page, page_label_for_key, DEFAULT_PAGE, PAGE_KEYS};
pub use registry::render_page_content;
