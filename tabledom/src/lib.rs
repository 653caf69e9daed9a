pub mod element;
pub mod render;
pub mod types;

pub use element::{find_all, find_element, Content, Element};
pub use render::{to_html, write_html};
pub use types::*;
