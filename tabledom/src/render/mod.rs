mod html;

pub use html::{escape_attr, escape_text, to_html, write_html};
