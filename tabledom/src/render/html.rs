use std::fmt::{self, Write};

use crate::element::{Content, Element};

/// Serialize an element tree to an HTML string.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_html(root, &mut out);
    log::trace!("rendered <{}> tree to {} bytes of html", root.tag, out.len());
    out
}

/// Serialize an element tree into any `fmt::Write` sink.
pub fn write_html(element: &Element, out: &mut impl Write) -> fmt::Result {
    write!(out, "<{}", element.tag)?;

    if !element.classes.is_empty() {
        write!(out, " class=\"{}\"", escape_attr(&element.classes.join(" ")))?;
    }
    if !element.style.is_empty() {
        write!(out, " style=\"{}\"", escape_attr(&element.style.to_css()))?;
    }
    if let Some(span) = element.col_span {
        write!(out, " colspan=\"{span}\"")?;
    }
    for (name, value) in &element.attrs {
        write!(out, " {}=\"{}\"", name, escape_attr(value))?;
    }
    if element.checked == Some(true) {
        out.write_str(" checked")?;
    }
    if element.disabled {
        out.write_str(" disabled")?;
    }
    out.write_char('>')?;

    if element.tag.is_void() {
        return Ok(());
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.write_str(&escape_text(text))?,
        Content::Children(children) => {
            for child in children {
                write_html(child, out)?;
            }
        }
    }

    write!(out, "</{}>", element.tag)
}

pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
