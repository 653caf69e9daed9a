use std::collections::BTreeMap;

use super::Content;
use crate::types::{Style, Tag};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Stable identity among siblings. Used for lookups, never rendered.
    pub key: Option<String>,

    pub tag: Tag,
    pub content: Content,

    // Presentation
    pub classes: Vec<String>,
    pub style: Style,

    // Table structure
    pub col_span: Option<u16>,

    // Interaction
    pub disabled: bool,
    pub checked: Option<bool>,

    /// Extra attributes, rendered verbatim (`data-*`, `aria-*`, `value`, ...).
    pub attrs: BTreeMap<String, String>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::new(Tag::Thead)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::Tbody)
    }

    pub fn tr() -> Self {
        Self::new(Tag::Tr)
    }

    pub fn th() -> Self {
        Self::new(Tag::Th)
    }

    pub fn td() -> Self {
        Self::new(Tag::Td)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new(Tag::Button).text_content(label)
    }

    pub fn checkbox(checked: bool) -> Self {
        Self {
            tag: Tag::Input,
            checked: Some(checked),
            ..Default::default()
        }
        .attr("type", "checkbox")
    }

    /// A text run with no wrapping element of its own.
    pub fn text(content: impl Into<String>) -> Self {
        Self::span().text_content(content)
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn text_content(mut self, content: impl Into<String>) -> Self {
        self.content = Content::Text(content.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.classes
            .extend(class.split_whitespace().map(str::to_string));
        self
    }

    /// Add `class` only when `condition` holds.
    pub fn class_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn col_span(mut self, span: u16) -> Self {
        self.col_span = Some(span);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self = self.child(child);
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_value(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_value).collect(),
        }
    }
}
