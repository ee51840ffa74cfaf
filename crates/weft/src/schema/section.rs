//! Sections: ordered runs of static and dynamic content.
//!
//! A [`Section`] is the atomic unit of renderable content: an ordered list of
//! [`Part`]s, where each part is either literal text or a named placeholder
//! resolved against the parameter bag at render time. Part order is rendering
//! order.

use serde::{Deserialize, Serialize};

/// One segment of a section's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Part {
    /// Literal text, emitted verbatim.
    Static(String),
    /// A placeholder naming the parameter whose value is substituted.
    Dynamic(String),
}

/// An ordered sequence of [`Part`]s.
///
/// Sections are immutable once built. Construct them with
/// [`Section::builder`], or convert directly from a string or single part:
///
/// ```rust
/// use weft::{Part, Section};
///
/// let from_text: Section = "static only".into();
/// let from_part: Section = Part::Dynamic("name".into()).into();
/// let built = Section::builder()
///     .text("Hello, ")
///     .dynamic("name")
///     .build();
///
/// assert_eq!(built.parts().len(), 2);
/// assert_eq!(from_text.parts().len(), 1);
/// assert_eq!(from_part.parts().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    parts: Vec<Part>,
}

impl Section {
    /// A section over an explicit list of parts.
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    /// Starts a fluent [`SectionBuilder`].
    pub fn builder() -> SectionBuilder {
        SectionBuilder::default()
    }

    /// The parts in rendering order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Whether the section holds no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl From<Part> for Section {
    fn from(part: Part) -> Self {
        Self { parts: vec![part] }
    }
}

impl From<&str> for Section {
    fn from(text: &str) -> Self {
        Self {
            parts: vec![Part::Static(text.to_string())],
        }
    }
}

impl From<String> for Section {
    fn from(text: String) -> Self {
        Self {
            parts: vec![Part::Static(text)],
        }
    }
}

/// Fluent accumulator for a [`Section`].
///
/// Appending parts cannot fail, so the builder has no error channel; the
/// terminal [`build`](SectionBuilder::build) always yields a section.
#[derive(Debug, Default)]
pub struct SectionBuilder {
    parts: Vec<Part>,
}

impl SectionBuilder {
    /// Appends a static text part.
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.parts.push(Part::Static(content.into()));
        self
    }

    /// Appends a dynamic placeholder part for the named parameter.
    pub fn dynamic(mut self, parameter: impl Into<String>) -> Self {
        self.parts.push(Part::Dynamic(parameter.into()));
        self
    }

    /// Freezes the accumulated parts into a [`Section`].
    pub fn build(self) -> Section {
        Section { parts: self.parts }
    }
}

impl From<SectionBuilder> for Section {
    fn from(builder: SectionBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let section = Section::builder()
            .text("a")
            .dynamic("x")
            .text("b")
            .build();
        assert_eq!(
            section.parts(),
            &[
                Part::Static("a".into()),
                Part::Dynamic("x".into()),
                Part::Static("b".into()),
            ]
        );
    }

    #[test]
    fn test_from_str_is_single_static_part() {
        let section: Section = "hello".into();
        assert_eq!(section.parts(), &[Part::Static("hello".into())]);
    }

    #[test]
    fn test_from_part() {
        let section: Section = Part::Dynamic("name".into()).into();
        assert_eq!(section.parts(), &[Part::Dynamic("name".into())]);
    }

    #[test]
    fn test_empty_section() {
        let section = Section::builder().build();
        assert!(section.is_empty());
    }
}
