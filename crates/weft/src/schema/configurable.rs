//! Inclusion rules and the template aggregate.
//!
//! A [`Configurable`] is one rule governing whether and how a
//! [`Section`] appears in output. There are exactly five rules; the enum is
//! closed so the render engine's match stays exhaustive when a rule is added.
//! A [`Template`] is a name plus an ordered list of configurables, frozen at
//! construction and rendered arbitrarily many times afterwards.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::params::ParameterBag;
use crate::schema::builder::TemplateBuilder;
use crate::schema::section::Section;

/// One rule for including a [`Section`] in rendered output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Configurable {
    /// Content that is always included.
    Unconditional { section: Section },

    /// Included iff the named parameter resolves to boolean `true`.
    Conditional { parameter: String, section: Section },

    /// Included iff the named parameter exists in the bag, whatever its
    /// value or kind.
    IfPresent { parameter: String, section: Section },

    /// Repeated N times, N taken from the named numeric parameter.
    Repetition { parameter: String, section: Section },

    /// Exactly one choice included, selected by matching the named string
    /// parameter against the choice keys.
    ///
    /// Choices keep insertion order. Keys are unique, non-blank, and the set
    /// is non-empty; the builder enforces all three before a `OneOf` can
    /// enter a template.
    OneOf {
        parameter: String,
        choices: Vec<(String, Section)>,
    },
}

/// A named, ordered list of [`Configurable`]s defining renderable output.
///
/// Templates are immutable: the only way to obtain one is through
/// [`Template::builder`], which validates names and choice sets as the schema
/// is assembled. Once built, a template may be shared freely across threads
/// and rendered concurrently.
///
/// # Example
///
/// ```rust
/// use weft::{ParameterBag, Section, Template};
///
/// let template = Template::builder("greeting")
///     .text("Hello, ")
///     .conditional(
///         "enabled",
///         Section::builder().dynamic("name").build(),
///     )
///     .build()
///     .unwrap();
///
/// let params = ParameterBag::empty()
///     .with("enabled", true)
///     .with("name", "World");
/// assert_eq!(template.render(&params).unwrap(), "Hello, World");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    name: String,
    schema: Vec<Configurable>,
}

impl Template {
    /// Starts a validated construction session for a template with this name.
    pub fn builder(name: impl Into<String>) -> TemplateBuilder {
        TemplateBuilder::new(name)
    }

    pub(crate) fn from_parts(name: String, schema: Vec<Configurable>) -> Self {
        Self { name, schema }
    }

    /// The template's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configurables in rendering order.
    pub fn schema(&self) -> &[Configurable] {
        &self.schema
    }

    /// Renders this template against a parameter bag.
    ///
    /// Convenience for [`crate::render`].
    pub fn render(&self, params: &ParameterBag) -> Result<String, DomainError> {
        crate::render::render(self, params)
    }
}
