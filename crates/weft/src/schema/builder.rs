//! Validated, fail-fast template construction.
//!
//! [`TemplateBuilder`] accumulates configurables and top-level content, and
//! enforces the name and choice-set invariants before anything enters a
//! schema. The error-reporting channel is a sticky first-error slot: as soon
//! as any call records a [`DomainError`], every later call becomes a no-op
//! and [`build`](TemplateBuilder::build) reports that error. A construction
//! session therefore ends with either a fully valid [`Template`] or exactly
//! one error, never a partially built schema.

use crate::error::DomainError;
use crate::schema::configurable::{Configurable, Template};
use crate::schema::section::{Part, Section};

fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Ordered accumulator for the choices of a
/// [`one_of`](TemplateBuilder::one_of) configurable.
///
/// Duplicate and blank keys are accepted here and rejected by `one_of`, so
/// the reported error can name the first offending key.
///
/// ```rust
/// use weft::{Choices, Template};
///
/// let template = Template::builder("T")
///     .one_of(
///         "mode",
///         Choices::new()
///             .choice("terse", "short form")
///             .choice("verbose", "long form"),
///     )
///     .build()
///     .unwrap();
/// assert_eq!(template.schema().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Choices {
    entries: Vec<(String, Section)>,
}

impl Choices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one keyed choice, preserving insertion order.
    pub fn choice(mut self, key: impl Into<String>, section: impl Into<Section>) -> Self {
        self.entries.push((key.into(), section.into()));
        self
    }

    fn into_entries(self) -> Vec<(String, Section)> {
        self.entries
    }
}

impl<K, S> FromIterator<(K, S)> for Choices
where
    K: Into<String>,
    S: Into<Section>,
{
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, section)| (key.into(), section.into()))
                .collect(),
        }
    }
}

/// Fluent construction session for a [`Template`].
///
/// Obtained from [`Template::builder`]. Section arguments are
/// `impl Into<Section>`, so a bare string, a single [`Part`], or a
/// [`Section::builder`] result all work.
#[derive(Debug)]
pub struct TemplateBuilder {
    name: String,
    configurables: Vec<Configurable>,
    top_level: Vec<Part>,
    error: Option<DomainError>,
}

impl TemplateBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let error = if is_blank(&name) {
            Some(DomainError::invalid_name("Template.name", "blank"))
        } else {
            None
        };
        Self {
            name,
            configurables: Vec::new(),
            top_level: Vec::new(),
            error,
        }
    }

    /// Appends static text to the implicit top-level section.
    pub fn text(mut self, content: impl Into<String>) -> Self {
        if self.error.is_none() {
            self.top_level.push(Part::Static(content.into()));
        }
        self
    }

    /// Appends a dynamic placeholder to the implicit top-level section.
    pub fn dynamic(mut self, parameter: impl Into<String>) -> Self {
        if self.error.is_none() {
            self.top_level.push(Part::Dynamic(parameter.into()));
        }
        self
    }

    /// Appends a section rendered iff the named boolean parameter is `true`.
    pub fn conditional(self, parameter: impl Into<String>, section: impl Into<Section>) -> Self {
        let section = section.into();
        self.push_named(parameter, |parameter| Configurable::Conditional {
            parameter,
            section,
        })
    }

    /// Appends a section rendered iff the named parameter is present in the
    /// bag, whatever its value.
    pub fn optional(self, parameter: impl Into<String>, section: impl Into<Section>) -> Self {
        let section = section.into();
        self.push_named(parameter, |parameter| Configurable::IfPresent {
            parameter,
            section,
        })
    }

    /// Appends a section repeated as many times as the named numeric
    /// parameter indicates.
    pub fn repetition(self, parameter: impl Into<String>, section: impl Into<Section>) -> Self {
        let section = section.into();
        self.push_named(parameter, |parameter| Configurable::Repetition {
            parameter,
            section,
        })
    }

    /// Appends a choice set from which the named string parameter selects
    /// exactly one section.
    ///
    /// The choice set is validated before the parameter name: it must be
    /// non-empty, free of duplicate keys (the first duplicate is reported),
    /// and free of blank keys.
    pub fn one_of(mut self, parameter: impl Into<String>, choices: impl Into<Choices>) -> Self {
        if self.error.is_some() {
            return self;
        }
        let entries = choices.into().into_entries();
        if let Err(err) = validate_choices(&entries) {
            self.error = Some(err);
            return self;
        }
        self.push_named(parameter, |parameter| Configurable::OneOf {
            parameter,
            choices: entries,
        })
    }

    /// Validates the accumulated schema and freezes it into a [`Template`].
    ///
    /// If any top-level content was appended, it is wrapped in an
    /// [`Configurable::Unconditional`] inserted at index 0.
    pub fn build(mut self) -> Result<Template, DomainError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.top_level.is_empty() {
            let section = Section::new(self.top_level);
            self.configurables
                .insert(0, Configurable::Unconditional { section });
        }
        Ok(Template::from_parts(self.name, self.configurables))
    }

    fn push_named(
        mut self,
        parameter: impl Into<String>,
        make: impl FnOnce(String) -> Configurable,
    ) -> Self {
        if self.error.is_some() {
            return self;
        }
        let parameter = parameter.into();
        if is_blank(&parameter) {
            self.error = Some(DomainError::InvalidParameterName { name: parameter });
            return self;
        }
        self.configurables.push(make(parameter));
        self
    }
}

impl<K, S> From<Vec<(K, S)>> for Choices
where
    K: Into<String>,
    S: Into<Section>,
{
    fn from(entries: Vec<(K, S)>) -> Self {
        entries.into_iter().collect()
    }
}

fn validate_choices(entries: &[(String, Section)]) -> Result<(), DomainError> {
    if entries.is_empty() {
        return Err(DomainError::MissingRequired {
            what: "choices".into(),
        });
    }
    let mut seen = std::collections::HashSet::new();
    for (key, _) in entries {
        if !seen.insert(key.as_str()) {
            return Err(DomainError::duplicate_key(key.clone(), "OneOf.choices"));
        }
    }
    if entries.iter().any(|(key, _)| is_blank(key)) {
        return Err(DomainError::invalid_name("OneOf.choiceKey", "blank key"));
    }
    Ok(())
}
