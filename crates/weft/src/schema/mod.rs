//! The schema data model and its validated construction API.
//!
//! A schema is built from three layers:
//!
//! - [`Part`] and [`Section`]: the content atoms — literal text and named
//!   placeholders, in rendering order.
//! - [`Configurable`]: the five inclusion rules governing whether and how a
//!   section appears in output.
//! - [`Template`]: the named, ordered list of configurables, produced by a
//!   fail-fast [`TemplateBuilder`] session.
//!
//! [`Parameter`] and [`DataType`] describe the parameters a template expects.
//! They are authoring metadata: the render engine resolves values by name
//! only and does not consult these declarations.

mod builder;
mod configurable;
mod datatype;
mod section;

pub use builder::{Choices, TemplateBuilder};
pub use configurable::{Configurable, Template};
pub use datatype::{DataType, Parameter};
pub use section::{Part, Section, SectionBuilder};
