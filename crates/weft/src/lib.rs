//! # Weft - Declarative Content Schemas
//!
//! `weft` renders text from a declarative content schema (a [`Template`])
//! combined with a runtime set of named parameter values (a
//! [`ParameterBag`]). An author defines static text interleaved with
//! parameter-driven inclusion rules; there is no general-purpose templating
//! language, no expression syntax, and no loop scoping — just five precise
//! rules with precise failure semantics.
//!
//! ## Core Concepts
//!
//! - [`Template`]: a named, ordered list of [`Configurable`]s, built through
//!   a validated, fail-fast builder and immutable afterwards
//! - [`Configurable`]: one inclusion rule — unconditional, conditional on a
//!   boolean, gated on presence, repeated by a count, or selected from a
//!   choice set
//! - [`Section`] / [`Part`]: ordered static text and named placeholders
//! - [`ParameterBag`]: the immutable name-to-scalar map supplied per render
//! - [`DomainError`]: the closed taxonomy shared by construction and
//!   rendering; every operation yields a value or exactly one error
//!
//! ## Quick Start
//!
//! ```rust
//! use weft::{render, ParameterBag, Section, Template};
//!
//! let template = Template::builder("greeting")
//!     .text("Hello, ")
//!     .conditional("enabled", Section::builder().dynamic("name").build())
//!     .build()
//!     .unwrap();
//!
//! let params = ParameterBag::empty()
//!     .with("enabled", true)
//!     .with("name", "World");
//!
//! assert_eq!(render(&template, &params).unwrap(), "Hello, World");
//!
//! let params = ParameterBag::empty().with("enabled", false);
//! assert_eq!(render(&template, &params).unwrap(), "Hello, ");
//! ```
//!
//! ## Construction Is All-Or-Nothing
//!
//! The builder validates names and choice sets inline and short-circuits on
//! the first violation: a construction session ends with either a fully
//! valid template or exactly one [`DomainError`], never a partial schema.
//!
//! ```rust
//! use weft::{DomainError, Template};
//!
//! let err = Template::builder("T").conditional("", "x").build().unwrap_err();
//! assert!(matches!(err, DomainError::InvalidParameterName { .. }));
//! ```
//!
//! ## Concurrency
//!
//! Construction and rendering are synchronous pure functions. A built
//! [`Template`] and a [`ParameterBag`] are immutable, so one template may be
//! rendered from any number of threads simultaneously without locking.

pub mod error;
pub mod params;
pub mod render;
pub mod schema;

pub use error::{DomainError, ErrorClass};
pub use params::{ParamValue, ParameterBag, ValueKind};
pub use render::render;
pub use schema::{
    Choices, Configurable, DataType, Parameter, Part, Section, SectionBuilder, Template,
    TemplateBuilder,
};
