//! The interpretation engine: a template plus a parameter bag in, one output
//! string out.
//!
//! Rendering walks the template's configurables strictly in schema order and
//! concatenates whatever each contributes. The first failure anywhere in the
//! walk aborts the whole render; a caller never receives partial output next
//! to an error. Both inputs are immutable and nothing here touches shared
//! state, so any number of renders of the same template may run concurrently.
//!
//! Declared [`Parameter`](crate::Parameter) metadata is never consulted:
//! values are resolved purely by name against the bag, and only the kind a
//! configurable needs (boolean, number, string) is checked at the point of
//! use.

use std::fmt::Write as _;

use crate::error::DomainError;
use crate::params::{ParamValue, ParameterBag, ValueKind};
use crate::schema::{Configurable, Part, Section, Template};

/// Renders `template` against `params`.
///
/// # Example
///
/// ```rust
/// use weft::{render, ParameterBag, Template};
///
/// let template = Template::builder("repeat")
///     .repetition("n", "A")
///     .build()
///     .unwrap();
///
/// let out = render(&template, &ParameterBag::empty().with("n", 3)).unwrap();
/// assert_eq!(out, "AAA");
/// ```
pub fn render(template: &Template, params: &ParameterBag) -> Result<String, DomainError> {
    let mut out = String::new();
    for configurable in template.schema() {
        render_configurable(configurable, params, &mut out)?;
    }
    Ok(out)
}

fn render_configurable(
    configurable: &Configurable,
    params: &ParameterBag,
    out: &mut String,
) -> Result<(), DomainError> {
    match configurable {
        Configurable::Unconditional { section } => render_section(section, params, out),
        Configurable::Conditional { parameter, section } => {
            if bool_param(params, parameter)? {
                render_section(section, params, out)?;
            }
            Ok(())
        }
        Configurable::IfPresent { parameter, section } => {
            // Presence only; the value and its kind are irrelevant.
            if params.contains(parameter) {
                render_section(section, params, out)?;
            }
            Ok(())
        }
        Configurable::Repetition { parameter, section } => {
            let count = int_param(params, parameter)?;
            if count < 0 {
                return Err(DomainError::RepeatError { count });
            }
            // Every iteration renders identically: there is no per-iteration
            // index or sub-context.
            for _ in 0..count {
                render_section(section, params, out)?;
            }
            Ok(())
        }
        Configurable::OneOf { parameter, choices } => {
            let key = string_param(params, parameter)?;
            let section = choices
                .iter()
                .find(|(choice_key, _)| choice_key == key)
                .map(|(_, section)| section)
                .ok_or_else(|| DomainError::InvalidChoiceKey {
                    key: key.to_string(),
                })?;
            render_section(section, params, out)
        }
    }
}

fn render_section(
    section: &Section,
    params: &ParameterBag,
    out: &mut String,
) -> Result<(), DomainError> {
    for part in section.parts() {
        match part {
            Part::Static(content) => out.push_str(content),
            Part::Dynamic(parameter) => {
                let value = lookup(params, parameter)?;
                match value {
                    ParamValue::String(s) => out.push_str(s),
                    other => {
                        // write! to String cannot fail.
                        let _ = write!(out, "{}", other);
                    }
                }
            }
        }
    }
    Ok(())
}

fn lookup<'a>(params: &'a ParameterBag, name: &str) -> Result<&'a ParamValue, DomainError> {
    params
        .get(name)
        .ok_or_else(|| DomainError::missing_parameter(name))
}

fn bool_param(params: &ParameterBag, name: &str) -> Result<bool, DomainError> {
    match lookup(params, name)? {
        ParamValue::Boolean(b) => Ok(*b),
        other => Err(DomainError::type_mismatch(
            name,
            ValueKind::Boolean,
            other.kind(),
        )),
    }
}

fn int_param(params: &ParameterBag, name: &str) -> Result<i64, DomainError> {
    match lookup(params, name)? {
        ParamValue::Integer(n) => Ok(*n),
        // Any numeric kind is accepted; floats truncate toward zero.
        ParamValue::Float(n) => Ok(n.trunc() as i64),
        other => Err(DomainError::type_mismatch(
            name,
            ValueKind::Number,
            other.kind(),
        )),
    }
}

fn string_param<'a>(params: &'a ParameterBag, name: &str) -> Result<&'a str, DomainError> {
    match lookup(params, name)? {
        ParamValue::String(s) => Ok(s),
        other => Err(DomainError::type_mismatch(
            name,
            ValueKind::String,
            other.kind(),
        )),
    }
}
