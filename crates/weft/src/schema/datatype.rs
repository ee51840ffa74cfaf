//! Declared parameter types.
//!
//! A schema author can describe the parameters a template expects with
//! [`Parameter`] and [`DataType`]. This catalogue is intent metadata for
//! tooling and documentation: the render engine resolves values by name
//! against the bag and never cross-checks them against these declarations.

use serde::{Deserialize, Serialize};

/// The type of data a [`Parameter`] is declared to hold.
///
/// The shape is recursive so nested structured parameters can be described:
/// a `List` of `Object`s, an `Object` whose property is another `Object`, and
/// so on. Values are built functionally, so no cycles can exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataType {
    /// A string of text.
    String,
    /// A numeric value, integer or floating point.
    Number,
    /// A true/false value.
    Boolean,
    /// One of a predefined set of string values.
    Enum(Vec<String>),
    /// A list whose elements all share one declared type.
    List(Box<DataType>),
    /// A nested object described by its own set of properties.
    Object(Vec<Parameter>),
}

/// A named, described parameter declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub description: String,
    pub data_type: DataType,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        data_type: DataType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            data_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_declaration() {
        let address = DataType::Object(vec![
            Parameter::new("street", "Street line", DataType::String),
            Parameter::new("zip", "Postal code", DataType::String),
        ]);
        let user = Parameter::new(
            "user",
            "The user record",
            DataType::Object(vec![
                Parameter::new("name", "Display name", DataType::String),
                Parameter::new("addresses", "Known addresses", DataType::List(Box::new(address))),
            ]),
        );

        match &user.data_type {
            DataType::Object(props) => assert_eq!(props.len(), 2),
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let declared = Parameter::new(
            "mode",
            "Output mode",
            DataType::Enum(vec!["terse".into(), "verbose".into()]),
        );
        let json = serde_json::to_string(&declared).unwrap();
        let back: Parameter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, declared);
    }
}
