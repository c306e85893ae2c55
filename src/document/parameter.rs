use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    Text(String),
    Integer(i64),
    /// Length in feet.
    Length(f64),
}

impl ParameterValue {
    /// Text content, if this holds a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer content, if this holds an integer value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    fn kind_matches(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// A single parameter slot on an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub value: ParameterValue,
    pub read_only: bool,
}

/// Named parameters of one element.
///
/// Lookup is by exact name. Entries are kept sorted so iteration and
/// serialization stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    entries: BTreeMap<String, Parameter>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a writable parameter slot with an initial value.
    ///
    /// Re-declaring an existing name overwrites the slot.
    pub fn insert(&mut self, name: impl Into<String>, value: ParameterValue) {
        self.entries.insert(
            name.into(),
            Parameter {
                value,
                read_only: false,
            },
        );
    }

    /// Declares a read-only parameter slot.
    pub fn insert_read_only(&mut self, name: impl Into<String>, value: ParameterValue) {
        self.entries.insert(
            name.into(),
            Parameter {
                value,
                read_only: true,
            },
        );
    }

    /// Looks up a parameter by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.entries.get(name)
    }

    /// True when the named slot exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// True when the named slot exists and accepts writes.
    #[must_use]
    pub fn is_writable(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|p| !p.read_only)
    }

    /// Writes a value into an existing slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot does not exist, is read-only, or holds
    /// a different value kind.
    pub fn set(&mut self, name: &str, value: ParameterValue) -> Result<(), DocumentError> {
        let slot = self
            .entries
            .get_mut(name)
            .ok_or_else(|| DocumentError::UnknownParameter(name.to_owned()))?;
        if slot.read_only {
            return Err(DocumentError::ReadOnlyParameter(name.to_owned()));
        }
        if !slot.value.kind_matches(&value) {
            return Err(DocumentError::ParameterKindMismatch(name.to_owned()));
        }
        slot.value = value;
        Ok(())
    }

    /// Best-effort write in the manner of a host parameter call: returns
    /// `true` when the value was stored, `false` when the slot is missing,
    /// read-only, or holds a different kind.
    pub fn try_set(&mut self, name: &str, value: ParameterValue) -> bool {
        self.set(name, value).is_ok()
    }

    /// Iterates the slots in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.entries.iter().map(|(name, p)| (name.as_str(), p))
    }
}
