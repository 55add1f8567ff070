use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value attached to a key in a modifier flag map.
///
/// `false` and `null` are inactive; every other value is active,
/// including `0` and `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Other(Value),
}

impl FlagValue {
    pub fn is_active(&self) -> bool {
        match self {
            FlagValue::Bool(active) => *active,
            FlagValue::Other(Value::Null) => false,
            FlagValue::Other(_) => true,
        }
    }
}

impl From<bool> for FlagValue {
    fn from(active: bool) -> Self {
        FlagValue::Bool(active)
    }
}

impl From<Option<bool>> for FlagValue {
    fn from(active: Option<bool>) -> Self {
        match active {
            Some(active) => FlagValue::Bool(active),
            None => FlagValue::Other(Value::Null),
        }
    }
}

/// Modifier input: one name, an ordered list of names, or a flag map.
///
/// Flag maps keep their insertion order; only keys whose value is
/// active (see [`FlagValue`]) become modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Modifiers {
    Single(String),
    List(Vec<String>),
    Flags(IndexMap<String, FlagValue>),
}

impl Modifiers {
    /// Active modifier names, in order
    pub fn normalize(&self) -> Vec<&str> {
        match self {
            Modifiers::Single(name) if name.is_empty() => vec![],
            Modifiers::Single(name) => vec![name.as_str()],
            Modifiers::List(names) => names.iter().map(String::as_str).collect(),
            Modifiers::Flags(flags) => flags
                .iter()
                .filter(|(_, value)| value.is_active())
                .map(|(key, _)| key.as_str())
                .collect(),
        }
    }
}

impl From<&str> for Modifiers {
    fn from(name: &str) -> Self {
        Modifiers::Single(name.to_string())
    }
}

impl From<String> for Modifiers {
    fn from(name: String) -> Self {
        Modifiers::Single(name)
    }
}

impl From<Vec<String>> for Modifiers {
    fn from(names: Vec<String>) -> Self {
        Modifiers::List(names)
    }
}

impl From<Vec<&str>> for Modifiers {
    fn from(names: Vec<&str>) -> Self {
        Modifiers::List(names.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Modifiers {
    fn from(names: [&str; N]) -> Self {
        Modifiers::List(names.into_iter().map(String::from).collect())
    }
}

impl From<IndexMap<String, FlagValue>> for Modifiers {
    fn from(flags: IndexMap<String, FlagValue>) -> Self {
        Modifiers::Flags(flags)
    }
}

impl From<IndexMap<String, Option<bool>>> for Modifiers {
    fn from(flags: IndexMap<String, Option<bool>>) -> Self {
        Modifiers::Flags(flags.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<IndexMap<String, bool>> for Modifiers {
    fn from(flags: IndexMap<String, bool>) -> Self {
        Modifiers::Flags(flags.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<const N: usize> From<[(&str, bool); N]> for Modifiers {
    fn from(flags: [(&str, bool); N]) -> Self {
        Modifiers::Flags(
            flags
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, Option<bool>); N]> for Modifiers {
    fn from(flags: [(&str, Option<bool>); N]) -> Self {
        Modifiers::Flags(
            flags
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect(),
        )
    }
}
