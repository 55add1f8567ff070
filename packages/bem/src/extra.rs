use serde::{Deserialize, Serialize};

/// Class names outside BEM semantics, appended verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extra {
    Single(String),
    List(Vec<String>),
}

impl Extra {
    pub fn normalize(&self) -> Vec<&str> {
        match self {
            Extra::Single(class) if class.is_empty() => vec![],
            Extra::Single(class) => vec![class.as_str()],
            Extra::List(classes) => classes.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Extra {
    fn from(class: &str) -> Self {
        Extra::Single(class.to_string())
    }
}

impl From<String> for Extra {
    fn from(class: String) -> Self {
        Extra::Single(class)
    }
}

impl From<Vec<String>> for Extra {
    fn from(classes: Vec<String>) -> Self {
        Extra::List(classes)
    }
}

impl From<Vec<&str>> for Extra {
    fn from(classes: Vec<&str>) -> Self {
        Extra::List(classes.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Extra {
    fn from(classes: [&str; N]) -> Self {
        Extra::List(classes.into_iter().map(String::from).collect())
    }
}
