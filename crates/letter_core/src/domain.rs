use serde::{Deserialize, Serialize};

use crate::error::NameError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);
    };
}

id_newtype!(NameId);

/// A stored name. Only [`crate::NameList`] creates these, so `name` is always trimmed
/// and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameEntry {
    id: NameId,
    name: String,
}

impl NameEntry {
    pub(crate) fn new(id: NameId, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> NameId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

pub fn validate_name(text: &str) -> Result<String, NameError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_name("  Alice \t").as_deref(), Ok("Alice"));
    }

    #[test]
    fn rejects_whitespace_only_input() {
        assert_eq!(validate_name(""), Err(NameError::Empty));
        assert_eq!(validate_name(" \n\t "), Err(NameError::Empty));
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(validate_name(" Mary Ann ").as_deref(), Ok("Mary Ann"));
    }
}
