//! New-name entry field.

use letter_core::{NameId, NameList};

#[derive(Debug, Default, Clone)]
pub struct NameInputForm {
    pub text: String,
}

impl NameInputForm {
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Adds the field's content to `list` and clears the field. Blank content is left in
    /// place and nothing is added.
    pub fn submit(&mut self, list: &mut NameList) -> Option<NameId> {
        if !self.can_submit() {
            return None;
        }
        let id = list.add_name(&self.text)?;
        self.text.clear();
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_adds_trimmed_name_and_clears_field() {
        let mut list = NameList::new();
        let mut form = NameInputForm {
            text: "  Alice ".into(),
        };

        let id = form.submit(&mut list).expect("submitted");
        assert_eq!(list.get(0).map(|e| e.name()), Some("Alice"));
        assert_eq!(list.position(id), Some(0));
        assert!(form.text.is_empty());
        assert!(!form.can_submit());
    }

    #[test]
    fn whitespace_only_field_cannot_submit() {
        let mut list = NameList::new();
        let mut form = NameInputForm { text: "   ".into() };

        assert!(!form.can_submit());
        assert_eq!(form.submit(&mut list), None);
        assert!(list.is_empty());
        assert_eq!(form.text, "   ");
    }
}
