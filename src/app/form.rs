//! Mint form editing state.

use super::modes::FormField;
use crate::domain::{MintFields, ValidityReport};

/// Values typed into the mint form plus the result of the last submission.
#[derive(Debug, Clone, Default)]
pub struct MintForm {
    pub fields: MintFields,
    /// Validity from the last failed submit; all valid until then.
    pub validity: ValidityReport,
}

impl MintForm {
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Model => &self.fields.model,
            FormField::Year => &self.fields.year,
            FormField::Price => &self.fields.price,
            FormField::Image => &self.fields.image,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.fields.name,
            FormField::Model => &mut self.fields.model,
            FormField::Year => &mut self.fields.year,
            FormField::Price => &mut self.fields.price,
            FormField::Image => &mut self.fields.image,
        }
    }

    #[must_use]
    pub const fn is_valid(&self, field: FormField) -> bool {
        match field {
            FormField::Name => self.validity.name,
            FormField::Model => self.validity.model,
            FormField::Year => self.validity.year,
            FormField::Price => self.validity.price,
            FormField::Image => self.validity.image,
        }
    }

    /// Editing a field clears its invalid marker.
    pub fn push(&mut self, field: FormField, c: char) {
        self.value_mut(field).push(c);
        self.mark_valid(field);
    }

    pub fn pop(&mut self, field: FormField) {
        self.value_mut(field).pop();
        self.mark_valid(field);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn mark_valid(&mut self, field: FormField) {
        match field {
            FormField::Name => self.validity.name = true,
            FormField::Model => self.validity.model = true,
            FormField::Year => self.validity.year = true,
            FormField::Price => self.validity.price = true,
            FormField::Image => self.validity.image = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_clears_invalid_marker() {
        let mut form = MintForm::default();
        form.validity.name = false;
        form.push(FormField::Name, 'B');
        assert!(form.is_valid(FormField::Name));
        assert_eq!(form.value(FormField::Name), "B");
        form.pop(FormField::Name);
        assert_eq!(form.value(FormField::Name), "");
    }
}
