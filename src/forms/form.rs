//! Form orchestration and aggregate state

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

use super::field::FormField;
use super::validator::Validator;

/// Aggregate state for one logical form.
///
/// Owns its fields exclusively, keyed by name with insertion order
/// preserved. Constructed once per page mount, mutated in place by the
/// three event handlers (`set_field_value`, `set_field_touched`,
/// `submit`), and dropped or `reset` when the caller is done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    fields: Vec<FormField>,
    submitted: bool,
}

impl Form {
    /// Build a form from its fields. A duplicate name replaces the earlier
    /// field while keeping its original position.
    pub fn new(fields: Vec<FormField>) -> Self {
        let mut unique: Vec<FormField> = Vec::with_capacity(fields.len());
        for field in fields {
            match unique.iter_mut().find(|f| f.name() == field.name()) {
                Some(existing) => *existing = field,
                None => unique.push(field),
            }
        }
        Self {
            fields: unique,
            submitted: false,
        }
    }

    /// Look up a field by name. An unknown name is a caller bug and is
    /// reported as a typed error, not retried.
    pub fn get_field(&self, name: &str) -> Result<&FormField> {
        self.fields
            .iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Number of fields on the form
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Iterate the fields in insertion order
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    /// True once a submit event has been accepted
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// True iff every field is valid. Derived from the fields on every
    /// call, never cached.
    pub fn valid(&self) -> bool {
        self.fields.iter().all(FormField::valid)
    }

    /// True iff any field has changed. Derived from the fields on every
    /// call, never cached.
    pub fn changed(&self) -> bool {
        self.fields.iter().any(FormField::changed)
    }

    /// Forward a value-changed event to a field, then re-derive its validity
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let index = self.field_index(name)?;
        self.fields[index].set_value(value);
        self.evaluate_field(index)
    }

    /// Forward a blur event to a field, then re-derive its validity
    pub fn set_field_touched(&mut self, name: &str, touched: bool) -> Result<()> {
        let index = self.field_index(name)?;
        self.fields[index].set_touched(touched);
        self.evaluate_field(index)
    }

    /// Accept a submit event and re-evaluate every field, so all
    /// not-yet-surfaced required errors appear at once
    pub fn submit(&mut self) -> Result<()> {
        self.submitted = true;
        tracing::debug!("form submitted with {} fields", self.fields.len());
        for index in 0..self.fields.len() {
            self.evaluate_field(index)?;
        }
        Ok(())
    }

    /// Reset every field and clear the submitted flag, returning the form
    /// to the state of a freshly constructed one
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.submitted = false;
        tracing::debug!("form reset");
    }

    fn field_index(&self, name: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|f| f.name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Re-derive one field's validity with the context its validators need.
    ///
    /// The submitted flag is passed only to fields declaring `Required`;
    /// the match target's current value only to fields declaring
    /// `MatchesField`. The other side of a match pair is not re-evaluated
    /// here: the target picks the change up on its own next event.
    fn evaluate_field(&mut self, index: usize) -> Result<()> {
        let form_submitted =
            self.submitted && self.fields[index].has_validator(Validator::Required);
        let match_value = if self.fields[index].has_validator(Validator::MatchesField) {
            let target = self.fields[index]
                .match_target()
                .map(str::to_string)
                .ok_or_else(|| {
                    FormError::MissingMatchTarget(self.fields[index].name().to_string())
                })?;
            Some(self.get_field(&target)?.value().to_string())
        } else {
            None
        };
        self.fields[index].evaluate(form_submitted, match_value.as_deref());
        Ok(())
    }
}
