//! Per-field state and validity derivation

use serde::{Deserialize, Serialize};

use super::validator::{is_email, Validator};

/// Contextual inputs a field was last evaluated with.
///
/// `set_value`/`set_touched` re-derive validity with this remembered
/// context instead of reaching across fields; the owning form refreshes it
/// on every `evaluate` call, so it is never stale across form-mediated
/// transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EvalContext {
    form_submitted: bool,
    match_value: Option<String>,
}

/// State and validation result for a single form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    name: String,
    value: String,
    changed: bool,
    touched: bool,
    validators: Vec<Validator>,
    match_target: Option<String>,
    error: Option<Validator>,
    #[serde(skip)]
    context: EvalContext,
}

impl FormField {
    /// Create a field with no validation rules
    pub fn new(name: &str, initial_value: &str) -> Self {
        Self::validated(name, initial_value, Vec::new())
    }

    /// Create a field with validation rules
    pub fn validated(name: &str, initial_value: &str, validators: Vec<Validator>) -> Self {
        Self {
            name: name.to_string(),
            value: initial_value.to_string(),
            changed: false,
            touched: false,
            validators,
            match_target: None,
            error: None,
            context: EvalContext::default(),
        }
    }

    /// Create a field that must equal another field's value
    pub fn matching(
        name: &str,
        initial_value: &str,
        validators: Vec<Validator>,
        match_target: &str,
    ) -> Self {
        Self {
            match_target: Some(match_target.to_string()),
            ..Self::validated(name, initial_value, validators)
        }
    }

    /// Get the field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value has been set at least once via `set_value`
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Whether a blur event has been received for this field
    pub fn touched(&self) -> bool {
        self.touched
    }

    /// Get the declared validation rules, in evaluation order
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Name of the field this one must equal, if any
    pub fn match_target(&self) -> Option<&str> {
        self.match_target.as_deref()
    }

    /// The rule currently failing, or `None` when the field is valid
    pub fn error(&self) -> Option<Validator> {
        self.error
    }

    /// Whether the field is valid. Always equals `error().is_none()`
    pub fn valid(&self) -> bool {
        self.error.is_none()
    }

    /// Whether this field declares the given rule
    pub fn has_validator(&self, validator: Validator) -> bool {
        self.validators.contains(&validator)
    }

    /// Set a new value, mark the field changed, and re-derive validity.
    /// Does not touch the field.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.changed = true;
        tracing::trace!("form field {} value changed", self.name);
        self.reevaluate();
    }

    /// Record a blur event and re-derive validity
    pub fn set_touched(&mut self, touched: bool) {
        self.touched = touched;
        tracing::trace!("form field {} touched={touched}", self.name);
        self.reevaluate();
    }

    /// Re-derive validity from the given context and remember it.
    ///
    /// Invoked by the owning form whenever any input to validity may have
    /// changed: this field's own value or touched flag, form submission, or
    /// the matched field's value. Callable on its own so the form can re-run
    /// it when the other side of a match pair changes.
    pub fn evaluate(&mut self, form_submitted: bool, match_target_value: Option<&str>) {
        self.context = EvalContext {
            form_submitted,
            match_value: match_target_value.map(str::to_string),
        };
        self.reevaluate();
    }

    /// Restore the blank, untouched, valid state. The name, validators, and
    /// match target are preserved; any initial default value is not.
    pub fn reset(&mut self) {
        self.value.clear();
        self.changed = false;
        self.touched = false;
        self.error = None;
        self.context = EvalContext::default();
    }

    /// First failing rule in declared order wins; all passing clears the error
    fn reevaluate(&mut self) {
        let form_submitted = self.context.form_submitted;
        let match_value = self.context.match_value.clone();
        self.error = self
            .validators
            .iter()
            .copied()
            .find(|&rule| !self.passes(rule, form_submitted, match_value.as_deref()));
    }

    fn passes(&self, rule: Validator, form_submitted: bool, match_value: Option<&str>) -> bool {
        match rule {
            // Never fails before submission: the field shows no error until
            // the user has committed to submitting
            Validator::Required => !form_submitted || !self.value.is_empty(),
            // Only fails once the user has actively edited the field, so a
            // default value never flashes an error
            Validator::Email => !(self.touched && self.changed) || is_email(&self.value),
            // Same gating; a missing target value counts as a mismatch
            Validator::MatchesField => {
                !(self.touched && self.changed) || match_value == Some(self.value.as_str())
            }
        }
    }
}
