//! Form field data supplied by the caller.
//!
//! A [`Form`] is a flat mapping from field name to [`FieldValue`]. It is
//! consumed once by the FDF encoder and owns no resources.

use std::collections::BTreeMap;
use std::fmt;

/// Value of a single form field.
///
/// Booleans map onto the conventional checkbox tokens (`Yes`/`Off`), numbers
/// render in their shortest decimal form, and everything else is text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text string value
    Text(String),
    /// Boolean value (for checkboxes)
    Boolean(bool),
    /// Numeric value
    Number(f64),
}

impl FieldValue {
    /// Render the value the way it appears inside the FDF `/V (...)` entry.
    ///
    /// `true` → `Yes`, `false` → `Off`; numbers use the shortest decimal
    /// representation with no trailing zeros and no exponent (`30.0` → `30`,
    /// `1.5` → `1.5`).
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Boolean(true) => "Yes".to_string(),
            FieldValue::Boolean(false) => "Off".to_string(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

/// The PDF form data: a key/value map of field names to values.
///
/// Backed by a `BTreeMap`, so iteration (and therefore FDF encoding) is
/// always in sorted field-name order.
///
/// # Example
///
/// ```
/// use fillpdf::Form;
///
/// let mut form = Form::new();
/// form.set("Name", "Alice");
/// form.set("Subscribed", true);
/// form.set("Age", 30.0);
/// assert_eq!(form.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    fields: BTreeMap<String, FieldValue>,
}

impl Form {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any previous value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Number of fields in the form.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Form {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Form::new();
        for (k, v) in iter {
            form.set(k, v);
        }
        form
    }
}

impl<K: Into<String>, V: Into<FieldValue>> Extend<(K, V)> for Form {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_rendering() {
        assert_eq!(FieldValue::Boolean(true).render(), "Yes");
        assert_eq!(FieldValue::Boolean(false).render(), "Off");
    }

    #[test]
    fn test_number_rendering_no_trailing_zeros() {
        assert_eq!(FieldValue::Number(1.0).render(), "1");
        assert_eq!(FieldValue::Number(30.0).render(), "30");
        assert_eq!(FieldValue::Number(1.5).render(), "1.5");
        assert_eq!(FieldValue::Number(-0.25).render(), "-0.25");
    }

    #[test]
    fn test_text_rendering() {
        assert_eq!(FieldValue::from("Alice").render(), "Alice");
        assert_eq!(FieldValue::from(String::from("Bob")).render(), "Bob");
    }

    #[test]
    fn test_set_replaces_existing() {
        let mut form = Form::new();
        form.set("a", "first");
        form.set("a", "second");
        assert_eq!(form.len(), 1);
        assert_eq!(form.get("a"), Some(&FieldValue::Text("second".into())));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let form = Form::new().with("zeta", 1.0).with("alpha", 2.0).with("mid", 3.0);
        let names: Vec<&str> = form.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_from_iterator() {
        let form: Form = vec![("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(form.len(), 2);
    }
}
