//! vCard parameter types.

/// Well-known parameter names.
pub mod params {
    pub const ENCODING: &str = "ENCODING";
    pub const LANGUAGE: &str = "LANGUAGE";
    pub const MEDIATYPE: &str = "MEDIATYPE";
    pub const TYPE: &str = "TYPE";
    pub const VALUE: &str = "VALUE";
}

/// A single vCard parameter.
///
/// Parameters can have multiple values (e.g., TYPE=home,work).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values.
    pub values: Vec<String>,
}

impl Parameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }
}

/// The parameters attached to one property.
///
/// An ordered mapping from case-insensitive parameter name to one or more
/// string values. Repeated entries for the same name are preserved in
/// insertion order, never deduplicated. Unknown names are stored opaquely;
/// no validation happens at this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<Parameter>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first value recorded for the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .and_then(Parameter::value)
    }

    /// Returns every value recorded for the given name, in insertion order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|p| p.name.eq_ignore_ascii_case(name))
            .flat_map(|p| p.values.iter().map(String::as_str))
            .collect()
    }

    /// Replaces all values for the given name with the single given value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.remove(name);
        self.entries.push(Parameter::new(name, value));
    }

    /// Appends a value for the given name without removing existing ones.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        self.entries.push(Parameter::new(name, value));
    }

    /// Removes every entry for the given name.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|p| !p.name.eq_ignore_ascii_case(name));
    }

    /// Appends an already-built parameter (used by the lexer).
    pub fn push(&mut self, param: Parameter) {
        self.entries.push(param);
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Parameter] {
        &self.entries
    }

    /// Returns whether the set holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // --- Typed accessors over well-known names ---

    /// Returns the LANGUAGE parameter value.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.get(params::LANGUAGE)
    }

    /// Sets the LANGUAGE parameter.
    pub fn set_language(&mut self, tag: impl Into<String>) {
        self.set(params::LANGUAGE, tag);
    }

    /// Returns the first TYPE parameter value.
    #[must_use]
    pub fn type_value(&self) -> Option<&str> {
        self.get(params::TYPE)
    }

    /// Sets the TYPE parameter.
    pub fn set_type(&mut self, value: impl Into<String>) {
        self.set(params::TYPE, value);
    }

    /// Returns the MEDIATYPE parameter value.
    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        self.get(params::MEDIATYPE)
    }

    /// Sets the MEDIATYPE parameter.
    pub fn set_media_type(&mut self, value: impl Into<String>) {
        self.set(params::MEDIATYPE, value);
    }

    /// Returns the ENCODING parameter value.
    #[must_use]
    pub fn encoding(&self) -> Option<&str> {
        self.get(params::ENCODING)
    }

    /// Sets the ENCODING parameter.
    pub fn set_encoding(&mut self, value: impl Into<String>) {
        self.set(params::ENCODING, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_single_value() {
        let param = Parameter::new("type", "home");
        assert_eq!(param.name, "TYPE");
        assert_eq!(param.value(), Some("home"));
    }

    #[test]
    fn parameter_has_value() {
        let param = Parameter::multi("TYPE", vec!["home".into(), "work".into()]);
        assert!(param.has_value("home"));
        assert!(param.has_value("HOME"));
        assert!(!param.has_value("cell"));
    }

    #[test]
    fn set_replaces_all_values() {
        let mut set = ParameterSet::new();
        set.add("TYPE", "home");
        set.add("TYPE", "work");
        set.set("TYPE", "cell");

        assert_eq!(set.get_all("TYPE"), vec!["cell"]);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut set = ParameterSet::new();
        set.add("TYPE", "home");
        set.add("LANGUAGE", "en");
        set.add("type", "work");

        assert_eq!(set.get("TYPE"), Some("home"));
        assert_eq!(set.get_all("TYPE"), vec!["home", "work"]);
    }

    #[test]
    fn names_are_case_insensitive() {
        let mut set = ParameterSet::new();
        set.set("Language", "fr");

        assert_eq!(set.language(), Some("fr"));
        assert_eq!(set.get("LANGUAGE"), Some("fr"));
        set.remove("language");
        assert!(set.is_empty());
    }

    #[test]
    fn unknown_names_stored_opaquely() {
        let mut set = ParameterSet::new();
        set.add("X-CUSTOM", "anything");
        assert_eq!(set.get("x-custom"), Some("anything"));
    }

    #[test]
    fn typed_accessors() {
        let mut set = ParameterSet::new();
        set.set_language("en-US");
        set.set_type("png");
        set.set_media_type("image/png");

        assert_eq!(set.language(), Some("en-US"));
        assert_eq!(set.type_value(), Some("png"));
        assert_eq!(set.media_type(), Some("image/png"));
    }
}
