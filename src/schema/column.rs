//! Declarative column specifications.

use super::value::Value;
use std::fmt;

/// Converts a raw string field into a typed value, or fails with a message.
pub type TransformFn = Box<dyn Fn(&str) -> Result<Value, String>>;

/// Checks a (possibly transformed) value, returning a failure message when
/// it is rejected.
pub type ValidateFn = Box<dyn Fn(&Value) -> Option<String>>;

/// Declarative configuration for one output column.
///
/// A column names the header(s) it binds to - aliases, first listed wins -
/// the output property it fills, and an optional processing pipeline. Built
/// with consuming `with_*` methods; once attached to a
/// [`Parser`](super::parser::Parser) the column is immutable.
///
/// # Example
///
/// ```rust
/// use longan::{Column, transforms};
///
/// let column = Column::new("Age", "age")
///     .with_alias("Years")
///     .with_transform(transforms::integer)
///     .with_default(0i64);
/// assert_eq!(column.aliases(), ["Age", "Years"]);
/// ```
pub struct Column {
    pub(crate) aliases: Vec<String>,
    pub(crate) property: String,
    pub(crate) nullable: bool,
    pub(crate) default: Option<Value>,
    pub(crate) transform: Option<TransformFn>,
    pub(crate) validate: Option<ValidateFn>,
    pub(crate) trim: Option<bool>,
    pub(crate) case_insensitive: Option<bool>,
}

impl Column {
    /// Declare a column matching header `alias` and filling `property`
    pub fn new(alias: impl Into<String>, property: impl Into<String>) -> Self {
        Column {
            aliases: vec![alias.into()],
            property: property.into(),
            nullable: false,
            default: None,
            transform: None,
            validate: None,
            trim: None,
            case_insensitive: None,
        }
    }

    /// Add a further acceptable header name; earlier aliases take priority
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Mark the column nullable: a missing header or empty field becomes
    /// [`Value::Null`] instead of an error
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Value used when the header is missing or the field is empty;
    /// `nullable` takes precedence when both are set
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Conversion from the raw string field into a typed value
    pub fn with_transform(
        mut self,
        transform: impl Fn(&str) -> Result<Value, String> + 'static,
    ) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    /// Check applied to the transformed value; returning `Some` rejects it
    pub fn with_validate(
        mut self,
        validate: impl Fn(&Value) -> Option<String> + 'static,
    ) -> Self {
        self.validate = Some(Box::new(validate));
        self
    }

    /// Override the parser-level trim default for this column
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = Some(trim);
        self
    }

    /// Override the parser-level case-insensitive matching default for this
    /// column
    pub fn with_case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = Some(enabled);
        self
    }

    /// Acceptable header names, in priority order
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Output property this column fills
    pub fn property(&self) -> &str {
        &self.property
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Transform/validate closures are opaque; print the declarative parts
        f.debug_struct("Column")
            .field("aliases", &self.aliases)
            .field("property", &self.property)
            .field("nullable", &self.nullable)
            .field("default", &self.default)
            .field("trim", &self.trim)
            .field("case_insensitive", &self.case_insensitive)
            .finish_non_exhaustive()
    }
}
