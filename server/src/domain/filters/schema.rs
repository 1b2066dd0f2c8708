//! Resource schema hooks used while parsing

/// Field and value validation for one filterable resource type.
///
/// Field names passed in are already normalized to UpperCamelCase; values are
/// already sanitized.
pub trait FilterSchema {
    /// Whether `field` is a filterable attribute of the resource
    fn has_field(&self, field: &str) -> bool;

    /// Whether `value` can be assigned to the declared type of `field`
    fn accepts_value(&self, field: &str, value: &str) -> bool;
}

impl<S: FilterSchema + ?Sized> FilterSchema for &S {
    fn has_field(&self, field: &str) -> bool {
        (**self).has_field(field)
    }

    fn accepts_value(&self, field: &str, value: &str) -> bool {
        (**self).accepts_value(field, value)
    }
}
