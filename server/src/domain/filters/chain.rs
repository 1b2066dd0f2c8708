//! Ordered collection of predicates and SQL composition

use super::types::Predicate;

/// Predicates decoded from one filter string, in input order.
///
/// Only the parser appends to a chain; once handed out it is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChain {
    predicates: Vec<Predicate>,
}

impl FilterChain {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, predicate: Predicate) -> &mut Self {
        self.predicates.push(predicate);
        self
    }

    /// First predicate whose field name matches exactly
    pub fn get(&self, field: &str) -> Option<&Predicate> {
        self.predicates.iter().find(|p| p.field_name() == field)
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Predicate> {
        self.predicates.iter()
    }

    /// Combined WHERE fragment (joined with `AND`) and parameters in chain order
    pub fn render(&self) -> (String, Vec<String>) {
        let mut fragments = Vec::with_capacity(self.predicates.len());
        let mut params = Vec::new();

        for predicate in &self.predicates {
            let (fragment, values) = predicate.render();
            fragments.push(fragment);
            params.extend(values);
        }

        (fragments.join(" AND "), params)
    }
}

impl<'a> IntoIterator for &'a FilterChain {
    type Item = &'a Predicate;
    type IntoIter = std::slice::Iter<'a, Predicate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
