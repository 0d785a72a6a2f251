//! In-memory implementation of QuerySet for testing and development

use crate::core::field::FieldValue;
use crate::core::order::OrderBy;
use crate::core::queryset::{Model, QuerySet, Sortable};

/// Query set over records held in a `Vec`
///
/// Native ordering sorts on the record attribute, with missing values
/// treated as null (nulls first when ascending, last when descending).
/// The last ordering applied is kept for inspection.
#[derive(Debug, Clone)]
pub struct MemoryQuerySet<T> {
    records: Vec<T>,
    fields: Vec<String>,
    ordering: Option<OrderBy>,
}

impl<T: Model> MemoryQuerySet<T> {
    /// Create a query set whose declared fields come from the model
    pub fn new(records: Vec<T>) -> Self {
        Self::with_fields(records, T::declared_fields().iter().copied())
    }
}

impl<T: Sortable> MemoryQuerySet<T> {
    /// Create a query set with an explicit list of declared fields
    pub fn with_fields<I, S>(records: Vec<T>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records,
            fields: fields.into_iter().map(Into::into).collect(),
            ordering: None,
        }
    }

    /// Last native ordering applied
    pub fn ordering(&self) -> Option<&OrderBy> {
        self.ordering.as_ref()
    }

    /// Records in their current order
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Sortable> QuerySet for MemoryQuerySet<T> {
    type Record = T;

    fn declares_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }

    fn order_by(mut self, order: &OrderBy) -> Self {
        let mut keyed: Vec<(FieldValue, T)> = self
            .records
            .into_iter()
            .map(|r| (r.attribute(&order.field).unwrap_or(FieldValue::Null), r))
            .collect();

        if order.descending {
            keyed.sort_by(|(a, _), (b, _)| b.sort_cmp(a));
        } else {
            keyed.sort_by(|(a, _), (b, _)| a.sort_cmp(b));
        }

        self.records = keyed.into_iter().map(|(_, r)| r).collect();
        self.ordering = Some(order.clone());
        self
    }

    fn into_records(self) -> Vec<T> {
        self.records
    }
}
