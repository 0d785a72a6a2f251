//! Sorting query results
//!
//! A [`QuerySet`] orders its records natively (typically in the database)
//! on the fields its model declares. Computed attributes are not known to
//! the query engine, so [`sort_queryset`] fetches the records and sorts them
//! in memory instead. Relation paths (`author__name`) are always left to the
//! query engine.

use crate::core::error::SortError;
use crate::core::field::FieldValue;
use crate::core::order::OrderBy;

/// Records whose attributes can be read by name
pub trait Sortable {
    /// Value of the attribute `name`, or `None` if the record has no such attribute
    ///
    /// This covers both persisted fields and computed attributes.
    fn attribute(&self, name: &str) -> Option<FieldValue>;
}

/// Record types backed by a persisted model
pub trait Model: Sortable {
    /// Fields the query engine can order by
    fn declared_fields() -> &'static [&'static str];
}

/// A lazily evaluated collection with native ordering
pub trait QuerySet: Sized {
    type Record: Sortable;

    /// Whether `name` is a field the query engine knows
    fn declares_field(&self, name: &str) -> bool;

    /// Order natively
    ///
    /// `order` formats back to the full specification, `-` included.
    fn order_by(self, order: &OrderBy) -> Self;

    /// Evaluate and return the records
    fn into_records(self) -> Vec<Self::Record>;
}

/// Result of [`sort_queryset`]
pub enum Ordered<Q: QuerySet> {
    /// Unchanged or natively ordered query set
    Query(Q),

    /// Records sorted in memory
    Memory(Vec<Q::Record>),
}

impl<Q> std::fmt::Debug for Ordered<Q>
where
    Q: QuerySet + std::fmt::Debug,
    Q::Record: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ordered::Query(queryset) => f.debug_tuple("Query").field(queryset).finish(),
            Ordered::Memory(records) => f.debug_tuple("Memory").field(records).finish(),
        }
    }
}

impl<Q: QuerySet> Ordered<Q> {
    /// Whether the in-memory fallback was used
    pub fn is_memory(&self) -> bool {
        matches!(self, Ordered::Memory(_))
    }

    /// Evaluate into records, in order
    pub fn into_records(self) -> Vec<Q::Record> {
        match self {
            Ordered::Query(queryset) => queryset.into_records(),
            Ordered::Memory(records) => records,
        }
    }
}

/// Whether `order` has to be sorted in memory rather than by the query engine
pub fn needs_memory_sort<Q: QuerySet>(queryset: &Q, order: &OrderBy) -> bool {
    if order.is_relational() {
        return false;
    }

    !queryset.declares_field(&order.field)
}

/// Order a query set by a sort specification
///
/// - empty `order_by`: the query set is returned as is
/// - relation paths and declared fields: native ordering
/// - anything else: in-memory sort on the record attribute
///
/// # Errors
///
/// In-memory sorting fails with [`SortError::MissingField`] for a bare `-`
/// and with [`SortError::MissingAttribute`] when records lack the attribute.
pub fn sort_queryset<Q: QuerySet>(queryset: Q, order_by: &str) -> Result<Ordered<Q>, SortError> {
    let Some(order) = OrderBy::parse(order_by) else {
        tracing::debug!("no ordering requested");
        return Ok(Ordered::Query(queryset));
    };

    if !needs_memory_sort(&queryset, &order) {
        tracing::debug!(field = %order.field, descending = order.descending, "native ordering");
        return Ok(Ordered::Query(queryset.order_by(&order)));
    }

    if !order.has_field() {
        return Err(SortError::MissingField {
            order_by: order_by.to_string(),
        });
    }

    tracing::debug!(field = %order.field, descending = order.descending, "in-memory ordering");
    sort_records(queryset.into_records(), &order.field, order.descending).map(Ordered::Memory)
}

/// Stable sort of records on one attribute
///
/// Descending order keeps ties in their original order. Every record must
/// expose the attribute; the first one that does not is reported.
pub fn sort_records<T: Sortable>(
    records: Vec<T>,
    field: &str,
    descending: bool,
) -> Result<Vec<T>, SortError> {
    let mut keyed = records
        .into_iter()
        .map(|record| match record.attribute(field) {
            Some(key) => Ok((key, record)),
            None => Err(SortError::MissingAttribute {
                field: field.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if descending {
        keyed.sort_by(|(a, _), (b, _)| b.sort_cmp(a));
    } else {
        keyed.sort_by(|(a, _), (b, _)| a.sort_cmp(b));
    }

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}
