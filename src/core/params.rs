//! Ordered query parameters

use indexmap::IndexMap;
use url::form_urlencoded;

/// Query parameters of the current request
///
/// Keys keep the order in which they first appeared, and a key may carry
/// several values (`tag=a&tag=b`). [`QueryParams::get`] returns the last
/// value. Modifications go through [`QueryParams::with`], which returns a
/// copy so the request's own parameters stay untouched.
///
/// # Example
/// ```
/// use sortable::core::params::QueryParams;
///
/// let params = QueryParams::parse("tag=a&tag=b&sort=name");
/// let next = params.with("dir", "asc");
///
/// assert_eq!(params.get("dir"), None);
/// assert_eq!(next.urlencode(), "tag=a&tag=b&sort=name&dir=asc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: IndexMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw (form-urlencoded) query string, without the leading `?`
    pub fn parse(query: &str) -> Self {
        form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Get the last value of a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .get(key)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Get every value of a parameter, in order
    pub fn get_all(&self, key: &str) -> impl Iterator<Item = &str> {
        self.pairs
            .get(key)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Whether a parameter is present (even with an empty value)
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.contains_key(key)
    }

    /// Return a copy with `key` set to the single value `value`
    ///
    /// Every previous value of `key` is replaced. An existing key keeps its
    /// position; a new key is appended.
    pub fn with(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.pairs.insert(key.into(), vec![value.into()]);
        copy
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(key, value)` pairs, grouped by key in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .flat_map(|(k, values)| values.iter().map(move |v| (k.as_str(), v.as_str())))
    }

    /// Encode as a form-urlencoded query string, without the leading `?`
    pub fn urlencode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut pairs: IndexMap<String, Vec<String>> = IndexMap::new();
        for (k, v) in iter {
            pairs.entry(k.into()).or_default().push(v.into());
        }
        Self { pairs }
    }
}
