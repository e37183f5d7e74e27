//! Record filters built from `field=value,field=value` expressions.
//!
//! Each clause is a strict string equality test on one column. There is no
//! negation, no numeric comparison and no escaping, so values can contain
//! neither `,` nor `=`.

use crate::constants::columns;
use crate::error::{Error, Result};
use crate::record::HotspotRecord;

const CLAUSE_SEPARATOR: char = ',';
const VALUE_SEPARATOR: char = '=';

/// A single `field=value` predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    field: &'static str,
    value: String,
}

impl RecordFilter {
    fn parse(clause: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidFilter {
            clause: clause.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = clause.split(VALUE_SEPARATOR);
        let name = parts.next().unwrap_or_default();
        let value = parts
            .next()
            .ok_or_else(|| invalid("expected 'field=value'"))?;
        if parts.next().is_some() {
            return Err(invalid("values cannot contain '='"));
        }

        let field = columns::ALL
            .into_iter()
            .find(|column| *column == name)
            .ok_or_else(|| invalid(&format!("unknown field '{name}'")))?;

        Ok(Self {
            field,
            value: value.to_string(),
        })
    }

    /// Column this filter tests.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Value the column must equal.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether `record` passes this filter.
    pub fn accepts(&self, record: &HotspotRecord) -> bool {
        record.field(self.field) == Some(self.value.as_str())
    }
}

/// Conjunction of record filters. An empty set accepts every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<RecordFilter>,
}

impl FilterSet {
    /// Compile a filter expression. `None` or an empty string yields an
    /// empty set.
    pub fn parse(spec: Option<&str>) -> Result<Self> {
        let Some(spec) = spec.filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };

        let filters = spec
            .split(CLAUSE_SEPARATOR)
            .map(RecordFilter::parse)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { filters })
    }

    /// Whether every filter accepts `record`.
    pub fn accepts(&self, record: &HotspotRecord) -> bool {
        self.filters.iter().all(|filter| filter.accepts(record))
    }

    /// Whether the set has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Filters in the order they were written.
    pub fn filters(&self) -> &[RecordFilter] {
        &self.filters
    }
}
