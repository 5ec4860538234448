//! Builds the list-endpoint query string from a structured options object.

use super::where_clause::Where;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// Caller intent for a list endpoint: pagination window, free-text search,
/// sort order, structured filter, field selection, relations to populate.
///
/// Construction never fails; an absent field simply omits its parameter.
#[derive(Clone, Debug, Default)]
pub struct ListQuery {
    pub offset: Option<u64>,
    /// `-1` is a sentinel meaning "no pagination, return all rows" and is
    /// emitted verbatim, never coerced to a default page size.
    pub limit: Option<i64>,
    pub search: Option<String>,
    /// Ordered `(field, direction)` pairs; empty means backend default order.
    pub sort: Vec<(String, SortDir)>,
    pub filter: Option<Where>,
    pub select: Vec<String>,
    pub populate: Vec<String>,
}

impl ListQuery {
    pub fn new() -> Self {
        ListQuery::default()
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Request all rows via the `-1` sentinel.
    pub fn unpaginated(self) -> Self {
        self.limit(-1)
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sort(mut self, field: impl Into<String>, dir: SortDir) -> Self {
        self.sort.push((field.into(), dir));
        self
    }

    pub fn filter(mut self, filter: Where) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn populate<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.populate.extend(relations.into_iter().map(Into::into));
        self
    }

    /// Emit the query string. Parameter order is fixed: `limit`, `offset`,
    /// `search`, `sort`, `where`, `select`, `populate`. JSON-valued parameters
    /// (`where`, `select`, `populate`) are percent-encoded; `sort` is sent as
    /// raw JSON per the backend contract.
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(limit) = self.limit {
            parts.push(format!("limit={}", limit));
        }
        if let Some(offset) = self.offset {
            parts.push(format!("offset={}", offset));
        }
        if let Some(search) = self.search.as_deref() {
            if !search.is_empty() {
                parts.push(format!("search={}", urlencoding::encode(search)));
            }
        }
        if !self.sort.is_empty() {
            let pairs: Vec<Value> = self
                .sort
                .iter()
                .map(|(field, dir)| Value::Array(vec![field.as_str().into(), dir.as_str().into()]))
                .collect();
            parts.push(format!("sort={}", Value::Array(pairs)));
        }
        if let Some(filter) = &self.filter {
            if let Some(v) = filter.pruned() {
                parts.push(format!("where={}", urlencoding::encode(&v.to_string())));
            }
        }
        if !self.select.is_empty() {
            let v = Value::Array(self.select.iter().map(|s| s.as_str().into()).collect());
            parts.push(format!("select={}", urlencoding::encode(&v.to_string())));
        }
        if !self.populate.is_empty() {
            let v = Value::Array(self.populate.iter().map(|s| s.as_str().into()).collect());
            parts.push(format!("populate={}", urlencoding::encode(&v.to_string())));
        }
        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Op;
    use serde_json::Value;

    #[test]
    fn full_options_emit_the_contract_query_string() {
        let qs = ListQuery::new()
            .offset(0)
            .limit(10)
            .search("john")
            .sort("name", SortDir::Asc)
            .filter(Where::new().eq("status", "Approve"))
            .to_query_string();
        assert_eq!(
            qs,
            "limit=10&offset=0&search=john&sort=[[\"name\",\"asc\"]]&where=%7B%22status%22%3A%22Approve%22%7D"
        );
    }

    #[test]
    fn unpaginated_sentinel_is_emitted_verbatim() {
        let qs = ListQuery::new().unpaginated().to_query_string();
        assert_eq!(qs, "limit=-1");
    }

    #[test]
    fn sort_pairs_preserve_field_and_direction_order() {
        let qs = ListQuery::new()
            .sort("created_at", SortDir::Desc)
            .sort("name", SortDir::Asc)
            .to_query_string();
        assert_eq!(qs, "sort=[[\"created_at\",\"desc\"],[\"name\",\"asc\"]]");
    }

    #[test]
    fn all_null_filter_emits_no_where_parameter() {
        let qs = ListQuery::new()
            .limit(25)
            .filter(
                Where::new()
                    .eq("status", Value::Null)
                    .nested("profile", Where::new().op("age", Op::Gte, Value::Null)),
            )
            .to_query_string();
        assert_eq!(qs, "limit=25");
    }

    #[test]
    fn empty_options_emit_an_empty_query_string() {
        assert_eq!(ListQuery::new().to_query_string(), "");
    }

    #[test]
    fn select_and_populate_are_encoded_json_arrays() {
        let qs = ListQuery::new()
            .select(["id", "name"])
            .populate(["orders"])
            .to_query_string();
        assert_eq!(
            qs,
            "select=%5B%22id%22%2C%22name%22%5D&populate=%5B%22orders%22%5D"
        );
    }
}
