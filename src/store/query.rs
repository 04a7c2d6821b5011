/// Builder for the filtered/ordered reads the store capability supports,
/// rendered as PostgREST query parameters.
///
/// Only the operators this API actually issues are modeled: exact match,
/// case-insensitive substring, numeric less-than, and descending order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQuery {
    filters: Vec<(String, String)>,
    order: Option<String>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact equality on a column.
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// Case-insensitive substring match on a column.
    pub fn ilike_contains(mut self, column: &str, term: &str) -> Self {
        self.filters.push((column.to_string(), format!("ilike.*{}*", term)));
        self
    }

    /// Numeric strictly-less-than on a column.
    pub fn lt(mut self, column: &str, value: i64) -> Self {
        self.filters.push((column.to_string(), format!("lt.{}", value)));
        self
    }

    /// Order by a column, newest-first style.
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(format!("{}.desc", column));
        self
    }

    /// Render to `(key, value)` query parameters. `select=*` is always
    /// present so the row shape matches what clients expect.
    pub fn into_params(self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(self.filters);
        if let Some(order) = self.order {
            params.push(("order".to_string(), order));
        }
        params
    }
}
