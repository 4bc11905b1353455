//! Query builder — filter and order requests to parameterized SQL.
//!
//! Every caller-controlled value becomes a named bound parameter. The only
//! strings interpolated into the statement text are fixed descriptor columns,
//! the literal `visible = 1` predicate, and an order column resolved through
//! the descriptor's allow-list — never the caller's own spelling.

use rusqlite::types::ToSql;
use trackside_core::OrderSpec;

/// Per-resource table descriptor.
///
/// Fixes the table name, the positional column list read by the row mapper,
/// and the allow-list of orderable columns. One `const` instance exists per
/// resource; nothing here is caller-controlled.
pub struct ResourceTable {
    /// Table name.
    pub table: &'static str,
    /// Selected columns, in the positional order the mapper reads them.
    pub columns: &'static [&'static str],
    /// Columns eligible for `ORDER BY`, canonical spelling.
    pub orderable: &'static [&'static str],
}

impl ResourceTable {
    /// The fixed `SELECT ... FROM ...` prefix for this resource.
    pub fn base_select(&self) -> String {
        format!("SELECT {} FROM {}", self.columns.join(", "), self.table)
    }

    /// Case-insensitive allow-list lookup, returning the canonical spelling.
    fn canonical_order_column(&self, requested: &str) -> Option<&'static str> {
        self.orderable
            .iter()
            .find(|col| col.eq_ignore_ascii_case(requested))
            .copied()
    }
}

/// Descriptor for the `races` table.
pub const RACES: ResourceTable = ResourceTable {
    table: "races",
    columns: &["id", "meeting_id", "name", "number", "visible", "advertised_start_time"],
    orderable: &["id", "meeting_id", "name", "number", "advertised_start_time"],
};

/// Descriptor for the `events` table.
pub const EVENTS: ResourceTable = ResourceTable {
    table: "events",
    columns: &["id", "name", "sport", "visible", "advertised_start_time"],
    orderable: &["id", "name", "sport", "advertised_start_time"],
};

/// One filter dimension, produced by a resource's filter shape.
///
/// Inclusion sets with zero entries contribute no clause — empty means
/// "match all", never "match none".
pub enum Predicate {
    /// `column IN (...)` over integer values.
    InInt64 {
        /// Column to restrict.
        column: &'static str,
        /// Parameter-name prefix, unique per dimension so names never
        /// collide when a resource grows a second set-valued filter.
        prefix: &'static str,
        /// Inclusion set.
        values: Vec<i64>,
    },
    /// `column IN (...)` over text values.
    InText {
        /// Column to restrict.
        column: &'static str,
        /// Parameter-name prefix, unique per dimension.
        prefix: &'static str,
        /// Inclusion set.
        values: Vec<String>,
    },
    /// A fixed predicate with no bound parameter, e.g. `visible = 1`.
    Literal(&'static str),
}

/// A built statement: SQL text plus the named parameters to bind.
pub struct SqlQuery {
    /// Statement text.
    pub sql: String,
    /// Named parameter bindings, names including the `:` prefix.
    pub params: Vec<(String, Box<dyn ToSql>)>,
}

impl SqlQuery {
    /// Borrowed view of the parameters in the shape `rusqlite` binds.
    pub fn param_refs(&self) -> Vec<(&str, &dyn ToSql)> {
        self.params
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
            .collect()
    }
}

/// Build the list query for a resource: base select plus `WHERE` and
/// `ORDER BY` derived from the predicates and order request.
pub fn build_list(table: &ResourceTable, predicates: Vec<Predicate>, order: &OrderSpec) -> SqlQuery {
    let mut sql = table.base_select();
    let mut params: Vec<(String, Box<dyn ToSql>)> = Vec::new();
    let mut clauses: Vec<String> = Vec::new();

    for predicate in predicates {
        match predicate {
            Predicate::InInt64 { column, prefix, values } => {
                if let Some(clause) = in_clause(column, prefix, values, &mut params) {
                    clauses.push(clause);
                }
            }
            Predicate::InText { column, prefix, values } => {
                if let Some(clause) = in_clause(column, prefix, values, &mut params) {
                    clauses.push(clause);
                }
            }
            Predicate::Literal(text) => clauses.push(text.to_string()),
        }
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    if let Some(column) = order_column(table, order) {
        sql.push_str(" ORDER BY ");
        sql.push_str(column);
        sql.push_str(" ASC");
    }

    SqlQuery { sql, params }
}

/// Build the single-row query `base SELECT ... WHERE id = :id`.
pub fn build_get(table: &ResourceTable, id: i64) -> SqlQuery {
    let mut sql = table.base_select();
    sql.push_str(" WHERE id = :id");
    SqlQuery {
        sql,
        params: vec![(":id".to_string(), Box::new(id))],
    }
}

/// Emit `column IN (:prefix0, :prefix1, ...)`, binding one parameter per
/// element. Returns `None` for an empty inclusion set.
fn in_clause<T: ToSql + 'static>(
    column: &'static str,
    prefix: &'static str,
    values: Vec<T>,
    params: &mut Vec<(String, Box<dyn ToSql>)>,
) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let mut names: Vec<String> = Vec::with_capacity(values.len());
    for (i, value) in values.into_iter().enumerate() {
        let name = format!(":{prefix}{i}");
        names.push(name.clone());
        params.push((name, Box::new(value)));
    }
    Some(format!("{column} IN ({})", names.join(", ")))
}

/// Resolve the order column through the allow-list.
///
/// Empty or whitespace field means no ordering was requested; an
/// unrecognized field is silently skipped rather than rejected, so callers
/// cannot break the query path with a bad field name.
fn order_column(table: &ResourceTable, order: &OrderSpec) -> Option<&'static str> {
    let requested = order.field.trim();
    if requested.is_empty() {
        return None;
    }
    table.canonical_order_column(requested)
}
