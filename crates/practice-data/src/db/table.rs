//! Column definitions and row binding for loadable records.

use sqlx::Postgres;
use sqlx::query_builder::Separated;

/// Postgres column types used by the generated tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    BigInt,
    Integer,
    Double,
    Text,
    Date,
    Timestamp,
}

impl SqlType {
    /// Returns the DDL spelling of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlType::BigInt => "BIGINT",
            SqlType::Integer => "INTEGER",
            SqlType::Double => "DOUBLE PRECISION",
            SqlType::Text => "TEXT",
            SqlType::Date => "DATE",
            SqlType::Timestamp => "TIMESTAMP",
        }
    }
}

/// A named, typed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: SqlType,
}

impl Column {
    pub const fn new(name: &'static str, sql_type: SqlType) -> Self {
        Self { name, sql_type }
    }
}

/// A generated row that can be written to a Postgres table.
///
/// `bind_row` must push exactly one value per entry of `columns()`, in order.
pub trait Record {
    /// Column layout of the destination table.
    fn columns() -> &'static [Column];

    /// Binds this row's values into a `VALUES (...)` tuple.
    fn bind_row(&self, row: &mut Separated<'_, '_, Postgres, &'static str>);
}

/// Renders the `CREATE TABLE` statement for a record type.
pub fn create_table_sql<R: Record>(table: &str) -> String {
    let columns: Vec<String> = R::columns()
        .iter()
        .map(|c| format!("{} {}", c.name, c.sql_type.as_str()))
        .collect();

    format!("CREATE TABLE {table} ({})", columns.join(", "))
}

/// Returns the comma-separated column list for a record type.
pub fn column_list<R: Record>() -> String {
    R::columns()
        .iter()
        .map(|c| c.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks that a name can be interpolated into SQL as a bare identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    name.len() <= 63 && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
