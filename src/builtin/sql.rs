//! SQL profile
//!
//! Keywords match case-insensitively; `select` and `SELECT` are the same
//! word.

use crate::error::Result;
use crate::profile::{LanguageProfile, ProfileSpec};

pub fn sql() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "SQL",
        extensions: &["sql"],
        keywords: &[
            "SELECT", "FROM", "WHERE", "AND", "OR", "NOT", "INSERT", "INTO", "VALUES",
            "UPDATE", "SET", "DELETE", "CREATE", "TABLE", "DROP", "ALTER", "INDEX", "VIEW",
            "TRIGGER", "PROCEDURE", "FUNCTION", "JOIN", "INNER", "LEFT", "RIGHT", "OUTER",
            "FULL", "ON", "AS", "ORDER", "BY", "GROUP", "HAVING", "LIMIT", "OFFSET", "UNION",
            "ALL", "DISTINCT", "CASE", "WHEN", "THEN", "ELSE", "END", "NULL", "IS", "IN",
            "LIKE", "BETWEEN", "EXISTS", "PRIMARY", "KEY", "FOREIGN", "REFERENCES", "UNIQUE",
            "CHECK", "DEFAULT", "CONSTRAINT", "ASC", "DESC", "BEGIN", "COMMIT", "ROLLBACK",
            "TRANSACTION",
        ],
        keywords_ignore_case: true,
        builtins: &[
            "COUNT", "SUM", "AVG", "MIN", "MAX", "COALESCE", "NULLIF", "CAST", "CONVERT",
            "SUBSTRING", "TRIM", "UPPER", "LOWER", "LENGTH", "CONCAT", "NOW", "DATE", "TIME",
            "DATETIME", "INTEGER", "VARCHAR", "TEXT", "BOOLEAN", "FLOAT", "DECIMAL",
        ],
        line_comment: Some("--"),
        block_comment: Some(("/*", "*/")),
        string_delimiters: &['\''],
        operators: true,
        identifiers: true,
        ..ProfileSpec::default()
    }
    .build()
}
