//! Static table catalog: the three entity shapes, which fields each request must
//! carry, and which columns never leave the API.
//!
//! Records travel as JSON rows. The store owns their types: it coerces what it can
//! and rejects what it cannot, so nothing here re-validates field values.

use crate::store::Row;

/// A column the API may write or filter on, with the PostgreSQL type used to cast its parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub pg_type: &'static str,
}

const fn col(name: &'static str, pg_type: &'static str) -> Column {
    Column { name, pg_type }
}

const USER_COLUMNS: &[Column] = &[
    col("id", "bigint"),
    col("username", "text"),
    col("email", "text"),
    col("password", "text"),
    col("created_at", "timestamptz"),
];

const BLOG_POST_COLUMNS: &[Column] = &[
    col("id", "bigint"),
    col("user_id", "bigint"),
    col("title", "text"),
    col("content", "text"),
    col("created_at", "timestamptz"),
];

const COMMENT_COLUMNS: &[Column] = &[
    col("id", "bigint"),
    col("blog_post_id", "bigint"),
    col("user_id", "bigint"),
    col("content", "text"),
    col("created_at", "timestamptz"),
];

/// Store tables backing the three entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    BlogPosts,
    Comments,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Users, Table::BlogPosts, Table::Comments];

    pub fn name(self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::BlogPosts => "blog_posts",
            Table::Comments => "comments",
        }
    }

    pub fn columns(self) -> &'static [Column] {
        match self {
            Table::Users => USER_COLUMNS,
            Table::BlogPosts => BLOG_POST_COLUMNS,
            Table::Comments => COMMENT_COLUMNS,
        }
    }

    pub fn column(self, name: &str) -> Option<&'static Column> {
        self.columns().iter().find(|c| c.name == name)
    }

    /// Fields a create request must carry: every column but the store-assigned id.
    pub fn create_fields(self) -> &'static [&'static str] {
        match self {
            Table::Users => &["username", "email", "password", "created_at"],
            Table::BlogPosts => &["user_id", "title", "content", "created_at"],
            Table::Comments => &["blog_post_id", "user_id", "content", "created_at"],
        }
    }

    /// Columns stripped from every row before it is returned to a client.
    pub fn sensitive_columns(self) -> &'static [&'static str] {
        match self {
            Table::Users => &["password"],
            Table::BlogPosts | Table::Comments => &[],
        }
    }

    /// Drop sensitive columns. Every other column passes through untouched.
    pub fn redact(self, mut rows: Vec<Row>) -> Vec<Row> {
        let sensitive = self.sensitive_columns();
        if !sensitive.is_empty() {
            for row in &mut rows {
                row.retain(|k, _| !sensitive.contains(&k.as_str()));
            }
        }
        rows
    }
}

/// Fields an update-blog request must carry.
pub const BLOG_UPDATE_FIELDS: &[&str] = &["id", "title", "content"];

/// Columns update-blog writes; anything else in the body is ignored.
pub const BLOG_UPDATE_COLUMNS: &[&str] = &["title", "content"];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_fields_are_columns_without_id() {
        for table in Table::ALL {
            let fields = table.create_fields();
            assert!(!fields.contains(&"id"));
            assert_eq!(fields.len(), table.columns().len() - 1);
            for field in fields {
                assert!(table.column(field).is_some(), "{field} not a {} column", table.name());
            }
        }
    }

    #[test]
    fn redact_strips_password_and_keeps_odd_rows() {
        let rows = vec![
            json!({"id": 1, "username": "a", "password": "$argon2id$x"}),
            json!({"id": "2", "created_at": null}),
        ]
        .into_iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect();
        let out = Table::Users.redact(rows);
        assert_eq!(out.len(), 2);
        assert!(out[0].get("password").is_none());
        assert_eq!(out[0]["username"], "a");
        assert_eq!(out[1]["id"], "2");
        assert!(out[1]["created_at"].is_null());
    }

    #[test]
    fn blog_rows_are_not_redacted() {
        let row = json!({"id": 1, "title": "t", "content": "c"}).as_object().cloned().unwrap();
        let out = Table::BlogPosts.redact(vec![row.clone()]);
        assert_eq!(out, vec![row]);
    }

    #[test]
    fn update_columns_are_a_subset_of_update_fields() {
        for column in BLOG_UPDATE_COLUMNS {
            assert!(BLOG_UPDATE_FIELDS.contains(column));
            assert!(Table::BlogPosts.column(column).is_some());
        }
    }
}

