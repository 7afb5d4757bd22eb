//! Category repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist and load the category reference data.
//!
//! # Invariants
//! - `list_categories` returns insertion order, so the first row is the
//!   board's default category.

use crate::model::category::Category;
use crate::repo::{ensure_schema_ready, RepoResult};
use rusqlite::{params, Connection, Row};

const CATEGORY_SELECT_SQL: &str = "SELECT id, name, color FROM categories";

/// Repository interface for category persistence.
pub trait CategoryRepository {
    /// Inserts or updates one category (save-on-mutation semantics).
    fn save_category(&self, category: &Category) -> RepoResult<()>;
    /// Gets one category by id.
    fn get_category(&self, id: &str) -> RepoResult<Option<Category>>;
    /// Lists all categories in insertion order.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    /// Wraps a connection after checking it is fully migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn save_category(&self, category: &Category) -> RepoResult<()> {
        category.validate()?;

        self.conn.execute(
            "INSERT INTO categories (id, name, color) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                color = excluded.color,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                category.id.as_str(),
                category.name.as_str(),
                category.color.as_str(),
            ],
        )?;

        Ok(())
    }

    fn get_category(&self, id: &str) -> RepoResult<Option<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_category_row(row)?));
        }

        Ok(None)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} ORDER BY rowid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }

        Ok(categories)
    }
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<Category> {
    let category = Category {
        id: row.get("id")?,
        name: row.get("name")?,
        color: row.get("color")?,
    };
    category.validate()?;
    Ok(category)
}
