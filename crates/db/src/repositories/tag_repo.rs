//! Repository for the `tags` table.

use quire_core::types::{unix_now, DbId};
use quire_core::validation::TagLookup;
use sqlx::PgPool;

use crate::models::tag::{CreateTag, Tag, TagFilter, UpdateTag};

/// Column list for `tags` queries.
const TAG_COLUMNS: &str = "id, name, created_by, modified_by, state, created_on, modified_on";

/// Provides CRUD operations for tags.
#[derive(Clone)]
pub struct TagRepo {
    pool: PgPool,
}

impl TagRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List tags matching `filter`, ordered by id, with offset/limit paging.
    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
        filter: &TagFilter,
    ) -> Result<Vec<Tag>, sqlx::Error> {
        let (where_clause, bind_idx) = filter_clause(filter);
        let query = format!(
            "SELECT {TAG_COLUMNS} FROM tags {where_clause} \
             ORDER BY id \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Tag>(&query);
        if let Some(ref name) = filter.name {
            q = q.bind(name);
        }
        if let Some(state) = filter.state {
            q = q.bind(state);
        }
        q.bind(limit).bind(offset).fetch_all(&self.pool).await
    }

    /// Count tags matching `filter`.
    pub async fn count(&self, filter: &TagFilter) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = filter_clause(filter);
        let query = format!("SELECT COUNT(*) FROM tags {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(ref name) = filter.name {
            q = q.bind(name);
        }
        if let Some(state) = filter.state {
            q = q.bind(state);
        }
        q.fetch_one(&self.pool).await
    }

    /// Find a tag by its ID.
    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags WHERE id = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Fetch every tag whose id is in `ids`. Missing ids are skipped.
    pub async fn find_many(&self, ids: &[DbId]) -> Result<Vec<Tag>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {TAG_COLUMNS} FROM tags WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Tag>(&query)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
    }

    /// Whether a tag with `id` exists. Only the id column is read.
    pub async fn exists(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let row = sqlx::query_scalar::<_, DbId>("SELECT id FROM tags WHERE id = $1 LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    /// Whether any tag is named exactly `name`.
    ///
    /// Lookup only; nothing stops two tags from sharing a name.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, sqlx::Error> {
        let row =
            sqlx::query_scalar::<_, DbId>("SELECT id FROM tags WHERE name = $1 LIMIT 1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }

    /// Insert a tag, stamping `created_on` and `modified_on` with the current time.
    pub async fn create(&self, input: &CreateTag) -> Result<Tag, sqlx::Error> {
        let now = unix_now();
        let query = format!(
            "INSERT INTO tags (name, state, created_by, created_on, modified_on) \
             VALUES ($1, $2, $3, $4, $4) \
             RETURNING {TAG_COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(&input.name)
            .bind(input.state)
            .bind(&input.created_by)
            .bind(now)
            .fetch_one(&self.pool)
            .await
    }

    /// Apply the non-`None` fields of `input` and refresh `modified_on`.
    ///
    /// Does not check that the row exists first; returns `None` when no row
    /// matched `id`.
    pub async fn update(&self, id: DbId, input: &UpdateTag) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!(
            "UPDATE tags SET \
                 name = COALESCE($2, name), \
                 state = COALESCE($3, state), \
                 modified_by = COALESCE($4, modified_by), \
                 modified_on = $5 \
             WHERE id = $1 \
             RETURNING {TAG_COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.state)
            .bind(input.modified_by.as_deref())
            .bind(unix_now())
            .fetch_optional(&self.pool)
            .await
    }

    /// Delete a tag by ID. Articles referencing it are left untouched.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl TagLookup for TagRepo {
    type Error = sqlx::Error;

    async fn tag_exists(&self, id: DbId) -> Result<bool, sqlx::Error> {
        self.exists(id).await
    }
}

/// Build the `WHERE` clause for `filter`. Returns the clause and the next
/// free bind index. Bind order: `name`, `state`.
fn filter_clause(filter: &TagFilter) -> (String, u32) {
    let mut conditions = Vec::new();
    let mut bind_idx = 1u32;

    if filter.name.is_some() {
        conditions.push(format!("name = ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.state.is_some() {
        conditions.push(format!("state = ${bind_idx}"));
        bind_idx += 1;
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (where_clause, bind_idx)
}
