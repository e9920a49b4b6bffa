//! Repository for the `articles` table.

use std::collections::HashMap;

use quire_core::types::{unix_now, DbId};
use sqlx::PgPool;

use crate::models::article::{Article, ArticleFilter, ArticleWithTag, CreateArticle, UpdateArticle};
use crate::repositories::TagRepo;

/// Column list for `articles` queries. `desc` is a reserved word.
const ARTICLE_COLUMNS: &str = "\
    id, tag_id, title, \"desc\", content, created_by, modified_by, \
    state, created_on, modified_on";

/// Provides CRUD operations for articles.
#[derive(Clone)]
pub struct ArticleRepo {
    pool: PgPool,
}

impl ArticleRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List articles matching `filter`, ordered by id, with their tags resolved.
    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
        filter: &ArticleFilter,
    ) -> Result<Vec<ArticleWithTag>, sqlx::Error> {
        let (where_clause, bind_idx) = filter_clause(filter);
        let query = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles {where_clause} \
             ORDER BY id \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Article>(&query);
        if let Some(tag_id) = filter.tag_id {
            q = q.bind(tag_id);
        }
        if let Some(state) = filter.state {
            q = q.bind(state);
        }
        let articles = q.bind(limit).bind(offset).fetch_all(&self.pool).await?;

        self.attach_tags(articles).await
    }

    /// Count articles matching `filter`.
    pub async fn count(&self, filter: &ArticleFilter) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = filter_clause(filter);
        let query = format!("SELECT COUNT(*) FROM articles {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(tag_id) = filter.tag_id {
            q = q.bind(tag_id);
        }
        if let Some(state) = filter.state {
            q = q.bind(state);
        }
        q.fetch_one(&self.pool).await
    }

    /// Find an article by its ID, with its tag resolved.
    pub async fn find_by_id(&self, id: DbId) -> Result<Option<ArticleWithTag>, sqlx::Error> {
        let query = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match article {
            Some(article) => Ok(self.attach_tags(vec![article]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Whether an article with `id` exists. Only the id column is read.
    pub async fn exists(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let row =
            sqlx::query_scalar::<_, DbId>("SELECT id FROM articles WHERE id = $1 LIMIT 1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }

    /// Insert an article, stamping `created_on` and `modified_on` with the
    /// current time.
    ///
    /// The tag reference is not checked here; validate the payload first.
    pub async fn create(&self, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let now = unix_now();
        let query = format!(
            "INSERT INTO articles \
                 (tag_id, title, \"desc\", content, created_by, state, created_on, modified_on) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7) \
             RETURNING {ARTICLE_COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(input.tag_id)
            .bind(&input.title)
            .bind(&input.desc)
            .bind(&input.content)
            .bind(&input.created_by)
            .bind(input.state)
            .bind(now)
            .fetch_one(&self.pool)
            .await
    }

    /// Apply the non-`None` fields of `input` and refresh `modified_on`.
    ///
    /// Does not check that the row exists first; returns `None` when no row
    /// matched `id`.
    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET \
                 tag_id = COALESCE($2, tag_id), \
                 title = COALESCE($3, title), \
                 \"desc\" = COALESCE($4, \"desc\"), \
                 content = COALESCE($5, content), \
                 state = COALESCE($6, state), \
                 modified_by = COALESCE($7, modified_by), \
                 modified_on = $8 \
             WHERE id = $1 \
             RETURNING {ARTICLE_COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(input.tag_id)
            .bind(input.title.as_deref())
            .bind(input.desc.as_deref())
            .bind(input.content.as_deref())
            .bind(input.state)
            .bind(input.modified_by.as_deref())
            .bind(unix_now())
            .fetch_optional(&self.pool)
            .await
    }

    /// Delete an article by ID. Returns `true` if a row was removed.
    pub async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Resolve tags for a page of articles with a single batched query.
    async fn attach_tags(
        &self,
        articles: Vec<Article>,
    ) -> Result<Vec<ArticleWithTag>, sqlx::Error> {
        let mut tag_ids: Vec<DbId> = articles
            .iter()
            .map(|a| a.tag_id)
            .filter(|&id| id > 0)
            .collect();
        tag_ids.sort_unstable();
        tag_ids.dedup();

        let tags: HashMap<DbId, _> = TagRepo::new(self.pool.clone())
            .find_many(&tag_ids)
            .await?
            .into_iter()
            .map(|tag| (tag.id, tag))
            .collect();

        Ok(articles
            .into_iter()
            .map(|article| {
                let tag = tags.get(&article.tag_id).cloned();
                ArticleWithTag { article, tag }
            })
            .collect())
    }
}

/// Build the `WHERE` clause for `filter`. Returns the clause and the next
/// free bind index. Bind order: `tag_id`, `state`.
fn filter_clause(filter: &ArticleFilter) -> (String, u32) {
    let mut conditions = Vec::new();
    let mut bind_idx = 1u32;

    if filter.tag_id.is_some() {
        conditions.push(format!("tag_id = ${bind_idx}"));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_only_filter_starts_at_first_bind() {
        let filter = ArticleFilter {
            tag_id: None,
            state: Some(0),
        };
        let (clause, next) = filter_clause(&filter);
        assert_eq!(clause, "WHERE state = $1");
        assert_eq!(next, 2);
    }

    #[test]
    fn full_filter_is_a_conjunction() {
        let filter = ArticleFilter {
            tag_id: Some(3),
            state: Some(1),
        };
        let (clause, _) = filter_clause(&filter);
        assert_eq!(clause, "WHERE tag_id = $1 AND state = $2");
    }
}
