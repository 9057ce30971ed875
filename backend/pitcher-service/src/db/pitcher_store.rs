use super::{PitcherFilter, PitcherStore};
use crate::error::Result;
use crate::models::{CommentRecord, Page, PitcherRecord};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

/// Pitcher columns plus eager-loaded author, followers, tags and favoritedBy.
/// Array sub-selects keep the eager-load in the same statement.
const PITCHER_SELECT: &str = r#"
    SELECT p.id, p.name, p.team, p.author_id,
           p.wins, p.losses, p.era, p.games, p.games_started, p.saves,
           p.innings_pitched, p.hits, p.earned_runs, p.home_runs_allowed,
           p.strikeouts, p.walks, p.whip, p.ks_per_nine, p.walks_per_nine,
           p.fip, p.war, p.ra_nine_war, p.adp,
           u.username AS author_username,
           u.bio AS author_bio,
           u.image AS author_image,
           ARRAY(
               SELECT fu.username FROM follows fo
               JOIN users fu ON fu.id = fo.follower_id
               WHERE fo.following_id = u.id
               ORDER BY fu.username
           ) AS author_followers,
           ARRAY(
               SELECT t.name FROM pitcher_tags pt
               JOIN tags t ON t.id = pt.tag_id
               WHERE pt.pitcher_id = p.id
               ORDER BY t.name
           ) AS tag_list,
           ARRAY(
               SELECT vu.username FROM favorites fv
               JOIN users vu ON vu.id = fv.user_id
               WHERE fv.pitcher_id = p.id
               ORDER BY vu.username
           ) AS favorited_by
    FROM pitchers p
    JOIN users u ON u.id = p.author_id"#;

const COMMENT_SELECT: &str = r#"
    SELECT c.id, c.body, c.pitcher_id,
           u.username AS author_username,
           u.bio AS author_bio,
           u.image AS author_image,
           ARRAY(
               SELECT fu.username FROM follows fo
               JOIN users fu ON fu.id = fo.follower_id
               WHERE fo.following_id = u.id
               ORDER BY fu.username
           ) AS author_followers
    FROM comments c
    JOIN users u ON u.id = c.author_id"#;

/// Postgres-backed [`PitcherStore`]
#[derive(Clone)]
pub struct PgPitcherStore {
    pool: PgPool,
}

impl PgPitcherStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PitcherStore for PgPitcherStore {
    async fn count_pitchers(&self, filter: &PitcherFilter) -> Result<i64> {
        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT COUNT(*) FROM pitchers p JOIN users u ON u.id = p.author_id",
        );
        filter.push_where(&mut qb);

        let count = qb.build_query_scalar::<i64>().fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn find_pitchers(
        &self,
        filter: &PitcherFilter,
        page: Page,
    ) -> Result<Vec<PitcherRecord>> {
        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new(PITCHER_SELECT);
        filter.push_where(&mut qb);
        qb.push(" ORDER BY p.id ASC LIMIT ")
            .push_bind(page.limit)
            .push(" OFFSET ")
            .push_bind(page.offset);

        let pitchers = qb
            .build_query_as::<PitcherRecord>()
            .fetch_all(&self.pool)
            .await?;

        debug!(
            rows = pitchers.len(),
            offset = page.offset,
            limit = page.limit,
            "fetched pitcher page"
        );
        Ok(pitchers)
    }

    async fn find_pitcher(&self, pitcher_id: i32) -> Result<Option<PitcherRecord>> {
        let query = format!("{} WHERE p.id = $1", PITCHER_SELECT);
        let pitcher = sqlx::query_as::<_, PitcherRecord>(&query)
            .bind(pitcher_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(pitcher)
    }

    async fn pitcher_exists(&self, pitcher_id: i32) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM pitchers WHERE id = $1)")
                .bind(pitcher_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn find_user_id_by_username(&self, username: &str) -> Result<Option<i32>> {
        let id: Option<i32> = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(id)
    }

    async fn find_comments(
        &self,
        pitcher_id: i32,
        author_username: Option<&str>,
    ) -> Result<Vec<CommentRecord>> {
        let query = format!(
            "{} WHERE c.pitcher_id = $1 AND ($2::TEXT IS NULL OR u.username = $2) ORDER BY c.id ASC",
            COMMENT_SELECT
        );
        let comments = sqlx::query_as::<_, CommentRecord>(&query)
            .bind(pitcher_id)
            .bind(author_username)
            .fetch_all(&self.pool)
            .await?;

        Ok(comments)
    }

    async fn create_comment(
        &self,
        pitcher_id: i32,
        author_id: i32,
        body: &str,
    ) -> Result<CommentRecord> {
        let comment = sqlx::query_as::<_, CommentRecord>(
            r#"
            WITH c AS (
                INSERT INTO comments (body, pitcher_id, author_id)
                VALUES ($1, $2, $3)
                RETURNING id, body, pitcher_id, author_id
            )
            SELECT c.id, c.body, c.pitcher_id,
                   u.username AS author_username,
                   u.bio AS author_bio,
                   u.image AS author_image,
                   ARRAY(
                       SELECT fu.username FROM follows fo
                       JOIN users fu ON fu.id = fo.follower_id
                       WHERE fo.following_id = u.id
                       ORDER BY fu.username
                   ) AS author_followers
            FROM c
            JOIN users u ON u.id = c.author_id
            "#,
        )
        .bind(body)
        .bind(pitcher_id)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await?;

        debug!(comment_id = comment.id, pitcher_id, "created comment");
        Ok(comment)
    }

    async fn delete_comment(
        &self,
        comment_id: i32,
        pitcher_id: i32,
        author_id: i32,
    ) -> Result<bool> {
        let deleted: Option<i32> = sqlx::query_scalar(
            r#"
            DELETE FROM comments
            WHERE id = $1 AND pitcher_id = $2 AND author_id = $3
            RETURNING id
            "#,
        )
        .bind(comment_id)
        .bind(pitcher_id)
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deleted.is_some())
    }

    async fn add_favorite(&self, pitcher_id: i32, user_id: i32) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO favorites (pitcher_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (pitcher_id, user_id) DO NOTHING
            "#,
        )
        .bind(pitcher_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove_favorite(&self, pitcher_id: i32, user_id: i32) -> Result<()> {
        sqlx::query("DELETE FROM favorites WHERE pitcher_id = $1 AND user_id = $2")
            .bind(pitcher_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
