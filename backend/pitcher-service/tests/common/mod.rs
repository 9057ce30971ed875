//! In-memory PitcherStore for integration tests
//!
//! Mirrors the Postgres store's semantics (join-table uniqueness, ownership
//! checks on delete, id ordering) without a database. An optional delay lets
//! tests exercise the per-call timeout.

#![allow(dead_code)]

use pitcher_service::db::{FilterClause, PitcherFilter, PitcherStore};
use pitcher_service::error::Result;
use pitcher_service::models::{AuthorRecord, CommentRecord, Page, PitcherRecord, PitchingStats};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
struct User {
    id: i32,
    username: String,
    bio: Option<String>,
    image: Option<String>,
}

#[derive(Debug, Clone)]
struct Pitcher {
    id: i32,
    name: String,
    team: String,
    author_id: i32,
    stats: PitchingStats,
    tags: Vec<String>,
}

#[derive(Debug, Clone)]
struct Comment {
    id: i32,
    body: String,
    pitcher_id: i32,
    author_id: i32,
}

#[derive(Debug, Default)]
struct Data {
    users: Vec<User>,
    /// (follower_id, following_id)
    follows: BTreeSet<(i32, i32)>,
    pitchers: Vec<Pitcher>,
    /// (pitcher_id, user_id)
    favorites: BTreeSet<(i32, i32)>,
    comments: Vec<Comment>,
    next_comment_id: i32,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    data: Arc<Mutex<Data>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every store call sleep before answering
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn add_user(&self, username: &str) -> i32 {
        let mut data = self.data.lock().unwrap();
        let id = data.users.len() as i32 + 1;
        data.users.push(User {
            id,
            username: username.to_string(),
            bio: None,
            image: None,
        });
        id
    }

    pub fn set_bio(&self, user_id: i32, bio: &str) {
        let mut data = self.data.lock().unwrap();
        if let Some(user) = data.users.iter_mut().find(|u| u.id == user_id) {
            user.bio = Some(bio.to_string());
        }
    }

    pub fn follow(&self, follower_id: i32, following_id: i32) {
        self.data
            .lock()
            .unwrap()
            .follows
            .insert((follower_id, following_id));
    }

    pub fn add_pitcher(&self, name: &str, author_id: i32, tags: &[&str]) -> i32 {
        let mut data = self.data.lock().unwrap();
        let id = data.pitchers.len() as i32 + 1;
        let mut tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        tags.sort();
        tags.dedup();
        data.pitchers.push(Pitcher {
            id,
            name: name.to_string(),
            team: "NYY".to_string(),
            author_id,
            stats: PitchingStats {
                wins: 10 + id,
                losses: 5,
                ks_per_nine: 9.5,
                ..PitchingStats::default()
            },
            tags,
        });
        id
    }

    pub fn favorite(&self, pitcher_id: i32, user_id: i32) {
        self.data
            .lock()
            .unwrap()
            .favorites
            .insert((pitcher_id, user_id));
    }

    pub fn add_comment(&self, pitcher_id: i32, author_id: i32, body: &str) -> i32 {
        let mut data = self.data.lock().unwrap();
        Self::insert_comment(&mut data, pitcher_id, author_id, body)
    }

    pub fn comment_count(&self) -> usize {
        self.data.lock().unwrap().comments.len()
    }

    pub fn favorite_count(&self, pitcher_id: i32) -> usize {
        self.data
            .lock()
            .unwrap()
            .favorites
            .iter()
            .filter(|(p, _)| *p == pitcher_id)
            .count()
    }

    fn insert_comment(data: &mut Data, pitcher_id: i32, author_id: i32, body: &str) -> i32 {
        data.next_comment_id += 1;
        let id = data.next_comment_id;
        data.comments.push(Comment {
            id,
            body: body.to_string(),
            pitcher_id,
            author_id,
        });
        id
    }

    async fn pause(&self) {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn username(data: &Data, user_id: i32) -> Option<&str> {
        data.users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.username.as_str())
    }

    fn author(data: &Data, user_id: i32) -> AuthorRecord {
        let user = data.users.iter().find(|u| u.id == user_id);
        let mut followers: Vec<String> = data
            .follows
            .iter()
            .filter(|(_, following)| *following == user_id)
            .filter_map(|(follower, _)| Self::username(data, *follower).map(str::to_string))
            .collect();
        followers.sort();

        AuthorRecord {
            username: user.map(|u| u.username.clone()).unwrap_or_default(),
            bio: user.and_then(|u| u.bio.clone()),
            image: user.and_then(|u| u.image.clone()),
            followers,
        }
    }

    fn record(data: &Data, pitcher: &Pitcher) -> PitcherRecord {
        let mut favorited_by: Vec<String> = data
            .favorites
            .iter()
            .filter(|(p, _)| *p == pitcher.id)
            .filter_map(|(_, u)| Self::username(data, *u).map(str::to_string))
            .collect();
        favorited_by.sort();

        PitcherRecord {
            id: pitcher.id,
            name: pitcher.name.clone(),
            team: pitcher.team.clone(),
            author_id: pitcher.author_id,
            stats: pitcher.stats.clone(),
            tag_list: pitcher.tags.clone(),
            favorited_by,
            author: Self::author(data, pitcher.author_id),
        }
    }

    fn comment_record(data: &Data, comment: &Comment) -> CommentRecord {
        CommentRecord {
            id: comment.id,
            body: comment.body.clone(),
            pitcher_id: comment.pitcher_id,
            author: Self::author(data, comment.author_id),
        }
    }

    fn matches(data: &Data, pitcher: &Pitcher, filter: &PitcherFilter) -> bool {
        filter.clauses().iter().all(|clause| match clause {
            FilterClause::AuthorUsername(username) => {
                Self::username(data, pitcher.author_id) == Some(username.as_str())
            }
            FilterClause::Tag(label) => pitcher.tags.iter().any(|t| t == label),
            FilterClause::FavoritedBy(username) => data.favorites.iter().any(|(p, u)| {
                *p == pitcher.id && Self::username(data, *u) == Some(username.as_str())
            }),
            FilterClause::AuthorFollowedBy(follower_id) => {
                data.follows.contains(&(*follower_id, pitcher.author_id))
            }
        })
    }
}

#[async_trait::async_trait]
impl PitcherStore for InMemoryStore {
    async fn count_pitchers(&self, filter: &PitcherFilter) -> Result<i64> {
        self.pause().await;
        let data = self.data.lock().unwrap();
        Ok(data
            .pitchers
            .iter()
            .filter(|p| Self::matches(&data, p, filter))
            .count() as i64)
    }

    async fn find_pitchers(&self, filter: &PitcherFilter, page: Page) -> Result<Vec<PitcherRecord>> {
        self.pause().await;
        let data = self.data.lock().unwrap();
        Ok(data
            .pitchers
            .iter()
            .filter(|p| Self::matches(&data, p, filter))
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .map(|p| Self::record(&data, p))
            .collect())
    }

    async fn find_pitcher(&self, pitcher_id: i32) -> Result<Option<PitcherRecord>> {
        self.pause().await;
        let data = self.data.lock().unwrap();
        Ok(data
            .pitchers
            .iter()
            .find(|p| p.id == pitcher_id)
            .map(|p| Self::record(&data, p)))
    }

    async fn pitcher_exists(&self, pitcher_id: i32) -> Result<bool> {
        self.pause().await;
        Ok(self
            .data
            .lock()
            .unwrap()
            .pitchers
            .iter()
            .any(|p| p.id == pitcher_id))
    }

    async fn find_user_id_by_username(&self, username: &str) -> Result<Option<i32>> {
        self.pause().await;
        Ok(self
            .data
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.id))
    }

    async fn find_comments(
        &self,
        pitcher_id: i32,
        author_username: Option<&str>,
    ) -> Result<Vec<CommentRecord>> {
        self.pause().await;
        let data = self.data.lock().unwrap();
        Ok(data
            .comments
            .iter()
            .filter(|c| c.pitcher_id == pitcher_id)
            .filter(|c| match author_username {
                Some(username) => Self::username(&data, c.author_id) == Some(username),
                None => true,
            })
            .map(|c| Self::comment_record(&data, c))
            .collect())
    }

    async fn create_comment(
        &self,
        pitcher_id: i32,
        author_id: i32,
        body: &str,
    ) -> Result<CommentRecord> {
        self.pause().await;
        let mut data = self.data.lock().unwrap();
        let id = Self::insert_comment(&mut data, pitcher_id, author_id, body);
        let comment = Comment {
            id,
            body: body.to_string(),
            pitcher_id,
            author_id,
        };
        Ok(Self::comment_record(&data, &comment))
    }

    async fn delete_comment(&self, comment_id: i32, pitcher_id: i32, author_id: i32) -> Result<bool> {
        self.pause().await;
        let mut data = self.data.lock().unwrap();
        let before = data.comments.len();
        data.comments.retain(|c| {
            !(c.id == comment_id && c.pitcher_id == pitcher_id && c.author_id == author_id)
        });
        Ok(data.comments.len() < before)
    }

    async fn add_favorite(&self, pitcher_id: i32, user_id: i32) -> Result<()> {
        self.pause().await;
        self.favorite(pitcher_id, user_id);
        Ok(())
    }

    async fn remove_favorite(&self, pitcher_id: i32, user_id: i32) -> Result<()> {
        self.pause().await;
        self.data
            .lock()
            .unwrap()
            .favorites
            .remove(&(pitcher_id, user_id));
        Ok(())
    }
}
