/// Data models for pitcher-service
///
/// - Records: rows as loaded from the store, relationships eager-loaded
/// - Views: viewer-relative response shapes produced by projection
/// - Requests: query and body parameters accepted by the HTTP surface
use serde::{Deserialize, Serialize};

// ============================================
// Records
// ============================================

/// Pitching statistics carried by every pitcher row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PitchingStats {
    pub wins: i32,
    pub losses: i32,
    pub era: f64,
    pub games: i32,
    pub games_started: i32,
    pub saves: i32,
    pub innings_pitched: f64,
    pub hits: i32,
    pub earned_runs: i32,
    pub home_runs_allowed: i32,
    pub strikeouts: i32,
    pub walks: i32,
    pub whip: f64,
    pub ks_per_nine: f64,
    pub walks_per_nine: f64,
    pub fip: f64,
    pub war: f64,
    pub ra_nine_war: f64,
    pub adp: f64,
}

/// Author of a pitcher or comment, with the usernames of their followers
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct AuthorRecord {
    #[sqlx(rename = "author_username")]
    pub username: String,
    #[sqlx(rename = "author_bio")]
    pub bio: Option<String>,
    #[sqlx(rename = "author_image")]
    pub image: Option<String>,
    #[sqlx(rename = "author_followers")]
    pub followers: Vec<String>,
}

/// A pitcher row with tags, author and favoritedBy eager-loaded
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct PitcherRecord {
    pub id: i32,
    pub name: String,
    pub team: String,
    pub author_id: i32,
    #[sqlx(flatten)]
    pub stats: PitchingStats,
    /// Tag labels, sorted
    pub tag_list: Vec<String>,
    /// Usernames of the users who favorited this pitcher
    pub favorited_by: Vec<String>,
    #[sqlx(flatten)]
    pub author: AuthorRecord,
}

#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct CommentRecord {
    pub id: i32,
    pub body: String,
    pub pitcher_id: i32,
    #[sqlx(flatten)]
    pub author: AuthorRecord,
}

/// Offset/limit window applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

// ============================================
// Views
// ============================================

/// Public profile of an author as seen by the viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

/// Listing-style projection, also returned by favorite/unfavorite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherView {
    pub id: i32,
    pub name: String,
    pub team: String,
    #[serde(flatten)]
    pub stats: PitchingStats,
    #[serde(rename = "tagList")]
    pub tag_list: Vec<String>,
    #[serde(rename = "favoritesCount")]
    pub favorites_count: i64,
    pub favorited: bool,
    pub author: Profile,
}

/// Reduced projection returned by the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherDetail {
    pub id: i32,
    pub name: String,
    pub team: String,
    pub wins: i32,
    pub losses: i32,
    pub ks_per_nine: f64,
    #[serde(rename = "tagList")]
    pub tag_list: Vec<String>,
    #[serde(rename = "favoritesCount")]
    pub favorites_count: i64,
    pub favorited: bool,
    pub author: Profile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: i32,
    pub body: String,
    pub author: Profile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherList {
    pub pitchers: Vec<PitcherView>,
    #[serde(rename = "pitchersCount")]
    pub pitchers_count: i64,
}

#[derive(Debug, Serialize)]
pub struct PitcherEnvelope<T> {
    pub pitcher: T,
}

#[derive(Debug, Serialize)]
pub struct CommentEnvelope {
    pub comment: CommentView,
}

#[derive(Debug, Serialize)]
pub struct CommentsEnvelope {
    pub comments: Vec<CommentView>,
}

// ============================================
// Requests
// ============================================

/// Query parameters of `GET /pitchers`. Pagination values stay raw strings so
/// non-numeric input can fall back to defaults instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub author: Option<String>,
    pub tag: Option<String>,
    pub favorited: Option<String>,
}

/// Query parameters of `GET /pitchers/feed`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    pub offset: Option<String>,
    pub limit: Option<String>,
}

/// Body of `POST /pitchers/{id}/comments`: `{"comment": {"body": "..."}}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddCommentRequest {
    pub comment: Option<CommentInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentInput {
    pub body: Option<String>,
}

impl AddCommentRequest {
    pub fn body(&self) -> Option<&str> {
        self.comment.as_ref().and_then(|c| c.body.as_deref())
    }
}
