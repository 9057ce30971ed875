//! Viewer-relative shaping of stored records.
//!
//! Projection never mutates what it is given; `favorited` and `following` are
//! always computed against the current viewer and are `false` for anonymous
//! requests.

use crate::models::{
    AuthorRecord, CommentRecord, CommentView, PitcherDetail, PitcherRecord, PitcherView, Profile,
};

/// Exact username membership. An anonymous viewer is never a member.
pub fn is_member(usernames: &[String], viewer: Option<&str>) -> bool {
    match viewer {
        Some(viewer) => usernames.iter().any(|u| u == viewer),
        None => false,
    }
}

/// Public profile of `author`; `following` is whether the viewer follows them
pub fn profile(author: &AuthorRecord, viewer: Option<&str>) -> Profile {
    Profile {
        username: author.username.clone(),
        bio: author.bio.clone(),
        image: author.image.clone(),
        following: is_member(&author.followers, viewer),
    }
}

pub fn pitcher_view(record: &PitcherRecord, viewer: Option<&str>) -> PitcherView {
    PitcherView {
        id: record.id,
        name: record.name.clone(),
        team: record.team.clone(),
        stats: record.stats.clone(),
        tag_list: record.tag_list.clone(),
        favorites_count: record.favorited_by.len() as i64,
        favorited: is_member(&record.favorited_by, viewer),
        author: profile(&record.author, viewer),
    }
}

pub fn pitcher_detail(record: &PitcherRecord, viewer: Option<&str>) -> PitcherDetail {
    PitcherDetail {
        id: record.id,
        name: record.name.clone(),
        team: record.team.clone(),
        wins: record.stats.wins,
        losses: record.stats.losses,
        ks_per_nine: record.stats.ks_per_nine,
        tag_list: record.tag_list.clone(),
        favorites_count: record.favorited_by.len() as i64,
        favorited: is_member(&record.favorited_by, viewer),
        author: profile(&record.author, viewer),
    }
}

pub fn comment_view(record: &CommentRecord, viewer: Option<&str>) -> CommentView {
    CommentView {
        id: record.id,
        body: record.body.clone(),
        author: profile(&record.author, viewer),
    }
}
