//! Composable pitcher predicates
//!
//! A [`PitcherFilter`] is a conjunction of independent clauses. Stores
//! interpret it: the Postgres store renders it into a bound `WHERE` clause.
//! All string comparisons are exact and case-sensitive.

use crate::models::ListQuery;
use sqlx::{Postgres, QueryBuilder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    /// Author's username equals the value
    AuthorUsername(String),
    /// Pitcher carries a tag with exactly this label
    Tag(String),
    /// The user with this username favorited the pitcher
    FavoritedBy(String),
    /// The author is followed by the user with this id (feed)
    AuthorFollowedBy(i32),
}

/// AND of [`FilterClause`]s; no clauses matches every pitcher
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PitcherFilter {
    clauses: Vec<FilterClause>,
}

impl PitcherFilter {
    /// Universal predicate
    pub fn all() -> Self {
        Self::default()
    }

    pub fn and(mut self, clause: FilterClause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    pub fn is_universal(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Build the listing predicate from `GET /pitchers` query parameters.
    ///
    /// A clause is added only when its parameter is present (an empty value is
    /// still present and matches nothing). The viewer never narrows the
    /// listing: resources owned by the viewer are neither forced in nor
    /// filtered out.
    pub fn from_query(query: &ListQuery, viewer: Option<&str>) -> Self {
        let mut filter = Self::all();

        if let Some(author) = &query.author {
            filter = filter.and(FilterClause::AuthorUsername(author.clone()));
        }
        if let Some(tag) = &query.tag {
            filter = filter.and(FilterClause::Tag(tag.clone()));
        }
        if let Some(favorited) = &query.favorited {
            filter = filter.and(FilterClause::FavoritedBy(favorited.clone()));
        }

        tracing::trace!(
            viewer = viewer.unwrap_or("<anonymous>"),
            clauses = filter.clauses.len(),
            "built listing filter"
        );
        filter
    }

    /// Feed predicate: pitchers authored by users the viewer follows
    pub fn feed(viewer_id: i32) -> Self {
        Self::all().and(FilterClause::AuthorFollowedBy(viewer_id))
    }

    /// Append ` WHERE ...` to a query selecting from `pitchers p JOIN users u`.
    /// Nothing is appended for the universal predicate.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        for (i, clause) in self.clauses.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });

            match clause {
                FilterClause::AuthorUsername(username) => {
                    qb.push("u.username = ").push_bind(username.clone());
                }
                FilterClause::Tag(label) => {
                    qb.push(
                        "EXISTS (SELECT 1 FROM pitcher_tags pt JOIN tags t ON t.id = pt.tag_id \
                         WHERE pt.pitcher_id = p.id AND t.name = ",
                    )
                    .push_bind(label.clone())
                    .push(")");
                }
                FilterClause::FavoritedBy(username) => {
                    qb.push(
                        "EXISTS (SELECT 1 FROM favorites fv JOIN users fu ON fu.id = fv.user_id \
                         WHERE fv.pitcher_id = p.id AND fu.username = ",
                    )
                    .push_bind(username.clone())
                    .push(")");
                }
                FilterClause::AuthorFollowedBy(follower_id) => {
                    qb.push(
                        "EXISTS (SELECT 1 FROM follows fo \
                         WHERE fo.following_id = p.author_id AND fo.follower_id = ",
                    )
                    .push_bind(*follower_id)
                    .push(")");
                }
            }
        }
    }
}
