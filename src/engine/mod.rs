//! Frequency-driven engines built on a loaded [`Table`](crate::table::Table).

pub mod matcher;
pub mod rank;

pub use matcher::{MatchSummary, check, split_candidates};
pub use rank::{RankSummary, SortMode, order, rank};
