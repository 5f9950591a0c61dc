//! The ranking engine: turns raw parsed rows into a consistent, queryable
//! player universe.
//!
//! Everything here is a pure function over immutable data. [`build_rankings`]
//! runs exactly once per load and its output replaces any prior dataset
//! wholesale; [`search`] and [`find_similar`] are stateless queries over that
//! snapshot. There is no incremental update path.

use crate::loader::RawPlayerRow;
use std::collections::{HashMap, HashSet};

/// Default number of entries returned by [`find_similar`].
pub const DEFAULT_SIMILAR_LIMIT: usize = 5;

/// Bounds of the similar-points band: ±30% of the target's points.
const SIMILAR_LOWER_FACTOR: f64 = 0.7;
const SIMILAR_UPPER_FACTOR: f64 = 1.3;

/// A validated player record with its computed overall rank.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
    pub county: Option<String>,
    pub birth_year: Option<String>,
    pub points: Option<f64>,
    /// Dense 1-based position when all valid players are ordered by ranking
    /// points descending.
    pub overall_rank: u32,
}

impl PlayerRecord {
    /// Ranking points with the documented default: absence is zero.
    pub fn points_or_zero(&self) -> f64 {
        self.points.unwrap_or(0.0)
    }
}

/// 1-based rank within a group, plus the group's cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRank {
    pub rank: u32,
    pub size: u32,
}

/// The immutable player universe produced by [`build_rankings`].
///
/// `records` is ordered by overall rank. The two derived maps are keyed by
/// player id and carry entries only for players that have the grouping field;
/// a player without a county is "not ranked" in any county, not rank 0.
#[derive(Debug, Clone, Default)]
pub struct RankedDataset {
    pub records: Vec<PlayerRecord>,
    pub county_ranks: HashMap<String, GroupRank>,
    pub year_ranks: HashMap<String, GroupRank>,
}

impl RankedDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by player id.
    pub fn get(&self, id: &str) -> Option<&PlayerRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// County rank entry for a player, if that player is county-ranked.
    pub fn county_rank(&self, id: &str) -> Option<GroupRank> {
        self.county_ranks.get(id).copied()
    }

    /// Birth-year rank entry for a player, if that player is year-ranked.
    pub fn year_rank(&self, id: &str) -> Option<GroupRank> {
        self.year_ranks.get(id).copied()
    }
}

/// Build the full ranked dataset from raw rows.
///
/// Rows missing `id` or `name` are dropped silently; this is the accepted
/// policy for malformed records, not an error. Valid records are stable-sorted
/// by ranking points descending (missing points count as 0), so ties keep
/// their original relative order, then assigned dense 1..N overall ranks.
/// County and year ranks use the same ordering within each group.
pub fn build_rankings(rows: Vec<RawPlayerRow>) -> RankedDataset {
    let total = rows.len();
    let mut records: Vec<PlayerRecord> = rows
        .into_iter()
        .filter(|row| !row.id.is_empty() && !row.name.is_empty())
        .map(|row| PlayerRecord {
            id: row.id,
            name: row.name,
            county: row.county,
            birth_year: row.year,
            points: row.points,
            overall_rank: 0,
        })
        .collect();

    let dropped = total - records.len();
    if dropped > 0 {
        log::debug!("dropped {} malformed rows of {}", dropped, total);
    }

    // Stable sort keeps original relative order on equal points.
    records.sort_by(|a, b| b.points_or_zero().total_cmp(&a.points_or_zero()));
    for (index, record) in records.iter_mut().enumerate() {
        record.overall_rank = (index + 1) as u32;
    }

    let county_ranks = group_ranks(&records, |r| r.county.as_deref());
    let year_ranks = group_ranks(&records, |r| r.birth_year.as_deref());

    log::info!(
        "ranked {} players ({} county groups, {} year groups)",
        records.len(),
        distinct_groups(&records, |r| r.county.as_deref()),
        distinct_groups(&records, |r| r.birth_year.as_deref()),
    );

    RankedDataset {
        records,
        county_ranks,
        year_ranks,
    }
}

/// Compute per-group ranks for whichever field `key` extracts.
///
/// `records` is already in points-descending stable order, so collecting ids
/// per group preserves that order and group position is the group rank.
fn group_ranks<'a>(
    records: &'a [PlayerRecord],
    key: impl Fn(&'a PlayerRecord) -> Option<&'a str>,
) -> HashMap<String, GroupRank> {
    let mut groups: HashMap<&str, Vec<&str>> = HashMap::new();
    for record in records {
        if let Some(group) = key(record) {
            groups.entry(group).or_default().push(&record.id);
        }
    }

    let mut ranks = HashMap::new();
    for ids in groups.values() {
        let size = ids.len() as u32;
        for (index, id) in ids.iter().enumerate() {
            ranks.insert(
                (*id).to_string(),
                GroupRank {
                    rank: (index + 1) as u32,
                    size,
                },
            );
        }
    }
    ranks
}

fn distinct_groups<'a>(
    records: &'a [PlayerRecord],
    key: impl Fn(&'a PlayerRecord) -> Option<&'a str>,
) -> usize {
    records
        .iter()
        .filter_map(key)
        .collect::<HashSet<_>>()
        .len()
}

/// Case-insensitive substring search over name and county.
///
/// An empty or whitespace-only term returns the full record set unfiltered.
/// Matches come back in dataset order; there is no relevance re-sort. A
/// missing county never matches.
pub fn search<'a>(dataset: &'a RankedDataset, term: &str) -> Vec<&'a PlayerRecord> {
    if term.trim().is_empty() {
        return dataset.records.iter().collect();
    }

    let needle = term.to_lowercase();
    dataset
        .records
        .iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&needle)
                || record
                    .county
                    .as_ref()
                    .is_some_and(|county| county.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Find up to `limit` players similar to the one identified by `target_id`.
///
/// Two candidate buckets, unioned with OR semantics:
/// - same county AND same birth year as the target, where equality requires
///   both sides present (absent-to-absent is not a match);
/// - ranking points within ±30% of the target's points, inclusive. Missing
///   points count as 0 on either side, so a zero-point target matches only
///   other zero-point players on this criterion.
///
/// The union is deduplicated by id (county/year bucket first), the target is
/// excluded, and the result is stable-sorted by absolute point distance from
/// the target, ascending. An unknown `target_id` yields an empty list.
pub fn find_similar<'a>(
    dataset: &'a RankedDataset,
    target_id: &str,
    limit: usize,
) -> Vec<&'a PlayerRecord> {
    let Some(target) = dataset.get(target_id) else {
        return Vec::new();
    };

    let target_points = target.points_or_zero();
    let lower = target_points * SIMILAR_LOWER_FACTOR;
    let upper = target_points * SIMILAR_UPPER_FACTOR;

    let same_county_and_year = dataset.records.iter().filter(|candidate| {
        candidate.id != target.id
            && field_matches(candidate.county.as_deref(), target.county.as_deref())
            && field_matches(candidate.birth_year.as_deref(), target.birth_year.as_deref())
    });

    let similar_points = dataset.records.iter().filter(|candidate| {
        let points = candidate.points_or_zero();
        candidate.id != target.id && points >= lower && points <= upper
    });

    let mut seen: HashSet<&str> = HashSet::new();
    let mut combined: Vec<&PlayerRecord> = same_county_and_year
        .chain(similar_points)
        .filter(|candidate| seen.insert(candidate.id.as_str()))
        .collect();

    combined.sort_by(|a, b| {
        let da = (a.points_or_zero() - target_points).abs();
        let db = (b.points_or_zero() - target_points).abs();
        da.total_cmp(&db)
    });
    combined.truncate(limit);
    combined
}

/// Optional-field equality: both sides must be present and equal.
fn field_matches(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}
