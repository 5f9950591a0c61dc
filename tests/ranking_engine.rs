//! End-to-end ranking engine behavior over parsed CSV input.

use courtrank::loader::{parse_rows, RawPlayerRow};
use courtrank::rank::{build_rankings, find_similar, search, GroupRank};
use proptest::prelude::*;

fn scenario_a_csv() -> &'static str {
    "Player ID,Player Name,County,Year,Ranking Points\n\
     1,Alice,Cork,2000,100\n\
     2,Bob,Cork,2000,50\n\
     3,Cara,Clare,1999,75\n"
}

#[test]
fn scenario_a_ranks_from_csv() {
    let dataset = build_rankings(parse_rows(scenario_a_csv()).unwrap());

    let overall: Vec<(&str, u32)> = dataset
        .records
        .iter()
        .map(|r| (r.name.as_str(), r.overall_rank))
        .collect();
    assert_eq!(overall, vec![("Alice", 1), ("Cara", 2), ("Bob", 3)]);

    assert_eq!(dataset.county_rank("1"), Some(GroupRank { rank: 1, size: 2 }));
    assert_eq!(dataset.county_rank("2"), Some(GroupRank { rank: 2, size: 2 }));
    assert_eq!(dataset.year_rank("1"), Some(GroupRank { rank: 1, size: 2 }));
    assert_eq!(dataset.year_rank("2"), Some(GroupRank { rank: 2, size: 2 }));
}

#[test]
fn scenario_b_county_search_is_case_insensitive() {
    let dataset = build_rankings(parse_rows(scenario_a_csv()).unwrap());

    let names: Vec<&str> = search(&dataset, "cork")
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(search(&dataset, "CORK"), search(&dataset, "cork"));
}

#[test]
fn scenario_c_similar_players_ordered_by_point_distance() {
    let dataset = build_rankings(parse_rows(scenario_a_csv()).unwrap());

    // Bob qualifies through the shared county+year bucket despite being
    // outside Alice's [70, 130] points band; Cara through the band. Cara is
    // closer to 100 points, so she comes first.
    let names: Vec<&str> = find_similar(&dataset, "1", 5)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Cara", "Bob"]);
}

#[test]
fn scenario_d_row_missing_name_disappears_entirely() {
    let csv = "Player ID,Player Name,County,Year,Ranking Points\n\
               1,Alice,Cork,2000,100\n\
               2,,Cork,2000,999\n";
    let dataset = build_rankings(parse_rows(csv).unwrap());

    assert_eq!(dataset.len(), 1);
    assert!(dataset.get("2").is_none());
    assert_eq!(dataset.county_rank("2"), None);
    assert_eq!(dataset.year_rank("2"), None);
    // The dropped row does not occupy a rank either
    assert_eq!(dataset.get("1").unwrap().overall_rank, 1);
    assert_eq!(dataset.county_rank("1"), Some(GroupRank { rank: 1, size: 1 }));
}

fn arbitrary_rows() -> impl Strategy<Value = Vec<RawPlayerRow>> {
    prop::collection::vec(
        (
            prop::option::of(prop::sample::select(vec!["Cork", "Clare", "Kerry"])),
            prop::option::of(prop::sample::select(vec!["1998", "1999", "2000"])),
            prop::option::of(0.0f64..10_000.0),
        ),
        0..40,
    )
    .prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(i, (county, year, points))| RawPlayerRow {
                id: format!("id-{}", i),
                name: format!("Player {}", i),
                county: county.map(str::to_string),
                year: year.map(str::to_string),
                points,
            })
            .collect()
    })
}

proptest! {
    // P1: overall ranks are exactly {1, ..., N}, dense, no duplicates
    #[test]
    fn overall_ranks_are_dense(rows in arbitrary_rows()) {
        let dataset = build_rankings(rows);
        let mut ranks: Vec<u32> = dataset.records.iter().map(|r| r.overall_rank).collect();
        ranks.sort_unstable();
        let expected: Vec<u32> = (1..=dataset.len() as u32).collect();
        prop_assert_eq!(ranks, expected);
    }

    // P2: better rank never means fewer points
    #[test]
    fn overall_rank_order_follows_points(rows in arbitrary_rows()) {
        let dataset = build_rankings(rows);
        for pair in dataset.records.windows(2) {
            prop_assert!(pair[0].points_or_zero() >= pair[1].points_or_zero());
        }
    }

    // P3: county rank order matches points order within each county, and
    // every member of a county agrees on the group size
    #[test]
    fn county_ranks_are_consistent(rows in arbitrary_rows()) {
        let dataset = build_rankings(rows);
        for a in &dataset.records {
            for b in &dataset.records {
                let (Some(ca), Some(cb)) = (a.county.as_deref(), b.county.as_deref()) else {
                    continue;
                };
                if ca != cb || a.id == b.id {
                    continue;
                }
                let ra = dataset.county_rank(&a.id).unwrap();
                let rb = dataset.county_rank(&b.id).unwrap();
                prop_assert_eq!(ra.size, rb.size);
                if ra.rank < rb.rank {
                    prop_assert!(a.points_or_zero() >= b.points_or_zero());
                }
            }
        }
    }

    // P6: similarity output excludes the target and respects the limit
    #[test]
    fn similar_excludes_target_and_obeys_limit(
        rows in arbitrary_rows(),
        target in 0usize..40,
        limit in 0usize..8,
    ) {
        let dataset = build_rankings(rows);
        let target_id = format!("id-{}", target);
        let similar = find_similar(&dataset, &target_id, limit);
        prop_assert!(similar.len() <= limit);
        prop_assert!(similar.iter().all(|r| r.id != target_id));
    }

    // P5: empty search is the identity, and matching is case-insensitive
    #[test]
    fn search_identity_and_case_insensitivity(rows in arbitrary_rows()) {
        let dataset = build_rankings(rows);
        let all = search(&dataset, "");
        prop_assert_eq!(all.len(), dataset.len());

        let upper = search(&dataset, "CORK");
        let lower = search(&dataset, "cork");
        prop_assert_eq!(upper, lower);
    }
}
