//! Visitor list query: merge, filter, search, sort
//!
//! Pure function of its inputs. Filters run before the sort, and the sort is
//! stable so check-ins on the same date keep their merged order (store
//! entries ahead of seed entries).

use chrono::NaiveDate;

use crate::models::{
    enums::{BeachFilter, SortOrder},
    visitor::Visitor,
};

/// Parsed visit date; malformed dates sort as the oldest possible value
fn visit_date(visitor: &Visitor) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&visitor.date, "%Y-%m-%d").ok()
}

/// Produce the visible visitor list
pub fn query_visitors(
    store_visitors: &[Visitor],
    seed_visitors: &[Visitor],
    beach_filter: BeachFilter,
    name_search: &str,
    sort_order: SortOrder,
) -> Vec<Visitor> {
    let needle = name_search.to_lowercase();

    let mut keyed: Vec<(Option<NaiveDate>, &Visitor)> = store_visitors
        .iter()
        .chain(seed_visitors.iter())
        .filter(|v| beach_filter.matches(v.beach))
        .filter(|v| needle.is_empty() || v.name.to_lowercase().contains(&needle))
        .map(|v| (visit_date(v), v))
        .collect();

    match sort_order {
        SortOrder::Newest => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
        SortOrder::Oldest => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
    }

    keyed.into_iter().map(|(_, v)| v.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Beach;
    use crate::seed::SEED_VISITORS;
    use proptest::prelude::*;

    fn visitor(id: &str, name: &str, beach: Beach, date: &str) -> Visitor {
        Visitor {
            id: id.to_string(),
            name: name.to_string(),
            city: "Bantul".to_string(),
            beach,
            date: date.to_string(),
        }
    }

    fn ids(visitors: &[Visitor]) -> Vec<&str> {
        visitors.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn test_beach_filter_scenario() {
        let seed = vec![
            visitor("m1", "Ahmad Subarjo", Beach::Parangtritis, "2025-12-04"),
            visitor("m5", "Eko Prasetyo", Beach::Baru, "2025-12-02"),
        ];
        let result = query_visitors(
            &[],
            &seed,
            BeachFilter::Only(Beach::Baru),
            "",
            SortOrder::Newest,
        );
        assert_eq!(ids(&result), vec!["m5"]);
    }

    #[test]
    fn test_new_visitor_sorts_first() {
        let store = vec![visitor("z", "Zed", Beach::Samas, "2025-12-10")];
        let result = query_visitors(&store, &SEED_VISITORS, BeachFilter::All, "", SortOrder::Newest);
        assert_eq!(result[0].name, "Zed");
        assert_eq!(result.len(), SEED_VISITORS.len() + 1);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let result = query_visitors(&[], &SEED_VISITORS, BeachFilter::All, "LESTARI", SortOrder::Newest);
        assert_eq!(ids(&result), vec!["m4"]);
    }

    #[test]
    fn test_search_does_not_fold_compatibility_forms() {
        let store = vec![visitor("z", "Zed", Beach::Samas, "2025-12-10")];
        let result = query_visitors(&store, &[], BeachFilter::All, "\u{FF3A}\u{FF25}\u{FF24}", SortOrder::Newest);
        assert!(result.is_empty());

        let store = vec![visitor("s", "Ömer Şahin", Beach::Samas, "2025-12-10")];
        let result = query_visitors(&store, &[], BeachFilter::All, "ÖMER", SortOrder::Newest);
        assert_eq!(ids(&result), vec!["s"]);
    }

    #[test]
    fn test_ties_keep_merge_order() {
        let store = vec![visitor("s1", "Store", Beach::Depok, "2025-12-04")];
        let seed = vec![
            visitor("a", "A", Beach::Depok, "2025-12-04"),
            visitor("b", "B", Beach::Depok, "2025-12-01"),
            visitor("c", "C", Beach::Depok, "2025-12-04"),
        ];
        let newest = query_visitors(&store, &seed, BeachFilter::All, "", SortOrder::Newest);
        assert_eq!(ids(&newest), vec!["s1", "a", "c", "b"]);

        let oldest = query_visitors(&store, &seed, BeachFilter::All, "", SortOrder::Oldest);
        assert_eq!(ids(&oldest), vec!["b", "s1", "a", "c"]);
    }

    #[test]
    fn test_empty_result() {
        let result = query_visitors(&[], &SEED_VISITORS, BeachFilter::All, "nobody", SortOrder::Oldest);
        assert!(result.is_empty());
    }

    #[test]
    fn test_malformed_date_sorts_oldest() {
        let seed = vec![
            visitor("bad", "Bad", Beach::Baros, "someday"),
            visitor("ok", "Ok", Beach::Baros, "2025-01-01"),
        ];
        let result = query_visitors(&[], &seed, BeachFilter::All, "", SortOrder::Newest);
        assert_eq!(ids(&result), vec!["ok", "bad"]);
    }

    fn arb_beach() -> impl Strategy<Value = Beach> {
        (0..Beach::ALL.len()).prop_map(|i| Beach::ALL[i])
    }

    fn arb_visitor() -> impl Strategy<Value = Visitor> {
        ("[a-z]{1,6}", "[A-Za-zÀ-ÿＡ-Ｚ ]{1,12}", arb_beach(), 0u32..400).prop_map(|(id, name, beach, day)| {
            let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Days::new(day as u64);
            Visitor {
                id,
                name,
                city: "Bantul".to_string(),
                beach,
                date: date.format("%Y-%m-%d").to_string(),
            }
        })
    }

    fn arb_filter() -> impl Strategy<Value = BeachFilter> {
        prop_oneof![Just(BeachFilter::All), arb_beach().prop_map(BeachFilter::Only)]
    }

    proptest! {
        #[test]
        fn prop_search_postcondition(
            store in prop::collection::vec(arb_visitor(), 0..10),
            seed in prop::collection::vec(arb_visitor(), 0..20),
            search in "[a-zA-ZÀ-ÿＡ-Ｚａ-ｚ]{1,2}",
        ) {
            let result = query_visitors(&store, &seed, BeachFilter::All, &search, SortOrder::Newest);
            let needle = search.to_lowercase();
            for v in &result {
                prop_assert!(v.name.to_lowercase().contains(&needle));
            }
        }

        #[test]
        fn prop_beach_postcondition(
            seed in prop::collection::vec(arb_visitor(), 0..30),
            beach in arb_beach(),
        ) {
            let result = query_visitors(&[], &seed, BeachFilter::Only(beach), "", SortOrder::Oldest);
            prop_assert!(result.iter().all(|v| v.beach == beach));
            let expected = seed.iter().filter(|v| v.beach == beach).count();
            prop_assert_eq!(result.len(), expected);
        }

        #[test]
        fn prop_newest_is_reverse_of_oldest_without_ties(
            seed in prop::collection::vec(arb_visitor(), 0..30),
            filter in arb_filter(),
        ) {
            let mut seen = std::collections::HashSet::new();
            let distinct: Vec<Visitor> = seed.into_iter().filter(|v| seen.insert(v.date.clone())).collect();

            let mut newest = query_visitors(&[], &distinct, filter, "", SortOrder::Newest);
            let oldest = query_visitors(&[], &distinct, filter, "", SortOrder::Oldest);
            newest.reverse();
            prop_assert_eq!(newest, oldest);
        }

        #[test]
        fn prop_query_is_idempotent(
            store in prop::collection::vec(arb_visitor(), 0..10),
            seed in prop::collection::vec(arb_visitor(), 0..20),
            filter in arb_filter(),
            search in "[a-z]{0,2}",
        ) {
            let first = query_visitors(&store, &seed, filter, &search, SortOrder::Newest);
            let second = query_visitors(&store, &seed, filter, &search, SortOrder::Newest);
            prop_assert_eq!(first, second);
        }
    }
}
