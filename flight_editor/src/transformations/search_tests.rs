#[cfg(test)]
mod tests {
    use crate::core::domain::{DepartureTime, FlightRecord};
    use crate::core::fields::SearchField;
    use crate::db::store::FlightStore;
    use crate::transformations::search::{search_store, SearchOutcome};
    use proptest::prelude::*;

    fn flight(number: &str, origin: &str, destination: &str) -> FlightRecord {
        FlightRecord::new(
            number,
            origin,
            destination,
            100,
            DepartureTime::new(9, 15).unwrap(),
            75.25,
            0,
        )
    }

    fn sample_store() -> FlightStore {
        FlightStore::from_records(vec![
            flight("AB 12", "JFK", "LAX"),
            flight("CD 34", "LAX", "JFK"),
            flight("AB 120", "SFO", "JFKX"),
        ])
    }

    #[test]
    fn test_search_origin_single_match() {
        let store = sample_store();
        let outcome = search_store(&store, SearchField::Origin, "JF");
        assert_eq!(outcome.match_count(), 1);

        let view = outcome.view().unwrap();
        let found: Vec<_> = view
            .records(&store)
            .map(|r| r.unwrap().flight_number.clone())
            .collect();
        assert_eq!(found, ["AB 12"]);
    }

    #[test]
    fn test_search_preserves_store_order() {
        let store = sample_store();
        let outcome = search_store(&store, SearchField::Destination, "JFK");
        let view = outcome.view().unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view.ids()[0], store.id_at(1).unwrap());
        assert_eq!(view.ids()[1], store.id_at(2).unwrap());
    }

    #[test]
    fn test_search_flight_number_with_space() {
        let store = sample_store();
        assert_eq!(search_store(&store, SearchField::FlightNumber, "B 12").match_count(), 2);
        assert_eq!(search_store(&store, SearchField::FlightNumber, "AB 120").match_count(), 1);
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let store = sample_store();
        assert_eq!(search_store(&store, SearchField::Origin, "jfk"), SearchOutcome::NoMatch);
    }

    #[test]
    fn test_empty_and_blank_queries_match_nothing() {
        let store = sample_store();
        assert_eq!(search_store(&store, SearchField::Origin, ""), SearchOutcome::EmptyQuery);
        assert_eq!(search_store(&store, SearchField::FlightNumber, " "), SearchOutcome::EmptyQuery);
        assert_eq!(search_store(&store, SearchField::FlightNumber, " ").match_count(), 0);
    }

    #[test]
    fn test_no_match_is_distinct_from_single_match() {
        let store = sample_store();
        let none = search_store(&store, SearchField::Origin, "ORD");
        let one = search_store(&store, SearchField::Origin, "SFO");
        assert_eq!(none, SearchOutcome::NoMatch);
        assert!(none.view().is_none());
        assert!(matches!(one, SearchOutcome::Matches(ref v) if v.len() == 1));
    }

    #[test]
    fn test_view_is_a_snapshot() {
        let mut store = sample_store();
        let outcome = search_store(&store, SearchField::Destination, "JFK");
        store.delete_at(1).unwrap();
        store.append(flight("ZZ 9", "JFK", "JFK"));

        let view = outcome.view().unwrap();
        assert_eq!(view.len(), 2);
        let resolved: Vec<_> = view.records(&store).collect();
        assert!(resolved[0].is_none());
        assert_eq!(resolved[1].unwrap().flight_number, "AB 120");
    }

    proptest! {
        #[test]
        fn prop_empty_query_never_matches(
            codes in proptest::collection::vec("[A-Z]{3}", 0..20)
        ) {
            let store = FlightStore::from_records(codes.iter().map(|c| flight("AB 1", c, c)));
            let fields = [SearchField::FlightNumber, SearchField::Origin, SearchField::Destination];
            for field in fields {
                prop_assert_eq!(search_store(&store, field, "").match_count(), 0);
            }
        }
    }
}
