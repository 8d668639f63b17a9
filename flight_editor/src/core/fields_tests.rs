#[cfg(test)]
mod tests {
    use crate::core::domain::{DepartureTime, FlightRecord};
    use crate::core::fields::{SearchField, SortKey};
    use std::cmp::Ordering;

    fn record(number: &str, origin: &str, price: f64, hhmm: &str) -> FlightRecord {
        FlightRecord::new(
            number,
            origin,
            "LAX",
            150,
            DepartureTime::from_token(hhmm, 1).unwrap(),
            price,
            1,
        )
    }

    #[test]
    fn test_sort_key_parses_names_and_aliases() {
        for key in SortKey::ALL {
            assert_eq!(key.name().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!("DEPARTURE".parse::<SortKey>().unwrap(), SortKey::DepartureTime);
        assert!("altitude".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_search_field_rejects_numeric_attributes() {
        assert_eq!("origin".parse::<SearchField>().unwrap(), SearchField::Origin);
        let err = "price".parse::<SearchField>().unwrap_err();
        assert!(err.contains("Unknown search field"));
    }

    #[test]
    fn test_string_comparator_is_bytewise() {
        let cmp = SortKey::FlightNumber.comparator();
        // Uppercase sorts before lowercase in byte order
        let upper = record("ZZ 1", "JFK", 1.0, "0000");
        let lower = record("aa 1", "JFK", 1.0, "0000");
        assert_eq!(cmp(&upper, &lower), Ordering::Less);
    }

    #[test]
    fn test_price_comparator_is_numeric() {
        let cmp = SortKey::Price.comparator();
        let cheap = record("AB 1", "JFK", 89.5, "0805");
        let pricey = record("AB 2", "JFK", 199.99, "1230");
        assert_eq!(cmp(&cheap, &pricey), Ordering::Less);
        assert_eq!(cmp(&pricey, &cheap), Ordering::Greater);
        assert_eq!(cmp(&cheap, &cheap.clone()), Ordering::Equal);
    }

    #[test]
    fn test_departure_comparator_orders_by_hour_then_minute() {
        let cmp = SortKey::DepartureTime.comparator();
        let a = record("AB 1", "JFK", 1.0, "0959");
        let b = record("AB 2", "JFK", 1.0, "1000");
        assert_eq!(cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_extractor_selects_attribute() {
        let r = record("AB 12", "JFK", 1.0, "0000");
        assert_eq!((SearchField::FlightNumber.extractor())(&r), "AB 12");
        assert_eq!((SearchField::Origin.extractor())(&r), "JFK");
        assert_eq!((SearchField::Destination.extractor())(&r), "LAX");
    }
}
