#[cfg(test)]
mod tests {
    use crate::core::domain::{DepartureTime, FlightRecord};
    use crate::db::store::FlightStore;
    use crate::io::loaders::{DatasetLoader, LoadOptions};
    use crate::io::writer::{render_record, save_to_file, serialize_store, write_store, HEADER};
    use proptest::prelude::*;
    use tempfile::NamedTempFile;

    fn flight(number: &str, hour: u8, minutes: u8, price: f64, stops: u8) -> FlightRecord {
        let time = DepartureTime::new(hour, minutes).unwrap();
        FlightRecord::new(number, "JFK", "LAX", 180, time, price, stops)
    }

    fn sample_store() -> FlightStore {
        let time = DepartureTime::new(8, 5).unwrap();
        FlightStore::from_records(vec![
            flight("AB 12", 12, 30, 199.99, 0),
            FlightRecord::new("CD 34", "LAX", "JFK", 150, time, 89.5, 1),
        ])
    }

    #[test]
    fn test_render_record_pads_time_and_price() {
        let time = DepartureTime::new(8, 5).unwrap();
        let record = FlightRecord::new("CD 34", "LAX", "JFK", 150, time, 89.5, 1);
        assert_eq!(render_record(&record), "CD 34,LAX,JFK,150,0805,89.50,1,");

        let midnight_time = DepartureTime::new(0, 0).unwrap();
        let midnight = FlightRecord::new("X1 0", "A", "B", 0, midnight_time, 0.0, 0);
        assert_eq!(render_record(&midnight), "X1 0,A,B,0,0000,0.00,0,");
    }

    #[test]
    fn test_serialize_store_header_and_order() {
        let lines = serialize_store(&sample_store());
        assert_eq!(
            lines,
            [
                HEADER,
                "AB 12,JFK,LAX,180,1230,199.99,0,",
                "CD 34,LAX,JFK,150,0805,89.50,1,",
            ]
        );
    }

    #[test]
    fn test_write_store_terminates_lines() {
        let mut out = Vec::new();
        write_store(&sample_store(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("89.50,1,\n"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_save_overwrites_existing_content() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "x".repeat(4096)).unwrap();

        let written = save_to_file(&sample_store(), temp_file.path()).unwrap();
        assert_eq!(written, 2);

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.starts_with(HEADER));
        assert!(!content.contains('x'));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_file = NamedTempFile::new().unwrap();
        let store = sample_store();
        save_to_file(&store, temp_file.path()).unwrap();

        let report =
            DatasetLoader::load_from_file(temp_file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(report.store.records(), store.records());
    }

    #[test]
    fn test_reloaded_price_matches_rounded_price() {
        let temp_file = NamedTempFile::new().unwrap();
        let prices = [0.015, 0.045, 0.125, 2.675, 199.995];
        let store: FlightStore = prices
            .iter()
            .map(|price| flight("AB 1", 9, 0, *price, 0))
            .collect();
        save_to_file(&store, temp_file.path()).unwrap();

        let report =
            DatasetLoader::load_from_file(temp_file.path(), &LoadOptions::default()).unwrap();
        for (loaded, original) in report.store.iter().zip(store.iter()) {
            assert_eq!(loaded.price, original.rounded_price(), "{}", original.price);
            assert!(render_record(original).contains(&original.price_token()));
        }
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let missing = std::path::Path::new("/nonexistent/dir/out.txt");
        let result = save_to_file(&sample_store(), missing);
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to open"), "{}", message);
    }

    fn record_strategy() -> impl Strategy<Value = FlightRecord> {
        (
            "[A-Z0-9]{2,3} [0-9]{1,6}",
            "[A-Z]{3,4}",
            "[A-Z]{3,4}",
            any::<u32>(),
            0u8..24,
            0u8..60,
            0.0f64..100_000.0,
            0u8..10,
        )
            .prop_map(|(number, origin, destination, capacity, hour, minutes, price, stops)| {
                FlightRecord::new(
                    &number,
                    &origin,
                    &destination,
                    capacity,
                    DepartureTime::new(hour, minutes).unwrap(),
                    price,
                    stops,
                )
            })
    }

    proptest! {
        #[test]
        fn prop_serialize_load_round_trip(
            records in proptest::collection::vec(record_strategy(), 0..30)
        ) {
            let store = FlightStore::from_records(records.clone());
            let text = serialize_store(&store).join("\n");
            let report = DatasetLoader::load_from_str(&text, &LoadOptions::default()).unwrap();

            prop_assert_eq!(report.line_count, records.len() + 1);
            prop_assert_eq!(report.store.len(), records.len());
            for (loaded, original) in report.store.iter().zip(records.iter()) {
                prop_assert_eq!(&loaded.flight_number, &original.flight_number);
                prop_assert_eq!(&loaded.origin, &original.origin);
                prop_assert_eq!(&loaded.destination, &original.destination);
                prop_assert_eq!(loaded.capacity, original.capacity);
                prop_assert_eq!(loaded.departure, original.departure);
                prop_assert_eq!(loaded.stops, original.stops);
                prop_assert_eq!(loaded.price, original.rounded_price());
            }
        }
    }
}
