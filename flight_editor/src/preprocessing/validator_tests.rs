#[cfg(test)]
mod tests {
    use crate::core::error::LoadError;
    use crate::preprocessing::validator::LineValidator;

    const HEADER: &str = "Flight number,origin,destination,capacity,departure time,price,stops,";

    fn validate(lines: &[&str]) -> Result<usize, LoadError> {
        LineValidator::new().validate(lines.iter().copied())
    }

    #[test]
    fn test_valid_lines_are_counted() {
        let count = validate(&[
            HEADER,
            "AB 12,JFK,LAX,180,1230,199.99,0,",
            "CD 34,LAX,JFK,150,0805,89.50,1,",
        ])
        .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_header_only_and_empty_input() {
        assert_eq!(validate(&[HEADER]).unwrap(), 0);
        assert_eq!(validate(&[]).unwrap(), 0);
    }

    #[test]
    fn test_header_is_exempt_from_grammar() {
        assert_eq!(validate(&["whatever header", "AB 1,JFK,LAX,1,0000,1,0,"]).unwrap(), 1);
    }

    #[test]
    fn test_accepts_variants_of_the_grammar() {
        let validator = LineValidator::new();
        // three-character carrier, integer price, no trailing comma, CRLF
        assert!(validator.validate_line("U2X 9,LHR,CDG,0,2359,120,9", 2).is_ok());
        assert!(validator.validate_line("AB 12,JFK,LAX,180,1230,199.99,0,\r", 2).is_ok());
        assert!(validator.validate_line("A1 7,JFKX,SFO,20,0000,0.5,3,", 2).is_ok());
    }

    #[test]
    fn test_missing_space_in_flight_number_is_format_error() {
        let err = validate(&[
            HEADER,
            "AB 12,JFK,LAX,180,1230,199.99,0,",
            "AB12,JFK,LAX,180,1230,199.99,0,",
        ])
        .unwrap_err();
        match err {
            LoadError::Format { line, content } => {
                assert_eq!(line, 3);
                assert!(content.starts_with("AB12"));
            }
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_malformed_fields() {
        let validator = LineValidator::new();
        let bad = [
            "AB 12,jfk,LAX,180,1230,199.99,0,",  // lowercase airport
            "AB 12,JFK,LAX,-5,1230,199.99,0,",   // negative capacity
            "AB 12,JFK,LAX,180,930,199.99,0,",   // three-digit time
            "AB 12,JFK,LAX,180,1230,199.,0,",    // dangling decimal point
            "AB 12,JFK,LAX,180,1230,199.99,10,", // two-digit stops
            "ABCD 12,JFK,LAX,180,1230,199.99,0,", // four-character carrier
            "AB 12,JFK,LAX,180,1230,199.99,0,,",
        ];
        for line in bad {
            let err = validator.validate_line(line, 5).unwrap_err();
            assert!(
                matches!(err, LoadError::Format { line: 5, .. }),
                "{} should be rejected, got {:?}",
                line,
                err
            );
        }
    }

    #[test]
    fn test_blank_line_reports_its_position() {
        let err = validate(&[
            HEADER,
            "AB 12,JFK,LAX,180,1230,199.99,0,",
            "   ",
            "CD 34,LAX,JFK,150,0805,89.50,1,",
        ])
        .unwrap_err();
        assert!(matches!(err, LoadError::BlankLine { line: 3 }));

        let err = validate(&["", "AB 12,JFK,LAX,180,1230,199.99,0,"]).unwrap_err();
        assert!(matches!(err, LoadError::BlankLine { line: 1 }));
    }

    #[test]
    fn test_overlong_line_is_rejected_not_truncated() {
        let validator = LineValidator::with_max_line_length(40);
        let long = format!("AB {},JFK,LAX,180,1230,199.99,0,", "1".repeat(30));
        let err = validator.validate([HEADER.get(..30).unwrap(), long.as_str()]).unwrap_err();
        match err {
            LoadError::LineTooLong { line, length, max } => {
                assert_eq!(line, 2);
                assert_eq!(length, long.len());
                assert_eq!(max, 40);
            }
            other => panic!("expected line too long, got {:?}", other),
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let err = validate(&[HEADER, "bad line", ""]).unwrap_err();
        assert_eq!(err.line(), Some(2));
    }
}
