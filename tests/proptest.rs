use cronex::parser::parse_field;
use cronex::{CronEntry, Field, InvalidExpression};
use proptest::prelude::*;

fn arb_field() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Minute),
        Just(Field::Hour),
        Just(Field::DayOfMonth),
        Just(Field::Month),
        Just(Field::DayOfWeek),
    ]
}

/// Generate one valid, domain-bounded piece for `field`: a wildcard, a
/// single value, a range, or a step over a wildcard or range.
fn arb_piece(field: Field) -> impl Strategy<Value = String> {
    let domain = field.domain();
    let (lo, hi) = (*domain.start(), *domain.end());
    prop_oneof![
        Just("*".to_string()),
        (lo..=hi).prop_map(|v| v.to_string()),
        (lo..=hi, lo..=hi).prop_map(|(a, b)| {
            let (a, b) = if a <= b { (a, b) } else { (b, a) };
            format!("{a}-{b}")
        }),
        (1u8..30).prop_map(|step| format!("*/{step}")),
        (lo..=hi, lo..=hi, 1u8..30).prop_map(|(a, b, step)| {
            let (a, b) = if a <= b { (a, b) } else { (b, a) };
            format!("{a}-{b}/{step}")
        }),
    ]
}

/// A comma-joined list of 1 to 3 valid pieces.
fn arb_field_text(field: Field) -> impl Strategy<Value = String> {
    prop::collection::vec(arb_piece(field), 1..4).prop_map(|pieces| pieces.join(","))
}

fn arb_field_and_text() -> impl Strategy<Value = (Field, String)> {
    arb_field().prop_flat_map(|field| (Just(field), arb_field_text(field)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every valid field expands to a non-empty, strictly ascending
    /// (so also duplicate-free) set of in-domain values.
    #[test]
    fn expansion_is_sorted_unique_and_in_domain((field, text) in arb_field_and_text()) {
        let values = parse_field(&text, field.domain())
            .unwrap_or_else(|e| panic!("parse failed for '{text}': {e}"));
        prop_assert!(!values.is_empty(), "empty expansion for '{}'", text);
        prop_assert!(values.windows(2).all(|w| w[0] < w[1]),
            "not strictly ascending for '{}': {:?}", text, values);
        prop_assert!(values.iter().all(|v| field.domain().contains(v)),
            "out-of-domain value for '{}': {:?}", text, values);
    }

    /// Adding a wildcard piece anywhere collapses the union to the full
    /// domain.
    #[test]
    fn wildcard_piece_collapses_to_domain((field, text) in arb_field_and_text()) {
        let values = parse_field(&format!("{text},*"), field.domain()).unwrap();
        prop_assert_eq!(values, field.domain().collect::<Vec<u8>>());
    }

    /// A lone wildcard is exactly the domain.
    #[test]
    fn wildcard_is_exactly_the_domain(field in arb_field()) {
        let values = parse_field("*", field.domain()).unwrap();
        prop_assert_eq!(values, field.domain().collect::<Vec<u8>>());
    }

    /// Lines with any token count other than six never parse.
    #[test]
    fn non_six_token_lines_fail(n in 0usize..12) {
        prop_assume!(n != 6);
        let line = vec!["*"; n].join(" ");
        prop_assert_eq!(CronEntry::parse(&line), Err(InvalidExpression));
    }

    /// A full entry built from valid fields parses, keeps its command
    /// verbatim, and renders as a six-row table.
    #[test]
    fn full_entry_parses_and_renders(
        minute in arb_field_text(Field::Minute),
        hour in arb_field_text(Field::Hour),
        dom in arb_field_text(Field::DayOfMonth),
        month in arb_field_text(Field::Month),
        dow in arb_field_text(Field::DayOfWeek),
        command in "/bin/[a-z]{1,8}",
    ) {
        let line = format!("{minute} {hour} {dom} {month} {dow} {command}");
        let entry = CronEntry::parse(&line)
            .unwrap_or_else(|e| panic!("parse failed for '{line}': {e}"));
        prop_assert_eq!(&entry.command, &command);
        let rendered = entry.to_string();
        prop_assert_eq!(rendered.lines().count(), 6);
        prop_assert!(rendered.ends_with('\n'));
    }
}
