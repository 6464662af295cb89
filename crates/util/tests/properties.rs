//! Property-based checks for the invariants the helpers promise.

use proptest::prelude::*;
use serde_json::{Map, Value};

use utilkit::array::{chunk, unique};
use utilkit::date::{format_duration, DurationUnit, EN_DURATION_LABELS};
use utilkit::object::{deep_clone, deep_equal};
use utilkit::AnyValue;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000).prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<String, Value>>())),
        ]
    })
}

fn arb_template() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("HH:mm:ss")),
        Just(Some("YY-MM-DD HH:mm:ss")),
        Just(Some("D[d] H[h]")),
        Just(Some("H")),
        Just(Some("mm")),
        Just(Some("s")),
        Just(Some("Y")),
    ]
}

/// Sum a humanized English duration ("1 year 2 hours") back into millis.
fn reconstruct(text: &str) -> u64 {
    let tokens: Vec<&str> = text.split(' ').collect();
    tokens
        .chunks(2)
        .map(|pair| {
            let value: u64 = pair[0].parse().expect("count");
            let index = EN_DURATION_LABELS
                .singular
                .iter()
                .zip(EN_DURATION_LABELS.plural.iter())
                .position(|(one, many)| *one == pair[1] || *many == pair[1])
                .expect("known unit label");
            value * DurationUnit::ALL[index].millis()
        })
        .sum()
}

// ---------------------------------------------------------------------------
// Duration
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn humanized_duration_reconstructs_whole_seconds(ms in 0i64..10_000_000_000_000) {
        let text = format_duration(ms, None).to_string();
        prop_assert_eq!(reconstruct(&text), (ms as u64 / 1000) * 1000);
    }

    #[test]
    fn duration_ignores_sign(ms in 0i64..10_000_000_000_000, template in arb_template()) {
        prop_assert_eq!(format_duration(-ms, template), format_duration(ms, template));
    }
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn chunks_concatenate_to_input(items in prop::collection::vec(any::<u8>(), 0..64), size in 1i64..10) {
        let chunks = chunk(&items, size);
        prop_assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= size as usize));
        let joined: Vec<u8> = chunks.concat();
        prop_assert_eq!(joined, items);
    }

    #[test]
    fn unique_has_no_duplicates_and_keeps_first_seen_order(items in prop::collection::vec(0u8..16, 0..64)) {
        let deduped = unique(&items);
        let mut seen = std::collections::HashSet::new();
        prop_assert!(deduped.iter().all(|x| seen.insert(*x)));

        let mut expected = Vec::new();
        for x in &items {
            if !expected.contains(x) {
                expected.push(*x);
            }
        }
        prop_assert_eq!(deduped, expected);
    }
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn deep_clone_equals_source(json in arb_json()) {
        let original = AnyValue::from(json.clone());
        let cloned = deep_clone(&original);
        prop_assert!(deep_equal(&cloned, &original));
        prop_assert_eq!(cloned.to_json(), json);
    }
}
