//! Property-based tests for the algebra of rule lists.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use roster_filter::prelude::*;
use serde_json::{Value, json};

const NAMES: [&str; 6] = ["David", "Sarah", "Priya", "dave", "", "Okafor"];
const STATUSES: [&str; 4] = ["APPROVED", "PENDING", "DENIED", "IN_PROGRESS"];
const FIELDS: [&str; 5] = [
    "firstName",
    "npi",
    "basicInfo.cred_approval_status",
    "address.stateId",
    "email",
];

fn record() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(NAMES.to_vec()),
        prop::option::of(1_000_000_000_u64..2_000_000_000),
        prop::sample::select(STATUSES.to_vec()),
        prop::collection::vec(1_u32..52, 0..3),
        prop::option::of(prop::sample::select(NAMES.to_vec())),
    )
        .prop_map(|(name, npi, status, states, email)| {
            let address: Vec<Value> = states.into_iter().map(|s| json!({"stateId": s})).collect();
            json!({
                "firstName": name,
                "npi": npi,
                "basicInfo": {"cred_approval_status": status},
                "address": address,
                "email": email,
            })
        })
}

fn operand() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::sample::select(NAMES.to_vec()).prop_map(Value::from),
        prop::sample::select(STATUSES.to_vec()).prop_map(Value::from),
        (1_u32..52).prop_map(Value::from),
        (1_000_000_000_u64..2_000_000_000).prop_map(Value::from),
    ]
}

fn rule() -> impl Strategy<Value = FilterRule> {
    (
        prop::sample::select(FIELDS.to_vec()),
        prop::sample::select(Operator::ALL.to_vec()),
        operand(),
        operand(),
    )
        .prop_map(|(field, operator, value, second)| {
            FilterRule::new("p", field, operator, value).with_second_value(second)
        })
}

fn engine() -> FilterEngine {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    FilterEngine::new(FilterConfig::default().with_reference_time(now))
}

fn positions(records: &[Value], matched: &[&Value]) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matched.iter().any(|m| std::ptr::eq(*m, *r)))
        .map(|(i, _)| i)
        .collect()
}

proptest! {
    #[test]
    fn no_rules_keep_everything(records in prop::collection::vec(record(), 0..20)) {
        let out = engine().apply(&records, &[]);
        prop_assert_eq!(out.len(), records.len());
        prop_assert!(out.iter().zip(&records).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn inert_rules_change_nothing(
        records in prop::collection::vec(record(), 0..20),
        rules in prop::collection::vec(rule(), 0..4),
    ) {
        let engine = engine();
        let mut padded = rules.clone();
        padded.push(FilterRule::empty("blank"));
        padded.insert(0, FilterRule::unary("half", "", Operator::IsEmpty));
        prop_assert_eq!(
            positions(&records, &engine.apply(&records, &rules)),
            positions(&records, &engine.apply(&records, &padded))
        );
    }

    #[test]
    fn conjunction_is_intersection(
        records in prop::collection::vec(record(), 0..20),
        first in rule(),
        second in rule(),
    ) {
        let engine = engine();
        let a = positions(&records, &engine.apply(&records, std::slice::from_ref(&first)));
        let b = positions(&records, &engine.apply(&records, std::slice::from_ref(&second)));
        let both = positions(&records, &engine.apply(&records, &[first, second]));
        let expected: Vec<usize> = a.into_iter().filter(|i| b.contains(i)).collect();
        prop_assert_eq!(both, expected);
    }

    #[test]
    fn output_is_an_ordered_subset(
        records in prop::collection::vec(record(), 0..20),
        rules in prop::collection::vec(rule(), 0..4),
    ) {
        let matched = engine().apply(&records, &rules);
        let found = positions(&records, &matched);
        prop_assert_eq!(found.len(), matched.len());
        prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn emptiness_is_complementary(record in record()) {
        let engine = engine();
        for field in FIELDS {
            let empty = engine.matches(&record, &[FilterRule::unary("e", field, Operator::IsEmpty)]);
            let full = engine.matches(&record, &[FilterRule::unary("f", field, Operator::IsNotEmpty)]);
            prop_assert_ne!(empty, full, "{}", field);
        }
    }

    #[test]
    fn negated_operators_split_every_record(record in record(), value in operand()) {
        let engine = engine();
        let pairs = [
            (Operator::Equals, Operator::NotEquals),
            (Operator::Contains, Operator::NotContains),
            (Operator::In, Operator::NotIn),
        ];
        for field in FIELDS {
            for (positive, negative) in pairs {
                let yes = engine.matches(&record, &[FilterRule::new("p", field, positive, value.clone())]);
                let no = engine.matches(&record, &[FilterRule::new("n", field, negative, value.clone())]);
                prop_assert_ne!(yes, no, "{} {}", field, positive);
            }
        }
    }
}
