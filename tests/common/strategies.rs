use lexflow_core::constants::processes;
use lexflow_core::EntityRecord;
use proptest::prelude::*;

/// Strategy for one of the built-in process ids
pub fn builtin_process_id_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(processes::ALL.to_vec())
}

/// Strategy for process ids, mostly known ones with some garbage mixed in
pub fn process_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => builtin_process_id_strategy().prop_map(str::to_string),
        1 => "[a-z\\-]{0,24}",
    ]
}

/// Strategy for raw statuses: realistic snake_case values plus arbitrary text
pub fn status_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "new", "draft", "sent", "viewed", "overdue", "escalated", "paid", "reconciled",
            "suspended", "closed", "failed", "sla_breached_24h", "completed", "",
        ])
        .prop_map(str::to_string),
        "[a-z_]{0,20}",
        any::<String>(),
    ]
}

/// Strategy for timestamp fields: valid RFC 3339 values, bare dates, garbage or nothing
pub fn timestamp_field_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        (-2_000i64..2_000).prop_map(|hours| {
            let base = chrono::DateTime::parse_from_rfc3339("2026-03-02T12:00:00Z").unwrap();
            (base + chrono::Duration::hours(hours)).to_rfc3339()
        }),
        "20[0-9]{2}-(0[1-9]|1[0-2])-(0[1-9]|1[0-9]|2[0-8])",
        "[a-z ]{0,12}",
    ])
}

/// Strategy for entity records with any mix of present and missing fields
pub fn entity_strategy() -> impl Strategy<Value = EntityRecord> {
    (
        prop::option::of(status_strategy()),
        timestamp_field_strategy(),
        timestamp_field_strategy(),
        timestamp_field_strategy(),
        timestamp_field_strategy(),
        prop::option::of("[A-Za-z ]{0,20}"),
    )
        .prop_map(
            |(status, due_date, sla_24h_deadline, created_at, last_movement_at, full_name)| {
                EntityRecord {
                    status,
                    due_date,
                    sla_24h_deadline,
                    created_at,
                    last_movement_at,
                    full_name,
                    ..EntityRecord::default()
                }
            },
        )
}
