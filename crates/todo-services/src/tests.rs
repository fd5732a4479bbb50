use todo_domain::{DueDate, DueTime, Plan};

use crate::{
    codec::{decode, decode_all, decode_for_edit, encode, encode_all},
    plan_service::PlanService,
    validation::{
        days_in_month, is_valid_date, is_valid_time, parse_date_field, parse_time_field,
        validate_date, validate_description, validate_time, REFERENCE_YEAR,
    },
    CoreError,
};

#[test]
fn encode_writes_segments_in_fixed_order() {
    let plan = Plan::new("Buy milk")
        .with_time(Some(DueTime::new(14, 30)))
        .with_due(Some(DueDate::new(5, 6)));

    assert_eq!(encode(&plan), "Buy milk | Due: 5/6 | Time: 14:30");
}

#[test]
fn encode_omits_absent_segments() {
    assert_eq!(encode(&Plan::new("Read")), "Read");
    assert_eq!(
        encode(&Plan::new("Read").with_time(Some(DueTime::new(7, 5)))),
        "Read | Time: 7:05"
    );
    assert_eq!(
        encode(&Plan::new("Read").with_due(Some(DueDate::new(31, 12)))),
        "Read | Due: 31/12"
    );
}

#[test]
fn decode_restores_encoded_plans() {
    let plans = vec![
        Plan::new("Buy milk")
            .with_due(Some(DueDate::new(5, 6)))
            .with_time(Some(DueTime::new(14, 30))),
        Plan::new("Essay draft").with_due(Some(DueDate::new(29, 2))),
        Plan::new("Gym").with_time(Some(DueTime::new(0, 0))),
        Plan::new("Call | mum\nabout dinner"),
    ];

    for plan in &plans {
        assert_eq!(&decode(&encode(plan)), plan, "line: {}", encode(plan));
    }
    assert_eq!(decode_all(&encode_all(&plans)), plans);
}

#[test]
fn descriptions_with_stray_pipes_survive_round_trip() {
    for description in ["Buy milk |", "Buy milk|", "| Buy milk", "|"] {
        let bare = Plan::new(description);
        let dated = Plan::new(description)
            .with_due(Some(DueDate::new(5, 6)))
            .with_time(Some(DueTime::new(14, 30)));

        for plan in [bare, dated] {
            let line = encode(&plan);
            assert_eq!(decode(&line), plan, "line: {line}");
        }
    }

    assert_eq!(
        encode(
            &Plan::new("Buy milk |")
                .with_due(Some(DueDate::new(5, 6)))
                .with_time(Some(DueTime::new(14, 30)))
        ),
        "Buy milk / | Due: 5/6 | Time: 14:30"
    );
}

#[test]
fn decode_ignores_unknown_segments() {
    let plan = decode("Pack bag | Priority: high | Time: 8:15");
    assert_eq!(plan.description, "Pack bag");
    assert_eq!(plan.due, None);
    assert_eq!(plan.time, Some(DueTime::new(8, 15)));
}

#[test]
fn decode_drops_malformed_date_and_time() {
    let plan = decode("Lab report | Due: 31/2 | Time: noon");
    assert_eq!(plan.description, "Lab report");
    assert_eq!(plan.due, None);
    assert_eq!(plan.time, None);

    let plan = decode("Lab report | Due: 5 | Time: 25:00");
    assert_eq!(plan.due, None);
    assert_eq!(plan.time, None);
}

#[test]
fn decode_accepts_unpadded_minutes() {
    assert_eq!(decode("Nap | Time: 13:5").time, Some(DueTime::new(13, 5)));
}

#[test]
fn decode_for_edit_exposes_text_fields() {
    let fields = decode_for_edit("Buy milk | Due: 5/6 | Time: 14:30");
    assert_eq!(fields.description, "Buy milk");
    assert_eq!(fields.date_text(), "5/6");
    assert_eq!(fields.time_text(), "14:30");

    let empty = decode_for_edit("Just text");
    assert_eq!(empty.date_text(), "");
    assert_eq!(empty.time_text(), "");
}

#[test]
fn empty_pairs_are_valid() {
    assert_eq!(validate_date("", ""), Ok(None));
    assert_eq!(validate_time("", ""), Ok(None));
    assert_eq!(validate_date("  ", " "), Ok(None));
}

#[test]
fn half_filled_pairs_are_invalid() {
    assert!(!is_valid_date("5", ""));
    assert!(!is_valid_date("", "6"));
    assert!(!is_valid_time("12", ""));
    assert!(!is_valid_time("", "30"));
}

#[test]
fn february_follows_reference_year() {
    assert!(!is_valid_date("30", "2"));
    let leap = days_in_month(2, REFERENCE_YEAR) == Some(29);
    assert_eq!(is_valid_date("29", "2"), leap);
    assert_eq!(validate_date("29", "2"), Ok(Some(DueDate::new(29, 2))));
}

#[test]
fn date_ranges_are_enforced() {
    assert!(is_valid_date("31", "1"));
    assert!(!is_valid_date("31", "4"));
    assert!(!is_valid_date("0", "5"));
    assert!(!is_valid_date("1", "13"));
    assert!(!is_valid_date("1", "0"));
    assert!(!is_valid_date("x", "1"));
    assert!(!is_valid_date("1.5", "1"));
}

#[test]
fn time_ranges_are_enforced() {
    assert!(!is_valid_time("24", "00"));
    assert_eq!(validate_time("23", "59"), Ok(Some(DueTime::new(23, 59))));
    assert!(is_valid_time("0", "0"));
    assert!(!is_valid_time("12", "60"));
    assert!(!is_valid_time("ten", "5"));
}

#[test]
fn combined_fields_delegate_to_validators() {
    assert_eq!(parse_date_field(""), Ok(None));
    assert_eq!(parse_date_field(" 5/6 "), Ok(Some(DueDate::new(5, 6))));
    assert!(parse_date_field("5-6").is_err());
    assert!(parse_date_field("5/").is_err());
    assert!(parse_date_field("30/2").is_err());

    assert_eq!(parse_time_field(""), Ok(None));
    assert_eq!(parse_time_field("14:30"), Ok(Some(DueTime::new(14, 30))));
    assert!(parse_time_field("1430").is_err());
    assert!(parse_time_field("24:00").is_err());
}

#[test]
fn descriptions_must_not_be_blank() {
    assert!(validate_description(" \n ").is_err());
    assert_eq!(validate_description(" Buy\nmilk ").unwrap(), "Buy milk");
}

#[test]
fn plan_service_edits_positionally() {
    let mut plans = Vec::new();
    let first = PlanService::add(&mut plans, Plan::new("First")).expect("add first");
    let second = PlanService::add(&mut plans, Plan::new("Second")).expect("add second");
    assert_eq!((first, second), (0, 1));

    PlanService::update(&mut plans, 0, Plan::new("First (edited)")).expect("update");
    assert_eq!(plans[0].description, "First (edited)");
    assert_eq!(plans[1].description, "Second");

    let removed = PlanService::remove(&mut plans, 0).expect("remove");
    assert_eq!(removed.description, "First (edited)");
    assert_eq!(PlanService::get(&plans, 0).unwrap().description, "Second");
}

#[test]
fn plan_service_rejects_bad_input() {
    let mut plans = vec![Plan::new("Only")];

    assert!(matches!(
        PlanService::remove(&mut plans, 3),
        Err(CoreError::PlanNotFound(3))
    ));
    assert!(matches!(
        PlanService::update(&mut plans, 1, Plan::new("x")),
        Err(CoreError::PlanNotFound(1))
    ));
    assert!(matches!(
        PlanService::add(&mut plans, Plan::new("   ")),
        Err(CoreError::Validation(_))
    ));
    assert_eq!(plans.len(), 1);
}
