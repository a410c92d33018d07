// tests/address_split.rs
use presence_dash::error::Error;
use presence_dash::geocode::{parse_dump, SplitRule};

fn lines(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn address_keeps_its_commas() {
    let rule = SplitRule::new(3, 1);
    let fields = rule
        .split("Acme Store, 1 Main St, Unit 2, Springfield, 555-1234, ILS", 1)
        .unwrap();
    assert_eq!(
        fields,
        ["Acme Store", "1 Main St, Unit 2, Springfield", "555-1234", "ILS"]
    );
}

#[test]
fn exact_field_count_splits_plainly() {
    let rule = SplitRule::new(3, 1);
    assert_eq!(
        rule.split("Shop,12 High St,02 9999 0000,Aidacare", 1).unwrap(),
        ["Shop", "12 High St", "02 9999 0000", "Aidacare"]
    );
}

#[test]
fn too_few_commas_is_malformed() {
    let rule = SplitRule::new(3, 1);
    let err = rule.split("Shop,12 High St,ILS", 7).unwrap_err();
    match err {
        Error::MalformedRow { line, expected, found } => {
            assert_eq!((line, expected, found), (7, 4, 3));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn dump_skips_leading_rows_and_keeps_order() {
    let dump = lines(&[
        "Stores export",
        "name,address,phone,type",
        "A, 1 First St, Sydney NSW, 111, ILS",
        "B, 2 Second St, 222, Aidacare",
        "C, 3 Third St, Unit 4, Perth WA, 333, Other",
    ]);
    let rows = parse_dump(&dump, 2, SplitRule::new(3, 1)).unwrap();

    let names: Vec<&str> = rows.iter().map(|r| r.store.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert_eq!(rows[0].address, "1 First St, Sydney NSW");
    assert_eq!(rows[2].address, "3 Third St, Unit 4, Perth WA");
    assert_eq!(rows[1].phone, "222");
    assert_eq!(rows[2].kind, "Other");
}

#[test]
fn malformed_line_reports_its_file_line() {
    let dump = lines(&["junk", "junk", "A, 1 First St, 111, ILS", "broken line"]);
    let err = parse_dump(&dump, 2, SplitRule::new(3, 1)).unwrap_err();
    assert!(matches!(err, Error::MalformedRow { line: 4, .. }));
}

#[test]
fn rule_must_yield_four_fields() {
    let dump = lines(&["A,B,C"]);
    let err = parse_dump(&dump, 0, SplitRule::new(2, 1)).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
