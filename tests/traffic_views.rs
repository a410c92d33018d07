// tests/traffic_views.rs
use std::path::Path;

use presence_dash::core::numeric::{parse_visits, PercentChange};
use presence_dash::data::DataContext;
use presence_dash::store::DataSet;
use presence_dash::stores::{StoreRecord, StoreType};
use presence_dash::traffic::TrafficTable;
use presence_dash::views::{
    compare::CompareView,
    detail::DetailView,
    leaderboard::LeaderboardView,
    map::{MapView, MarkerColor},
    overview::OverviewView,
};

fn dataset(headers: &[&str], rows: &[&[&str]]) -> DataSet {
    DataSet::new(
        headers.iter().map(|s| s.to_string()).collect(),
        rows.iter().map(|r| r.iter().map(|s| s.to_string()).collect()).collect(),
    )
}

fn context(headers: &[&str], rows: &[&[&str]]) -> DataContext {
    let t = TrafficTable::from_dataset(&dataset(headers, rows), "Date", Path::new("t.csv")).unwrap();
    DataContext::new(t, Vec::new())
}

fn store(name: &str, kind: &str, lat: Option<f64>, lng: Option<f64>) -> StoreRecord {
    StoreRecord {
        name: name.into(),
        address: format!("{name} street"),
        phone: "02 0000 0000".into(),
        kind: StoreType::parse(kind),
        latitude: lat,
        longitude: lng,
    }
}

#[test]
fn visit_cells_are_coerced() {
    assert_eq!(parse_visits("1,234"), 1234);
    assert_eq!(parse_visits(" 56 "), 56);
    assert_eq!(parse_visits("nan"), 0);
    assert_eq!(parse_visits(""), 0);
    assert_eq!(parse_visits("n/a"), 0);
    assert_eq!(parse_visits("-5"), 0);
    assert_eq!(parse_visits("12.6"), 13);
}

#[test]
fn rows_are_sorted_by_date_and_coerced() {
    let ctx = context(
        &["Date", "a.com", "b.com"],
        &[
            &["2024-03-01", "1,500", "nan"],
            &["2024-01-01", "1,000", ""],
            &["2024-02-01", "1,200", "7"],
        ],
    );
    let t = &ctx.traffic;
    assert_eq!(t.len(), 3);
    assert_eq!(t.entities(), ["a.com", "b.com"]);
    assert_eq!(t.series(0), [1000, 1200, 1500]);
    assert_eq!(t.series(1), [0, 7, 0]);

    let ov = OverviewView::compute(&ctx);
    assert_eq!(ov.series.len(), 2);
    assert_eq!(ov.headers, ["Date", "a.com", "b.com"]);
    assert_eq!(ov.rows[0], ["2024-01-01", "1,000", "0"]);
}

#[test]
fn unparseable_date_is_fatal() {
    let ds = dataset(&["Date", "a.com"], &[&["someday", "1"]]);
    assert!(TrafficTable::from_dataset(&ds, "Date", Path::new("t.csv")).is_err());
}

#[test]
fn detail_handles_zero_previous_value() {
    let ctx = context(
        &["Date", "a.com"],
        &[&["2024-01", "0"], &["2024-02", "100"], &["2024-03", "150"]],
    );
    let v = DetailView::compute(&ctx, 0).unwrap();
    assert_eq!(v.entity, "a.com");
    assert_eq!(v.rows.len(), 3);

    assert_eq!(v.rows[0].previous, None);
    assert_eq!(v.rows[0].pct_change, PercentChange::Undefined);

    assert_eq!(v.rows[1].change, Some(100));
    assert_eq!(v.rows[1].pct_change, PercentChange::Undefined);
    assert_eq!(v.rows[1].pct_change.to_string(), "n/a");
    assert!(!v.rows[1].pct_change.is_defined());

    assert_eq!(v.rows[2].change, Some(50));
    assert_eq!(v.rows[2].pct_change.value(), Some(50.0));
    assert_eq!(v.pct_change_text(), "+50.0%");
    assert_eq!(v.latest_visits_text(), "150");
    assert_eq!(v.monthly_change_text(), "+50");

    assert!(DetailView::compute(&ctx, 9).is_none());
}

#[test]
fn leaderboard_is_a_stable_descending_sort() {
    let ctx = context(
        &["Date", "a.com", "b.com", "c.com", "d.com"],
        &[
            &["2024-01", "10", "50", "0", "10"],
            &["2024-02", "30", "20", "30", "40"],
        ],
    );
    let lb = LeaderboardView::compute(&ctx);
    let order: Vec<&str> = lb.entries.iter().map(|e| e.entity.as_str()).collect();
    assert_eq!(order, ["d.com", "a.com", "c.com", "b.com"]);

    let rows = lb.rows();
    assert_eq!(rows[0], ["d.com", "40", "10", "+30", "+300.0%"]);
    assert_eq!(rows[2], ["c.com", "30", "0", "+30", "n/a"]);
    assert_eq!(rows[3], ["b.com", "20", "50", "-30", "-60.0%"]);
}

#[test]
fn leaderboard_with_one_record_has_no_previous() {
    let ctx = context(&["Date", "a.com"], &[&["2024-01", "1,234"]]);
    let rows = LeaderboardView::compute(&ctx).rows();
    assert_eq!(rows, vec![vec!["a.com", "1,234", "n/a", "n/a", "n/a"]]);
}

#[test]
fn compare_keeps_pick_order_and_ignores_bad_picks() {
    let ctx = context(
        &["Date", "a.com", "b.com", "c.com"],
        &[&["2024-01", "1", "2", "3"]],
    );
    let v = CompareView::compute(&ctx, &[2, 0, 2, 17]);
    let names: Vec<&str> = v.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["c.com", "a.com"]);

    assert!(CompareView::compute(&ctx, &[]).is_empty());
    assert_eq!(CompareView::by_name(&ctx, &["b.com", "zzz"]).series.len(), 1);
}

#[test]
fn map_skips_missing_coordinates_and_colors_by_type() {
    let mut ctx = context(&["Date", "a.com"], &[&["2024-01", "1"]]);
    ctx.stores = vec![
        store("One", "ILS", Some(-33.8), Some(151.2)),
        store("Two", "Aidacare", Some(-37.8), Some(144.9)),
        store("Three", "Independent", Some(-31.9), Some(115.8)),
        store("Four", "ILS", None, None),
        store("Five", "ILS", Some(-27.4), None),
    ];

    let m = MapView::compute(&ctx);
    assert_eq!(m.markers.len(), 3);
    assert_eq!(m.skipped, 2);
    let colors: Vec<MarkerColor> = m.markers.iter().map(|k| k.color).collect();
    assert_eq!(colors, [MarkerColor::Blue, MarkerColor::Green, MarkerColor::Red]);
    assert_eq!(m.center, (-25.0, 133.0));

    let near = m.nearest(115.0, -32.0).unwrap();
    assert_eq!(near.name, "Three");
    assert_eq!(near.popup(), "Three\nThree street\n02 0000 0000");
}

#[test]
fn map_reports_store_load_error() {
    let mut ctx = DataContext::default();
    ctx.stores_error = Some("missing file".into());
    let m = MapView::compute(&ctx);
    assert!(m.markers.is_empty());
    assert_eq!(m.error.as_deref(), Some("missing file"));
}
