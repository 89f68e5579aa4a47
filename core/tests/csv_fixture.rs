// Innspilt løpetur (2 s sampling, kort stopp midtveis) lest fra CSV.
use activity_chart_core::{
    ActivityView, ChartContext, DistanceUnit, Metric, RowKind, Sample, Sport, SpeedUnit,
    UnitHints, ZoomRange,
};

fn load_run() -> Vec<Sample> {
    let mut rdr = csv::Reader::from_path("tests/data/easy_run.csv").expect("open fixture");
    rdr.deserialize().map(|r| r.expect("row")).collect()
}

#[test]
fn fixture_loads_with_gaps() {
    let samples = load_run();
    assert_eq!(samples.len(), 61);
    assert_eq!(samples.iter().filter(|s| s.hr.is_some()).count(), 59);
    assert!(samples.iter().all(|s| s.watts.is_none()));
}

#[test]
fn run_view_has_pace_and_no_power() {
    let samples = load_run();
    let ctx = ChartContext::new(Sport::parse("Run"));
    let view = ActivityView::prepare(&samples, &ctx);

    assert_eq!(view.activity.units.speed, SpeedUnit::MetersPerSecond);
    assert_eq!(view.activity.units.distance, DistanceUnit::Meters);

    let chart = view.chart.data().expect("chart");
    assert!(chart.axes.iter().all(|a| a.metric != Metric::Power));
    let pace = chart.axes.iter().find(|a| a.metric == Metric::Speed).unwrap();
    assert!(pace.reversed);
    // stoppet (0:00) skal ikke dra aksen ned til 0
    assert!(pace.min > 3.0, "pace axis min {}", pace.min);

    let hr = chart.series.iter().find(|s| s.metric == Metric::HeartRate).unwrap();
    assert_eq!(hr.points.len(), 59);

    let summary = view.summary.summary().expect("summary");
    assert!(summary.row(RowKind::Energy).is_none());
    assert!(summary.row(RowKind::Pace).is_some());
    assert_eq!(summary.row(RowKind::Duration).unwrap().value_display, "0:02:00");
}

#[test]
fn zoom_on_the_stop_shows_zero_pace_floor() {
    let samples = load_run();
    let ctx = ChartContext::new(Sport::parse("Run")).with_units(UnitHints {
        speed: Some(SpeedUnit::MetersPerSecond),
        distance: Some(DistanceUnit::Meters),
    });
    let view = ActivityView::prepare(&samples, &ctx);
    let zoom = ZoomRange::time(60.0, 66.0).unwrap();
    let out = view.summary_for(Some(&zoom), None);
    let s = out.summary().unwrap();
    assert_eq!(s.sample_count, 4);
    let pace = s.row(RowKind::Pace).unwrap();
    assert_eq!(pace.value_display, "0:00 /km");
    let dist = s.row(RowKind::Distance).unwrap();
    assert_eq!(dist.value, Some(0.0));
}
