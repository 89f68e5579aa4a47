use activity_chart_core::{
    ActivityView, ChartConfig, ChartContext, DistanceUnit, Metrics, Sample, SpeedUnit, Sport,
    SummaryOutcome, UnitHints, ZoomRange,
};
use chrono::{TimeZone, Utc};

fn samples() -> Vec<Sample> {
    (0..20)
        .map(|i| Sample {
            t: i as f64 * 5.0,
            watts: Some(180.0 + i as f64),
            hr: Some(140.0),
            ..Default::default()
        })
        .collect()
}

#[test]
fn view_carries_start_time_and_uses_injected_config() {
    let mut cfg = ChartConfig::default();
    cfg.power_axis_floor = 1000.0;
    let start = Utc.with_ymd_and_hms(2026, 3, 14, 6, 0, 0).unwrap();
    let ctx = ChartContext::new(Sport::parse("Ride"))
        .with_config(&cfg)
        .with_start_time(start);

    let view = ActivityView::prepare(&samples(), &ctx);
    let chart = view.chart.data().unwrap();
    assert_eq!(chart.start_time, Some(start));
    assert_eq!(chart.axes[0].max, 1000.0);
}

#[test]
fn summary_for_none_or_full_extent_returns_full_summary() {
    let view = ActivityView::prepare(&samples(), &ChartContext::new(Sport::parse("Ride")));
    assert_eq!(view.summary_for(None, None), view.summary);
    let full = ZoomRange::time(0.0, 95.0).unwrap();
    assert_eq!(view.effective_zoom(Some(&full)), None);
    assert_eq!(view.summary_for(Some(&full), None), view.summary);
}

#[test]
fn telemetry_counts_views_and_empty_windows() {
    let telemetry = Metrics::new().unwrap();
    let ctx = ChartContext::new(Sport::parse("Ride")).with_telemetry(&telemetry);
    let view = ActivityView::prepare(&samples(), &ctx);

    let outside = ZoomRange::time(500.0, 600.0).unwrap();
    let out = view.summary_for(Some(&outside), Some(&telemetry));
    assert!(matches!(out, SummaryOutcome::NoDataInRange { .. }));

    let text = telemetry.render().unwrap();
    assert!(text.contains("chart_views_built_total 1"), "{text}");
    assert!(text.contains("chart_empty_zoom_total 1"), "{text}");
    // full-range sammendrag i prepare + zoom-sammendraget
    assert!(text.contains("chart_summaries_total 2"), "{text}");
}

fn moving_samples() -> Vec<Sample> {
    (0..10)
        .map(|i| Sample {
            t: i as f64,
            speed: Some(4.0),
            distance: Some(4.0 * i as f64 + 1000.0),
            ..Default::default()
        })
        .collect()
}

#[test]
fn telemetry_counts_inferred_units_only_when_undeclared() {
    let telemetry = Metrics::new().unwrap();
    let ctx = ChartContext::new(Sport::parse("Ride")).with_telemetry(&telemetry);
    ActivityView::prepare(&moving_samples(), &ctx);
    // fart og distanse gjettet hver for seg
    let text = telemetry.render().unwrap();
    assert!(text.contains("chart_units_inferred_total 2"), "{text}");

    let declared = Metrics::new().unwrap();
    let ctx = ChartContext::new(Sport::parse("Ride"))
        .with_units(UnitHints {
            speed: Some(SpeedUnit::MetersPerSecond),
            distance: Some(DistanceUnit::Meters),
        })
        .with_telemetry(&declared);
    ActivityView::prepare(&moving_samples(), &ctx);
    let text = declared.render().unwrap();
    assert!(text.contains("chart_units_inferred_total 0"), "{text}");
}

#[test]
fn samples_without_speed_or_distance_infer_nothing() {
    let telemetry = Metrics::new().unwrap();
    let ctx = ChartContext::new(Sport::parse("Ride")).with_telemetry(&telemetry);
    ActivityView::prepare(&samples(), &ctx);
    let text = telemetry.render().unwrap();
    assert!(text.contains("chart_units_inferred_total 0"), "{text}");
}
