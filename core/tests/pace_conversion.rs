use activity_chart_core::axis::display_value;
use activity_chart_core::units::{format_pace, pace_to_speed, speed_to_pace};
use activity_chart_core::{Metric, Sport};

#[test]
fn pace_round_trips_to_speed_for_running() {
    let running = Sport::parse("running");
    for v in [1.5_f64, 2.78, 3.3333, 4.0, 5.5, 6.2] {
        let pace = display_value(Metric::Speed, &running, v);
        let back = pace_to_speed(pace);
        assert!((back - v).abs() < 1e-9, "v={v} pace={pace} back={back}");
    }
}

#[test]
fn formatted_pace_round_trips_within_a_second() {
    // m:ss har sekundoppløsning
    for v in [2.9_f64, 3.7, 4.45] {
        let s = format_pace(speed_to_pace(v));
        let (m, sec) = s.split_once(':').expect("m:ss");
        let pace_min = m.parse::<f64>().unwrap() + sec.parse::<f64>().unwrap() / 60.0;
        let back = pace_to_speed(pace_min);
        let exact_pace = speed_to_pace(v);
        assert!((pace_min - exact_pace).abs() <= 0.5 / 60.0 + 1e-12);
        assert!((back - v).abs() / v < 0.01, "v={v} s={s} back={back}");
    }
}

#[test]
fn zero_speed_does_not_produce_nan() {
    let pace = speed_to_pace(0.0);
    assert!(pace.is_finite());
    assert_eq!(format_pace(pace), "0:00");
    assert_eq!(pace_to_speed(0.0), 0.0);
    assert_eq!(format_pace(speed_to_pace(-1.0)), "0:00");
}
