use crate::models::{ChartOutcome, SummaryOutcome};
use crate::view::ActivityView;

pub fn print_chart_report(view: &ActivityView) {
    println!("--- Chart ---");
    match &view.chart {
        ChartOutcome::NoData => println!("No data"),
        ChartOutcome::Ready(data) => {
            for (i, axis) in data.axes.iter().enumerate() {
                println!(
                    "#{i} {:<12} {:>8.1} .. {:<8.1} {:<7} {:?}+{}{}",
                    axis.label,
                    axis.min,
                    axis.max,
                    axis.unit,
                    axis.side,
                    axis.offset,
                    if axis.reversed { " (reversed)" } else { "" }
                );
            }
            for s in &data.series {
                println!("{}: {} points", s.name, s.points.len());
            }
        }
    }
}

pub fn print_summary_report(title: &str, summary: &SummaryOutcome) {
    println!("--- {title} ---");
    match summary {
        SummaryOutcome::NoData => println!("No data"),
        SummaryOutcome::NoDataInRange { zoom } => println!(
            "No data in range {:?} [{}, {}]",
            zoom.domain, zoom.start, zoom.end
        ),
        SummaryOutcome::Ready(s) => {
            println!("{:<16} {:>14} {:>14}", "", "Avg/Total", "Max");
            for row in &s.rows {
                println!(
                    "{:<16} {:>14} {:>14}",
                    row.name, row.value_display, row.max_display
                );
            }
            println!("({} samples)", s.sample_count);
        }
    }
}
