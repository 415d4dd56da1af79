use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::errors::BenchplotError;
use crate::types::RunSummary;

const CHART_SIZE: (u32, u32) = (800, 600);
const AVG_FILL: RGBColor = RGBColor(255, 192, 203);
const MIN_FILL: RGBColor = RGBColor(0, 0, 255);

/// Render both comparison charts under `plot_dir`, overwriting any previous
/// ones.
///
/// The label list must line up with the aggregated sequences; a mismatch
/// would attach the wrong name to a bar, so it fails before any file is
/// touched.
pub fn render_charts(plot_dir: &Path, labels: &[String], summary: &RunSummary) -> Result<()> {
    if labels.len() != summary.len() {
        return Err(BenchplotError::LabelCountMismatch {
            labels: labels.len(),
            targets: summary.len(),
        }
        .into());
    }

    std::fs::create_dir_all(plot_dir)?;

    render_bar_chart(
        &plot_dir.join("avg_time.png"),
        labels,
        &summary.averages,
        AVG_FILL,
    )?;

    let minimums: Vec<f64> = summary.minimums.iter().map(|&v| v as f64).collect();
    render_bar_chart(&plot_dir.join("min_time.png"), labels, &minimums, MIN_FILL)?;

    Ok(())
}

/// One bar per value, x axis carrying the rotated display names, y axis in
/// milliseconds.
fn render_bar_chart(
    path: &Path,
    labels: &[String],
    values: &[f64],
    fill: RGBColor,
) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = values.iter().copied().fold(0.0_f64, f64::max).max(1.0) * 1.1;
    let slots = labels.len().max(1);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(110)
        .y_label_area_size(70)
        .build_cartesian_2d((0..slots).into_segmented(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("time in milliseconds")
        .x_labels(slots)
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) if *i < labels.len() => labels[*i].clone(),
            _ => String::new(),
        })
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
        let mut bar = Rectangle::new(bar_corners(i, v), fill.filled());
        bar.set_margin(0, 0, 8, 8);
        bar
    }))?;

    // outline pass on top of the fill
    chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
        let mut bar = Rectangle::new(bar_corners(i, v), BLACK.stroke_width(1));
        bar.set_margin(0, 0, 8, 8);
        bar
    }))?;

    root.present()?;
    Ok(())
}

fn bar_corners(index: usize, value: f64) -> [(SegmentValue<usize>, f64); 2] {
    [
        (SegmentValue::Exact(index), 0.0),
        (SegmentValue::Exact(index + 1), value),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(averages: Vec<f64>, minimums: Vec<i64>) -> RunSummary {
        RunSummary { averages, minimums }
    }

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn writes_both_chart_files() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let plot_dir = tmp.path().join("plots");

        render_charts(
            &plot_dir,
            &labels(&["basic", "work stealing"]),
            &summary(vec![120.5, 80.0], vec![100, 75]),
        )
        .unwrap();

        assert!(plot_dir.join("avg_time.png").is_file());
        assert!(plot_dir.join("min_time.png").is_file());
    }

    #[test]
    fn creates_nested_plot_directory() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let plot_dir = tmp.path().join("a").join("b").join("plots");

        render_charts(&plot_dir, &labels(&["x"]), &summary(vec![1.0], vec![1])).unwrap();
        assert!(plot_dir.join("avg_time.png").is_file());
    }

    #[test]
    fn rerender_overwrites_in_place() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let plot_dir = tmp.path().join("plots");
        let names = labels(&["only"]);

        render_charts(&plot_dir, &names, &summary(vec![50.0], vec![40])).unwrap();
        render_charts(&plot_dir, &names, &summary(vec![50.0], vec![40])).unwrap();

        // Exactly the two chart files, no duplicate artifacts.
        let mut entries: Vec<String> = std::fs::read_dir(&plot_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        assert_eq!(entries, vec!["avg_time.png", "min_time.png"]);
    }

    #[test]
    fn label_count_mismatch_writes_nothing() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let plot_dir = tmp.path().join("plots");

        let err = render_charts(
            &plot_dir,
            &labels(&["one", "two"]),
            &summary(vec![1.0], vec![1]),
        )
        .unwrap_err();

        assert!(err.to_string().contains("display names"));
        assert!(!plot_dir.exists());
    }

    #[test]
    fn renders_empty_summary() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let plot_dir = tmp.path().join("plots");

        render_charts(&plot_dir, &[], &RunSummary::default()).unwrap();
        assert!(plot_dir.join("avg_time.png").is_file());
        assert!(plot_dir.join("min_time.png").is_file());
    }

    #[test]
    fn renders_all_zero_values() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let plot_dir = tmp.path().join("plots");

        render_charts(&plot_dir, &labels(&["idle"]), &summary(vec![0.0], vec![0])).unwrap();
        assert!(plot_dir.join("avg_time.png").is_file());
    }
}
