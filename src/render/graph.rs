use plotters::prelude::*;

use std::f64::consts::PI;
use std::path::Path;

use super::drawing_error;
use crate::consts::{ECCENTRIC_ANOMALY_COLOR, MEAN_ANOMALY_COLOR, TRUE_ANOMALY_COLOR};
use crate::error::AnimationError;
use crate::samples::AnomalySamples;

/// Plots all three anomalies against time over one period.
pub fn plot_anomalies_graph(
    path: &Path,
    samples: &AnomalySamples,
    size: (u32, u32),
) -> Result<(), AnimationError> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error(path))?;

    let y_ticks: Vec<f64> = (0..=4).map(|k| k as f64 * PI / 2.0).collect();
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(
            (0.0..1.0).with_key_points(vec![0.0, 0.25, 0.5, 0.75, 1.0]),
            (0.0..2.0 * PI).with_key_points(y_ticks),
        )
        .map_err(drawing_error(path))?;

    chart
        .configure_mesh()
        .x_desc("Time since perihelion [t / T]")
        .y_desc("Anomaly")
        .x_label_formatter(&|t| format!("{}", t))
        .y_label_formatter(&|y| half_pi_label(*y))
        .draw()
        .map_err(drawing_error(path))?;

    let series = [
        ("True anomaly", samples.true_anomaly(), TRUE_ANOMALY_COLOR),
        ("Eccentric anomaly", samples.eccentric(), ECCENTRIC_ANOMALY_COLOR),
        ("Mean anomaly", samples.mean(), MEAN_ANOMALY_COLOR),
    ];
    for (label, values, color) in series.iter() {
        let color = *color;
        chart
            .draw_series(LineSeries::new(
                samples.time().iter().copied().zip(values.iter().copied()),
                color.stroke_width(3),
            ))
            .map_err(drawing_error(path))?
            .label(*label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(drawing_error(path))?;

    root.present().map_err(drawing_error(path))?;
    Ok(())
}

/// Labels a multiple of pi/2 the way you'd write it by hand.
fn half_pi_label(value: f64) -> String {
    let halves = (value / (PI / 2.0)).round() as i64;
    match halves {
        0 => "0".to_owned(),
        1 => "π/2".to_owned(),
        2 => "π".to_owned(),
        n if n % 2 == 0 => format!("{}π", n / 2),
        n => format!("{}π/2", n),
    }
}
