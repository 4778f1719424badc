use plotters::prelude::*;

use std::path::{Path, PathBuf};

use super::{drawing_error, wedge};
use crate::consts::{
    ARC_RADIUS, ECCENTRIC_ANOMALY_COLOR, MEAN_ANOMALY_COLOR, MEAN_ANOMALY_DIAL_X,
    TRUE_ANOMALY_COLOR,
};
use crate::error::AnimationError;
use crate::orbit::Ellipse;
use crate::samples::AnomalySamples;

const PATH_POINTS: usize = 361;
const DOT_RADIUS: i32 = 12;

pub fn frame_path(frames_dir: &Path, index: usize) -> PathBuf {
    frames_dir.join(format!("frame{:04}.png", index))
}

/// Draws the orbit at sample `index`: the eccentric anomaly measured at the
/// center against the auxiliary circle, the true anomaly measured at the
/// focus, and the mean anomaly as a dial off to the side.
pub fn render_frame(
    path: &Path,
    samples: &AnomalySamples,
    ellipse: &Ellipse,
    index: usize,
    size: (u32, u32),
) -> Result<(), AnimationError> {
    let row = samples.get(index).ok_or(AnimationError::FrameOutOfRange {
        index,
        len: samples.len(),
    })?;

    let a = ellipse.semimajor_axis();
    let focus = ellipse.focus();
    let center = ellipse.center();
    let body = ellipse.position_at(row.true_anomaly);
    let aux = ellipse.auxiliary_point_at(row.eccentric);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error(path))?;

    // Keep the aspect ratio equal, so the circle looks like a circle
    let x_range = (-1.1 * a)..(1.7 * a);
    let (width, height) = size;
    let half_height = (x_range.end - x_range.start) * height as f64 / width as f64 / 2.0;
    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(x_range, -half_height..half_height)
        .map_err(drawing_error(path))?;

    let to_tuple = |p: nalgebra::Point2<f64>| (p.x, p.y);

    // The orbit itself, and the auxiliary circle
    chart
        .draw_series(LineSeries::new(
            ellipse.orbit_path(PATH_POINTS).map(to_tuple),
            BLACK.stroke_width(4),
        ))
        .map_err(drawing_error(path))?;
    chart
        .draw_series(LineSeries::new(
            ellipse.auxiliary_circle_path(PATH_POINTS).map(to_tuple),
            BLACK.stroke_width(2),
        ))
        .map_err(drawing_error(path))?;

    // Eccentric anomaly: from the center, between the focus and the point
    // on the auxiliary circle
    let ecc_style = ECCENTRIC_ANOMALY_COLOR.stroke_width(3);
    chart
        .draw_series(vec![
            PathElement::new(vec![to_tuple(center), to_tuple(aux)], ecc_style),
            PathElement::new(vec![to_tuple(center), to_tuple(focus)], ecc_style),
        ])
        .map_err(drawing_error(path))?;
    chart
        .draw_series(std::iter::once(Polygon::new(
            wedge(to_tuple(center), ARC_RADIUS * a, 0.0, row.eccentric),
            ECCENTRIC_ANOMALY_COLOR.filled(),
        )))
        .map_err(drawing_error(path))?
        .label("Eccentric anomaly")
        .legend(|(x, y)| legend_swatch(x, y, ECCENTRIC_ANOMALY_COLOR));

    // True anomaly: from the focus, between periapsis and the body
    let true_style = TRUE_ANOMALY_COLOR.stroke_width(3);
    chart
        .draw_series(vec![
            PathElement::new(vec![to_tuple(focus), to_tuple(body)], true_style),
            PathElement::new(
                vec![to_tuple(focus), to_tuple(ellipse.periapsis())],
                true_style,
            ),
        ])
        .map_err(drawing_error(path))?;
    chart
        .draw_series(std::iter::once(Polygon::new(
            wedge(to_tuple(focus), ARC_RADIUS * a, 0.0, row.true_anomaly),
            TRUE_ANOMALY_COLOR.filled(),
        )))
        .map_err(drawing_error(path))?
        .label("True anomaly")
        .legend(|(x, y)| legend_swatch(x, y, TRUE_ANOMALY_COLOR));

    // Mean anomaly doesn't correspond to anything geometric, so it gets a dial
    chart
        .draw_series(std::iter::once(Polygon::new(
            wedge(
                (MEAN_ANOMALY_DIAL_X * a, 0.0),
                2.0 * ARC_RADIUS * a,
                0.0,
                row.mean,
            ),
            MEAN_ANOMALY_COLOR.filled(),
        )))
        .map_err(drawing_error(path))?
        .label("Mean anomaly")
        .legend(|(x, y)| legend_swatch(x, y, MEAN_ANOMALY_COLOR));

    chart
        .draw_series(vec![
            Circle::new(to_tuple(body), DOT_RADIUS, BLACK.filled()),
            Circle::new(to_tuple(focus), DOT_RADIUS, BLACK.filled()),
        ])
        .map_err(drawing_error(path))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 32))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(drawing_error(path))?;

    root.present().map_err(drawing_error(path))?;
    Ok(())
}

fn legend_swatch(x: i32, y: i32, color: RGBColor) -> Rectangle<(i32, i32)> {
    Rectangle::new([(x, y - 8), (x + 24, y + 8)], color.filled())
}
