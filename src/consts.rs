use plotters::style::RGBColor;

// Colors picked from https://davidmathlogic.com/colorblind
pub const MEAN_ANOMALY_COLOR: RGBColor = RGBColor(0x64, 0x8F, 0xFF);
pub const ECCENTRIC_ANOMALY_COLOR: RGBColor = RGBColor(0xDC, 0x26, 0x7F);
pub const TRUE_ANOMALY_COLOR: RGBColor = RGBColor(0xFF, 0xB0, 0x00);

/// Radius of the filled wedges marking each angle, in units of the semi-major axis
pub const ARC_RADIUS: f64 = 0.12;
/// The mean anomaly gets its own wedge off to the side, at this x-coordinate
pub const MEAN_ANOMALY_DIAL_X: f64 = 1.4;

pub const GRAPH_FILE_NAME: &str = "anomalies.png";
pub const FRAMES_DIR_NAME: &str = "frames";
pub const VIDEO_FILE_NAME: &str = "kepler.mp4";
