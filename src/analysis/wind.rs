//! Wind radar: maps observations to polar points, projects them onto a canvas and derives
//! a colour from each point's wind chill.
//!
//! # Angle conventions
//!
//! Two conventions meet in this module and are deliberately kept apart:
//!
//! * **Storage** ([`crate::Observation::wind_direction`]): meteorological degrees, where
//!   0/360 is North and angles increase clockwise.
//! * **Projection** ([`polar_to_xy`]): screen-space maths degrees, where 0 points right (east)
//!   and angles increase counter-clockwise on screen (the y axis grows downwards, so the
//!   sine term is subtracted).
//!
//! [`WindPoint::angle`] carries the stored direction unchanged and is fed to [`polar_to_xy`]
//! as-is. Callers that want north-up plotting must convert explicitly; the projection formula
//! must not be changed to hide the difference. The compass ring ([`compass_labels`]) uses a
//! third, label-only placement where y grows with the sine (N at 270°).

use crate::types::observation::Observation;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::f64::consts::PI;

/// Hue of every radar point (blue), on a 0..1 scale.
pub const CHILL_HUE: f64 = 0.6;
/// Saturation of every radar point.
pub const CHILL_SATURATION: f64 = 1.0;
/// Brightness lost from the coldest reading (1.0) to the warmest (0.6).
pub const CHILL_DIMMING: f64 = 0.4;

/// Polar representation of one observation's wind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindPoint {
    /// Wind direction in degrees, as stored (meteorological convention).
    pub angle: f64,
    /// Wind speed in mph.
    pub radius: f64,
    /// Wind chill in °F, used for colouring.
    pub intensity: f64,
}

impl From<&Observation> for WindPoint {
    fn from(observation: &Observation) -> Self {
        WindPoint {
            angle: f64::from(observation.wind_direction),
            radius: observation.wind_speed,
            intensity: observation.wind_chill,
        }
    }
}

/// One [`WindPoint`] per observation, in subset order.
pub fn wind_points(subset: &[Observation]) -> Vec<WindPoint> {
    subset.iter().map(WindPoint::from).collect()
}

/// Size of the drawing area a projection targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

/// A position on the canvas, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Projects a polar coordinate onto the canvas.
///
/// ```text
/// θ  = angle · π / 180
/// r' = (radius / max_radius) · min(width, height) / 2
/// x  = width / 2  + cos θ · r'
/// y  = height / 2 − sin θ · r'
/// ```
///
/// 0° points right and angles turn counter-clockwise on screen. This is *not* the
/// meteorological convention of stored wind directions; see the module docs.
///
/// If `max_radius` is zero, negative or not finite the point is placed at the centre instead
/// of dividing by zero.
///
/// # Examples
///
/// ```
/// use weather_view::{polar_to_xy, CanvasSize, ScreenPoint};
///
/// let canvas = CanvasSize::new(200.0, 200.0);
/// let p = polar_to_xy(0.0, 10.0, 10.0, canvas);
/// assert_eq!(p, ScreenPoint { x: 200.0, y: 100.0 });
/// ```
pub fn polar_to_xy(angle: f64, radius: f64, max_radius: f64, size: CanvasSize) -> ScreenPoint {
    let center = size.center();
    if !(max_radius.is_finite() && max_radius > 0.0) {
        return center;
    }
    let angle_rad = angle * PI / 180.0;
    let scaled_radius = (radius / max_radius) * size.width.min(size.height) / 2.0;
    ScreenPoint {
        x: center.x + angle_rad.cos() * scaled_radius,
        y: center.y - angle_rad.sin() * scaled_radius,
    }
}

/// Colour of a radar point in HSB, all components on a 0..1 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChillColor {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl ChillColor {
    /// Converts to 8-bit sRGB components. Components are clamped to 0..1 first.
    pub fn to_rgb(&self) -> [u8; 3] {
        let h = self.hue.clamp(0.0, 1.0) * 6.0;
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.brightness.clamp(0.0, 1.0);

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match sector as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        [r, g, b].map(|c| (c * 255.0).round() as u8)
    }
}

/// A [`WindPoint`] placed and coloured for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedWindPoint {
    pub point: WindPoint,
    pub position: ScreenPoint,
    pub color: ChillColor,
}

/// The wind points of a subset together with the aggregates used to scale and colour them.
///
/// Aggregates fall back to fixed defaults on an empty subset so that nothing downstream
/// divides by zero: `max_speed = 1`, `min_chill = 0`, `max_chill = 1`. The colour scale is
/// derived only from this subset and is rebuilt whenever the subset changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindRadar {
    pub points: Vec<WindPoint>,
    pub max_speed: f64,
    pub min_chill: f64,
    pub max_chill: f64,
}

impl WindRadar {
    /// Builds the radar for `subset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_view::WindRadar;
    ///
    /// let radar = WindRadar::from_subset(&[]);
    /// assert!(radar.points.is_empty());
    /// assert_eq!(radar.max_speed, 1.0);
    /// assert_eq!((radar.min_chill, radar.max_chill), (0.0, 1.0));
    /// ```
    pub fn from_subset(subset: &[Observation]) -> Self {
        let points = wind_points(subset);

        let max_speed = points
            .iter()
            .map(|p| OrderedFloat(p.radius))
            .max()
            .map_or(1.0, |v| v.0);
        let min_chill = points
            .iter()
            .map(|p| OrderedFloat(p.intensity))
            .min()
            .map_or(0.0, |v| v.0);
        let max_chill = points
            .iter()
            .map(|p| OrderedFloat(p.intensity))
            .max()
            .map_or(1.0, |v| v.0);

        Self {
            points,
            max_speed,
            min_chill,
            max_chill,
        }
    }

    /// Position of `chill` within this radar's chill range, `0.0` at the coldest reading.
    ///
    /// When every reading has the same chill the range is empty and the fraction is `0.0`.
    pub fn chill_fraction(&self, chill: f64) -> f64 {
        let range = self.max_chill - self.min_chill;
        if range == 0.0 || !range.is_finite() {
            return 0.0;
        }
        (chill - self.min_chill) / range
    }

    /// Colour for `chill`: fixed blue hue, brightness `1 - fraction * 0.4`.
    pub fn chill_color(&self, chill: f64) -> ChillColor {
        ChillColor {
            hue: CHILL_HUE,
            saturation: CHILL_SATURATION,
            brightness: 1.0 - self.chill_fraction(chill) * CHILL_DIMMING,
        }
    }

    /// Places every point on a canvas of `size`, scaled against [`WindRadar::max_speed`].
    pub fn project(&self, size: CanvasSize) -> Vec<ProjectedWindPoint> {
        self.points
            .iter()
            .map(|&point| ProjectedWindPoint {
                point,
                position: polar_to_xy(point.angle, point.radius, self.max_speed, size),
                color: self.chill_color(point.intensity),
            })
            .collect()
    }
}

/// A speed guide ring of the radar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarRing {
    /// Ring radius in canvas units.
    pub radius: f64,
    /// Wind speed (mph) the ring stands for, rounded to a whole number.
    pub speed: f64,
}

impl RadarRing {
    pub fn label(&self) -> String {
        format!("{} mph", self.speed)
    }
}

/// The four evenly spaced speed rings, innermost first.
///
/// Ring `i` (1 to 4) has radius `width / 2 · i / 4` and represents `max_speed · i / 4`.
pub fn radar_rings(max_speed: f64, size: CanvasSize) -> [RadarRing; 4] {
    [1.0, 2.0, 3.0, 4.0].map(|i| {
        let fraction = i / 4.0;
        RadarRing {
            radius: size.width / 2.0 * fraction,
            speed: (max_speed * fraction).round(),
        }
    })
}

/// A compass label and where to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompassLabel {
    pub label: &'static str,
    pub position: ScreenPoint,
}

/// Compass points with their label-placement angle (degrees, y growing with the sine).
pub const COMPASS_POINTS: [(&str, f64); 8] = [
    ("N", 270.0),
    ("NE", 315.0),
    ("E", 0.0),
    ("SE", 45.0),
    ("S", 90.0),
    ("SW", 135.0),
    ("W", 180.0),
    ("NW", 225.0),
];

/// Places the eight compass labels just outside the radar.
///
/// Labels sit on a circle of radius `width / 2 + offset` around the centre, at
/// `x = cx + cos θ · R`, `y = cy + sin θ · R`.
pub fn compass_labels(size: CanvasSize, offset: f64) -> [CompassLabel; 8] {
    let center = size.center();
    let label_radius = size.width / 2.0 + offset;
    COMPASS_POINTS.map(|(label, angle)| {
        let angle_rad = angle * PI / 180.0;
        CompassLabel {
            label,
            position: ScreenPoint {
                x: center.x + angle_rad.cos() * label_radius,
                y: center.y + angle_rad.sin() * label_radius,
            },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const EPS: f64 = 1e-9;

    fn observation(direction: i32, speed: f64, chill: f64) -> Observation {
        Observation {
            timestamp: Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
            temperature: chill + 3.0,
            humidity: 70.0,
            dew_point: 20.0,
            pressure: 30.1,
            wind_chill: chill,
            wind_speed: speed,
            wind_direction: direction,
            rainfall_rate: 0.0,
            uv_index: 0,
        }
    }

    fn close(a: ScreenPoint, b: ScreenPoint) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn points_follow_subset_order() {
        let subset = [observation(90, 5.0, 30.0), observation(270, 12.0, 20.0)];
        assert_eq!(
            wind_points(&subset),
            [
                WindPoint { angle: 90.0, radius: 5.0, intensity: 30.0 },
                WindPoint { angle: 270.0, radius: 12.0, intensity: 20.0 },
            ]
        );
    }

    #[test]
    fn empty_subset_defaults() {
        let radar = WindRadar::from_subset(&[]);
        assert!(radar.points.is_empty());
        assert_eq!(radar.max_speed, 1.0);
        assert_eq!(radar.min_chill, 0.0);
        assert_eq!(radar.max_chill, 1.0);
        assert!(radar.project(CanvasSize::new(100.0, 100.0)).is_empty());
    }

    #[test]
    fn aggregates() {
        let subset = [
            observation(0, 5.0, 30.0),
            observation(90, 12.0, 10.0),
            observation(180, 8.0, 25.0),
        ];
        let radar = WindRadar::from_subset(&subset);
        assert_eq!(radar.max_speed, 12.0);
        assert_eq!(radar.min_chill, 10.0);
        assert_eq!(radar.max_chill, 30.0);
        assert_eq!(radar.chill_fraction(10.0), 0.0);
        assert_eq!(radar.chill_fraction(30.0), 1.0);
        assert_eq!(radar.chill_fraction(20.0), 0.5);
    }

    #[test]
    fn identical_chill_gives_zero_fraction() {
        let subset = [observation(0, 5.0, 12.0), observation(45, 7.0, 12.0)];
        let radar = WindRadar::from_subset(&subset);
        for point in &radar.points {
            let fraction = radar.chill_fraction(point.intensity);
            assert_eq!(fraction, 0.0);
            assert!(!fraction.is_nan());
            assert_eq!(radar.chill_color(point.intensity).brightness, 1.0);
        }
    }

    #[test]
    fn warmest_reading_is_dimmest() {
        let subset = [observation(0, 5.0, 0.0), observation(0, 5.0, 40.0)];
        let radar = WindRadar::from_subset(&subset);
        let cold = radar.chill_color(0.0);
        let warm = radar.chill_color(40.0);
        assert_eq!(cold.brightness, 1.0);
        assert!((warm.brightness - 0.6).abs() < EPS);
        assert_eq!(cold.hue, 0.6);
        assert_eq!(cold.saturation, 1.0);
    }

    #[test]
    fn projection_uses_screen_convention() {
        let canvas = CanvasSize::new(200.0, 200.0);
        assert!(close(
            polar_to_xy(0.0, 10.0, 10.0, canvas),
            ScreenPoint { x: 200.0, y: 100.0 }
        ));
        assert!(close(
            polar_to_xy(90.0, 10.0, 10.0, canvas),
            ScreenPoint { x: 100.0, y: 0.0 }
        ));
        assert!(close(
            polar_to_xy(180.0, 5.0, 10.0, canvas),
            ScreenPoint { x: 50.0, y: 100.0 }
        ));
    }

    #[test]
    fn projection_scales_to_smaller_side() {
        let canvas = CanvasSize::new(100.0, 300.0);
        assert!(close(
            polar_to_xy(0.0, 10.0, 10.0, canvas),
            ScreenPoint { x: 100.0, y: 150.0 }
        ));
    }

    #[test]
    fn zero_max_radius_stays_at_center() {
        let canvas = CanvasSize::new(100.0, 100.0);
        assert_eq!(polar_to_xy(45.0, 0.0, 0.0, canvas), canvas.center());

        let radar = WindRadar::from_subset(&[observation(45, 0.0, 10.0)]);
        assert_eq!(radar.max_speed, 0.0);
        let projected = radar.project(canvas);
        assert_eq!(projected[0].position, canvas.center());
    }

    #[test]
    fn north_wind_plots_to_the_right() {
        let radar = WindRadar::from_subset(&[observation(0, 10.0, 10.0)]);
        let projected = radar.project(CanvasSize::new(100.0, 100.0));
        assert!(close(projected[0].position, ScreenPoint { x: 100.0, y: 50.0 }));
    }

    #[test]
    fn rgb_of_chill_colors() {
        let bright = ChillColor { hue: 0.6, saturation: 1.0, brightness: 1.0 };
        assert_eq!(bright.to_rgb(), [0, 102, 255]);
        let dim = ChillColor { hue: 0.6, saturation: 1.0, brightness: 0.6 };
        assert_eq!(dim.to_rgb(), [0, 61, 153]);
    }

    #[test]
    fn rings_divide_max_speed() {
        let rings = radar_rings(20.0, CanvasSize::new(200.0, 200.0));
        let radii: Vec<f64> = rings.iter().map(|r| r.radius).collect();
        let speeds: Vec<f64> = rings.iter().map(|r| r.speed).collect();
        assert_eq!(radii, [25.0, 50.0, 75.0, 100.0]);
        assert_eq!(speeds, [5.0, 10.0, 15.0, 20.0]);
        assert_eq!(rings[0].label(), "5 mph");

        let rings = radar_rings(1.0, CanvasSize::new(200.0, 200.0));
        let speeds: Vec<f64> = rings.iter().map(|r| r.speed).collect();
        assert_eq!(speeds, [0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn compass_north_is_on_top() {
        let labels = compass_labels(CanvasSize::new(200.0, 200.0), 15.0);
        let names = labels.map(|l| l.label);
        assert_eq!(names, ["N", "NE", "E", "SE", "S", "SW", "W", "NW"]);
        let north = labels.iter().find(|l| l.label == "N").unwrap();
        assert!(close(north.position, ScreenPoint { x: 100.0, y: -15.0 }));
        let east = labels.iter().find(|l| l.label == "E").unwrap();
        assert!(close(east.position, ScreenPoint { x: 215.0, y: 100.0 }));
        let south = labels.iter().find(|l| l.label == "S").unwrap();
        assert!(close(south.position, ScreenPoint { x: 100.0, y: 215.0 }));
    }
}
