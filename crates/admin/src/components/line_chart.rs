//! Server-side line chart rendered as inline SVG.
//!
//! The growth series is a fixed placeholder. This module only lays the
//! points out; the y axis always starts at zero and is topped at a round
//! number above the largest value.

/// Outer size and padding of the chart, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            pad_left: 40.0,
            pad_right: 16.0,
            pad_top: 16.0,
            pad_bottom: 32.0,
        }
    }
}

impl ChartGeometry {
    fn plot_width(&self) -> f64 {
        self.width - self.pad_left - self.pad_right
    }

    fn plot_height(&self) -> f64 {
        self.height - self.pad_top - self.pad_bottom
    }

    fn plot_bottom(&self) -> f64 {
        self.height - self.pad_bottom
    }
}

/// A single labelled series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChart {
    pub title: &'static str,
    pub series_label: &'static str,
    pub labels: Vec<&'static str>,
    pub values: Vec<u32>,
}

/// A plotted point, coordinates preformatted for the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub x: String,
    pub y: String,
    pub label: &'static str,
    pub value: u32,
}

/// A horizontal grid line with its axis label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTick {
    pub y: String,
    pub label: String,
}

/// Everything the template needs to draw the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChartView {
    pub title: &'static str,
    pub series_label: &'static str,
    pub width: String,
    pub height: String,
    pub plot_left: String,
    pub plot_right: String,
    /// `x,y x,y ...` for the SVG `points` attribute.
    pub polyline: String,
    pub points: Vec<ChartPoint>,
    pub ticks: Vec<ChartTick>,
    /// Baseline for the x axis labels.
    pub label_y: String,
}

/// The "Growth Overview" chart on the dashboard.
#[must_use]
pub fn growth_chart() -> LineChart {
    LineChart {
        title: "Growth Overview",
        series_label: "Monthly Growth",
        labels: vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        values: vec![30, 45, 57, 75, 85, 100],
    }
}

/// Smallest 1, 2 or 5 times a power of ten that is at least `raw`.
fn nice_step(raw: u32) -> u32 {
    let mut magnitude: u32 = 1;
    loop {
        for factor in [1, 2, 5] {
            let step = magnitude.saturating_mul(factor);
            if step >= raw {
                return step;
            }
        }
        if magnitude > u32::MAX / 10 {
            return u32::MAX;
        }
        magnitude *= 10;
    }
}

/// Tick spacing and axis top for values up to `max`, aiming for five bands.
fn y_axis(max: u32) -> (u32, u32) {
    const BANDS: u32 = 5;
    let step = nice_step(max.div_ceil(BANDS).max(1));
    let top = max.div_ceil(step).max(1).saturating_mul(step);
    (step, top)
}

fn fmt(v: f64) -> String {
    format!("{v:.1}")
}

impl LineChart {
    /// Lay the series out inside `geometry`.
    #[must_use]
    pub fn render(&self, geometry: &ChartGeometry) -> LineChartView {
        let max = self.values.iter().copied().max().unwrap_or(0);
        let (step, top) = y_axis(max);
        let top_f = f64::from(top);

        let y_for = |value: u32| {
            geometry.plot_bottom() - geometry.plot_height() * f64::from(value) / top_f
        };

        let count = u32::try_from(self.values.len()).unwrap_or(u32::MAX);
        let x_for = |index: u32| {
            if count <= 1 {
                geometry.pad_left + geometry.plot_width() / 2.0
            } else {
                geometry.pad_left + geometry.plot_width() * f64::from(index) / f64::from(count - 1)
            }
        };

        let points: Vec<ChartPoint> = (0..count)
            .zip(&self.values)
            .map(|(index, &value)| ChartPoint {
                x: fmt(x_for(index)),
                y: fmt(y_for(value)),
                label: self.labels.get(index as usize).copied().unwrap_or(""),
                value,
            })
            .collect();

        let polyline = points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");

        let ticks = (0..=top)
            .step_by(step as usize)
            .map(|value| ChartTick {
                y: fmt(y_for(value)),
                label: value.to_string(),
            })
            .collect();

        LineChartView {
            title: self.title,
            series_label: self.series_label,
            width: fmt(geometry.width),
            height: fmt(geometry.height),
            plot_left: fmt(geometry.pad_left),
            plot_right: fmt(geometry.width - geometry.pad_right),
            polyline,
            points,
            ticks,
            label_y: fmt(geometry.height - geometry.pad_bottom / 3.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(1), 1);
        assert_eq!(nice_step(3), 5);
        assert_eq!(nice_step(20), 20);
        assert_eq!(nice_step(21), 50);
        assert_eq!(nice_step(120), 200);
    }

    #[test]
    fn test_y_axis() {
        assert_eq!(y_axis(100), (20, 100));
        assert_eq!(y_axis(85), (20, 100));
        assert_eq!(y_axis(7), (2, 8));
        assert_eq!(y_axis(0), (1, 1));
    }

    #[test]
    fn test_growth_chart_layout() {
        let view = growth_chart().render(&ChartGeometry::default());

        assert_eq!(view.points.len(), 6);
        let first = &view.points[0];
        assert_eq!((first.x.as_str(), first.y.as_str()), ("40.0", "192.4"));
        assert_eq!(first.label, "Jan");

        let last = &view.points[5];
        assert_eq!((last.x.as_str(), last.y.as_str()), ("584.0", "16.0"));
        assert_eq!(last.value, 100);

        assert!(view.polyline.starts_with("40.0,192.4 "));
        assert!(view.polyline.ends_with(" 584.0,16.0"));
    }

    #[test]
    fn test_ticks_start_at_zero() {
        let view = growth_chart().render(&ChartGeometry::default());
        let labels: Vec<_> = view.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "20", "40", "60", "80", "100"]);
        assert_eq!(view.ticks[0].y, "268.0");
        assert_eq!(view.ticks[5].y, "16.0");
    }

    #[test]
    fn test_single_point_is_centred() {
        let chart = LineChart {
            title: "One",
            series_label: "One",
            labels: vec!["Jan"],
            values: vec![10],
        };
        let view = chart.render(&ChartGeometry::default());
        assert_eq!(view.points[0].x, "312.0");
        assert_eq!(view.points[0].y, "16.0");
    }

    #[test]
    fn test_empty_series() {
        let chart = LineChart {
            title: "Empty",
            series_label: "Empty",
            labels: vec![],
            values: vec![],
        };
        let view = chart.render(&ChartGeometry::default());
        assert!(view.points.is_empty());
        assert!(view.polyline.is_empty());
    }
}
