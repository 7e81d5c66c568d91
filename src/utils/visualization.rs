//! Visualization utilities for rust_ramsete
//!
//! Plots reference trajectories against the dead-reckoned pose trace using gnuplot.

use gnuplot::{Figure, Caption, Color, PointSymbol, PointSize, LineWidth, AxesCommon, AutoOption};
use crate::common::{Point2D, Pose2D, TrajectorySample, RoboticsError, RoboticsResult};
use crate::path_tracking::ExecutionReport;

/// Color palette for consistent styling
pub mod colors {
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const CYAN: &str = "#00FFFF";

    // Semantic colors
    pub const START: &str = GREEN;
    pub const GOAL: &str = BLUE;
    pub const REFERENCE: &str = RED;
    pub const ROBOT: &str = CYAN;
    pub const DEAD_RECKONING: &str = "#35C788";
}

/// Style for path rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: colors::REFERENCE.to_string(),
            line_width: 2.0,
            caption: "Reference".to_string(),
        }
    }
}

/// Style for point rendering
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

/// Element queued for drawing
#[derive(Debug, Clone)]
enum PlotItem {
    Line { x: Vec<f64>, y: Vec<f64>, style: PathStyle },
    Point { point: Point2D, style: PointStyle },
    Heading { x: [f64; 2], y: [f64; 2] },
}

/// Main visualizer struct
///
/// Items are queued and drawn onto a single set of axes when saving.
pub struct Visualizer {
    figure: Figure,
    items: Vec<PlotItem>,
    title: String,
    x_label: String,
    y_label: String,
    aspect_ratio: Option<f64>,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            items: Vec::new(),
            title: String::new(),
            x_label: "X [m]".to_string(),
            y_label: "Y [m]".to_string(),
            aspect_ratio: Some(1.0),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set aspect ratio (None for auto)
    pub fn set_aspect_ratio(&mut self, ratio: Option<f64>) -> &mut Self {
        self.aspect_ratio = ratio;
        self
    }

    /// Plot the x/y positions of reference samples
    pub fn plot_reference(&mut self, samples: &[TrajectorySample], style: &PathStyle) -> &mut Self {
        let (x, y): (Vec<f64>, Vec<f64>) = samples.iter().map(|s| (s.x, s.y)).unzip();
        self.plot_path_xy(&x, &y, style)
    }

    /// Plot a sequence of poses as a line
    pub fn plot_trace(&mut self, poses: &[Pose2D], style: &PathStyle) -> &mut Self {
        let (x, y): (Vec<f64>, Vec<f64>) = poses.iter().map(|p| (p.x, p.y)).unzip();
        self.plot_path_xy(&x, &y, style)
    }

    /// Plot a path from x,y vectors
    pub fn plot_path_xy(&mut self, x: &[f64], y: &[f64], style: &PathStyle) -> &mut Self {
        self.items.push(PlotItem::Line {
            x: x.to_vec(),
            y: y.to_vec(),
            style: style.clone(),
        });
        self
    }

    /// Plot a single point (start, goal, etc.)
    pub fn plot_point(&mut self, point: Point2D, style: &PointStyle) -> &mut Self {
        self.items.push(PlotItem::Point { point, style: style.clone() });
        self
    }

    /// Plot robot pose with direction indicator
    pub fn plot_robot(&mut self, pose: &Pose2D, size: f64) -> &mut Self {
        self.plot_point(pose.position(), &PointStyle::new(colors::ROBOT, "Robot").with_size(size));

        let arrow_len = size * 0.25;
        self.items.push(PlotItem::Heading {
            x: [pose.x, pose.x + arrow_len * pose.yaw.cos()],
            y: [pose.y, pose.y + arrow_len * pose.yaw.sin()],
        });
        self
    }

    /// Plot start position
    pub fn plot_start(&mut self, point: Point2D) -> &mut Self {
        self.plot_point(point, &PointStyle::new(colors::START, "Start").with_size(1.5))
    }

    /// Plot goal position
    pub fn plot_goal(&mut self, point: Point2D) -> &mut Self {
        self.plot_point(point, &PointStyle::new(colors::GOAL, "Goal").with_size(1.5))
    }

    /// Number of queued plot items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> RoboticsResult<()> {
        self.render();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| RoboticsError::VisualizationError(e.to_string()))
    }

    fn render(&mut self) {
        self.figure.clear_axes();
        let axes = self.figure.axes2d();

        for item in &self.items {
            match item {
                PlotItem::Line { x, y, style } => {
                    axes.lines(x, y, &[
                        Caption(&style.caption),
                        Color(&style.color),
                        LineWidth(style.line_width),
                    ]);
                }
                PlotItem::Point { point, style } => {
                    axes.points(&[point.x], &[point.y], &[
                        Caption(&style.caption),
                        Color(&style.color),
                        PointSymbol(style.symbol),
                        PointSize(style.size),
                    ]);
                }
                PlotItem::Heading { x, y } => {
                    axes.lines(x, y, &[Color(colors::ROBOT), LineWidth(2.0)]);
                }
            }
        }

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);

        if let Some(ratio) = self.aspect_ratio {
            axes.set_aspect_ratio(AutoOption::Fix(ratio));
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Reference path, pose trace, start and final pose of a run
pub fn quick_plot_run(report: &ExecutionReport, title: &str) -> Visualizer {
    let mut vis = Visualizer::new();
    vis.set_title(title);

    vis.plot_reference(&report.reference, &PathStyle::default());
    vis.plot_trace(
        &report.trace,
        &PathStyle::new(colors::DEAD_RECKONING, "Dead reckoning").with_line_width(1.5),
    );
    if let Some(first) = report.trace.first() {
        vis.plot_start(first.position());
    }
    if let Some(goal) = report.reference.last() {
        vis.plot_goal(goal.position());
    }
    vis.plot_robot(&report.final_pose, 1.0);

    vis
}
