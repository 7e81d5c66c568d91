// Quintic motion profiles tracked with RAMSETE on a simulated differential drive.
//
// Usage: ramsete_path [plan.toml] [--plot]
//
// Without a plan file the built-in three segment routine is run. Voltages
// go to the log; `--plot` also saves img/ramsete_path.png.
use std::f64::consts::PI;

use log::{info, LevelFilter};
use rust_ramsete::path_tracking::LoggingDispatcher;
use rust_ramsete::utils::{logger_init, quick_plot_run};
use rust_ramsete::{load_plan, ExecutorConfig, PathExecutor, PlanFile, Pose2D, SegmentSpec};

fn default_plan() -> PlanFile {
    let tf = 5.0;
    let waypoints = [
        Pose2D::origin(),
        Pose2D::new(2.0, 1.0, PI / 4.0),
        Pose2D::new(4.0, 2.0, PI / 2.0),
        Pose2D::new(5.0, 3.0, PI),
    ];
    // different voltage cap per movement
    let max_voltages = [12.0, 6.0, 10.0];

    let segments = waypoints
        .windows(2)
        .zip(max_voltages.iter())
        .map(|(pair, &cap)| SegmentSpec::rest_to_rest(pair[0], pair[1], tf, cap))
        .collect();

    PlanFile { config: ExecutorConfig::default(), segments }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger_init(LevelFilter::Info)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let plot = args.iter().any(|a| a == "--plot");
    let plan = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => {
            info!("Loading plan from {}", path);
            load_plan(path)?
        }
        None => default_plan(),
    };
    plan.validate()?;

    let executor = PathExecutor::new(plan.config)?;
    let mut dispatcher = LoggingDispatcher;
    let report = executor.execute(&plan.segments, &mut dispatcher)?;

    info!(
        "Finished {} dispatches, final pose ({:.3}, {:.3}, {:.3})",
        report.dispatch_count, report.final_pose.x, report.final_pose.y, report.final_pose.yaw
    );

    if plot {
        std::fs::create_dir_all("img")?;
        let mut vis = quick_plot_run(&report, "RAMSETE Path Tracking");
        vis.save_png("img/ramsete_path.png", 800, 600)?;
        info!("Plot saved to: img/ramsete_path.png");
    }

    Ok(())
}
