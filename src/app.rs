//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - sets up logging
//! - parses CLI arguments
//! - gathers points (CSV and/or inline)
//! - runs curve fitting or the model comparison
//! - prints reports/plots/scripts
//! - writes optional exports

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{CodeArgs, Command, CompareArgs, FitArgs, InterpolateArgs, PlotArgs, PlotOpts};
use crate::domain::RunConfig;
use crate::error::AppError;

pub mod pipeline;

/// Environment variable holding the log filter (e.g. `debug`, `curve_fit=trace`).
pub const LOG_ENV: &str = "FITCURVE_LOG";

/// Entry point for the `fitcurve` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Compare(args) => handle_compare(args),
        Command::Interpolate(args) => handle_interpolate(args),
        Command::Code(args) => handle_code(args),
        Command::Plot(args) => handle_plot(args),
    }
}

/// Install a stderr `tracing` subscriber. A `.env` file may set the filter.
fn init_logging() {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; that is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;
    present_fit(&config, &run)
}

fn handle_interpolate(args: InterpolateArgs) -> Result<(), AppError> {
    let config = RunConfig {
        csv_path: args.input.csv.clone(),
        inline_points: args.input.points.clone(),
        model: None,
        plot: args.plot.plot,
        plot_width: args.plot.width,
        plot_height: args.plot.height,
        export_curve: None,
        json: args.json,
    };
    let run = pipeline::run_fit(&config)?;
    present_fit(&config, &run)
}

/// Shared printing for `fit` and `interpolate`.
fn present_fit(config: &RunConfig, run: &pipeline::RunOutput) -> Result<(), AppError> {
    let n = run.ingest.points.len();
    debug!(model = %run.fit.model, n, ok = run.fit.is_ok(), "fit finished");

    if config.json {
        let json = serde_json::to_string_pretty(&run.fit)
            .map_err(|e| AppError::new(2, format!("Failed to serialize fit result: {e}")))?;
        println!("{json}");
    }

    if let Some(err) = &run.fit.error {
        return Err(AppError::from(err.clone()));
    }

    if !config.json {
        println!("{}", crate::report::format_fit_summary(&run.fit, n));
    }

    if config.plot {
        let plot = crate::plot::render_ascii_plot(
            &run.ingest.points,
            &run.fit,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    if let Some(path) = &config.export_curve {
        let curve = crate::io::curve::curve_file_from_fit(&run.fit)?;
        crate::io::curve::write_curve_json(path, &curve)?;
        debug!(path = %path.display(), "wrote curve JSON");
    }

    Ok(())
}

fn handle_compare(args: CompareArgs) -> Result<(), AppError> {
    let (ingest, comparison) =
        pipeline::run_compare(args.input.csv.as_deref(), &args.input.points, args.degree)?;

    println!("Points: n={}", ingest.points.len());
    println!("{}", crate::report::format_comparison(&comparison));
    Ok(())
}

fn handle_code(args: CodeArgs) -> Result<(), AppError> {
    let ingest = pipeline::gather_points(args.input.csv.as_deref(), &args.input.points)?;
    let model = args.model.with_degree(args.degree);
    print!("{}", crate::codegen::generate_script(model, &ingest.points));
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;
    let plot = crate::plot::render_ascii_plot_from_curve_file(&curve, args.width, args.height);

    println!("{} | {}", curve.model, curve.equation);
    println!("{plot}");
    Ok(())
}

pub fn run_config_from_args(args: &FitArgs) -> RunConfig {
    let PlotOpts { plot, width, height } = args.plot.clone();
    RunConfig {
        csv_path: args.input.csv.clone(),
        inline_points: args.input.points.clone(),
        model: Some(args.model.with_degree(args.degree)),
        plot,
        plot_width: width,
        plot_height: height,
        export_curve: args.export_curve.clone(),
        json: args.json,
    }
}
