//! u-autoroute: command-line front end.
//!
//! # Usage
//!
//! ```text
//! u-autoroute solve points.txt route.txt --autonomy 2000 --strategy rtree --svg route.svg
//! u-autoroute generate points10k.txt --count 10000 --seed 42
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::{fmt::Formatter, Builder, Target};
use log::{error, info, Level, LevelFilter};

use u_autoroute::config::RouteConfig;
use u_autoroute::constructive::{AutonomyRouteBuilder, OriginExclusion};
use u_autoroute::distance::SearchStrategy;
use u_autoroute::evaluation::{timed, RouteEvaluator, RouteReport};
use u_autoroute::io::{generate_points, load_points, render_svg, save_route, SvgOptions};

/// Budget-limited nearest-neighbor routing over 2D points.
#[derive(Parser)]
#[command(name = "u-autoroute", version)]
struct Cli {
    /// Log verbosity.
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Log line layout.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a route from a point file and write it out.
    Solve {
        /// Tab-separated point file; the first line is the origin.
        input: PathBuf,

        /// Where to write the route.
        output: PathBuf,

        /// JSON settings file; flags below override it.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Autonomy budget (default 2000).
        #[arg(long)]
        autonomy: Option<f64>,

        /// Nearest-point search strategy.
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,

        /// Worker threads for the parallel strategy (0 = rayon's global pool).
        #[arg(long)]
        threads: Option<usize>,

        /// How points equal to the origin are treated.
        #[arg(long, value_enum)]
        origin_exclusion: Option<Exclusion>,

        /// Also render the route as SVG.
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Write a seeded random point file.
    Generate {
        /// Where to write the points.
        output: PathBuf,

        /// Number of points.
        #[arg(long)]
        count: usize,

        /// Largest x coordinate.
        #[arg(long, default_value_t = 1000)]
        width: u32,

        /// Largest y coordinate.
        #[arg(long, default_value_t = 1000)]
        height: u32,

        /// RNG seed.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Linear,
    Parallel,
    Rtree,
}

impl From<Strategy> for SearchStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Linear => SearchStrategy::Linear,
            Strategy::Parallel => SearchStrategy::Parallel,
            Strategy::Rtree => SearchStrategy::RTree,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Exclusion {
    ByIndex,
    ByValue,
}

impl From<Exclusion> for OriginExclusion {
    fn from(e: Exclusion) -> Self {
        match e {
            Exclusion::ByIndex => OriginExclusion::ByIndex,
            Exclusion::ByValue => OriginExclusion::ByValue,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Compact,
    Pretty,
}

fn init_logger(level: LogLevel, format: LogFormat) -> io::Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level.to_filter())
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| match format {
            LogFormat::Compact => writeln!(buf, "{} {}", level_tag(record.level()), record.args()),
            LogFormat::Pretty => writeln!(
                buf,
                "{} {} [{}] {}",
                buf.timestamp_millis(),
                level_tag(record.level()),
                record.target(),
                record.args()
            ),
        });

    builder.try_init().map_err(io::Error::other)
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

#[allow(clippy::too_many_arguments)]
fn solve(
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    autonomy: Option<f64>,
    strategy: Option<Strategy>,
    threads: Option<usize>,
    origin_exclusion: Option<Exclusion>,
    svg: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = match config {
        Some(path) => RouteConfig::from_json_file(path)?,
        None => RouteConfig::default(),
    };
    if let Some(a) = autonomy {
        settings.autonomy_max = a;
    }
    if let Some(s) = strategy {
        settings.strategy = s.into();
    }
    if let Some(t) = threads {
        settings.threads = t;
    }
    if let Some(e) = origin_exclusion {
        settings.origin_exclusion = e.into();
    }
    settings.validate()?;

    let points = load_points(&input)?;
    info!("loaded {} points from {}", points.len(), input.display());

    let builder = AutonomyRouteBuilder::from_config(&settings);
    let (route, elapsed) = timed(|| builder.build(&points));
    let route = route?;

    let violations = RouteEvaluator::new(&points, settings.autonomy_max).check(&route);
    if !violations.is_empty() {
        return Err(format!("route failed its audit: {violations:?}").into());
    }

    save_route(&output, route.points())?;
    info!("wrote {} route entries to {}", route.len(), output.display());

    if let Some(path) = svg {
        let options = SvgOptions {
            title: input.file_name().map(|n| n.to_string_lossy().into_owned()),
            ..SvgOptions::default()
        };
        std::fs::write(&path, render_svg(route.points(), &options))?;
        info!("rendered route to {}", path.display());
    }

    println!("{}", RouteReport::new(&route, elapsed));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logger(cli.log_level, cli.log_format) {
        eprintln!("failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Command::Solve {
            input,
            output,
            config,
            autonomy,
            strategy,
            threads,
            origin_exclusion,
            svg,
        } => solve(
            input,
            output,
            config,
            autonomy,
            strategy,
            threads,
            origin_exclusion,
            svg,
        ),
        Command::Generate {
            output,
            count,
            width,
            height,
            seed,
        } => {
            let points = generate_points(count, width, height, seed);
            save_route(&output, &points)
                .map(|()| info!("wrote {count} points to {}", output.display()))
                .map_err(Into::into)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
