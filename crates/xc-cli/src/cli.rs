//! CLI argument definitions for the meet scorer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use xc_cli::adjust::{DistanceOverride, PlaceMove, parse_distance, parse_move, parse_scorers};

#[derive(Parser)]
#[command(
    name = "xc",
    version,
    about = "Cross-country meet scorer - rank runners and score teams",
    long_about = "Rank runners from a meet results CSV by time or by pace per mile\n\
                  and score teams by the sum of their best finishers' places."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank a results file and score the teams.
    Score(ScoreArgs),

    /// List the known courses and their distances.
    Courses(CoursesArgs),
}

#[derive(Args)]
pub struct ScoreArgs {
    /// Results CSV (name, time, team and optional course per row).
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Ranking criterion (default: pace, or the config file's setting).
    #[arg(long = "rank-by", value_enum)]
    pub rank_by: Option<RankByArg>,

    /// How columns are located in the CSV.
    #[arg(long = "layout", value_enum, default_value = "positional")]
    pub layout: LayoutArg,

    /// Whether a positional CSV starts with a title row.
    #[arg(long = "header", value_enum, default_value = "detect")]
    pub header: HeaderArg,

    /// TOML file with `[courses]` distances and `[scoring]` options.
    #[arg(long = "courses", value_name = "TOML")]
    pub courses: Option<PathBuf>,

    /// Set a course distance in miles (repeatable).
    #[arg(long = "distance", value_name = "NAME=MILES", value_parser = parse_distance)]
    pub distances: Vec<DistanceOverride>,

    /// Move the runner at a 1-based place one step up or down after ranking
    /// (repeatable, applied in order).
    #[arg(long = "move", value_name = "up:N|down:N", value_parser = parse_move)]
    pub moves: Vec<PlaceMove>,

    /// Skip malformed rows and runners on unknown courses instead of failing.
    #[arg(long = "skip-invalid")]
    pub skip_invalid: bool,

    /// Treat an empty time as 0:00.
    #[arg(long = "zero-missing-times")]
    pub zero_missing_times: bool,

    /// Number of scoring runners per team.
    #[arg(long = "scorers", value_name = "N", value_parser = parse_scorers)]
    pub scorers: Option<usize>,

    /// Leave teams with fewer finishers than scorers off the scoreboard.
    #[arg(long = "exclude-incomplete")]
    pub exclude_incomplete: bool,

    /// Write results.csv and team-scores.csv into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print both tables as JSON instead of terminal tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct CoursesArgs {
    /// TOML file whose `[courses]` overlay the league defaults.
    #[arg(long = "courses", value_name = "TOML")]
    pub courses: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RankByArg {
    Time,
    Pace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    Positional,
    Named,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum HeaderArg {
    Present,
    Absent,
    Detect,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
