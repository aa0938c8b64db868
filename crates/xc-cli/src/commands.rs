use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span};

use xc_cli::adjust::{apply_distances, apply_moves};
use xc_core::MeetResults;
use xc_ingest::{
    ColumnLayout, HeaderRow, IngestOptions, MeetConfig, MissingTimePolicy, load_meet_config,
    load_results,
};
use xc_model::{IncompleteTeamPolicy, RankingMode, RecordPolicy, ScoringOptions};
use xc_report::{ReportTables, write_outputs};

use crate::cli::{CoursesArgs, HeaderArg, LayoutArg, RankByArg, ScoreArgs};
use crate::summary::{align_column, apply_table_style, header_cell};
use crate::types::ScoreResult;

pub fn run_courses(args: &CoursesArgs) -> Result<()> {
    let config = load_config(args.courses.as_deref())?;
    let registry = config.registry();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Course"), header_cell("Miles")]);
    apply_table_style(&mut table);
    for (course, miles) in registry.iter() {
        table.add_row(vec![course.to_string(), format!("{miles:.2}")]);
    }
    align_column(&mut table, 1, comfy_table::CellAlignment::Right);
    println!("{table}");
    Ok(())
}

pub fn run_score(args: &ScoreArgs) -> Result<ScoreResult> {
    let span = info_span!("score", input = %args.input.display());
    let _guard = span.enter();

    let config = load_config(args.courses.as_deref())?;
    let mut registry = config.registry();
    apply_distances(&mut registry, &args.distances).context("apply --distance")?;
    let options = scoring_options(config.scoring, args);

    let loaded = load_results(&args.input, &ingest_options(args, options.records))
        .with_context(|| format!("load {}", args.input.display()))?;
    debug!(
        records = loaded.records.len(),
        rejected = loaded.rejected.len(),
        "results loaded"
    );

    let mut meet = MeetResults::new(loaded.records, registry, options).context("score meet")?;
    let moved = apply_moves(&mut meet, &args.moves).context("apply --move")?;

    let tables = ReportTables::from_results(&meet);
    let outputs = match &args.output_dir {
        Some(dir) => Some(write_outputs(dir, &tables)?),
        None => None,
    };
    info!(
        runners = meet.results().len(),
        teams = meet.scoreboard().len(),
        moved,
        "score complete"
    );
    Ok(ScoreResult {
        input: args.input.clone(),
        header: loaded.header,
        meet,
        tables,
        rejected: loaded.rejected,
        moved,
        outputs,
    })
}

fn load_config(path: Option<&std::path::Path>) -> Result<MeetConfig> {
    match path {
        Some(path) => {
            load_meet_config(path).with_context(|| format!("load {}", path.display()))
        }
        None => Ok(MeetConfig::default()),
    }
}

/// Config-file options with command-line flags layered on top.
fn scoring_options(base: ScoringOptions, args: &ScoreArgs) -> ScoringOptions {
    let mut options = base;
    if let Some(rank_by) = args.rank_by {
        options.ranking = match rank_by {
            RankByArg::Time => RankingMode::Time,
            RankByArg::Pace => RankingMode::Pace,
        };
    }
    if let Some(scorers) = args.scorers {
        options.scorers_per_team = scorers;
    }
    if args.exclude_incomplete {
        options.incomplete_teams = IncompleteTeamPolicy::Exclude;
    }
    if args.skip_invalid {
        options.records = RecordPolicy::Skip;
    }
    options
}

fn ingest_options(args: &ScoreArgs, records: RecordPolicy) -> IngestOptions {
    IngestOptions::new()
        .with_layout(match args.layout {
            LayoutArg::Positional => ColumnLayout::Positional,
            LayoutArg::Named => ColumnLayout::Named,
        })
        .with_header(match args.header {
            HeaderArg::Present => HeaderRow::Present,
            HeaderArg::Absent => HeaderRow::Absent,
            HeaderArg::Detect => HeaderRow::Detect,
        })
        .with_missing_time(if args.zero_missing_times {
            MissingTimePolicy::Zero
        } else {
            MissingTimePolicy::Reject
        })
        .with_records(records)
}
