//! Layout CLI commands.
//!
//! `mode` prints the mode for a participant count; `layout` computes the tile
//! rectangles for a container and prints them as a table or JSON.

use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style, Width};
use tabled::{Table, Tabled};

use crate::cli::output;
use crate::config::{self, LayoutConfig};
use crate::error::TilecastError;
use crate::layout::{
    ContainerGeometry, LayoutMode, Orientation, Spacing, TileRect, compute_layout_with_spacing,
    select_mode, solve_with_spacing,
};
use crate::roster::{ParticipantId, Roster, RosterOptions};

/// Maximum participant name width in the table output.
const MAX_NAME_WIDTH: usize = 24;

/// Arguments for the `layout` command.
#[derive(Args, Debug)]
#[command(after_long_help = r"Examples:
  tilecast layout 4 --width 1280 --height 720
  tilecast layout 3 --mode grid-auto --width 1280 --height 720
  tilecast layout --participants alice,bob,host --host host --width 390 --height 844
  tilecast layout --participants a,b,c,d,e,f --max 4 --width 800 --height 600 --json")]
pub struct LayoutArgs {
    /// Number of participants. Ignored when --participants is given.
    #[arg(allow_negative_numbers = true, conflicts_with = "participants")]
    pub count: Option<i64>,

    /// Comma-separated participant IDs, in join order.
    #[arg(long, short = 'p', value_delimiter = ',', value_name = "IDS")]
    pub participants: Option<Vec<String>>,

    /// Layout mode to use instead of the one picked for the count.
    #[arg(long, value_name = "MODE", conflicts_with = "participants")]
    pub mode: Option<LayoutMode>,

    /// Participant placed in the first tile.
    #[arg(long, requires = "participants", value_name = "ID")]
    pub host: Option<String>,

    /// Maximum number of tiles to show.
    #[arg(long, short = 'm', value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max: Option<u64>,

    /// Container width.
    #[arg(long)]
    pub width: f64,

    /// Container height.
    #[arg(long)]
    pub height: f64,

    /// Spacing between tiles (overrides the configuration).
    #[arg(long)]
    pub gap: Option<f64>,

    /// Inset from the container edges (overrides the configuration).
    #[arg(long)]
    pub padding: Option<f64>,

    /// Output in JSON format instead of table format.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// A computed layout, as printed by the CLI.
#[derive(Debug, Serialize)]
struct LayoutReport {
    mode: LayoutMode,
    orientation: Orientation,
    container: ContainerGeometry,
    tiles: Vec<TileEntry>,
}

/// One tile of a [`LayoutReport`].
#[derive(Debug, Serialize)]
struct TileEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    participant: Option<ParticipantId>,
    #[serde(flatten)]
    rect: TileRect,
}

/// Execute the `mode` command.
///
/// # Errors
///
/// Returns an error if `count` is negative.
pub fn execute_mode(count: i64, portrait: bool) -> Result<(), TilecastError> {
    let mode = select_mode(count, !portrait)?;
    println!("{mode}");
    Ok(())
}

/// Execute the `layout` command.
///
/// # Errors
///
/// Returns an error if the count is negative or the spacing overrides are
/// not usable.
pub fn execute(args: &LayoutArgs) -> Result<(), TilecastError> {
    let settings = &config::get_config().layout;
    let report = build_report(args, settings)?;

    if args.json {
        output::print_highlighted_json(&serde_json::to_value(&report)?);
    } else {
        print_table(&report);
    }

    Ok(())
}

/// Resolves spacing from the arguments, falling back to the configuration.
fn resolve_spacing(args: &LayoutArgs, settings: &LayoutConfig) -> Result<Spacing, TilecastError> {
    let spacing = Spacing::new(
        args.gap.unwrap_or(settings.gap),
        args.padding.unwrap_or(settings.padding),
    );

    for (name, value) in [("--gap", spacing.gap), ("--padding", spacing.padding)] {
        if !value.is_finite() || value < 0.0 {
            return Err(TilecastError::InvalidArguments(format!(
                "{name} must be a non-negative number, got {value}"
            )));
        }
    }

    Ok(spacing)
}

/// Computes the report for a `layout` invocation.
fn build_report(args: &LayoutArgs, settings: &LayoutConfig) -> Result<LayoutReport, TilecastError> {
    let geometry = ContainerGeometry::new(args.width, args.height);
    let spacing = resolve_spacing(args, settings)?;
    let max_tiles = args
        .max
        .and_then(|max| usize::try_from(max).ok())
        .or(settings.max_tiles);

    let (mode, tiles) = if let Some(ids) = args.participants.as_deref() {
        let mut options = RosterOptions::from_config(settings).with_max_tiles(max_tiles);
        if let Some(host) = &args.host {
            options = options.with_host(host.as_str());
        }

        let visible = Roster::new(ids.iter().map(String::as_str)).visible(&options).into_vec();
        let result = solve_with_spacing(&visible, &geometry, &spacing);
        let tiles: Vec<TileEntry> = result
            .assignments(&visible)
            .map(|(id, rect)| TileEntry { participant: Some(id.clone()), rect: *rect })
            .collect();
        (result.mode, tiles)
    } else {
        let count = args.count.unwrap_or(0);
        let is_landscape = geometry.is_landscape();
        // Validate before capping so negative counts are still reported
        let selected = select_mode(count, is_landscape)?;
        let capped = max_tiles
            .and_then(|max| i64::try_from(max).ok())
            .map_or(count, |max| count.min(max));
        let mode = match args.mode {
            Some(mode) => mode,
            None if capped == count => selected,
            None => select_mode(capped, is_landscape)?,
        };

        let rects = compute_layout_with_spacing(
            mode,
            capped,
            geometry.width,
            geometry.height,
            is_landscape,
            &spacing,
        )?;
        let tiles: Vec<TileEntry> =
            rects.into_iter().map(|rect| TileEntry { participant: None, rect }).collect();
        (mode, tiles)
    };

    tracing::debug!(%mode, tiles = tiles.len(), "computed layout for cli");

    Ok(LayoutReport { mode, orientation: geometry.orientation(), container: geometry, tiles })
}

/// Prints a report as a table.
fn print_table(report: &LayoutReport) {
    #[derive(Tabled)]
    struct TileRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "Participant")]
        participant: String,
        #[tabled(rename = "Left")]
        left: String,
        #[tabled(rename = "Top")]
        top: String,
        #[tabled(rename = "Width")]
        width: String,
        #[tabled(rename = "Height")]
        height: String,
    }

    let count = report.tiles.len();
    println!(
        "{}",
        format!("Layout: {} ({count} tiles, {})", report.mode, report.orientation).bold()
    );

    if report.tiles.is_empty() {
        println!("{}", "No tiles.".dimmed());
        return;
    }

    let rows: Vec<TileRow> = report
        .tiles
        .iter()
        .enumerate()
        .map(|(i, tile)| TileRow {
            index: i + 1,
            participant: tile
                .participant
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string),
            left: output::format_units(tile.rect.left),
            top: output::format_units(tile.rect.top),
            width: output::format_units(tile.rect.width),
            height: output::format_units(tile.rect.height),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()))
        .with(Modify::new(Columns::one(1)).with(Width::truncate(MAX_NAME_WIDTH).suffix("…")))
        .with(Modify::new(Columns::new(2..6)).with(Alignment::right()))
        .to_string();

    println!("{table}");
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;
    use crate::cli::commands::Commands;

    fn parse(args: &[&str]) -> LayoutArgs {
        let mut argv = vec!["tilecast", "layout"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Layout(args) => args,
            other => panic!("Expected Layout command, got {other:?}"),
        }
    }

    #[test]
    fn test_parses_participants_list() {
        let args = parse(&["--participants", "a,b,c", "--width", "800", "--height", "600"]);
        assert_eq!(args.participants, Some(vec!["a".to_string(), "b".to_string(), "c".to_string()]));
        assert_eq!(args.count, None);
    }

    #[test]
    fn test_count_conflicts_with_participants() {
        let argv = ["tilecast", "layout", "3", "-p", "a", "--width", "1", "--height", "1"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_host_requires_participants() {
        let argv = ["tilecast", "layout", "3", "--host", "a", "--width", "1", "--height", "1"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_count_mode_has_no_participants() {
        let args = parse(&["3", "--width", "800", "--height", "600"]);
        assert!(args.participants.is_none());
        assert!(args.host.is_none());
    }

    #[test]
    fn test_mode_conflicts_with_participants() {
        let argv =
            ["tilecast", "layout", "-p", "a,b", "--mode", "single", "--width", "1", "--height", "1"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let argv = ["tilecast", "layout", "3", "--mode", "grid-4x4", "--width", "1", "--height", "1"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_report_with_explicit_mode() {
        let args = parse(&["3", "--mode", "Single", "--width", "800", "--height", "600"]);
        assert_eq!(args.mode, Some(LayoutMode::Single));

        let report = build_report(&args, &LayoutConfig::default()).unwrap();
        assert_eq!(report.mode, LayoutMode::Single);
        assert_eq!(report.tiles.len(), 3);
        for tile in &report.tiles {
            assert_eq!(tile.rect, TileRect::new(0.0, 0.0, 800.0, 600.0));
        }
    }

    #[test]
    fn test_report_with_explicit_mode_still_rejects_negative_count() {
        let args = parse(&["-1", "--mode", "grid-auto", "--width", "800", "--height", "600"]);
        let err = build_report(&args, &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, TilecastError::Layout(_)));
    }

    #[test]
    fn test_width_and_height_are_required() {
        assert!(Cli::try_parse_from(["tilecast", "layout", "3"]).is_err());
    }

    #[test]
    fn test_zero_max_is_rejected() {
        let argv = ["tilecast", "layout", "3", "--max", "0", "--width", "1", "--height", "1"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_report_from_count() {
        let args = parse(&["4", "--width", "800", "--height", "600"]);
        let report = build_report(&args, &LayoutConfig::default()).unwrap();

        assert_eq!(report.mode, LayoutMode::Grid2x2);
        assert_eq!(report.orientation, Orientation::Landscape);
        assert_eq!(report.tiles.len(), 4);
        assert_eq!(report.tiles[0].rect, TileRect::new(8.0, 8.0, 388.0, 288.0));
    }

    #[test]
    fn test_report_rejects_negative_count() {
        let args = parse(&["-2", "--width", "800", "--height", "600"]);
        let err = build_report(&args, &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, TilecastError::Layout(_)));
    }

    #[test]
    fn test_report_caps_count_with_max() {
        let args = parse(&["9", "--max", "4", "--width", "800", "--height", "600"]);
        let report = build_report(&args, &LayoutConfig::default()).unwrap();

        assert_eq!(report.mode, LayoutMode::Grid2x2);
        assert_eq!(report.tiles.len(), 4);
    }

    #[test]
    fn test_report_with_host_and_limit() {
        let args = parse(&[
            "--participants",
            "g1,g2,g3,g4,host",
            "--host",
            "host",
            "--max",
            "4",
            "--width",
            "1280",
            "--height",
            "720",
        ]);
        let report = build_report(&args, &LayoutConfig::default()).unwrap();

        let ids: Vec<&str> = report
            .tiles
            .iter()
            .filter_map(|t| t.participant.as_ref().map(ParticipantId::as_str))
            .collect();
        assert_eq!(ids, vec!["host", "g1", "g2", "g3"]);
        assert_eq!(report.mode, LayoutMode::Grid2x2);
    }

    #[test]
    fn test_report_uses_config_spacing() {
        let settings = LayoutConfig { gap: 0.0, padding: 0.0, ..LayoutConfig::default() };
        let args = parse(&["2", "--width", "1000", "--height", "500"]);
        let report = build_report(&args, &settings).unwrap();

        assert_eq!(report.tiles[0].rect, TileRect::new(0.0, 0.0, 500.0, 500.0));
        assert_eq!(report.tiles[1].rect, TileRect::new(500.0, 0.0, 500.0, 500.0));
    }

    #[test]
    fn test_report_rejects_negative_gap_override() {
        let args = parse(&["2", "--width", "1000", "--height", "500", "--gap=-4"]);
        let err = build_report(&args, &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, TilecastError::InvalidArguments(_)));
    }

    #[test]
    fn test_report_serializes_flat_tiles() {
        let args = parse(&["--participants", "solo", "--width", "640", "--height", "480"]);
        let report = build_report(&args, &LayoutConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["mode"], "single");
        assert_eq!(json["orientation"], "landscape");
        assert_eq!(json["tiles"][0]["participant"], "solo");
        assert_eq!(json["tiles"][0]["width"], 640.0);
        assert_eq!(json["tiles"][0]["left"], 0.0);
    }

    #[test]
    fn test_execute_mode_rejects_negative() {
        assert!(execute_mode(-1, false).is_err());
        assert!(execute_mode(5, true).is_ok());
    }
}
