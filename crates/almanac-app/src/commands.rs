use std::io::{Read, Write};
use std::path::Path;

use almanac_core::config::Settings;
use almanac_expand::expand::{TimeZoneResolver, ViewRange};
use almanac_service::calendar::{CalendarRowExpander, ResultRow, group_by_day};
use anyhow::Context;

use crate::cli::{ExpandArgs, ZonesArgs};

/// ## Summary
/// Runs `almanac expand`, writing JSON to `out`.
///
/// ## Errors
/// Returns an error if the input cannot be read or parsed, the expansion
/// fails, or the output cannot be written.
pub fn expand<W: Write>(settings: &Settings, args: &ExpandArgs, out: W) -> anyhow::Result<()> {
    let input = read_input(&args.input)?;
    let rows: Vec<ResultRow> = serde_json::from_str(&input)
        .with_context(|| format!("parsing result rows from {}", args.input.display()))?;

    let mut expansion = settings.expansion.clone();
    if let Some(timezone) = &args.timezone {
        expansion.display_timezone.clone_from(timezone);
    }
    let view_range = ViewRange::new(args.view_start, args.view_end);

    tracing::info!(
        rows = rows.len(),
        display_timezone = %expansion.display_timezone,
        ?view_range,
        "Expanding result rows"
    );

    let mut expander = CalendarRowExpander::from_config(&expansion, view_range)?;
    let items = expander.expand_rows(&rows)?;

    if args.by_day {
        write_json(out, &group_by_day(&items), args.pretty)
    } else {
        write_json(out, &items, args.pretty)
    }
}

/// ## Summary
/// Runs `almanac zones`, one line per identifier.
///
/// ## Errors
/// Returns an error if the output cannot be written. Unknown identifiers are
/// reported inline and do not fail the command.
pub fn zones<W: Write>(args: &ZonesArgs, mut out: W) -> anyhow::Result<()> {
    let mut resolver = TimeZoneResolver::new();
    for id in &args.ids {
        match resolver.resolve(id) {
            Ok(tz) => writeln!(out, "{id}\t{tz}")?,
            Err(err) => writeln!(out, "{id}\terror: {err}")?,
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        return read_all(std::io::stdin().lock()).context("reading result rows from stdin");
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("reading result rows from {}", path.display()))
}

fn read_all<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(input)
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(
    mut out: W,
    value: &T,
    pretty: bool,
) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
