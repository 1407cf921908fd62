//! Output formatting for suggestion and popularity results

use crate::engine::EngineStats;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print suggestions for a prefix, one per line, with the matched prefix
/// highlighted.
pub fn print_suggestions(prefix: &str, suggestions: &[String], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    if suggestions.is_empty() {
        writeln!(stdout, "No suggestions for '{}'", prefix)?;
        return Ok(());
    }

    let prefix = prefix.trim().to_lowercase();
    for suggestion in suggestions {
        if let Some(rest) = suggestion.strip_prefix(&prefix) {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(stdout, "{}", prefix)?;
            stdout.reset()?;
            writeln!(stdout, "{}", rest)?;
        } else {
            writeln!(stdout, "{}", suggestion)?;
        }
    }

    Ok(())
}

/// Print the popularity ranking as "rank. query  count" rows.
pub fn print_popular(popular: &[(String, u64)], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    if popular.is_empty() {
        writeln!(stdout, "No recorded queries")?;
        return Ok(());
    }

    let width = popular.iter().map(|(q, _)| q.len()).max().unwrap_or(0);
    for (rank, (query, frequency)) in popular.iter().enumerate() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{:>3}.", rank + 1)?;
        stdout.reset()?;
        write!(stdout, " {:<width$}", query)?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(stdout, "  {}", frequency)?;
        stdout.reset()?;
    }

    Ok(())
}

/// Print engine activity counters.
pub fn print_stats(stats: &EngineStats, color: bool) -> io::Result<()> {
    write_stats(&mut stdout(color), stats)
}

fn write_stats<W: WriteColor>(out: &mut W, stats: &EngineStats) -> io::Result<()> {
    writeln!(out, "typeahead engine stats:")?;
    writeln!(out, "  Known queries: {}", stats.known_queries)?;
    writeln!(out, "  Queries served: {}", stats.queries_served)?;
    writeln!(out, "  Records applied: {}", stats.records_applied)?;
    writeln!(
        out,
        "  Cache hit rate: {:.1}% ({} hits / {} misses)",
        stats.cache_hit_rate() * 100.0,
        stats.cache_hits,
        stats.cache_misses
    )?;
    writeln!(out, "  Store errors: {}", stats.store_errors)?;

    Ok(())
}
