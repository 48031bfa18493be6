// flexpand/src/ui/plan_view.rs
//! Plain-text rendering of resolved inputs and planned pairs.

use anyhow::Result;
use flexpand_core::{Classification, MatchCounts, PathPair};
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::PathBuf;

fn label(classification: Classification, supports_color: bool) -> String {
    let text = classification.to_string();
    if !supports_color {
        return text;
    }
    match classification {
        Classification::New => text.green().to_string(),
        Classification::Overwrite => text.yellow().to_string(),
        Classification::Recurrent => text.red().bold().to_string(),
    }
}

/// Writes one resolved path per line.
pub fn print_paths<W: Write + ?Sized>(paths: &[PathBuf], writer: &mut W) -> Result<()> {
    for path in paths {
        writeln!(writer, "{}", path.display())?;
    }
    Ok(())
}

/// Writes accepted pairs as `input -> output`, tagged with their class.
pub fn print_pairs<W: Write + ?Sized>(pairs: &[PathPair], writer: &mut W, supports_color: bool) -> Result<()> {
    for pair in pairs {
        writeln!(
            writer,
            "{} -> {} [{}]",
            pair.input.display(),
            pair.output.display(),
            label(pair.classification, supports_color)
        )?;
    }
    Ok(())
}

/// Writes the classification counts and how many pairs were held back.
pub fn print_summary<W: Write + ?Sized>(
    counts: &MatchCounts,
    accepted: usize,
    writer: &mut W,
    supports_color: bool,
) -> Result<()> {
    writeln!(writer, "{}", counts)?;
    let skipped = counts.total.saturating_sub(accepted);
    if skipped == 0 {
        return Ok(());
    }
    let note = format!("{} pair(s) skipped. Run with --verbose to have all names listed.", skipped);
    if supports_color {
        writeln!(writer, "{}", note.yellow())?;
    } else {
        writeln!(writer, "{}", note)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_render_without_color() {
        let pairs = vec![PathPair {
            input: PathBuf::from("in/a.csv"),
            output: PathBuf::from("out/a.csv"),
            classification: Classification::New,
        }];
        let mut buf = Vec::new();
        print_pairs(&pairs, &mut buf, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "in/a.csv -> out/a.csv [new]\n");
    }

    #[test]
    fn summary_mentions_skipped_pairs() {
        let counts = MatchCounts { total: 3, new: 1, overwrite: 2, recurrent: 0 };
        let mut buf = Vec::new();
        print_summary(&counts, 1, &mut buf, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("- 1 file(s) will be created"));
        assert!(text.contains("2 pair(s) skipped"));
    }
}
