use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::Series;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a convergence log from a file.
///
/// Expected layout: one row per line, two whitespace-separated numeric
/// columns (`iteration error`), no header. Blank lines and lines starting
/// with `#` are skipped; anything else must parse or the load fails.
pub fn load_series(path: &Path, label: &str) -> Result<Series> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_series(&text, label).with_context(|| format!("parsing {}", path.display()))
}

// ---------------------------------------------------------------------------
// Two-column text parser
// ---------------------------------------------------------------------------

fn parse_series(text: &str, label: &str) -> Result<Series> {
    let mut x = Vec::new();
    let mut y = Vec::new();

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(a), Some(b), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            bail!("line {}: expected two columns, got '{line}'", line_no + 1);
        };

        x.push(parse_number(a, line_no)?);
        y.push(parse_number(b, line_no)?);
    }

    Ok(Series {
        label: label.to_string(),
        x,
        y,
    })
}

fn parse_number(token: &str, line_no: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .with_context(|| format!("line {}: '{token}' is not a number", line_no + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_file_round_trips_exactly() {
        let s = parse_series("1 10\n2 5\n3 2\n", "PESA").unwrap();
        assert_eq!(s.label, "PESA");
        assert_eq!(s.len(), 3);
        assert_eq!(s.x, vec![1.0, 2.0, 3.0]);
        assert_eq!(s.y, vec![10.0, 5.0, 2.0]);
    }

    #[test]
    fn scientific_notation_and_tabs_parse() {
        let s = parse_series("1\t1.5e-3\n2\t7.25e-4\n", "NSGA2").unwrap();
        assert_eq!(s.x, vec![1.0, 2.0]);
        assert_eq!(s.y, vec![1.5e-3, 7.25e-4]);
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        let s = parse_series("# header comment\n1 10\n\n  \n2 5\n", "PESA").unwrap();
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn non_numeric_token_fails_the_load() {
        let err = parse_series("1 10\n2 oops\n3 2\n", "PESA").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err:#}");
    }

    #[test]
    fn wrong_column_count_fails_the_load() {
        assert!(parse_series("1 10 99\n", "PESA").is_err());
        assert!(parse_series("1\n", "PESA").is_err());
    }

    #[test]
    fn empty_file_yields_empty_series() {
        let s = parse_series("", "PESA").unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_series(&dir.path().join("absent.txt"), "PESA").unwrap_err();
        assert!(err.to_string().contains("absent.txt"), "{err:#}");
    }

    #[test]
    fn load_from_disk_matches_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nsga2.txt");
        std::fs::write(&path, "1 12\n2 6\n3 1\n").unwrap();

        let s = load_series(&path, "NSGA2").unwrap();
        assert_eq!(s.label, "NSGA2");
        assert_eq!(s.plot_points(), vec![[1.0, 12.0], [2.0, 6.0], [3.0, 1.0]]);
    }
}
