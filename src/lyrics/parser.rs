//! Lyrics format parsers
//!
//! Tagged format, one entry per line:
//! [00:12.34] Hello world
//! [00:15.00] Another line
//!
//! Manual format, as typed in the editor:
//! 0:12.34|Hello world
//! 15|Another line
//! A bare line gets a synthetic time based on its position.

use super::LyricLine;

/// Parse tagged `.lrc` content.
///
/// Only lines starting with a full `[mm:ss.xx]` tag (two digits per field)
/// are kept; everything else, metadata tags included, is skipped. The result
/// is sorted ascending by time, stable so equal timestamps keep file order.
pub fn parse_lrc(content: &str) -> Vec<LyricLine> {
    let mut lines: Vec<LyricLine> = content.lines().filter_map(parse_tagged_line).collect();
    lines.sort_by(|a, b| a.time.total_cmp(&b.time));
    lines
}

/// Parse a tagged line like `[00:12.34]Lyrics`
fn parse_tagged_line(line: &str) -> Option<LyricLine> {
    let b = line.as_bytes();
    // [mm:ss.xx] is exactly 10 bytes; the text after it may be empty.
    if b.len() < 10 || b[0] != b'[' || b[3] != b':' || b[6] != b'.' || b[9] != b']' {
        return None;
    }
    let minutes = two_digits(b[1], b[2])?;
    let seconds = two_digits(b[4], b[5])?;
    let hundredths = two_digits(b[7], b[8])?;

    // Fields are taken numerically as-is; "75" seconds is 75 seconds.
    let time = f64::from(minutes) * 60.0 + f64::from(seconds) + f64::from(hundredths) / 100.0;
    Some(LyricLine::new(time, line[10..].trim()))
}

fn two_digits(hi: u8, lo: u8) -> Option<u32> {
    if hi.is_ascii_digit() && lo.is_ascii_digit() {
        Some(u32::from(hi - b'0') * 10 + u32::from(lo - b'0'))
    } else {
        None
    }
}

/// Parse manually entered lyrics, one `time|text` or bare-text entry per line.
///
/// Blank lines are discarded before anything else, so the synthetic time for
/// a bare line is `3 * position` counted among the retained lines. A line
/// with a single pipe is `time|text`; any other pipe count makes the whole
/// trimmed line untimed text. Output keeps input order and is never sorted.
pub fn parse_manual(input: &str) -> Vec<LyricLine> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .filter_map(|(index, line)| parse_manual_line(index, line))
        .collect()
}

fn parse_manual_line(index: usize, line: &str) -> Option<LyricLine> {
    let mut parts = line.split('|');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(expr), Some(text), None) => {
            let time = parse_time_expr(expr)?;
            Some(LyricLine::new(time, text.trim()))
        }
        _ => Some(LyricLine::new(index as f64 * 3.0, line.trim())),
    }
}

/// Parse a time expression: `m:ss` (seconds may be fractional) or bare seconds
fn parse_time_expr(expr: &str) -> Option<f64> {
    let expr = expr.trim();
    if let Some((minutes, seconds)) = expr.split_once(':') {
        let minutes: f64 = minutes.trim().parse().ok()?;
        let seconds: f64 = seconds.trim().parse().ok()?;
        Some(minutes * 60.0 + seconds)
    } else {
        expr.parse().ok()
    }
}

/// Serialize lines back into the editor's `m:ss.ff|text` form, one per line
pub fn to_manual(lines: &[LyricLine]) -> String {
    lines
        .iter()
        .map(|l| {
            let minutes = (l.time / 60.0).floor();
            let seconds = l.time - minutes * 60.0;
            format!("{}:{:05.2}|{}", minutes as u64, seconds, l.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_line_values() {
        let lines = parse_lrc("[01:23.45]  Hello world  ");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].time, 60.0 + 23.0 + 0.45);
        assert_eq!(lines[0].text, "Hello world");
    }

    #[test]
    fn test_tagged_skips_non_matching() {
        let lrc = "[ti:Some Song]\n[ar:Someone]\nno tag here\n[1:23.45]one digit minute\n[00:12.34]kept\n";
        let lines = parse_lrc(lrc);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "kept");
    }

    #[test]
    fn test_tagged_sorts_ascending() {
        let lrc = "[00:15.00]second\n[00:05.00]first\n[01:00.00]third\n";
        let lines = parse_lrc(lrc);
        let times: Vec<f64> = lines.iter().map(|l| l.time).collect();
        assert_eq!(times, vec![5.0, 15.0, 60.0]);
        assert_eq!(lines[0].text, "first");
    }

    #[test]
    fn test_tagged_empty_input() {
        assert!(parse_lrc("").is_empty());
        assert!(parse_lrc("just\nplain\ntext\n").is_empty());
    }

    #[test]
    fn test_tagged_accepts_out_of_range_seconds() {
        // No range validation: 75 seconds is taken at face value.
        let lines = parse_lrc("[00:75.00]late");
        assert_eq!(lines[0].time, 75.0);
    }

    #[test]
    fn test_tagged_allows_empty_text() {
        let lines = parse_lrc("[00:10.00]");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "");
    }

    #[test]
    fn test_manual_timed_entries() {
        let lines = parse_manual("1:23|hello\n90|world\n");
        assert_eq!(lines[0], LyricLine::new(83.0, "hello"));
        assert_eq!(lines[1], LyricLine::new(90.0, "world"));
    }

    #[test]
    fn test_manual_fractional_seconds() {
        let lines = parse_manual("0:12.5|a\n7.25|b\n");
        assert_eq!(lines[0].time, 12.5);
        assert_eq!(lines[1].time, 7.25);
    }

    #[test]
    fn test_manual_bare_line_spacing() {
        // Position counts all retained lines, not just the untimed ones.
        let lines = parse_manual("0:01|first\n0:02|second\njust text\n");
        assert_eq!(lines[2], LyricLine::new(6.0, "just text"));
    }

    #[test]
    fn test_manual_blank_lines_do_not_count() {
        let lines = parse_manual("\n  \nonly line\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], LyricLine::new(0.0, "only line"));
    }

    #[test]
    fn test_manual_extra_pipes_are_text() {
        let lines = parse_manual("a|b|c");
        assert_eq!(lines[0], LyricLine::new(0.0, "a|b|c"));
    }

    #[test]
    fn test_manual_bad_time_dropped() {
        let lines = parse_manual("abc|skipped\n0:05|kept\n");
        assert_eq!(lines.len(), 1);
        // The dropped line still held position 0, so "kept" is unaffected.
        assert_eq!(lines[0], LyricLine::new(5.0, "kept"));
    }

    #[test]
    fn test_manual_preserves_input_order() {
        // Unlike the tagged parser, manual entry is never sorted.
        let lines = parse_manual("0:30|late\n0:10|early\n");
        assert_eq!(lines[0].text, "late");
        assert_eq!(lines[1].text, "early");
    }

    #[test]
    fn test_to_manual_format() {
        let out = to_manual(&[LyricLine::new(83.0, "hello"), LyricLine::new(6.0, "next")]);
        assert_eq!(out, "1:23.00|hello\n0:06.00|next");
    }

    #[test]
    fn test_manual_round_trip() {
        let original = vec![
            LyricLine::new(0.0, "intro"),
            LyricLine::new(12.34, "verse"),
            LyricLine::new(83.5, "chorus"),
        ];
        let reparsed = parse_manual(&to_manual(&original));
        assert_eq!(reparsed, original);
    }
}
