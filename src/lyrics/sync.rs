//! Maps playback time to the active lyric line

use super::LyricLine;

/// Index of the line whose time window contains `position`.
///
/// Returns the first index `i` with `position >= lines[i].time` where `i` is
/// the last entry or `position < lines[i + 1].time`. `None` for an empty
/// slice or a position before the first entry. The scan assumes ascending
/// times; on unsorted input the first window that matches wins.
pub fn active_line(lines: &[LyricLine], position: f64) -> Option<usize> {
    (0..lines.len()).find(|&i| {
        position >= lines[i].time
            && lines.get(i + 1).is_none_or(|next| position < next.time)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(times: &[f64]) -> Vec<LyricLine> {
        times
            .iter()
            .enumerate()
            .map(|(i, &t)| LyricLine::new(t, format!("line {i}")))
            .collect()
    }

    #[test]
    fn test_window_match() {
        let lines = timed(&[0.0, 3.0, 6.0]);
        assert_eq!(active_line(&lines, 4.0), Some(1));
        assert_eq!(active_line(&lines, 0.0), Some(0));
        assert_eq!(active_line(&lines, 2.999), Some(0));
    }

    #[test]
    fn test_before_first_is_none() {
        let lines = timed(&[0.0, 3.0, 6.0]);
        assert_eq!(active_line(&lines, -1.0), None);

        let late_start = timed(&[5.0, 8.0]);
        assert_eq!(active_line(&late_start, 2.0), None);
    }

    #[test]
    fn test_last_window_is_open_ended() {
        let lines = timed(&[0.0, 3.0, 6.0]);
        assert_eq!(active_line(&lines, 6.0), Some(2));
        assert_eq!(active_line(&lines, 1000.0), Some(2));
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(active_line(&[], 10.0), None);
    }

    #[test]
    fn test_idempotent() {
        let lines = timed(&[0.0, 3.0, 6.0]);
        let first = active_line(&lines, 4.2);
        assert_eq!(active_line(&lines, 4.2), first);
    }
}
