//! Percentage extraction from the converter's free-form output.
//!
//! The converter redraws its progress line with carriage returns, so the
//! output is consumed in small chunks rather than lines. Chunks are appended
//! to a rolling buffer that is rescanned after every append; a token split
//! across two reads (`"9"` then `"%"`) is therefore still found.
//!
//! The buffer is cut back to its trailing [`PROGRESS_BUFFER_RETAIN`]
//! characters once it exceeds [`PROGRESS_BUFFER_LIMIT`]. A token straddling
//! that cut can be lost; progress display is best-effort and tolerates it.
//! Tokens still inside the buffer are reported again on the next chunk.

use chd_config::{OUTPUT_TAIL_CHARS, PROGRESS_BUFFER_LIMIT, PROGRESS_BUFFER_RETAIN};
use regex::Regex;
use std::sync::OnceLock;

/// Value reported when the converter exits successfully.
pub const COMPLETE_PERCENT: f32 = 100.0;

fn percent_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{1,3}(?:\.\d+)?)\s*%").expect("valid percent pattern"))
}

#[derive(Debug, Default)]
pub struct ProgressExtractor {
    buffer: String,
    tail: String,
}

impl ProgressExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and report every in-range percentage currently in the buffer.
    pub fn feed(&mut self, chunk: &str, mut report: impl FnMut(f32)) {
        self.buffer.push_str(chunk);
        self.tail = tail_of(&self.buffer, OUTPUT_TAIL_CHARS);

        for caps in percent_pattern().captures_iter(&self.buffer) {
            let Ok(pct) = caps[1].parse::<f32>() else {
                continue;
            };
            if (0.0..=100.0).contains(&pct) {
                report(pct);
            }
        }

        let len = self.buffer.chars().count();
        if len > PROGRESS_BUFFER_LIMIT {
            self.buffer = self.buffer.chars().skip(len - PROGRESS_BUFFER_RETAIN).collect();
        }
    }

    pub fn feed_collect(&mut self, chunk: &str) -> Vec<f32> {
        let mut out = Vec::new();
        self.feed(chunk, |pct| out.push(pct));
        out
    }

    /// Last output characters on a single line, for a live diagnostic readout.
    pub fn tail(&self) -> &str {
        &self.tail
    }
}

fn tail_of(buffer: &str, max_chars: usize) -> String {
    let len = buffer.chars().count();
    buffer
        .chars()
        .skip(len.saturating_sub(max_chars))
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn reported_set(chunks: &[&str]) -> BTreeSet<String> {
        let mut ex = ProgressExtractor::new();
        chunks
            .iter()
            .flat_map(|c| ex.feed_collect(c))
            .map(|p| format!("{p:.2}"))
            .collect()
    }

    #[test]
    fn token_split_across_reads_is_found() {
        let mut ex = ProgressExtractor::new();
        assert!(ex.feed_collect("Compressing, 4").is_empty());
        assert!(ex.feed_collect("2.").is_empty());
        assert_eq!(ex.feed_collect("5% complete"), vec![42.5]);
    }

    #[test]
    fn out_of_range_value_is_not_reported() {
        let mut ex = ProgressExtractor::new();
        let mut seen = Vec::new();
        for chunk in ["12", "3", ".4%"] {
            seen.extend(ex.feed_collect(chunk));
        }
        assert!(seen.is_empty(), "123.4 must be rejected, got {seen:?}");
    }

    #[test]
    fn whitespace_before_percent_sign_is_allowed() {
        let mut ex = ProgressExtractor::new();
        assert_eq!(ex.feed_collect("ratio 7 %"), vec![7.0]);
    }

    #[test]
    fn reported_values_do_not_depend_on_chunk_boundaries() {
        let stream = "Compressing, 1.5% complete... \rCompressing, 37.2% complete... \r";
        assert!(stream.len() <= PROGRESS_BUFFER_LIMIT);
        let whole = reported_set(&[stream]);
        assert_eq!(whole.len(), 2);

        for a in 1..stream.len() {
            for b in a..stream.len() {
                let parts = [&stream[..a], &stream[a..b], &stream[b..]];
                assert_eq!(reported_set(&parts), whole, "split at {a}/{b}");
            }
        }
    }

    #[test]
    fn buffer_is_truncated_to_trailing_window() {
        let mut ex = ProgressExtractor::new();
        ex.feed_collect(&"x".repeat(PROGRESS_BUFFER_LIMIT));
        assert_eq!(ex.buffer.chars().count(), PROGRESS_BUFFER_LIMIT);
        ex.feed_collect("y");
        assert_eq!(ex.buffer.chars().count(), PROGRESS_BUFFER_RETAIN);
        assert!(ex.buffer.ends_with('y'));
    }

    #[test]
    fn token_behind_the_truncation_point_is_lost() {
        // Accepted gap: the digits fall outside the retained window.
        let padding = " ".repeat(PROGRESS_BUFFER_RETAIN * 2);
        let head = format!("{}50{padding}", "z".repeat(100));

        let mut ex = ProgressExtractor::new();
        let mut seen = ex.feed_collect(&head);
        seen.extend(ex.feed_collect("%"));
        assert!(seen.is_empty());

        let mut whole = ProgressExtractor::new();
        assert_eq!(whole.feed_collect(&format!("{head}%")), vec![50.0]);
    }

    #[test]
    fn repeated_tokens_are_reported_again() {
        let mut ex = ProgressExtractor::new();
        assert_eq!(ex.feed_collect("10%"), vec![10.0]);
        assert_eq!(ex.feed_collect(" 20%"), vec![10.0, 20.0]);
    }

    #[test]
    fn tail_flattens_carriage_returns() {
        let mut ex = ProgressExtractor::new();
        ex.feed_collect("line one\r\nCompressing, 3%");
        assert_eq!(ex.tail(), "line one  Compressing, 3%");

        ex.feed_collect(&"a".repeat(200));
        assert_eq!(ex.tail().chars().count(), OUTPUT_TAIL_CHARS);
    }
}
