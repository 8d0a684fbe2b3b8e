use itertools::Itertools;

/// Correctness of a single passage character as shown in the text box
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharColor {
    Untyped,
    Match,
    Mismatch,
}

fn is_space(chunk: &[char]) -> bool {
    chunk.first() == Some(&' ')
}

/// Greedy word wrap.
///
/// Whitespace is normalised to spaces and lines break between words. Trailing
/// whitespace is dropped from every line and leading whitespace from every line
/// but the first. Words wider than `width` are hard-broken, filling the rest of
/// the current line first. Blank text yields no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);

    let grouped = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .chunk_by(|c| *c == ' ');

    let mut chunks: Vec<Vec<char>> = grouped
        .into_iter()
        .map(|(_, group)| group.collect())
        .collect();
    chunks.reverse();

    let mut lines = Vec::new();

    while !chunks.is_empty() {
        let mut line: Vec<Vec<char>> = Vec::new();
        let mut len = 0;

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_space(c)) {
            chunks.pop();
        }

        while chunks.last().is_some_and(|c| len + c.len() <= width) {
            if let Some(chunk) = chunks.pop() {
                len += chunk.len();
                line.push(chunk);
            }
        }

        if let Some(chunk) = chunks.last_mut() {
            if chunk.len() > width && len < width {
                let rest = chunk.split_off(width - len);
                line.push(std::mem::replace(chunk, rest));
            }
        }

        if line.last().is_some_and(|c| is_space(c)) {
            line.pop();
        }

        if !line.is_empty() {
            lines.push(line.concat().into_iter().collect());
        }
    }

    lines
}

/// The slice of wrapped passage lines visible in the text box, plus the typed
/// line laid over them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollWindow {
    /// Index of the first visible line within the wrapped passage
    pub first_line: usize,
    pub target: Vec<String>,
    pub typed: Vec<String>,
}

impl ScrollWindow {
    /// Keeps the line currently being typed as the first visible row. Before
    /// anything is typed the window is top-aligned.
    pub fn compute(passage: &str, typed: &str, width: usize, height: usize) -> Self {
        let target_lines = wrap(passage, width);
        let typed_lines = wrap(typed, width);

        let first_line = match typed_lines.len() {
            0 => 0,
            n => (n - 1).min(target_lines.len().saturating_sub(1)),
        };
        let end = (first_line + height).min(target_lines.len());

        let target = target_lines
            .get(first_line..end)
            .map(<[String]>::to_vec)
            .unwrap_or_default();
        let typed = typed_lines.last().cloned().into_iter().collect();

        Self {
            first_line,
            target,
            typed,
        }
    }

    pub fn color_at(&self, row: usize, col: usize) -> CharColor {
        let expected = self.target.get(row).and_then(|l| l.chars().nth(col));
        let actual = self.typed.get(row).and_then(|l| l.chars().nth(col));

        match (expected, actual) {
            (Some(e), Some(a)) if e == a => CharColor::Match,
            (Some(_), Some(_)) => CharColor::Mismatch,
            _ => CharColor::Untyped,
        }
    }

    /// Visible rows as `(char, color)` cells
    pub fn rows(&self) -> Vec<Vec<(char, CharColor)>> {
        self.target
            .iter()
            .enumerate()
            .map(|(row, line)| {
                let typed: Vec<char> = self
                    .typed
                    .get(row)
                    .map(|l| l.chars().collect())
                    .unwrap_or_default();

                line.chars()
                    .enumerate()
                    .map(|(col, expected)| {
                        let color = match typed.get(col) {
                            Some(&actual) if actual == expected => CharColor::Match,
                            Some(_) => CharColor::Mismatch,
                            None => CharColor::Untyped,
                        };
                        (expected, color)
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSAGE: &str = "the quick brown fox jumps over the lazy dog while the cat \
                           sleeps soundly beside the warm kitchen stove";

    #[test]
    fn test_wrap_short_text_single_line() {
        assert_eq!(wrap("cat sat", 40), vec!["cat sat"]);
    }

    #[test]
    fn test_wrap_breaks_between_words() {
        assert_eq!(
            wrap("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_exact_fit() {
        assert_eq!(wrap("abcd efgh", 4), vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_hard_breaks_long_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("ab cdefghij", 5), vec!["ab cd", "efghi", "j"]);
    }

    #[test]
    fn test_wrap_blank_text() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("    ", 10).is_empty());
    }

    #[test]
    fn test_wrap_drops_trailing_and_continuation_whitespace() {
        assert_eq!(wrap("cat ", 10), vec!["cat"]);
        assert_eq!(wrap("aaa    bbb", 4), vec!["aaa", "bbb"]);
        assert_eq!(wrap("  lead", 10), vec!["  lead"]);
    }

    #[test]
    fn test_wrap_normalises_whitespace() {
        assert_eq!(wrap("a\tb\nc", 10), vec!["a b c"]);
    }

    #[test]
    fn test_wrap_zero_width_is_clamped() {
        assert_eq!(wrap("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_wrap_lines_never_exceed_width() {
        for width in 1..30 {
            for line in wrap(PASSAGE, width) {
                assert!(line.chars().count() <= width, "{line:?} wider than {width}");
            }
        }
    }

    #[test]
    fn test_window_top_aligned_before_typing() {
        let window = ScrollWindow::compute(PASSAGE, "", 20, 3);
        let all = wrap(PASSAGE, 20);

        assert_eq!(window.first_line, 0);
        assert_eq!(window.target, all[..3].to_vec());
        assert!(window.typed.is_empty());
    }

    #[test]
    fn test_window_short_passage_is_not_padded() {
        let window = ScrollWindow::compute("cat sat", "", 40, 3);

        assert_eq!(window.target, vec!["cat sat"]);
        assert!(window.typed.is_empty());
    }

    #[test]
    fn test_window_scrolls_to_active_line() {
        let all = wrap(PASSAGE, 20);
        let typed = format!("{} {} th", all[0], all[1]);
        let window = ScrollWindow::compute(PASSAGE, &typed, 20, 3);

        assert_eq!(window.first_line, 2);
        assert_eq!(window.target[0], all[2]);
        assert_eq!(window.typed, vec!["th"]);
    }

    #[test]
    fn test_window_clamps_when_typed_wraps_past_passage() {
        let window = ScrollWindow::compute("aaaa bbbb", "aa aa aa", 4, 3);

        assert_eq!(window.first_line, 1);
        assert_eq!(window.target, vec!["bbbb"]);
        assert_eq!(window.typed, vec!["aa"]);
    }

    #[test]
    fn test_window_properties_hold_for_every_prefix() {
        for (width, height) in [(10, 1), (20, 3), (37, 2), (80, 5)] {
            let all = wrap(PASSAGE, width);
            for end in 0..=PASSAGE.len() {
                let typed = &PASSAGE[..end];
                let window = ScrollWindow::compute(PASSAGE, typed, width, height);

                assert!(!window.target.is_empty());
                assert!(window.target.len() <= height);
                assert!(window.typed.len() <= 1);

                let typed_lines = wrap(typed, width);
                if let Some(active) = typed_lines.last() {
                    assert_eq!(window.first_line, typed_lines.len() - 1);
                    assert_eq!(&window.typed[0], active);
                    assert_eq!(window.target[0], all[window.first_line]);
                }
            }
        }
    }

    #[test]
    fn test_color_at_is_positional() {
        let window = ScrollWindow::compute("cat sat", "cat sad", 40, 3);

        assert_eq!(window.color_at(0, 0), CharColor::Match);
        assert_eq!(window.color_at(0, 5), CharColor::Match);
        assert_eq!(window.color_at(0, 6), CharColor::Mismatch);
        assert_eq!(window.color_at(1, 0), CharColor::Untyped);
        assert_eq!(window.color_at(0, 40), CharColor::Untyped);
    }

    #[test]
    fn test_characters_past_typed_line_are_untyped() {
        let window = ScrollWindow::compute("cat sat", "cx", 40, 3);
        let colors: Vec<CharColor> = window.rows()[0].iter().map(|(_, c)| *c).collect();

        assert_eq!(
            colors,
            vec![
                CharColor::Match,
                CharColor::Mismatch,
                CharColor::Untyped,
                CharColor::Untyped,
                CharColor::Untyped,
                CharColor::Untyped,
                CharColor::Untyped,
            ]
        );
    }

    #[test]
    fn test_rows_agree_with_color_at() {
        let window = ScrollWindow::compute(PASSAGE, "the quick brpwn fox ju", 12, 3);
        for (row, cells) in window.rows().iter().enumerate() {
            for (col, (_, color)) in cells.iter().enumerate() {
                assert_eq!(*color, window.color_at(row, col));
            }
        }
    }

    #[test]
    fn test_zero_height_window_is_empty() {
        let window = ScrollWindow::compute("cat sat", "c", 40, 0);
        assert!(window.target.is_empty());
    }
}
