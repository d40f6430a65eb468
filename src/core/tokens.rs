use serde::Serialize;

/// Raw chart text split into its `points[;max][;mean]` segments.
///
/// Segments are trimmed but otherwise untouched; numeric interpretation is
/// deferred to the validation stages. An empty max or mean segment is treated
/// as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSpec<'a> {
    pub points_text: &'a str,
    pub max_override_text: Option<&'a str>,
    pub mean_spec_text: Option<&'a str>,
}

impl<'a> ChartSpec<'a> {
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let mut segments = raw.trim().split(';').map(str::trim);
        let points_text = segments.next().unwrap_or_default();
        let mut max_override_text = segments.next().filter(|segment| !segment.is_empty());
        let mut mean_spec_text = segments.next().filter(|segment| !segment.is_empty());

        // `points;min,max,mean`: a list in the max slot can only be a mean spec.
        if mean_spec_text.is_none() && max_override_text.is_some_and(|text| text.contains(',')) {
            mean_spec_text = max_override_text.take();
        }

        Self {
            points_text,
            max_override_text,
            mean_spec_text,
        }
    }

    /// Comma-separated point tokens, trimmed, empty tokens kept.
    #[must_use]
    pub fn point_tokens(&self) -> Vec<String> {
        split_list(self.points_text)
    }
}

/// Splits a comma list after collapsing newline runs into single spaces.
#[must_use]
pub fn split_list(segment: &str) -> Vec<String> {
    collapse_newlines(segment)
        .split(',')
        .map(|token| token.trim().to_owned())
        .collect()
}

fn collapse_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch == '\n' {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Parses one token as a finite real number.
///
/// Empty tokens and `inf`/`NaN` spellings are rejected.
#[must_use]
pub fn parse_number(token: &str) -> Option<f64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::{ChartSpec, parse_number, split_list};

    #[test]
    fn parse_splits_three_segments() {
        let spec = ChartSpec::parse("  1,2,3 ; 10 ; 0, 20, 15 ");
        assert_eq!(spec.points_text, "1,2,3");
        assert_eq!(spec.max_override_text, Some("10"));
        assert_eq!(spec.mean_spec_text, Some("0, 20, 15"));
    }

    #[test]
    fn blank_segments_are_absent() {
        let spec = ChartSpec::parse("1,2;;50");
        assert_eq!(spec.max_override_text, None);
        assert_eq!(spec.mean_spec_text, Some("50"));

        let spec = ChartSpec::parse("1,2; ");
        assert_eq!(spec.max_override_text, None);
        assert_eq!(spec.mean_spec_text, None);
    }

    #[test]
    fn list_in_max_slot_is_read_as_mean_spec() {
        let spec = ChartSpec::parse("5,10;0,20,15");
        assert_eq!(spec.max_override_text, None);
        assert_eq!(spec.mean_spec_text, Some("0,20,15"));

        let spec = ChartSpec::parse("5,10;1,2;50");
        assert_eq!(spec.max_override_text, Some("1,2"));
        assert_eq!(spec.mean_spec_text, Some("50"));
    }

    #[test]
    fn newlines_collapse_inside_tokens() {
        assert_eq!(split_list("1,\n\n2,3\n4"), vec!["1", "2", "3 4"]);
    }

    #[test]
    fn parse_number_rejects_non_finite_spellings() {
        assert_eq!(parse_number(" 2.5 "), Some(2.5));
        assert_eq!(parse_number("-1e2"), Some(-100.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("abc"), None);
    }
}
