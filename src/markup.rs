//! Notation rewriter - lightweight spreadsheet notations → HTML
//!
//! Authors mark up libellés in the spreadsheet with paired delimiters
//! (`**bold**`, `__oblique__`, `_green_text_green_`, `_red_text_red_`).
//! Before storage these are rewritten to the HTML the survey widgets render.

/// Markup written in place of a line break
pub const LINE_BREAK_HTML: &str = "<br />";

/// A paired delimiter and the tags it expands to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotationRule {
    pub name: &'static str,
    pub notation: &'static str,
    pub start_tag: &'static str,
    pub end_tag: &'static str,
}

/// Rules in application order. Each rule sees the output of the previous one.
pub const NOTATION_RULES: [NotationRule; 4] = [
    NotationRule {
        name: "bold",
        notation: "**",
        start_tag: "<strong>",
        end_tag: "</strong>",
    },
    NotationRule {
        name: "oblique",
        notation: "__",
        start_tag: r#"<span class="_pale _oblique">"#,
        end_tag: "</span>",
    },
    NotationRule {
        name: "green",
        notation: "_green_",
        start_tag: r#"<span style="color: green;">"#,
        end_tag: "</span>",
    },
    NotationRule {
        name: "red",
        notation: "_red_",
        start_tag: r#"<span style="color: red;">"#,
        end_tag: "</span>",
    },
];

/// Rewrite line breaks and every notation in [`NOTATION_RULES`] to HTML
pub fn rewrite(input: &str) -> String {
    let with_breaks = input.replace('\n', LINE_BREAK_HTML);
    NOTATION_RULES
        .iter()
        .fold(with_breaks, |text, rule| rule.apply(&text))
}

impl NotationRule {
    /// Replace occurrences alternately with the start and end tags.
    ///
    /// An odd number of occurrences means the markup is unbalanced; the text
    /// is returned unchanged so the delimiters stay visible as literals.
    pub fn apply(&self, text: &str) -> String {
        let count = text.matches(self.notation).count();
        if count == 0 || count % 2 != 0 {
            return text.to_string();
        }

        let mut result = String::with_capacity(text.len() + count * self.start_tag.len());
        let mut last = 0;
        for (occurrence, (start, matched)) in text.match_indices(self.notation).enumerate() {
            result.push_str(&text[last..start]);
            result.push_str(if occurrence % 2 == 0 {
                self.start_tag
            } else {
                self.end_tag
            });
            last = start + matched.len();
        }
        result.push_str(&text[last..]);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_break() {
        assert_eq!(rewrite("a\nb"), "a<br />b");
        assert_eq!(rewrite("a\n\nb"), "a<br /><br />b");
    }

    #[test]
    fn test_bold() {
        assert_eq!(rewrite("**bold**"), "<strong>bold</strong>");
        assert_eq!(
            rewrite("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_oblique() {
        assert_eq!(rewrite("__x__"), r#"<span class="_pale _oblique">x</span>"#);
    }

    #[test]
    fn test_colors() {
        assert_eq!(
            rewrite("_green_ok_green_"),
            r#"<span style="color: green;">ok</span>"#
        );
        assert_eq!(
            rewrite("_red_no_red_"),
            r#"<span style="color: red;">no</span>"#
        );
    }

    #[test]
    fn test_odd_count_left_literal() {
        assert_eq!(rewrite("5 ** 2"), "5 ** 2");
        assert_eq!(rewrite("**a** **"), "**a** **");
        assert_eq!(rewrite("_red_ alert"), "_red_ alert");
    }

    #[test]
    fn test_no_notation_is_identity() {
        let text = "Quelle est votre adresse?";
        assert_eq!(rewrite(text), text);
    }

    #[test]
    fn test_rules_apply_in_order() {
        // `_green_` contains no `__`, but `__green__` loses its double
        // underscores to the oblique rule before the green rule runs.
        assert_eq!(
            rewrite("__green__"),
            r#"<span class="_pale _oblique">green</span>"#
        );
        // `_red__red_` holds one `__` (odd) so oblique skips it, then the red
        // rule sees two `_red_` delimiters.
        assert_eq!(
            rewrite("_red__red_"),
            r#"<span style="color: red;"></span>"#
        );
    }

    #[test]
    fn test_mixed_notations() {
        assert_eq!(
            rewrite("**Note:**\n__optionnel__"),
            r#"<strong>Note:</strong><br /><span class="_pale _oblique">optionnel</span>"#
        );
    }

    #[test]
    fn test_non_overlapping_count() {
        // Three asterisks hold a single non-overlapping `**`
        assert_eq!(rewrite("***"), "***");
        assert_eq!(rewrite("****"), "<strong></strong>");
    }
}
