//! Notation rewriter tests

use libelles_generator::markup::{rewrite, NotationRule, NOTATION_RULES};

fn rule(name: &str) -> NotationRule {
    *NOTATION_RULES.iter().find(|r| r.name == name).unwrap()
}

#[test]
fn test_rule_order() {
    let names: Vec<&str> = NOTATION_RULES.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["bold", "oblique", "green", "red"]);
}

#[test]
fn test_identity_without_notations() {
    for text in ["", "Bonjour", "a * b _ c", "prix: 5$", "<em>déjà</em>"] {
        assert_eq!(rewrite(text), text);
    }
}

#[test]
fn test_odd_counts_are_literal() {
    for r in NOTATION_RULES {
        let one = format!("x {} y", r.notation);
        assert_eq!(r.apply(&one), one, "{}", r.name);

        let three = format!("{0}a{0}b{0}", r.notation);
        assert_eq!(r.apply(&three), three, "{}", r.name);
    }
}

#[test]
fn test_even_counts_alternate() {
    for r in NOTATION_RULES {
        let text = format!("{0}a{0} b {0}c{0}", r.notation);
        let expected = format!(
            "{0}a{1} b {0}c{1}",
            r.start_tag, r.end_tag
        );
        assert_eq!(r.apply(&text), expected, "{}", r.name);
    }
}

#[test]
fn test_each_rule_independent_of_others_odd_count() {
    // Unbalanced bold does not stop a balanced oblique
    assert_eq!(
        rewrite("** __x__"),
        r#"** <span class="_pale _oblique">x</span>"#
    );
}

#[test]
fn test_green_and_red_together() {
    let red = rule("red");
    let green = rule("green");
    assert_eq!(
        rewrite("_green_Oui_green_ / _red_Non_red_"),
        format!(
            "{}Oui{} / {}Non{}",
            green.start_tag, green.end_tag, red.start_tag, red.end_tag
        )
    );
}

#[test]
fn test_break_before_notations() {
    assert_eq!(rewrite("**a\nb**"), "<strong>a<br />b</strong>");
}
