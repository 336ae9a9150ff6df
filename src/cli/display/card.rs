// src/cli/display/card.rs
// Renders one example record as a card: header, tags, clipped code preview,
// use cases, toggle hint. Pure text in, text out, so the expand/collapse
// contract is testable without a terminal.

use crate::catalog::{CatalogView, ExampleRecord};
use crate::config::CONFIG;

use super::theme::ColorTheme;

/// Continuation hint under a collapsed preview whose code keeps going.
const FADE_HINT: &str = "· · ·";

/// Line caps for the code preview in each state.
#[derive(Debug, Clone, Copy)]
pub struct CardLimits {
    pub collapsed_code_lines: usize,
    pub expanded_code_lines: usize,
}

impl CardLimits {
    pub fn from_config() -> Self {
        Self {
            collapsed_code_lines: CONFIG.collapsed_code_lines,
            expanded_code_lines: CONFIG.expanded_code_lines,
        }
    }

    fn line_limit(&self, expanded: bool) -> usize {
        if expanded {
            self.expanded_code_lines
        } else {
            self.collapsed_code_lines
        }
    }
}

/// Render one record as card lines. The clipping here is presentational
/// only: the record's `code` is read, never changed.
pub fn render_card(
    record: &ExampleRecord,
    expanded: bool,
    selected: bool,
    theme: &ColorTheme,
    limits: &CardLimits,
) -> Vec<String> {
    let mut lines = Vec::new();

    let marker = if selected {
        theme.selection.apply_to("▸ ").to_string()
    } else {
        "  ".to_string()
    };
    let category = theme
        .category_style(&record.category)
        .apply_to(format!("[{}]", record.category));
    let badge = theme
        .difficulty_style(record.difficulty)
        .apply_to(record.difficulty.label());
    lines.push(format!(
        "{}{} {}  {}  {}",
        marker,
        record.icon,
        theme.title.apply_to(&record.title),
        category,
        badge
    ));

    lines.push(format!("  {}", theme.description.apply_to(&record.description)));

    if !record.tags.is_empty() {
        let tags = record
            .tags
            .iter()
            .map(|t| theme.tag.apply_to(format!("#{t}")).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("  {tags}"));
    }

    let limit = limits.line_limit(expanded);
    let total_code_lines = record.code.lines().count();
    for line in record.code.lines().take(limit) {
        lines.push(format!(
            "  {} {}",
            theme.hint.apply_to("│"),
            theme.code.apply_to(line)
        ));
    }
    if !expanded && total_code_lines > limit {
        lines.push(format!("  {}", theme.hint.apply_to(FADE_HINT)));
    }

    if expanded && !record.use_cases.is_empty() {
        lines.push(format!("  {}", theme.title.apply_to("Use cases")));
        for use_case in &record.use_cases {
            lines.push(format!("    {} {}", theme.tag.apply_to("•"), use_case));
        }
    }

    let label = if expanded { "show less" } else { "show more" };
    lines.push(format!("  {}", theme.hint.apply_to(format!("[enter] {label}"))));
    lines.push(String::new());

    lines
}

/// Render every card in a view, marking the selected one.
pub fn render_catalog(
    view: &CatalogView,
    selected: usize,
    theme: &ColorTheme,
    limits: &CardLimits,
) -> Vec<Vec<String>> {
    view.records()
        .iter()
        .enumerate()
        .map(|(i, record)| render_card(record, view.is_expanded(i), i == selected, theme, limits))
        .collect()
}

/// One-line summary for the non-interactive `list` command.
pub fn summary_line(index: usize, record: &ExampleRecord, theme: &ColorTheme) -> String {
    let idx = theme.hint.apply_to(format!("{:2}.", index + 1));
    let title = theme.title.apply_to(&record.title);
    let category = theme
        .category_style(&record.category)
        .apply_to(format!("[{}]", record.category));
    let badge = theme
        .difficulty_style(record.difficulty)
        .apply_to(record.difficulty.label());
    format!("{} {} {}  {}  {}", idx, record.icon, title, category, badge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Difficulty;

    fn limits() -> CardLimits {
        CardLimits {
            collapsed_code_lines: 3,
            expanded_code_lines: 10,
        }
    }

    fn record_with_code_lines(n: usize) -> ExampleRecord {
        let code = (0..n)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        ExampleRecord {
            icon: "🤖".to_string(),
            title: "Sample".to_string(),
            description: "A sample record".to_string(),
            tags: vec!["agents".to_string(), "demo".to_string()],
            code,
            use_cases: vec!["First use".to_string(), "Second use".to_string()],
            category: "Agents".to_string(),
            difficulty: Difficulty::Beginner,
        }
    }

    fn code_lines(lines: &[String]) -> usize {
        lines.iter().filter(|l| l.contains('│')).count()
    }

    #[test]
    fn test_header_fields_always_visible() {
        let record = record_with_code_lines(2);
        let theme = ColorTheme::default();
        for expanded in [false, true] {
            let text = render_card(&record, expanded, false, &theme, &limits()).join("\n");
            assert!(text.contains("Sample"));
            assert!(text.contains("A sample record"));
            assert!(text.contains("#agents"));
            assert!(text.contains("[Agents]"));
            assert!(text.contains("Beginner"));
        }
    }

    #[test]
    fn test_collapsed_preview_is_clamped_with_fade() {
        let record = record_with_code_lines(8);
        let lines = render_card(&record, false, false, &ColorTheme::default(), &limits());
        assert_eq!(code_lines(&lines), 3);
        assert!(lines.join("\n").contains(FADE_HINT));
    }

    #[test]
    fn test_expanded_preview_uses_larger_bound_without_fade() {
        let record = record_with_code_lines(8);
        let lines = render_card(&record, true, false, &ColorTheme::default(), &limits());
        assert_eq!(code_lines(&lines), 8);
        assert!(!lines.join("\n").contains(FADE_HINT));
    }

    #[test]
    fn test_short_code_never_shows_fade() {
        let record = record_with_code_lines(2);
        let lines = render_card(&record, false, false, &ColorTheme::default(), &limits());
        assert_eq!(code_lines(&lines), 2);
        assert!(!lines.join("\n").contains(FADE_HINT));
    }

    #[test]
    fn test_use_cases_render_only_when_expanded() {
        let record = record_with_code_lines(2);
        let theme = ColorTheme::default();

        let collapsed = render_card(&record, false, false, &theme, &limits()).join("\n");
        assert!(!collapsed.contains("First use"));
        assert!(!collapsed.contains("Use cases"));

        let expanded = render_card(&record, true, false, &theme, &limits()).join("\n");
        assert!(expanded.contains("Use cases"));
        assert!(expanded.contains("First use"));
        assert!(expanded.contains("Second use"));
    }

    #[test]
    fn test_toggle_label_tracks_state() {
        let record = record_with_code_lines(2);
        let theme = ColorTheme::default();
        let collapsed = render_card(&record, false, false, &theme, &limits()).join("\n");
        assert!(collapsed.contains("show more"));
        let expanded = render_card(&record, true, false, &theme, &limits()).join("\n");
        assert!(expanded.contains("show less"));
    }

    #[test]
    fn test_clipping_never_mutates_the_record() {
        let record = record_with_code_lines(20);
        let before = record.code.clone();
        let _ = render_card(&record, false, false, &ColorTheme::default(), &limits());
        assert_eq!(record.code, before);
        assert_eq!(record.code.lines().count(), 20);
    }

    #[test]
    fn test_catalog_rendering_expands_exactly_one_card() {
        let records = vec![record_with_code_lines(2); 3];
        let mut view = CatalogView::new(records);
        view.toggle_expand(1);

        let cards = render_catalog(&view, 0, &ColorTheme::default(), &limits());
        let expanded: Vec<bool> = cards
            .iter()
            .map(|card| card.join("\n").contains("show less"))
            .collect();
        assert_eq!(expanded, vec![false, true, false]);
    }
}
