// src/cli/display/theme.rs
// Color assignments for catalog rendering.

use console::Style;

use crate::catalog::Difficulty;

/// Styling configuration for cards and lists. One instance per surface;
/// every visual decision goes through here so output stays consistent.
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub title: Style,
    pub description: Style,
    pub tag: Style,
    pub code: Style,
    pub hint: Style,
    pub selection: Style,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            title: Style::new().bold(),
            description: Style::new().dim(),
            tag: Style::new().cyan(),
            code: Style::new(),
            hint: Style::new().dim(),
            selection: Style::new().cyan().bold(),
        }
    }
}

impl ColorTheme {
    /// Accent color for a category label.
    pub fn category_style(&self, category: &str) -> Style {
        match category.to_ascii_lowercase().as_str() {
            "agents" => Style::new().magenta(),
            "workflows" => Style::new().yellow(),
            "memory" => Style::new().green(),
            "tools" => Style::new().blue(),
            "voice" => Style::new().red(),
            _ => Style::new().white(),
        }
    }

    /// Badge color for a difficulty label.
    pub fn difficulty_style(&self, difficulty: Difficulty) -> Style {
        match difficulty {
            Difficulty::Beginner => Style::new().green(),
            Difficulty::Intermediate => Style::new().yellow(),
            Difficulty::Advanced => Style::new().red(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_style_is_total() {
        let theme = ColorTheme::default();
        // Unknown categories still style rather than panic.
        let styled = theme.category_style("Something Else").apply_to("x");
        assert!(styled.to_string().contains('x'));
    }

    #[test]
    fn test_difficulty_badges_render_their_label() {
        let theme = ColorTheme::default();
        let badge = theme
            .difficulty_style(Difficulty::Advanced)
            .apply_to(Difficulty::Advanced.label())
            .to_string();
        assert!(badge.contains("Advanced"));
    }
}
