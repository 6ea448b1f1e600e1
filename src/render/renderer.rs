use console::{Color, Style};

/// Owns every styling decision of the terminal output. A plain renderer
/// returns text untouched, which is what tests and redirected output use.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    colors: bool,
}

impl Renderer {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn detect() -> Self {
        Self::new(console::colors_enabled())
    }

    pub fn detect_stderr() -> Self {
        Self::new(console::colors_enabled_stderr())
    }

    fn paint(&self, style: Style, text: &str) -> String {
        style.force_styling(self.colors).apply_to(text).to_string()
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(Style::new().bold(), text)
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(Style::new().bold().cyan(), text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(Style::new().dim(), text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(Style::new().black().bright(), text)
    }

    pub fn highlight(&self, text: &str) -> String {
        self.paint(Style::new().cyan().bright(), text)
    }

    pub fn value(&self, text: &str) -> String {
        self.paint(Style::new().green(), text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(Style::new().green().bright(), text)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(Style::new().yellow().bright(), text)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(Style::new().red().bright().bold(), text)
    }

    pub fn color(&self, color: Color, text: &str) -> String {
        self.paint(Style::new().fg(color), text)
    }

    pub fn language(&self, language: &str, text: &str) -> String {
        let (color, bright) = language_color(language);
        let style = Style::new().fg(color);
        self.paint(if bright { style.bright() } else { style }, text)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::detect()
    }
}

fn language_color(language: &str) -> (Color, bool) {
    match language {
        "TypeScript" => (Color::Blue, true),
        "JavaScript" => (Color::Yellow, false),
        "Python" | "PHP" | "CSS" => (Color::Blue, false),
        "Java" | "Ruby" | "HTML" => (Color::Red, false),
        "Go" => (Color::Cyan, false),
        "Rust" | "Swift" => (Color::Red, true),
        "C" => (Color::Black, true),
        "C++" | "SCSS" => (Color::Magenta, false),
        "C#" | "Shell" => (Color::Green, false),
        "Kotlin" => (Color::Magenta, true),
        "Dart" => (Color::Cyan, true),
        "Vue" => (Color::Green, true),
        _ => (Color::White, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer_leaves_text_alone() {
        let r = Renderer::plain();
        assert_eq!(r.bold("Stars"), "Stars");
        assert_eq!(r.language("Rust", "███"), "███");
        assert_eq!(r.color(Color::Magenta, "●"), "●");
    }

    #[test]
    fn test_colored_renderer_emits_escapes() {
        let r = Renderer::new(true);
        let styled = r.bold("Stars");
        assert_ne!(styled, "Stars");
        assert_eq!(console::strip_ansi_codes(&styled), "Stars");

        let error = r.error("Error:");
        assert!(error.starts_with('\u{1b}'), "{error:?}");
        assert_eq!(console::strip_ansi_codes(&error), "Error:");
        assert_eq!(Renderer::plain().error("Error:"), "Error:");
    }
}
