use inksac::prelude::*;

/// Terminal styling for the prompt.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    color_support: ColorSupport,
}

impl Highlighter {
    /// Styles are applied only if `enabled` and the terminal supports color.
    pub fn new(enabled: bool) -> Self {
        let support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// `<user>:<cwd> > ` with a bold green user and a bold blue directory.
    pub fn prompt(&self, user: &str, cwd: &str) -> String {
        format!(
            "{}:{} > ",
            self.bold(user, Color::Green),
            self.bold(cwd, Color::Blue)
        )
    }

    fn bold(&self, text: &str, color: Color) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }

        let style = Style::builder().foreground(color).bold().build();
        text.style(style).to_string()
    }
}
