use super::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    /// 0.0 = fully faded into the backdrop, 1.0 = opaque. Multiplied down
    /// the tree; colors are blended toward the inherited backdrop.
    pub opacity: f32,
    pub text_style: TextStyle,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: None,
            foreground: None,
            opacity: 1.0,
            text_style: TextStyle::default(),
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }
}
