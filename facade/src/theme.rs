//! Default colors shared by the bundled presets.

use casement::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub backdrop: Color,
    pub surface: Color,
    pub accent: Color,
    pub track: Color,
    pub knob: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            backdrop: Color::oklch(0.18, 0.02, 250.0),
            surface: Color::oklch(0.25, 0.03, 250.0),
            accent: Color::oklch(0.65, 0.15, 250.0),
            track: Color::oklch(0.32, 0.02, 250.0),
            knob: Color::oklch(0.6, 0.05, 250.0),
            text: Color::oklch(0.93, 0.01, 250.0),
            muted: Color::oklch(0.6, 0.01, 250.0),
            error: Color::oklch(0.55, 0.2, 25.0),
        }
    }
}
