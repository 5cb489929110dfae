use eframe::egui::{self, Color32};

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub muted: Color32,
    pub card_background: Color32,
    pub code_background: Color32,
    pub code_foreground: Color32,
    pub success: Color32,
    pub title_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub small_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            foreground: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x8A, 0xB4, 0xF8),
            muted: Color32::from_rgb(0x9A, 0xA0, 0xA6),
            card_background: Color32::from_rgb(0x2A, 0x2A, 0x2E),
            code_background: Color32::from_rgb(0x2D, 0x2D, 0x2D),
            code_foreground: Color32::from_rgb(0xD4, 0xD4, 0xD4),
            success: Color32::from_rgb(0x81, 0xC9, 0x95),
            title_size: 56.0,
            heading_size: 34.0,
            body_size: 20.0,
            small_size: 15.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::WHITE,
            foreground: Color32::from_rgb(0x20, 0x21, 0x24),
            heading_color: Color32::from_rgb(0x17, 0x4E, 0xA6),
            accent: Color32::from_rgb(0x42, 0x85, 0xF4),
            muted: Color32::from_rgb(0x5F, 0x63, 0x68),
            card_background: Color32::from_rgb(0xF8, 0xF9, 0xFA),
            code_background: Color32::from_rgb(0x20, 0x21, 0x24),
            code_foreground: Color32::from_rgb(0xE8, 0xEA, 0xED),
            success: Color32::from_rgb(0x18, 0x80, 0x38),
            title_size: 56.0,
            heading_size: 34.0,
            body_size: 20.0,
            small_size: 15.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "dark"
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }

    /// egui visuals matching this theme.
    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = if self.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.background;
        visuals.window_fill = self.card_background;
        visuals.override_text_color = Some(self.foreground);
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = Self::with_opacity(self.accent, 0.35);
        visuals
    }
}
