use bevy_ecs::prelude::Component;

/// Text shown on the HUD, e.g. the level title.
#[derive(Component, Clone, Debug)]
pub struct Label {
    pub text: String,
    pub font: &'static str,
    pub scale: f32,
    pub tint: [f32; 4],
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Label {
            text: text.into(),
            font: "5x5",
            scale: 1.0,
            tint: [1.0, 1.0, 1.0, 1.0],
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_tint(mut self, r: f32, g: f32, b: f32, a: f32) -> Self {
        self.tint = [r, g, b, a];
        self
    }
}
