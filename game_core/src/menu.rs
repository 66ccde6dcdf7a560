use glam::Vec2;

use crate::{Aabb, Color, Config, Surface, Text, TextSize};

const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 60.0);
const BUTTON_TOP: f32 = 250.0;
const BUTTON_GAP: f32 = 30.0;

/// A clickable menu entry
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Aabb,
    pub label: Text,
}

impl Button {
    fn new(pos: Vec2, label: &str) -> Self {
        let rect = Aabb::from_pos_size(pos, BUTTON_SIZE);
        Self {
            label: Text::centered(label, rect.center(), TextSize::BUTTON),
            rect,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}

/// Title screen: mode buttons and the best vs-AI score
#[derive(Debug, Clone)]
pub struct Menu {
    title: Text,
    high_score: Text,
    vs_ai: Button,
    vs_player: Button,
}

impl Menu {
    pub fn new(config: &Config) -> Self {
        let center_x = config.window_width / 2.0;
        let button_x = center_x - BUTTON_SIZE.x / 2.0;

        let mut menu = Self {
            title: Text::centered("PONG", Vec2::new(center_x, 80.0), TextSize::TITLE),
            high_score: Text::centered("", Vec2::new(center_x, 170.0), TextSize::LABEL),
            vs_ai: Button::new(Vec2::new(button_x, BUTTON_TOP), "Vs AI"),
            vs_player: Button::new(
                Vec2::new(button_x, BUTTON_TOP + BUTTON_SIZE.y + BUTTON_GAP),
                "Vs Player",
            ),
        };
        menu.set_high_score(0);
        menu
    }

    pub fn hit_test_ai(&self, point: Vec2) -> bool {
        self.vs_ai.contains(point)
    }

    pub fn hit_test_pvp(&self, point: Vec2) -> bool {
        self.vs_player.contains(point)
    }

    pub fn set_high_score(&mut self, score: u32) {
        self.high_score.set_content(format!("High Score: {score}"));
    }

    pub fn high_score_text(&self) -> &str {
        &self.high_score.content
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.draw_text(&self.title);
        surface.draw_text(&self.high_score);
        for button in [&self.vs_ai, &self.vs_player] {
            surface.fill_rect(button.rect, Color::BUTTON_GREY);
            surface.draw_text(&button.label);
        }
    }
}
