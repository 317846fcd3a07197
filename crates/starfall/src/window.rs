use glam::Vec2;
use macroquad::color::{Color, BLACK};
use macroquad::input::{is_key_pressed, is_quit_requested, prevent_quit, KeyCode};
use macroquad::shapes::{draw_circle, draw_rectangle};
use macroquad::window::{clear_background, next_frame, screen_height, screen_width, Conf};

use starfall_engine::{Bounds, Canvas, Clock, Rgba};

use crate::runner::SceneRunner;

pub const TITLE: &str = "Space Screensaver";

pub fn conf(bounds: Bounds) -> Conf {
    Conf {
        window_title: TITLE.to_owned(),
        window_width: bounds.width,
        window_height: bounds.height,
        window_resizable: true,
        ..Default::default()
    }
}

/// Draws onto the macroquad window, stretching the logical canvas to the
/// current window size.
pub struct MacroquadCanvas {
    bounds: Bounds,
    scale: Vec2,
}

impl MacroquadCanvas {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            scale: Vec2::ONE,
        }
    }

    /// Pick up the window size for the coming frame.
    pub fn begin_frame(&mut self) {
        self.scale = Vec2::new(screen_width(), screen_height()) / self.bounds.size();
        clear_background(BLACK);
    }
}

fn color(c: Rgba) -> Color {
    Color::from_rgba(c.r, c.g, c.b, c.a)
}

impl Canvas for MacroquadCanvas {
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgba: Rgba) {
        let p = center * self.scale;
        draw_circle(p.x, p.y, radius * self.scale.min_element(), color(rgba));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, rgba: Rgba) {
        let p = origin * self.scale;
        let s = size * self.scale;
        draw_rectangle(p.x, p.y, s.x, s.y, color(rgba));
    }

    fn draw_point(&mut self, pos: Vec2, rgba: Rgba) {
        let p = pos * self.scale;
        let s = self.scale.max(Vec2::ONE);
        draw_rectangle(p.x, p.y, s.x, s.y, color(rgba));
    }
}

/// Frame loop. Ends on window close or Escape.
pub async fn run<C: Clock>(mut runner: SceneRunner<C>, bounds: Bounds) {
    prevent_quit();
    let mut canvas = MacroquadCanvas::new(bounds);

    loop {
        canvas.begin_frame();
        runner.draw_frame(&mut canvas);

        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }

        next_frame().await;
        if let Some(idle) = runner.end_frame() {
            std::thread::sleep(idle);
        }
    }

    let stats = runner.stats();
    log::info!("Stopped after {} frames ({:.2} fps average)", stats.frames, stats.fps());
}
