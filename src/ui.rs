use raylib::prelude::*;

use crate::constants::*;
use crate::state::{CarouselEvent, CarouselState};

const BACKGROUND: Color = Color::new(12, 12, 14, 255);
const CONTROL_BG: Color = Color::new(24, 24, 28, 255);
const ACCENT: Color = Color::new(255, 205, 60, 255);
const MUTED: Color = Color::new(120, 120, 128, 255);
const TEXT: Color = Color::new(230, 230, 235, 255);
const CAPTION_BG: Color = Color::new(0, 0, 0, 160);

const BUTTON_SIZE: f32 = 40.0;
const BUTTON_GAP: f32 = 10.0;
const DOT_RADIUS: f32 = 7.0;
const DOT_GAP: f32 = 24.0;

const DIGIT_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

/// Screen-space placement of every interactive element, recomputed each
/// frame so the window stays resizable.
pub struct Layout {
    pub slide_area: Rectangle,
    pub progress_track: Rectangle,
    pub control_bar: Rectangle,
    play_button: Rectangle,
    prev_button: Rectangle,
    next_button: Rectangle,
    dots: Vec<Rectangle>,
}

impl Layout {
    pub fn compute(screen_width: i32, screen_height: i32, slide_count: usize) -> Self {
        let width = screen_width as f32;
        let height = screen_height as f32;
        let bar_height = CONTROL_BAR_HEIGHT as f32;
        let progress_height = PROGRESS_BAR_HEIGHT as f32;

        let slide_area = Rectangle::new(0.0, 0.0, width, height - bar_height - progress_height);
        let progress_track =
            Rectangle::new(0.0, slide_area.height, width, progress_height);
        let control_bar = Rectangle::new(
            0.0,
            slide_area.height + progress_height,
            width,
            bar_height,
        );

        let button_y = control_bar.y + (bar_height - BUTTON_SIZE) * 0.5;
        let play_button = Rectangle::new(16.0, button_y, BUTTON_SIZE, BUTTON_SIZE);
        let prev_button = Rectangle::new(
            play_button.x + BUTTON_SIZE + BUTTON_GAP,
            button_y,
            BUTTON_SIZE,
            BUTTON_SIZE,
        );
        let next_button = Rectangle::new(
            prev_button.x + BUTTON_SIZE + BUTTON_GAP,
            button_y,
            BUTTON_SIZE,
            BUTTON_SIZE,
        );

        // Nav dots centered in the control bar, one per slide.
        let dots_width = slide_count.saturating_sub(1) as f32 * DOT_GAP;
        let first_dot_x = (width - dots_width) * 0.5;
        let dot_y = control_bar.y + bar_height * 0.5;
        let dots = (0..slide_count)
            .map(|i| {
                let cx = first_dot_x + i as f32 * DOT_GAP;
                Rectangle::new(
                    cx - DOT_RADIUS * 1.5,
                    dot_y - DOT_RADIUS * 1.5,
                    DOT_RADIUS * 3.0,
                    DOT_RADIUS * 3.0,
                )
            })
            .collect();

        Self {
            slide_area,
            progress_track,
            control_bar,
            play_button,
            prev_button,
            next_button,
            dots,
        }
    }

    fn dot_center(&self, index: usize) -> Vector2 {
        let rect = &self.dots[index];
        Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
    }
}

/// Translate this frame's keyboard and mouse input into carousel events, in
/// the order they should be applied.
pub fn gather_events(rl: &RaylibHandle, layout: &Layout, state: &CarouselState) -> Vec<CarouselEvent> {
    let mut events = Vec::new();
    let slide_count = layout.dots.len();

    if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        events.push(if state.is_playing {
            CarouselEvent::Pause
        } else {
            CarouselEvent::Play
        });
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        events.push(CarouselEvent::Next);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        events.push(CarouselEvent::Prev);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_HOME) {
        events.push(CarouselEvent::Goto(0));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_END) {
        events.push(CarouselEvent::Goto(slide_count - 1));
    }
    for (i, key) in DIGIT_KEYS.iter().enumerate() {
        if i < slide_count && rl.is_key_pressed(*key) {
            events.push(CarouselEvent::Goto(i));
        }
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let mouse = rl.get_mouse_position();
        if layout.play_button.check_collision_point_rec(mouse) {
            events.push(if state.is_playing {
                CarouselEvent::Pause
            } else {
                CarouselEvent::Play
            });
        } else if layout.prev_button.check_collision_point_rec(mouse) {
            events.push(CarouselEvent::Prev);
        } else if layout.next_button.check_collision_point_rec(mouse) {
            events.push(CarouselEvent::Next);
        } else {
            for (i, dot) in layout.dots.iter().enumerate() {
                if dot.check_collision_point_rec(mouse) {
                    events.push(CarouselEvent::Goto(i));
                    break;
                }
            }
        }
    }

    events
}

pub fn draw(
    d: &mut RaylibDrawHandle,
    slides: &[crate::slide::Slide],
    state: &CarouselState,
    progress: f32,
    layout: &Layout,
) {
    d.clear_background(BACKGROUND);

    let slide = &slides[state.current_index];
    slide.draw(d, layout.slide_area);
    draw_caption(d, &slide.title, layout);

    if state.take_focus {
        // Keyboard focus moved to the slide after an explicit jump.
        d.draw_rectangle_lines_ex(layout.slide_area, FOCUS_RING_THICKNESS, ACCENT);
    }

    draw_progress(d, progress, layout);
    draw_controls(d, state, layout);
    draw_dots(d, state, layout);
    draw_status(d, state, slides.len(), layout);
}

fn draw_caption(d: &mut RaylibDrawHandle, title: &str, layout: &Layout) {
    let font_size = 24;
    let text_width = d.measure_text(title, font_size);
    let pad = 10;
    let x = layout.slide_area.x as i32 + 20;
    let y = (layout.slide_area.y + layout.slide_area.height) as i32 - font_size - pad * 2 - 16;
    d.draw_rectangle(x - pad, y - pad, text_width + pad * 2, font_size + pad * 2, CAPTION_BG);
    d.draw_text(title, x, y, font_size, TEXT);
}

fn draw_progress(d: &mut RaylibDrawHandle, progress: f32, layout: &Layout) {
    d.draw_rectangle_rec(layout.progress_track, CONTROL_BG);
    let mut filled = layout.progress_track;
    filled.width *= progress.clamp(0.0, 1.0);
    d.draw_rectangle_rec(filled, ACCENT);
}

fn draw_controls(d: &mut RaylibDrawHandle, state: &CarouselState, layout: &Layout) {
    d.draw_rectangle_rec(layout.control_bar, CONTROL_BG);

    if state.is_playing {
        draw_pause_glyph(d, layout.play_button);
    } else {
        draw_play_glyph(d, layout.play_button);
    }
    draw_step_glyph(d, layout.prev_button, true);
    draw_step_glyph(d, layout.next_button, false);
}

fn draw_play_glyph(d: &mut RaylibDrawHandle, rect: Rectangle) {
    let inset = 10.0;
    d.draw_triangle(
        Vector2::new(rect.x + inset, rect.y + inset),
        Vector2::new(rect.x + inset, rect.y + rect.height - inset),
        Vector2::new(rect.x + rect.width - inset, rect.y + rect.height * 0.5),
        TEXT,
    );
}

fn draw_pause_glyph(d: &mut RaylibDrawHandle, rect: Rectangle) {
    let inset = 10.0;
    let bar_width = (rect.width - inset * 2.0) / 3.0;
    let bar_height = rect.height - inset * 2.0;
    d.draw_rectangle_rec(
        Rectangle::new(rect.x + inset, rect.y + inset, bar_width, bar_height),
        TEXT,
    );
    d.draw_rectangle_rec(
        Rectangle::new(
            rect.x + rect.width - inset - bar_width,
            rect.y + inset,
            bar_width,
            bar_height,
        ),
        TEXT,
    );
}

// Two side-by-side triangles pointing left (previous) or right (next).
fn draw_step_glyph(d: &mut RaylibDrawHandle, rect: Rectangle, backwards: bool) {
    let inset = 11.0;
    let mid_y = rect.y + rect.height * 0.5;
    let top = rect.y + inset;
    let bottom = rect.y + rect.height - inset;
    let half = rect.width * 0.5;

    let spans = [
        (rect.x + inset, rect.x + half),
        (rect.x + half, rect.x + rect.width - inset),
    ];
    for (from_x, to_x) in spans {
        if backwards {
            d.draw_triangle(
                Vector2::new(to_x, top),
                Vector2::new(from_x, mid_y),
                Vector2::new(to_x, bottom),
                TEXT,
            );
        } else {
            d.draw_triangle(
                Vector2::new(from_x, top),
                Vector2::new(from_x, bottom),
                Vector2::new(to_x, mid_y),
                TEXT,
            );
        }
    }
}

fn draw_dots(d: &mut RaylibDrawHandle, state: &CarouselState, layout: &Layout) {
    for i in 0..layout.dots.len() {
        let center = layout.dot_center(i);
        if i == state.current_index {
            d.draw_circle_v(center, DOT_RADIUS, ACCENT);
        } else {
            d.draw_circle_lines(center.x as i32, center.y as i32, DOT_RADIUS, MUTED);
        }
    }
}

fn draw_status(d: &mut RaylibDrawHandle, state: &CarouselState, slide_count: usize, layout: &Layout) {
    let status = format!("Slide {} of {}", state.current_index + 1, slide_count);
    let font_size = 18;
    let text_width = d.measure_text(&status, font_size);
    let x = (layout.control_bar.x + layout.control_bar.width) as i32 - text_width - 16;
    let y = (layout.control_bar.y + (layout.control_bar.height - font_size as f32) * 0.5) as i32;
    d.draw_text(&status, x, y, font_size, MUTED);
}
