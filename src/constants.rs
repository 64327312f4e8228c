pub const DEFAULT_WIDTH: i32 = 1280;          // Initial window width
pub const DEFAULT_HEIGHT: i32 = 720;          // Initial window height
pub const DEFAULT_FPS: u32 = 60;              // Frames per second

pub const SLIDE_DURATION: f32 = 2.0;          // Default time each slide is shown when playing (seconds)

pub const CONTROL_BAR_HEIGHT: i32 = 72;       // Bottom strip: buttons, dots, status text
pub const PROGRESS_BAR_HEIGHT: i32 = 6;       // Autoplay countdown bar above the control strip
pub const FOCUS_RING_THICKNESS: f32 = 3.0;    // Outline drawn on the slide area after a jump
