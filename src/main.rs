use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use rand::seq::SliceRandom;
use raylib::prelude::*;

mod carousel;
mod constants;
mod progress;
mod slide;
mod state;
mod texture_loader;
mod timer;
mod ui;

use crate::carousel::Carousel;
use crate::constants::*;
use crate::slide::Slide;
use crate::texture_loader::{collect_image_paths, load_texture_oriented};
use crate::ui::Layout;

/// Auto-advancing image carousel with keyboard-accessible navigation.
#[derive(Parser)]
#[command(name = "carousel", version)]
struct Args {
    /// Directory containing the slide images (png/jpg/jpeg/bmp/gif)
    image_dir: PathBuf,

    /// Seconds each slide is shown while autoplay runs
    #[arg(long, default_value_t = SLIDE_DURATION)]
    duration: f32,

    /// Start with autoplay running
    #[arg(long)]
    autoplay: bool,

    /// Shuffle the deck order once at startup
    #[arg(long)]
    shuffle: bool,

    /// Initial window width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Initial window height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,
}

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stdout)
            .filter_level(LevelFilter::Info)
            .init();
    }
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    if args.duration <= 0.0 {
        bail!("--duration must be positive");
    }

    let mut image_paths = collect_image_paths(&args.image_dir)?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Image Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut slides: Vec<Slide> = Vec::new();
    for path in &image_paths {
        match load_texture_oriented(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture, path)),
            Err(e) => log::warn!("skipping slide: {e:#}"),
        }
    }
    if slides.is_empty() {
        bail!(
            "none of the {} images in {} could be loaded",
            image_paths.len(),
            args.image_dir.display()
        );
    }
    log::info!("loaded {} slides from {}", slides.len(), args.image_dir.display());

    let mut carousel = Carousel::new(slides.len(), args.duration, args.autoplay);
    let mut announced_index = carousel.state().current_index;

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let layout = Layout::compute(rl.get_screen_width(), rl.get_screen_height(), slides.len());

        for event in ui::gather_events(&rl, &layout, carousel.state()) {
            carousel.dispatch(event);
        }
        let progress = carousel.frame(dt);

        // Status announcement on every selection change, the log-side
        // counterpart of the on-screen "Slide K of N" line.
        let current = carousel.state().current_index;
        if current != announced_index {
            log::debug!("slide {} of {}", current + 1, carousel.slide_count());
            announced_index = current;
        }

        let mut d = rl.begin_drawing(&thread);
        ui::draw(&mut d, &slides, carousel.state(), progress, &layout);
    }

    Ok(())
}
