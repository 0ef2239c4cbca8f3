//! Builds every control, drives the slider through a drag, toggles the text
//! view's border, and logs what each control would draw.
//!
//! Run with `RUST_LOG=debug` to see state transitions. An optional first
//! argument names a JSON slider config (see `slider.json`).

mod screen;

use std::sync::Arc;

use anyhow::Context;
use roundel_core::animation::SystemClock;
use roundel_core::{PointerEvent, Vec2};
use roundel_ui::{SliderConfig, Widget};
use web_time::Duration;

use crate::screen::ShowcaseScreen;

const FRAME: Duration = Duration::from_millis(16);

fn load_config() -> anyhow::Result<SliderConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SliderConfig::default());
    };
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("reading slider config {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing slider config {path}"))
}

/// Ticks the screen once per frame for about `ms` of wall time.
fn run_frames(screen: &mut ShowcaseScreen, ms: u64) {
    let mut elapsed = Duration::ZERO;
    while elapsed < Duration::from_millis(ms) {
        std::thread::sleep(FRAME);
        elapsed += FRAME;
        screen.tick();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = load_config()?;
    let mut screen = ShowcaseScreen::new(config, Arc::new(SystemClock));

    // Drag the thumb from its resting spot to the far end and let go.
    let track = screen.slider.track_bounds();
    let start = screen.slider.thumb_rect().center();
    screen
        .slider
        .handle_pointer(&PointerEvent::touch_down(start));
    run_frames(&mut screen, 100);
    let steps = 8;
    for i in 1..=steps {
        let x = start.x + (track.max_x() - 20.0 - start.x) * i as f32 / steps as f32;
        screen
            .slider
            .handle_pointer(&PointerEvent::touch_move(Vec2::new(x, start.y)));
        run_frames(&mut screen, 48);
    }
    log::info!(
        "popup shows {:?} mid-drag",
        screen.slider.popup_text().unwrap_or("")
    );
    let end = Vec2::new(track.max_x() - 20.0, start.y);
    screen.slider.handle_pointer(&PointerEvent::touch_up(end));
    run_frames(&mut screen, 300);

    screen.tap_rounded_button();
    run_frames(&mut screen, 300);

    for (name, scene) in screen.paint() {
        log::info!("{name}:\n{scene}");
    }
    println!(
        "slider settled at {} (last notified {:?}), text view border {}",
        screen.slider.value(),
        screen.last_slider_value(),
        screen.text_view.border_color()
    );
    Ok(())
}
