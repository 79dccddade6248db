//! Drives the hierarchy scene with the animation timer, toggling it like the "Run Animation"
//! checkbox, and writes a PNG whenever a tick fires.
//!
//! An optional first argument names a `RenderConfig` JSON file; its `timer_period_ms`,
//! `viewport` and `background` apply.

use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use hierdraw::{RenderConfig, RenderOpts, Scene, render_frame, sequence_file_name, write_png};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => RenderConfig::load(&path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => RenderConfig::default(),
    };

    let out_dir = PathBuf::from("target").join("timer_playback");
    let scene = Scene::Hierarchy;
    let opts = RenderOpts::from_config(&scene, &config);
    let mut timer = config.timer()?;
    println!("tick period {:?}", timer.period());

    // 10ms host steps; the checkbox goes on at 0ms, off at 200ms, on again at 300ms.
    for step in 0..50u64 {
        let now = Duration::from_millis(step * 10);
        if now == Duration::ZERO || now == Duration::from_millis(300) {
            timer.set_running(true);
        } else if now == Duration::from_millis(200) {
            timer.set_running(false);
        }

        if timer.advance(Duration::from_millis(10)) > 0 {
            let frame = render_frame(&scene, timer.frame(), &opts)?;
            let path = out_dir.join(sequence_file_name(timer.frame().0));
            write_png(&frame, &path)?;
            println!("t={:>3}ms frame {} -> {}", now.as_millis(), timer.frame().0, path.display());
        }
    }

    Ok(())
}
