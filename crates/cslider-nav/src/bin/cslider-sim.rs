//! cslider Simulator
//!
//! Build a carousel over an in-memory track, run a scripted sequence of moves
//! and print every plan the host would receive as JSON.
//!
//! ```text
//! cslider-sim [slides] [slide-size] [frame-size] [vertical] [script]
//! cslider-sim 6 100 150 false n,n,p,4,n
//! ```
//!
//! Script steps are `n` (next), `p` (prev) or a display index.

use cslider_nav::{Carousel, CarouselConfig, FrameCommand, Hooks, StaticTrack};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let slide_count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(6);
    let slide_size: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100.0);
    let frame_size: f64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(150.0);
    let vertical: bool = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(false);
    let script = args.get(5).map(String::as_str).unwrap_or("n,n,n,p,0");

    let host = StaticTrack::uniform(
        slide_count,
        (slide_size, slide_size),
        (frame_size, frame_size),
    );
    let config = CarouselConfig {
        vertical,
        ..Default::default()
    };
    let mut carousel = Carousel::new(host, config, Hooks::new())?;

    eprintln!(
        "{} originals, {} slides in the track",
        carousel.slides().original_count(),
        carousel.slides().len()
    );

    print_frames(&mut carousel)?;

    for step in script.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let outcome = match step {
            "n" => carousel.next(),
            "p" => carousel.prev(),
            index => match index.parse() {
                Ok(index) => carousel.move_to(index),
                Err(_) => {
                    eprintln!("skipping unknown step {:?}", step);
                    continue;
                }
            },
        };
        println!("{}", serde_json::to_string(&outcome)?);
        print_frames(&mut carousel)?;
    }

    println!("{}", serde_json::to_string_pretty(&carousel.status())?);

    carousel.destroy();
    Ok(())
}

/// Flush the frame queue, one JSON line per command.
fn print_frames(carousel: &mut Carousel<StaticTrack>) -> Result<(), serde_json::Error> {
    while carousel.has_pending_frames() {
        let frame: Vec<FrameCommand> = carousel.next_frame();
        for command in &frame {
            println!("{}", serde_json::to_string(command)?);
        }
    }
    Ok(())
}
