//! cslider Navigation
//!
//! The state machine that drives a looping carousel built on `cslider-track`.
//!
//! # Architecture
//!
//! - **Carousel**: owns the slide set, order ring and current slide; the only
//!   place navigation state changes
//! - **Input**: keys, wheel, clicks and drags mapped to moves
//! - **Timers**: autoplay, resize and wheel debounce, driven by host timestamps
//! - **Frames**: plans handed to the host one animation frame later
//! - **Hooks**: lifecycle callbacks that can queue further navigation
//!
//! # Usage
//!
//! ```
//! use cslider_nav::{Carousel, CarouselConfig, Hooks, StaticTrack};
//!
//! let host = StaticTrack::uniform(5, (200.0, 120.0), (400.0, 120.0));
//! let mut carousel = Carousel::new(host, CarouselConfig::default(), Hooks::new()).unwrap();
//!
//! carousel.next();
//! carousel.next();
//! assert_eq!(carousel.current_original_index(), 2);
//!
//! for command in carousel.next_frame() {
//!     // Hand each command to the renderer.
//!     let _ = command;
//! }
//! ```

mod carousel;
mod config;
mod error;
mod frames;
mod gesture;
mod hooks;
mod host;
mod input;
mod timers;

pub use carousel::{
    Carousel, CarouselStatus, Controls, MoveOutcome, MoveReason, NavigationState,
    MAX_QUEUED_REQUESTS,
};
pub use config::CarouselConfig;
pub use error::{Error, Result};
pub use frames::{FrameCommand, FrameQueue};
pub use gesture::{SwipeGesture, SwipeRelease, SWIPE_THRESHOLD_PX};
pub use hooks::{Hook, HookContext, HookKind, Hooks, NavRequest};
pub use host::{ButtonKind, CarouselHost};
pub use input::{key_step, wheel_step, Key, PointerButton, PointerPos, Step};
pub use timers::{Millis, Timer, RESIZE_DEBOUNCE_MS, WHEEL_DEBOUNCE_MS};

pub use cslider_track::{
    Axis, Placement, SlideSet, SlideTags, StaticTrack, TrackHost, WrapPlan,
};
