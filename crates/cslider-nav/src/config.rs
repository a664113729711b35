//! Carousel configuration.
//!
//! Every option has a default, so a host only names what it changes. The same
//! options can be read from a JSON object with the widget's camelCase keys:
//!
//! ```
//! use cslider_nav::CarouselConfig;
//!
//! let config = CarouselConfig::from_json(r#"{ "vertical": true, "autoplaySpeed": 3000 }"#).unwrap();
//! assert!(config.wheel_enabled());
//! assert_eq!(config.transition_speed, 600);
//! ```

use cslider_track::{Axis, TrackLayout};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::timers::Millis;

/// Options for one carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Length of a slide transition, in milliseconds.
    pub transition_speed: Millis,
    /// Navigate with the arrow keys.
    pub arrow_keys: bool,
    /// Start autoplay once the carousel is ready.
    pub autoplay: bool,
    /// Time between autoplay advances, in milliseconds.
    pub autoplay_speed: Millis,
    /// Ask the host for previous/next buttons.
    pub buttons: bool,
    /// Keep the frame at a fixed height. Presentation only.
    pub fixed_height: bool,
    /// Clicking a slide moves to it.
    pub move_on_click: bool,
    /// Hovering the frame holds autoplay.
    pub pause_on_hover: bool,
    /// Stretch every slide to the frame.
    pub single_mode: bool,
    /// Display index of the first current slide.
    pub start_position: usize,
    /// Drag the track with mouse or touch.
    pub swipe_navigation: bool,
    /// Scroll vertically instead of horizontally.
    pub vertical: bool,
    /// Navigate with the wheel. Unset means "only when vertical".
    pub wheel_navigation: Option<bool>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_speed: 600,
            arrow_keys: true,
            autoplay: false,
            autoplay_speed: 6000,
            buttons: true,
            fixed_height: true,
            move_on_click: true,
            pause_on_hover: true,
            single_mode: false,
            start_position: 0,
            swipe_navigation: true,
            vertical: false,
            wheel_navigation: None,
        }
    }
}

impl CarouselConfig {
    /// Parse options from a JSON object; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Scroll axis.
    pub fn axis(&self) -> Axis {
        Axis::from_vertical(self.vertical)
    }

    /// Whether wheel navigation is on, after applying the vertical default.
    pub fn wheel_enabled(&self) -> bool {
        self.wheel_navigation.unwrap_or(self.vertical)
    }

    /// Delay before an autoplay advance; never shorter than a transition.
    pub fn autoplay_interval(&self) -> Millis {
        self.autoplay_speed.max(self.transition_speed)
    }

    /// Track layout derived from these options.
    pub fn layout(&self) -> TrackLayout {
        TrackLayout {
            axis: self.axis(),
            single_mode: self.single_mode,
        }
    }

    /// Check the options against the host's slide count.
    pub fn validate(&self, original_count: usize) -> Result<()> {
        if self.start_position >= original_count {
            return Err(Error::StartPosition {
                position: self.start_position,
                count: original_count,
            });
        }
        Ok(())
    }
}
