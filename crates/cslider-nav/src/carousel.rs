//! The navigation controller.
//!
//! [`Carousel`] owns the slide set, the order ring and the navigation state,
//! and is the only thing that mutates them. Every move follows the same
//! sequence:
//!
//! 1. reject targets that name no slide,
//! 2. mark autoplay for re-arming on the next [`Carousel::tick`],
//! 3. fire `before_move`,
//! 4. plan every slide's placement against the ring as it was before the move,
//! 5. switch the current slide and rotate the ring,
//! 6. queue the plan for the next frame,
//! 7. fire `after_move` / `on_ready` / `after_resize`.
//!
//! Hooks can only queue further navigation, which runs after the operation
//! that fired them returns. One operation drains at most
//! [`MAX_QUEUED_REQUESTS`] queued requests.

use std::collections::VecDeque;

use cslider_track::{
    next_index, original_index, prev_index, OrderRing, SlideSet, WrapPlan, WrapPlanner,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::CarouselConfig;
use crate::error::Result;
use crate::frames::{FrameCommand, FrameQueue};
use crate::gesture::{SwipeGesture, SwipeRelease};
use crate::hooks::{HookContext, HookKind, Hooks, NavRequest};
use crate::host::{ButtonKind, CarouselHost};
use crate::input::{key_step, wheel_step, Key, PointerButton, PointerPos, Step};
use crate::timers::{Millis, Timer, RESIZE_DEBOUNCE_MS, WHEEL_DEBOUNCE_MS};

/// Queued hook requests one operation will run before dropping the rest.
pub const MAX_QUEUED_REQUESTS: usize = 64;

/// Why a move happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoveReason {
    /// Buttons, keys, wheel, clicks, autoplay and API calls.
    Normal,
    /// The first move after construction.
    Init,
    /// Re-settling after the track was re-measured.
    Resize,
    /// A drag released over another slide. Fires `before_move` and
    /// `after_move` like a [`MoveReason::Normal`] move, so hooks see every
    /// change of the current slide.
    Swipe,
}

/// Result of a navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    /// The current slide was (re)set.
    Moved {
        from: usize,
        to: usize,
        reason: MoveReason,
    },
    /// Nothing moved: no such slide, input disabled, or debounced.
    Ignored,
}

impl MoveOutcome {
    /// Whether a move happened.
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Which navigation buttons the host managed to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Controls {
    pub prev: bool,
    pub next: bool,
}

/// Where the carousel is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    /// Display index of the current slide.
    pub current_index: usize,
    /// `current_index` mapped back to the host's original slides.
    pub current_original_index: usize,
    pub autoplay_enabled: bool,
    /// Held by a hovering pointer.
    pub autoplay_paused: bool,
    pub transition_speed_ms: Millis,
}

/// Carousel status for the host or for logging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselStatus {
    pub current_index: usize,
    pub current_original_index: usize,
    pub slide_count: usize,
    pub original_count: usize,
    pub autoplay_enabled: bool,
    pub autoplay_paused: bool,
    pub transition_speed_ms: Millis,
    /// Whether the host should keep the frame at a fixed height.
    pub fixed_height: bool,
    pub duplication_stalled: bool,
    pub controls: Controls,
}

/// A looping carousel over a host's slides.
#[derive(Debug)]
pub struct Carousel<H: CarouselHost> {
    host: H,
    config: CarouselConfig,
    hooks: Hooks,
    slides: SlideSet,
    ring: OrderRing,
    state: NavigationState,
    controls: Controls,
    autoplay_timer: Timer,
    autoplay_rearm: bool,
    resize_timer: Timer,
    wheel_timer: Timer,
    deferred_advance: bool,
    key_latched: bool,
    gesture: Option<SwipeGesture>,
    frames: FrameQueue,
    pending_transition: Option<usize>,
    last_plan: Option<WrapPlan>,
    queued: VecDeque<NavRequest>,
}

impl<H: CarouselHost> Carousel<H> {
    /// Measure the host, build the track and settle on the start slide.
    ///
    /// Fails if the host has no mount target, fewer than two slides, an
    /// unusable frame size, or the start position names no original slide.
    pub fn new(mut host: H, config: CarouselConfig, hooks: Hooks) -> Result<Self> {
        let slides = SlideSet::build(&mut host, config.layout())?;
        if let Err(err) = config.validate(slides.original_count()) {
            host.restore();
            return Err(err);
        }

        let controls = if config.buttons {
            mount_buttons(&mut host)
        } else {
            Controls::default()
        };

        let start = config.start_position;
        let mut ring = OrderRing::identity(slides.len());
        ring.recompute(start);

        let state = NavigationState {
            current_index: start,
            current_original_index: original_index(start, slides.original_count()),
            autoplay_enabled: config.autoplay,
            autoplay_paused: false,
            transition_speed_ms: config.transition_speed,
        };

        let mut carousel = Self {
            host,
            config,
            hooks,
            slides,
            ring,
            state,
            controls,
            autoplay_timer: Timer::default(),
            autoplay_rearm: false,
            resize_timer: Timer::default(),
            wheel_timer: Timer::default(),
            deferred_advance: false,
            key_latched: false,
            gesture: None,
            frames: FrameQueue::default(),
            pending_transition: None,
            last_plan: None,
            queued: VecDeque::new(),
        };

        carousel.frames.schedule(1, FrameCommand::SuppressTransitions);
        carousel.move_with_reason(start, MoveReason::Init);
        carousel.frames.schedule(2, FrameCommand::EnableTransitions);
        carousel.drain_queue();

        Ok(carousel)
    }

    // --- Navigation ---

    /// Move to display index `index`. Unknown indices are ignored.
    pub fn move_to(&mut self, index: usize) -> MoveOutcome {
        self.run(NavRequest::MoveTo(index))
    }

    /// Move to the following slide, wrapping at the end.
    pub fn next(&mut self) -> MoveOutcome {
        self.run(NavRequest::Next)
    }

    /// Move to the preceding slide, wrapping at the start.
    pub fn prev(&mut self) -> MoveOutcome {
        self.run(NavRequest::Prev)
    }

    /// Turn autoplay on and arm its timer from the current slide.
    pub fn autoplay_start(&mut self) -> MoveOutcome {
        self.run(NavRequest::AutoplayStart)
    }

    /// Turn autoplay off and drop any pending advance.
    pub fn autoplay_stop(&mut self) {
        self.run(NavRequest::AutoplayStop);
    }

    // --- Time and frames ---

    /// Run whatever timers are due at `now`.
    ///
    /// Autoplay is armed from the timestamp of the first tick after a move,
    /// so the carousel never needs to know the host's epoch.
    ///
    /// Only a failed re-measure after a resize returns an error; the carousel
    /// keeps its previous track in that case.
    pub fn tick(&mut self, now: Millis) -> Result<()> {
        self.arm_autoplay(now);

        let resized = if self.resize_timer.fire(now) {
            self.settle_resize()
        } else {
            Ok(())
        };

        if self.autoplay_timer.fire(now) {
            if self.state.autoplay_paused {
                debug!("autoplay advance held until the pointer leaves");
                self.deferred_advance = true;
            } else {
                self.apply_request(NavRequest::Next);
            }
        }

        self.drain_queue();
        self.arm_autoplay(now);
        resized
    }

    /// Commands the host must carry out on this animation frame.
    pub fn next_frame(&mut self) -> Vec<FrameCommand> {
        self.frames.next_frame()
    }

    /// Whether any upcoming frame still has commands.
    pub fn has_pending_frames(&self) -> bool {
        !self.frames.is_idle()
    }

    /// Report that `display_index` finished its transition.
    ///
    /// Fires `after_transition` once if it is the slide the last move
    /// activated.
    pub fn transition_ended(&mut self, display_index: usize) -> bool {
        if self.pending_transition != Some(display_index) {
            return false;
        }
        self.pending_transition = None;
        self.fire(HookKind::AfterTransition);
        self.drain_queue();
        true
    }

    /// The frame changed size; re-measure once resizing has been quiet for a while.
    pub fn request_resize(&mut self, now: Millis) {
        self.resize_timer.arm(now, RESIZE_DEBOUNCE_MS);
    }

    // --- Input ---

    /// An arrow key went down. Held keys do not repeat.
    pub fn key_down(&mut self, key: Key) -> MoveOutcome {
        if !self.config.arrow_keys || self.key_latched {
            return MoveOutcome::Ignored;
        }
        let Some(step) = key_step(self.config.axis(), key) else {
            return MoveOutcome::Ignored;
        };
        self.key_latched = true;
        self.run(step_request(step))
    }

    /// Any key was released.
    pub fn key_up(&mut self) {
        self.key_latched = false;
    }

    /// A wheel event over the frame.
    pub fn wheel(&mut self, delta_x: f64, delta_y: f64, now: Millis) -> MoveOutcome {
        if !self.config.wheel_enabled() || self.wheel_timer.is_pending(now) {
            return MoveOutcome::Ignored;
        }
        self.wheel_timer.arm(now, WHEEL_DEBOUNCE_MS);
        self.run(step_request(wheel_step(self.config.axis(), delta_x, delta_y)))
    }

    /// The pointer entered the frame.
    pub fn pointer_enter(&mut self) {
        if self.config.pause_on_hover {
            self.state.autoplay_paused = true;
        }
    }

    /// The pointer left the frame; runs an autoplay advance held while hovering.
    pub fn pointer_leave(&mut self) -> MoveOutcome {
        if self.config.pause_on_hover {
            self.state.autoplay_paused = false;
        }
        if !self.deferred_advance {
            return MoveOutcome::Ignored;
        }
        self.deferred_advance = false;
        self.run(NavRequest::Next)
    }

    /// A slide was clicked.
    pub fn click_slide(&mut self, display_index: usize, button: PointerButton) -> MoveOutcome {
        let dragging = self.gesture.is_some_and(|g| g.has_moved());
        if !self.config.move_on_click || button != PointerButton::Primary || dragging {
            return MoveOutcome::Ignored;
        }
        self.run(NavRequest::MoveTo(display_index))
    }

    /// A mouse button or touch went down on the track.
    ///
    /// Cancels the pending autoplay advance; the next move re-arms it.
    pub fn drag_start(&mut self, pos: PointerPos, button: PointerButton) -> bool {
        if !self.config.swipe_navigation || button != PointerButton::Primary {
            return false;
        }
        self.autoplay_timer.cancel();
        self.autoplay_rearm = false;
        self.gesture = Some(SwipeGesture::begin(pos.along(self.config.axis())));
        self.frames.schedule(1, FrameCommand::SuppressTransitions);
        true
    }

    /// The pointer moved during a drag.
    ///
    /// Returns the distance to add to every slide's offset, or `None` when no
    /// drag is in progress.
    pub fn drag_move(&mut self, pos: PointerPos) -> Option<f64> {
        let axis = self.config.axis();
        self.gesture
            .as_mut()
            .map(|gesture| gesture.update(pos.along(axis)))
    }

    /// The drag ended; settle on the slide nearest the frame center.
    pub fn drag_end(&mut self, pos: PointerPos) -> MoveOutcome {
        let Some(mut gesture) = self.gesture.take() else {
            return MoveOutcome::Ignored;
        };
        self.frames.schedule(1, FrameCommand::EnableTransitions);

        let current = self.state.current_index;
        let (target, reason) = match gesture.release(pos.along(self.config.axis())) {
            SwipeRelease::SnapBack => (current, MoveReason::Normal),
            SwipeRelease::Navigate { toward_start } => {
                let centered = self
                    .last_plan
                    .as_ref()
                    .and_then(|plan| plan.centermost(&self.slides, gesture.delta()))
                    .unwrap_or(current);
                if centered == current {
                    let step = if toward_start { Step::Next } else { Step::Prev };
                    return self.run(step_request(step));
                }
                (centered, MoveReason::Swipe)
            }
        };

        let outcome = self.move_with_reason(target, reason);
        self.drain_queue();
        outcome
    }

    /// The drag was interrupted; resolved like a release at `pos`.
    pub fn drag_cancel(&mut self, pos: PointerPos) -> MoveOutcome {
        self.drag_end(pos)
    }

    // --- Teardown ---

    /// Put the host back the way it was and hand it back.
    pub fn destroy(mut self) -> H {
        self.frames.clear();
        let mut host = self.host;
        host.restore();
        info!(slides = self.slides.len(), "carousel destroyed");
        host
    }

    // --- Queries ---

    /// Display index of the current slide.
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Which of the host's original slides is current.
    pub fn current_original_index(&self) -> usize {
        self.state.current_original_index
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    pub fn ring(&self) -> &OrderRing {
        &self.ring
    }

    /// Plan of the most recent move.
    pub fn last_plan(&self) -> Option<&WrapPlan> {
        self.last_plan.as_ref()
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, for changes the carousel should react to (call
    /// [`request_resize`](Self::request_resize) after resizing the frame).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// When the next autoplay advance is due; `None` until the first tick
    /// after a move arms it.
    pub fn autoplay_deadline(&self) -> Option<Millis> {
        self.autoplay_timer.deadline()
    }

    pub fn status(&self) -> CarouselStatus {
        CarouselStatus::from(self)
    }

    // --- Internals ---

    fn arm_autoplay(&mut self, now: Millis) {
        if self.autoplay_rearm {
            self.autoplay_rearm = false;
            self.autoplay_timer
                .arm(now, self.config.autoplay_interval());
        }
    }

    fn run(&mut self, request: NavRequest) -> MoveOutcome {
        let outcome = self.apply_request(request);
        self.drain_queue();
        outcome
    }

    fn drain_queue(&mut self) {
        let mut budget = MAX_QUEUED_REQUESTS;
        while let Some(request) = self.queued.pop_front() {
            if budget == 0 {
                warn!(
                    dropped = self.queued.len() + 1,
                    "too many navigation requests queued from hooks, dropping the rest"
                );
                self.queued.clear();
                break;
            }
            budget -= 1;
            self.apply_request(request);
        }
    }

    fn apply_request(&mut self, request: NavRequest) -> MoveOutcome {
        let len = self.slides.len();
        let current = self.state.current_index;
        match request {
            NavRequest::MoveTo(index) => self.move_with_reason(index, MoveReason::Normal),
            NavRequest::Next => self.move_with_reason(next_index(current, len), MoveReason::Normal),
            NavRequest::Prev => self.move_with_reason(prev_index(current, len), MoveReason::Normal),
            NavRequest::AutoplayStart => {
                self.state.autoplay_enabled = true;
                self.move_with_reason(current, MoveReason::Normal)
            }
            NavRequest::AutoplayStop => {
                self.state.autoplay_enabled = false;
                self.autoplay_timer.cancel();
                self.autoplay_rearm = false;
                self.deferred_advance = false;
                MoveOutcome::Ignored
            }
        }
    }

    fn move_with_reason(&mut self, to: usize, reason: MoveReason) -> MoveOutcome {
        if !self.slides.contains(to) {
            debug!(to, slides = self.slides.len(), "move ignored, no such slide");
            return MoveOutcome::Ignored;
        }

        if self.state.autoplay_enabled {
            self.autoplay_timer.cancel();
            self.autoplay_rearm = true;
        }

        if reason != MoveReason::Init {
            self.fire(HookKind::BeforeMove);
        }

        let from = self.state.current_index;
        let Some(plan) = WrapPlanner::new(&self.slides, &self.ring).plan(from, to) else {
            return MoveOutcome::Ignored;
        };

        self.state.current_index = to;
        self.state.current_original_index = original_index(to, self.slides.original_count());
        self.ring.recompute(to);

        let jumps: Vec<usize> = plan.instant_jumps().collect();
        debug!(from, to, ?reason, swap = plan.swap_amount, jumps = jumps.len(), "move");

        self.frames.schedule(1, FrameCommand::Apply(plan.clone()));
        if !jumps.is_empty() {
            self.frames
                .schedule(2, FrameCommand::RestoreTransitions { slides: jumps });
        }
        self.last_plan = Some(plan);
        self.pending_transition = Some(to);

        match reason {
            MoveReason::Init => {
                info!(
                    slides = self.slides.len(),
                    original = self.slides.original_count(),
                    start = to,
                    "carousel ready"
                );
                self.fire(HookKind::OnReady);
            }
            MoveReason::Resize => {
                self.fire(HookKind::AfterMove);
                self.fire(HookKind::AfterResize);
            }
            MoveReason::Normal | MoveReason::Swipe => self.fire(HookKind::AfterMove),
        }

        MoveOutcome::Moved { from, to, reason }
    }

    fn settle_resize(&mut self) -> Result<()> {
        let slides = SlideSet::build(&mut self.host, self.config.layout())?;
        let len = slides.len();
        self.slides = slides;

        if self.state.current_index >= len {
            self.state.current_index = self.state.current_original_index;
        }
        self.ring.reset(len);
        self.ring.recompute(self.state.current_index);

        self.frames.schedule(1, FrameCommand::SuppressTransitions);
        self.move_with_reason(self.state.current_index, MoveReason::Resize);
        self.frames.schedule(2, FrameCommand::EnableTransitions);
        Ok(())
    }

    fn fire(&mut self, kind: HookKind) {
        let mut ctx = HookContext::new(
            self.state.current_index,
            self.state.current_original_index,
            self.slides.len(),
        );
        self.hooks.fire(kind, &mut ctx);
        self.queued.extend(ctx.into_requests());
    }
}

impl<H: CarouselHost> From<&Carousel<H>> for CarouselStatus {
    fn from(carousel: &Carousel<H>) -> Self {
        Self {
            current_index: carousel.state.current_index,
            current_original_index: carousel.state.current_original_index,
            slide_count: carousel.slides.len(),
            original_count: carousel.slides.original_count(),
            autoplay_enabled: carousel.state.autoplay_enabled,
            autoplay_paused: carousel.state.autoplay_paused,
            transition_speed_ms: carousel.state.transition_speed_ms,
            fixed_height: carousel.config.fixed_height,
            duplication_stalled: carousel.slides.duplication().stalled,
            controls: carousel.controls,
        }
    }
}

fn mount_buttons<H: CarouselHost>(host: &mut H) -> Controls {
    let mut mount = |kind: ButtonKind| {
        let mounted = host.mount_button(kind);
        if !mounted {
            warn!(?kind, "button wrapper element not found, button will not be created");
        }
        mounted
    };
    Controls {
        prev: mount(ButtonKind::Prev),
        next: mount(ButtonKind::Next),
    }
}

fn step_request(step: Step) -> NavRequest {
    match step {
        Step::Next => NavRequest::Next,
        Step::Prev => NavRequest::Prev,
    }
}
