//! Lifecycle hooks.
//!
//! Hooks run synchronously inside a carousel operation, while the carousel is
//! exclusively borrowed. They see a [`HookContext`] snapshot and cannot call
//! back into the carousel; instead they queue [`NavRequest`]s, which run in
//! order once the operation that fired the hook has finished.

use std::fmt;

/// Navigation a hook asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Move to a display index.
    MoveTo(usize),
    /// Move to the following slide.
    Next,
    /// Move to the preceding slide.
    Prev,
    /// Turn autoplay on.
    AutoplayStart,
    /// Turn autoplay off.
    AutoplayStop,
}

/// What a hook can see and do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookContext {
    current_index: usize,
    current_original_index: usize,
    slide_count: usize,
    requests: Vec<NavRequest>,
}

impl HookContext {
    pub(crate) fn new(current_index: usize, current_original_index: usize, slide_count: usize) -> Self {
        Self {
            current_index,
            current_original_index,
            slide_count,
            requests: Vec::new(),
        }
    }

    /// Display index of the current slide.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Which of the host's original slides is current.
    pub fn current_original_index(&self) -> usize {
        self.current_original_index
    }

    /// Number of slides in the track, duplicates included.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Queue a navigation request to run after the current operation.
    pub fn request(&mut self, request: NavRequest) {
        self.requests.push(request);
    }

    pub(crate) fn into_requests(self) -> Vec<NavRequest> {
        self.requests
    }
}

/// A lifecycle callback.
pub type Hook = Box<dyn FnMut(&mut HookContext)>;

/// The points in a move where hooks fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// Before a move, except the initial one.
    BeforeMove,
    /// After a move, except the initial one.
    AfterMove,
    /// When the new current slide finishes its transition.
    AfterTransition,
    /// After a resize settled.
    AfterResize,
    /// After the initial move.
    OnReady,
}

/// Optional callbacks for every [`HookKind`].
#[derive(Default)]
pub struct Hooks {
    before_move: Option<Hook>,
    after_move: Option<Hook>,
    after_transition: Option<Hook>,
    after_resize: Option<Hook>,
    on_ready: Option<Hook>,
}

impl Hooks {
    /// No hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callback for `kind`, replacing any previous one.
    pub fn on(mut self, kind: HookKind, hook: impl FnMut(&mut HookContext) + 'static) -> Self {
        *self.slot(kind) = Some(Box::new(hook));
        self
    }

    /// Whether a callback is set for `kind`.
    pub fn is_set(&self, kind: HookKind) -> bool {
        match kind {
            HookKind::BeforeMove => self.before_move.is_some(),
            HookKind::AfterMove => self.after_move.is_some(),
            HookKind::AfterTransition => self.after_transition.is_some(),
            HookKind::AfterResize => self.after_resize.is_some(),
            HookKind::OnReady => self.on_ready.is_some(),
        }
    }

    pub(crate) fn fire(&mut self, kind: HookKind, ctx: &mut HookContext) {
        if let Some(hook) = self.slot(kind) {
            hook(ctx);
        }
    }

    fn slot(&mut self, kind: HookKind) -> &mut Option<Hook> {
        match kind {
            HookKind::BeforeMove => &mut self.before_move,
            HookKind::AfterMove => &mut self.after_move,
            HookKind::AfterTransition => &mut self.after_transition,
            HookKind::AfterResize => &mut self.after_resize,
            HookKind::OnReady => &mut self.on_ready,
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("before_move", &self.before_move.is_some())
            .field("after_move", &self.after_move.is_some())
            .field("after_transition", &self.after_transition.is_some())
            .field("after_resize", &self.after_resize.is_some())
            .field("on_ready", &self.on_ready.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn unset_hooks_are_noops() {
        let mut hooks = Hooks::new();
        let mut ctx = HookContext::new(0, 0, 4);
        hooks.fire(HookKind::AfterMove, &mut ctx);
        assert!(ctx.into_requests().is_empty());
    }

    #[test]
    fn fire_runs_matching_hook() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let mut hooks = Hooks::new().on(HookKind::BeforeMove, move |_| seen.set(seen.get() + 1));

        let mut ctx = HookContext::new(0, 0, 4);
        hooks.fire(HookKind::BeforeMove, &mut ctx);
        hooks.fire(HookKind::AfterMove, &mut ctx);
        assert_eq!(calls.get(), 1);
        assert!(hooks.is_set(HookKind::BeforeMove));
        assert!(!hooks.is_set(HookKind::OnReady));
    }

    #[test]
    fn hooks_queue_requests() {
        let mut hooks = Hooks::new().on(HookKind::AfterMove, |ctx| {
            if ctx.current_index() + 1 < ctx.slide_count() {
                ctx.request(NavRequest::Next);
            }
        });

        let mut ctx = HookContext::new(1, 1, 4);
        hooks.fire(HookKind::AfterMove, &mut ctx);
        assert_eq!(ctx.into_requests(), vec![NavRequest::Next]);
    }

    #[test]
    fn debug_lists_set_hooks() {
        let hooks = Hooks::new().on(HookKind::OnReady, |_| {});
        let rendered = format!("{:?}", hooks);
        assert!(rendered.contains("on_ready: true"));
        assert!(rendered.contains("after_move: false"));
    }
}
