//! Hovered paragraph tracking
//!
//! A `HoverCoordinateTracker` owns one global pointer-move listener for its
//! current candidate list. Replacing the list (by identity) swaps the
//! listener; disposing or dropping the tracker removes it.

use std::rc::Rc;

use super::config::{LeavePolicy, MatchPolicy, TrackerConfig};
use super::page::{element_bounds, is_point_inside, Page, PointerHandler, PointerSource};
use super::state::{HoverState, SubscriptionId};
use crate::error::HoverError;
use crate::geometry::Point;

/// Where to place the play control for the hovered paragraph
#[derive(Debug, Clone, PartialEq)]
pub struct HoveredElementInfo<E> {
    /// Parent of the hovered candidate, or the candidate if it has none
    pub element: E,
    /// Page-absolute top of the candidate
    pub top: f64,
    /// Page-absolute left of the candidate minus the play-control offset
    pub left: f64,
    pub height_of_first_line: u32,
}

/// Pick the hovered candidate for `point` according to `policy`
pub fn find_hovered<'a, P: Page + ?Sized>(
    page: &P,
    candidates: &'a [P::Element],
    point: Point,
    policy: MatchPolicy,
) -> Option<&'a P::Element> {
    let mut matches = candidates
        .iter()
        .filter(|candidate| is_point_inside(page, point, *candidate));

    match policy {
        MatchPolicy::First => matches.next(),
        MatchPolicy::Last => matches.last(),
    }
}

/// Build the published info for a hovered candidate
pub fn describe_hover<P: Page + ?Sized>(
    page: &P,
    candidate: &P::Element,
    config: &TrackerConfig,
) -> Result<HoveredElementInfo<P::Element>, HoverError> {
    let bounds = element_bounds(page, candidate);
    let height_of_first_line = page.first_line_height(candidate, &config.sample_text)?;

    Ok(HoveredElementInfo {
        element: page.parent(candidate).unwrap_or_else(|| candidate.clone()),
        top: bounds.top(),
        left: bounds.left() - config.play_control_offset,
        height_of_first_line,
    })
}

fn handle_pointer_move<P: Page + ?Sized>(
    page: &P,
    candidates: &[P::Element],
    config: &TrackerConfig,
    state: &HoverState<HoveredElementInfo<P::Element>>,
    point: Point,
) -> Result<(), HoverError> {
    match find_hovered(page, candidates, point, config.match_policy) {
        Some(candidate) => {
            let info = describe_hover(page, candidate, config)?;
            log::trace!(
                "[HoverPlayer] hover at ({}, {}) -> top={}, left={}, line={}",
                point.x,
                point.y,
                info.top,
                info.left,
                info.height_of_first_line
            );
            state.publish(Some(info));
        }
        None => {
            if config.leave_policy == LeavePolicy::Clear && state.is_some() {
                log::trace!("[HoverPlayer] pointer left all candidates, clearing");
                state.publish(None);
            }
        }
    }
    Ok(())
}

/// Reactive hover subscription over an ordered candidate list
pub struct HoverCoordinateTracker<P>
where
    P: Page + PointerSource,
{
    page: Rc<P>,
    config: Rc<TrackerConfig>,
    state: HoverState<HoveredElementInfo<P::Element>>,
    candidates: Rc<[P::Element]>,
    registration: Option<P::Registration>,
}

impl<P> HoverCoordinateTracker<P>
where
    P: Page + PointerSource + 'static,
    P::Element: 'static,
{
    /// Validate `config` and start listening for pointer moves
    pub fn new(
        page: Rc<P>,
        candidates: Rc<[P::Element]>,
        config: TrackerConfig,
    ) -> Result<Self, HoverError> {
        config.validate()?;

        let mut tracker = Self {
            page,
            config: Rc::new(config),
            state: HoverState::new(),
            candidates,
            registration: None,
        };
        tracker.attach()?;
        Ok(tracker)
    }

    /// Swap the candidate list.
    ///
    /// Returns `Ok(false)` when `candidates` is the list already tracked
    /// (same allocation); otherwise the old listener is removed, a new one
    /// bound to `candidates` is registered, and `Ok(true)` is returned.
    pub fn set_candidates(&mut self, candidates: Rc<[P::Element]>) -> Result<bool, HoverError> {
        if Rc::ptr_eq(&self.candidates, &candidates) {
            return Ok(false);
        }

        self.detach();
        self.candidates = candidates;
        self.attach()?;
        Ok(true)
    }

    fn attach(&mut self) -> Result<(), HoverError> {
        let page = Rc::clone(&self.page);
        let candidates = Rc::clone(&self.candidates);
        let config = Rc::clone(&self.config);
        let state = self.state.clone();

        let handler: PointerHandler = Rc::new(move |point: Point| {
            if let Err(err) =
                handle_pointer_move(page.as_ref(), &candidates, &config, &state, point)
            {
                log::warn!("[HoverPlayer] pointer move skipped: {}", err);
            }
        });

        self.registration = Some(self.page.listen(handler)?);
        log::debug!(
            "[HoverPlayer] listening for pointer moves over {} candidates",
            self.candidates.len()
        );
        Ok(())
    }
}

impl<P> HoverCoordinateTracker<P>
where
    P: Page + PointerSource,
{
    fn detach(&mut self) {
        if let Some(registration) = self.registration.take() {
            self.page.unlisten(registration);
            log::debug!("[HoverPlayer] pointer listener removed");
        }
    }

    /// Currently published hover info, if any
    pub fn current(&self) -> Option<HoveredElementInfo<P::Element>> {
        self.state.get()
    }

    pub fn version(&self) -> u64 {
        self.state.version()
    }

    pub fn state(&self) -> &HoverState<HoveredElementInfo<P::Element>> {
        &self.state
    }

    pub fn subscribe(
        &self,
        callback: impl Fn(Option<&HoveredElementInfo<P::Element>>) + 'static,
    ) -> SubscriptionId {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    pub fn candidates(&self) -> &Rc<[P::Element]> {
        &self.candidates
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.registration.is_some()
    }

    /// Stop listening. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.detach();
    }
}

impl<P> Drop for HoverCoordinateTracker<P>
where
    P: Page + PointerSource,
{
    fn drop(&mut self) {
        self.detach();
    }
}
