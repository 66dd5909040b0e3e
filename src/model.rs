//! Core data model for the flipbook.
//! Pages are a fixed deck loaded at startup; the book state is a small
//! reducer-driven machine: Idle -> Flipping(direction) -> Idle.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Minimum displacement (in CSS pixels) before a touch counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Duration of one page turn. Must match the CSS transition on the
/// flipping leaf in `BookView`.
pub const FLIP_DURATION_MS: i32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Image,
    Video,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub media_type: MediaType,
}

impl Page {
    fn new(id: u32, title: &str, content: &str, media_type: MediaType) -> Self {
        Self {
            id,
            title: title.to_string(),
            content: content.to_string(),
            media_type,
        }
    }

    /// The built-in six-chapter demo deck.
    pub fn sample_book() -> Vec<Page> {
        vec![
            Page::new(
                1,
                "Chapter 1: The Beginning",
                "This is the first page of our story. Scroll down to flip to the next page. \
                 Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor \
                 incididunt ut labore et dolore magna aliqua.",
                MediaType::Image,
            ),
            Page::new(
                2,
                "Chapter 2: The Journey",
                "Our adventure continues with stunning visuals and compelling narrative. Ut enim \
                 ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea \
                 commodo consequat.",
                MediaType::Image,
            ),
            Page::new(
                3,
                "Chapter 3: Discovery",
                "New revelations await as we delve deeper into the mystery. Duis aute irure dolor \
                 in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
                MediaType::Image,
            ),
            Page::new(
                4,
                "Chapter 4: The Climax",
                "The tension builds as we approach the pivotal moment. Excepteur sint occaecat \
                 cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est \
                 laborum.",
                MediaType::Image,
            ),
            Page::new(
                5,
                "Chapter 5: Resolution",
                "All threads come together in this final chapter. Sed ut perspiciatis unde omnis \
                 iste natus error sit voluptatem accusantium doloremque laudantium.",
                MediaType::Video,
            ),
            Page::new(
                6,
                "Epilogue",
                "The end of our journey, but the beginning of a new adventure. Thank you for \
                 reading this story with us.",
                MediaType::Image,
            ),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipDirection {
    Forward,
    Backward,
}

/// Wheel delta to intent. Bounds checks are the reducer's job.
pub fn wheel_intent(delta_y: f64) -> Option<FlipDirection> {
    if delta_y > 0.0 {
        Some(FlipDirection::Forward)
    } else if delta_y < 0.0 {
        Some(FlipDirection::Backward)
    } else {
        None
    }
}

/// Classify a completed touch gesture. `dx`/`dy` are start-minus-end
/// displacement, so a swipe up or a swipe left are both positive and both
/// mean forward. Displacements under the threshold, and exact diagonals,
/// yield no intent.
pub fn swipe_intent(dx: f64, dy: f64) -> Option<FlipDirection> {
    if dy.abs() > dx.abs() && dy.abs() > SWIPE_THRESHOLD {
        if dy > 0.0 {
            Some(FlipDirection::Forward)
        } else {
            Some(FlipDirection::Backward)
        }
    } else if dx.abs() > dy.abs() && dx.abs() > SWIPE_THRESHOLD {
        if dx > 0.0 {
            Some(FlipDirection::Forward)
        } else {
            Some(FlipDirection::Backward)
        }
    } else {
        None
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookState {
    /// Fixed page deck; Rc so reducer clones stay cheap.
    pub pages: Rc<Vec<Page>>,
    /// Which spread position is showing, in [0, max_spread]. Position 0
    /// is the cover; positions 1..=max are the content spreads.
    pub spread: usize,
    /// Some(direction) only during the animated transition window.
    pub flipping: Option<FlipDirection>,
}

impl BookState {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages: Rc::new(pages),
            spread: 0,
            flipping: None,
        }
    }

    /// Spread positions, counting the cover as position 0.
    pub fn spread_count(&self) -> usize {
        self.pages.len() / 2 + 1
    }

    pub fn max_spread(&self) -> usize {
        self.pages.len() / 2
    }

    /// Would a flip in `dir` be accepted right now? Shared by the reducer
    /// guard and the event handlers (which must not schedule a completion
    /// timer for a rejected intent).
    pub fn accepts(&self, dir: FlipDirection) -> bool {
        if self.flipping.is_some() {
            return false;
        }
        match dir {
            FlipDirection::Forward => self.spread < self.max_spread(),
            FlipDirection::Backward => self.spread > 0,
        }
    }

    /// Out-of-range lookups render nothing, so this is Option, not panic.
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    // Face mapping for spread position s. At the cover (s == 0) the left
    // face shows the cover art and the leaf front is blank; from s >= 1
    // the left static face carries page 2s-2, the leaf 2s-1 (front) and
    // 2s (back), and the underlay 2s+1, so a forward turn reveals the next
    // spread with visual continuity.
    pub fn left_page(&self) -> Option<&Page> {
        if self.spread == 0 {
            None
        } else {
            self.page(self.spread * 2 - 2)
        }
    }
    pub fn flip_front(&self) -> Option<&Page> {
        if self.spread == 0 {
            None
        } else {
            self.page(self.spread * 2 - 1)
        }
    }
    pub fn flip_back(&self) -> Option<&Page> {
        self.page(self.spread * 2)
    }
    pub fn right_under(&self) -> Option<&Page> {
        self.page(self.spread * 2 + 1)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum BookAction {
    /// A gesture produced an intent. Rejected while a flip is active or
    /// when the target spread would leave the valid range.
    BeginFlip(FlipDirection),
    /// The transition window elapsed; apply the index delta atomically.
    /// A no-op when idle (stale timer guard).
    CompleteFlip,
}

impl Reducible for BookState {
    type Action = BookAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use BookAction::*;
        match action {
            BeginFlip(dir) => {
                if !self.accepts(dir) {
                    return self;
                }
                let mut new = (*self).clone();
                new.flipping = Some(dir);
                Rc::new(new)
            }
            CompleteFlip => {
                let Some(dir) = self.flipping else {
                    return self;
                };
                let mut new = (*self).clone();
                new.spread = match dir {
                    FlipDirection::Forward => new.spread + 1,
                    FlipDirection::Backward => new.spread - 1,
                };
                new.flipping = None;
                Rc::new(new)
            }
        }
    }
}

/// Presentation preferences persisted to localStorage as JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPrefs {
    /// Whether the "scroll to turn pages" hint has been dismissed.
    pub hint_dismissed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Vec<Page> {
        (0..n)
            .map(|i| Page::new(i as u32 + 1, &format!("Page {}", i + 1), "", MediaType::Image))
            .collect()
    }

    fn dispatch(state: BookState, action: BookAction) -> BookState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn spread_positions_include_cover() {
        assert_eq!(BookState::new(deck(6)).max_spread(), 3);
        assert_eq!(BookState::new(deck(6)).spread_count(), 4);
        assert_eq!(BookState::new(deck(5)).max_spread(), 2);
        assert_eq!(BookState::new(deck(2)).max_spread(), 1);
        assert_eq!(BookState::new(deck(1)).max_spread(), 0);
    }

    #[test]
    fn wheel_intent_follows_delta_sign() {
        assert_eq!(wheel_intent(3.2), Some(FlipDirection::Forward));
        assert_eq!(wheel_intent(-0.5), Some(FlipDirection::Backward));
        assert_eq!(wheel_intent(0.0), None);
    }

    #[test]
    fn swipe_classification_vectors() {
        // Vertical: swipe up is forward, swipe down is backward.
        assert_eq!(swipe_intent(0.0, 60.0), Some(FlipDirection::Forward));
        assert_eq!(swipe_intent(0.0, -60.0), Some(FlipDirection::Backward));
        // Horizontal: swipe left is forward, swipe right is backward.
        assert_eq!(swipe_intent(60.0, 0.0), Some(FlipDirection::Forward));
        assert_eq!(swipe_intent(-60.0, 0.0), Some(FlipDirection::Backward));
        // Below threshold on both axes.
        assert_eq!(swipe_intent(30.0, 20.0), None);
        assert_eq!(swipe_intent(20.0, 30.0), None);
        // Dominant axis still has to clear the threshold.
        assert_eq!(swipe_intent(40.0, 10.0), None);
        // Exact diagonal: neither axis dominates.
        assert_eq!(swipe_intent(60.0, 60.0), None);
    }

    #[test]
    fn forward_at_last_spread_is_noop() {
        let mut st = BookState::new(deck(6));
        st.spread = st.max_spread();
        let after = dispatch(st.clone(), BookAction::BeginFlip(FlipDirection::Forward));
        assert_eq!(after, st);
    }

    #[test]
    fn backward_at_first_spread_is_noop() {
        let st = BookState::new(deck(6));
        let after = dispatch(st.clone(), BookAction::BeginFlip(FlipDirection::Backward));
        assert_eq!(after, st);
    }

    #[test]
    fn intents_during_flip_are_discarded() {
        let st = BookState::new(deck(6));
        let mid = dispatch(st, BookAction::BeginFlip(FlipDirection::Forward));
        assert_eq!(mid.flipping, Some(FlipDirection::Forward));

        for dir in [FlipDirection::Forward, FlipDirection::Backward] {
            let after = dispatch(mid.clone(), BookAction::BeginFlip(dir));
            assert_eq!(after.spread, mid.spread);
            assert_eq!(after.flipping, Some(FlipDirection::Forward));
        }
    }

    #[test]
    fn accepted_forward_increments_exactly_once() {
        let st = BookState::new(deck(6));
        let mid = dispatch(st, BookAction::BeginFlip(FlipDirection::Forward));
        assert_eq!(mid.spread, 0);

        let done = dispatch(mid, BookAction::CompleteFlip);
        assert_eq!(done.spread, 1);
        assert_eq!(done.flipping, None);

        // A stale completion timer must not move the index again.
        let again = dispatch(done.clone(), BookAction::CompleteFlip);
        assert_eq!(again, done);
    }

    #[test]
    fn forward_then_backward_round_trips() {
        let start = BookState::new(deck(6));
        let mut st = start.clone();
        for dir in [FlipDirection::Forward, FlipDirection::Backward] {
            st = dispatch(st, BookAction::BeginFlip(dir));
            st = dispatch(st, BookAction::CompleteFlip);
        }
        assert_eq!(st, start);
    }

    #[test]
    fn six_pages_accept_exactly_three_forwards() {
        let mut st = BookState::new(deck(6));
        for expected in [1, 2, 3] {
            st = dispatch(st, BookAction::BeginFlip(FlipDirection::Forward));
            assert_eq!(st.flipping, Some(FlipDirection::Forward));
            st = dispatch(st, BookAction::CompleteFlip);
            assert_eq!(st.spread, expected);
        }
        // Fourth forward from the cover is rejected outright.
        let after = dispatch(st.clone(), BookAction::BeginFlip(FlipDirection::Forward));
        assert_eq!(after, st);
    }

    #[test]
    fn face_mapping_tracks_spread_position() {
        let mut st = BookState::new(deck(6));
        // Cover: both visible faces blank, page 1 waiting on the leaf's
        // back with page 2 beneath it.
        assert_eq!(st.left_page(), None);
        assert_eq!(st.flip_front(), None);
        assert_eq!(st.flip_back().map(|p| p.id), Some(1));
        assert_eq!(st.right_under().map(|p| p.id), Some(2));

        st.spread = 1;
        assert_eq!(st.left_page().map(|p| p.id), Some(1));
        assert_eq!(st.flip_front().map(|p| p.id), Some(2));
        assert_eq!(st.flip_back().map(|p| p.id), Some(3));
        assert_eq!(st.right_under().map(|p| p.id), Some(4));

        st.spread = 3;
        assert_eq!(st.left_page().map(|p| p.id), Some(5));
        assert_eq!(st.flip_front().map(|p| p.id), Some(6));
        assert_eq!(st.flip_back(), None);
        assert_eq!(st.right_under(), None);
    }

    #[test]
    fn view_prefs_json_round_trip() {
        let prefs = ViewPrefs {
            hint_dismissed: true,
        };
        let raw = serde_json::to_string(&prefs).unwrap();
        let back: ViewPrefs = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, prefs);
    }
}
