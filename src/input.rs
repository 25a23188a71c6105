use crate::constants::SWIPE_THRESHOLD_PX;

/// What a key press, button click or swipe asks the scene to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Wish,
    Reset,
    Next,
    Prev,
    /// Zero-based photo index.
    Select(usize),
    ToggleHud,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        " " | "Enter" => Some(Action::Wish),
        "Escape" | "r" | "R" => Some(Action::Reset),
        "ArrowRight" => Some(Action::Next),
        "ArrowLeft" => Some(Action::Prev),
        "h" | "H" => Some(Action::ToggleHud),
        _ => digit_index(key).map(Action::Select),
    }
}

/// `"1"`..`"9"` to indices 0..8.
#[inline]
pub fn digit_index(key: &str) -> Option<usize> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ '1'..='9'), None) => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

/// Horizontal swipe detector. A press followed by a release more than
/// [`SWIPE_THRESHOLD_PX`] to the left means "next", to the right "previous".
#[derive(Default, Clone, Copy, Debug)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub fn end(&mut self, x: f32) -> Option<Action> {
        let start = self.start_x.take()?;
        swipe_action(start - x)
    }
}

/// `travel` is start minus end, positive for a leftward swipe.
#[inline]
pub fn swipe_action(travel: f32) -> Option<Action> {
    if travel > SWIPE_THRESHOLD_PX {
        Some(Action::Next)
    } else if travel < -SWIPE_THRESHOLD_PX {
        Some(Action::Prev)
    } else {
        None
    }
}

/// Last pointer position, for orbit drags.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

impl PointerState {
    /// Record a move and return the delta since the previous position.
    pub fn move_to(&mut self, x: f32, y: f32) -> (f32, f32) {
        let delta = (x - self.x, y - self.y);
        self.x = x;
        self.y = y;
        delta
    }
}
