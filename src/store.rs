//! Shared application state with synchronous subscribers.
//!
//! A single mutable record holds the handful of flags the playback UI and
//! the frame loop both read. Every write notifies all subscribers
//! immediately with the before/after snapshot pair; subscribers diff the
//! fields they care about. There is no batching, so subscriber work must
//! stay cheap — a write can happen per frame while the scrub slider
//! drags.

/// Snapshot of the shared flags. Cloned on every write for the
/// before/after pair handed to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Registry id of the exercise being shown.
    pub selected_exercise_id: String,
    /// Whether playback advances with real time.
    pub playing: bool,
    /// Playback speed multiplier.
    pub speed: f32,
    /// True while the user drags the scrub slider; the frame loop must
    /// not advance the clock while set.
    pub scrubbing: bool,
    /// Whether joint-anchored form cues are drawn.
    pub annotations_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selected_exercise_id: "squat".to_string(),
            playing: true,
            speed: 1.0,
            scrubbing: false,
            annotations_visible: true,
        }
    }
}

type Subscriber = Box<dyn FnMut(&AppState, &AppState)>;

/// Observable container around [`AppState`].
pub struct AppStore {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            subscribers: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Registers a subscriber called synchronously after every write with
    /// the (before, after) snapshots.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState, &AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn set_exercise(&mut self, id: &str) {
        self.update(|state| state.selected_exercise_id = id.to_string());
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.update(|state| state.playing = playing);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.update(|state| state.speed = speed);
    }

    pub fn set_scrubbing(&mut self, scrubbing: bool) {
        self.update(|state| state.scrubbing = scrubbing);
    }

    pub fn set_annotations_visible(&mut self, visible: bool) {
        self.update(|state| state.annotations_visible = visible);
    }

    fn update(&mut self, mutate: impl FnOnce(&mut AppState)) {
        let before = self.state.clone();
        mutate(&mut self.state);
        for subscriber in &mut self.subscribers {
            subscriber(&before, &self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn subscribers_see_before_and_after() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = AppStore::new();
        store.subscribe(move |before, after| {
            sink.borrow_mut()
                .push((before.playing, after.playing, after.speed));
        });

        store.set_playing(false);
        store.set_speed(2.0);

        let seen = seen.borrow();
        assert_eq!(seen.as_slice(), &[(true, false, 1.0), (false, false, 2.0)]);
    }

    #[test]
    fn default_state_starts_on_squat() {
        let store = AppStore::new();
        assert_eq!(store.state().selected_exercise_id, "squat");
        assert!(store.state().playing);
        assert!(!store.state().scrubbing);
    }
}
