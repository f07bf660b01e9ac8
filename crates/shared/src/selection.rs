/// Single-selection state machine.
///
/// Two states: no selection (initial) and exactly one selected item.
/// `select` replaces any prior selection atomically, `clear` empties it;
/// there is no multi-selection or pending state. Every call is a
/// transition, including re-selecting the current item, so the revision
/// counter bumps each time and presentation layers relying on it recompute
/// their derived display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    current: Option<T>,
    revision: u64,
}

impl<T> Selection<T> {
    pub fn new() -> Self {
        Selection {
            current: None,
            revision: 0,
        }
    }

    pub fn select(&mut self, item: T) {
        self.current = Some(item);
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.revision += 1;
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Monotonic counter, bumped on every `select`/`clear` call.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::new()
    }
}
