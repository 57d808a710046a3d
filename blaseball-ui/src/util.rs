/// Remembers the last value drawn so a screen only redraws what changed.
#[derive(Clone, Copy, Debug)]
pub struct Tracked<T> {
    last: Option<T>,
}

impl<T: PartialEq + Copy> Tracked<T> {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Records `value`, returning true if it differs from the last one seen.
    pub fn update(&mut self, value: T) -> bool {
        if self.last == Some(value) {
            return false;
        }
        self.last = Some(value);
        true
    }

    /// Forces the next `update` to report a change.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

impl<T: PartialEq + Copy> Default for Tracked<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_only_changes() {
        let mut tracked = Tracked::new();
        assert!(tracked.update(3));
        assert!(!tracked.update(3));
        assert!(tracked.update(4));
        tracked.invalidate();
        assert!(tracked.update(4));
    }
}
