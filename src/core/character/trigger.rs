//! Hidden developer-mode trigger.
//!
//! Counts consecutive presses of one key. Any other key resets the count;
//! reaching the threshold fires once and resets.

/// Key that unlocks developer mode.
pub const TRIGGER_KEY: char = 'u';
/// Consecutive presses needed.
pub const TRIGGER_THRESHOLD: u8 = 3;

#[derive(Debug, Clone)]
pub struct HiddenModeTrigger {
    key: char,
    threshold: u8,
    count: u8,
}

impl Default for HiddenModeTrigger {
    fn default() -> Self {
        Self::new(TRIGGER_KEY, TRIGGER_THRESHOLD)
    }
}

impl HiddenModeTrigger {
    pub fn new(key: char, threshold: u8) -> Self {
        Self {
            key: key.to_ascii_lowercase(),
            threshold: threshold.max(1),
            count: 0,
        }
    }

    /// Feed one key press. `None` stands for a non-character key.
    ///
    /// Returns `true` exactly when this press reaches the threshold.
    pub fn observe(&mut self, pressed: Option<char>) -> bool {
        let matches = pressed.is_some_and(|c| c.to_ascii_lowercase() == self.key);
        if !matches {
            self.count = 0;
            return false;
        }

        self.count += 1;
        if self.count >= self.threshold {
            self.count = 0;
            return true;
        }
        false
    }

    pub fn count(&self) -> u8 {
        self.count
    }
}
