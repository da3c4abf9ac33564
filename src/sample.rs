use serde::Serialize;

/// Baseline installed by every provided constructor.
///
/// A freshly built sample therefore always resets caller slots to 3.
pub const DEFAULT_BASELINE: i32 = 3;

/// A minimal example entity used in style-tooling demonstrations.
///
/// The entity stores two integers and exposes two operations: an accessor
/// for the stored value and a reset that writes the baseline into a
/// caller-provided slot. Construction is public, mutation happens only
/// through `&mut` receivers and parameters, and every operation is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleSample {
    /// The stored value read back by [`StyleSample::value`].
    value: i32,
    /// The value written into caller slots by [`StyleSample::reset_slot`].
    baseline: i32,
}

impl StyleSample {
    /// Creates a new `StyleSample` holding `value`.
    ///
    /// The baseline starts at [`DEFAULT_BASELINE`].
    pub fn new(value: i32) -> Self {
        Self {
            value,
            baseline: DEFAULT_BASELINE,
        }
    }

    /// Returns the stored value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Replaces the stored value.
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    /// Returns the baseline that [`StyleSample::reset_slot`] writes out.
    pub fn baseline(&self) -> i32 {
        self.baseline
    }

    /// Writes the baseline into `slot` and returns the displaced value.
    ///
    /// The caller opts into the mutation by handing over `&mut i32`; nothing
    /// else is touched. For samples built with [`StyleSample::new`] or
    /// [`StyleSample::default`] the slot holds 3 afterwards.
    pub fn reset_slot(&self, slot: &mut i32) -> i32 {
        std::mem::replace(slot, self.baseline)
    }
}

// Hand-written: the derive would zero the baseline as well.
impl Default for StyleSample {
    fn default() -> Self {
        Self::new(0)
    }
}
