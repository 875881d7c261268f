//! Decision criterion applied to simulated samples
//!
//! A `Criteria` names the control category, the threshold separating PASS
//! from FAIL and the relational test used for that decision.

use serde::{Deserialize, Serialize};

/// Which category acts as the control group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index")]
pub enum ControlCategory {
    /// The last category of each walk
    #[default]
    Last,
    /// A fixed category index
    Index(usize),
    /// The n-th category counted from the end (1 is the last)
    FromEnd(usize),
}

impl ControlCategory {
    /// Build a selector from a signed index where negative values count back
    /// from the last category (`-1` is the last one).
    #[must_use]
    pub fn from_offset(offset: isize) -> Self {
        match offset {
            -1 => ControlCategory::Last,
            o if o >= 0 => ControlCategory::Index(o.unsigned_abs()),
            o => ControlCategory::FromEnd(o.unsigned_abs()),
        }
    }

    /// Resolve to a concrete index for a walk with `category_count` categories.
    ///
    /// Returns `None` when the selector falls outside the walk, in which case
    /// no category is treated as the control.
    #[must_use]
    pub fn resolve(self, category_count: usize) -> Option<usize> {
        match self {
            ControlCategory::Last => category_count.checked_sub(1),
            ControlCategory::Index(i) => (i < category_count).then_some(i),
            ControlCategory::FromEnd(0) => None,
            ControlCategory::FromEnd(n) => category_count.checked_sub(n),
        }
    }
}

/// Relational test deciding whether a sample passes: `sample <test> threshold`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonTest {
    #[default]
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl ComparisonTest {
    /// Whether `sample` is a PASS against `threshold`
    #[must_use]
    #[inline]
    pub fn holds(self, sample: f64, threshold: f64) -> bool {
        match self {
            ComparisonTest::LessThan => sample < threshold,
            ComparisonTest::LessOrEqual => sample <= threshold,
            ComparisonTest::GreaterThan => sample > threshold,
            ComparisonTest::GreaterOrEqual => sample >= threshold,
        }
    }
}

/// The two groups samples are partitioned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Control,
    NonControl,
}

impl Pool {
    /// Pool for samples of `category`, given the resolved control index
    #[must_use]
    #[inline]
    pub fn of(category: usize, control: Option<usize>) -> Self {
        if control == Some(category) {
            Pool::Control
        } else {
            Pool::NonControl
        }
    }
}

/// Parameters for scoring a set of walks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub control: ControlCategory,
    /// Decision boundary between PASS and FAIL
    pub threshold: f64,
    /// Informational: scoring always counts non-control samples below the
    /// threshold and control samples above it, whatever this is set to.
    pub test: ComparisonTest,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            control: ControlCategory::Last,
            threshold: 0.0,
            test: ComparisonTest::LessThan,
        }
    }
}

impl Criteria {
    #[must_use]
    pub fn new(control: ControlCategory, threshold: f64) -> Self {
        Self {
            control,
            threshold,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_test(mut self, test: ComparisonTest) -> Self {
        self.test = test;
        self
    }
}
