//! Threshold-derived binary confusion matrix
//!
//! The counts are illustrative. Moving the decision threshold away from 0.50
//! shifts a fixed number of samples between FP and FN by a linear
//! perturbation of the baseline; totals are not conserved once a cell clamps
//! at zero.

pub const MIN_THRESHOLD: u8 = 30;
pub const MAX_THRESHOLD: u8 = 70;
pub const DEFAULT_THRESHOLD: u8 = 50;

/// Area under the illustrative ROC curve
pub const AUC: f64 = 0.99;

pub const ROW_LABELS: [&str; 2] = ["Actual: Normal", "Actual: Attack"];
pub const COLUMN_LABELS: [&str; 2] = ["Pred: Normal", "Pred: Attack"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryMatrix {
    pub tn: i64,
    pub fp: i64,
    pub fn_: i64,
    pub tp: i64,
}

pub const BASELINE: BinaryMatrix = BinaryMatrix {
    tn: 24_500,
    fp: 250,
    fn_: 125,
    tp: 24_800,
};

impl BinaryMatrix {
    /// Recomputes the matrix at threshold `t`
    pub fn at_threshold(t: f64) -> Self {
        let base = BASELINE;
        let delta = ((t - 0.5) * 400.0).round() as i64;

        let fp = (base.fp - delta).max(0);
        let tn = (base.tn + (base.fp - fp)).max(0);
        let fn_ = (base.fn_ + delta).max(0);
        let tp = (base.tp - (fn_ - base.fn_)).max(0);

        Self { tn, fp, fn_, tp }
    }

    /// True-positive rate, `TP / max(1, TP + FN)`
    pub fn tpr(&self) -> f64 {
        self.tp as f64 / (self.tp + self.fn_).max(1) as f64
    }

    /// False-positive rate, `FP / max(1, FP + TN)`
    pub fn fpr(&self) -> f64 {
        self.fp as f64 / (self.fp + self.tn).max(1) as f64
    }

    pub fn operating_point(&self) -> (f64, f64) {
        (self.fpr(), self.tpr())
    }

    /// Rows `[[TN, FP], [FN, TP]]` for the heatmap
    pub fn rows(&self) -> Vec<Vec<u64>> {
        let cell = |v: i64| v.max(0).unsigned_abs();
        vec![
            vec![cell(self.tn), cell(self.fp)],
            vec![cell(self.fn_), cell(self.tp)],
        ]
    }
}

impl Default for BinaryMatrix {
    fn default() -> Self {
        BASELINE
    }
}

/// Threshold in hundredths, kept inside `[0.30, 0.70]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    pub fn new(hundredths: u8) -> Self {
        Self(hundredths.clamp(MIN_THRESHOLD, MAX_THRESHOLD))
    }

    pub fn hundredths(self) -> u8 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn step(self, delta: i8) -> Self {
        Self::new(self.0.saturating_add_signed(delta))
    }

    pub fn matrix(self) -> BinaryMatrix {
        BinaryMatrix::at_threshold(self.value())
    }

    pub fn label(self) -> String {
        format!("{:.2}", self.value())
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

/// Samples the illustrative ROC curve as `(fpr, tpr)` points.
///
/// A cubic Bézier from (0, 0) to (1, 1). It leaves the origin below the
/// diagonal and crosses above it, giving a shallow S-shape.
pub fn roc_curve(samples: usize) -> Vec<(f64, f64)> {
    const CONTROL: [(f64, f64); 4] = [(0.0, 0.0), (0.25, 0.10), (0.55, 0.70), (1.0, 1.0)];

    let samples = samples.max(2);
    (0..samples)
        .map(|i| {
            let s = i as f64 / (samples - 1) as f64;
            let r = 1.0 - s;
            let weights = [r * r * r, 3.0 * r * r * s, 3.0 * r * s * s, s * s * s];
            CONTROL
                .iter()
                .zip(weights)
                .fold((0.0, 0.0), |(x, y), (&(cx, cy), w)| (x + w * cx, y + w * cy))
        })
        .collect()
}

/// Chance diagonal for the ROC plot
pub fn chance_line() -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (1.0, 1.0)]
}
