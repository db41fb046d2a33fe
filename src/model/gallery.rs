use std::cmp::Ordering;

use strum::Display;

use crate::domain::content::{Feature, CORE_FEATURES, ENGINEERED_FEATURE_COUNT};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum SortMetric {
    #[default]
    Binary,
    #[strum(to_string = "Multi-class")]
    Multi,
}

impl SortMetric {
    pub fn importance(self, feature: &Feature) -> f64 {
        match self {
            SortMetric::Binary => feature.binary,
            SortMetric::Multi => feature.multi,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    MetricSelected(SortMetric),
    MetricToggled,
}

/// Core features sorted by the selected importance metric, descending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureGallery {
    metric: SortMetric,
}

impl FeatureGallery {
    pub fn metric(&self) -> SortMetric {
        self.metric
    }

    pub fn features(&self) -> Vec<Feature> {
        let mut features = CORE_FEATURES.to_vec();
        features.sort_by(|a, b| {
            self.metric
                .importance(b)
                .partial_cmp(&self.metric.importance(a))
                .unwrap_or(Ordering::Equal)
        });
        features
    }

    pub fn footer(&self) -> String {
        format!(
            "Showing {} of {} engineered features",
            CORE_FEATURES.len(),
            ENGINEERED_FEATURE_COUNT
        )
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::MetricSelected(metric) => self.metric = metric,
            Message::MetricToggled => {
                self.metric = match self.metric {
                    SortMetric::Binary => SortMetric::Multi,
                    SortMetric::Multi => SortMetric::Binary,
                }
            }
        }
    }
}
