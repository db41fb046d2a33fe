use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use strum::{Display, EnumIter, EnumString};

/// Slide type tag carried by a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SlideKind {
    Cover,
    Team,
    Prototype,
    Demo,
    Qa,
    Component,
    Default,
}

/// Named interactive renderer a descriptor asks for.
///
/// Parsed from the descriptor's `interactive` string. Aliases resolve to the
/// same variant, so `"intro"` and `"intro-motivation"` are one renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Interactive {
    Toc,
    #[strum(to_string = "intro-motivation", serialize = "intro")]
    IntroMotivation,
    Problem,
    AttackDefenseMapping,
    SolutionFlow,
    ZoomArchitecture,
    DataCollection,
    PreprocessingSteps,
    FeatureImportance,
    ExpandableCharts,
    HardwareSetup,
    PerformanceDashboard,
    Demo,
    ImpactMetrics,
    Impact,
    FutureRoadmap,
    TeamCards,
    #[strum(to_string = "ethics-compliance", serialize = "ethics")]
    EthicsCompliance,
    RagSystem,
    Attacks,
    Flow,
    Architecture,
    Dataset,
    Models,
    Metrics,
    Team,
}

/// Frame a slide is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    Cover,
    Team,
    Prototype,
    Qa,
    /// Title plus interactive body or bullet list
    Framed,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlideDescriptor {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub points: Option<Vec<String>>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_kind")]
    pub kind: Option<SlideKind>,
    #[serde(default, deserialize_with = "lenient_interactive")]
    pub interactive: Option<Interactive>,
    #[serde(default)]
    pub hidden: bool,
}

impl SlideDescriptor {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            title: None,
            points: None,
            note: None,
            kind: None,
            interactive: None,
            hidden: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn points<I, S>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.points = Some(points.into_iter().map(Into::into).collect());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn kind(mut self, kind: SlideKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn interactive(mut self, interactive: Interactive) -> Self {
        self.interactive = Some(interactive);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Bullet points, empty when the descriptor has none
    pub fn bullet_points(&self) -> &[String] {
        self.points.as_deref().unwrap_or_default()
    }

    pub fn layout(&self) -> SlideLayout {
        match self.kind {
            Some(SlideKind::Cover) => SlideLayout::Cover,
            Some(SlideKind::Team) => SlideLayout::Team,
            Some(SlideKind::Prototype) => SlideLayout::Prototype,
            Some(SlideKind::Qa) => SlideLayout::Qa,
            Some(SlideKind::Demo | SlideKind::Component | SlideKind::Default) | None => {
                SlideLayout::Framed
            }
        }
    }

    /// Label used by the slide menu and `--list`
    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .or_else(|| self.bullet_points().first().cloned())
            .unwrap_or_else(|| format!("Slide {}", self.id))
    }
}

fn lenient_interactive<'de, D>(deserializer: D) -> Result<Option<Interactive>, D::Error>
where
    D: Deserializer<'de>,
{
    let key: Option<String> = Option::deserialize(deserializer)?;
    Ok(key.and_then(|key| match Interactive::from_str(&key) {
        Ok(interactive) => Some(interactive),
        Err(_) => {
            log::warn!("Unknown interactive key `{key}`, falling back to bullet list");
            None
        }
    }))
}

fn lenient_kind<'de, D>(deserializer: D) -> Result<Option<SlideKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let kind: Option<String> = Option::deserialize(deserializer)?;
    Ok(kind.and_then(|kind| match SlideKind::from_str(&kind) {
        Ok(kind) => Some(kind),
        Err(_) => {
            log::warn!("Unknown slide type `{kind}`, using the default frame");
            None
        }
    }))
}
