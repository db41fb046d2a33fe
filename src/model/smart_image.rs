//! Image with an ordered fallback chain
//!
//! Candidates are tried one at a time. The model never touches the
//! filesystem: it names the path it wants probed and reacts to the probe
//! result delivered back to it.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    Loading { index: usize },
    Loaded { path: PathBuf },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Probed { path: PathBuf, loaded: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartImage {
    alt: String,
    candidates: Vec<PathBuf>,
    state: ImageState,
}

impl SmartImage {
    pub fn new(alt: impl Into<String>, candidates: Vec<PathBuf>) -> Self {
        let state = if candidates.is_empty() {
            ImageState::NotFound
        } else {
            ImageState::Loading { index: 0 }
        };
        Self {
            alt: alt.into(),
            candidates,
            state,
        }
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn state(&self) -> &ImageState {
        &self.state
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Candidate waiting for a probe result
    pub fn pending(&self) -> Option<&Path> {
        match self.state {
            ImageState::Loading { index } => self.candidates.get(index).map(PathBuf::as_path),
            ImageState::Loaded { .. } | ImageState::NotFound => None,
        }
    }

    /// Applies a probe result and returns the next candidate to probe, if any
    pub fn update(&mut self, message: Message) -> Option<PathBuf> {
        match message {
            Message::Probed { path, loaded } => {
                let ImageState::Loading { index } = self.state else {
                    return None;
                };
                if self.candidates.get(index) != Some(&path) {
                    log::debug!("Ignoring stale probe result for {}", path.display());
                    return None;
                }

                if loaded {
                    self.state = ImageState::Loaded { path };
                    return None;
                }

                let next = index + 1;
                match self.candidates.get(next) {
                    Some(candidate) => {
                        self.state = ImageState::Loading { index: next };
                        Some(candidate.clone())
                    }
                    None => {
                        log::info!("No image candidate found for {}", self.alt);
                        self.state = ImageState::NotFound;
                        None
                    }
                }
            }
        }
    }
}
