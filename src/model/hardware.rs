//! Hardware setup on the prototype slide
//!
//! A bench/live toggle switches the headline figures. Each device card owns
//! a [`SmartImage`] resolved against the assets directory.

use std::path::{Path, PathBuf};

use strum::Display;

use crate::model::smart_image::{self, SmartImage};

pub const PI_CANDIDATES: [&str; 2] = ["raspberry-pi.png", "raspberry-pi.jpg"];
pub const ADAPTER_CANDIDATES: [&str; 2] = ["alfa-adapter.png", "alfa-adapter.jpg"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum HardwareMode {
    #[default]
    Bench,
    Live,
}

impl HardwareMode {
    pub fn latency(self) -> &'static str {
        match self {
            HardwareMode::Bench => "< 0.8s",
            HardwareMode::Live => "< 1.0s",
        }
    }

    pub fn power(self) -> &'static str {
        match self {
            HardwareMode::Bench => "~6W",
            HardwareMode::Live => "~7.5W",
        }
    }

    pub fn cost(self) -> &'static str {
        "Low-cost"
    }
}

/// Which device card an image belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, serde::Serialize, serde::Deserialize)]
pub enum ImageSlot {
    #[strum(to_string = "Raspberry Pi")]
    RaspberryPi,
    #[strum(to_string = "Alfa Wi-Fi Adapter")]
    Adapter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ModeSelected(HardwareMode),
    ModeToggled,
    ImageProbed {
        slot: ImageSlot,
        path: PathBuf,
        loaded: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hardware {
    mode: HardwareMode,
    pi: SmartImage,
    adapter: SmartImage,
}

impl Hardware {
    pub fn new(assets_dir: &Path) -> Self {
        let candidates = |names: &[&str]| names.iter().map(|name| assets_dir.join(name)).collect();
        Self {
            mode: HardwareMode::Bench,
            pi: SmartImage::new(ImageSlot::RaspberryPi.to_string(), candidates(&PI_CANDIDATES)),
            adapter: SmartImage::new(ImageSlot::Adapter.to_string(), candidates(&ADAPTER_CANDIDATES)),
        }
    }

    pub fn mode(&self) -> HardwareMode {
        self.mode
    }

    pub fn image(&self, slot: ImageSlot) -> &SmartImage {
        match slot {
            ImageSlot::RaspberryPi => &self.pi,
            ImageSlot::Adapter => &self.adapter,
        }
    }

    /// First probe for every image still loading
    pub fn initial_probes(&self) -> Vec<(ImageSlot, PathBuf)> {
        [ImageSlot::RaspberryPi, ImageSlot::Adapter]
            .into_iter()
            .filter_map(|slot| {
                self.image(slot)
                    .pending()
                    .map(|path| (slot, path.to_path_buf()))
            })
            .collect()
    }

    /// Returns the next probe to run, if the image moved to another candidate
    pub fn update(&mut self, message: Message) -> Option<(ImageSlot, PathBuf)> {
        match message {
            Message::ModeSelected(mode) => {
                self.mode = mode;
                None
            }
            Message::ModeToggled => {
                self.mode = match self.mode {
                    HardwareMode::Bench => HardwareMode::Live,
                    HardwareMode::Live => HardwareMode::Bench,
                };
                None
            }
            Message::ImageProbed { slot, path, loaded } => {
                let image = match slot {
                    ImageSlot::RaspberryPi => &mut self.pi,
                    ImageSlot::Adapter => &mut self.adapter,
                };
                image
                    .update(smart_image::Message::Probed { path, loaded })
                    .map(|next| (slot, next))
            }
        }
    }
}
