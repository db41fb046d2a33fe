use std::fs;
use std::path::Path;

use hawkdeck::{
    core::state::{slide::Widget, AppState},
    domain::slide::{SlideDescriptor, SlideKind},
    infrastructure::config::Config,
    integration::runtime::Runtime,
    model::{
        hardware::ImageSlot,
        smart_image::ImageState,
    },
};
use pretty_assertions::assert_eq;

const PNG: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn runtime_for(assets: &Path) -> Runtime {
    let config = Config {
        assets_dir: assets.to_path_buf(),
        ..Config::default()
    };
    let slides = [SlideDescriptor::new(13)
        .title("Prototype (Hardware)")
        .kind(SlideKind::Prototype)];
    Runtime::new_with_executor(AppState::new(slides, config, 0))
}

fn settle(runtime: &mut Runtime) {
    for _ in 0..4 {
        runtime.run_update_cycle().expect("update cycle");
    }
}

fn image_state(runtime: &Runtime, slot: ImageSlot) -> ImageState {
    let Widget::Hardware(hardware) = &runtime.state().slide.widget else {
        panic!("prototype slide mounts the hardware widget");
    };
    hardware.image(slot).state().clone()
}

#[test]
fn test_first_readable_candidate_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("raspberry-pi.png"), PNG).expect("write png");
    fs::write(dir.path().join("raspberry-pi.jpg"), [0xFF, 0xD8, 0xFF]).expect("write jpeg");

    let mut runtime = runtime_for(dir.path());
    settle(&mut runtime);

    assert_eq!(
        image_state(&runtime, ImageSlot::RaspberryPi),
        ImageState::Loaded {
            path: dir.path().join("raspberry-pi.png")
        }
    );
}

#[test]
fn test_unreadable_candidate_falls_through() {
    let dir = tempfile::tempdir().expect("tempdir");
    // right name, not an image
    fs::write(dir.path().join("alfa-adapter.png"), "hello").expect("write text");
    fs::write(dir.path().join("alfa-adapter.jpg"), [0xFF, 0xD8, 0xFF, 0xE1]).expect("write jpeg");

    let mut runtime = runtime_for(dir.path());
    settle(&mut runtime);

    assert_eq!(
        image_state(&runtime, ImageSlot::Adapter),
        ImageState::Loaded {
            path: dir.path().join("alfa-adapter.jpg")
        }
    );
}

#[test]
fn test_exhausted_chain_is_not_found_without_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut runtime = runtime_for(dir.path());
    settle(&mut runtime);

    assert_eq!(image_state(&runtime, ImageSlot::RaspberryPi), ImageState::NotFound);
    assert_eq!(image_state(&runtime, ImageSlot::Adapter), ImageState::NotFound);
    assert!(!runtime.state().status_bar.is_error());
}
