#[allow(dead_code)]
mod common;

use approx::assert_abs_diff_eq;
use image::ImageFormat;

use viewport_core::error::ViewportError;
use viewport_core::geometry::Transform;
use viewport_core::io::media::MediaKind;
use viewport_core::session::{LoadState, Session};
use viewport_core::settings::ViewportSettings;
use viewport_core::viewport::ImageAction;

fn session() -> Session {
    Session::new(&ViewportSettings::default())
}

#[test]
fn test_load_image_fits_surface() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "photo.png", 700, 700);

    let mut s = session();
    assert!(!s.is_ready());
    let t = s.load(&path).unwrap().unwrap();

    assert!(s.is_ready());
    assert_abs_diff_eq!(t.scale, 500.0 / 700.0, epsilon = 1e-12);
    assert_eq!(s.transform(), t);
    assert_eq!(s.controller().image().map(|d| (d.width, d.height)), Some((700, 700)));
}

#[test]
fn test_unsupported_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let mut s = session();
    assert_eq!(s.load(&path).unwrap(), None);
    assert!(matches!(s.state(), LoadState::Idle));
    assert!(s.image().is_none());

    assert!(!s.begin_mime("image/webp", vec![1, 2, 3]).unwrap());
    assert!(matches!(s.state(), LoadState::Idle));
}

#[test]
fn test_only_first_selected_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let first = common::write_png(dir.path(), "a.png", 100, 50);
    let second = common::write_png(dir.path(), "b.png", 900, 900);

    let mut s = session();
    assert!(s.begin_load_first(&[first, second]).unwrap());
    s.finish_load().unwrap();
    assert_eq!(s.controller().image().map(|d| d.width), Some(100));

    let none: [&std::path::Path; 0] = [];
    assert!(!s.begin_load_first(&none).unwrap());
}

#[test]
fn test_actions_ignored_while_pending() {
    let mut s = session();
    let png = common::encoded(&common::gradient_image(700, 700), ImageFormat::Png);
    assert!(s.begin_bytes(MediaKind::Png, png.clone()).unwrap());
    s.finish_load().unwrap();
    let committed = s.transform();

    assert!(s.begin_bytes(MediaKind::Png, png.clone()).unwrap());
    assert!(!s.is_ready());
    assert_eq!(s.apply(ImageAction::ZoomIn), committed);
    assert_eq!(s.transform(), committed);

    assert!(matches!(
        s.begin_bytes(MediaKind::Png, png),
        Err(ViewportError::LoadPending)
    ));

    s.finish_load().unwrap();
    assert!(s.is_ready());
    assert!(s.apply(ImageAction::ZoomIn).scale > committed.scale);
}

#[test]
fn test_finish_without_pending_is_noop() {
    let mut s = session();
    assert_eq!(s.finish_load().unwrap(), None);
}

#[test]
fn test_decode_failure_keeps_committed_state() {
    let dir = tempfile::tempdir().unwrap();
    let good = common::write_png(dir.path(), "good.png", 640, 480);
    let bad = dir.path().join("bad.png");
    std::fs::write(&bad, b"definitely not a png").unwrap();

    let mut s = session();
    s.load(&good).unwrap();
    s.apply(ImageAction::ZoomIn);
    let committed = s.transform();

    assert!(matches!(s.load(&bad), Err(ViewportError::ImageError(_))));
    assert!(matches!(s.state(), LoadState::Idle));
    assert_eq!(s.transform(), committed);
    assert_eq!(s.controller().image().map(|d| d.width), Some(640));
}

#[test]
fn test_configuration_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "photo.png", 700, 700);

    let mut s = session();
    s.load(&path).unwrap();
    for action in [ImageAction::ZoomIn, ImageAction::ZoomIn, ImageAction::Left, ImageAction::Down] {
        s.apply(action);
    }
    let expected = s.transform();
    let saved = s.export().unwrap().save(dir.path()).unwrap();

    let mut restored = session();
    let t = restored.load(&saved).unwrap().unwrap();
    assert_abs_diff_eq!(t.scale, expected.scale, epsilon = 1e-12);
    assert_abs_diff_eq!(t.x, expected.x, epsilon = 1e-12);
    assert_abs_diff_eq!(t.y, expected.y, epsilon = 1e-12);
    assert!(restored.is_ready());
}

#[test]
fn test_restored_transform_is_not_clamped() {
    let mut s = session();
    let png = common::encoded(&common::gradient_image(50, 50), ImageFormat::Png);
    s.begin_bytes(MediaKind::Png, png).unwrap();
    s.finish_load().unwrap();

    let mut doc = s.export().unwrap();
    doc.canvas.photo.x = 400.0;
    doc.canvas.photo.y = 300.0;

    let mut other = session();
    other
        .begin_mime("application/json", doc.to_json_string().unwrap().into_bytes())
        .unwrap();
    let t = other.finish_load().unwrap().unwrap();
    assert_eq!((t.x, t.y), (400.0, 300.0));
}

#[test]
fn test_negative_saved_size_is_rejected() {
    let mut s = session();
    let png = common::encoded(&common::gradient_image(50, 50), ImageFormat::Png);
    s.begin_bytes(MediaKind::Png, png).unwrap();
    s.finish_load().unwrap();
    let committed = s.transform();

    let mut doc = s.export().unwrap();
    doc.canvas.photo.width = -100.0;
    doc.canvas.photo.height = -100.0;

    assert!(s
        .begin_mime("application/json", doc.to_json_string().unwrap().into_bytes())
        .unwrap());
    assert!(matches!(
        s.finish_load(),
        Err(ViewportError::InvalidTransform(_))
    ));
    assert!(matches!(s.state(), LoadState::Idle));
    assert!(s.is_ready());
    assert_eq!(s.transform(), committed);
    assert!(s.transform().scale > 0.0);
}

#[test]
fn test_malformed_configuration_leaves_session_idle() {
    let mut s = session();
    let err = s.begin_bytes(MediaKind::Json, br#"{"canvas":{}}"#.to_vec());
    assert!(matches!(err, Err(ViewportError::Json(_))));
    assert!(matches!(s.state(), LoadState::Idle));
}

#[test]
fn test_export_requires_image() {
    assert!(matches!(session().export(), Err(ViewportError::NotReady)));
}

#[test]
fn test_custom_settings_drive_session() {
    let settings = ViewportSettings::from_toml_str(
        "move_step = 50.0\n[surface]\nwidth = 100\nheight = 100\n",
    )
    .unwrap();
    let mut s = Session::new(&settings);
    let png = common::encoded(&common::gradient_image(200, 200), ImageFormat::Png);
    s.begin_bytes(MediaKind::Png, png).unwrap();
    let fitted = s.finish_load().unwrap().unwrap();
    assert_eq!(fitted, Transform::new(0.0, 0.0, 0.5));

    // Zoomed to 110x110 at (-5, -5): one 50px step would uncover the bottom.
    s.apply(ImageAction::ZoomIn);
    let t = s.apply(ImageAction::Down);
    assert_abs_diff_eq!(t.y, -10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(t.x, -5.0, epsilon = 1e-9);
}
