//! Loading scene files from disk and driving the resulting scene.

use lumen_assets::ResourceCache;
use lumen_camera::CameraMovement;
use lumen_math::Vec3;
use lumen_scene::{LightKind, SceneDescription};

const SCENE_YAML: &str = r#"
clear_color: { x: 0.0, y: 0.0, z: 0.0 }
cameras:
  - name: Player
    camera:
      position: { x: 0.0, y: 1.0, z: 5.0 }
      movement_speed: 4.0
  - name: Security Cam
    camera:
      position: { x: 10.0, y: 5.0, z: 0.0 }
      yaw: 180.0
      pitch: -30.0
lights:
  - name: Sun
    transform:
      rotation: { x: -1.0, y: 0.0, z: 0.0 }
    light:
      kind: directional
      intensity: 2.0
models:
  - name: Floor
    transform:
      position: { x: 0.0, y: -1.0, z: 0.0 }
      scale: { x: 20.0, y: 0.1, z: 20.0 }
  - name: Crate
    material:
      shininess: 64.0
"#;

fn write_scene(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("level.yaml");
    std::fs::write(&path, SCENE_YAML).unwrap();
    path
}

#[test]
fn loads_scene_file_into_live_scene() {
    let dir = tempfile::tempdir().unwrap();
    let desc = SceneDescription::load(write_scene(&dir)).unwrap();

    let mut cache = ResourceCache::new();
    let scene = desc.instantiate(&mut cache).unwrap();

    assert_eq!(scene.len(), 5);
    assert_eq!(scene.clear_color(), Vec3::ZERO);
    assert_eq!(scene.active_camera_entity().unwrap().name, "Player");
    assert_eq!(cache.mesh_count(), 1);

    let sun = scene.find_by_name("Sun").unwrap();
    assert_eq!(sun.as_light().unwrap().kind, LightKind::Directional);
    assert!(sun.forward().y < 0.0);

    let crate_model = scene.find_by_name("Crate").unwrap().as_model().unwrap();
    assert_eq!(crate_model.material.shininess(), 64.0);
}

#[test]
fn driving_the_active_camera_moves_its_entity() {
    let dir = tempfile::tempdir().unwrap();
    let desc = SceneDescription::load(write_scene(&dir)).unwrap();
    let mut scene = desc.instantiate(&mut ResourceCache::new()).unwrap();

    if let Some(mut cam) = scene.active_camera_mut() {
        cam.process_keyboard(CameraMovement::Forward, 0.5);
    }
    let player = scene.active_camera_entity().unwrap();
    let expected = Vec3::new(0.0, 1.0, 3.0);
    assert!((player.transform().position - expected).magnitude() < 1e-5);

    let security = scene.find_by_name("Security Cam").unwrap().id();
    scene.set_active_camera(security).unwrap();
    let cam = scene.active_camera().unwrap();
    assert_eq!(cam.pitch(), -30.0);
    assert!(cam.front().y < 0.0);
}

#[test]
fn saved_demo_scene_reloads_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.yaml");
    SceneDescription::demo().save(&path).unwrap();

    let scene = SceneDescription::load(&path)
        .unwrap()
        .instantiate(&mut ResourceCache::new())
        .unwrap();
    assert_eq!(scene.models().count(), 10);
    assert_eq!(scene.lights().count(), 1);
    assert_eq!(
        scene.active_camera().unwrap().position,
        Vec3::new(0.0, 0.0, 5.0)
    );
}
