//! End-to-end export tests over the JSD wire format.

use glam::Vec3;
use jsd_export::{export, ExportError, ExportOptions};
use jsd_scene::{MaterialSlot, MeshData, Scene, SceneObject, ShaderNode, World};
use serde_json::Value;

/// Default-cube scene: 8 vertices, 6 quads, one empty material slot,
/// identity transform.
fn cube_scene() -> Scene {
    let mut mesh = MeshData::new();
    for z in [-1.0f32, 1.0] {
        for (x, y) in [(-1.0f32, -1.0f32), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = Vec3::new(x, y, z);
            mesh.add_vertex(p, p.normalize());
        }
    }
    mesh.add_face(vec![0, 3, 2, 1], 0, false);
    mesh.add_face(vec![4, 5, 6, 7], 0, false);
    mesh.add_face(vec![0, 1, 5, 4], 0, false);
    mesh.add_face(vec![1, 2, 6, 5], 0, false);
    mesh.add_face(vec![2, 3, 7, 6], 0, false);
    mesh.add_face(vec![3, 0, 4, 7], 0, false);
    mesh.add_slot(MaterialSlot::empty());

    let mut scene = Scene::new("cube scene");
    scene.add_object(SceneObject::mesh("Cube", mesh));
    scene
}

#[test]
fn cube_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.jsd");

    export(&cube_scene(), &path, &ExportOptions::new()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let doc: Value = serde_json::from_str(&text).unwrap();

    let objects = doc["objects"].as_array().unwrap();
    assert_eq!(objects.len(), 1);

    let cube = &objects[0];
    assert_eq!(cube["type"], "mesh");
    assert_eq!(cube["name"], "Cube");
    assert_eq!(cube["vertices"].as_array().unwrap().len(), 8);
    assert_eq!(cube["faces"].as_array().unwrap().len(), 12);

    // Exactly one default-valued material record.
    let materials = cube["materials"].as_array().unwrap();
    assert_eq!(materials.len(), 1);
    let mat = &materials[0];
    assert_eq!(mat["base_color"], serde_json::json!([1.0, 1.0, 1.0]));
    assert_eq!(mat["transmission"], 0.0);
    assert_eq!(mat["roughness"], 0.5);
    assert_eq!(mat["metallic"], 0.0);
    assert_eq!(mat["ior"], 1.5);
    assert_eq!(mat["emission"], serde_json::json!([0.0, 0.0, 0.0]));
}

#[test]
fn wire_field_names_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fields.jsd");

    export(&cube_scene(), &path, &ExportOptions::new()).unwrap();
    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    for key in ["objects", "cameras", "world"] {
        assert!(doc.get(key).is_some(), "missing top-level key {key}");
    }

    let cube = &doc["objects"][0];
    let vertex = &cube["vertices"][0];
    for key in ["p", "n"] {
        assert!(vertex.get(key).is_some(), "missing vertex key {key}");
        assert_eq!(vertex[key].as_array().unwrap().len(), 3);
    }

    let face = &cube["faces"][0];
    for key in ["vi", "mat_id", "sm", "n"] {
        assert!(face.get(key).is_some(), "missing face key {key}");
    }
    assert_eq!(face["vi"].as_array().unwrap().len(), 3);
    assert!(face["sm"].is_boolean());
}

#[test]
fn every_face_triangular_with_valid_indices() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tris.jsd");

    export(&cube_scene(), &path, &ExportOptions::new()).unwrap();
    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    let cube = &doc["objects"][0];
    let vertex_count = cube["vertices"].as_array().unwrap().len() as u64;
    let material_count = cube["materials"].as_array().unwrap().len() as i64;

    for face in cube["faces"].as_array().unwrap() {
        let vi = face["vi"].as_array().unwrap();
        assert_eq!(vi.len(), 3);
        for v in vi {
            assert!(v.as_u64().unwrap() < vertex_count);
        }
        let mat_id = face["mat_id"].as_i64().unwrap();
        assert!(mat_id >= 0 && mat_id < material_count);
    }
}

#[test]
fn world_fallback_is_black() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("world.jsd");

    // The default world has no recognized background node.
    export(&cube_scene(), &path, &ExportOptions::new()).unwrap();
    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(doc["world"]["type"], "world");
    assert_eq!(doc["world"]["color"], serde_json::json!([0.0, 0.0, 0.0]));
}

#[test]
fn world_background_color_exported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sky.jsd");

    let mut scene = cube_scene();
    scene.world = World::new(
        "Sky",
        vec![ShaderNode::background(Vec3::new(0.25, 0.5, 1.0), 2.0)],
    );
    export(&scene, &path, &ExportOptions::new()).unwrap();

    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["world"]["name"], "Sky");
    assert_eq!(doc["world"]["color"], serde_json::json!([0.5, 1.0, 2.0]));
}

#[test]
fn unwritable_destination_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.jsd");

    let err = export(&cube_scene(), &path, &ExportOptions::new()).unwrap_err();
    assert!(matches!(err, ExportError::UnwritableDestination { .. }));
    assert!(!path.exists());
}

#[test]
fn degenerate_face_aborts_before_any_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.jsd");

    let mut scene = cube_scene();
    if let jsd_scene::ObjectData::Mesh(mesh) = &mut scene.objects[0].data {
        mesh.add_face(vec![0, 1], 0, false);
    }

    let err = export(&scene, &path, &ExportOptions::new()).unwrap_err();
    assert!(matches!(err, ExportError::Convert(_)));
    assert!(!path.exists());
}
