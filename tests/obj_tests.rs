// Host-side tests for the Wavefront OBJ parser.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod obj {
        include!("../src/core/obj.rs");
    }
}

use crate::core::error::ObjError;
use crate::core::obj::parse_obj;

const QUAD: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1 4//1
";

#[test]
fn quad_is_fan_triangulated() {
    let meshes = parse_obj(QUAD).unwrap();
    assert_eq!(meshes.len(), 1);
    let m = &meshes[0];
    assert_eq!(m.vertex_count(), 4);
    assert_eq!(m.indices, vec![0, 1, 2, 0, 2, 3]);
    assert!(m.normals.iter().all(|n| *n == [0.0, 0.0, 1.0]));
    assert!(m.uvs.iter().all(|uv| *uv == [0.0, 0.0]));
}

#[test]
fn negative_indices_count_back_from_the_end() {
    let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n";
    let m = &parse_obj(src).unwrap()[0];
    assert_eq!(m.positions, vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    assert_eq!(m.indices, vec![0, 1, 2]);
}

#[test]
fn groups_split_into_meshes() {
    let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
g a
f 1 2 3
g empty
g b
f 2 4 3
";
    let meshes = parse_obj(src).unwrap();
    let names: Vec<_> = meshes.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(meshes[1].positions[0], [1.0, 0.0, 0.0]);
    assert_eq!(meshes[1].indices, vec![0, 1, 2]);
}

#[test]
fn shared_corners_are_deduplicated() {
    let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nf 1 2 3\nf 2 4 3\n";
    let m = &parse_obj(src).unwrap()[0];
    assert_eq!(m.vertex_count(), 4);
    assert_eq!(m.triangle_count(), 2);
}

#[test]
fn missing_normals_are_computed() {
    let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
    let m = &parse_obj(src).unwrap()[0];
    for n in &m.normals {
        assert!((n[2] - 1.0).abs() < 1e-6, "normal {n:?}");
    }
}

#[test]
fn texcoords_are_carried() {
    let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0.25 0.75\nf 1/1 2/1 3/1\n";
    let m = &parse_obj(src).unwrap()[0];
    assert!(m.uvs.iter().all(|uv| *uv == [0.25, 0.75]));
}

#[test]
fn texcoords_accept_one_to_three_components() {
    let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0.5\nvt 0.1 0.2 0.3\nf 1/1 2/2 3/1\n";
    let m = &parse_obj(src).unwrap()[0];
    assert_eq!(m.uvs, vec![[0.5, 0.0], [0.1, 0.2], [0.5, 0.0]]);
}

#[test]
fn bare_texcoord_is_rejected() {
    let err = parse_obj("vt\n").unwrap_err();
    assert_eq!(
        err,
        ObjError::MissingComponents {
            line: 1,
            keyword: "vt",
            expected: 1
        }
    );
}

#[test]
fn comments_and_unknown_keywords_are_ignored() {
    let src = "\
# exported by hand
mtllib monk.mtl
v 0 0 0 # origin
v 1 0 0
v 0 1 0
usemtl robe
s off
f 1 2 3
";
    let m = &parse_obj(src).unwrap()[0];
    assert_eq!(m.triangle_count(), 1);
}

#[test]
fn short_vertex_reports_line() {
    let err = parse_obj("v 1 2\n").unwrap_err();
    assert_eq!(
        err,
        ObjError::MissingComponents {
            line: 1,
            keyword: "v",
            expected: 3
        }
    );
}

#[test]
fn bad_number_is_rejected() {
    let err = parse_obj("v 0 0 0\nv 1 zero 0\n").unwrap_err();
    assert_eq!(
        err,
        ObjError::InvalidNumber {
            line: 2,
            token: "zero".into()
        }
    );
}

#[test]
fn two_corner_face_is_degenerate() {
    let err = parse_obj("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
    assert_eq!(err, ObjError::DegenerateFace { line: 3, found: 2 });
}

#[test]
fn out_of_range_and_zero_indices_fail() {
    let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\n";
    assert_eq!(
        parse_obj(src).unwrap_err(),
        ObjError::IndexOutOfRange {
            line: 4,
            index: 9,
            available: 3
        }
    );
    let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n";
    assert!(matches!(
        parse_obj(src).unwrap_err(),
        ObjError::IndexOutOfRange { index: 0, .. }
    ));
}

#[test]
fn file_without_faces_is_empty() {
    assert_eq!(parse_obj("").unwrap_err(), ObjError::Empty);
    assert_eq!(parse_obj("v 0 0 0\nv 1 1 1\n").unwrap_err(), ObjError::Empty);
}

#[test]
fn errors_render_with_line_numbers() {
    let msg = ObjError::DegenerateFace { line: 7, found: 1 }.to_string();
    assert!(msg.contains("line 7"));
}
