// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::f64::consts::FRAC_PI_4;

use tricol::collision::scene::CollisionScene;
use tricol::error::SceneError;
use tricol::geometry::point_3::Point3;
use tricol::geometry::point_3::Vector3;
use tricol::geometry::transform::RigidTransform;
use tricol::mesh::surface::TriangleSurface;

/// An axis-aligned closed cube with outward-oriented faces.
fn cube(origin: [f64; 3], size: f64) -> TriangleSurface {
    let mut s = TriangleSurface::new();
    for i in 0..8 {
        s.add_vertex(Point3::new(
            origin[0] + size * ((i & 1) as f64),
            origin[1] + size * (((i >> 1) & 1) as f64),
            origin[2] + size * (((i >> 2) & 1) as f64),
        ));
    }
    let faces = [
        (0, 2, 1),
        (1, 2, 3),
        (4, 5, 6),
        (5, 7, 6),
        (0, 1, 5),
        (0, 5, 4),
        (2, 6, 7),
        (2, 7, 3),
        (0, 4, 6),
        (0, 6, 2),
        (1, 7, 5),
        (1, 3, 7),
    ];
    for (a, b, c) in faces {
        s.add_triangle(a, b, c);
    }
    s
}

/// A single open square patch in the z = `z` plane.
fn open_quad(z: f64) -> TriangleSurface {
    let mut s = TriangleSurface::new();
    let a = s.add_vertex(Point3::new(0.2, 0.2, z));
    let b = s.add_vertex(Point3::new(0.8, 0.2, z));
    let c = s.add_vertex(Point3::new(0.8, 0.8, z));
    let d = s.add_vertex(Point3::new(0.2, 0.8, z));
    s.add_triangle(a, b, c);
    s.add_triangle(a, c, d);
    s
}

fn shift(x: f64, y: f64, z: f64) -> RigidTransform {
    RigidTransform::translation(Vector3::new(x, y, z))
}

#[test]
fn cube_helper_is_closed() {
    assert!(cube([0.0, 0.0, 0.0], 1.0).is_closed());
    assert!(!open_quad(0.0).is_closed());
}

#[test]
fn far_apart_cubes_report_nothing() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let b = cube([10.0, 0.0, 0.0], 1.0);
    let mut scene = CollisionScene::new();
    scene.init([&a, &b]);
    assert_eq!(scene.intersections(0).unwrap(), Vec::<usize>::new());
    assert_eq!(scene.intersections(1).unwrap(), Vec::<usize>::new());
    assert_eq!(scene.intersections_and_inclusions(0).unwrap(), vec![]);
}

#[test]
fn overlapping_cubes_see_each_other() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let b = cube([0.5, 0.5, 0.5], 1.0);
    let mut scene = CollisionScene::new();
    scene.init([&a, &b]);
    assert_eq!(scene.intersections(0).unwrap(), vec![1]);
    assert_eq!(scene.intersections(1).unwrap(), vec![0]);
    assert_eq!(
        scene.intersections_and_inclusions(0).unwrap(),
        vec![(1, false)]
    );
}

#[test]
fn face_to_face_touch_counts_as_intersection() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let b = cube([1.0, 0.0, 0.0], 1.0);
    let mut scene = CollisionScene::new();
    scene.init([&a, &b]);
    assert_eq!(scene.intersections(0).unwrap(), vec![1]);
}

#[test]
fn nested_cubes_are_inclusions_both_ways() {
    let outer = cube([-2.0, -2.0, -2.0], 4.0);
    let inner = cube([-0.5, -0.5, -0.5], 1.0);
    let mut scene = CollisionScene::new();
    scene.init([&outer, &inner]);
    assert_eq!(scene.intersections(0).unwrap(), Vec::<usize>::new());
    assert_eq!(
        scene.intersections_and_inclusions(0).unwrap(),
        vec![(1, true)]
    );
    assert_eq!(
        scene.intersections_and_inclusions(1).unwrap(),
        vec![(0, true)]
    );
}

#[test]
fn open_patch_inside_a_closed_cube() {
    let outer = cube([0.0, 0.0, 0.0], 1.0);
    let patch = open_quad(0.5);
    let mut scene = CollisionScene::new();
    scene.init([&outer, &patch]);
    assert_eq!(scene.intersections(0).unwrap(), Vec::<usize>::new());
    // the closed cube encloses the patch; the nesting is reported from
    // both endpoints of the pair
    assert_eq!(
        scene.intersections_and_inclusions(0).unwrap(),
        vec![(1, true)]
    );
    assert_eq!(
        scene.intersections_and_inclusions(1).unwrap(),
        vec![(0, true)]
    );
}

#[test]
fn two_open_patches_cannot_nest() {
    let a = open_quad(0.0);
    let b = open_quad(1.0);
    let mut scene = CollisionScene::new();
    scene.init([&a, &b]);
    assert_eq!(scene.intersections_and_inclusions(0).unwrap(), vec![]);
}

#[test]
fn motion_updates_answers_without_rebuilding() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let b = cube([0.0, 0.0, 0.0], 1.0);
    let mut scene = CollisionScene::new();
    scene.init([&a, &b]);
    scene.set_transformation(1, shift(5.0, 0.0, 0.0)).unwrap();
    assert_eq!(scene.intersections(0).unwrap(), Vec::<usize>::new());
    scene.set_transformation(1, shift(0.5, 0.0, 0.0)).unwrap();
    assert_eq!(scene.intersections(0).unwrap(), vec![1]);
    scene.set_transformation(1, shift(5.0, 0.0, 0.0)).unwrap();
    assert_eq!(scene.intersections(0).unwrap(), Vec::<usize>::new());
}

#[test]
fn rotation_changes_the_footprint() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let b = cube([0.0, 0.0, 0.0], 1.0);
    let mut scene = CollisionScene::new();
    scene.init([&a, &b]);
    // pushed just clear of the first cube
    scene.set_transformation(1, shift(1.05, 0.0, 0.0)).unwrap();
    assert_eq!(scene.intersections(0).unwrap(), Vec::<usize>::new());
    // the same offset with a 45 degree spin swings a corner back in
    let spun = shift(1.05, 0.0, 0.0).compose(&RigidTransform::rotation_z(FRAC_PI_4));
    assert_eq!(
        scene.set_transformation_and_intersections(1, spun).unwrap(),
        vec![0]
    );
}

#[test]
fn queries_are_idempotent() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let b = cube([0.5, 0.0, 0.0], 1.0);
    let mut scene = CollisionScene::new();
    scene.init([&a, &b]);
    let first = scene.intersections(0).unwrap();
    let second = scene.intersections(0).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec![1]);
}

#[test]
fn removal_shifts_ids_down() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let b = cube([10.0, 0.0, 0.0], 1.0);
    let c = cube([10.5, 0.0, 0.0], 1.0);
    let mut scene = CollisionScene::new();
    scene.init([&a, &b, &c]);
    assert_eq!(scene.intersections(1).unwrap(), vec![2]);
    scene.remove_mesh(0).unwrap();
    assert_eq!(scene.mesh_count(), 2);
    // the former meshes 1 and 2 are now 0 and 1
    assert_eq!(scene.intersections(0).unwrap(), vec![1]);
    assert_eq!(scene.intersections(1).unwrap(), vec![0]);
}

#[test]
fn invalid_ids_are_rejected() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let mut scene = CollisionScene::new();
    scene.init([&a]);
    assert_eq!(
        scene.intersections(5),
        Err(SceneError::InvalidMeshId { id: 5, len: 1 })
    );
    assert_eq!(
        scene.remove_mesh(1),
        Err(SceneError::InvalidMeshId { id: 1, len: 1 })
    );
    assert_eq!(
        scene.set_transformation(3, shift(1.0, 0.0, 0.0)),
        Err(SceneError::InvalidMeshId { id: 3, len: 1 })
    );
    assert!(scene.is_closed(2).is_err());
    assert!(scene.transformation(2).is_err());

    let mut empty = CollisionScene::new();
    empty.init([]);
    assert_eq!(
        empty.intersections(0),
        Err(SceneError::InvalidMeshId { id: 0, len: 0 })
    );
}

#[test]
fn accessors_reflect_the_registry() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let patch = open_quad(0.0);
    let mut scene = CollisionScene::new();
    scene.init([&a, &patch]);
    assert_eq!(scene.mesh_count(), 2);
    assert!(scene.is_closed(0).unwrap());
    assert!(!scene.is_closed(1).unwrap());
    assert_eq!(*scene.transformation(0).unwrap(), RigidTransform::IDENTITY);
    let xf = shift(1.0, 2.0, 3.0);
    scene.set_transformation(0, xf).unwrap();
    assert_eq!(*scene.transformation(0).unwrap(), xf);
}

#[test]
fn add_mesh_assigns_the_next_id() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let b = cube([0.5, 0.0, 0.0], 1.0);
    let mut scene = CollisionScene::new();
    assert_eq!(scene.add_mesh(&a), 0);
    assert_eq!(scene.add_mesh(&b), 1);
    assert_eq!(scene.intersections(0).unwrap(), vec![1]);
}

#[test]
fn init_replaces_previous_contents() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let b = cube([0.5, 0.0, 0.0], 1.0);
    let lone = cube([100.0, 0.0, 0.0], 1.0);
    let mut scene = CollisionScene::new();
    scene.init([&a, &b]);
    scene.init([&lone]);
    assert_eq!(scene.mesh_count(), 1);
    assert_eq!(scene.intersections(0).unwrap(), Vec::<usize>::new());
}

#[test]
fn empty_surface_is_inert() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let nothing = TriangleSurface::new();
    let mut scene = CollisionScene::new();
    scene.init([&a, &nothing]);
    assert!(!scene.is_closed(1).unwrap());
    assert_eq!(scene.intersections(0).unwrap(), Vec::<usize>::new());
    assert_eq!(scene.intersections(1).unwrap(), Vec::<usize>::new());
    assert_eq!(scene.intersections_and_inclusions(0).unwrap(), vec![]);
    assert_eq!(scene.intersections_and_inclusions(1).unwrap(), vec![]);
}

#[test]
fn prefilter_answers_match_the_plain_scene() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let b = cube([0.5, 0.5, 0.5], 1.0);
    let c = cube([10.0, 0.0, 0.0], 1.0);
    let outer = cube([-3.0, -3.0, -3.0], 8.0);

    let mut plain = CollisionScene::new();
    plain.init([&a, &b, &c, &outer]);
    let mut filtered = CollisionScene::with_bbox_prefilter();
    filtered.init([&a, &b, &c, &outer]);

    for id in 0..4 {
        assert_eq!(
            plain.intersections(id).unwrap(),
            filtered.intersections(id).unwrap()
        );
        assert_eq!(
            plain.intersections_and_inclusions(id).unwrap(),
            filtered.intersections_and_inclusions(id).unwrap()
        );
    }

    // stays in agreement across motion and removal
    let xf = shift(0.0, 0.0, 20.0);
    plain.set_transformation(1, xf).unwrap();
    filtered.set_transformation(1, xf).unwrap();
    plain.remove_mesh(2).unwrap();
    filtered.remove_mesh(2).unwrap();
    for id in 0..3 {
        assert_eq!(
            plain.intersections(id).unwrap(),
            filtered.intersections(id).unwrap()
        );
    }
}

#[test]
fn faceless_vertices_still_probe_under_prefilter() {
    // a surface with vertices but no faces has an empty tree and an
    // empty cached box, yet its vertex can still witness an inclusion
    let outer = cube([0.0, 0.0, 0.0], 1.0);
    let mut stray = TriangleSurface::new();
    stray.add_vertex(Point3::new(0.5, 0.5, 0.5));

    let mut plain = CollisionScene::new();
    plain.init([&outer, &stray]);
    let mut filtered = CollisionScene::with_bbox_prefilter();
    filtered.init([&outer, &stray]);

    assert_eq!(
        plain.intersections_and_inclusions(0).unwrap(),
        vec![(1, true)]
    );
    assert_eq!(
        plain.intersections_and_inclusions(1).unwrap(),
        vec![(0, true)]
    );
    for id in 0..2 {
        assert_eq!(
            plain.intersections(id).unwrap(),
            filtered.intersections(id).unwrap()
        );
        assert_eq!(
            plain.intersections_and_inclusions(id).unwrap(),
            filtered.intersections_and_inclusions(id).unwrap()
        );
    }
}

#[test]
fn identity_transform_changes_nothing() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let b = cube([0.5, 0.5, 0.5], 1.0);
    let mut scene = CollisionScene::new();
    scene.init([&a, &b]);
    let before = scene.intersections(0).unwrap();
    let before_incl = scene.intersections_and_inclusions(0).unwrap();

    scene.set_transformation(1, RigidTransform::IDENTITY).unwrap();
    assert_eq!(scene.intersections(0).unwrap(), before);
    assert_eq!(scene.intersections_and_inclusions(0).unwrap(), before_incl);
}

#[test]
fn repeating_a_transform_repeats_the_answer() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let b = cube([5.0, 0.0, 0.0], 1.0);
    let xf = shift(-4.5, 0.0, 0.0);

    let mut once = CollisionScene::new();
    once.init([&a, &b]);
    once.set_transformation(1, xf).unwrap();
    let expected = once.intersections(1).unwrap();
    assert_eq!(expected, vec![0]);

    let mut twice = CollisionScene::new();
    twice.init([&a, &b]);
    twice.set_transformation(1, xf).unwrap();
    let first = twice.intersections(1).unwrap();
    twice.set_transformation(1, xf).unwrap();
    let second = twice.intersections(1).unwrap();
    assert_eq!(first, expected);
    assert_eq!(second, expected);
}

#[test]
fn convenience_calls_match_the_two_step_form() {
    let a = cube([0.0, 0.0, 0.0], 1.0);
    let b = cube([0.0, 0.0, 0.0], 1.0);
    let xf = shift(0.25, 0.25, 0.25);

    let mut two_step = CollisionScene::new();
    two_step.init([&a, &b]);
    two_step.set_transformation(1, xf).unwrap();
    let expected = two_step.intersections(1).unwrap();
    let expected_incl = two_step.intersections_and_inclusions(1).unwrap();

    let mut one_step = CollisionScene::new();
    one_step.init([&a, &b]);
    assert_eq!(
        one_step.set_transformation_and_intersections(1, xf).unwrap(),
        expected
    );
    assert_eq!(
        one_step
            .set_transformation_and_intersections_and_inclusions(1, xf)
            .unwrap(),
        expected_incl
    );
}
