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

use tricol::geometry::point_3::{Point3, Vector3};
use tricol::geometry::transform::RigidTransform;
use tricol::mesh::surface::TriangleSurface;
use tricol::spatial::side_of::{Side, side_of_surface};
use tricol::spatial::surface_tree::SurfaceTree;

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

#[test]
fn cube_classification() {
    let surface = cube([0.0, 0.0, 0.0], 1.0);
    assert!(surface.is_closed());
    let tree = SurfaceTree::build(&surface);

    assert_eq!(
        side_of_surface(&tree, &Point3::new(0.5, 0.5, 0.5)),
        Side::Inside
    );
    assert_eq!(
        side_of_surface(&tree, &Point3::new(2.0, 0.5, 0.5)),
        Side::Outside
    );
    assert_eq!(
        side_of_surface(&tree, &Point3::new(-0.001, 0.5, 0.5)),
        Side::Outside
    );
}

#[test]
fn surface_points_are_on_boundary() {
    let tree = SurfaceTree::build(&cube([0.0, 0.0, 0.0], 1.0));
    // interior of a face
    assert_eq!(
        side_of_surface(&tree, &Point3::new(0.3, 0.4, 0.0)),
        Side::OnBoundary
    );
    // a cube vertex
    assert_eq!(
        side_of_surface(&tree, &Point3::new(1.0, 1.0, 1.0)),
        Side::OnBoundary
    );
    // on an edge
    assert_eq!(
        side_of_surface(&tree, &Point3::new(0.5, 0.0, 0.0)),
        Side::OnBoundary
    );
}

#[test]
fn points_close_to_a_face_stay_classified() {
    let tree = SurfaceTree::build(&cube([0.0, 0.0, 0.0], 1.0));
    assert_eq!(
        side_of_surface(&tree, &Point3::new(0.5, 0.5, 1e-12)),
        Side::Inside
    );
    assert_eq!(
        side_of_surface(&tree, &Point3::new(0.5, 0.5, -1e-12)),
        Side::Outside
    );
}

#[test]
fn classification_follows_the_placement() {
    let mut tree = SurfaceTree::build(&cube([0.0, 0.0, 0.0], 1.0));
    let xf = RigidTransform::translation(Vector3::new(4.0, 0.0, 0.0))
        .compose(&RigidTransform::rotation_z(FRAC_PI_4));
    tree.set_transform(xf);

    // image of the local center under the placement
    let center = xf.apply(&Point3::new(0.5, 0.5, 0.5));
    assert_eq!(side_of_surface(&tree, &center), Side::Inside);
    assert_eq!(
        side_of_surface(&tree, &Point3::new(0.5, 0.5, 0.5)),
        Side::Outside
    );
}

#[test]
fn repeated_queries_agree() {
    // the probe direction is random; the parity must not be
    let tree = SurfaceTree::build(&cube([0.0, 0.0, 0.0], 1.0));
    for _ in 0..50 {
        assert_eq!(
            side_of_surface(&tree, &Point3::new(0.25, 0.75, 0.5)),
            Side::Inside
        );
    }
}
