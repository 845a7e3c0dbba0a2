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

//! Point-in-closed-surface by ray parity. A segment is shot from the query
//! point to a target guaranteed to lie outside the surface's bounds and
//! the surface crossings are counted with exact predicates. Directions
//! that graze a vertex, edge or plane are rejected and redrawn, so the
//! parity that is finally returned is always unambiguous.

use rand::Rng;

use crate::geometry::aabb::Aabb;
use crate::geometry::point_3::{Point3, Vector3};
use crate::geometry::tri_overlap::{dominant_axes, point_in_triangle_2d};
use crate::kernel::predicates::{Sign, WorldPoint, orient3d};
use crate::numeric::protected::Protector;
use crate::spatial::surface_tree::{Node, SurfaceTree};

/// Where a point lies relative to a closed surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Inside,
    OnBoundary,
    Outside,
}

struct Degenerate;

enum Hit {
    Crossing,
    Boundary,
    Miss,
}

enum Cast {
    Crossings(usize),
    OnBoundary,
}

/// Classify world-space point `p` against the placed surface. The surface
/// must bound a volume; the caller is responsible for checking
/// closedness.
pub fn side_of_surface(tree: &SurfaceTree, p: &Point3) -> Side {
    let _protector = Protector::new();
    let world = tree.world_bounds();
    if world.is_empty() || !world.contains(p) {
        return Side::Outside;
    }

    // Any target further than the far side of the bounds is outside.
    let mut reach = 0.0f64;
    for i in 0..8 {
        reach = reach.max((world.corner(i) - *p).norm());
    }
    let reach = 2.0 * reach + 1.0;

    let mut rng = rand::rng();
    loop {
        let dir = Vector3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        let n = dir.norm();
        if n <= 0.1 {
            continue;
        }
        let q = *p + dir * (reach / n);
        match cast(tree, p, &q) {
            Ok(Cast::OnBoundary) => return Side::OnBoundary,
            Ok(Cast::Crossings(k)) => {
                return if k % 2 == 1 {
                    Side::Inside
                } else {
                    Side::Outside
                };
            }
            Err(Degenerate) => continue,
        }
    }
}

fn cast(tree: &SurfaceTree, p: &Point3, q: &Point3) -> Result<Cast, Degenerate> {
    let Some(root) = tree.root() else {
        return Ok(Cast::Crossings(0));
    };
    let xf = tree.transform();
    let seg = Aabb::from_points(p, q);
    let wp = WorldPoint::fixed(*p);
    let wq = WorldPoint::fixed(*q);

    let mut crossings = 0;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if !xf.world_bounds_of(node.aabb()).intersects(&seg) {
            continue;
        }
        match node {
            Node::Leaf { tri, .. } => {
                let a = WorldPoint::new(xf, tri[0]);
                let b = WorldPoint::new(xf, tri[1]);
                let c = WorldPoint::new(xf, tri[2]);
                match segment_triangle(wp, wq, a, b, c)? {
                    Hit::Boundary => return Ok(Cast::OnBoundary),
                    Hit::Crossing => crossings += 1,
                    Hit::Miss => {}
                }
            }
            Node::Inner { left, right, .. } => {
                stack.push(left);
                stack.push(right);
            }
        }
    }
    Ok(Cast::Crossings(crossings))
}

/// Classify the segment `pq` against triangle `abc`. `Boundary` means the
/// query endpoint `p` itself lies on the triangle. Any grazing contact of
/// the rest of the segment reports `Degenerate` so the caller can redraw
/// the direction.
fn segment_triangle(
    p: WorldPoint,
    q: WorldPoint,
    a: WorldPoint,
    b: WorldPoint,
    c: WorldPoint,
) -> Result<Hit, Degenerate> {
    let sp = orient3d(a, b, c, p);
    if sp == Sign::Zero {
        let (pa, pb, pc) = (a.approx(), b.approx(), c.approx());
        let axes = dominant_axes(&(pb - pa).cross(&(pc - pa)));
        if point_in_triangle_2d(p, a, b, c, axes) {
            return Ok(Hit::Boundary);
        }
        // p is in the plane but outside the triangle; only a segment
        // lying fully in the plane is ambiguous.
        if orient3d(a, b, c, q) == Sign::Zero {
            return Err(Degenerate);
        }
        return Ok(Hit::Miss);
    }
    let sq = orient3d(a, b, c, q);
    if sq == Sign::Zero {
        return Err(Degenerate);
    }
    if sp == sq {
        return Ok(Hit::Miss);
    }

    let s1 = orient3d(p, q, a, b);
    let s2 = orient3d(p, q, b, c);
    let s3 = orient3d(p, q, c, a);
    if s1 == Sign::Zero || s2 == Sign::Zero || s3 == Sign::Zero {
        // the segment pierces an edge or vertex
        return Err(Degenerate);
    }
    if s1 == s2 && s2 == s3 {
        Ok(Hit::Crossing)
    } else {
        Ok(Hit::Miss)
    }
}
