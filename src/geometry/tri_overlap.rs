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

//! Exact triangle-triangle overlap after the Guigue-Devillers test: the
//! answer is derived purely from orientation signs, so touching contact
//! (shared vertex, edge on a face) counts as overlap and no intersection
//! point is ever constructed.

use crate::geometry::point_3::{Point3, Vector3};
use crate::geometry::transform::RigidTransform;
use crate::kernel::predicates::{Sign, WorldPoint, cmp_along_axis, orient2d, orient3d};

/// Do the two rigidly placed triangles intersect in world space?
pub fn tri_tri_overlap(
    t1: &[Point3; 3],
    x1: &RigidTransform,
    t2: &[Point3; 3],
    x2: &RigidTransform,
) -> bool {
    let p1 = WorldPoint::new(x1, t1[0]);
    let q1 = WorldPoint::new(x1, t1[1]);
    let r1 = WorldPoint::new(x1, t1[2]);
    let p2 = WorldPoint::new(x2, t2[0]);
    let q2 = WorldPoint::new(x2, t2[1]);
    let r2 = WorldPoint::new(x2, t2[2]);

    let dp1 = orient3d(p2, q2, r2, p1);
    let dq1 = orient3d(p2, q2, r2, q1);
    let dr1 = orient3d(p2, q2, r2, r1);
    if same_strict_sign(dp1, dq1, dr1) {
        return false;
    }

    let dp2 = orient3d(p1, q1, r1, p2);
    let dq2 = orient3d(p1, q1, r1, q2);
    let dr2 = orient3d(p1, q1, r1, r2);
    if same_strict_sign(dp2, dq2, dr2) {
        return false;
    }

    // Rotate T1 so its first vertex is alone on the positive side of T2's
    // plane, mirroring T2 when needed to keep the sign convention.
    use Sign::{Negative, Positive, Zero};
    match dp1 {
        Positive => {
            if dq1 == Positive {
                cross_plane(r1, p1, q1, p2, r2, q2, dp2, dr2, dq2)
            } else if dr1 == Positive {
                cross_plane(q1, r1, p1, p2, r2, q2, dp2, dr2, dq2)
            } else {
                cross_plane(p1, q1, r1, p2, q2, r2, dp2, dq2, dr2)
            }
        }
        Negative => {
            if dq1 == Negative {
                cross_plane(r1, p1, q1, p2, q2, r2, dp2, dq2, dr2)
            } else if dr1 == Negative {
                cross_plane(q1, r1, p1, p2, q2, r2, dp2, dq2, dr2)
            } else {
                cross_plane(p1, q1, r1, p2, r2, q2, dp2, dr2, dq2)
            }
        }
        Zero => match dq1 {
            Negative => {
                if dr1 != Negative {
                    cross_plane(q1, r1, p1, p2, r2, q2, dp2, dr2, dq2)
                } else {
                    cross_plane(p1, q1, r1, p2, q2, r2, dp2, dq2, dr2)
                }
            }
            Positive => {
                if dr1 == Positive {
                    cross_plane(p1, q1, r1, p2, r2, q2, dp2, dr2, dq2)
                } else {
                    cross_plane(q1, r1, p1, p2, q2, r2, dp2, dq2, dr2)
                }
            }
            Zero => match dr1 {
                Positive => cross_plane(r1, p1, q1, p2, q2, r2, dp2, dq2, dr2),
                Negative => cross_plane(r1, p1, q1, p2, r2, q2, dp2, dr2, dq2),
                Zero => coplanar_overlap(p1, q1, r1, p2, q2, r2),
            },
        },
    }
}

fn same_strict_sign(a: Sign, b: Sign, c: Sign) -> bool {
    (a == Sign::Positive && b == Sign::Positive && c == Sign::Positive)
        || (a == Sign::Negative && b == Sign::Negative && c == Sign::Negative)
}

/// Both triangles straddle each other's plane and `p1` is the lone vertex
/// on the positive side of T2's plane. Rotate T2 likewise, then test
/// whether the two plane-crossing intervals overlap.
#[allow(clippy::too_many_arguments)]
fn cross_plane(
    p1: WorldPoint,
    q1: WorldPoint,
    r1: WorldPoint,
    p2: WorldPoint,
    q2: WorldPoint,
    r2: WorldPoint,
    dp2: Sign,
    dq2: Sign,
    dr2: Sign,
) -> bool {
    use Sign::{Negative, Positive, Zero};
    match dp2 {
        Positive => {
            if dq2 == Positive {
                interval_overlap(p1, r1, q1, r2, p2, q2)
            } else if dr2 == Positive {
                interval_overlap(p1, r1, q1, q2, r2, p2)
            } else {
                interval_overlap(p1, q1, r1, p2, q2, r2)
            }
        }
        Negative => {
            if dq2 == Negative {
                interval_overlap(p1, q1, r1, r2, p2, q2)
            } else if dr2 == Negative {
                interval_overlap(p1, q1, r1, q2, r2, p2)
            } else {
                interval_overlap(p1, r1, q1, p2, q2, r2)
            }
        }
        Zero => match dq2 {
            Negative => {
                if dr2 != Negative {
                    interval_overlap(p1, r1, q1, q2, r2, p2)
                } else {
                    interval_overlap(p1, q1, r1, p2, q2, r2)
                }
            }
            Positive => {
                if dr2 == Positive {
                    interval_overlap(p1, r1, q1, p2, q2, r2)
                } else {
                    interval_overlap(p1, q1, r1, q2, r2, p2)
                }
            }
            Zero => match dr2 {
                Positive => interval_overlap(p1, q1, r1, r2, p2, q2),
                Negative => interval_overlap(p1, r1, q1, r2, p2, q2),
                Zero => coplanar_overlap(p1, q1, r1, p2, q2, r2),
            },
        },
    }
}

/// Canonical-form decision: the segments cut out of the common line by
/// the two triangles overlap iff neither of these orientations is
/// strictly positive.
fn interval_overlap(
    p1: WorldPoint,
    q1: WorldPoint,
    r1: WorldPoint,
    p2: WorldPoint,
    q2: WorldPoint,
    r2: WorldPoint,
) -> bool {
    if orient3d(q1, p2, p1, q2) == Sign::Positive {
        return false;
    }
    orient3d(p1, p2, r1, r2) != Sign::Positive
}

/// The projection axes that keep a triangle with normal `n` non-degenerate:
/// drop the dominant component.
pub(crate) fn dominant_axes(n: &Vector3) -> (usize, usize) {
    let (ax, ay, az) = (n.x.abs(), n.y.abs(), n.z.abs());
    if ax >= ay && ax >= az {
        (1, 2)
    } else if ay >= az {
        (0, 2)
    } else {
        (0, 1)
    }
}

/// Is `p` inside (or on the boundary of) triangle `abc` once everything is
/// projected onto `axes`? The triangle may have either winding.
pub(crate) fn point_in_triangle_2d(
    p: WorldPoint,
    a: WorldPoint,
    b: WorldPoint,
    c: WorldPoint,
    axes: (usize, usize),
) -> bool {
    let s = orient2d(a, b, c, axes);
    if s == Sign::Zero {
        return false;
    }
    for (u, v) in [(a, b), (b, c), (c, a)] {
        let d = orient2d(u, v, p, axes);
        if d != s && d != Sign::Zero {
            return false;
        }
    }
    true
}

fn coplanar_overlap(
    p1: WorldPoint,
    q1: WorldPoint,
    r1: WorldPoint,
    p2: WorldPoint,
    q2: WorldPoint,
    r2: WorldPoint,
) -> bool {
    let (a, b, c) = (p1.approx(), q1.approx(), r1.approx());
    let n = (b - a).cross(&(c - a));
    let axes = dominant_axes(&n);

    for p in [p1, q1, r1] {
        if point_in_triangle_2d(p, p2, q2, r2, axes) {
            return true;
        }
    }
    for p in [p2, q2, r2] {
        if point_in_triangle_2d(p, p1, q1, r1, axes) {
            return true;
        }
    }
    for (a, b) in [(p1, q1), (q1, r1), (r1, p1)] {
        for (c, d) in [(p2, q2), (q2, r2), (r2, p2)] {
            if segments_intersect_2d(a, b, c, d, axes) {
                return true;
            }
        }
    }
    false
}

fn segments_intersect_2d(
    a: WorldPoint,
    b: WorldPoint,
    c: WorldPoint,
    d: WorldPoint,
    axes: (usize, usize),
) -> bool {
    use Sign::Zero;
    let d1 = orient2d(c, d, a, axes);
    let d2 = orient2d(c, d, b, axes);
    let d3 = orient2d(a, b, c, axes);
    let d4 = orient2d(a, b, d, axes);

    if d1 != Zero && d2 != Zero && d1 != d2 && d3 != Zero && d4 != Zero && d3 != d4 {
        return true;
    }
    (d1 == Zero && on_segment_2d(c, d, a, axes))
        || (d2 == Zero && on_segment_2d(c, d, b, axes))
        || (d3 == Zero && on_segment_2d(a, b, c, axes))
        || (d4 == Zero && on_segment_2d(a, b, d, axes))
}

/// `p` is collinear with segment `ab` in the projection; is it between the
/// endpoints? Compared along the projection axis where `ab` has the larger
/// extent, so a degenerate comparison axis is never picked.
fn on_segment_2d(a: WorldPoint, b: WorldPoint, p: WorldPoint, axes: (usize, usize)) -> bool {
    use std::cmp::Ordering;
    let (pa, pb) = (a.approx(), b.approx());
    let span_x = (pa.coord(axes.0) - pb.coord(axes.0)).abs();
    let span_y = (pa.coord(axes.1) - pb.coord(axes.1)).abs();
    let axis = if span_x >= span_y { axes.0 } else { axes.1 };

    let pa_cmp = cmp_along_axis(p, a, axis);
    let pb_cmp = cmp_along_axis(p, b, axis);
    !(pa_cmp == Ordering::Less && pb_cmp == Ordering::Less)
        && !(pa_cmp == Ordering::Greater && pb_cmp == Ordering::Greater)
}
