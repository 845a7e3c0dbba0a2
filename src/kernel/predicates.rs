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

//! Filtered orientation predicates over rigidly placed points.
//!
//! Every predicate is exact: when a protected scope is active the interval
//! filter answers the easy cases, and the rational fallback settles the
//! rest. Outside a protected scope the exact path runs unconditionally.

use std::cmp::Ordering;

use crate::geometry::point_3::Point3;
use crate::geometry::transform::RigidTransform;
use crate::numeric::exact::Exact;
use crate::numeric::interval::Interval;
use crate::numeric::protected;

/// Sign of a geometric predicate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    pub fn from_ordering(o: Ordering) -> Sign {
        match o {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }

    fn from_certain(s: i8) -> Sign {
        if s > 0 { Sign::Positive } else { Sign::Negative }
    }
}

/// A surface-local point paired with the rigid frame that places it in
/// world space. The frame application is evaluated inside the predicate,
/// so the exact path sees one composed rational expression instead of a
/// pre-rounded point.
#[derive(Copy, Clone)]
pub struct WorldPoint<'a> {
    frame: &'a RigidTransform,
    local: Point3,
}

impl<'a> WorldPoint<'a> {
    pub fn new(frame: &'a RigidTransform, local: Point3) -> Self {
        WorldPoint { frame, local }
    }

    /// A point already expressed in world coordinates.
    pub fn fixed(p: Point3) -> WorldPoint<'static> {
        WorldPoint {
            frame: &RigidTransform::IDENTITY,
            local: p,
        }
    }

    pub fn approx(&self) -> Point3 {
        self.frame.apply(&self.local)
    }

    fn interval(&self) -> [Interval; 3] {
        self.frame.apply_interval(&self.local)
    }

    fn exact(&self) -> [Exact; 3] {
        self.frame.apply_exact(&self.local)
    }
}

/// Orientation of `s` relative to the plane through `p`, `q`, `r`:
/// positive when `(q-p) × (r-p) · (s-p)` is positive.
pub fn orient3d(p: WorldPoint, q: WorldPoint, r: WorldPoint, s: WorldPoint) -> Sign {
    if protected::is_active()
        && let Some(sign) =
            orient3d_interval(&p.interval(), &q.interval(), &r.interval(), &s.interval())
    {
        return sign;
    }
    orient3d_exact(&p.exact(), &q.exact(), &r.exact(), &s.exact())
}

/// 2D orientation of the three points projected onto coordinate axes
/// `(ax, ay)`.
pub fn orient2d(p: WorldPoint, q: WorldPoint, r: WorldPoint, axes: (usize, usize)) -> Sign {
    let (ax, ay) = axes;
    if protected::is_active() {
        let (pi, qi, ri) = (p.interval(), q.interval(), r.interval());
        let det = qi[ax]
            .sub(pi[ax])
            .mul(ri[ay].sub(pi[ay]))
            .sub(qi[ay].sub(pi[ay]).mul(ri[ax].sub(pi[ax])));
        if let Some(s) = det.sign_if_certain() {
            return Sign::from_certain(s);
        }
    }
    let (pe, qe, re) = (p.exact(), q.exact(), r.exact());
    let det = &(&(&qe[ax] - &pe[ax]) * &(&re[ay] - &pe[ay]))
        - &(&(&qe[ay] - &pe[ay]) * &(&re[ax] - &pe[ax]));
    Sign::from_ordering(det.cmp0())
}

/// Compare two world points along one coordinate axis.
pub fn cmp_along_axis(p: WorldPoint, q: WorldPoint, axis: usize) -> Ordering {
    if protected::is_active() {
        let d = p.interval()[axis].sub(q.interval()[axis]);
        if let Some(s) = d.sign_if_certain() {
            return if s > 0 { Ordering::Greater } else { Ordering::Less };
        }
    }
    p.exact()[axis].cmp(&q.exact()[axis])
}

fn orient3d_interval(
    a: &[Interval; 3],
    b: &[Interval; 3],
    c: &[Interval; 3],
    d: &[Interval; 3],
) -> Option<Sign> {
    let ab = sub_i(b, a);
    let ac = sub_i(c, a);
    let ad = sub_i(d, a);
    let n = cross_i(&ab, &ac);
    let det = n[0].mul(ad[0]).add(n[1].mul(ad[1])).add(n[2].mul(ad[2]));
    det.sign_if_certain().map(Sign::from_certain)
}

fn orient3d_exact(a: &[Exact; 3], b: &[Exact; 3], c: &[Exact; 3], d: &[Exact; 3]) -> Sign {
    let ab = sub_e(b, a);
    let ac = sub_e(c, a);
    let ad = sub_e(d, a);
    let n = cross_e(&ab, &ac);
    let det = &(&(&n[0] * &ad[0]) + &(&n[1] * &ad[1])) + &(&n[2] * &ad[2]);
    Sign::from_ordering(det.cmp0())
}

fn sub_i(u: &[Interval; 3], v: &[Interval; 3]) -> [Interval; 3] {
    [u[0].sub(v[0]), u[1].sub(v[1]), u[2].sub(v[2])]
}

fn cross_i(u: &[Interval; 3], v: &[Interval; 3]) -> [Interval; 3] {
    [
        u[1].mul(v[2]).sub(u[2].mul(v[1])),
        u[2].mul(v[0]).sub(u[0].mul(v[2])),
        u[0].mul(v[1]).sub(u[1].mul(v[0])),
    ]
}

fn sub_e(u: &[Exact; 3], v: &[Exact; 3]) -> [Exact; 3] {
    [&u[0] - &v[0], &u[1] - &v[1], &u[2] - &v[2]]
}

fn cross_e(u: &[Exact; 3], v: &[Exact; 3]) -> [Exact; 3] {
    [
        &(&u[1] * &v[2]) - &(&u[2] * &v[1]),
        &(&u[2] * &v[0]) - &(&u[0] * &v[2]),
        &(&u[0] * &v[1]) - &(&u[1] * &v[0]),
    ]
}
