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

use crate::geometry::aabb::Aabb;
use crate::geometry::point_3::{Point3, Vector3};
use crate::numeric::exact::Exact;
use crate::numeric::interval::Interval;

/// A rigid transformation: rotation followed by translation. No scale, no
/// shear. Applying one never touches the geometry it is applied to; the
/// same local data can be placed anywhere by swapping the transform.
///
/// The matrix entries are doubles and are treated as exact inputs by the
/// predicates: `apply_exact` composes the placement into the predicate's
/// rational expression instead of rounding a transformed point first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RigidTransform {
    m: [[f64; 3]; 3],
    t: [f64; 3],
}

impl RigidTransform {
    pub const IDENTITY: RigidTransform = RigidTransform {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        t: [0.0, 0.0, 0.0],
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Build from an explicit rotation matrix (rows) and a translation.
    /// The caller is responsible for `rotation` actually being a rotation.
    pub fn from_parts(rotation: [[f64; 3]; 3], translation: Vector3) -> Self {
        RigidTransform {
            m: rotation,
            t: [translation.x, translation.y, translation.z],
        }
    }

    pub fn translation(v: Vector3) -> Self {
        RigidTransform {
            m: Self::IDENTITY.m,
            t: [v.x, v.y, v.z],
        }
    }

    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        RigidTransform {
            m: [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]],
            t: [0.0, 0.0, 0.0],
        }
    }

    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        RigidTransform {
            m: [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]],
            t: [0.0, 0.0, 0.0],
        }
    }

    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        RigidTransform {
            m: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
            t: [0.0, 0.0, 0.0],
        }
    }

    /// `self ∘ rhs`: apply `rhs` first, then `self`.
    pub fn compose(&self, rhs: &RigidTransform) -> RigidTransform {
        let mut m = [[0.0; 3]; 3];
        let mut t = [0.0; 3];
        for i in 0..3 {
            for j in 0..3 {
                m[i][j] = self.m[i][0] * rhs.m[0][j]
                    + self.m[i][1] * rhs.m[1][j]
                    + self.m[i][2] * rhs.m[2][j];
            }
            t[i] = self.m[i][0] * rhs.t[0]
                + self.m[i][1] * rhs.t[1]
                + self.m[i][2] * rhs.t[2]
                + self.t[i];
        }
        RigidTransform { m, t }
    }

    /// Rounded double application; fine for constructions, not for
    /// predicates.
    pub fn apply(&self, p: &Point3) -> Point3 {
        let v = [p.x, p.y, p.z];
        let mut out = [0.0; 3];
        for i in 0..3 {
            out[i] =
                self.m[i][0] * v[0] + self.m[i][1] * v[1] + self.m[i][2] * v[2] + self.t[i];
        }
        Point3::new(out[0], out[1], out[2])
    }

    /// Application with rounding tracked in the radius.
    pub fn apply_interval(&self, p: &Point3) -> [Interval; 3] {
        let v = [
            Interval::from_f64(p.x),
            Interval::from_f64(p.y),
            Interval::from_f64(p.z),
        ];
        let mut out = [Interval::from_f64(0.0); 3];
        for i in 0..3 {
            out[i] = Interval::from_f64(self.m[i][0])
                .mul(v[0])
                .add(Interval::from_f64(self.m[i][1]).mul(v[1]))
                .add(Interval::from_f64(self.m[i][2]).mul(v[2]))
                .add(Interval::from_f64(self.t[i]));
        }
        out
    }

    /// Exact application over the rationals; the double entries convert
    /// exactly.
    pub fn apply_exact(&self, p: &Point3) -> [Exact; 3] {
        let v = [
            Exact::from_f64(p.x),
            Exact::from_f64(p.y),
            Exact::from_f64(p.z),
        ];
        let mut out = [Exact::zero(), Exact::zero(), Exact::zero()];
        for i in 0..3 {
            let a = &Exact::from_f64(self.m[i][0]) * &v[0];
            let b = &Exact::from_f64(self.m[i][1]) * &v[1];
            let c = &Exact::from_f64(self.m[i][2]) * &v[2];
            out[i] = &(&(&a + &b) + &c) + &Exact::from_f64(self.t[i]);
        }
        out
    }

    /// Conservative world-space box of a local-space box: every corner is
    /// pushed through interval arithmetic and the result is rounded
    /// outward, so the true image is always contained.
    pub fn world_bounds_of(&self, aabb: &Aabb) -> Aabb {
        if aabb.is_empty() {
            return Aabb::empty();
        }
        let mut out = Aabb::empty();
        for i in 0..8 {
            let corner = aabb.corner(i);
            let iv = self.apply_interval(&corner);
            out.grow(&Point3::new(iv[0].lo(), iv[1].lo(), iv[2].lo()));
            out.grow(&Point3::new(iv[0].hi(), iv[1].hi(), iv[2].hi()));
        }
        out
    }
}
