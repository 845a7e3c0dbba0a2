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

use crate::geometry::point_3::Point3;

/// An axis-aligned bounding box in 3D. All containment/overlap tests are
/// inclusive of the boundary.
#[derive(Clone, Debug)]
pub struct Aabb {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb {
    pub fn new(min: Point3, max: Point3) -> Self {
        Aabb { min, max }
    }

    /// The empty box: identity for `union`, disjoint from everything.
    pub fn empty() -> Self {
        Aabb {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Smallest box containing two points.
    pub fn from_points(a: &Point3, b: &Point3) -> Self {
        Aabb {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub fn from_triangle(tri: &[Point3; 3]) -> Self {
        let mut aabb = Aabb::from_points(&tri[0], &tri[1]);
        aabb.grow(&tri[2]);
        aabb
    }

    pub fn grow(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Does this box intersect `other`? Shared boundary counts.
    pub fn intersects(&self, other: &Aabb) -> bool {
        for axis in 0..3 {
            if self.max.coord(axis) < other.min.coord(axis) {
                return false;
            }
            if other.max.coord(axis) < self.min.coord(axis) {
                return false;
            }
        }
        true
    }

    pub fn contains(&self, p: &Point3) -> bool {
        for axis in 0..3 {
            let c = p.coord(axis);
            if c < self.min.coord(axis) || c > self.max.coord(axis) {
                return false;
            }
        }
        true
    }

    /// Center coordinate along `axis`.
    pub fn center(&self, axis: usize) -> f64 {
        0.5 * (self.min.coord(axis) + self.max.coord(axis))
    }

    /// Axis index with the largest extent.
    pub fn longest_axis(&self) -> usize {
        let mut best = 0;
        let mut best_extent = self.max.x - self.min.x;
        for axis in 1..3 {
            let extent = self.max.coord(axis) - self.min.coord(axis);
            if extent > best_extent {
                best = axis;
                best_extent = extent;
            }
        }
        best
    }

    /// Corner `i` (0..8), bit k of `i` selecting min/max along axis k.
    pub fn corner(&self, i: usize) -> Point3 {
        Point3 {
            x: if i & 1 == 0 { self.min.x } else { self.max.x },
            y: if i & 2 == 0 { self.min.y } else { self.max.y },
            z: if i & 4 == 0 { self.min.z } else { self.max.z },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Aabb;
    use crate::geometry::point_3::Point3;

    #[test]
    fn union_and_intersection() {
        let a = Aabb::from_points(&Point3::new(0.0, 1.0, -1.0), &Point3::new(2.0, -1.0, 3.0));
        assert_eq!(a.min, Point3::new(0.0, -1.0, -1.0));
        assert_eq!(a.max, Point3::new(2.0, 1.0, 3.0));

        let b = Aabb::from_points(&Point3::new(0.5, -0.5, 0.0), &Point3::new(1.5, 0.5, 2.0));
        let u = a.union(&b);
        assert_eq!(u.min, Point3::new(0.0, -1.0, -1.0));
        assert_eq!(u.max, Point3::new(2.0, 1.0, 3.0));

        let c = Aabb::from_points(&Point3::new(3.0, 3.0, 3.0), &Point3::new(4.0, 4.0, 4.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn boundary_contact_counts_as_overlap() {
        let a = Aabb::from_points(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 1.0, 1.0));
        let b = Aabb::from_points(&Point3::new(1.0, 0.0, 0.0), &Point3::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn empty_box_behaves() {
        let e = Aabb::empty();
        let a = Aabb::from_points(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 1.0, 1.0));
        assert!(e.is_empty());
        assert!(!e.intersects(&a));
        assert!(!a.intersects(&e));
        let u = e.union(&a);
        assert_eq!(u.min, a.min);
        assert_eq!(u.max, a.max);
    }

    #[test]
    fn longest_axis_and_corners() {
        let a = Aabb::from_points(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 3.0, 2.0));
        assert_eq!(a.longest_axis(), 1);
        assert_eq!(a.corner(0), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(a.corner(7), Point3::new(1.0, 3.0, 2.0));
        assert_eq!(a.corner(5), Point3::new(1.0, 0.0, 2.0));
    }
}
