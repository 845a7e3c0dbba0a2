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

//! An AABB tree over a triangle surface, built once in the surface's local
//! frame and carried around by a mutable rigid placement. Moving the
//! surface never rebuilds the tree; node boxes are mapped into world space
//! on the fly during traversal.

use std::cmp::Ordering;

use crate::geometry::aabb::Aabb;
use crate::geometry::point_3::Point3;
use crate::geometry::transform::RigidTransform;
use crate::geometry::tri_overlap::tri_tri_overlap;
use crate::mesh::surface::TriangleSurface;

pub(crate) enum Node {
    Leaf {
        aabb: Aabb,
        tri: [Point3; 3],
    },
    Inner {
        aabb: Aabb,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub(crate) fn aabb(&self) -> &Aabb {
        match self {
            Node::Leaf { aabb, .. } => aabb,
            Node::Inner { aabb, .. } => aabb,
        }
    }
}

/// A rigidly placed triangle surface, indexed for fast overlap queries.
pub struct SurfaceTree {
    root: Option<Box<Node>>,
    xf: RigidTransform,
}

impl SurfaceTree {
    /// Build the tree in the surface's local frame with the identity
    /// placement. An empty surface yields an empty tree.
    pub fn build(surface: &TriangleSurface) -> Self {
        let mut items: Vec<([Point3; 3], Aabb)> = (0..surface.faces().len())
            .map(|f| {
                let tri = surface.face_points(f);
                let aabb = Aabb::from_triangle(&tri);
                (tri, aabb)
            })
            .collect();
        let root = if items.is_empty() {
            None
        } else {
            Some(build_node(&mut items))
        };
        SurfaceTree {
            root,
            xf: RigidTransform::IDENTITY,
        }
    }

    pub fn set_transform(&mut self, xf: RigidTransform) {
        self.xf = xf;
    }

    pub fn transform(&self) -> &RigidTransform {
        &self.xf
    }

    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Bounds of the whole surface in its local frame.
    pub fn local_bounds(&self) -> Aabb {
        match &self.root {
            Some(node) => node.aabb().clone(),
            None => Aabb::empty(),
        }
    }

    /// Conservative bounds of the placed surface in world space.
    pub fn world_bounds(&self) -> Aabb {
        self.xf.world_bounds_of(&self.local_bounds())
    }

    /// Do the two placed surfaces intersect anywhere? Exact at the
    /// triangle level; the box tests only prune.
    pub fn do_intersect(&self, other: &SurfaceTree) -> bool {
        match (&self.root, &other.root) {
            (Some(a), Some(b)) => pair_overlap(a, &self.xf, b, &other.xf),
            _ => false,
        }
    }
}

fn build_node(items: &mut [([Point3; 3], Aabb)]) -> Box<Node> {
    if items.len() == 1 {
        let (tri, aabb) = items[0].clone();
        return Box::new(Node::Leaf { aabb, tri });
    }
    let mut bounds = Aabb::empty();
    for (_, aabb) in items.iter() {
        bounds = bounds.union(aabb);
    }
    let axis = bounds.longest_axis();
    let mid = items.len() / 2;
    items.select_nth_unstable_by(mid, |a, b| {
        a.1.center(axis)
            .partial_cmp(&b.1.center(axis))
            .unwrap_or(Ordering::Equal)
    });
    let (lo, hi) = items.split_at_mut(mid);
    let left = build_node(lo);
    let right = build_node(hi);
    Box::new(Node::Inner {
        aabb: bounds,
        left,
        right,
    })
}

fn pair_overlap(a: &Node, xa: &RigidTransform, b: &Node, xb: &RigidTransform) -> bool {
    if !xa
        .world_bounds_of(a.aabb())
        .intersects(&xb.world_bounds_of(b.aabb()))
    {
        return false;
    }
    match (a, b) {
        (Node::Leaf { tri: ta, .. }, Node::Leaf { tri: tb, .. }) => {
            tri_tri_overlap(ta, xa, tb, xb)
        }
        (Node::Leaf { .. }, Node::Inner { left, right, .. }) => {
            pair_overlap(a, xa, left, xb) || pair_overlap(a, xa, right, xb)
        }
        (Node::Inner { left, right, .. }, _) => {
            pair_overlap(left, xa, b, xb) || pair_overlap(right, xa, b, xb)
        }
    }
}
