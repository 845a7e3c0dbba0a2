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

use std::collections::HashMap;

use crate::geometry::point_3::Point3;

/// An indexed triangle soup in its own local frame. The surface itself is
/// immutable once registered; placement happens through a rigid transform
/// kept elsewhere.
#[derive(Clone, Debug, Default)]
pub struct TriangleSurface {
    vertices: Vec<Point3>,
    faces: Vec<[usize; 3]>,
}

impl TriangleSurface {
    pub fn new() -> Self {
        TriangleSurface::default()
    }

    pub fn from_parts(vertices: Vec<Point3>, faces: Vec<[usize; 3]>) -> Self {
        TriangleSurface { vertices, faces }
    }

    pub fn add_vertex(&mut self, p: Point3) -> usize {
        self.vertices.push(p);
        self.vertices.len() - 1
    }

    pub fn add_triangle(&mut self, a: usize, b: usize, c: usize) {
        self.faces.push([a, b, c]);
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Corner points of face `f` in local coordinates.
    pub fn face_points(&self, f: usize) -> [Point3; 3] {
        let [a, b, c] = self.faces[f];
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }

    /// Does this surface bound a volume? True when it is non-empty, every
    /// directed edge occurs exactly once, and every directed edge is
    /// matched by its reverse. Consistently oriented watertight surfaces
    /// pass; open patches, non-manifold edges and flipped faces do not.
    pub fn is_closed(&self) -> bool {
        if self.faces.is_empty() {
            return false;
        }
        let mut directed: HashMap<(usize, usize), usize> = HashMap::new();
        for [a, b, c] in &self.faces {
            for (u, v) in [(*a, *b), (*b, *c), (*c, *a)] {
                *directed.entry((u, v)).or_insert(0) += 1;
            }
        }
        directed
            .iter()
            .all(|(&(u, v), &n)| n == 1 && directed.contains_key(&(v, u)))
    }
}
