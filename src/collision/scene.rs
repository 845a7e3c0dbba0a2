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

//! A registry of rigidly placed triangle surfaces with pairwise
//! collision and containment queries. Surfaces are indexed once at
//! registration; moving one only swaps its transform. Mesh ids are
//! positional: removing a mesh shifts every id above it down by one.

use crate::error::SceneError;
use crate::geometry::aabb::Aabb;
use crate::geometry::transform::RigidTransform;
use crate::mesh::surface::TriangleSurface;
use crate::numeric::protected::Protector;
use crate::spatial::side_of::{Side, side_of_surface};
use crate::spatial::surface_tree::SurfaceTree;

/// The collision scene. Borrows the registered surfaces; owns one tree,
/// one closedness flag and one cached world box per mesh, kept in
/// parallel vectors addressed by mesh id.
pub struct CollisionScene<'a> {
    surfaces: Vec<&'a TriangleSurface>,
    trees: Vec<SurfaceTree>,
    closed: Vec<bool>,
    boxes: Vec<Aabb>,
    boxes_valid: Vec<bool>,
    prefilter: bool,
}

impl<'a> CollisionScene<'a> {
    /// An empty scene. Queries walk both trees for every candidate pair.
    pub fn new() -> Self {
        CollisionScene {
            surfaces: Vec::new(),
            trees: Vec::new(),
            closed: Vec::new(),
            boxes: Vec::new(),
            boxes_valid: Vec::new(),
            prefilter: false,
        }
    }

    /// An empty scene that screens candidate pairs through cached world
    /// boxes before any tree is traversed. Same answers, fewer
    /// traversals when most meshes are far apart.
    pub fn with_bbox_prefilter() -> Self {
        CollisionScene {
            prefilter: true,
            ..CollisionScene::new()
        }
    }

    /// Drop everything and register the given surfaces in order, each at
    /// the identity placement.
    pub fn init<I>(&mut self, surfaces: I)
    where
        I: IntoIterator<Item = &'a TriangleSurface>,
    {
        self.surfaces.clear();
        self.trees.clear();
        self.closed.clear();
        self.boxes.clear();
        self.boxes_valid.clear();
        for s in surfaces {
            self.add_mesh(s);
        }
    }

    /// Register a surface at the identity placement and return its id.
    /// Closedness is classified once, here.
    pub fn add_mesh(&mut self, surface: &'a TriangleSurface) -> usize {
        let tree = SurfaceTree::build(surface);
        self.closed.push(surface.is_closed());
        self.boxes.push(tree.world_bounds());
        self.boxes_valid.push(true);
        self.trees.push(tree);
        self.surfaces.push(surface);
        self.trees.len() - 1
    }

    /// Unregister mesh `id`. Every id above it shifts down by one.
    pub fn remove_mesh(&mut self, id: usize) -> Result<(), SceneError> {
        self.check_id(id)?;
        self.surfaces.remove(id);
        self.trees.remove(id);
        self.closed.remove(id);
        // the box cache is no longer aligned past `id`; shrink it and
        // rebuild lazily on the next prefiltered query
        let n = self.trees.len();
        self.boxes.truncate(n);
        self.boxes_valid.truncate(n);
        self.boxes_valid.fill(false);
        Ok(())
    }

    /// Move mesh `id` to a new placement. No geometry is touched and no
    /// tree is rebuilt.
    pub fn set_transformation(
        &mut self,
        id: usize,
        xf: RigidTransform,
    ) -> Result<(), SceneError> {
        self.check_id(id)?;
        self.trees[id].set_transform(xf);
        self.boxes_valid[id] = false;
        Ok(())
    }

    /// Ids of all meshes whose surface intersects the surface of mesh
    /// `id`, in ascending order. Touching contact counts. The queried
    /// mesh itself is never reported.
    pub fn intersections(&mut self, id: usize) -> Result<Vec<usize>, SceneError> {
        self.check_id(id)?;
        let _protector = Protector::new();
        if self.prefilter {
            self.refresh_boxes();
        }
        let mut out = Vec::new();
        for k in 0..self.trees.len() {
            if k == id {
                continue;
            }
            if self.prefilter_skips(id, k) {
                continue;
            }
            if self.trees[id].do_intersect(&self.trees[k]) {
                out.push(k);
            }
        }
        Ok(out)
    }

    /// Like [`intersections`](Self::intersections), but each reported id
    /// carries a flag: `false` for surface intersection, `true` when the
    /// two surfaces are disjoint and one mesh lies strictly inside the
    /// other. Nesting either way round is reported; it is only detected
    /// when the enclosing mesh is closed.
    ///
    /// For a disjoint pair one vertex decides: a rigid motion cannot move
    /// a single vertex across a surface it does not intersect, so the
    /// vertex's side is the whole mesh's side.
    pub fn intersections_and_inclusions(
        &mut self,
        id: usize,
    ) -> Result<Vec<(usize, bool)>, SceneError> {
        self.check_id(id)?;
        let _protector = Protector::new();
        if self.prefilter {
            self.refresh_boxes();
        }
        let mut out = Vec::new();
        for k in 0..self.trees.len() {
            if k == id {
                continue;
            }
            // sound to skip on disjoint boxes: a nested mesh's box is
            // inside the enclosing mesh's box
            if self.prefilter_skips(id, k) {
                continue;
            }
            if self.trees[id].do_intersect(&self.trees[k]) {
                out.push((k, false));
                continue;
            }
            if self.closed[id]
                && let Some(v) = self.surfaces[k].vertices().first()
            {
                let probe = self.trees[k].transform().apply(v);
                if side_of_surface(&self.trees[id], &probe) == Side::Inside {
                    out.push((k, true));
                    continue;
                }
            }
            if self.closed[k]
                && let Some(v) = self.surfaces[id].vertices().first()
            {
                let probe = self.trees[id].transform().apply(v);
                if side_of_surface(&self.trees[k], &probe) == Side::Inside {
                    out.push((k, true));
                }
            }
        }
        Ok(out)
    }

    /// Move mesh `id`, then report its intersections.
    pub fn set_transformation_and_intersections(
        &mut self,
        id: usize,
        xf: RigidTransform,
    ) -> Result<Vec<usize>, SceneError> {
        self.set_transformation(id, xf)?;
        self.intersections(id)
    }

    /// Move mesh `id`, then report its intersections and inclusions.
    pub fn set_transformation_and_intersections_and_inclusions(
        &mut self,
        id: usize,
        xf: RigidTransform,
    ) -> Result<Vec<(usize, bool)>, SceneError> {
        self.set_transformation(id, xf)?;
        self.intersections_and_inclusions(id)
    }

    pub fn mesh_count(&self) -> usize {
        self.trees.len()
    }

    /// Was mesh `id` classified as bounding a volume at registration?
    pub fn is_closed(&self, id: usize) -> Result<bool, SceneError> {
        self.check_id(id)?;
        Ok(self.closed[id])
    }

    pub fn transformation(&self, id: usize) -> Result<&RigidTransform, SceneError> {
        self.check_id(id)?;
        Ok(self.trees[id].transform())
    }

    fn check_id(&self, id: usize) -> Result<(), SceneError> {
        if id < self.trees.len() {
            Ok(())
        } else {
            Err(SceneError::InvalidMeshId {
                id,
                len: self.trees.len(),
            })
        }
    }

    // An empty box means a faceless surface. Its stray vertices can still
    // decide an inclusion probe, so emptiness never prunes a pair; the
    // cached boxes only skip work, they must not change any answer.
    fn prefilter_skips(&self, id: usize, k: usize) -> bool {
        self.prefilter
            && !self.boxes[id].is_empty()
            && !self.boxes[k].is_empty()
            && !self.boxes[id].intersects(&self.boxes[k])
    }

    fn refresh_boxes(&mut self) {
        for i in 0..self.trees.len() {
            if !self.boxes_valid[i] {
                self.boxes[i] = self.trees[i].world_bounds();
                self.boxes_valid[i] = true;
            }
        }
    }
}

impl Default for CollisionScene<'_> {
    fn default() -> Self {
        CollisionScene::new()
    }
}
