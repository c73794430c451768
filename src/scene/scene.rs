//! Scene - the layered compositor
//!
//! A scene owns a viewport-sized buffer and a set of screen objects. Every
//! frame the buffer is rebuilt from scratch: members draw in ascending layer
//! order (ties keep registration order), clipped against the viewport, with
//! the opaque/transparent blend rule deciding whether empty cells overwrite.

use crate::core::grid::Grid;
use crate::scene::object::ScreenObject;
use crate::types::{Blend, Space};

/// Compositing surface dimensions, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Handle to a registered member. Scenes own their members; callers keep
/// ids instead of references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberId(usize);

#[derive(Debug, Clone)]
pub struct Scene {
    viewport: Viewport,
    buffer: Grid,
    members: Vec<ScreenObject>,
    /// Scratch draw-order indices, reused across frames.
    draw_order: Vec<usize>,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            buffer: Grid::new(viewport.width, viewport.height),
            members: Vec::new(),
            draw_order: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Register a member. No ordering happens here; draw order is derived
    /// from layers at render time.
    pub fn add_member(&mut self, object: ScreenObject) -> MemberId {
        self.members.push(object);
        MemberId(self.members.len() - 1)
    }

    pub fn member(&self, id: MemberId) -> &ScreenObject {
        &self.members[id.0]
    }

    pub fn member_mut(&mut self, id: MemberId) -> &mut ScreenObject {
        &mut self.members[id.0]
    }

    /// Drop all members (ids become invalid). The buffer keeps its last
    /// composited frame until the next `render_frame`.
    pub fn clear_members(&mut self) {
        self.members.clear();
    }

    /// Recomposite the buffer from scratch.
    pub fn render_frame(&mut self) {
        self.buffer.fill(Space::Empty);

        self.draw_order.clear();
        self.draw_order.extend(0..self.members.len());
        // Stable: equal layers draw in registration order, later on top.
        self.draw_order
            .sort_by_key(|&i| self.members[i].layer());

        for &i in &self.draw_order {
            blit(&mut self.buffer, &self.members[i]);
        }
    }

    /// The composited frame as of the last `render_frame`.
    pub fn buffer(&self) -> &Grid {
        &self.buffer
    }

    /// Rows of the composited buffer, top to bottom. Restartable: each call
    /// yields a fresh iterator without re-rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[Space]> + '_ {
        self.buffer.rows()
    }
}

/// Draw one member into the buffer, clipped to the viewport.
fn blit(buffer: &mut Grid, object: &ScreenObject) {
    let vw = buffer.width() as i32;
    let vh = buffer.height() as i32;
    let pos = object.position();

    // Visible intersection of the member rectangle with the viewport, in
    // member-local coordinates.
    let x0 = 0.max(-pos.x);
    let x1 = (object.width() as i32).min(vw - pos.x);
    let y0 = 0.max(-pos.y);
    let y1 = (object.height() as i32).min(vh - pos.y);
    if x0 >= x1 || y0 >= y1 {
        // Entirely outside the viewport: skipped, not an error.
        return;
    }

    let opaque = object.blend() == Blend::Opaque;
    for y in y0..y1 {
        let src = object.content().row(y as usize);
        for x in x0..x1 {
            let space = src[x as usize];
            if opaque || !space.is_empty() {
                // Clipping put (pos + (x, y)) inside the buffer.
                let _ = buffer.set((pos.y + y) as usize, (pos.x + x) as usize, space);
            }
        }
    }
}
