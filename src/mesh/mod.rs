//! Procedural mesh generation
//!
//! A [`MeshBuilder`] owns a vertex buffer sized up front and writes into it
//! through a forward-only cursor. Shape appends live in `solid` and
//! `textured`; each one writes its vertices and records the draw command
//! that covers them. [`MeshBuilder::build`] snapshots the result as a
//! [`GeneratedMesh`] ready to hand to the GPU once.

pub mod solid;
pub mod textured;
pub mod vertex;

use std::marker::PhantomData;

use thiserror::Error;

pub use vertex::{SolidVertex, TexturedVertex, VertexLayout};

/// Builder for flat-color shapes (3 floats per vertex)
pub type SolidBuilder = MeshBuilder<SolidVertex>;
/// Builder for textured shapes (5 floats per vertex)
pub type TexturedBuilder = MeshBuilder<TexturedVertex>;

/// Rejected shape parameters
///
/// Nothing is written to the builder when an append returns one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("tessellation point count must be at least 1, got {0}")]
    InvalidPointCount(u32),
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
}

pub(crate) fn check_point_count(num_points: u32) -> Result<(), MeshError> {
    if num_points == 0 {
        return Err(MeshError::InvalidPointCount(num_points));
    }
    Ok(())
}

pub(crate) fn check_dimension(name: &'static str, value: f32) -> Result<(), MeshError> {
    if !value.is_finite() || value < 0.0 {
        return Err(MeshError::InvalidDimension { name, value });
    }
    Ok(())
}

/// GPU primitive a draw command renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    TriangleFan,
}

/// One deferred draw over a contiguous vertex range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub kind: PrimitiveKind,
    pub first_vertex: u32,
    pub vertex_count: u32,
}

impl DrawCommand {
    pub const fn fan(first_vertex: u32, vertex_count: u32) -> Self {
        Self {
            kind: PrimitiveKind::TriangleFan,
            first_vertex,
            vertex_count,
        }
    }

    /// One past the last vertex this command draws
    pub const fn end_vertex(&self) -> u32 {
        self.first_vertex + self.vertex_count
    }
}

/// Finished vertex data plus the ordered draws over it
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMesh {
    vertex_data: Vec<f32>,
    draw_commands: Vec<DrawCommand>,
    floats_per_vertex: usize,
}

impl GeneratedMesh {
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertex_data
    }

    pub fn draw_commands(&self) -> &[DrawCommand] {
        &self.draw_commands
    }

    pub fn floats_per_vertex(&self) -> usize {
        self.floats_per_vertex
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len() / self.floats_per_vertex
    }

    /// Floats of vertex `index`, or `None` past the end
    pub fn vertex(&self, index: usize) -> Option<&[f32]> {
        let start = index * self.floats_per_vertex;
        self.vertex_data.get(start..start + self.floats_per_vertex)
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertex_data)
    }

    /// Fans expanded to a triangle list (wgpu has no fan topology)
    pub fn triangle_list_indices(&self) -> Vec<u32> {
        let triangles: u32 = self
            .draw_commands
            .iter()
            .map(|c| c.vertex_count.saturating_sub(2))
            .sum();
        let mut indices = Vec::with_capacity(triangles as usize * 3);

        for command in &self.draw_commands {
            match command.kind {
                PrimitiveKind::TriangleFan => {
                    let apex = command.first_vertex;
                    for k in 1..command.vertex_count.saturating_sub(1) {
                        indices.extend_from_slice(&[apex, apex + k, apex + k + 1]);
                    }
                }
            }
        }

        indices
    }
}

/// Cursor-based writer over a pre-sized vertex buffer
#[derive(Debug, Clone)]
pub struct MeshBuilder<V: VertexLayout> {
    data: Vec<f32>,
    offset: usize,
    draw_commands: Vec<DrawCommand>,
    _vertex: PhantomData<V>,
}

impl<V: VertexLayout> MeshBuilder<V> {
    /// Allocate room for exactly `size_in_vertices` vertices
    pub fn new(size_in_vertices: usize) -> Self {
        Self {
            data: vec![0.0; size_in_vertices * V::FLOATS],
            offset: 0,
            draw_commands: Vec::new(),
            _vertex: PhantomData,
        }
    }

    pub fn floats_per_vertex(&self) -> usize {
        V::FLOATS
    }

    pub fn capacity(&self) -> usize {
        self.data.len() / V::FLOATS
    }

    pub fn vertices_written(&self) -> usize {
        self.offset / V::FLOATS
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.vertices_written()
    }

    /// Index the next written vertex will have
    fn cursor(&self) -> u32 {
        self.vertices_written() as u32
    }

    /// Panics unless `count` more vertices fit
    ///
    /// Running out means a caller sized the builder with the wrong
    /// `vertices_needed`; truncating would shift every later draw command.
    fn reserve(&self, count: usize) {
        assert!(
            count <= self.remaining(),
            "mesh builder capacity exceeded: {} vertices requested, {} of {} left",
            count,
            self.remaining(),
            self.capacity()
        );
    }

    fn push(&mut self, vertex: V) {
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&vertex));
        let end = self.offset + floats.len();
        self.data[self.offset..end].copy_from_slice(floats);
        self.offset = end;
    }

    /// Write a whole fan and record its draw command
    pub(crate) fn push_fan(&mut self, vertices: &[V]) {
        self.reserve(vertices.len());

        let first = self.cursor();
        for vertex in vertices {
            self.push(*vertex);
        }
        self.draw_commands
            .push(DrawCommand::fan(first, vertices.len() as u32));
    }

    /// Snapshot everything written so far
    ///
    /// Calling this again without further appends returns an identical mesh.
    pub fn build(&self) -> GeneratedMesh {
        if self.remaining() > 0 {
            log::debug!(
                "building mesh with {} of {} vertices written",
                self.vertices_written(),
                self.capacity()
            );
        }

        GeneratedMesh {
            vertex_data: self.data[..self.offset].to_vec(),
            draw_commands: self.draw_commands.clone(),
            floats_per_vertex: V::FLOATS,
        }
    }
}
