//! Interleaved vertex layouts shared with the shader binding step

use bytemuck::{Pod, Zeroable};

/// A vertex type the mesh builders can write
///
/// `FLOATS` is the stride in floats; `desc` is the matching wgpu layout.
pub trait VertexLayout: Pod {
    const FLOATS: usize;

    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// Position-only vertex for flat-color shapes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SolidVertex {
    pub position: [f32; 3],
}

impl SolidVertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            position: [x, y, 0.0],
        }
    }
}

impl VertexLayout for SolidVertex {
    const FLOATS: usize = 3;

    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SolidVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            }],
        }
    }
}

/// Position plus texture coordinate, `t` grows downward like image rows
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl TexturedVertex {
    pub const fn new(x: f32, y: f32, s: f32, t: f32) -> Self {
        Self {
            position: [x, y, 0.0],
            tex_coords: [s, t],
        }
    }
}

impl VertexLayout for TexturedVertex {
    const FLOATS: usize = 5;

    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TexturedVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides_match_float_counts() {
        assert_eq!(
            SolidVertex::desc().array_stride as usize,
            SolidVertex::FLOATS * std::mem::size_of::<f32>()
        );
        assert_eq!(
            TexturedVertex::desc().array_stride as usize,
            TexturedVertex::FLOATS * std::mem::size_of::<f32>()
        );
    }

    #[test]
    fn test_z_fixed_at_zero() {
        assert_eq!(SolidVertex::new(1.0, 2.0).position[2], 0.0);
        assert_eq!(TexturedVertex::new(1.0, 2.0, 0.5, 0.5).position[2], 0.0);
    }
}
