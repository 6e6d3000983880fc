//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scene elements
pub mod colors {
    pub const SAND: [f32; 4] = [0.803, 0.521, 0.247, 1.0];
    pub const SAND_LIGHT: [f32; 4] = [0.956, 0.643, 0.376, 1.0];
    pub const SAND_RED: [f32; 4] = [0.8, 0.2, 0.2, 1.0];
    pub const SUN: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const SUN_GLOW: [f32; 4] = [1.0, 1.0, 0.4, 0.25];
    pub const MOON: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const WATER: [f32; 4] = [0.392, 0.584, 0.929, 1.0];
    pub const GRASS: [f32; 4] = [0.133, 0.545, 0.133, 1.0];
    pub const FISH: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const ENTRANCE_VOID: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
