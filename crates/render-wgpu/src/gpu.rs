use crate::shaders;
use bounce_common::Color;
use bounce_kernel::{FrameTime, Shape};
use bounce_render::Renderer;
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
struct Vertex {
    position: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
struct InstanceData {
    offset: [f32; 2],
    color: [f32; 3],
}

/// Triangle-list indices equivalent to drawing `vertex_count` vertices as a
/// fan: every triangle shares vertex 0.
fn fan_indices(vertex_count: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(vertex_count.saturating_sub(2) * 3);
    for i in 1..vertex_count.saturating_sub(1) {
        indices.extend_from_slice(&[0, i as u32, i as u32 + 1]);
    }
    indices
}

fn vertices(shape: &Shape) -> Vec<Vertex> {
    shape
        .geometry()
        .iter()
        .map(|v| Vertex {
            position: v.to_array(),
        })
        .collect()
}

fn instance(shape: &Shape) -> InstanceData {
    InstanceData {
        offset: shape.position().to_array(),
        color: shape.color().to_array(),
    }
}

/// wgpu pipeline for drawing shapes.
///
/// Holds no per-shape GPU state: each draw uploads its geometry into fresh
/// buffers that are dropped once the frame is submitted.
pub struct WgpuRenderer {
    pipeline: wgpu::RenderPipeline,
    surface_format: wgpu::TextureFormat,
    clear_color: Color,
}

impl WgpuRenderer {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shape_pipeline_layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shape_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::SHAPE_SHADER.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("shape_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<InstanceData>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            1 => Float32x2,
                            2 => Float32x3,
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // Geometry winding is whatever the shape was built with.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });
        tracing::debug!(?surface_format, "shape pipeline created");

        Self {
            pipeline,
            surface_format,
            clear_color: Color::SLATE,
        }
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Start recording a frame that renders into `view`.
    pub fn frame<'a>(
        &'a self,
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        view: &'a wgpu::TextureView,
    ) -> WgpuFrame<'a> {
        WgpuFrame {
            renderer: self,
            device,
            queue,
            view,
            draws: Vec::new(),
        }
    }
}

struct DrawCall {
    vertex_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

/// One frame's worth of shape draws against a surface texture.
///
/// Draws are uploaded as they arrive and encoded into a single render pass
/// (cleared to the renderer's background) by `end_frame`.
pub struct WgpuFrame<'a> {
    renderer: &'a WgpuRenderer,
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    view: &'a wgpu::TextureView,
    draws: Vec<DrawCall>,
}

impl Renderer for WgpuFrame<'_> {
    type Output = ();

    fn begin_frame(&mut self, _time: &FrameTime) {
        self.draws.clear();
    }

    fn draw(&mut self, shape: &Shape) {
        let indices = fan_indices(shape.geometry().len());
        if indices.is_empty() {
            return;
        }

        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("shape_vertex_buffer"),
                contents: bytemuck::cast_slice(&vertices(shape)),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let instance_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("shape_instance_buffer"),
                contents: bytemuck::bytes_of(&instance(shape)),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("shape_index_buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        self.draws.push(DrawCall {
            vertex_buffer,
            instance_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        });
    }

    fn end_frame(&mut self) {
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("shape_encoder"),
            });

        let bg = self.renderer.clear_color;
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shape_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: self.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg.r as f64,
                            g: bg.g as f64,
                            b: bg.b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            pass.set_pipeline(&self.renderer.pipeline);
            for draw in &self.draws {
                pass.set_vertex_buffer(0, draw.vertex_buffer.slice(..));
                pass.set_vertex_buffer(1, draw.instance_buffer.slice(..));
                pass.set_index_buffer(draw.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..draw.index_count, 0, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        self.draws.clear();
    }
}
