use super::helpers::{self, mat4_cols, DEPTH_FORMAT};
use crate::core::{LoadedModel, MeshData};
use glam::Mat4;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ModelVertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
}

const MODEL_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ModelUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) base_color: [f32; 4],
    pub(crate) light_time: [f32; 4],
}

impl ModelUniforms {
    pub(crate) fn pack(view_proj: Mat4, model_matrix: Mat4, loaded: &LoadedModel, time: f32) -> Self {
        let m = &loaded.material;
        Self {
            view_proj: mat4_cols(view_proj),
            model: mat4_cols(model_matrix),
            base_color: m.base_color.extend(1.0).to_array(),
            light_time: m.light_dir.extend(time).to_array(),
        }
    }
}

/// GPU copy of one sub-mesh.
pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

/// One pipeline + one uniform block shared by every sub-mesh of the asset.
pub(crate) struct ModelResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) meshes: Vec<GpuMesh>,
}

pub(crate) fn create_model_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> ModelResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("model_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::MODEL_WGSL.into()),
    });
    let uniform_buffer = helpers::create_uniform_buffer(
        device,
        "model_uniforms",
        std::mem::size_of::<ModelUniforms>() as u64,
    );
    let (bgl, bind_group) = helpers::uniform_bind_group(device, "model_bg", &uniform_buffer);
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("model_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("model_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_model"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<ModelVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &MODEL_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_model"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    ModelResources {
        pipeline,
        uniform_buffer,
        bind_group,
        meshes: Vec::new(),
    }
}

pub(crate) fn upload_mesh(device: &wgpu::Device, mesh: &MeshData) -> GpuMesh {
    let vertices: Vec<ModelVertex> = mesh
        .positions
        .iter()
        .zip(&mesh.normals)
        .map(|(p, n)| ModelVertex {
            position: *p,
            normal: *n,
        })
        .collect();
    let vertex_buffer = helpers::create_init_buffer(
        device,
        &format!("model_vertices:{}", mesh.name),
        bytemuck::cast_slice(&vertices),
        wgpu::BufferUsages::VERTEX,
    );
    let index_buffer = helpers::create_init_buffer(
        device,
        &format!("model_indices:{}", mesh.name),
        bytemuck::cast_slice(&mesh.indices),
        wgpu::BufferUsages::INDEX,
    );
    GpuMesh {
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
    }
}
