use super::helpers::{self, mat4_cols, rgb_to_vec4, DEPTH_FORMAT};
use crate::core::{MeshData, WaveEffect, RING_OUTER_RADIUS, WAVE_LAYER_COUNT};
use glam::Mat4;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct WaveVertex {
    pub(crate) position: [f32; 3],
}

const WAVE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct WavesUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) layers: [[[f32; 4]; 4]; WAVE_LAYER_COUNT],
    pub(crate) inner_color: [f32; 4],
    pub(crate) outer_color: [f32; 4],
    pub(crate) glow_color: [f32; 4],
    pub(crate) ripple: [f32; 4],
    pub(crate) vertex_wave: [f32; 4],
    pub(crate) fades: [f32; 4],
    pub(crate) time_opacity: [f32; 4],
}

impl WavesUniforms {
    pub(crate) fn pack(view_proj: Mat4, effect: &WaveEffect) -> Self {
        let s = &effect.style;
        let layers = effect.layer_transforms();
        Self {
            view_proj: mat4_cols(view_proj),
            layers: std::array::from_fn(|i| mat4_cols(layers[i])),
            inner_color: rgb_to_vec4(s.inner_color, 1.0),
            outer_color: rgb_to_vec4(s.outer_color, 1.0),
            glow_color: rgb_to_vec4(s.glow_color, 1.0),
            ripple: [s.ripple_freq, s.ripple_speed, s.pulse_speed, s.alpha_ceiling],
            vertex_wave: [s.vertex_freq, s.vertex_speed, s.vertex_amp, RING_OUTER_RADIUS],
            fades: [s.fade_center[0], s.fade_center[1], s.fade_edge[0], s.fade_edge[1]],
            time_opacity: [effect.uniforms.time, effect.uniforms.opacity, 0.0, 0.0],
        }
    }
}

pub(crate) struct WavesResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

pub(crate) fn create_waves_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    mesh: &MeshData,
) -> WavesResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("waves_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::WAVES_WGSL.into()),
    });
    let uniform_buffer = helpers::create_uniform_buffer(
        device,
        "waves_uniforms",
        std::mem::size_of::<WavesUniforms>() as u64,
    );
    let (bgl, bind_group) = helpers::uniform_bind_group(device, "waves_bg", &uniform_buffer);
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("waves_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("waves_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_wave"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<WaveVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &WAVE_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        // double sided
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        // translucent: test against the model but never occlude
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_wave"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(ADDITIVE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let vertices: Vec<WaveVertex> = mesh
        .positions
        .iter()
        .map(|p| WaveVertex { position: *p })
        .collect();
    let vertex_buffer = helpers::create_init_buffer(
        device,
        "waves_vertices",
        bytemuck::cast_slice(&vertices),
        wgpu::BufferUsages::VERTEX,
    );
    let index_buffer = helpers::create_init_buffer(
        device,
        "waves_indices",
        bytemuck::cast_slice(&mesh.indices),
        wgpu::BufferUsages::INDEX,
    );

    WavesResources {
        pipeline,
        uniform_buffer,
        bind_group,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
    }
}
