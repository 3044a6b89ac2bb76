use crate::core::{ContactShadow, Rgb, SceneDescription, SceneFrame, Shape, GROUND_NAVY};
use glam::{Mat4, Vec3};
use web_sys as web;

mod helpers;
mod mesh;
use mesh::{Mesh, Vertex};

// ===================== WebGPU scene renderer =====================

const MAX_INSTANCES: usize = 32;
const MAX_SHADOW_CASTERS: usize = 8;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    key_dir: [f32; 4],   // xyz travel direction, w intensity
    key_color: [f32; 4], // rgb
    fill_dir: [f32; 4],
    fill_color: [f32; 4],
    sky: [f32; 4],    // rgb, w environment intensity
    ground: [f32; 4], // rgb, w ambient intensity
    shadow: [f32; 4], // x opacity
    casters: [[f32; 4]; MAX_SHADOW_CASTERS], // footprint x, z, inner, outer
    caster_strength: [[f32; 4]; MAX_SHADOW_CASTERS / 4],
    caster_count: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],    // linear rgb, w emissive intensity
    material: [f32; 4], // roughness, metalness, receives contact shadow
}

impl InstanceRaw {
    const ATTRIBS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
        6 => Float32x4, 7 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// sRGB display color to the linear values the shader lights with.
#[inline]
fn linear(c: Rgb) -> [f32; 3] {
    c.to_array().map(|v| v.clamp(0.0, 1.0).powf(2.2))
}

#[inline]
fn vec4(v: Vec3, w: f32) -> [f32; 4] {
    [v.x, v.y, v.z, w]
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    cube: Mesh,
    octahedron: Mesh,
    plane: Mesh,
    depth_view: wgpu::TextureView,
    uniforms: SceneUniforms,
    contact_shadow: ContactShadow,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        desc: &SceneDescription,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_scene_pipeline(
            &device,
            &pl,
            &shader,
            &[Vertex::layout(), InstanceRaw::layout()],
            format,
        );
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_instances"),
            size: (std::mem::size_of::<InstanceRaw>() * MAX_INSTANCES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // The view keeps the depth texture alive
        let (_, depth_view) = helpers::create_depth_texture(&device, width, height);
        let cube = Mesh::cube(&device);
        let octahedron = Mesh::octahedron(&device);
        let plane = Mesh::plane(&device);

        let lighting = &desc.lighting;
        let env = desc.environment;
        let shadow = &desc.contact_shadow;
        let [cr, cg, cb] = linear(GROUND_NAVY);
        let [sr, sg, sb] = linear(env.sky());
        let [gr, gg, gb] = linear(env.ground());
        let uniforms = SceneUniforms {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            eye: vec4(desc.camera.position, 1.0),
            key_dir: vec4(lighting.key.direction(), lighting.key.intensity),
            key_color: vec4(Vec3::from(linear(lighting.key.color)), 1.0),
            fill_dir: vec4(lighting.fill.direction(), lighting.fill.intensity),
            fill_color: vec4(Vec3::from(linear(lighting.fill.color)), 1.0),
            sky: [sr, sg, sb, env.intensity()],
            ground: [gr, gg, gb, lighting.ambient],
            shadow: [shadow.opacity, 0.0, 0.0, 0.0],
            casters: [[0.0; 4]; MAX_SHADOW_CASTERS],
            caster_strength: [[0.0; 4]; MAX_SHADOW_CASTERS / 4],
            caster_count: [0.0; 4],
        };

        log::info!(
            "[gpu] ready {}x{} format={:?} markers={}",
            width,
            height,
            format,
            desc.markers.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            instance_buffer,
            cube,
            octahedron,
            plane,
            depth_view,
            uniforms,
            contact_shadow: *shadow,
            clear_color: wgpu::Color {
                r: cr as f64,
                g: cg as f64,
                b: cb as f64,
                a: 1.0,
            },
            width,
            height,
        })
    }

    pub fn set_camera(&mut self, view_proj: Mat4, eye: Vec3) {
        self.uniforms.view_proj = view_proj.to_cols_array_2d();
        self.uniforms.eye = vec4(eye, 1.0);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reconfigure the surface and recreate the depth target at the current size.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        (_, self.depth_view) = helpers::create_depth_texture(&self.device, self.width, self.height);
    }

    pub fn render(&mut self, frame: &SceneFrame) -> Result<(), wgpu::SurfaceError> {
        let mut count = 0usize;
        for fp in frame
            .shadow_casters
            .iter()
            .filter_map(|c| self.contact_shadow.footprint(*c))
            .take(MAX_SHADOW_CASTERS)
        {
            self.uniforms.casters[count] = [fp.center.x, fp.center.y, fp.inner, fp.outer];
            self.uniforms.caster_strength[count / 4][count % 4] = fp.strength;
            count += 1;
        }
        self.uniforms.caster_count = [count as f32, 0.0, 0.0, 0.0];
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));

        // Instances grouped by shape so each mesh draws one contiguous range
        let shapes = [Shape::Plane, Shape::Cube, Shape::Octahedron];
        let mut instances: Vec<InstanceRaw> = Vec::with_capacity(frame.items.len());
        let mut ranges = [0u32..0u32, 0..0, 0..0];
        for (range, shape) in ranges.iter_mut().zip(shapes) {
            let start = instances.len() as u32;
            for item in frame.items.iter().filter(|i| i.shape == shape) {
                if instances.len() >= MAX_INSTANCES {
                    break;
                }
                let m = item.material;
                let [r, g, b] = linear(m.color);
                instances.push(InstanceRaw {
                    model: item.model.to_cols_array_2d(),
                    color: [r, g, b, m.emissive],
                    material: [
                        m.roughness,
                        m.metalness,
                        if shape == Shape::Plane { 1.0 } else { 0.0 },
                        0.0,
                    ],
                });
            }
            *range = start..instances.len() as u32;
        }
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            let meshes = [&self.plane, &self.cube, &self.octahedron];
            for (mesh, range) in meshes.into_iter().zip(ranges) {
                if range.is_empty() {
                    continue;
                }
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..mesh.num_indices, 0, range);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
