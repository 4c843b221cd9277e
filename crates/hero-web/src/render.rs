use hero_core::{Camera, FrameGeometry, LineVertex, PointInstance, SceneConfig};
use web_sys as web;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PostUniforms {
    resolution: [f32; 2],
    blur_dir: [f32; 2],
    bloom_strength: f32,
    threshold: f32,
    _pad: [f32; 2],
}

/// Quad corners for the instanced point sprite, two triangles in unit space.
const QUAD_VERTS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Offscreen targets for the bloom chain, full-res HDR plus a half-res
/// ping-pong pair.
struct BloomTargets {
    hdr_view: wgpu::TextureView,
    bloom_a_view: wgpu::TextureView,
    bloom_b_view: wgpu::TextureView,
}

impl BloomTargets {
    fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let make = |label: &str, w: u32, h: u32| {
            device
                .create_texture(&wgpu::TextureDescriptor {
                    label: Some(label),
                    size: wgpu::Extent3d {
                        width: w.max(1),
                        height: h.max(1),
                        depth_or_array_layers: 1,
                    },
                    mip_level_count: 1,
                    sample_count: 1,
                    dimension: wgpu::TextureDimension::D2,
                    format: HDR_FORMAT,
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                        | wgpu::TextureUsages::TEXTURE_BINDING,
                    view_formats: &[],
                })
                .create_view(&wgpu::TextureViewDescriptor::default())
        };
        let bw = (width.max(1) / 2).max(1);
        let bh = (height.max(1) / 2).max(1);
        Self {
            hdr_view: make("hdr_tex", width, height),
            bloom_a_view: make("bloom_a", bw, bh),
            bloom_b_view: make("bloom_b", bw, bh),
        }
    }
}

struct BloomChain {
    targets: BloomTargets,
    linear_sampler: wgpu::Sampler,
    post_bgl0: wgpu::BindGroupLayout,
    post_bgl1: wgpu::BindGroupLayout,
    // One uniform buffer per source bind group. Queued writes all land at
    // submit, so sharing one buffer would leave every pass reading the last
    // value written; a buffer per pass keeps each blur direction distinct.
    uniforms_hdr: wgpu::Buffer,
    uniforms_blur_h: wgpu::Buffer,
    uniforms_blur_v: wgpu::Buffer,
    bg_hdr: wgpu::BindGroup,
    bg_from_bloom_a: wgpu::BindGroup,
    bg_from_bloom_b: wgpu::BindGroup,
    bg_bloom_a_only: wgpu::BindGroup,
    bright_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    camera: Camera,

    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    point_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    instance_capacity: usize,
    line_vb: wgpu::Buffer,
    line_capacity: usize,

    bloom: Option<BloomChain>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        scene_config: &SceneConfig,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
                    // Default limits keep older WebGPU implementations happy
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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // When bloom is on, the scene draws into the HDR target and the
        // post chain resolves to the swapchain. Otherwise it draws straight
        // to the swapchain.
        let scene_target_format = if scene_config.enable_bloom {
            HDR_FORMAT
        } else {
            format
        };

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(hero_core::SCENE_WGSL.into()),
        });

        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });
        let scene_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });

        let quad_layout = wgpu::VertexBufferLayout {
            array_stride: 8,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        };
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 3,
                },
            ],
        };
        let line_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        };

        let point_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("point_pipeline"),
            layout: Some(&scene_pl),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_point"),
                buffers: &[quad_layout, instance_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_point"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: scene_target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("line_pipeline"),
            layout: Some(&scene_pl),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_line"),
                buffers: &[line_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_line"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: scene_target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&QUAD_VERTS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_capacity = scene_config.point_capacity();
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (instance_capacity * std::mem::size_of::<PointInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let line_capacity = scene_config.line_vertex_capacity();
        let line_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("line_vb"),
            size: (line_capacity * std::mem::size_of::<LineVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bloom = if scene_config.enable_bloom {
            Some(build_bloom_chain(&device, format, width, height))
        } else {
            None
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            camera: Camera::hero_default(width, height),
            scene_uniform_buffer,
            scene_bind_group,
            point_pipeline,
            line_pipeline,
            quad_vb,
            instance_vb,
            instance_capacity,
            line_vb,
            line_capacity,
            bloom,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.012,
                g: 0.016,
                b: 0.035,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.camera.set_viewport(width, height);
            if let Some(chain) = self.bloom.as_mut() {
                chain.targets = BloomTargets::new(&self.device, width, height);
                chain.rebuild_bind_groups(&self.device);
            }
        }
    }

    pub fn render(&mut self, geometry: &FrameGeometry) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let swap_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = SceneUniforms {
            view_proj: self.camera.view_proj(),
        };
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let point_count = geometry.points.len().min(self.instance_capacity);
        if point_count > 0 {
            self.queue.write_buffer(
                &self.instance_vb,
                0,
                bytemuck::cast_slice(&geometry.points[..point_count]),
            );
        }
        let line_count = geometry.lines.len().min(self.line_capacity) & !1;
        if line_count > 0 {
            self.queue.write_buffer(
                &self.line_vb,
                0,
                bytemuck::cast_slice(&geometry.lines[..line_count]),
            );
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let scene_target = match &self.bloom {
                Some(chain) => &chain.targets.hdr_view,
                None => &swap_view,
            };
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: scene_target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if line_count > 0 {
                rpass.set_pipeline(&self.line_pipeline);
                rpass.set_bind_group(0, &self.scene_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.line_vb.slice(..));
                rpass.draw(0..line_count as u32, 0..1);
            }
            if point_count > 0 {
                rpass.set_pipeline(&self.point_pipeline);
                rpass.set_bind_group(0, &self.scene_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
                rpass.draw(0..6, 0..point_count as u32);
            }
        }

        if let Some(chain) = &self.bloom {
            chain.encode(
                &self.queue,
                &mut encoder,
                &swap_view,
                self.width,
                self.height,
                self.clear_color,
            );
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn build_bloom_chain(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    width: u32,
    height: u32,
) -> BloomChain {
    let targets = BloomTargets::new(device, width, height);
    let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("post_shader"),
        source: wgpu::ShaderSource::Wgsl(hero_core::POST_WGSL.into()),
    });
    let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("linear_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let post_bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    });
    let post_bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let make_uniforms = |label: &str| {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    };
    let uniforms_hdr = make_uniforms("post_uniforms_hdr");
    let uniforms_blur_h = make_uniforms("post_uniforms_blur_h");
    let uniforms_blur_v = make_uniforms("post_uniforms_blur_v");

    let make_pipeline = |label: &str, entry: &str, target: wgpu::TextureFormat, layouts: &[&wgpu::BindGroupLayout]| {
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: layouts,
            push_constant_ranges: &[],
        });
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &post_shader,
                entry_point: Some("vs_fullscreen"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &post_shader,
                entry_point: Some(entry),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        })
    };
    let bright_pipeline = make_pipeline("bright_pipeline", "fs_bright", HDR_FORMAT, &[&post_bgl0]);
    let blur_pipeline = make_pipeline("blur_pipeline", "fs_blur", HDR_FORMAT, &[&post_bgl0]);
    let composite_pipeline = make_pipeline(
        "composite_pipeline",
        "fs_composite",
        surface_format,
        &[&post_bgl0, &post_bgl1],
    );

    let (bg_hdr, bg_from_bloom_a, bg_from_bloom_b, bg_bloom_a_only) = make_post_bind_groups(
        device,
        &post_bgl0,
        &post_bgl1,
        &linear_sampler,
        [&uniforms_hdr, &uniforms_blur_h, &uniforms_blur_v],
        &targets,
    );

    BloomChain {
        targets,
        linear_sampler,
        post_bgl0,
        post_bgl1,
        uniforms_hdr,
        uniforms_blur_h,
        uniforms_blur_v,
        bg_hdr,
        bg_from_bloom_a,
        bg_from_bloom_b,
        bg_bloom_a_only,
        bright_pipeline,
        blur_pipeline,
        composite_pipeline,
    }
}

fn make_post_bind_groups(
    device: &wgpu::Device,
    post_bgl0: &wgpu::BindGroupLayout,
    post_bgl1: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    uniforms: [&wgpu::Buffer; 3],
    targets: &BloomTargets,
) -> (wgpu::BindGroup, wgpu::BindGroup, wgpu::BindGroup, wgpu::BindGroup) {
    let bg0 = |label: &str, view: &wgpu::TextureView, uniforms: &wgpu::Buffer| {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: post_bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniforms.as_entire_binding(),
                },
            ],
        })
    };
    let bg_bloom_a_only = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("bg_bloom_a_only"),
        layout: post_bgl1,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&targets.bloom_a_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });
    (
        bg0("bg_hdr", &targets.hdr_view, uniforms[0]),
        bg0("bg_from_bloom_a", &targets.bloom_a_view, uniforms[1]),
        bg0("bg_from_bloom_b", &targets.bloom_b_view, uniforms[2]),
        bg_bloom_a_only,
    )
}

impl BloomChain {
    fn rebuild_bind_groups(&mut self, device: &wgpu::Device) {
        let (bg_hdr, bg_a, bg_b, bg_a_only) = make_post_bind_groups(
            device,
            &self.post_bgl0,
            &self.post_bgl1,
            &self.linear_sampler,
            [&self.uniforms_hdr, &self.uniforms_blur_h, &self.uniforms_blur_v],
            &self.targets,
        );
        self.bg_hdr = bg_hdr;
        self.bg_from_bloom_a = bg_a;
        self.bg_from_bloom_b = bg_b;
        self.bg_bloom_a_only = bg_a_only;
    }

    /// Bright pass into bloom A, horizontal blur into B, vertical blur back
    /// into A, then composite HDR + bloom A to the swapchain.
    fn encode(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        swap_view: &wgpu::TextureView,
        width: u32,
        height: u32,
        clear_color: wgpu::Color,
    ) {
        let mut post = PostUniforms {
            resolution: [width as f32 / 2.0, height as f32 / 2.0],
            blur_dir: [0.0, 0.0],
            bloom_strength: 0.9,
            threshold: 0.6,
            _pad: [0.0; 2],
        };
        queue.write_buffer(&self.uniforms_hdr, 0, bytemuck::bytes_of(&post));
        post.blur_dir = [1.0, 0.0];
        queue.write_buffer(&self.uniforms_blur_h, 0, bytemuck::bytes_of(&post));
        post.blur_dir = [0.0, 1.0];
        queue.write_buffer(&self.uniforms_blur_v, 0, bytemuck::bytes_of(&post));

        self.blit(
            encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.bright_pipeline,
            &self.bg_hdr,
            None,
        );
        self.blit(
            encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.blur_pipeline,
            &self.bg_from_bloom_a,
            None,
        );
        self.blit(
            encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.blur_pipeline,
            &self.bg_from_bloom_b,
            None,
        );
        self.blit(
            encoder,
            "composite",
            swap_view,
            clear_color,
            &self.composite_pipeline,
            &self.bg_hdr,
            Some(&self.bg_bloom_a_only),
        );
    }

    fn blit(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        label: &str,
        target: &wgpu::TextureView,
        clear: wgpu::Color,
        pipeline: &wgpu::RenderPipeline,
        bg0: &wgpu::BindGroup,
        bg1: Option<&wgpu::BindGroup>,
    ) {
        let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        r.set_pipeline(pipeline);
        r.set_bind_group(0, bg0, &[]);
        if let Some(g1) = bg1 {
            r.set_bind_group(1, g1, &[]);
        }
        r.draw(0..3, 0..1);
        drop(r);
    }
}
