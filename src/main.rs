//! volcast - interactive volume raycasting viewer
//!
//! Casts a ray per screen pixel through a 3D scalar volume and composites
//! sampled intensities through a transfer function. Two GPU passes per
//! frame: cube back faces into an exit-position map, then cube front faces
//! marching each ray from entry to exit.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use volcast::config::AppConfig;
use volcast_core::{RenderParams, Technique, TransferFunction, Volume};
use volcast_input::DragController;
use volcast_render::{
    camera::OrbitCamera,
    context::RenderContext,
    geometry::CubeBuffers,
    pipeline::{ExitPassPipeline, ExitPassUniforms, RaycastPipeline, RaycastUniforms},
    textures::{ExitPositionMap, TransferFunctionTexture, VolumeTexture},
};

/// Sample count step for the arrow-key bindings.
const SAMPLE_COUNT_STEP: u32 = 10;

/// GPU-side state, created once the window exists.
struct Gpu {
    context: RenderContext,
    exit_pipeline: ExitPassPipeline,
    raycast_pipeline: RaycastPipeline,
    cube: CubeBuffers,
    exit_map: ExitPositionMap,
    volume_texture: Option<VolumeTexture>,
    transfer_function_texture: TransferFunctionTexture,
}

impl Gpu {
    /// Rebind the raycast pass textures after any of them is replaced.
    ///
    /// With no volume loaded there is nothing to bind and the raycast pass
    /// renders background only.
    fn rebind(&mut self) {
        if let Some(volume) = &self.volume_texture {
            self.raycast_pipeline.bind_textures(
                &self.context.device,
                volume,
                &self.transfer_function_texture,
                &self.exit_map,
            );
        }
    }
}

/// Main application state
struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    camera: OrbitCamera,
    controller: DragController,
    params: RenderParams,
    transfer_function: TransferFunction,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let mut params = RenderParams::default();
        params.set_num_samples(config.rendering.num_samples);
        params.set_sample_range_start(config.rendering.sample_range_start);
        params.set_sample_range_end(config.rendering.sample_range_end);
        params.set_technique(config.rendering.technique());

        Self {
            config,
            window: None,
            gpu: None,
            camera: OrbitCamera::new(),
            controller: DragController::new(),
            params,
            // The built-in preset until the configured one loads
            transfer_function: TransferFunction::flame_preset(),
        }
    }

    /// Load the configured volume, or fall back to the synthetic demo shell.
    fn initial_volume(&self) -> Volume {
        if let Some(path) = &self.config.volume.path {
            let [width, height, depth] = self.config.volume.dimensions;
            match std::fs::read(path)
                .map_err(volcast_core::CoreError::from)
                .and_then(|bytes| Volume::from_u8(width, height, depth, &bytes))
            {
                Ok(volume) => {
                    log::info!(
                        "Loaded volume '{}' ({}x{}x{})",
                        path,
                        width,
                        height,
                        depth
                    );
                    return volume;
                }
                Err(e) => {
                    log::error!("Failed to load volume '{}': {}", path, e);
                }
            }
        }
        let size = self.config.volume.synthetic_size;
        log::info!("Using synthetic demo volume ({0}x{0}x{0})", size);
        Volume::synthetic_shell(size)
    }

    /// Replace the active volume texture and rebind the raycast pass.
    fn load_volume(&mut self, volume: &Volume) {
        if let Some(gpu) = &mut self.gpu {
            gpu.volume_texture = Some(VolumeTexture::new(
                &gpu.context.device,
                &gpu.context.queue,
                volume,
            ));
            gpu.rebind();
        }
    }

    /// Replace the transfer function from an image on disk.
    ///
    /// On decode failure the error is logged and the previous transfer
    /// function stays active.
    fn load_transfer_function(&mut self, path: &str) {
        match TransferFunction::from_path(path) {
            Ok(tf) => {
                self.transfer_function = tf;
                if let Some(gpu) = &mut self.gpu {
                    gpu.transfer_function_texture = TransferFunctionTexture::new(
                        &gpu.context.device,
                        &gpu.context.queue,
                        &self.transfer_function,
                    );
                    gpu.rebind();
                }
                self.request_redraw();
            }
            Err(e) => {
                log::error!("Failed to load transfer function '{}': {}", path, e);
            }
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn set_technique(&mut self, technique: Technique) {
        self.params.set_technique(technique);
        log::info!("Technique: {:?}", technique);
        self.request_redraw();
    }

    fn adjust_sample_count(&mut self, increase: bool) {
        let current = self.params.num_samples();
        let next = if increase {
            current.saturating_add(SAMPLE_COUNT_STEP)
        } else {
            current.saturating_sub(SAMPLE_COUNT_STEP)
        };
        self.params.set_num_samples(next);
        log::info!("Sample count: {}", self.params.num_samples());
        self.request_redraw();
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let mvp = self.camera.mvp(
            gpu.context.aspect_ratio(),
            self.config.camera.fov,
            self.config.camera.near,
            self.config.camera.far,
        );
        gpu.exit_pipeline
            .update_uniforms(&gpu.context.queue, &ExitPassUniforms { mvp });
        gpu.raycast_pipeline
            .update_uniforms(&gpu.context.queue, &RaycastUniforms::new(mvp, &self.params));

        let output = match gpu.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => {
                gpu.context.resize(gpu.context.size);
                self.request_redraw();
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Surface out of memory");
                event_loop.exit();
                return;
            }
            Err(e) => {
                log::warn!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        // Exit positions must be written before the raycast pass reads them;
        // recording order within one submission provides that
        gpu.exit_pipeline.render(&mut encoder, &gpu.exit_map, &gpu.cube);

        let bg = self.config.rendering.background_color;
        gpu.raycast_pipeline.render(
            &mut encoder,
            &view,
            &gpu.cube,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: 1.0,
            },
        );

        gpu.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .expect("Failed to create window"),
        );

        let context = pollster::block_on(RenderContext::new(
            window.clone(),
            self.config.window.vsync,
        ));

        let exit_pipeline = ExitPassPipeline::new(&context.device);
        let raycast_pipeline = RaycastPipeline::new(&context.device, context.config.format);
        let cube = CubeBuffers::new(&context.device);
        let exit_map = ExitPositionMap::new(&context.device, context.size.width, context.size.height);
        let transfer_function_texture =
            TransferFunctionTexture::new(&context.device, &context.queue, &self.transfer_function);

        self.window = Some(window);
        self.gpu = Some(Gpu {
            context,
            exit_pipeline,
            raycast_pipeline,
            cube,
            exit_map,
            volume_texture: None,
            transfer_function_texture,
        });

        let volume = self.initial_volume();
        self.load_volume(&volume);
        if let Some(path) = self.config.transfer_function.path.clone() {
            self.load_transfer_function(&path);
        }
        self.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                // Minimize reports 0x0; the surface keeps its old
                // configuration, so the exit map must too
                if physical_size.width == 0 || physical_size.height == 0 {
                    return;
                }
                if let Some(gpu) = &mut self.gpu {
                    gpu.context.resize(physical_size);
                    gpu.exit_map = ExitPositionMap::new(
                        &gpu.context.device,
                        physical_size.width,
                        physical_size.height,
                    );
                    gpu.rebind();
                }
                self.request_redraw();
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.controller.process_modifiers(modifiers.state());
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    match key {
                        KeyCode::Escape => event_loop.exit(),
                        KeyCode::Digit1 => self.set_technique(Technique::Mip),
                        KeyCode::Digit2 => self.set_technique(Technique::Alpha),
                        KeyCode::Digit3 => self.set_technique(Technique::Average),
                        KeyCode::ArrowUp => self.adjust_sample_count(true),
                        KeyCode::ArrowDown => self.adjust_sample_count(false),
                        KeyCode::KeyR => {
                            self.camera.reset();
                            log::info!("Camera reset");
                            self.request_redraw();
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if self
                    .controller
                    .process_mouse_button(button, state, &mut self.params)
                {
                    self.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if self.controller.process_cursor_moved(
                    (position.x, position.y),
                    &mut self.camera,
                    &mut self.params,
                ) {
                    self.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting volcast");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    // Redraws are driven by input and resize, not a continuous loop
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
