//! WGPU device, queue and surface management
//!
//! Initialization is fail-fast: the whole pipeline depends on trilinearly
//! sampling an `R32Float` 3D texture, so an adapter without
//! `FLOAT32_FILTERABLE` terminates startup. There is no degraded path.

use std::sync::Arc;

use winit::window::Window;

/// The features the raycasting pipeline cannot run without.
pub const REQUIRED_FEATURES: wgpu::Features = wgpu::Features::FLOAT32_FILTERABLE;

/// Owns the wgpu instance-level objects and the window surface.
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
}

impl RenderContext {
    /// Create the device and configure the surface for the window.
    ///
    /// Panics if no suitable adapter exists or the required feature set is
    /// missing; volume rendering has no fallback without 3D texture
    /// filtering.
    pub async fn new(window: Arc<Window>, vsync: bool) -> Self {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window)
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("No suitable GPU adapter found");

        let features = adapter.features();
        if !features.contains(REQUIRED_FEATURES) {
            panic!(
                "GPU adapter is missing required features {:?}; cannot sample the volume texture",
                REQUIRED_FEATURES - features
            );
        }

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("volcast device"),
                    required_features: REQUIRED_FEATURES,
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .expect("Failed to create device");

        // Validation messages are diagnostics, not control flow
        device.on_uncaptured_error(Box::new(|error| {
            log::error!("wgpu error: {}", error);
        }));

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        log::info!(
            "Render context ready: {:?}, surface {}x{} {:?}",
            adapter.get_info().name,
            config.width,
            config.height,
            format
        );

        Self {
            surface,
            device,
            queue,
            config,
            size,
        }
    }

    /// Reconfigure the surface for a new viewport size.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }
}
