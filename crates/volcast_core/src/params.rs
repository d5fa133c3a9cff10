//! Render parameters: sample count, sample range and compositing technique

/// Sample count forced while a pointer drag is active.
///
/// Dragging temporarily reduces ray-march quality for responsiveness; the
/// user-set count is restored on release.
pub const INTERACTION_SAMPLE_COUNT: u32 = 5;

/// Compositing technique for combining samples along a ray.
///
/// A closed enumeration: exactly one technique is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Technique {
    /// Maximum intensity projection: the brightest sample wins.
    #[default]
    Mip,
    /// Front-to-back alpha compositing with opacity derived from intensity.
    Alpha,
    /// Color looked up for the mean intensity across all samples.
    Average,
}

impl Technique {
    /// Index used to select the technique in the raycast shader.
    pub fn shader_index(self) -> u32 {
        match self {
            Technique::Mip => 0,
            Technique::Alpha => 1,
            Technique::Average => 2,
        }
    }

    /// Parse a technique name as it appears in configuration files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mip" => Some(Technique::Mip),
            "alpha" => Some(Technique::Alpha),
            "average" => Some(Technique::Average),
            _ => None,
        }
    }
}

/// Parameters read by the raycast pass every frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderParams {
    num_samples: u32,
    sample_range_start: f32,
    sample_range_end: f32,
    technique: Technique,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            num_samples: 100,
            sample_range_start: 0.0,
            sample_range_end: 1.0,
            technique: Technique::Mip,
        }
    }
}

impl RenderParams {
    pub fn num_samples(&self) -> u32 {
        self.num_samples
    }

    pub fn sample_range_start(&self) -> f32 {
        self.sample_range_start
    }

    pub fn sample_range_end(&self) -> f32 {
        self.sample_range_end
    }

    pub fn technique(&self) -> Technique {
        self.technique
    }

    /// Set the ray sample count, clamped to at least 1.
    pub fn set_num_samples(&mut self, num_samples: u32) {
        self.num_samples = num_samples.max(1);
    }

    /// Set the normalized start of the sampled segment, clamped to [0, 1].
    pub fn set_sample_range_start(&mut self, start: f32) {
        self.sample_range_start = start.clamp(0.0, 1.0);
    }

    /// Set the normalized end of the sampled segment, clamped to [0, 1].
    pub fn set_sample_range_end(&mut self, end: f32) {
        self.sample_range_end = end.clamp(0.0, 1.0);
    }

    pub fn set_technique(&mut self, technique: Technique) {
        self.technique = technique;
    }
}
