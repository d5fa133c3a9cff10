//! CPU mirror of the raycast compositing loop
//!
//! The GPU composites ray samples in the raycast fragment shader; this
//! module reproduces that arithmetic on a slice of sampled intensities so
//! the compositing semantics are testable without a device, the same way
//! [`TransferFunction::sample`] mirrors the GPU sampler. Any change to the
//! shader loop must be mirrored here.

use crate::{Technique, TransferFunction};

/// Front-to-back accumulation stops once opacity exceeds this.
pub const ALPHA_SATURATION: f32 = 0.99;

/// Composite sampled intensities into a premultiplied RGBA color.
///
/// MIP outputs `(tf(max)·max, max)`, AVERAGE `(tf(mean)·mean, mean)`, and
/// ALPHA accumulates front to back with opacity equal to the intensity,
/// terminating early at saturation. An empty sample slice composites to
/// nothing.
pub fn composite_ray(
    intensities: &[f32],
    technique: Technique,
    tf: &TransferFunction,
) -> [f32; 4] {
    if intensities.is_empty() {
        return [0.0; 4];
    }
    let inv_count = 1.0 / intensities.len() as f32;

    match technique {
        Technique::Mip => {
            let max = intensities.iter().fold(0.0f32, |m, &i| m.max(i));
            let color = classify(tf, max);
            [color[0] * max, color[1] * max, color[2] * max, max]
        }
        Technique::Average => {
            let mean = intensities.iter().sum::<f32>() * inv_count;
            let color = classify(tf, mean);
            [color[0] * mean, color[1] * mean, color[2] * mean, mean]
        }
        Technique::Alpha => {
            let mut accum = [0.0f32; 4];
            for &intensity in intensities {
                let color = classify(tf, intensity);
                let weight = (1.0 - accum[3]) * intensity;
                accum[0] += color[0] * weight;
                accum[1] += color[1] * weight;
                accum[2] += color[2] * weight;
                accum[3] += weight;
                if accum[3] > ALPHA_SATURATION {
                    break;
                }
            }
            accum
        }
    }
}

fn classify(tf: &TransferFunction, intensity: f32) -> [f32; 3] {
    let [r, g, b] = tf.sample(intensity);
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TECHNIQUES: [Technique; 3] =
        [Technique::Mip, Technique::Alpha, Technique::Average];

    fn assert_near(a: [f32; 4], b: [f32; 4]) {
        for i in 0..4 {
            assert!((a[i] - b[i]).abs() < 1e-5, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_all_zero_ray_composites_to_nothing() {
        // A zero-intensity volume must leave only the background, so every
        // technique has to produce zero premultiplied color and opacity
        let tf = TransferFunction::flame_preset();
        for technique in TECHNIQUES {
            assert_near(composite_ray(&[0.0; 64], technique, &tf), [0.0; 4]);
        }
    }

    #[test]
    fn test_max_intensity_ray_equal_across_techniques() {
        // At uniform maximum intensity all techniques see the same value:
        // max = mean = 1 and alpha saturates on the first sample
        let tf = TransferFunction::flame_preset();
        let samples = [1.0f32; 7];
        let mip = composite_ray(&samples, Technique::Mip, &tf);
        let alpha = composite_ray(&samples, Technique::Alpha, &tf);
        let average = composite_ray(&samples, Technique::Average, &tf);
        assert_near(mip, alpha);
        assert_near(mip, average);
        assert!((mip[3] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_alpha_terminates_once_saturated() {
        // After the first fully opaque sample the tail cannot contribute
        let tf = TransferFunction::flame_preset();
        let short = composite_ray(&[1.0, 1.0], Technique::Alpha, &tf);
        let long = composite_ray(&[1.0, 0.3, 0.9, 0.2], Technique::Alpha, &tf);
        assert_near(short, long);
    }

    #[test]
    fn test_average_uses_mean_intensity() {
        let tf = TransferFunction::flame_preset();
        let result = composite_ray(&[0.0, 1.0], Technique::Average, &tf);
        let color = tf.sample(0.5);
        assert!((result[3] - 0.5).abs() < 1e-5);
        assert!((result[0] - color[0] as f32 / 255.0 * 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_mip_keeps_brightest_sample() {
        let tf = TransferFunction::flame_preset();
        let result = composite_ray(&[0.1, 0.6, 0.3], Technique::Mip, &tf);
        assert!((result[3] - 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_empty_ray_composites_to_nothing() {
        let tf = TransferFunction::flame_preset();
        for technique in TECHNIQUES {
            assert_near(composite_ray(&[], technique, &tf), [0.0; 4]);
        }
    }
}
