//! Day/night surface blend.
//!
//! Mixes the day and night imagery of a surface point by the cosine between
//! its world-space normal and the sun direction. A soft band of
//! ±[`TERMINATOR_BAND`] around the terminator replaces a hard cutoff. The day
//! texture never drops below the ambient floor and the night texture is
//! never shown at full strength.
//!
//! [`blend_day_night`] is the reference implementation; the GPU evaluates
//! the same policy per fragment in [`DAY_NIGHT_SHADER_SOURCE`].

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// Half-width of the terminator band in cosine space.
pub const TERMINATOR_BAND: f32 = 0.15;

/// Maximum contribution of the night texture.
pub const NIGHT_STRENGTH: f32 = 0.9;

/// Day and night texture samples at one surface point, linear RGB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSamples {
    /// Day imagery.
    pub day: Vec3,
    /// Night imagery (city lights).
    pub night: Vec3,
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Daylight weight for a normal·sun cosine `k`.
pub fn day_amount(k: f32) -> f32 {
    smoothstep(-TERMINATOR_BAND, TERMINATOR_BAND, k)
}

/// Blend day and night imagery for one surface point.
///
/// Returns linear RGB with alpha equal to `gain`. `ambient` and `gain` are
/// clamped to `[0, 1]`.
pub fn blend_day_night(
    normal: Vec3,
    sun_direction: Vec3,
    samples: SurfaceSamples,
    ambient: f32,
    gain: f32,
) -> Vec4 {
    let ambient = ambient.clamp(0.0, 1.0);
    let k = normal.normalize_or_zero().dot(sun_direction.normalize_or_zero());
    let day = day_amount(k);
    let night = 1.0 - day;
    let rgb =
        samples.day * (ambient + day * (1.0 - ambient)) + samples.night * (night * NIGHT_STRENGTH);
    rgb.extend(gain.clamp(0.0, 1.0))
}

/// GPU-side day/night parameters, 32 bytes, std140-compatible.
///
/// Bound at `@group(1) @binding(0)` visible to `ShaderStages::FRAGMENT`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct DayNightUniform {
    /// xyz = world sun direction (normalized), w = ambient floor.
    pub sun_direction_ambient: [f32; 4],
    /// x = fade-in gain, yzw = padding.
    pub gain_padding: [f32; 4],
}

impl DayNightUniform {
    /// Pack the per-frame parameters.
    pub fn new(sun_direction: Vec3, ambient: f32, gain: f32) -> Self {
        let dir = sun_direction.normalize_or_zero();
        Self {
            sun_direction_ambient: [dir.x, dir.y, dir.z, ambient.clamp(0.0, 1.0)],
            gain_padding: [gain.clamp(0.0, 1.0), 0.0, 0.0, 0.0],
        }
    }
}

/// WGSL source for the day/night globe surface.
pub const DAY_NIGHT_SHADER_SOURCE: &str = r#"
struct DayNightUniforms {
    sun_direction_ambient: vec4<f32>,
    gain_padding: vec4<f32>,
};

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> view_proj: mat4x4<f32>;

@group(0) @binding(1)
var<uniform> model: mat4x4<f32>;

@group(1) @binding(0)
var<uniform> day_night: DayNightUniforms;

@group(2) @binding(0)
var day_texture: texture_2d<f32>;

@group(2) @binding(1)
var night_texture: texture_2d<f32>;

@group(2) @binding(2)
var surface_sampler: sampler;

@vertex
fn vs_globe(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = view_proj * model * vec4<f32>(in.position, 1.0);
    // The model matrix is a pure rotation, so it transforms normals directly.
    out.world_normal = (model * vec4<f32>(in.normal, 0.0)).xyz;
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_globe(in: VertexOutput) -> @location(0) vec4<f32> {
    let k = dot(normalize(in.world_normal), normalize(day_night.sun_direction_ambient.xyz));
    let day_amount = smoothstep(-0.15, 0.15, k);
    let night_amount = 1.0 - day_amount;
    let ambient = day_night.sun_direction_ambient.w;

    let day = textureSample(day_texture, surface_sampler, in.uv).rgb;
    let night = textureSample(night_texture, surface_sampler, in.uv).rgb;

    let color = day * (ambient + day_amount * (1.0 - ambient)) + night * (night_amount * 0.9);
    return vec4<f32>(color, day_night.gain_padding.x);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: SurfaceSamples = SurfaceSamples {
        day: Vec3::new(0.2, 0.5, 0.8),
        night: Vec3::new(1.0, 0.8, 0.3),
    };

    #[test]
    fn test_full_day_facing_sun() {
        assert!((day_amount(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_full_night_facing_away() {
        assert!(day_amount(-1.0).abs() < 1e-6);
    }

    #[test]
    fn test_terminator_is_half_lit() {
        assert!((day_amount(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_band_is_continuous_and_monotonic() {
        let steps = 600;
        let mut prev = day_amount(-TERMINATOR_BAND - 0.01);
        for i in 0..=steps {
            let k = -TERMINATOR_BAND + 2.0 * TERMINATOR_BAND * i as f32 / steps as f32;
            let d = day_amount(k);
            assert!(d >= prev, "day_amount decreased at k={k}: {prev} -> {d}");
            assert!(d - prev < 0.01, "day_amount jumped at k={k}: {prev} -> {d}");
            prev = d;
        }
        assert!((prev - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_lit_side_shows_only_day_texture() {
        let c = blend_day_night(Vec3::X, Vec3::X, SAMPLES, 0.12, 1.0);
        assert!((c.truncate() - SAMPLES.day).length() < 1e-6);
        assert_eq!(c.w, 1.0);
    }

    #[test]
    fn test_dark_side_keeps_ambient_floor_and_dimmed_lights() {
        let ambient = 0.12;
        let c = blend_day_night(Vec3::NEG_X, Vec3::X, SAMPLES, ambient, 1.0);
        let expected = SAMPLES.day * ambient + SAMPLES.night * NIGHT_STRENGTH;
        assert!((c.truncate() - expected).length() < 1e-6, "got {c}");
    }

    #[test]
    fn test_unnormalized_inputs() {
        let a = blend_day_night(
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(0.0, 0.1, 0.0),
            SAMPLES,
            0.1,
            1.0,
        );
        let b = blend_day_night(Vec3::Y, Vec3::Y, SAMPLES, 0.1, 1.0);
        assert!((a - b).length() < 1e-6);
    }

    #[test]
    fn test_alpha_is_gain() {
        let c = blend_day_night(Vec3::Y, Vec3::X, SAMPLES, 0.1, 0.3);
        assert!((c.w - 0.3).abs() < 1e-6);
        let clamped = blend_day_night(Vec3::Y, Vec3::X, SAMPLES, 0.1, 4.0);
        assert_eq!(clamped.w, 1.0);
    }

    #[test]
    fn test_uniform_buffer_layout_matches_shader() {
        assert_eq!(std::mem::size_of::<DayNightUniform>(), 32);
        assert_eq!(std::mem::offset_of!(DayNightUniform, sun_direction_ambient), 0);
        assert_eq!(std::mem::offset_of!(DayNightUniform, gain_padding), 16);
    }

    #[test]
    fn test_uniform_packs_normalized_direction() {
        let u = DayNightUniform::new(Vec3::new(3.0, 0.0, 4.0), 0.12, 0.5);
        assert!((u.sun_direction_ambient[0] - 0.6).abs() < 1e-6);
        assert!((u.sun_direction_ambient[2] - 0.8).abs() < 1e-6);
        assert!((u.sun_direction_ambient[3] - 0.12).abs() < 1e-6);
        assert!((u.gain_padding[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_shader_uses_same_constants() {
        assert!(DAY_NIGHT_SHADER_SOURCE.contains("smoothstep(-0.15, 0.15, k)"));
        assert!(DAY_NIGHT_SHADER_SOURCE.contains("night_amount * 0.9"));
        assert!(DAY_NIGHT_SHADER_SOURCE.contains("fn fs_globe"));
        assert!(DAY_NIGHT_SHADER_SOURCE.contains("fn vs_globe"));
    }
}
