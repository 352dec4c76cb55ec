use super::constants::*;
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::PI;

/// GPU-ready particle attributes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Particle {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

/// Scatter `count` particles in a spherical shell around the field centre.
pub fn generate_particles(rng: &mut impl Rng, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let radius = rng.gen::<f32>() * PARTICLE_RADIUS_SPAN + PARTICLE_RADIUS_MIN;
            let theta = rng.gen::<f32>() * PI * 2.0;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            let position = [
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos() + PARTICLE_Z_OFFSET,
            ];
            let color = if rng.gen::<f32>() > PARTICLE_ACCENT_THRESHOLD {
                GOLD
            } else {
                OFF_WHITE
            };
            let size = rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_SIZE_MIN;
            Particle {
                position,
                size,
                color,
                _pad: 0.0,
            }
        })
        .collect()
}

/// Flat annulus in the XY plane as a triangle list of (x, y) pairs.
pub fn ring_vertices(inner: f32, outer: f32, segments: u32) -> Vec<[f32; 2]> {
    let segments = segments.max(3);
    let mut out = Vec::with_capacity(segments as usize * 6);
    for s in 0..segments {
        let a0 = s as f32 / segments as f32 * PI * 2.0;
        let a1 = (s + 1) as f32 / segments as f32 * PI * 2.0;
        let (i0, o0) = (polar(inner, a0), polar(outer, a0));
        let (i1, o1) = (polar(inner, a1), polar(outer, a1));
        out.extend_from_slice(&[i0, o0, o1, i0, o1, i1]);
    }
    out
}

#[inline]
fn polar(r: f32, a: f32) -> [f32; 2] {
    [r * a.cos(), r * a.sin()]
}

/// Static placement of one background ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingLayout {
    pub z: f32,
    pub scale: f32,
    pub opacity: f32,
    /// +1 or -1: alternate rings spin in opposite directions.
    pub spin: f32,
}

pub fn ring_layouts() -> Vec<RingLayout> {
    (0..RING_COUNT)
        .map(|i| RingLayout {
            z: RING_BASE_Z - RING_Z_STEP * i as f32,
            scale: 1.0 + RING_SCALE_STEP * i as f32,
            opacity: RING_BASE_OPACITY - RING_OPACITY_STEP * i as f32,
            spin: if i % 2 == 0 { 1.0 } else { -1.0 },
        })
        .collect()
}

impl RingLayout {
    pub fn model(&self, time: f32) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, self.z))
            * Mat4::from_rotation_z(time * RING_SPIN_RATE * self.spin)
            * Mat4::from_scale(Vec3::new(self.scale, self.scale, 1.0))
    }
}

/// Viewport in CSS px plus the clamped device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio: if device_pixel_ratio > 0.0 {
                device_pixel_ratio.min(MAX_PIXEL_RATIO)
            } else {
                1.0
            },
        }
    }

    pub fn aspect(&self) -> f32 {
        if self.height <= 0.0 {
            return 1.0;
        }
        (self.width / self.height) as f32
    }

    /// Backing-store size of the canvas in device pixels (never zero).
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).round() as u32;
        let h = (self.height * self.pixel_ratio).round() as u32;
        (w.max(1), h.max(1))
    }
}

/// Perspective camera drifting toward a pointer-derived offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        self.aspect = viewport.aspect();
    }

    pub fn follow(&mut self, pointer_ndc: Vec2) {
        self.eye.x += (pointer_ndc.x * CAMERA_SWAY_X - self.eye.x) * CAMERA_FOLLOW;
        self.eye.y += (pointer_ndc.y * CAMERA_SWAY_Y - self.eye.y) * CAMERA_FOLLOW;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Clock-driven motion of the whole scene, advanced once per render frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneMotion {
    pub time: f32,
    pub camera: Camera,
}

impl SceneMotion {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            time: 0.0,
            camera: Camera::new(viewport.aspect()),
        }
    }

    pub fn step(&mut self, pointer_ndc: Vec2) {
        self.time += CLOCK_STEP;
        self.camera.follow(pointer_ndc);
    }

    /// Particle cloud orientation for the current time.
    pub fn field_rotation(&self) -> (f32, f32) {
        let x = (self.time * FIELD_WOBBLE_RATE).sin() * FIELD_WOBBLE_AMPLITUDE;
        let y = self.time * FIELD_SPIN_Y;
        (x, y)
    }

    pub fn field_model(&self) -> Mat4 {
        let (x, y) = self.field_rotation();
        Mat4::from_euler(EulerRot::XYZ, x, y, 0.0)
    }
}
