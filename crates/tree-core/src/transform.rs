use glam::{Mat4, Quat, Vec3};

/// Local transform of one rendered instance, relative to the ensemble group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    #[inline]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// GPU-ready per-instance record (column-major model matrix + RGBA).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    pub fn new(transform: &Transform, rgb: [f32; 3]) -> Self {
        Self {
            model: transform.to_matrix().to_cols_array_2d(),
            color: [rgb[0], rgb[1], rgb[2], 1.0],
        }
    }
}

/// Euler angles applied in X, then Y, then Z order (`Rx * Ry * Rz`).
#[inline]
pub fn euler_xyz(angles: Vec3) -> Quat {
    Quat::from_rotation_x(angles.x)
        * Quat::from_rotation_y(angles.y)
        * Quat::from_rotation_z(angles.z)
}

/// Exact inverse of [`euler_xyz`]: negated angles composed in Z, Y, X order.
///
/// `(Rx(a) * Ry(b) * Rz(c))⁻¹ = Rz(-c) * Ry(-b) * Rx(-a)`, since each
/// single-axis rotation inverts by negating its angle and a product inverts by
/// reversing its factors.
#[inline]
pub fn euler_xyz_inverse(angles: Vec3) -> Quat {
    Quat::from_rotation_z(-angles.z)
        * Quat::from_rotation_y(-angles.y)
        * Quat::from_rotation_x(-angles.x)
}

/// Frame-scaled linear step toward `target`. Overshoots when `t > 1`.
#[inline]
pub fn lerp_f32(current: f32, target: f32, t: f32) -> f32 {
    current + (target - current) * t
}
