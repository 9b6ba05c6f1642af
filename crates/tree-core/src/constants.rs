// Shared tuning constants for gesture classification and choreography.

// Classifier thresholds (tip-to-wrist vs joint-to-wrist ratios)
pub const FINGER_EXTENDED_RATIO: f32 = 1.2;
pub const THUMB_EXTENDED_RATIO: f32 = 1.1;
pub const OPEN_HAND_MIN_EXTENDED: usize = 4;
pub const FIST_MAX_EXTENDED: usize = 1;
pub const NO_HAND_REFERENCE: [f32; 2] = [0.5, 0.5];

// Particle counts per category
pub const ORNAMENT_COUNT: usize = 450;
pub const LIGHT_COUNT: usize = 500;
pub const GIFT_COUNT: usize = 150;
pub const DIAMOND_COUNT: usize = 150;
pub const SILVER_COUNT: usize = 200;

// Cone ("tree") layout
pub const TREE_HALF_HEIGHT: f32 = 4.5;
pub const TREE_HEIGHT: f32 = 2.0 * TREE_HALF_HEIGHT;
pub const TREE_APEX_RADIUS: f32 = 0.1;
pub const TREE_BASE_RADIUS_SPAN: f32 = 4.5;
pub const SPIRAL_TURNS_FACTOR: f32 = 40.0; // angle = y_norm * 40π
pub const RADIAL_NOISE: f32 = 0.6;
pub const LIGHT_RADIAL_NOISE: f32 = 0.1;

// Exploded shell
pub const SHELL_MIN_RADIUS: f32 = 4.0;
pub const SHELL_RADIUS_SPAN: f32 = 6.0;

// Global shrink applied to every category's base scale (≈ 0.7 / 1.5)
pub const GLOBAL_SCALE_SHRINK: f32 = 0.46;
pub const GIFT_AXIS_JITTER: f32 = 0.2;

// Interpolation speeds (per second, used as raw lerp factors)
pub const ASSEMBLE_SPEED: f32 = 2.0;
pub const EXPLODE_SPEED: f32 = 3.0;
pub const DRIFT_SPEED: f32 = 2.0;
pub const FOCUS_SPEED: f32 = 4.0;

// Per-particle motion while exploded
pub const PARTICLE_TUMBLE_RATE: f32 = 1.0;
pub const BOB_AMPLITUDE: f32 = 0.02;
pub const BOB_FREQUENCY: f32 = 2.0;

// Group orientation
pub const HAND_ROTATION_GAIN: f32 = 1.5;
pub const HAND_TRACK_RATE: f32 = 3.0;
pub const AUTO_YAW_RATE: f32 = 0.1;
pub const PITCH_RELAX_RATE: f32 = 2.0;

// Photos
pub const PHOTO_MIN_Y: f32 = -4.0;
pub const PHOTO_HEIGHT_SPAN: f32 = 8.0;
pub const PHOTO_RADIAL_OFFSET: f32 = 0.5;
pub const PHOTO_RADIAL_JITTER: f32 = 0.4;
pub const PHOTO_SHELL_MIN_RADIUS: f32 = 5.0;
pub const PHOTO_SHELL_RADIUS_SPAN: f32 = 4.0;
pub const PHOTO_TILT_X_SPAN: f32 = 0.5;
pub const PHOTO_TILT_Z_SPAN: f32 = 0.2;
pub const PHOTO_SCALE: f32 = 0.5;
pub const PHOTO_FOCUS_SCALE: f32 = 1.5;
pub const PHOTO_INITIAL_SCALE: f32 = 1.0;
pub const PHOTO_SWAY_AMPLITUDE: f32 = 0.002;

// Camera
pub const CAMERA_Z: f32 = 12.0;
pub const FOCUS_DISTANCE: f32 = 3.0; // units in front of the camera

// Star topper
pub const STAR_ASSEMBLED_Y: f32 = 4.8;
pub const STAR_EXPLODED_Y: f32 = 7.0;
pub const STAR_ASSEMBLED_SCALE: f32 = 1.0;
pub const STAR_EXPLODED_SCALE: f32 = 1.5;
pub const STAR_SPEED: f32 = 2.0;
pub const STAR_SPIN_RATE: f32 = 0.5;
pub const STAR_WOBBLE: f32 = 0.1;

// Snow
pub const SNOW_COUNT: usize = 2000;
pub const SNOW_BOX_SIZE: f32 = 40.0;
pub const SNOW_FALL_SPEED: f32 = 1.5;
pub const SNOW_FLOOR_Y: f32 = -15.0;
pub const SNOW_CEILING_Y: f32 = 15.0;
pub const SNOW_SWAY_RATE: f32 = 0.6;
pub const SNOW_SWAY_FREQUENCY: f32 = 0.5;

// Palettes (sRGB hex)
pub const WARM_PALETTE: [u32; 4] = [
    0xFFD700, // gold
    0xD4AF37, // metallic gold
    0xC41E3A, // cardinal red
    0x228B22, // forest green
];
pub const LIGHT_PALETTE: [u32; 5] = [
    0xFFD700, // warm
    0xFF4500, // red-orange
    0x32CD32, // lime
    0x00FFFF, // cyan
    0xFFFFFF, // white
];
pub const GIFT_PALETTE: [u32; 3] = [
    0x8B0000, // dark red
    0x006400, // dark green
    0xDAA520, // goldenrod
];
pub const SILVER_PALETTE: [u32; 1] = [0xFFFFFF];

#[inline]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}
