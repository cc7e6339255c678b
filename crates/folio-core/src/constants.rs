use crate::color::Rgb;

// Shared tuning constants for every pointer-reactive field.

// Integration step
pub const PUSH_COEFFICIENT: f32 = 2.5; // impulse scale applied to force²
pub const FRICTION: f32 = 0.92; // per-tick velocity retention
pub const SPRING: f32 = 0.15; // fraction of the offset pulled back per tick
pub const ACTIVATION_STEP: f32 = 0.05; // activation progress moved per tick

// Influence radius floor; the force divides by the radius
pub const MIN_INFLUENCE_RADIUS: f32 = 1.0;

// Contribution graph
pub const CONTRIBUTION_RADIUS: f32 = 50.0;
pub const CONTRIBUTION_RADIUS_MAX: f32 = 200.0; // slider upper bound
pub const CONTRIBUTION_RADIUS_STEP: f32 = 10.0; // slider increment
pub const CELL_SIZE: f32 = 11.0; // px, square cells drawn as circles
pub const WEEK_GAP: f32 = 4.0; // px between week columns
pub const DAY_GAP: f32 = 8.0; // px between day rows
pub const PLACEHOLDER_WEEKS: usize = 52;
pub const PLACEHOLDER_DAYS: usize = 7;

// Logo dots
pub const LOGO_RADIUS: f32 = 100.0;
pub const DOT_SIZE: f32 = 4.0; // px diameter
pub const DOT_SPACING: f32 = 2.0; // gap = dot_size * spacing * 0.5
pub const SAMPLING_GRID_WIDTH: u32 = 40; // sampled columns
pub const BRIGHTNESS_THRESHOLD: u8 = 128; // silhouette mode keeps darker pixels
pub const ALPHA_THRESHOLD: u8 = 128;
pub const ACCENT: Rgb = Rgb::new(0x3c, 0x7c, 0xff);
pub const DEFAULT_GRADIENT: [Rgb; 2] = [ACCENT, Rgb::new(0xec, 0x48, 0x99)];

// Ambient field
pub const AMBIENT_GAP: f32 = 15.0; // px lattice pitch
pub const AMBIENT_PARTICLE_RADIUS: f32 = 1.0; // px
pub const AMBIENT_RADIUS: f32 = 100.0;
pub const AMBIENT_FRICTION: f32 = 0.95;
pub const AMBIENT_SPRING: f32 = 0.2;
pub const AMBIENT_VIEWPORT_FRACTION: f32 = 0.8; // canvas size relative to viewport
pub const AMBIENT_LIGHT: Rgb = Rgb::new(0x26, 0x25, 0x23);
pub const AMBIENT_DARK: Rgb = Rgb::new(0xff, 0xf7, 0xf0);

// Contribution color ramps, indexed by `intensity_bucket`
pub const RAMP_RESTING_LIGHT: [Rgb; 5] = [
    Rgb::new(0xeb, 0xe6, 0xdd),
    Rgb::new(0xcb, 0xbf, 0xaf),
    Rgb::new(0xa8, 0x95, 0x82),
    Rgb::new(0x80, 0x70, 0x5f),
    Rgb::new(0x5a, 0x4d, 0x3f),
];
pub const RAMP_RESTING_DARK: [Rgb; 5] = [
    Rgb::new(0x2d, 0x2c, 0x29),
    Rgb::new(0x3f, 0x3d, 0x3a),
    Rgb::new(0x56, 0x53, 0x50),
    Rgb::new(0x6e, 0x68, 0x60),
    Rgb::new(0x93, 0x8d, 0x82),
];
pub const RAMP_ACTIVE_LIGHT: [Rgb; 5] = [
    Rgb::new(0xeb, 0xed, 0xf0),
    Rgb::new(0x9b, 0xe9, 0xa8),
    Rgb::new(0x40, 0xc4, 0x63),
    Rgb::new(0x30, 0xa1, 0x4e),
    Rgb::new(0x21, 0x6e, 0x39),
];
pub const RAMP_ACTIVE_DARK: [Rgb; 5] = [
    Rgb::new(0x1c, 0x1f, 0x26),
    Rgb::new(0x0e, 0x44, 0x29),
    Rgb::new(0x00, 0x6d, 0x32),
    Rgb::new(0x26, 0xa6, 0x41),
    Rgb::new(0x39, 0xd3, 0x53),
];
// Upper bounds (exclusive) of buckets 1..=3; bucket 0 is exactly zero
pub const RAMP_THRESHOLDS: [u32; 3] = [2, 5, 10];

// Grayscale weights (ITU-R BT.601 luma)
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];
