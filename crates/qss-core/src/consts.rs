/// Rows of every plane handled by the kernel (image height).
pub const M: usize = 48;

/// Columns of every plane handled by the kernel (image width).
pub const N: usize = 64;

/// Channels of a pure-imaginary quaternion image (b, c, d).
pub const PURE_CHANNEL_COUNT: usize = 3;

/// Channels of a full quaternion image (a, b, c, d).
pub const FULL_CHANNEL_COUNT: usize = 4;

/// Imaginary components of the default axis, before normalization.
pub const DEFAULT_AXIS_DIRECTION: [f64; 3] = [-1.0, -1.0, -1.0];

/// Tolerance on |a| and |b^2 + c^2 + d^2 - 1| when validating an axis.
pub const AXIS_TOLERANCE: f64 = 1e-5;

/// Minimum batch size to compute patches in parallel with Rayon.
pub const PARALLEL_PATCH_THRESHOLD: usize = 4;

/// Default Gaussian smoothing sigma, as a fraction of the map width.
pub const DEFAULT_SMOOTHING_SIGMA_FRACTION: f32 = 0.045;

/// Small epsilon to avoid division by zero when rescaling maps.
pub const EPSILON: f32 = 1e-10;

/// CIE L* is divided by this to bring it near [0, 1].
pub const LAB_L_SCALE: f32 = 100.0;

/// CIE a* and b* are divided by this to bring them near [-1, 1].
pub const LAB_AB_SCALE: f32 = 128.0;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism in filters.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Linear sRGB to CIE XYZ (D65), row-major.
pub const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192, 0.950_304_1],
];

/// CIE XYZ of the D65 reference white.
pub const D65_WHITE: [f32; 3] = [0.950_47, 1.0, 1.088_83];
