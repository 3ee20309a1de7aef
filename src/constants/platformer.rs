//! Platformer constants (player tunables, world layout, backdrop).

/// Player bounding box width
pub const PLAYER_WIDTH: f32 = 36.0;
/// Player bounding box height
pub const PLAYER_HEIGHT: f32 = 52.0;
/// Horizontal run speed (pixels per second)
pub const PLAYER_MOVE_SPEED: f32 = 260.0;
/// Initial upward speed of a jump
pub const PLAYER_JUMP_POWER: f32 = 520.0;
/// Downward acceleration (pixels per second squared)
pub const PLAYER_GRAVITY: f32 = 1500.0;
/// Cap on downward speed
pub const PLAYER_MAX_FALL_SPEED: f32 = 900.0;

/// World width in pixels
pub const WORLD_WIDTH: f32 = 3000.0;
/// World height in pixels
pub const WORLD_HEIGHT: f32 = 720.0;
/// Y coordinate of the ground line
pub const WORLD_GROUND_Y: f32 = 600.0;

/// Player spawn x
pub const PLAYER_SPAWN_X: f32 = 120.0;
/// How far above the ground the player spawns (drops in on the first frames)
pub const PLAYER_SPAWN_DROP: f32 = 200.0;

/// Corner radius of the player body
pub const BODY_CORNER_RADIUS: f32 = 10.0;
/// Gap between the feet and the shadow center
pub const SHADOW_OFFSET: f32 = 6.0;
/// Vertical radius of the shadow ellipse
pub const SHADOW_RADIUS_Y: f32 = 6.0;
/// Face circle radius
pub const FACE_RADIUS: f32 = 9.0;
/// Horizontal eye offset from the face center
pub const EYE_OFFSET: f32 = 3.0;
/// Eye dot radius
pub const EYE_RADIUS: f32 = 1.4;
/// Gap between the body top and the nickname baseline
pub const NICKNAME_GAP: f32 = 10.0;

/// Horizontal spacing between hill silhouette samples
pub const HILL_SAMPLE_SPACING: f32 = 48.0;
/// Tallest hill above the ground line
pub const HILL_MAX_HEIGHT: f32 = 220.0;
/// Noise frequency along x for the hill silhouette
pub const HILL_NOISE_SCALE: f64 = 0.0025;
/// Number of clouds scattered across the world
pub const CLOUD_COUNT: usize = 14;
/// Spacing between grass tufts on the ground line
pub const GRASS_SPACING: f32 = 22.0;
/// Seed for the backdrop (keeps the scenery stable across runs)
pub const BACKDROP_SEED: u64 = 7;
