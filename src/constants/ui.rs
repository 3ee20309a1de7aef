//! Window and label constants.

/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;

/// Nickname used when none is supplied
pub const DEFAULT_NICKNAME: &str = "Player";
/// Nickname label font size
pub const NICKNAME_FONT_SIZE: f32 = 12.0;

/// Sprite manifest location
pub const DEFAULT_MANIFEST_PATH: &str = "assets/sprites.json";
