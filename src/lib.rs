use druid::{Color, Env, Key};

pub const BACKGROUND_COLOR: Key<Color> = Key::new("ink.shadow-widget.background-color");
pub const BACKGROUND_RADIUS: Key<f64> = Key::new("ink.shadow-widget.background-radius");
pub const SHADOW_COLOR: Key<Color> = Key::new("ink.shadow-widget.shadow-color");
pub const SHADOW_RADIUS: Key<f64> = Key::new("ink.shadow-widget.shadow-radius");
pub const SHADOW_OFFSET_X: Key<f64> = Key::new("ink.shadow-widget.shadow-offset-x");
pub const SHADOW_OFFSET_Y: Key<f64> = Key::new("ink.shadow-widget.shadow-offset-y");

// Muted grays that work well for panel-style shadows on a light UI.
pub const PANEL_SHADOW_GRAY: Color = Color::rgb8(0xa1, 0xa1, 0xa1);
pub const PANEL_BACKGROUND_GRAY: Color = Color::rgb8(0xf1, 0xf1, 0xf1);

pub fn configure_env(e: &mut Env) {
    e.set(BACKGROUND_COLOR, Color::WHITE);
    e.set(BACKGROUND_RADIUS, 4.0);
    e.set(SHADOW_COLOR, Color::BLACK);
    e.set(SHADOW_RADIUS, 8.0);
    e.set(SHADOW_OFFSET_X, 0.0);
    e.set(SHADOW_OFFSET_Y, 0.0);
}

mod blur;
mod container;
mod geometry;
mod shapes;
mod style;

pub use blur::{BlurShadow, ShadowSides};
pub use container::{ChildAlreadyAttached, ShadowContainer};
pub use geometry::{background_rect, required_margin};
pub use shapes::{gradient_stops, shadow_shapes, ShadowShape};
pub use style::{Invalidation, ResolvedStyle, ShadowStyle};
