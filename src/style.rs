use druid::{Color, Env, KeyOrValue, UpdateCtx, Vec2};

/// Which parts of a widget pass a style mutation dirties.
///
/// Setters return one of these instead of poking a context directly, so the
/// effect of a mutation is visible at the call site and the owning container
/// decides when to apply it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invalidation {
    paint: bool,
    layout: bool,
}

impl Invalidation {
    pub const NONE: Invalidation = Invalidation {
        paint: false,
        layout: false,
    };
    /// The widget needs repainting.
    pub const PAINT: Invalidation = Invalidation {
        paint: true,
        layout: false,
    };
    /// The widget's size requirements changed. Layout implies repaint.
    pub const LAYOUT: Invalidation = Invalidation {
        paint: true,
        layout: true,
    };

    pub fn needs_paint(self) -> bool {
        self.paint
    }

    pub fn needs_layout(self) -> bool {
        self.layout
    }

    pub fn is_none(self) -> bool {
        !self.paint && !self.layout
    }
}

impl std::ops::BitOr for Invalidation {
    type Output = Invalidation;

    fn bitor(self, rhs: Invalidation) -> Invalidation {
        Invalidation {
            paint: self.paint || rhs.paint,
            layout: self.layout || rhs.layout,
        }
    }
}

impl std::ops::BitOrAssign for Invalidation {
    fn bitor_assign(&mut self, rhs: Invalidation) {
        *self = *self | rhs;
    }
}

/// The styling state of a [`ShadowContainer`](crate::ShadowContainer).
///
/// Every field is a [`KeyOrValue`], so styles can come from the environment
/// (the keys installed by [`configure_env`](crate::configure_env), which is
/// also the default for every field) or from a concrete override.
#[derive(Debug, Clone)]
pub struct ShadowStyle {
    background_color: KeyOrValue<Color>,
    background_radius: KeyOrValue<f64>,
    shadow_color: KeyOrValue<Color>,
    shadow_radius: KeyOrValue<f64>,
    offset_x: KeyOrValue<f64>,
    offset_y: KeyOrValue<f64>,
}

impl Default for ShadowStyle {
    fn default() -> ShadowStyle {
        ShadowStyle {
            background_color: crate::BACKGROUND_COLOR.into(),
            background_radius: crate::BACKGROUND_RADIUS.into(),
            shadow_color: crate::SHADOW_COLOR.into(),
            shadow_radius: crate::SHADOW_RADIUS.into(),
            offset_x: crate::SHADOW_OFFSET_X.into(),
            offset_y: crate::SHADOW_OFFSET_Y.into(),
        }
    }
}

impl ShadowStyle {
    pub fn set_background_color(&mut self, color: impl Into<KeyOrValue<Color>>) -> Invalidation {
        self.background_color = color.into();
        Invalidation::PAINT
    }

    pub fn set_background_radius(&mut self, radius: impl Into<KeyOrValue<f64>>) -> Invalidation {
        self.background_radius = radius.into();
        Invalidation::PAINT
    }

    pub fn set_shadow_color(&mut self, color: impl Into<KeyOrValue<Color>>) -> Invalidation {
        self.shadow_color = color.into();
        Invalidation::PAINT
    }

    /// The shadow radius changes how much room the container reserves around
    /// its child, so this asks for layout, not just paint.
    pub fn set_shadow_radius(&mut self, radius: impl Into<KeyOrValue<f64>>) -> Invalidation {
        self.shadow_radius = radius.into();
        Invalidation::LAYOUT
    }

    pub fn set_offset_x(&mut self, offset: impl Into<KeyOrValue<f64>>) -> Invalidation {
        self.offset_x = offset.into();
        Invalidation::LAYOUT
    }

    pub fn set_offset_y(&mut self, offset: impl Into<KeyOrValue<f64>>) -> Invalidation {
        self.offset_y = offset.into();
        Invalidation::LAYOUT
    }

    /// Maps env changes to the same flags the setters report, so env-driven
    /// styling invalidates exactly like programmatic styling.
    pub fn env_invalidation(&self, ctx: &mut UpdateCtx) -> Invalidation {
        let mut inval = Invalidation::NONE;
        if ctx.env_key_changed(&self.background_color)
            || ctx.env_key_changed(&self.background_radius)
            || ctx.env_key_changed(&self.shadow_color)
        {
            inval |= Invalidation::PAINT;
        }
        if ctx.env_key_changed(&self.shadow_radius)
            || ctx.env_key_changed(&self.offset_x)
            || ctx.env_key_changed(&self.offset_y)
        {
            inval |= Invalidation::LAYOUT;
        }
        inval
    }

    pub fn resolve(&self, env: &Env) -> ResolvedStyle {
        ResolvedStyle::new(
            self.background_color.resolve(env),
            self.background_radius.resolve(env),
            self.shadow_color.resolve(env),
            self.shadow_radius.resolve(env),
            Vec2::new(self.offset_x.resolve(env), self.offset_y.resolve(env)),
        )
    }
}

/// A [`ShadowStyle`] with every field resolved to a concrete value.
#[derive(Debug, Clone)]
pub struct ResolvedStyle {
    pub background_color: Color,
    pub background_radius: f64,
    pub shadow_color: Color,
    pub shadow_radius: f64,
    pub offset: Vec2,
}

impl ResolvedStyle {
    /// A negative radius has no sensible rendering; it gets clamped to zero
    /// so the draw path never sees one.
    pub fn new(
        background_color: Color,
        background_radius: f64,
        shadow_color: Color,
        shadow_radius: f64,
        offset: Vec2,
    ) -> ResolvedStyle {
        if background_radius < 0.0 || shadow_radius < 0.0 {
            log::warn!(
                "clamping negative radii to zero (background {}, shadow {})",
                background_radius,
                shadow_radius
            );
        }
        ResolvedStyle {
            background_color,
            background_radius: background_radius.max(0.0),
            shadow_color,
            shadow_radius: shadow_radius.max(0.0),
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_setters_only_repaint() {
        let mut style = ShadowStyle::default();
        assert_eq!(style.set_background_color(Color::WHITE), Invalidation::PAINT);
        assert_eq!(style.set_shadow_color(Color::BLACK), Invalidation::PAINT);
        assert_eq!(style.set_background_radius(2.0), Invalidation::PAINT);
    }

    #[test]
    fn margin_setters_relayout_too() {
        let mut style = ShadowStyle::default();
        let inval = style.set_shadow_radius(12.0);
        assert!(inval.needs_paint() && inval.needs_layout());
        assert!(style.set_offset_x(3.0).needs_layout());
        assert!(style.set_offset_y(-3.0).needs_layout());
    }

    #[test]
    fn invalidations_accumulate() {
        let mut inval = Invalidation::NONE;
        assert!(inval.is_none());
        inval |= Invalidation::PAINT;
        assert!(inval.needs_paint() && !inval.needs_layout());
        inval |= Invalidation::LAYOUT;
        assert_eq!(inval, Invalidation::LAYOUT);
    }

    #[test]
    fn negative_radii_are_clamped() {
        let style = ResolvedStyle::new(Color::WHITE, -4.0, Color::BLACK, -8.0, Vec2::ZERO);
        assert_eq!(style.background_radius, 0.0);
        assert_eq!(style.shadow_radius, 0.0);
    }
}
