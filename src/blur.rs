use druid::widget::prelude::*;
use druid::{Color, Data, Insets, KeyOrValue, Rect, Vec2, WidgetPod};

bitflags::bitflags! {
    /// The sides of a [`BlurShadow`] panel that reserve room for the shadow.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ShadowSides: u8 {
        const LEFT = 1;
        const TOP = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
        const ALL = Self::LEFT.bits() | Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits();
    }
}

/// Extra room between the panel and the widget edge, beyond the blur radius,
/// so the blur tail doesn't end abruptly at the bounds.
const PANEL_SPREAD: f64 = 5.0;

/// A simpler shadowed panel than [`ShadowContainer`](crate::ShadowContainer):
/// a blurred rectangular shadow behind a solid, optionally rounded panel.
///
/// Instead of gradient compositing this uses piet's blur directly, and
/// instead of an offset-aware margin it insets the panel by a fixed amount on
/// the sides named in [`ShadowSides`]; a side left out of the mask puts the
/// panel flush with the widget edge, with no shadow room on that side.
pub struct BlurShadow<T, W> {
    child: WidgetPod<T, W>,
    sides: ShadowSides,
    panel_color: KeyOrValue<Color>,
    shadow_color: KeyOrValue<Color>,
    shadow_radius: KeyOrValue<f64>,
    corner_radius: KeyOrValue<f64>,
    offset: Vec2,
}

/// The widget bounds inset by `inset` on each enabled side.
fn panel_rect(size: Size, sides: ShadowSides, inset: f64) -> Rect {
    let pick = |side| if sides.contains(side) { inset } else { 0.0 };
    Rect::new(
        pick(ShadowSides::LEFT),
        pick(ShadowSides::TOP),
        size.width - pick(ShadowSides::RIGHT),
        size.height - pick(ShadowSides::BOTTOM),
    )
}

impl<T, W: Widget<T>> BlurShadow<T, W> {
    pub fn new(child: W) -> BlurShadow<T, W> {
        BlurShadow {
            child: WidgetPod::new(child),
            sides: ShadowSides::ALL,
            panel_color: crate::PANEL_BACKGROUND_GRAY.into(),
            shadow_color: crate::PANEL_SHADOW_GRAY.into(),
            shadow_radius: crate::SHADOW_RADIUS.into(),
            corner_radius: crate::BACKGROUND_RADIUS.into(),
            offset: Vec2::ZERO,
        }
    }

    pub fn sides(mut self, sides: ShadowSides) -> Self {
        self.sides = sides;
        self
    }

    pub fn panel_color(mut self, color: impl Into<KeyOrValue<Color>>) -> Self {
        self.panel_color = color.into();
        self
    }

    pub fn shadow_color(mut self, color: impl Into<KeyOrValue<Color>>) -> Self {
        self.shadow_color = color.into();
        self
    }

    pub fn shadow_radius(mut self, radius: impl Into<KeyOrValue<f64>>) -> Self {
        self.shadow_radius = radius.into();
        self
    }

    pub fn corner_radius(mut self, radius: impl Into<KeyOrValue<f64>>) -> Self {
        self.corner_radius = radius.into();
        self
    }

    pub fn shadow_offset(mut self, offset: impl Into<Vec2>) -> Self {
        self.offset = offset.into();
        self
    }

    fn panel_insets(&self, env: &Env) -> Insets {
        let inset = self.shadow_radius.resolve(env).max(0.0) + PANEL_SPREAD;
        let pick = |side| if self.sides.contains(side) { inset } else { 0.0 };
        Insets::new(
            pick(ShadowSides::LEFT),
            pick(ShadowSides::TOP),
            pick(ShadowSides::RIGHT),
            pick(ShadowSides::BOTTOM),
        )
    }
}

impl<T: Data, W: Widget<T>> Widget<T> for BlurShadow<T, W> {
    fn event(&mut self, ctx: &mut EventCtx, ev: &Event, data: &mut T, env: &Env) {
        self.child.event(ctx, ev, data, env);
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, ev: &LifeCycle, data: &T, env: &Env) {
        self.child.lifecycle(ctx, ev, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        if ctx.env_key_changed(&self.shadow_radius) {
            ctx.request_layout();
        }
        if ctx.env_key_changed(&self.panel_color)
            || ctx.env_key_changed(&self.shadow_color)
            || ctx.env_key_changed(&self.corner_radius)
        {
            ctx.request_paint();
        }
        self.child.update(ctx, data, env);
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let insets = self.panel_insets(env);
        let child_bc = bc.shrink((insets.x_value(), insets.y_value()));
        let child_size = self.child.layout(ctx, &child_bc, data, env);
        self.child
            .set_origin(ctx, data, env, (insets.x0, insets.y0).into());

        // piet paints a blur out to about 2.5 times its radius, and the
        // offset can push it past the unshadowed sides.
        let radius = self.shadow_radius.resolve(env).max(0.0);
        let spill = 2.5 * radius + self.offset.x.abs().max(self.offset.y.abs());
        ctx.set_paint_insets(Insets::uniform(spill));

        bc.constrain(Size::new(
            child_size.width + insets.x_value(),
            child_size.height + insets.y_value(),
        ))
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        let radius = self.shadow_radius.resolve(env).max(0.0);
        let panel = panel_rect(ctx.size(), self.sides, radius + PANEL_SPREAD);

        if panel.width() > 0.0 && panel.height() > 0.0 {
            let shadow_color = self.shadow_color.resolve(env);
            let panel_color = self.panel_color.resolve(env);
            let corner = self.corner_radius.resolve(env).max(0.0);

            ctx.blurred_rect(panel + self.offset, radius, &shadow_color);
            if corner > 0.0 {
                ctx.fill(panel.to_rounded_rect(corner), &panel_color);
            } else {
                ctx.fill(panel, &panel_color);
            }
        } else {
            log::trace!("panel too small for its shadow, skipping: {:?}", panel);
        }

        self.child.paint(ctx, data, env);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sides_inset_evenly() {
        let rect = panel_rect(Size::new(100.0, 80.0), ShadowSides::ALL, 13.0);
        assert_eq!(rect, Rect::new(13.0, 13.0, 87.0, 67.0));
    }

    #[test]
    fn masked_out_sides_stay_flush() {
        let sides = ShadowSides::LEFT | ShadowSides::TOP;
        let rect = panel_rect(Size::new(100.0, 80.0), sides, 13.0);
        assert_eq!(rect, Rect::new(13.0, 13.0, 100.0, 80.0));

        let rect = panel_rect(Size::new(100.0, 80.0), ShadowSides::empty(), 13.0);
        assert_eq!(rect, Rect::new(0.0, 0.0, 100.0, 80.0));
    }

    #[test]
    fn all_is_the_union_of_the_sides() {
        assert_eq!(
            ShadowSides::ALL,
            ShadowSides::LEFT | ShadowSides::TOP | ShadowSides::RIGHT | ShadowSides::BOTTOM
        );
    }
}
