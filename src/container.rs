use druid::widget::prelude::*;
use druid::{Affine, Color, Data, Insets, KeyOrValue, WidgetPod};

use crate::geometry::{background_rect, required_margin};
use crate::shapes::shadow_shapes;
use crate::style::{Invalidation, ShadowStyle};

/// The error returned when attaching a child to a [`ShadowContainer`] that
/// already has one.
#[derive(Debug, thiserror::Error)]
#[error("ShadowContainer supports at most one child")]
pub struct ChildAlreadyAttached;

/// A container that paints a soft, directionally-offset drop shadow behind
/// its single child, built out of gradient fills instead of a blur.
///
/// The container reserves room around the child (twice the shadow radius plus
/// the offset magnitude, per axis) so the shadow never gets clipped. The
/// remaining space holds a rounded background rectangle with the child placed
/// on it. An empty container is fine too; it just draws the shadowed
/// background.
///
/// Styling comes from the env keys in the crate root unless overridden with
/// the builder methods. The runtime setters record what they dirty; the
/// invalidation is applied on the next update pass.
pub struct ShadowContainer<T, W> {
    child: Option<WidgetPod<T, W>>,
    padding: Insets,
    style: ShadowStyle,
    pending: Invalidation,
}

impl<T, W: Widget<T>> ShadowContainer<T, W> {
    /// Creates a container with no child. It still paints its shadow and
    /// background.
    pub fn empty() -> ShadowContainer<T, W> {
        ShadowContainer {
            child: None,
            padding: Insets::ZERO,
            style: ShadowStyle::default(),
            pending: Invalidation::NONE,
        }
    }

    pub fn new(child: W) -> ShadowContainer<T, W> {
        ShadowContainer {
            child: Some(WidgetPod::new(child)),
            padding: Insets::ZERO,
            style: ShadowStyle::default(),
            pending: Invalidation::NONE,
        }
    }

    /// Attaches the single child, failing if one is already attached. Attach
    /// children before the container joins a widget tree.
    pub fn add_child(&mut self, child: W) -> Result<(), ChildAlreadyAttached> {
        if self.child.is_some() {
            return Err(ChildAlreadyAttached);
        }
        self.child = Some(WidgetPod::new(child));
        self.pending |= Invalidation::LAYOUT;
        Ok(())
    }

    pub fn child(&self) -> Option<&W> {
        self.child.as_ref().map(WidgetPod::widget)
    }

    pub fn child_mut(&mut self) -> Option<&mut W> {
        self.child.as_mut().map(WidgetPod::widget_mut)
    }

    /// Builder-style padding between the background rectangle and the
    /// container edge (on top of the room reserved for the shadow).
    pub fn padding(mut self, padding: impl Into<Insets>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn background_color(mut self, color: impl Into<KeyOrValue<Color>>) -> Self {
        self.style.set_background_color(color);
        self
    }

    pub fn background_radius(mut self, radius: impl Into<KeyOrValue<f64>>) -> Self {
        self.style.set_background_radius(radius);
        self
    }

    pub fn shadow_color(mut self, color: impl Into<KeyOrValue<Color>>) -> Self {
        self.style.set_shadow_color(color);
        self
    }

    pub fn shadow_radius(mut self, radius: impl Into<KeyOrValue<f64>>) -> Self {
        self.style.set_shadow_radius(radius);
        self
    }

    pub fn shadow_offset(
        mut self,
        x: impl Into<KeyOrValue<f64>>,
        y: impl Into<KeyOrValue<f64>>,
    ) -> Self {
        self.style.set_offset_x(x);
        self.style.set_offset_y(y);
        self
    }

    pub fn set_padding(&mut self, padding: impl Into<Insets>) {
        self.padding = padding.into();
        self.pending |= Invalidation::LAYOUT;
    }

    pub fn set_background_color(&mut self, color: impl Into<KeyOrValue<Color>>) {
        self.pending |= self.style.set_background_color(color);
    }

    pub fn set_background_radius(&mut self, radius: impl Into<KeyOrValue<f64>>) {
        self.pending |= self.style.set_background_radius(radius);
    }

    pub fn set_shadow_color(&mut self, color: impl Into<KeyOrValue<Color>>) {
        self.pending |= self.style.set_shadow_color(color);
    }

    pub fn set_shadow_radius(&mut self, radius: impl Into<KeyOrValue<f64>>) {
        self.pending |= self.style.set_shadow_radius(radius);
    }

    pub fn set_shadow_offset(
        &mut self,
        x: impl Into<KeyOrValue<f64>>,
        y: impl Into<KeyOrValue<f64>>,
    ) {
        self.pending |= self.style.set_offset_x(x);
        self.pending |= self.style.set_offset_y(y);
    }
}

impl<T: Data, W: Widget<T>> Widget<T> for ShadowContainer<T, W> {
    fn event(&mut self, ctx: &mut EventCtx, ev: &Event, data: &mut T, env: &Env) {
        if let Some(child) = self.child.as_mut() {
            child.event(ctx, ev, data, env);
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, ev: &LifeCycle, data: &T, env: &Env) {
        if let Some(child) = self.child.as_mut() {
            child.lifecycle(ctx, ev, data, env);
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        let pending = std::mem::take(&mut self.pending) | self.style.env_invalidation(ctx);
        if pending.needs_layout() {
            ctx.request_layout();
        }
        if pending.needs_paint() {
            ctx.request_paint();
        }
        if let Some(child) = self.child.as_mut() {
            child.update(ctx, data, env);
        }
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let style = self.style.resolve(env);
        let margin = required_margin(style.shadow_radius, style.offset);
        let inset = Size::new(
            margin.width + self.padding.x_value(),
            margin.height + self.padding.y_value(),
        );

        let size = match self.child.as_mut() {
            None => bc.constrain(inset),
            Some(child) => {
                let child_bc = bc.shrink(inset);
                let child_size = child.layout(ctx, &child_bc, data, env);
                bc.constrain(Size::new(
                    child_size.width + inset.width,
                    child_size.height + inset.height,
                ))
            }
        };

        if let Some(child) = self.child.as_mut() {
            let bg = background_rect(size, self.padding, style.shadow_radius, style.offset);
            child.set_origin(ctx, data, env, bg.origin());
        }
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        let style = self.style.resolve(env);
        let bg = background_rect(ctx.size(), self.padding, style.shadow_radius, style.offset);

        if bg.width() > 0.0 && bg.height() > 0.0 {
            let shapes = shadow_shapes(
                bg,
                style.shadow_radius,
                style.background_radius,
                &style.shadow_color,
            );
            // The offset applies to the shadow only; the background and the
            // child stay put.
            ctx.with_save(|ctx| {
                ctx.transform(Affine::translate(style.offset));
                for shape in &shapes {
                    shape.paint(ctx);
                }
            });
            ctx.fill(
                bg.to_rounded_rect(style.background_radius),
                &style.background_color,
            );
        } else {
            log::trace!("container too small for its shadow, skipping: {:?}", bg);
        }

        if let Some(child) = self.child.as_mut() {
            child.paint(ctx, data, env);
        }
    }
}
