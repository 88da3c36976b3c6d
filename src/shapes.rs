use std::f64::consts::{FRAC_PI_2, PI};

use druid::kurbo::CircleSegment;
use druid::piet::{FixedGradient, FixedLinearGradient, FixedRadialGradient, GradientStop};
use druid::{Color, PaintCtx, Point, Rect, RenderContext, Vec2};

/// One of the eight pieces that tile the shadow around the background:
///
/// ```text
///     ┌────┬──────────────┬────┐
///     │ ◜  │     top      │  ◝ │
///     ├────┼──────────────┼────┤
///     │left│  background  │rght│
///     ├────┼──────────────┼────┤
///     │ ◟  │    bottom    │  ◞ │
///     └────┴──────────────┴────┘
/// ```
///
/// Edge strips fade outwards with a linear gradient; corners are quarter pie
/// slices fading with a radial gradient. Each corner's bounding square has
/// side four times the shadow radius, centered one radius inside the
/// background corner, so the arc is tangent to both neighboring strips and
/// the pieces tile without gaps.
#[derive(Debug, Clone)]
pub enum ShadowShape {
    Edge {
        rect: Rect,
        gradient: FixedGradient,
    },
    Corner {
        wedge: CircleSegment,
        gradient: FixedGradient,
    },
}

impl ShadowShape {
    /// Paints this piece. Shapes with nothing to fill are skipped, which
    /// happens whenever the container is smaller than the configured shadow.
    pub fn paint(&self, ctx: &mut PaintCtx) {
        match self {
            ShadowShape::Edge { rect, gradient } => {
                if rect.width() > 0.0 && rect.height() > 0.0 {
                    ctx.fill(*rect, gradient);
                }
            }
            ShadowShape::Corner { wedge, gradient } => {
                if wedge.outer_radius > 0.0 {
                    ctx.fill(*wedge, gradient);
                }
            }
        }
    }
}

/// The color stops shared by all eight shadow shapes.
///
/// The shadow stays solid until `background_radius / (background_radius +
/// shadow_radius)` of the gradient, then fades to transparent. Pinning the
/// solid portion to that ratio lines the falloff up with the rounded corner
/// curvature, so background radius and shadow read as one surface.
pub fn gradient_stops(
    color: &Color,
    background_radius: f64,
    shadow_radius: f64,
) -> Vec<GradientStop> {
    let total = background_radius + shadow_radius;
    let fade_start = if total > 0.0 {
        (background_radius / total) as f32
    } else {
        1.0
    };
    vec![
        GradientStop {
            pos: 0.0,
            color: color.clone(),
        },
        GradientStop {
            pos: fade_start,
            color: color.clone(),
        },
        GradientStop {
            pos: 1.0,
            color: color.clone().with_alpha(0.0),
        },
    ]
}

fn edge(rect: Rect, start: Point, end: Point, stops: &[GradientStop]) -> ShadowShape {
    ShadowShape::Edge {
        rect,
        gradient: FixedGradient::Linear(FixedLinearGradient {
            start,
            end,
            stops: stops.to_vec(),
        }),
    }
}

fn corner(center: Point, shadow_radius: f64, start_angle: f64, stops: &[GradientStop]) -> ShadowShape {
    let radius = 2.0 * shadow_radius;
    ShadowShape::Corner {
        wedge: CircleSegment::new(center, radius, 0.0, start_angle, FRAC_PI_2),
        gradient: FixedGradient::Radial(FixedRadialGradient {
            center,
            origin_offset: Vec2::ZERO,
            radius,
            stops: stops.to_vec(),
        }),
    }
}

/// Builds the eight gradient shapes for a shadow around `background`.
///
/// The shapes are rebuilt from scratch on every call; everything here is a
/// cheap pure computation, so callers hold no state that could go stale.
pub fn shadow_shapes(
    background: Rect,
    shadow_radius: f64,
    background_radius: f64,
    shadow_color: &Color,
) -> Vec<ShadowShape> {
    let r = shadow_radius;
    let stops = gradient_stops(shadow_color, background_radius, r);
    let Rect { x0, y0, x1, y1 } = background;

    vec![
        // Left strip, fading from the background edge leftwards.
        edge(
            Rect::new(x0 - r, y0 + r, x0 + r, y1 - r),
            Point::new(x0 + r, y0 + r),
            Point::new(x0 - r, y0 + r),
            &stops,
        ),
        corner(Point::new(x0 + r, y0 + r), r, PI, &stops),
        // Top strip, fading upwards.
        edge(
            Rect::new(x0 + r, y0 - r, x1 - r, y0 + r),
            Point::new(x0 + r, y0 + r),
            Point::new(x0 + r, y0 - r),
            &stops,
        ),
        corner(Point::new(x1 - r, y0 + r), r, -FRAC_PI_2, &stops),
        // Right strip, fading rightwards.
        edge(
            Rect::new(x1 - r, y0 + r, x1 + r, y1 - r),
            Point::new(x1 - r, y0 + r),
            Point::new(x1 + r, y0 + r),
            &stops,
        ),
        corner(Point::new(x1 - r, y1 - r), r, 0.0, &stops),
        // Bottom strip, fading downwards.
        edge(
            Rect::new(x0 + r, y1 - r, x1 - r, y1 + r),
            Point::new(x0 + r, y1 - r),
            Point::new(x0 + r, y1 + r),
            &stops,
        ),
        corner(Point::new(x0 + r, y1 - r), r, FRAC_PI_2, &stops),
    ]
}
