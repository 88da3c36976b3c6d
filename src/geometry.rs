use druid::{Insets, Rect, Size, Vec2};

/// The rectangle occupied by the solid background (and the child), inset from
/// the widget bounds so the shadow has room to spread.
///
/// The background is inset by the shadow radius on every side. A nonzero
/// offset pushes the shadow towards one side, so the background additionally
/// gives up room on that side: a positive x offset insets the right edge, a
/// negative one insets the left edge.
pub fn background_rect(size: Size, padding: Insets, shadow_radius: f64, offset: Vec2) -> Rect {
    Rect::new(
        padding.x0 + shadow_radius + offset.x.min(0.0),
        padding.y0 + shadow_radius + offset.y.min(0.0),
        size.width - shadow_radius - padding.x1 - offset.x.max(0.0),
        size.height - shadow_radius - padding.y1 - offset.y.max(0.0),
    )
}

/// The extra width and height a container needs around its child so that the
/// shadow is never clipped by the container bounds.
pub fn required_margin(shadow_radius: f64, offset: Vec2) -> Size {
    Size::new(
        2.0 * shadow_radius + offset.x.abs(),
        2.0 * shadow_radius + offset.y.abs(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_background() {
        let rect = background_rect(Size::new(200.0, 100.0), Insets::ZERO, 10.0, Vec2::ZERO);
        assert_eq!(rect, Rect::new(10.0, 10.0, 190.0, 90.0));
    }

    #[test]
    fn offset_insets_the_far_side() {
        let rect = background_rect(
            Size::new(200.0, 100.0),
            Insets::ZERO,
            10.0,
            Vec2::new(5.0, 0.0),
        );
        assert_eq!(rect.x0, 10.0);
        assert_eq!(rect.x1, 185.0);

        let rect = background_rect(
            Size::new(200.0, 100.0),
            Insets::ZERO,
            10.0,
            Vec2::new(-5.0, 0.0),
        );
        assert_eq!(rect.x0, 5.0);
        assert_eq!(rect.x1, 190.0);
    }

    #[test]
    fn padding_insets_all_sides() {
        let rect = background_rect(
            Size::new(200.0, 100.0),
            Insets::new(1.0, 2.0, 3.0, 4.0),
            10.0,
            Vec2::ZERO,
        );
        assert_eq!(rect, Rect::new(11.0, 12.0, 187.0, 86.0));
    }

    #[test]
    fn margin_reserves_twice_the_radius_plus_offset() {
        assert_eq!(required_margin(8.0, Vec2::ZERO), Size::new(16.0, 16.0));
        assert_eq!(
            required_margin(8.0, Vec2::new(5.0, 0.0)),
            Size::new(21.0, 16.0)
        );
        assert_eq!(
            required_margin(8.0, Vec2::new(-5.0, 3.0)),
            Size::new(21.0, 19.0)
        );
    }

    #[test]
    fn background_is_positive_whenever_the_margin_fits() {
        let cases = [
            (Size::new(200.0, 100.0), Insets::ZERO, 10.0, Vec2::ZERO),
            (
                Size::new(200.0, 100.0),
                Insets::uniform(8.0),
                10.0,
                Vec2::new(5.0, -7.0),
            ),
            (
                Size::new(50.0, 40.0),
                Insets::new(2.0, 0.0, 2.0, 0.0),
                8.0,
                Vec2::new(-3.0, 3.0),
            ),
            (Size::new(33.0, 17.0), Insets::ZERO, 8.0, Vec2::ZERO),
        ];
        for &(size, padding, radius, offset) in &cases {
            let margin = required_margin(radius, offset);
            assert!(size.width > margin.width + padding.x_value());
            assert!(size.height > margin.height + padding.y_value());

            let rect = background_rect(size, padding, radius, offset);
            assert!(rect.width() > 0.0, "empty background for {:?}", size);
            assert!(rect.height() > 0.0, "empty background for {:?}", size);
        }
    }
}
