use super::shooting::ShootingStar;
use super::star::Star;
use super::{
    BACKGROUND_INNER_RATIO, BACKGROUND_OUTER_RATIO, BACKGROUND_STOPS, HEAD_BLUR, HEAD_COLOR,
    HEAD_RADIUS, STAR_COLOR, STAR_GLOW_BLUR, TAIL_COLOR, TAIL_HEAD_ALPHA, TAIL_LENGTH_FACTOR,
    TAIL_WIDTH,
};
use crate::surface::{DrawCommand, Glow, Point, Surface};

/// Radial galaxy gradient over the whole surface. This is also what erases
/// the previous frame.
pub fn draw_background<S: Surface + ?Sized>(surface: &mut S) {
    let (width, height) = surface.size();
    let outer_radius = width.max(height) * BACKGROUND_OUTER_RATIO;

    surface.draw(DrawCommand::FillRadial {
        center: Point::new(width / 2.0, height / 2.0),
        inner_radius: outer_radius * BACKGROUND_INNER_RATIO,
        outer_radius,
        stops: &BACKGROUND_STOPS,
    });
}

pub fn draw_stars<S: Surface + ?Sized>(surface: &mut S, stars: &[Star]) {
    for star in stars {
        surface.draw(DrawCommand::FillCircle {
            center: star.position(),
            radius: star.radius(),
            color: STAR_COLOR,
            alpha: star.alpha().clamp(0.0, 1.0),
            glow: Some(Glow {
                color: STAR_COLOR,
                blur: STAR_GLOW_BLUR,
            }),
        });
    }
}

/// Head and tail share the streak's fade, clamped so a spent streak is
/// drawn invisible rather than with negative opacity.
pub fn draw_shooting_star<S: Surface + ?Sized>(surface: &mut S, streak: &ShootingStar) {
    let alpha = streak.alpha().clamp(0.0, 1.0);
    let head = streak.position();
    let (dx, dy) = streak.velocity();

    surface.draw(DrawCommand::FillCircle {
        center: head,
        radius: HEAD_RADIUS,
        color: HEAD_COLOR,
        alpha,
        glow: Some(Glow {
            color: HEAD_COLOR,
            blur: HEAD_BLUR,
        }),
    });

    surface.draw(DrawCommand::StrokeLine {
        from: head,
        to: Point::new(
            head.x - dx * TAIL_LENGTH_FACTOR,
            head.y - dy * TAIL_LENGTH_FACTOR,
        ),
        width: TAIL_WIDTH,
        start: TAIL_COLOR.with_alpha(TAIL_HEAD_ALPHA),
        end: TAIL_COLOR.with_alpha(0.0),
        alpha,
        glow: Some(Glow {
            color: HEAD_COLOR,
            blur: HEAD_BLUR,
        }),
    });
}
