use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame};
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::path_overlay::PathOverlay;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_params::RenderParams;
use crate::core::data::viewport::Viewport;

pub const PATH_COLOUR: Colour = Colour::from_hex(0xEB7667);
pub const MARKER_COLOUR: Colour = Colour::from_hex(0xC12D1A);

/// Path segments per dash; the same number is skipped between dashes.
const DASH_SEGMENTS: usize = 2;

/// A Mandelbrot panel showing the route of `c` and a marker on its current
/// value, joined on the left of the Julia set rendered from `julia`.
///
/// Both panels share `number_points`, the smoothing switch and the palette.
pub fn render_path_frame(
    julia: &RenderParams,
    overlay: &PathOverlay,
) -> Result<PixelBuffer, RenderFrameError> {
    let map_params = RenderParams {
        number_points: julia.number_points,
        smoothing: julia.smoothing,
        colour_map: julia.colour_map,
        ..RenderParams::mandelbrot()
    };
    let bounds = Viewport::new(map_params.center, map_params.zoom)?.bounds()?;

    let mut map = render_frame(&map_params)?;
    draw_dashed_path(&mut map, bounds, overlay.path(), PATH_COLOUR);
    let radius = (julia.number_points / 100).max(1) as i64;
    draw_disk(&mut map, bounds, overlay.c(), radius, MARKER_COLOUR);

    let set = render_frame(julia)?;
    Ok(PixelBuffer::side_by_side(&map, &set)?)
}

/// Fractional pixel position of `point`, top row 0.
fn plane_to_pixel(bounds: ComplexRect, side: u32, point: Complex) -> (f64, f64) {
    let last = f64::from(side.saturating_sub(1));
    let x = (point.real - bounds.real_lo()) / bounds.width() * last;
    let y = (bounds.imag_hi() - point.imag) / bounds.height() * last;
    (x, y)
}

fn plot(buffer: &mut PixelBuffer, x: f64, y: f64, colour: Colour) {
    let (x, y) = (x.round(), y.round());
    if !(x >= 0.0 && y >= 0.0) {
        return;
    }
    // set_pixel clips the far edges
    let _ = buffer.set_pixel(x as u32, y as u32, colour);
}

fn draw_segment(buffer: &mut PixelBuffer, from: (f64, f64), to: (f64, f64), colour: Colour) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = dx.abs().max(dy.abs()).ceil();
    if !steps.is_finite() {
        return;
    }
    let steps = steps.max(1.0) as u32;

    for step in 0..=steps {
        let t = f64::from(step) / f64::from(steps);
        plot(buffer, from.0 + dx * t, from.1 + dy * t, colour);
    }
}

fn draw_dashed_path(buffer: &mut PixelBuffer, bounds: ComplexRect, path: &[Complex], colour: Colour) {
    let side = buffer.height();

    for (index, pair) in path.windows(2).enumerate() {
        if (index / DASH_SEGMENTS) % 2 == 0 {
            let from = plane_to_pixel(bounds, side, pair[0]);
            let to = plane_to_pixel(bounds, side, pair[1]);
            draw_segment(buffer, from, to, colour);
        }
    }
}

fn draw_disk(buffer: &mut PixelBuffer, bounds: ComplexRect, center: Complex, radius: i64, colour: Colour) {
    let (cx, cy) = plane_to_pixel(bounds, buffer.height(), center);

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                plot(buffer, cx + dx as f64, cy + dy as f64, colour);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bounds() -> ComplexRect {
        ComplexRect::new(Complex::new(-2.0, -1.5), Complex::new(1.0, 1.5)).unwrap()
    }

    fn small_julia(c: Complex) -> RenderParams {
        RenderParams {
            number_points: 61,
            max_iterations: 30.0,
            ..RenderParams::julia(c)
        }
    }

    #[test]
    fn test_path_frame_is_two_panels_wide() {
        let c = Complex::new(0.0, 0.5);
        let overlay = PathOverlay::new(vec![c], c);

        let buffer = render_path_frame(&small_julia(c), &overlay).unwrap();

        assert_eq!(buffer.width(), 122);
        assert_eq!(buffer.height(), 61);
    }

    #[test]
    fn test_right_panel_is_the_julia_set() {
        let c = Complex::new(-0.8, 0.156);
        let params = small_julia(c);
        let overlay = PathOverlay::new(vec![c], c);

        let frame = render_path_frame(&params, &overlay).unwrap();
        let julia = render_frame(&params).unwrap();

        for (x, y) in [(0, 0), (30, 30), (60, 10), (17, 44)] {
            assert_eq!(frame.pixel(61 + x, y), julia.pixel(x, y));
        }
    }

    #[test]
    fn test_marker_sits_on_c() {
        // 0 maps to column 40, row 30 of a 61 point [-2, 1] x [-1.5, 1.5] panel
        let c = Complex::new(0.0, 0.0);
        let overlay = PathOverlay::new(vec![Complex::new(-1.5, -1.0), Complex::new(-1.5, 1.0)], c);

        let frame = render_path_frame(&small_julia(c), &overlay).unwrap();

        assert_eq!(frame.pixel(40, 30), Some(MARKER_COLOUR));
        assert_eq!(frame.pixel(10, 30), Some(PATH_COLOUR));
    }

    #[test]
    fn test_path_is_dashed() {
        let mut buffer = PixelBuffer::new(61, 61);
        // four vertical segments on column 10, half a unit of imag each
        let path: Vec<Complex> = (0..5)
            .map(|k| Complex::new(-1.5, -1.0 + 0.5 * k as f64))
            .collect();

        draw_dashed_path(&mut buffer, unit_bounds(), &path, PATH_COLOUR);

        // imag -1.0 .. 0.0 is drawn, 0.0 .. 1.0 is skipped
        assert_eq!(buffer.pixel(10, 45), Some(PATH_COLOUR));
        assert_eq!(buffer.pixel(10, 35), Some(PATH_COLOUR));
        assert_eq!(buffer.pixel(10, 25), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(10, 15), Some(Colour::BLACK));
    }

    #[test]
    fn test_points_outside_the_panel_are_clipped() {
        let mut buffer = PixelBuffer::new(11, 11);
        let path = vec![Complex::new(-10.0, 0.0), Complex::new(10.0, 0.0)];

        draw_dashed_path(&mut buffer, unit_bounds(), &path, PATH_COLOUR);
        draw_disk(&mut buffer, unit_bounds(), Complex::new(5.0, 5.0), 2, MARKER_COLOUR);

        assert_eq!(buffer.pixel(0, 5), Some(PATH_COLOUR));
        assert_eq!(buffer.pixel(10, 5), Some(PATH_COLOUR));
        assert_eq!(buffer.pixel(10, 0), Some(Colour::BLACK));
    }
}
