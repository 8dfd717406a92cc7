//! Software rasterizer for the color wheel.
//!
//! Draws the wheel gradient, its outline and the selection/harmony markers
//! into an RGBA buffer at device resolution. Pixel `(i, j)` is shaded with
//! the color at buffer coordinate `(i, j)`, so reading back the pixel under
//! a point gives the same color as the analytic mapping.

use std::path::Path;

use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::color_utils::{Rgb, hsl_to_rgb, rgb_to_hex};
use crate::constants::{WHEEL_OUTLINE, WHEEL_OUTLINE_WIDTH, marker};
use crate::interaction::InteractionState;
use crate::wheel_layout::WheelLayout;
use crate::wheel_math::{Point, point_to_hsl};

/// Errors that can occur while rendering or saving the wheel.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Layout cannot produce a drawable buffer
    #[error("Invalid wheel layout: {0}")]
    InvalidLayout(String),

    /// Image encoding or file error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// A filled and stroked circle, in buffer pixels.
struct MarkerStyle {
    radius: f64,
    stroke: f64,
    fill: [u8; 4],
    outline: [u8; 4],
}

impl MarkerStyle {
    fn selected(dpr: f64) -> Self {
        Self {
            radius: marker::SELECTED_RADIUS * dpr,
            stroke: marker::SELECTED_STROKE * dpr,
            fill: marker::SELECTED_FILL,
            outline: marker::SELECTED_OUTLINE,
        }
    }

    fn harmony(dpr: f64) -> Self {
        Self {
            radius: marker::HARMONY_RADIUS * dpr,
            stroke: marker::HARMONY_STROKE * dpr,
            fill: marker::HARMONY_FILL,
            outline: marker::HARMONY_OUTLINE,
        }
    }
}

/// Source-over blend of `src` onto an opaque destination pixel.
fn blend_over(dst: &mut Rgba<u8>, src: [u8; 4]) {
    let alpha = f64::from(src[3]) / 255.0;
    if alpha <= 0.0 {
        return;
    }
    for (channel, source) in dst.0.iter_mut().zip(src).take(3) {
        let out = f64::from(source) * alpha + f64::from(*channel) * (1.0 - alpha);
        *channel = out.round().clamp(0.0, 255.0) as u8;
    }
    dst.0[3] = 255;
}

/// Render the wheel, with markers for `state` if one is given.
pub fn render_wheel(
    layout: &WheelLayout,
    state: Option<&InteractionState>,
) -> Result<RgbaImage, RenderError> {
    if layout.dpr.is_nan() || layout.dpr <= 0.0 || layout.radius() <= 0.0 {
        return Err(RenderError::InvalidLayout(format!(
            "size {} margin {} dpr {}",
            layout.size, layout.margin, layout.dpr
        )));
    }

    let side = layout.buffer_size();
    let center = layout.scale_to_buffer(layout.center());
    let radius = layout.radius() * layout.dpr;
    let outline_half_width = WHEEL_OUTLINE_WIDTH * layout.dpr / 2.0;

    let mut image = RgbaImage::from_pixel(side, side, Rgba([255, 255, 255, 255]));

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let p = Point::new(f64::from(x), f64::from(y));
        let distance = p.distance_to(center);

        if distance <= radius {
            let rgb = hsl_to_rgb(point_to_hsl(p, center, radius));
            let [r, g, b] = rgb.to_array();
            *pixel = Rgba([r, g, b, 255]);
        }
        if (distance - radius).abs() <= outline_half_width {
            blend_over(pixel, WHEEL_OUTLINE);
        }
    }

    if let Some(state) = state {
        draw_marker(
            &mut image,
            layout.scale_to_buffer(state.selected()),
            &MarkerStyle::selected(layout.dpr),
        );
        let style = MarkerStyle::harmony(layout.dpr);
        for point in state.markers() {
            draw_marker(&mut image, layout.scale_to_buffer(*point), &style);
        }
    }

    log::debug!("Rendered {}x{} wheel", side, side);
    Ok(image)
}

fn draw_marker(image: &mut RgbaImage, center: Point, style: &MarkerStyle) {
    let reach = style.radius + style.stroke / 2.0;
    let x0 = (center.x - reach).floor().max(0.0) as u32;
    let y0 = (center.y - reach).floor().max(0.0) as u32;
    let x1 = ((center.x + reach).ceil().max(0.0) as u32).min(image.width());
    let y1 = ((center.y + reach).ceil().max(0.0) as u32).min(image.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let distance = Point::new(f64::from(x), f64::from(y)).distance_to(center);
            let pixel = image.get_pixel_mut(x, y);
            if distance <= style.radius {
                blend_over(pixel, style.fill);
            }
            if (distance - style.radius).abs() <= style.stroke / 2.0 {
                blend_over(pixel, style.outline);
            }
        }
    }
}

/// Read back the color under a logical point, or `None` outside the buffer.
pub fn sample_color(image: &RgbaImage, point: Point, dpr: f64) -> Option<String> {
    let x = (point.x * dpr).floor();
    let y = (point.y * dpr).floor();
    if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
        return None;
    }

    let pixel = image.get_pixel_checked(x as u32, y as u32)?;
    Some(rgb_to_hex(Rgb::new(pixel.0[0], pixel.0[1], pixel.0[2])))
}

/// Save a rendered wheel as PNG.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    image.save_with_format(path, image::ImageFormat::Png)?;
    log::info!("Saved wheel to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_utils::hex_to_rgb;
    use crate::harmony::HarmonyType;
    use crate::wheel_math::{point_to_color, polar_to_point};

    fn channel_close(a: &str, b: &str, tolerance: u8) -> bool {
        let (a, b) = (hex_to_rgb(a).unwrap(), hex_to_rgb(b).unwrap());
        a.r.abs_diff(b.r) <= tolerance
            && a.g.abs_diff(b.g) <= tolerance
            && a.b.abs_diff(b.b) <= tolerance
    }

    #[test]
    fn test_buffer_matches_layout() {
        let layout = WheelLayout::new(300.0, 20.0, 2.0);
        let image = render_wheel(&layout, None).unwrap();
        assert_eq!(image.dimensions(), (600, 600));
    }

    #[test]
    fn test_center_samples_white() {
        for dpr in [1.0, 2.0] {
            let layout = WheelLayout::new(300.0, 20.0, dpr);
            let image = render_wheel(&layout, None).unwrap();
            assert_eq!(
                sample_color(&image, layout.center(), dpr).as_deref(),
                Some("#ffffff")
            );
        }
    }

    #[test]
    fn test_corner_is_background() {
        let layout = WheelLayout::default();
        let image = render_wheel(&layout, None).unwrap();
        assert_eq!(
            sample_color(&image, Point::new(1.0, 1.0), 1.0).as_deref(),
            Some("#ffffff")
        );
    }

    #[test]
    fn test_sampling_agrees_with_analytic_near_rim() {
        let layout = WheelLayout::default();
        let image = render_wheel(&layout, None).unwrap();
        let center = layout.center();

        for degrees in [0.0, 60.0, 120.0, 200.0, 300.0] {
            let p = polar_to_point(degrees, layout.radius() - 3.0, center);
            let sampled = sample_color(&image, p, 1.0).unwrap();
            let analytic = point_to_color(p, center, layout.radius());
            assert!(
                channel_close(&sampled, &analytic, 8),
                "{degrees}: {sampled} vs {analytic}"
            );
        }
    }

    #[test]
    fn test_sampling_agrees_inside() {
        let layout = WheelLayout::default();
        let image = render_wheel(&layout, None).unwrap();
        let p = Point::new(200.0, 100.0);
        let sampled = sample_color(&image, p, 1.0).unwrap();
        let analytic = point_to_color(p, layout.center(), layout.radius());
        assert_eq!(sampled, analytic);
    }

    #[test]
    fn test_markers_are_drawn() {
        let layout = WheelLayout::default();
        let picked = polar_to_point(0.0, 100.0, layout.center());
        let state =
            InteractionState::from_pointer(picked, &layout, HarmonyType::Complementary).unwrap();

        let plain = render_wheel(&layout, None).unwrap();
        let marked = render_wheel(&layout, Some(&state)).unwrap();

        let under_marker = sample_color(&marked, picked, 1.0).unwrap();
        let under_plain = sample_color(&plain, picked, 1.0).unwrap();
        assert_ne!(under_marker, under_plain);

        let harmony = state.markers()[0];
        assert_ne!(
            sample_color(&marked, harmony, 1.0),
            sample_color(&plain, harmony, 1.0)
        );
    }

    #[test]
    fn test_sample_outside_buffer() {
        let layout = WheelLayout::default();
        let image = render_wheel(&layout, None).unwrap();
        assert_eq!(sample_color(&image, Point::new(-1.0, 5.0), 1.0), None);
        assert_eq!(sample_color(&image, Point::new(5.0, 300.0), 1.0), None);
    }

    #[test]
    fn test_sample_non_finite_point() {
        let layout = WheelLayout::default();
        let image = render_wheel(&layout, None).unwrap();
        assert_eq!(sample_color(&image, Point::new(f64::NAN, 5.0), 1.0), None);
        assert_eq!(sample_color(&image, Point::new(5.0, f64::NAN), 1.0), None);
        assert_eq!(
            sample_color(&image, Point::new(f64::INFINITY, 5.0), 1.0),
            None
        );
        assert_eq!(sample_color(&image, Point::new(5.0, 5.0), f64::NAN), None);
    }

    #[test]
    fn test_invalid_layout_is_rejected() {
        let layout = WheelLayout::new(300.0, 20.0, 0.0);
        assert!(matches!(
            render_wheel(&layout, None),
            Err(RenderError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_blend_over() {
        let mut pixel = Rgba([255, 0, 0, 255]);
        blend_over(&mut pixel, [0, 0, 0, 26]);
        assert_eq!(pixel, Rgba([229, 0, 0, 255]));
    }
}
