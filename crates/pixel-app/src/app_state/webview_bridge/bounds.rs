//! Webview bounds for a window.

use winit::window::Window;

/// A wry rect covering `width` x `height` logical pixels from the origin.
pub fn logical_bounds(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}

/// Bounds filling the whole client area of `window`.
pub fn window_bounds(window: &Window) -> wry::Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    logical_bounds(size.width, size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_bounds_start_at_origin() {
        let rect = logical_bounds(240.0, 184.0);
        match rect.position {
            wry::dpi::Position::Logical(p) => {
                assert_eq!(p.x, 0.0);
                assert_eq!(p.y, 0.0);
            }
            _ => panic!("expected logical position"),
        }
        match rect.size {
            wry::dpi::Size::Logical(s) => {
                assert_eq!(s.width, 240.0);
                assert_eq!(s.height, 184.0);
            }
            _ => panic!("expected logical size"),
        }
    }
}
