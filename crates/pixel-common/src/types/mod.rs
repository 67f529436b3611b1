mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10, 20, 800, 600);
        assert_eq!(r.right(), 810);
        assert_eq!(r.bottom(), 620);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0, 0, 100, 50);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(99, 49)));
        assert!(!r.contains(Point::new(100, 10)));
        assert!(!r.contains(Point::new(10, 50)));
        assert!(!r.contains(Point::new(-1, 10)));
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0, 0, 1920, 1080);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn size_and_point_defaults() {
        assert_eq!(Size::default(), Size::new(0, 0));
        assert_eq!(Point::default(), Point::new(0, 0));
    }
}
