use std::rc::Rc;
use std::sync::Arc;

use crate::geom::IntBox;

/// Anything with an axis-aligned bounding box.
///
/// Trace segments, vias, pads and keepouts all implement this. The search
/// core only ever looks at the bounding box; precise geometry is handled by
/// whoever implements the exact intersection test.
pub trait Shape {
    /// The smallest [`IntBox`] enclosing the shape.
    fn bounding_box(&self) -> IntBox;
}

impl Shape for IntBox {
    #[inline]
    fn bounding_box(&self) -> IntBox {
        *self
    }
}

impl<S: Shape + ?Sized> Shape for &S {
    #[inline]
    fn bounding_box(&self) -> IntBox {
        (**self).bounding_box()
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    #[inline]
    fn bounding_box(&self) -> IntBox {
        (**self).bounding_box()
    }
}

impl<S: Shape + ?Sized> Shape for Rc<S> {
    #[inline]
    fn bounding_box(&self) -> IntBox {
        (**self).bounding_box()
    }
}

impl<S: Shape + ?Sized> Shape for Arc<S> {
    #[inline]
    fn bounding_box(&self) -> IntBox {
        (**self).bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;

    struct Via {
        center: Point,
        radius: i32,
    }

    impl Shape for Via {
        fn bounding_box(&self) -> IntBox {
            IntBox::from_point(self.center).offset(self.radius).unwrap()
        }
    }

    #[test]
    fn wrappers_forward_bounding_box() {
        let via = Via {
            center: Point::new(3, 3),
            radius: 2,
        };
        let expected = IntBox::new(1, 1, 5, 5).unwrap();
        assert_eq!(via.bounding_box(), expected);
        assert_eq!((&via).bounding_box(), expected);
        let boxed: Box<dyn Shape> = Box::new(via);
        assert_eq!(boxed.bounding_box(), expected);
        assert_eq!(Arc::new(expected).bounding_box(), expected);
    }
}
