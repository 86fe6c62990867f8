//! Capability contracts for anything that can be placed in a layout.
//!
//! Every placed component can render itself. Some can additionally be told
//! the size they have been allotted; those return a sized view instead of
//! mutating themselves, so a component can be rendered at several sizes
//! without the renders interfering.

mod text;

pub use self::text::Text;

use crate::geometry::Size;
use crate::text::fit_block;

/// Produce a text block for the current configuration.
pub trait Renderable {
    fn render(&self) -> String;
}

/// A renderable that can be configured for a target size.
pub trait Resizable: Renderable {
    /// Return an independent view of `self` configured to render at `size`.
    fn resize(&self, size: Size) -> Box<dyn Renderable + '_>;
}

/// A placed component tagged with the capabilities it supports.
pub enum Component {
    Fixed(Box<dyn Renderable>),
    Resizable(Box<dyn Resizable>),
}

impl Component {
    pub fn fixed(renderable: impl Renderable + 'static) -> Self {
        Self::Fixed(Box::new(renderable))
    }

    pub fn resizable(resizable: impl Resizable + 'static) -> Self {
        Self::Resizable(Box::new(resizable))
    }

    pub fn is_resizable(&self) -> bool {
        matches!(self, Self::Resizable(_))
    }

    /// Render without any size constraint.
    pub fn render(&self) -> String {
        match self {
            Self::Fixed(inner) => inner.render(),
            Self::Resizable(inner) => inner.render(),
        }
    }

    /// Render into a `size` cell.
    ///
    /// Resizable components are resized and rendered; fixed ones render
    /// unmodified and are clipped or padded into the cell.
    pub fn render_at(&self, size: Size) -> String {
        match self {
            Self::Fixed(inner) => fit_block(&inner.render(), size),
            Self::Resizable(inner) => inner.resize(size).render(),
        }
    }
}

/// Layout containers that know how to render into an explicit size.
pub(crate) trait RenderSized {
    fn render_sized(&self, size: Size) -> String;
}

/// A borrowed container pinned to a size; what containers hand out from
/// [`Resizable::resize`].
pub(crate) struct SizedView<'a, T: ?Sized> {
    target: &'a T,
    size: Size,
}

impl<'a, T: ?Sized> SizedView<'a, T> {
    pub(crate) fn new(target: &'a T, size: Size) -> Self {
        Self { target, size }
    }
}

impl<T: RenderSized + ?Sized> Renderable for SizedView<'_, T> {
    fn render(&self) -> String {
        self.target.render_sized(self.size)
    }
}

impl std::fmt::Debug for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(_) => f.write_str("Component::Fixed"),
            Self::Resizable(_) => f.write_str("Component::Resizable"),
        }
    }
}

impl Renderable for Component {
    fn render(&self) -> String {
        Component::render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Echo {
        seen: Rc<RefCell<Vec<Size>>>,
    }

    struct EchoAt(Size);

    impl Renderable for EchoAt {
        fn render(&self) -> String {
            format!("{}x{}", self.0.width, self.0.height)
        }
    }

    impl Renderable for Echo {
        fn render(&self) -> String {
            "natural".to_string()
        }
    }

    impl Resizable for Echo {
        fn resize(&self, size: Size) -> Box<dyn Renderable + '_> {
            self.seen.borrow_mut().push(size);
            Box::new(EchoAt(size))
        }
    }

    #[test]
    fn fixed_components_are_boxed_into_the_cell() {
        let component = Component::from(Text::new("hello"));
        assert!(!component.is_resizable());
        assert_eq!(component.render_at(Size::new(3, 2)), "hel\n   ");
    }

    #[test]
    fn resizable_components_receive_the_cell_size() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let component = Component::resizable(Echo { seen: seen.clone() });

        assert_eq!(component.render(), "natural");
        assert_eq!(component.render_at(Size::new(7, 2)), "7x2");
        assert_eq!(*seen.borrow(), vec![Size::new(7, 2)]);
    }

    #[test]
    fn resized_views_do_not_interfere() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let echo = Echo { seen };
        let small = echo.resize(Size::new(1, 1));
        let large = echo.resize(Size::new(9, 9));
        assert_eq!(small.render(), "1x1");
        assert_eq!(large.render(), "9x9");
        assert_eq!(echo.render(), "natural");
    }
}
