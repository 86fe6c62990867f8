use crossterm::style::{Color, Stylize, style};

use crate::component::{Component, RenderSized, Renderable, Resizable, SizedView};
use crate::geometry::Size;
use crate::text::{block_width, fit_block, fit_lines, line_count};

use super::style::FrameStyle;

/// Decorator wrapping a single child with a border and padding.
///
/// A frame without a size renders its child at natural size. Once sized, the
/// frame always renders exactly its outer size and offers the child the
/// area left inside the decoration.
#[derive(Debug)]
pub struct Frame {
    child: Component,
    style: FrameStyle,
    size: Option<Size>,
}

impl Frame {
    pub fn new(child: impl Into<Component>) -> Self {
        Self {
            child: child.into(),
            style: FrameStyle::default(),
            size: None,
        }
    }

    pub fn with_style(mut self, style: FrameStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.style.border_color = Some(color);
        self
    }

    /// Configure the outer size. Zero on either axis leaves the frame unsized.
    pub fn sized(mut self, size: Size) -> Self {
        self.size = (!size.is_empty()).then_some(size);
        self
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn style(&self) -> &FrameStyle {
        &self.style
    }

    pub fn child(&self) -> &Component {
        &self.child
    }

    /// Cells consumed by the decoration on each axis.
    pub fn overhead(&self) -> Size {
        self.style.overhead()
    }

    /// Area left for the child; zero until the frame has a size.
    pub fn inner_size(&self) -> Size {
        self.size.map_or(Size::ZERO, |outer| self.inner_for(outer))
    }

    fn inner_for(&self, outer: Size) -> Size {
        outer.saturating_sub(self.overhead())
    }

    fn render_natural(&self) -> String {
        let content = self.child.render();
        let inner = Size::new(block_width(&content), line_count(&content));
        self.decorate(fit_lines(&content, inner), inner.width)
    }

    fn render_outer(&self, outer: Size) -> String {
        let inner = self.inner_for(outer);
        let content = match &self.child {
            Component::Resizable(child) => child.resize(inner).render(),
            Component::Fixed(child) => child.render(),
        };
        let decorated = self.decorate(fit_lines(&content, inner), inner.width);
        // Only differs from `decorated` when the outer size cannot hold the decoration.
        fit_block(&decorated, outer)
    }

    /// Surround `lines` (each exactly `width` cells) with padding and border.
    fn decorate(&self, lines: Vec<String>, width: u16) -> String {
        let padding = self.style.padding;
        let padded_width = width as usize + padding.horizontal as usize * 2;
        let side = " ".repeat(padding.horizontal as usize);
        let blank = " ".repeat(padded_width);

        let mut body = Vec::with_capacity(lines.len() + padding.vertical as usize * 2);
        body.extend((0..padding.vertical).map(|_| blank.clone()));
        body.extend(lines.into_iter().map(|line| format!("{side}{line}{side}")));
        body.extend((0..padding.vertical).map(|_| blank.clone()));

        let Some(glyphs) = self.style.border.glyphs() else {
            return body.join("\n");
        };

        let mut out = Vec::with_capacity(body.len() + 2);
        out.push(self.edge(glyphs.top_left, glyphs.top, glyphs.top_right, padded_width));
        let left = self.paint(&glyphs.left.to_string());
        let right = self.paint(&glyphs.right.to_string());
        out.extend(body.into_iter().map(|line| format!("{left}{line}{right}")));
        out.push(self.edge(
            glyphs.bottom_left,
            glyphs.bottom,
            glyphs.bottom_right,
            padded_width,
        ));
        out.join("\n")
    }

    fn edge(&self, start: char, fill: char, end: char, width: usize) -> String {
        let mut raw = String::with_capacity((width + 2) * 3);
        raw.push(start);
        raw.extend(std::iter::repeat(fill).take(width));
        raw.push(end);
        self.paint(&raw)
    }

    fn paint(&self, glyphs: &str) -> String {
        match self.style.border_color {
            Some(color) => style(glyphs).with(color).to_string(),
            None => glyphs.to_string(),
        }
    }
}

impl Renderable for Frame {
    fn render(&self) -> String {
        match self.size {
            Some(outer) => self.render_outer(outer),
            None => self.render_natural(),
        }
    }
}

impl RenderSized for Frame {
    fn render_sized(&self, size: Size) -> String {
        self.render_outer(size)
    }
}

impl Resizable for Frame {
    fn resize(&self, size: Size) -> Box<dyn Renderable + '_> {
        Box::new(SizedView::new(self, size))
    }
}

impl From<Frame> for Component {
    fn from(frame: Frame) -> Self {
        Component::resizable(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Text;
    use crate::frame::{BorderKind, Padding};
    use crate::width::display_width;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn uncoloured(child: impl Into<Component>) -> Frame {
        Frame::new(child).with_style(FrameStyle::default().with_border_color(None))
    }

    struct Recorder {
        seen: Rc<RefCell<Vec<Size>>>,
    }

    impl Renderable for Recorder {
        fn render(&self) -> String {
            "recorder".to_string()
        }
    }

    impl Resizable for Recorder {
        fn resize(&self, size: Size) -> Box<dyn Renderable + '_> {
            self.seen.borrow_mut().push(size);
            Box::new(Text::new("x".repeat(size.width as usize)))
        }
    }

    #[test]
    fn inner_size_is_zero_until_sized() {
        let frame = uncoloured("content");
        assert_eq!(frame.size(), None);
        assert_eq!(frame.inner_size(), Size::ZERO);
    }

    #[test]
    fn inner_size_subtracts_border_and_padding() {
        let frame = uncoloured("content").sized(Size::new(20, 10));
        assert_eq!(frame.inner_size(), Size::new(16, 6));
    }

    #[test]
    fn inner_size_saturates_at_zero() {
        let frame = uncoloured("content").sized(Size::new(3, 2));
        assert_eq!(frame.inner_size(), Size::ZERO);
    }

    #[test]
    fn natural_render_wraps_child_at_its_own_size() {
        let frame = uncoloured("ab");
        assert_eq!(
            frame.render(),
            "╭────╮\n│    │\n│ ab │\n│    │\n╰────╯"
        );
    }

    #[test]
    fn fixed_child_is_clipped_into_inner_area() {
        let frame = uncoloured(Text::new("hello world\nsecond")).sized(Size::new(8, 5));
        assert_eq!(
            frame.render(),
            "╭──────╮\n│      │\n│ hell │\n│      │\n╰──────╯"
        );
    }

    #[test]
    fn fixed_child_keeps_outer_box_at_assigned_size() {
        let frame = Frame::new("Item").sized(Size::new(20, 10));
        let rendered = frame.render();
        let lines: Vec<_> = rendered.split('\n').collect();
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|line| display_width(line) == 20));
    }

    #[test]
    fn resizable_child_receives_inner_size() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let frame = uncoloured(Component::resizable(Recorder { seen: seen.clone() }))
            .sized(Size::new(20, 10));

        let rendered = frame.render();
        assert_eq!(*seen.borrow(), vec![Size::new(16, 6)]);
        assert!(rendered.contains(&format!("│ {} │", "x".repeat(16))));
        assert_eq!(rendered.split('\n').count(), 10);
    }

    #[test]
    fn undersized_frame_is_clipped_to_outer_size() {
        let frame = uncoloured("content").sized(Size::new(3, 2));
        assert_eq!(frame.render(), "╭──\n│  ");
    }

    #[test]
    fn resize_returns_an_independent_view() {
        let frame = uncoloured("ab");
        let small = frame.resize(Size::new(6, 5)).render();
        let large = frame.resize(Size::new(10, 7)).render();

        assert_eq!(small.split('\n').count(), 5);
        assert_eq!(large.split('\n').count(), 7);
        assert_eq!(frame.size(), None);
        assert_eq!(frame.render(), uncoloured("ab").render());
    }

    #[test]
    fn borderless_frame_only_pads() {
        let frame = Frame::new("ab")
            .with_style(FrameStyle::plain().with_padding(Padding::new(0, 1)))
            .sized(Size::new(6, 2));
        assert_eq!(frame.render(), " ab   \n      ");
    }

    #[test]
    fn border_colour_does_not_change_geometry() {
        let frame = Frame::new("ab")
            .with_style(FrameStyle::default().with_border(BorderKind::Double))
            .sized(Size::new(10, 6));
        let rendered = frame.render();
        assert!(rendered.contains('\x1b'));
        assert!(rendered.split('\n').all(|line| display_width(line) == 10));
    }
}
