//! Immediate-mode 2-D drawing interface.
//!
//! The simulation never owns a window or a canvas; it draws through
//! [`Surface`], which any backend can implement. [`RecordingSurface`] is a
//! software backend that resolves the transform stack and keeps a list of
//! [`DrawCommand`]s in surface coordinates, for headless use and tests.

use glam::Vec2;

use crate::color::Color;

/// How newly drawn pixels combine with what is already on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    /// Colours add up, so overlapping shapes brighten.
    Lighter,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Capabilities the renderer needs from a drawing backend.
///
/// Coordinates passed to shape methods are in the current local space, as
/// modified by [`Surface::translate`] and [`Surface::scale`].
/// [`Surface::save`] and [`Surface::restore`] push and pop the transform
/// together with the fill, stroke, blend and text state.
pub trait Surface {
    /// Size of the drawable area in surface units.
    fn size(&self) -> Vec2;
    /// Clears the whole surface, ignoring the current transform.
    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn scale(&mut self, factor: f32);
    fn set_fill(&mut self, color: Color);
    fn set_stroke(&mut self, color: Color);
    fn set_blend(&mut self, mode: BlendMode);
    fn set_text_align(&mut self, align: TextAlign, baseline: TextBaseline);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32);
    fn line(&mut self, from: Vec2, to: Vec2);
    /// Draws `text` in the fill colour; `\n` starts a new line.
    fn text(&mut self, text: &str, at: Vec2);
}

/// Local-to-surface mapping: `surface = offset + local * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2 {
    pub offset: Vec2,
    pub scale: f32,
}

impl Default for Transform2 {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform2 {
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.offset + p * self.scale
    }

    #[inline]
    pub fn translate(&mut self, by: Vec2) {
        self.offset += by * self.scale;
    }

    #[inline]
    pub fn scale(&mut self, factor: f32) {
        self.scale *= factor;
    }
}

/// Pen state saved and restored together with the transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenState {
    pub transform: Transform2,
    pub fill: Color,
    pub stroke: Color,
    pub blend: BlendMode,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            transform: Transform2::default(),
            fill: Color::WHITE,
            stroke: Color::WHITE,
            blend: BlendMode::Normal,
            align: TextAlign::Left,
            baseline: TextBaseline::Middle,
        }
    }
}

/// A save/restore stack of [`PenState`]; the building block for backends.
#[derive(Clone, Debug, Default)]
pub struct PenStack {
    current: PenState,
    saved: Vec<PenState>,
}

impl PenStack {
    pub fn current(&self) -> &PenState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut PenState {
        &mut self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pops the last saved state. An unbalanced restore keeps the current state.
    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

/// One recorded primitive, already mapped to surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
        blend: BlendMode,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Color,
        blend: BlendMode,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        blend: BlendMode,
    },
    Text {
        text: String,
        at: Vec2,
        color: Color,
        align: TextAlign,
        baseline: TextBaseline,
    },
}

/// Software [`Surface`] that records what would have been drawn.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Vec2,
    pen: PenStack,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            pen: PenStack::default(),
            commands: Vec::new(),
        }
    }

    /// Number of `save` calls not yet matched by `restore`.
    pub fn save_depth(&self) -> usize {
        self.pen.depth()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn save(&mut self) {
        self.pen.save();
    }

    fn restore(&mut self) {
        self.pen.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        self.pen.current_mut().transform.translate(offset);
    }

    fn scale(&mut self, factor: f32) {
        self.pen.current_mut().transform.scale(factor);
    }

    fn set_fill(&mut self, color: Color) {
        self.pen.current_mut().fill = color;
    }

    fn set_stroke(&mut self, color: Color) {
        self.pen.current_mut().stroke = color;
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.pen.current_mut().blend = mode;
    }

    fn set_text_align(&mut self, align: TextAlign, baseline: TextBaseline) {
        let pen = self.pen.current_mut();
        pen.align = align;
        pen.baseline = baseline;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        let pen = self.pen.current();
        self.commands.push(DrawCommand::FillCircle {
            center: pen.transform.apply(center),
            radius: radius * pen.transform.scale,
            color: pen.fill,
            blend: pen.blend,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        let pen = self.pen.current();
        self.commands.push(DrawCommand::StrokeCircle {
            center: pen.transform.apply(center),
            radius: radius * pen.transform.scale,
            color: pen.stroke,
            blend: pen.blend,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        let pen = self.pen.current();
        self.commands.push(DrawCommand::Line {
            from: pen.transform.apply(from),
            to: pen.transform.apply(to),
            color: pen.stroke,
            blend: pen.blend,
        });
    }

    fn text(&mut self, text: &str, at: Vec2) {
        let pen = self.pen.current();
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            at: pen.transform.apply(at),
            color: pen.fill,
            align: pen.align,
            baseline: pen.baseline,
        });
    }
}
