//! [`Surface`] implementation on top of an [`egui::Painter`].

use glam::Vec2;
use packet_core::{
    Color,
    surface::{BlendMode, PenStack, Surface, TextAlign, TextBaseline},
};

const FONT_SIZE: f32 = 12.0;
const BACKGROUND: egui::Color32 = egui::Color32::BLACK;

/// Draws into the screen rectangle `rect` of an egui painter.
///
/// Surface coordinates start at the top-left corner of `rect`, y pointing down.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    pen: PenStack,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self {
            painter,
            rect,
            pen: PenStack::default(),
        }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        let s = self.pen.current().transform.apply(p);
        self.rect.min + egui::vec2(s.x, s.y)
    }

    fn scaled(&self, len: f32) -> f32 {
        len * self.pen.current().transform.scale
    }
}

/// Converts a colour, turning it additive for [`BlendMode::Lighter`].
pub fn to_color32(color: Color, blend: BlendMode) -> egui::Color32 {
    let c = egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a);
    match blend {
        BlendMode::Normal => c,
        BlendMode::Lighter => c.additive(),
    }
}

pub fn to_align2(align: TextAlign, baseline: TextBaseline) -> egui::Align2 {
    let h = match align {
        TextAlign::Left => egui::Align::Min,
        TextAlign::Center => egui::Align::Center,
        TextAlign::Right => egui::Align::Max,
    };
    let v = match baseline {
        TextBaseline::Top => egui::Align::Min,
        TextBaseline::Middle => egui::Align::Center,
        TextBaseline::Bottom => egui::Align::Max,
    };
    egui::Align2([h, v])
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        Vec2::new(self.rect.width(), self.rect.height())
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, BACKGROUND);
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
        let pen = *self.pen.current();
        self.painter.circle_filled(
            self.to_screen(center),
            self.scaled(radius),
            to_color32(pen.fill, pen.blend),
        );
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        let pen = *self.pen.current();
        self.painter.circle_stroke(
            self.to_screen(center),
            self.scaled(radius),
            egui::Stroke::new(1.0, to_color32(pen.stroke, pen.blend)),
        );
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        let pen = *self.pen.current();
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(1.0, to_color32(pen.stroke, pen.blend)),
        );
    }

    fn text(&mut self, text: &str, at: Vec2) {
        let pen = *self.pen.current();
        self.painter.text(
            self.to_screen(at),
            to_align2(pen.align, pen.baseline),
            text,
            egui::FontId::proportional(self.scaled(FONT_SIZE).max(1.0)),
            to_color32(pen.fill, pen.blend),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighter_blend_is_additive() {
        let normal = to_color32(Color::RED, BlendMode::Normal);
        assert_eq!(normal, egui::Color32::RED);

        let lighter = to_color32(Color::RED, BlendMode::Lighter);
        assert_eq!(lighter.a(), 0);
        assert_eq!(lighter.r(), 255);
    }

    #[test]
    fn text_anchor_follows_alignment() {
        assert_eq!(
            to_align2(TextAlign::Center, TextBaseline::Middle),
            egui::Align2::CENTER_CENTER
        );
        assert_eq!(
            to_align2(TextAlign::Left, TextBaseline::Top),
            egui::Align2::LEFT_TOP
        );
        assert_eq!(
            to_align2(TextAlign::Right, TextBaseline::Bottom),
            egui::Align2::RIGHT_BOTTOM
        );
    }

    #[test]
    fn surface_maps_through_rect_and_transform() {
        let ctx = egui::Context::default();
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(800.0, 600.0));
        let painter = egui::Painter::new(ctx, egui::LayerId::background(), rect);
        let mut surface = PainterSurface::new(&painter, rect);

        assert_eq!(surface.size(), Vec2::new(800.0, 600.0));

        surface.save();
        surface.translate(Vec2::new(400.0, 300.0));
        surface.scale(2.0);
        assert_eq!(surface.to_screen(Vec2::new(5.0, -5.0)), egui::pos2(420.0, 310.0));
        assert_eq!(surface.scaled(3.0), 6.0);
        surface.restore();

        assert_eq!(surface.to_screen(Vec2::ZERO), egui::pos2(10.0, 20.0));
    }
}
