use web_sys::CanvasRenderingContext2d;

use crate::assets::Image;
use crate::geom::Vec2;

// Images are placed by center and size, both on the source and the surface.
pub trait Canvas {
    fn clear(&mut self);

    fn draw_image(
        &mut self,
        image: &Image,
        src_center: Vec2,
        src_size: Vec2,
        dest_center: Vec2,
        dest_size: Vec2,
    );

    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: f64, color: &str, face: &str);

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Image {
        name: String,
        src_center: Vec2,
        src_size: Vec2,
        dest_center: Vec2,
        dest_size: Vec2,
    },
    Text {
        text: String,
        pos: Vec2,
        font_size: f64,
        color: String,
        face: String,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: String,
    },
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn images(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Image { .. }))
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_image(
        &mut self,
        image: &Image,
        src_center: Vec2,
        src_size: Vec2,
        dest_center: Vec2,
        dest_size: Vec2,
    ) {
        self.commands.push(DrawCommand::Image {
            name: image.name().to_string(),
            src_center,
            src_size,
            dest_center,
            dest_size,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: f64, color: &str, face: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font_size,
            color: color.to_string(),
            face: face.to_string(),
        });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.commands.push(DrawCommand::Rect {
            pos,
            size,
            color: color.to_string(),
        });
    }
}

pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
    size: Vec2,
    last_error: Option<String>,
}

impl WebCanvas {
    pub fn new(ctx: CanvasRenderingContext2d, size: Vec2) -> Self {
        Self {
            ctx,
            size,
            last_error: None,
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl Canvas for WebCanvas {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.size.x, self.size.y);
    }

    fn draw_image(
        &mut self,
        image: &Image,
        src_center: Vec2,
        src_size: Vec2,
        dest_center: Vec2,
        dest_size: Vec2,
    ) {
        let Some(element) = image.element() else {
            return;
        };
        let src = src_center - src_size.half();
        let dest = dest_center - dest_size.half();
        let result = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                element, src.x, src.y, src_size.x, src_size.y, dest.x, dest.y, dest_size.x,
                dest_size.y,
            );
        if let Err(err) = result {
            self.last_error = Some(format!(
                "drawImage {}: {}",
                image.name(),
                crate::js_value_to_string(&err)
            ));
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: f64, color: &str, face: &str) {
        self.ctx.set_font(&format!("{}px {}", font_size, face));
        self.ctx.set_fill_style_str(color);
        if let Err(err) = self.ctx.fill_text(text, pos.x, pos.y) {
            self.last_error = Some(format!("fillText: {}", crate::js_value_to_string(&err)));
        }
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(pos.x, pos.y, size.x, size.y);
    }
}
