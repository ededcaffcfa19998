//! Message cloud: a shadowed white panel with a short congratulation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{CloudLayout, MessageLayout};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    pub rect: Rect,
    pub background: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    pub origin: Point,
    pub line_offset: f64,
    pub foreground: String,
    pub font: String,
    pub lines: Vec<String>,
}

impl Message {
    /// Baseline of each line, one `line_offset` apart.
    pub fn line_positions(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.lines.iter().enumerate().map(move |(i, line)| {
            (
                line.as_str(),
                self.origin.offset(0.0, self.line_offset * i as f64),
            )
        })
    }
}

/// Shapes are drawn in order: shadow first, panel on top.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cloud {
    pub shapes: Vec<Shape>,
    pub message: Message,
}

impl Cloud {
    pub fn from_layout(cloud: &CloudLayout, message: &MessageLayout) -> Self {
        let shadow = Shape {
            rect: Rect::new(
                cloud
                    .position
                    .offset(cloud.shadow_offset.x, cloud.shadow_offset.y),
                cloud.size,
            ),
            background: cloud.shadow_color.clone(),
        };
        let panel = Shape {
            rect: Rect::new(cloud.position, cloud.size),
            background: cloud.background.clone(),
        };
        Cloud {
            shapes: vec![shadow, panel],
            message: Message {
                origin: message.origin,
                line_offset: message.line_offset,
                foreground: message.foreground.clone(),
                font: message.font.clone(),
                lines: message.lines.clone(),
            },
        }
    }
}

pub fn render_cloud<S: Surface + ?Sized>(surface: &mut S, cloud: &Cloud) -> Result<()> {
    for shape in &cloud.shapes {
        surface.set_fill_style(&shape.background);
        surface.stroke_rect(shape.rect);
        surface.fill_rect(shape.rect);
    }

    let message = &cloud.message;
    surface.set_fill_style(&message.foreground);
    surface.set_font(&message.font);
    for (line, at) in message.line_positions() {
        surface.fill_text(line, at)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatisticsLayout;
    use crate::geometry::Size;

    #[test]
    fn default_cloud_has_offset_shadow_under_panel() {
        let layout = StatisticsLayout::standard();
        let cloud = Cloud::from_layout(&layout.cloud, &layout.message);
        assert_eq!(cloud.shapes.len(), 2);
        assert_eq!(
            cloud.shapes[0].rect,
            Rect::new(Point::new(110.0, 20.0), Size::new(420.0, 270.0))
        );
        assert_eq!(cloud.shapes[0].background, "rgba(0, 0, 0, 0.7)");
        assert_eq!(
            cloud.shapes[1].rect,
            Rect::new(Point::new(100.0, 10.0), Size::new(420.0, 270.0))
        );
    }

    #[test]
    fn message_lines_step_down_by_line_offset() {
        let layout = StatisticsLayout::standard();
        let cloud = Cloud::from_layout(&layout.cloud, &layout.message);
        let positions: Vec<Point> = cloud.message.line_positions().map(|(_, p)| p).collect();
        assert_eq!(positions, vec![Point::new(120.0, 40.0), Point::new(120.0, 60.0)]);
    }
}
