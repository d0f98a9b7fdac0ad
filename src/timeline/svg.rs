use std::fmt;

use super::{DrawCommand, Tile, Timeline};
use crate::{config::RenderConfig, maze::Point};

/// A timeline rendered as an animated SVG document.
///
/// Static tiles are written first so every `<animate>` element refers to a tile
/// that is already in the document; within each group the timeline order is kept.
pub struct SvgDocument<'a> {
    timeline: &'a Timeline,
    config: &'a RenderConfig,
}

impl<'a> SvgDocument<'a> {
    pub fn new(timeline: &'a Timeline, config: &'a RenderConfig) -> Self {
        Self { timeline, config }
    }

    fn origin(&self, at: Point) -> (u32, u32) {
        let c = self.config;
        (
            c.margin.x + c.cell_size.x * u32::from(at.x),
            c.margin.y + c.cell_size.y * u32::from(at.y),
        )
    }

    fn tile_id(&self, f: &mut fmt::Formatter<'_>, at: Point) -> fmt::Result {
        write!(f, "{}{}_{}", self.config.id_prefix, at.x, at.y)
    }

    fn write_wall(&self, f: &mut fmt::Formatter<'_>, at: Point) -> fmt::Result {
        let (x, y) = self.origin(at);
        let c = self.config;
        writeln!(
            f,
            r#"<rect x="{x}" y="{y}" width="{}" height="{}" fill="{}" />"#,
            c.cell_size.x, c.cell_size.y, c.wall_color
        )
    }

    /// Passage and solution tiles share one inset rectangle, addressable by id.
    fn write_inset(&self, f: &mut fmt::Formatter<'_>, at: Point, opacity: f32) -> fmt::Result {
        let (x, y) = self.origin(at);
        let c = self.config;
        write!(f, r#"<rect id=""#)?;
        self.tile_id(f, at)?;
        writeln!(
            f,
            r#"" x="{}" y="{}" width="{}" height="{}" fill="{}" opacity="{opacity}" />"#,
            x + c.padding.x,
            y + c.padding.y,
            c.cell_size.x.saturating_sub(c.padding.x * 2),
            c.cell_size.y.saturating_sub(c.padding.y * 2),
            c.solution_color
        )
    }

    fn write_command(&self, f: &mut fmt::Formatter<'_>, command: &DrawCommand) -> fmt::Result {
        match *command {
            DrawCommand::Tile {
                at,
                tile: Tile::Wall,
                ..
            } => self.write_wall(f, at),
            DrawCommand::Tile {
                at,
                tile: Tile::Passage | Tile::Solution,
                opacity,
            } => self.write_inset(f, at, opacity),
            DrawCommand::Fade {
                at,
                from,
                to,
                begin,
                duration,
            } => {
                write!(f, "<animate xlink:href=\"#")?;
                self.tile_id(f, at)?;
                writeln!(
                    f,
                    r#"" attributeName="opacity" from="{from}" to="{to}" dur="{}s" begin="{}s" fill="freeze"/>"#,
                    duration.as_secs_f64(),
                    begin.as_secs_f64()
                )
            }
        }
    }
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.config;
        let total_x = c.margin.x * 2 + c.cell_size.x * u32::from(self.timeline.width());
        let total_y = c.margin.y * 2 + c.cell_size.y * u32::from(self.timeline.height());

        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
        writeln!(
            f,
            r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#
        )?;
        writeln!(
            f,
            r#"<svg width="{}" height="{}" viewBox="0 0 {total_x} {total_y}" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#,
            c.image_size.x, c.image_size.y
        )?;
        writeln!(
            f,
            r#"<rect x="0" y="0" width="{total_x}" height="{total_y}" fill="{}" />"#,
            c.background_color
        )?;

        let (timed, statics): (Vec<&DrawCommand>, Vec<&DrawCommand>) = self
            .timeline
            .commands()
            .iter()
            .partition(|command| command.is_timed());
        for command in statics.into_iter().chain(timed) {
            self.write_command(f, command)?;
        }

        write!(f, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{AnimationConfig, Extent},
        events::MazeObserver,
        maze::CellKind,
        timeline::TimelineBuilder,
    };

    fn sample() -> Timeline {
        let mut b = TimelineBuilder::new(3, 3, &AnimationConfig::default());
        b.on_move_in(Point::new(1, 0));
        b.on_cell(Point::new(0, 0), CellKind::Wall).unwrap();
        b.on_cell(Point::new(1, 0), CellKind::Solution).unwrap();
        b.on_solution(Point::new(1, 0));
        b.finish()
    }

    #[test]
    fn document_has_header_statics_then_animations() {
        let svg = SvgDocument::new(&sample(), &RenderConfig::default()).to_string();
        let lines: Vec<&str> = svg.lines().collect();

        assert!(lines[0].starts_with("<?xml"));
        assert!(lines[2].contains(r#"viewBox="0 0 300 300""#));
        assert!(lines[2].contains(r#"width="300""#));
        assert_eq!(
            lines[3],
            r#"<rect x="0" y="0" width="300" height="300" fill="var(--bg)" />"#
        );
        assert_eq!(
            lines[4],
            r#"<rect x="0" y="0" width="100" height="100" fill="var(--wall)" />"#
        );
        assert_eq!(
            lines[5],
            r#"<rect id="rs1_0" x="100" y="0" width="100" height="100" fill="var(--solution)" opacity="0" />"#
        );
        assert_eq!(
            lines[6],
            "<animate xlink:href=\"#rs1_0\" attributeName=\"opacity\" from=\"0\" to=\"0.6\" dur=\"0.0081s\" begin=\"0s\" fill=\"freeze\"/>"
        );
        assert_eq!(
            lines[7],
            "<animate xlink:href=\"#rs1_0\" attributeName=\"opacity\" from=\"0.6\" to=\"1\" dur=\"0.0081s\" begin=\"0.0081s\" fill=\"freeze\"/>"
        );
        assert_eq!(lines[8], "</svg>");
    }

    #[test]
    fn geometry_follows_render_config() {
        let config = RenderConfig {
            cell_size: Extent::new(10, 20),
            padding: Extent::new(2, 3),
            margin: Extent::new(5, 7),
            id_prefix: "c".to_string(),
            ..RenderConfig::default()
        };
        let svg = SvgDocument::new(&sample(), &config).to_string();
        assert!(svg.contains(r#"viewBox="0 0 40 74""#));
        assert!(svg.contains(r#"<rect x="5" y="7" width="10" height="20" fill="var(--wall)" />"#));
        assert!(svg.contains(r##"<rect id="c1_0" x="17" y="10" width="6" height="14""##));
        assert!(svg.contains(r##"xlink:href="#c1_0""##));
    }
}
