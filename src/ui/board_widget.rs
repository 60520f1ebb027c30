use crate::layout::{DrawCommand, Paint, SURFACE_HEIGHT, SURFACE_WIDTH};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    Frame,
};

const FILL: char = '█';

pub fn paint_color(paint: Paint) -> Color {
    match paint {
        Paint::Red => Color::Red,
        Paint::Orange => Color::Rgb(255, 165, 0),
        Paint::Blue => Color::Blue,
        Paint::Green => Color::Green,
        Paint::Yellow => Color::Yellow,
        Paint::Purple => Color::Rgb(128, 0, 128),
        Paint::Cyan => Color::Cyan,
        Paint::Magenta => Color::Magenta,
        Paint::Violet => Color::Rgb(238, 130, 238),
        Paint::Pink => Color::Rgb(255, 192, 203),
        Paint::Black => Color::DarkGray,
    }
}

/// Rasterise draw commands into `area`, scaling the fixed pixel surface onto
/// the cell grid.
pub fn render_board(frame: &mut Frame, commands: &[DrawCommand], area: Rect) {
    paint_commands(commands, area, frame.buffer_mut());
}

pub fn paint_commands(commands: &[DrawCommand], area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    for cmd in commands {
        let (x0, x1) = span(cmd.x, cmd.width, SURFACE_WIDTH, area.width);
        let (y0, y1) = span(cmd.y, cmd.height, SURFACE_HEIGHT, area.height);
        let color = paint_color(cmd.paint);

        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_char(FILL).set_fg(color);
                }
            }
        }
    }
}

/// Cell range covered by a pixel span, clipped to `0..cells`. Anything
/// visible on the surface covers at least one cell.
fn span(start: i32, len: i32, surface: i32, cells: u16) -> (u16, u16) {
    let cells = i64::from(cells);
    let scale = |px: i32| (i64::from(px) * cells).div_euclid(i64::from(surface));

    let first = scale(start);
    let last = scale(start + len).max(first + 1);
    let clip = |c: i64| c.clamp(0, cells) as u16;
    (clip(first), clip(last))
}

/// Surface x-coordinate at the centre of a terminal column, or `None` when
/// the column is outside `area`.
pub fn column_to_surface_x(area: Rect, column: u16) -> Option<i32> {
    if area.width == 0 || column < area.x || column >= area.x + area.width {
        return None;
    }
    let offset = i64::from(column - area.x);
    let x = (2 * offset + 1) * i64::from(SURFACE_WIDTH) / (2 * i64::from(area.width));
    Some(x as i32)
}
