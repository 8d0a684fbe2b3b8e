pub mod banner;
pub mod progress;
pub mod theme;

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use crate::{app::App, ui::progress::ProgressBar};

const BANNER_TOP: u16 = 2;
const LEGEND_ROW: u16 = 9;

/// Writes `text` at `(x, y)` relative to `area`, clipped to it
pub fn put(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, style: Style) {
    if x >= area.width || y >= area.height {
        return;
    }
    buf.set_stringn(
        area.x + x,
        area.y + y,
        text,
        (area.width - x) as usize,
        style,
    );
}

fn put_char(buf: &mut Buffer, area: Rect, x: u16, y: u16, ch: char, style: Style) {
    if x >= area.width || y >= area.height {
        return;
    }
    if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
        cell.set_char(ch).set_style(style);
    }
}

/// Column at which `text` starts when centered in `width`
pub fn center_x(width: u16, text: &str) -> u16 {
    let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    width.saturating_sub(text_width) / 2
}

fn put_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    put(buf, area, center_x(area.width, text), y, text, style);
}

fn footer_line(status: Option<&str>, width: usize) -> String {
    match status {
        Some(status) => {
            let mut footer = format!("= {status} ");
            let pad = width.saturating_sub(footer.width());
            footer.push_str(&"=".repeat(pad));
            footer
        }
        None => "=".repeat(width),
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rule = "=".repeat(area.width as usize);
        put(buf, area, 0, 0, &rule, theme::banner());

        let footer = footer_line(self.status.as_deref(), area.width as usize);
        put(
            buf,
            area,
            0,
            area.height.saturating_sub(2),
            &footer,
            theme::banner(),
        );

        for (i, line) in banner::TITLE.iter().enumerate() {
            put_centered(buf, area, BANNER_TOP + i as u16, line, theme::title());
        }
        put_centered(buf, area, LEGEND_ROW, banner::LEGEND, theme::legend());

        match self.session.stats() {
            Some(stats) => {
                let y = self.geometry.textbox_y;
                let lines = [
                    format!("Time Taken: {}s", stats.time_taken_secs),
                    format!("WPM: {}", stats.wpm),
                    format!("Mistakes: {}", stats.mistakes),
                ];
                for (i, line) in lines.iter().enumerate() {
                    put_centered(buf, area, y + i as u16, line, Style::default());
                }
            }
            None => {
                render_textbox(self, area, buf);
                render_passage(self, area, buf);
                if self.session.tracks_stats() {
                    render_progress(self, area, buf);
                }
            }
        }
    }
}

fn render_textbox(app: &App, area: Rect, buf: &mut Buffer) {
    let g = app.geometry;
    let style = theme::border();
    let rule = "_".repeat(g.textbox_width as usize + 1);
    let top = g.textbox_y.saturating_sub(1);
    let bottom = g.textbox_y.saturating_add(g.textbox_height);
    let left = g.textbox_x.saturating_sub(2);
    let right = g.textbox_x.saturating_add(g.textbox_width).saturating_add(1);

    put(buf, area, g.textbox_x, top, &rule, style);
    put(buf, area, g.textbox_x, bottom, &rule, style);

    for y in top..=bottom.min(area.height) {
        put(buf, area, left, y, "==", style);
        put(buf, area, right, y, "==", style);
    }
}

fn render_passage(app: &App, area: Rect, buf: &mut Buffer) {
    let g = app.geometry;
    let window = app.scroll_window();

    for (row, cells) in window.rows().iter().enumerate() {
        for (col, (ch, color)) in cells.iter().enumerate() {
            put_char(
                buf,
                area,
                g.textbox_x.saturating_add(col as u16),
                g.textbox_y.saturating_add(row as u16),
                *ch,
                theme::char_style(*color),
            );
        }
    }
}

fn render_progress(app: &App, area: Rect, buf: &mut Buffer) {
    let g = app.geometry;
    let y = g.textbox_y.saturating_add(g.textbox_height).saturating_add(1);
    let progress = ProgressBar::new(
        app.session.typed_len(),
        app.session.passage_len(),
        g.textbox_width as usize,
    );

    put_centered(buf, area, y, &progress.bar(), theme::correct());
    put_centered(buf, area, y, &progress.label(), Style::default());
}
