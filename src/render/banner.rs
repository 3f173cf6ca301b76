//! Banner widget: prefix, typed text and caret, centered.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// The typewriter line as rendered in the full-screen player.
pub struct Banner<'a> {
    prefix: &'a str,
    text: &'a str,
    caret: &'a str,
    caret_visible: bool,
    theme: &'a Theme,
}

impl<'a> Banner<'a> {
    pub fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self {
            prefix: "",
            text,
            caret: "|",
            caret_visible: true,
            theme,
        }
    }

    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn caret(mut self, caret: &'a str) -> Self {
        self.caret = caret;
        self
    }

    pub fn caret_visible(mut self, visible: bool) -> Self {
        self.caret_visible = visible;
        self
    }

    /// Build the styled line. A hidden caret is replaced by blanks of
    /// the same width so the text does not move.
    pub fn line(&self) -> Line<'a> {
        let mut spans = Vec::with_capacity(4);
        if !self.prefix.is_empty() {
            spans.push(Span::styled(self.prefix, self.theme.text_style()));
            spans.push(Span::styled(" ", self.theme.text_style()));
        }
        spans.push(Span::styled(self.text, self.theme.accent_bold_style()));
        if self.caret_visible {
            spans.push(Span::styled(self.caret, self.theme.caret_style()));
        } else {
            spans.push(Span::raw(" ".repeat(self.caret.width())));
        }
        Line::from(spans)
    }

    /// Display width of the full line in terminal cells.
    pub fn width(&self) -> usize {
        let prefix = if self.prefix.is_empty() {
            0
        } else {
            self.prefix.width() + 1
        };
        prefix + self.text.width() + self.caret.width()
    }
}

impl Widget for Banner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = self.width();
        let area_width = area.width as usize;

        if width <= area_width {
            let x = area.x + ((area_width - width) / 2) as u16;
            let y = area.y + area.height / 2;
            buf.set_line(x, y, &self.line(), area.width);
            return;
        }

        // Too wide for one row: let the paragraph wrap it
        let rows = (width + area_width - 1) / area_width;
        let height = (rows as u16).min(area.height);
        let y = area.y + (area.height - height) / 2;
        let target = Rect::new(area.x, y, area.width, height);

        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(target, buf);
    }
}
