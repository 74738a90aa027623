use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::text::{Span, Spans, Text};
use tui::widgets::{Block, Borders, Paragraph, StatefulWidget, Widget};

use crate::calendar;
use crate::ctx::Context;

/// Footer pane: the formatted endpoints of the current selection, a pending
/// validation message and the available shortcut ranges.
pub struct SummaryView {
    label_style: Style,
    value_style: Style,
    error_style: Style,
    shortcut_style: Style,
    shortcuts: Vec<String>,
}

impl Default for SummaryView {
    fn default() -> Self {
        SummaryView {
            label_style: Style::default().fg(Color::Yellow),
            value_style: Style::default(),
            error_style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            shortcut_style: Style::default().fg(Color::DarkGray),
            shortcuts: Vec::new(),
        }
    }
}

impl SummaryView {
    pub fn shortcuts(mut self, shortcuts: Vec<String>) -> Self {
        self.shortcuts = shortcuts;
        self
    }
}

impl StatefulWidget for SummaryView {
    type State = Context;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let range = state.picker.range();

        let mut lines = vec![
            Spans::from(vec![
                Span::styled("Start: ", self.label_style),
                Span::styled(calendar::format_date(range.start()), self.value_style),
            ]),
            Spans::from(vec![
                Span::styled("End:   ", self.label_style),
                Span::styled(calendar::format_date(range.end()), self.value_style),
            ]),
        ];

        if let Some(error) = state.picker.validation() {
            lines.push(Spans::from(Span::styled(
                format!("{} (Esc to dismiss)", error),
                self.error_style,
            )));
        } else {
            lines.push(Spans::from(Span::raw("")));
        }

        if !self.shortcuts.is_empty() {
            let labels = self
                .shortcuts
                .iter()
                .enumerate()
                .map(|(i, label)| format!("[{}] {}", i + 1, label))
                .collect::<Vec<_>>()
                .join("   ");
            lines.push(Spans::from(Span::styled(labels, self.shortcut_style)));
        }

        Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::TOP).title("Selection"))
            .render(area, buf);
    }
}
