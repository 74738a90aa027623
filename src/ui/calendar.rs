use chrono::NaiveDate;
use tui::buffer::Buffer;
use tui::layout::{Constraint, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::Span;
use tui::widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, Widget};

use crate::calendar;
use crate::ctx::Context;

pub struct DayCell {
    day_num: u8,
    weekend: bool,
    in_range: bool,
    endpoint: bool,
    focused: bool,
    is_today: bool,
    style: Style,
    weekend_style: Style,
    range_style: Style,
    focus_style: Style,
    focus_symbol: Option<char>,
    today_symbol: Option<char>,
}

impl DayCell {
    pub fn new(day_num: u8) -> Self {
        DayCell {
            day_num,
            weekend: false,
            in_range: false,
            endpoint: false,
            focused: false,
            is_today: false,
            style: Style::default(),
            weekend_style: Style::default().fg(Color::DarkGray),
            range_style: Style::default().bg(Color::Blue),
            focus_style: Style::default().fg(Color::Red),
            focus_symbol: None,
            today_symbol: None,
        }
    }

    pub fn weekend(mut self, weekend: bool) -> Self {
        self.weekend = weekend;
        self
    }

    pub fn in_range(mut self, in_range: bool) -> Self {
        self.in_range = in_range;
        self
    }

    pub fn endpoint(mut self, endpoint: bool) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn today(mut self, is_today: bool) -> Self {
        self.is_today = is_today;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn weekend_style(mut self, style: Style) -> Self {
        self.weekend_style = style;
        self
    }

    pub fn range_style(mut self, style: Style) -> Self {
        self.range_style = style;
        self
    }

    pub fn focus_style(mut self, style: Style) -> Self {
        self.focus_style = style;
        self
    }

    pub fn focus_symbol_opt(mut self, symbol_opt: Option<char>) -> Self {
        self.focus_symbol = symbol_opt;
        self
    }

    pub fn today_symbol_opt(mut self, symbol_opt: Option<char>) -> Self {
        self.today_symbol = symbol_opt;
        self
    }
}

impl<'a> Into<Cell<'a>> for DayCell {
    fn into(self) -> Cell<'a> {
        let mut style = if self.weekend {
            self.weekend_style
        } else {
            self.style
        };
        if self.in_range {
            style = self.range_style;
        }
        if self.endpoint {
            style = self.range_style.add_modifier(Modifier::BOLD);
        }
        if self.focused {
            style = style.patch(self.focus_style);
        }

        let prefix = if self.focused {
            self.focus_symbol
        } else if self.is_today {
            self.today_symbol
        } else {
            None
        };

        let text = match prefix {
            Some(symbol) => format!("{}{:>2}", symbol, self.day_num),
            None => format!(" {:>2}", self.day_num),
        };

        Cell::from(Span::styled(text, style))
    }
}

pub struct MonthView {
    header_style: Style,
    label_style: Style,
    cell_style: Style,
    weekend_style: Style,
    range_style: Style,
    focus_style: Style,
    today_symbol: Option<char>,
    focus_symbol: Option<char>,
}

impl MonthView {
    const LABEL_ROWS: u16 = 1;

    pub fn today_symbol(mut self, symbol: char) -> Self {
        self.today_symbol = Some(symbol);
        self
    }

    pub fn focus_symbol(mut self, symbol: char) -> Self {
        self.focus_symbol = Some(symbol);
        self
    }
}

impl Default for MonthView {
    fn default() -> Self {
        MonthView {
            header_style: Style::default().fg(Color::Yellow),
            label_style: Style::default().fg(Color::Yellow),
            cell_style: Style::default(),
            weekend_style: Style::default().fg(Color::DarkGray),
            range_style: Style::default().bg(Color::Blue),
            focus_style: Style::default().fg(Color::Red),
            today_symbol: Some('*'),
            focus_symbol: None,
        }
    }
}

impl StatefulWidget for MonthView {
    type State = Context;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let header = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

        let index = state.viewport;
        let offset = calendar::first_weekday_offset(&index) as usize;
        let range = *state.picker.range();
        let today = state.today();

        let cells: Vec<Cell<'_>> = (1..=index.num_days())
            .map(|day_num| {
                let date = NaiveDate::from_ymd_opt(
                    index.year(),
                    index.month().number_from_month(),
                    day_num,
                )
                .unwrap();

                DayCell::new(day_num as u8)
                    .weekend(calendar::is_weekend(date))
                    // Weekend cells stay dimmed even inside a committed range.
                    .in_range(range.contains(date) && calendar::is_weekday(date))
                    .endpoint(range.start() == Some(date) || range.end() == Some(date))
                    .focused(state.cursor == Some(date))
                    .today(date == today)
                    .style(self.cell_style)
                    .weekend_style(self.weekend_style)
                    .range_style(self.range_style)
                    .focus_style(self.focus_style)
                    .focus_symbol_opt(self.focus_symbol)
                    .today_symbol_opt(self.today_symbol)
                    .into()
            })
            .collect();

        let rows: Vec<Row> = std::iter::repeat_with(|| Cell::from(""))
            .take(offset)
            .chain(cells.into_iter())
            .collect::<Vec<Cell<'_>>>()
            .chunks(7)
            .map(|row| Row::new(row.to_vec()))
            .collect();

        Block::default()
            .borders(Borders::NONE)
            .title(Span::styled(index.to_string(), self.label_style))
            .render(area, buf);

        Widget::render(
            Table::new(rows)
                .header(Row::new(header.to_vec()).style(self.header_style))
                .widths(&[
                    Constraint::Length(4),
                    Constraint::Length(4),
                    Constraint::Length(4),
                    Constraint::Length(4),
                    Constraint::Length(4),
                    Constraint::Length(4),
                    Constraint::Length(4),
                ]),
            Rect::new(
                area.x,
                area.y + Self::LABEL_ROWS,
                area.width,
                area.height.saturating_sub(Self::LABEL_ROWS),
            ),
            buf,
        );
    }
}
