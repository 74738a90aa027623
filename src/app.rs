use crate::cmds::{Cmd, CmdError, CmdResult};
use crate::config::Config;
use crate::ctrl::{CalendarController, Controller};
use crate::ctx::Context;
use crate::events::Event;
use crate::range::{DateRange, PredefinedRange};
use crate::ui::{MonthView, SummaryView};

use chrono::NaiveDate;
use tui::backend::Backend;
use tui::layout::{Constraint, Direction, Layout};
use tui::Frame;

pub type RangeSink = Box<dyn FnMut(&DateRange, &[NaiveDate])>;

pub fn draw<B: Backend>(f: &mut Frame<B>, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(9), Constraint::Min(4)].as_ref())
        .split(f.size());

    let month_view = MonthView::default()
        .today_symbol(app.config.today_symbol)
        .focus_symbol(app.config.focus_symbol);
    let summary = SummaryView::default().shortcuts(
        app.predefined
            .iter()
            .map(|range| range.label.clone())
            .collect(),
    );

    f.render_stateful_widget(month_view, layout[0], &mut app.context);
    f.render_stateful_widget(summary, layout[1], &mut app.context);
}

pub struct App<'a> {
    pub quit: bool,
    pub context: Context,
    calendar: Controller<'a, CalendarController>,
    predefined: Vec<PredefinedRange>,
    on_range_change: Option<RangeSink>,
    config: &'a Config,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, predefined: Vec<PredefinedRange>) -> App<'a> {
        App {
            quit: false,
            context: Context::new(),
            calendar: Controller::new(&config.key_map, CalendarController::default()),
            predefined,
            on_range_change: None,
            config,
        }
    }

    /// Installs the host sink invoked once per completed range with the
    /// committed endpoints and the weekend dates they enclose.
    pub fn on_range_change(mut self, sink: RangeSink) -> Self {
        self.on_range_change = Some(sink);
        self
    }

    pub fn handle(&mut self, event: Event) -> CmdResult {
        match event {
            Event::Tick => {
                self.context.update();
                Ok(Cmd::Noop)
            }
            Event::Input(key) => {
                let cmd = match self.config.key_map.get(&key) {
                    Some(cmd) => *cmd,
                    None => {
                        return Err(CmdError::new(format!(
                            "Could not handle input key '{:?}'",
                            key
                        )))
                    }
                };

                match cmd {
                    Cmd::Exit => {
                        self.quit = true;
                        Ok(Cmd::Noop)
                    }
                    Cmd::Predefined(index) => {
                        self.install_predefined(index);
                        self.emit_pending();
                        Ok(Cmd::Noop)
                    }
                    Cmd::DismissError => {
                        self.context.picker.clear_validation();
                        Ok(Cmd::Noop)
                    }
                    _ => {
                        let result = self.calendar.handle(Event::Input(key), &mut self.context);
                        self.emit_pending();
                        result
                    }
                }
            }
        }
    }

    fn install_predefined(&mut self, index: usize) {
        let range = match self.predefined.get(index) {
            Some(predefined) => {
                log::debug!("installing predefined range '{}'", predefined.label);
                (predefined.produce)()
            }
            None => return,
        };

        if let Some(commit) = self.context.picker.select_predefined(range) {
            self.context.push_commit(commit);
        }
    }

    fn emit_pending(&mut self) {
        if let Some(commit) = self.context.take_commit() {
            if let Some(sink) = self.on_range_change.as_mut() {
                sink(&commit.range, &commit.weekends);
            }
        }
    }
}
