use chrono::Duration;

use crate::calendar::{self, MonthIndex};
use crate::cmds::{Cmd, CmdResult};
use crate::ctrl::{Control, Selection};
use crate::ctx::Context;

#[derive(Default)]
pub struct CalendarController {}

impl CalendarController {
    /// Places an absent cursor on day 1 of the viewport month. The input that
    /// seeded the cursor performs no further movement.
    fn seed_cursor(context: &mut Context) -> bool {
        if context.cursor.is_some() {
            return false;
        }

        context.cursor = Some(context.viewport.first_day());
        true
    }

    fn shift_cursor(&mut self, days: i64, context: &mut Context) {
        if Self::seed_cursor(context) {
            return;
        }

        if let Some(cursor) = context.cursor {
            let cursor = cursor + Duration::days(days);
            context.cursor = Some(cursor);

            // Auto-page so the focused cell stays visible.
            if !context.viewport.contains(cursor) {
                context.viewport = MonthIndex::from(cursor);
            }
        }
    }

    fn confirm(&mut self, context: &mut Context) {
        if Self::seed_cursor(context) {
            return;
        }

        if let Some(cursor) = context.cursor {
            // The grid already shows weekend cells as disabled; the picker
            // would only raise a redundant rejection for them.
            if calendar::is_weekend(cursor) {
                log::debug!("confirm on weekend {} ignored", cursor);
                return;
            }

            if let Some(commit) = context.picker.select_date(cursor) {
                context.push_commit(commit);
            }
        }
    }
}

impl Control for CalendarController {
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut Context) -> CmdResult {
        match cmd {
            Cmd::NextDay => {
                self.move_right(context);
                Ok(Cmd::Noop)
            }
            Cmd::PrevDay => {
                self.move_left(context);
                Ok(Cmd::Noop)
            }
            Cmd::NextWeek => {
                self.move_down(context);
                Ok(Cmd::Noop)
            }
            Cmd::PrevWeek => {
                self.move_up(context);
                Ok(Cmd::Noop)
            }
            Cmd::NextMonth => {
                context.viewport = context.viewport.step_months(1);
                Ok(Cmd::Noop)
            }
            Cmd::PrevMonth => {
                context.viewport = context.viewport.step_months(-1);
                Ok(Cmd::Noop)
            }
            Cmd::NextYear => {
                context.viewport = context.viewport.step_years(1);
                Ok(Cmd::Noop)
            }
            Cmd::PrevYear => {
                context.viewport = context.viewport.step_years(-1);
                Ok(Cmd::Noop)
            }
            Cmd::Confirm => {
                self.confirm(context);
                Ok(Cmd::Noop)
            }
            _ => Ok(*cmd),
        }
    }
}

impl Selection for CalendarController {
    fn move_left(&mut self, context: &mut Context) {
        self.move_n_left(1, context);
    }

    fn move_right(&mut self, context: &mut Context) {
        self.move_n_right(1, context);
    }

    fn move_up(&mut self, context: &mut Context) {
        self.move_n_up(1, context);
    }

    fn move_down(&mut self, context: &mut Context) {
        self.move_n_down(1, context);
    }

    fn move_n_left(&mut self, n: u32, context: &mut Context) {
        self.shift_cursor(-(n as i64), context);
    }

    fn move_n_right(&mut self, n: u32, context: &mut Context) {
        self.shift_cursor(n as i64, context);
    }

    fn move_n_up(&mut self, n: u32, context: &mut Context) {
        self.shift_cursor(-7 * n as i64, context);
    }

    fn move_n_down(&mut self, n: u32, context: &mut Context) {
        self.shift_cursor(7 * n as i64, context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Month, NaiveDate};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn march_2024() -> Context {
        Context::with_viewport(MonthIndex::new(Month::March, 2024))
    }

    #[test]
    fn first_input_only_seeds_the_cursor() {
        let mut ctrl = CalendarController::default();
        let mut context = march_2024();
        assert!(context.cursor.is_none());

        ctrl.send_cmd(&Cmd::NextWeek, &mut context).unwrap();
        assert_eq!(context.cursor, Some(date(2024, 3, 1)));

        ctrl.send_cmd(&Cmd::NextWeek, &mut context).unwrap();
        assert_eq!(context.cursor, Some(date(2024, 3, 8)));
    }

    #[test]
    fn moves_shift_by_day_and_week() {
        let mut ctrl = CalendarController::default();
        let mut context = march_2024();
        context.cursor = Some(date(2024, 3, 15));

        ctrl.send_cmd(&Cmd::NextDay, &mut context).unwrap();
        assert_eq!(context.cursor, Some(date(2024, 3, 16)));

        ctrl.send_cmd(&Cmd::PrevWeek, &mut context).unwrap();
        assert_eq!(context.cursor, Some(date(2024, 3, 9)));

        ctrl.send_cmd(&Cmd::PrevDay, &mut context).unwrap();
        assert_eq!(context.cursor, Some(date(2024, 3, 8)));
    }

    #[test]
    fn crossing_the_month_boundary_pages_the_viewport() {
        let mut ctrl = CalendarController::default();
        let mut context = march_2024();
        context.cursor = Some(date(2024, 3, 31));

        ctrl.send_cmd(&Cmd::NextDay, &mut context).unwrap();

        assert_eq!(context.cursor, Some(date(2024, 4, 1)));
        assert_eq!(context.viewport, MonthIndex::new(Month::April, 2024));
    }

    #[test]
    fn paging_works_across_years() {
        let mut ctrl = CalendarController::default();
        let mut context = Context::with_viewport(MonthIndex::new(Month::January, 2024));
        context.cursor = Some(date(2024, 1, 3));

        ctrl.send_cmd(&Cmd::PrevWeek, &mut context).unwrap();

        assert_eq!(context.cursor, Some(date(2023, 12, 27)));
        assert_eq!(context.viewport, MonthIndex::new(Month::December, 2023));
    }

    #[test]
    fn viewport_stepping_leaves_the_cursor_alone() {
        let mut ctrl = CalendarController::default();
        let mut context = march_2024();
        context.cursor = Some(date(2024, 3, 15));

        ctrl.send_cmd(&Cmd::NextMonth, &mut context).unwrap();
        ctrl.send_cmd(&Cmd::NextYear, &mut context).unwrap();

        assert_eq!(context.viewport, MonthIndex::new(Month::April, 2025));
        assert_eq!(context.cursor, Some(date(2024, 3, 15)));
    }

    #[test]
    fn confirm_selects_the_focused_weekday() {
        let mut ctrl = CalendarController::default();
        let mut context = march_2024();
        context.cursor = Some(date(2024, 3, 4));

        ctrl.send_cmd(&Cmd::Confirm, &mut context).unwrap();
        assert!(context.picker.range().is_open());
        assert_eq!(context.picker.range().start(), Some(date(2024, 3, 4)));
        assert!(context.take_commit().is_none());

        context.cursor = Some(date(2024, 3, 8));
        ctrl.send_cmd(&Cmd::Confirm, &mut context).unwrap();

        let commit = context.take_commit().unwrap();
        assert_eq!(commit.range.start(), Some(date(2024, 3, 4)));
        assert_eq!(commit.range.end(), Some(date(2024, 3, 8)));
    }

    #[test]
    fn confirm_on_weekend_is_a_silent_noop() {
        let mut ctrl = CalendarController::default();
        let mut context = march_2024();
        context.cursor = Some(date(2024, 3, 9));

        ctrl.send_cmd(&Cmd::Confirm, &mut context).unwrap();

        assert!(context.picker.range().is_empty());
        assert!(context.picker.validation().is_none());
        assert_eq!(context.cursor, Some(date(2024, 3, 9)));
    }

    #[test]
    fn confirm_with_absent_cursor_seeds_without_selecting() {
        let mut ctrl = CalendarController::default();
        let mut context = march_2024();

        ctrl.send_cmd(&Cmd::Confirm, &mut context).unwrap();

        assert_eq!(context.cursor, Some(date(2024, 3, 1)));
        assert!(context.picker.range().is_empty());
    }
}
