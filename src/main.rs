mod app;
mod args;
mod calendar;
mod cmds;
mod config;
mod ctrl;
mod ctx;
mod events;
mod range;
mod ui;

use std::io;

use chrono::{Duration, Local};
use flexi_logger::{FileSpec, Logger};
use structopt::StructOpt;
use termion::{raw::IntoRawMode, screen::AlternateScreen};
use tui::backend::TermionBackend;
use tui::Terminal;

use app::App;
use args::Args;
use config::Config;
use events::{Dispatcher, Event};
use range::{DateRange, PredefinedRange};

fn predefined_ranges() -> Vec<PredefinedRange> {
    vec![
        PredefinedRange {
            label: "Last 7 days".to_owned(),
            produce: Box::new(|| {
                let end = Local::now().date_naive();
                DateRange::closed(end - Duration::days(6), end)
            }),
        },
        PredefinedRange {
            label: "Last 30 days".to_owned(),
            produce: Box::new(|| {
                let end = Local::now().date_naive();
                DateRange::closed(end - Duration::days(29), end)
            }),
        },
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    let file_spec = if let Some(log_file) = &args.log_file {
        FileSpec::try_from(log_file.clone())?
    } else {
        FileSpec::default().suppress_timestamp()
    };

    let _logger = Logger::try_with_env_or_str("info")?
        .log_to_file(file_spec)
        .start()?;

    let config = Config::load(args.configfile)?;
    let dispatcher = Dispatcher::from_config(&config);

    let mut app = App::new(&config, predefined_ranges()).on_range_change(Box::new(
        |range, weekends| {
            log::info!(
                "selected range: {} - {}",
                calendar::format_date(range.start()),
                calendar::format_date(range.end())
            );
            for day in weekends {
                log::info!("weekend in range: {}", day);
            }
        },
    ));

    if args.show {
        let stdout = io::stdout().into_raw_mode()?;
        let backend = TermionBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        terminal.draw(|f| app::draw(f, &mut app))?;
    } else {
        let stdout = io::stdout().into_raw_mode()?;
        let stdout = AlternateScreen::from(stdout);
        let backend = TermionBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        while !app.quit {
            terminal.draw(|f| app::draw(f, &mut app))?;

            let event = dispatcher.next()?;
            if let Err(err) = app.handle(event) {
                log::debug!("{}", err);
            }
        }

        terminal.show_cursor()?;
    }

    Ok(())
}
