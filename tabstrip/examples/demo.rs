//! Interactive tab strip demo.
//!
//! Arrow keys navigate (disabled tabs are skipped), Home/End jump,
//! Enter/Space re-activates, `o` flips orientation, `q` quits.

use std::fs::File;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;
use ratatui::DefaultTerminal;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use simplelog::{Config, LevelFilter, WriteLogger};

use tabstrip::keys::convert_key_event;
use tabstrip::prelude::*;
use tabstrip::tabs::render::render_tabs;

fn main() -> io::Result<()> {
    let log_file = File::create("tabstrip-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let items = vec![
        TabItem::new("overview", "Overview"),
        TabItem::new("inbox", "Inbox")
            .with_badge(Badge::new("3").with_variant(BadgeVariant::Warning)),
        TabItem::new("archive", "Archive").with_disabled(true),
        TabItem::new("done", "Done")
            .with_badge(Badge::new("12").with_variant(BadgeVariant::Success)),
    ];
    let tabs = Tabs::new(&items);

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &tabs, &items);
    ratatui::restore();
    result
}

fn run(terminal: &mut DefaultTerminal, tabs: &Tabs, items: &[TabItem]) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let [bar, panel] = match tabs.orientation() {
                Orientation::Horizontal => {
                    Layout::vertical([Constraint::Length(1), Constraint::Min(0)])
                        .areas(frame.area())
                }
                Orientation::Vertical => {
                    Layout::horizontal([Constraint::Length(14), Constraint::Min(0)])
                        .areas(frame.area())
                }
            };

            render_tabs(frame, bar, items, tabs, true, Style::default());

            let body = match tabs.active_index(items) {
                Some(idx) => format!("{} panel", items[idx].label),
                None => String::from("no tabs"),
            };
            frame.render_widget(
                Paragraph::new(body).block(Block::default().borders(Borders::ALL)),
                panel,
            );
        })?;
        tabs.clear_dirty();

        if let Event::Key(key_event) = event::read()? {
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            match key_event.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('o') => {
                    let flipped = match tabs.orientation() {
                        Orientation::Horizontal => Orientation::Vertical,
                        Orientation::Vertical => Orientation::Horizontal,
                    };
                    tabs.set_orientation(flipped);
                }
                _ => {
                    if let Some(key) = convert_key_event(key_event) {
                        tabs.handle_key(&key, items);
                    }
                }
            }

            for change in tabs.take_events() {
                info!("active tab changed to {}", change.id);
            }
            if let Some(target) = tabs.take_focus_intent() {
                info!("focus follows {}", target);
            }
        }
    }
}
