// src/tui_app.rs

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    backend::Backend,
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table as TableWidget, TableState},
    Terminal,
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::layout::{self, estimate_widths};
use crate::table::Table;

/// How column widths are derived for the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum WidthMode {
    /// Proportional shares from the sampled width hints.
    Proportional,
    /// Every column gets the same share.
    Equal,
    /// Each column as wide as its longest cell.
    Content,
}

impl WidthMode {
    fn next(self) -> WidthMode {
        let modes: Vec<WidthMode> = WidthMode::iter().collect();
        let idx = modes.iter().position(|&m| m == self).unwrap_or(0);
        modes[(idx + 1) % modes.len()]
    }
}

pub struct TuiApp {
    table: Table,
    title: String,
    width_hints: Option<Vec<f32>>,
    width_mode: WidthMode,

    // Single authoritative scroll/selection state. The table widget is fed
    // from this every frame; nothing else holds a scroll position.
    selected_row: usize,
    table_state: TableState,
    body_height: u16,
}

impl TuiApp {
    pub fn new(table: Table, title: impl Into<String>) -> Self {
        let width_hints = estimate_widths(&table);

        let mut table_state = TableState::default();
        table_state.select(Some(0));

        TuiApp {
            table,
            title: title.into(),
            width_hints,
            width_mode: WidthMode::Proportional,
            selected_row: 0,
            table_state,
            body_height: 0,
        }
    }

    pub fn main_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.draw_ui(terminal)?;

            if crossterm::event::poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Up => self.move_selection(-1),
                        KeyCode::Down => self.move_selection(1),
                        KeyCode::PageUp => self.move_selection(-(self.page_len() as isize)),
                        KeyCode::PageDown => self.move_selection(self.page_len() as isize),
                        KeyCode::Char('g') => self.select_row(0),
                        KeyCode::Char('G') => {
                            self.select_row(self.table.row_count().saturating_sub(1))
                        }
                        KeyCode::Char('w') => {
                            self.width_mode = self.width_mode.next();
                        }
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    }
                }
            }
        }
    }

    fn page_len(&self) -> usize {
        self.body_height.max(1) as usize
    }

    fn move_selection(&mut self, delta: isize) {
        let target = self.selected_row as isize + delta;
        self.select_row(target.max(0) as usize);
    }

    fn select_row(&mut self, row: usize) {
        let last = self.table.row_count().saturating_sub(1);
        self.selected_row = row.min(last);
        self.table_state.select(Some(self.selected_row));
    }

    /// Column constraints for the current width mode. A proportional request
    /// without hints degrades to equal shares.
    fn column_constraints(&self) -> Vec<Constraint> {
        let columns = self.table.column_count();
        match self.width_mode {
            WidthMode::Proportional => {
                let shares = match &self.width_hints {
                    Some(hints) => layout::percentage_shares(hints),
                    None => layout::equal_shares(columns),
                };
                shares.into_iter().map(Constraint::Percentage).collect()
            }
            WidthMode::Equal => layout::equal_shares(columns)
                .into_iter()
                .map(Constraint::Percentage)
                .collect(),
            WidthMode::Content => (0..columns)
                .map(|col| {
                    let max_content_width = self
                        .table
                        .rows
                        .iter()
                        .filter_map(|row| row.get(col))
                        .map(|cell| cell.chars().count() as u16)
                        .max()
                        .unwrap_or(10)
                        + 2;
                    Constraint::Length(max_content_width)
                })
                .collect(),
        }
    }

    fn draw_ui<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            let area = f.area();
            let block = Block::default()
                .borders(Borders::ALL)
                .title(self.title.clone());

            if self.table.is_empty() {
                let notice = Paragraph::new("no data").block(block);
                f.render_widget(notice, area);
                return;
            }

            // Border top/bottom plus the header row.
            self.body_height = area.height.saturating_sub(3);

            let header_cells = self.table.headers.iter().map(|h| {
                Cell::from(h.clone()).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )
            });
            let header = Row::new(header_cells).height(1).bottom_margin(0);

            let rows = self.table.rows.iter().map(|row| {
                let cells = row.iter().map(|cell| Cell::from(cell.clone()));
                Row::new(cells).height(1).bottom_margin(0)
            });

            let widths = self.column_constraints();

            let table = TableWidget::new(rows, &widths)
                .header(header)
                .block(block)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol("-> ")
                .column_spacing(1);

            f.render_stateful_widget(table, area, &mut self.table_state);
        })?;
        Ok(())
    }
}
