//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
    Frame,
};

use super::app::EquationApp;
use super::layout::EquationLayout;
use crate::core::Slot;

/// Renders the equation to the frame and returns the layout it used
///
/// The returned layout is what mouse events must be hit-tested against.
pub fn render(app: &EquationApp, frame: &mut Frame) -> EquationLayout {
    let area = frame.area();
    let ui = EquationUI::new(app);
    let layout = ui.regions(area).equation;
    frame.render_widget(ui, area);
    layout
}

/// Areas of a rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// The equation row
    pub equation: EquationLayout,
    /// Status line
    pub status: Rect,
    /// Help line, when enabled
    pub help: Option<Rect>,
}

/// Equation widget
#[derive(Debug)]
pub struct EquationUI<'a> {
    app: &'a EquationApp,
}

impl<'a> EquationUI<'a> {
    /// Creates a new equation widget
    #[must_use]
    pub fn new(app: &'a EquationApp) -> Self {
        Self { app }
    }

    /// Splits the frame area into equation, status and help
    #[must_use]
    pub fn regions(&self, area: Rect) -> Regions {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let help_height = u16::from(self.app.config().show_help);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),              // Equation
                Constraint::Length(1),           // Status
                Constraint::Length(help_height), // Help
            ])
            .split(inner);

        Regions {
            equation: EquationLayout::compute(chunks[0]),
            status: chunks[1],
            help: self.app.config().show_help.then_some(chunks[2]),
        }
    }

    /// Renders one value box
    fn render_value(&self, area: Rect, label: &str, value: u64, style: Style, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style);

        Paragraph::new(Span::styled(
            value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
    }

    /// Renders a counter box, highlighted when focused
    fn render_counter(&self, layout: &EquationLayout, slot: Slot, buf: &mut Buffer) {
        let style = if self.app.focus() == slot {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let value = self.app.snapshot().get(slot);
        self.render_value(layout.slot_area(slot), slot.name(), value, style, buf);
    }

    /// Renders a static glyph on the middle row of its cell
    fn render_glyph(&self, area: Rect, glyph: &str, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let row = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        Paragraph::new(Span::styled(
            glyph,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(row, buf);
    }

    /// Renders the status line
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let status = self.app.status();
        let style = if self.app.last_error().is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        Paragraph::new(Span::styled(status, style)).render(area, buf);
    }

    /// Renders the key help line
    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(HELP_SHORTCUTS.len() * 3);
        for (key, desc) in HELP_SHORTCUTS {
            spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("{desc}  "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

impl Widget for EquationUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(self.app.config().title.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = self.regions(area);
        let layout = regions.equation;
        let total = self.app.snapshot().total;

        self.render_counter(&layout, Slot::Left, buf);
        self.render_glyph(layout.plus, PLUS_GLYPH, buf);
        self.render_counter(&layout, Slot::Middle, buf);
        self.render_glyph(layout.equals, EQUALS_GLYPH, buf);
        self.render_value(
            layout.total,
            "total",
            total,
            Style::default().fg(Color::Green),
            buf,
        );

        self.render_status(regions.status, buf);
        if let Some(help) = regions.help {
            self.render_help(help, buf);
        }
    }
}

/// Glyph between the two counters
pub const PLUS_GLYPH: &str = "+";

/// Glyph before the total
pub const EQUALS_GLYPH: &str = "=";

/// Key help shown under the equation
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("←/1", "Left"),
    ("→/2", "Middle"),
    ("Tab", "Focus"),
    ("Enter", "Click"),
    ("q", "Quit"),
];

/// Reads the number rendered inside a value box
///
/// Returns `None` when the box is too small to hold a value or holds
/// something that is not a number.
#[must_use]
pub fn read_value(buf: &Buffer, area: Rect) -> Option<u64> {
    if area.width < 3 || area.height < 3 {
        return None;
    }
    let y = area.y + 1;
    let text: String = (area.x + 1..area.x + area.width - 1)
        .filter_map(|x| buf.cell((x, y)))
        .map(|cell| cell.symbol())
        .collect();
    text.trim().parse().ok()
}
