use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use banner_core::editor::LineEditor;
use banner_core::fields::{FieldSet, TextField, Toggle};
use banner_presets::PresetCatalog;

/// One focusable row of the form: the preset selector, a text field, or
/// the toggle-only footer branding row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Preset,
    Field(TextField),
    Footer,
}

impl FormRow {
    /// Rows in display order, preset selector first, footer last.
    pub fn all() -> Vec<FormRow> {
        let mut rows = vec![FormRow::Preset];
        rows.extend(TextField::ALL.iter().copied().map(FormRow::Field));
        rows.push(FormRow::Footer);
        rows
    }

    pub fn next(self) -> FormRow {
        let rows = Self::all();
        let i = rows.iter().position(|r| *r == self).unwrap_or(0);
        rows[(i + 1) % rows.len()]
    }

    pub fn prev(self) -> FormRow {
        let rows = Self::all();
        let i = rows.iter().position(|r| *r == self).unwrap_or(0);
        rows[(i + rows.len() - 1) % rows.len()]
    }

    /// The visibility flag toggled by space on this row, if any.
    pub fn toggle(self) -> Option<Toggle> {
        match self {
            FormRow::Preset => None,
            FormRow::Footer => Some(Toggle::Footer),
            FormRow::Field(field) => Some(match field {
                TextField::Name => Toggle::Name,
                TextField::Headline => Toggle::Headline,
                TextField::Tagline => Toggle::Tagline,
                TextField::Company => Toggle::Company,
                TextField::Location => Toggle::Location,
                TextField::Website => Toggle::Website,
                TextField::Email => Toggle::Email,
                TextField::Phone => Toggle::Phone,
            }),
        }
    }
}

fn label(field: TextField) -> &'static str {
    match field {
        TextField::Name => "Name",
        TextField::Headline => "Headline",
        TextField::Tagline => "Tagline",
        TextField::Company => "Company",
        TextField::Location => "Location",
        TextField::Website => "Website",
        TextField::Email => "Email",
        TextField::Phone => "Phone",
    }
}

/// Everything the form panel needs for one frame.
pub struct FormView<'a> {
    pub fields: &'a FieldSet,
    pub catalog: &'a PresetCatalog,
    pub preset_id: &'a str,
    pub focus: FormRow,
    /// Present while a text row is in edit mode.
    pub editor: Option<&'a LineEditor>,
}

/// Render the form panel and, in edit mode, place the terminal cursor in
/// the focused value.
pub fn render_form(f: &mut Frame, area: Rect, view: FormView<'_>) {
    let block = Block::default().borders(Borders::ALL).title(" FIELDS ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let focused = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let normal = Style::default();
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines: Vec<Line> = Vec::new();

    // Preset selector row.
    let preset = view.catalog.lookup(view.preset_id);
    let position = view.catalog.position(&preset.id).unwrap_or(0);
    lines.push(Line::from(vec![
        Span::styled(
            format!(
                " Preset    {} ({}/{})",
                preset.name,
                position + 1,
                view.catalog.len()
            ),
            if view.focus == FormRow::Preset {
                focused
            } else {
                normal
            },
        ),
        Span::styled("  ←/→", dim),
    ]));
    lines.push(Line::from(Span::styled(
        format!("            {}", preset.description),
        dim,
    )));
    lines.push(Line::default());

    let mut cursor: Option<(u16, u16)> = None;
    for field in TextField::ALL {
        let row = FormRow::Field(field);
        let shown = view
            .fields
            .shown(row.toggle().expect("field rows always have a flag"));
        let marker = if shown { "[x]" } else { "[ ]" };
        let is_focus = view.focus == row;
        let editing = is_focus && view.editor.is_some();

        let value: &str = if editing {
            view.editor.map(|e| e.text()).unwrap_or_default()
        } else {
            view.fields.text(field)
        };

        let value_style = if editing {
            Style::default().fg(Color::Yellow)
        } else if shown {
            normal
        } else {
            dim
        };

        let prefix = format!(" {marker} {:<9} ", label(field));
        if editing {
            let before_cursor = view
                .editor
                .map(|e| e.text()[..e.cursor()].width())
                .unwrap_or(0);
            let col = area.x + 1 + prefix.width() as u16 + before_cursor as u16;
            let y = area.y + 1 + lines.len() as u16;
            cursor = Some((col, y));
        }
        lines.push(Line::from(vec![
            Span::styled(prefix, if is_focus { focused } else { normal }),
            Span::styled(value.to_string(), value_style),
        ]));
    }

    let footer_marker = if view.fields.show_footer { "[x]" } else { "[ ]" };
    lines.push(Line::from(Span::styled(
        format!(" {footer_marker} {:<9} branding mark", "Footer"),
        if view.focus == FormRow::Footer {
            focused
        } else {
            normal
        },
    )));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " space toggle · enter edit · e export",
        dim,
    )));
    lines.push(Line::from(Span::styled(" r reset · ~ console · q quit", dim)));

    f.render_widget(Paragraph::new(lines), inner);
    if let Some((x, y)) = cursor {
        if x < area.right() && y < area.bottom() {
            f.set_cursor_position((x, y));
        }
    }
}
