use crate::core::state::TipCalculator;
use crate::tui::component::Component;
use crate::tui::components::{ResultsPanel, TextField, TipSelector, TitleBar};
use crate::tui::components::text_field::ERROR_COLOR;
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Rows used by the form column: bill, tip label, presets, custom, people.
const FORM_HEIGHT: u16 = 13;

const HELP_TEXT: &str = " Tab/↑↓ Move  ←→ Preset  Enter Select  Ctrl+R Reset  Esc Quit ";

pub fn draw_ui(frame: &mut Frame, app: &TipCalculator, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, body_area, footer_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(app.status_message.clone()).render(frame, title_area);

    let [form_area, results_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .spacing(1)
            .areas(body_area);

    draw_form(frame, form_area, app, tui);

    let [results_area, _] = Layout::vertical([Length(FORM_HEIGHT), Min(0)]).areas(results_area);
    ResultsPanel::new(app.tip_amount_display(), app.total_per_person_display())
        .reset(app.can_reset(), tui.focus == Focus::Reset)
        .render(frame, results_area);

    let footer = Paragraph::new(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)));
    frame.render_widget(footer, footer_area);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &TipCalculator, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [bill_area, tip_label_area, presets_area, custom_area, people_area, _] = Layout::vertical([
        Length(3),
        Length(1),
        Length(3),
        Length(3),
        Length(3),
        Min(0),
    ])
    .areas(area);

    let bill_prefix = format!("{} ", app.currency_symbol);
    TextField::new(&mut tui.bill, &app.bill, "Bill")
        .prefix(&bill_prefix)
        .error(app.bill_error.map(|e| e.to_string()))
        .focused(tui.focus == Focus::Bill)
        .render(frame, bill_area);

    frame.render_widget(Paragraph::new(tip_label(app)), tip_label_area);

    let focused_preset = match tui.focus {
        Focus::Preset(index) => Some(index),
        _ => None,
    };
    TipSelector::new(app.tip, focused_preset).render(frame, presets_area);

    // The custom field always mirrors the current tip, presets included
    let tip_text = app.tip_text();
    TextField::new(&mut tui.custom_tip, &tip_text, "Custom %")
        .placeholder("Custom")
        .focused(tui.focus == Focus::CustomTip)
        .render(frame, custom_area);

    TextField::new(&mut tui.people, &app.people, "Number of People")
        .prefix("# ")
        .error(app.people_error.map(|e| e.to_string()))
        .focused(tui.focus == Focus::People)
        .render(frame, people_area);
}

fn tip_label(app: &TipCalculator) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "Select Tip %",
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    )];
    if let Some(error) = app.tip_error {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            error.to_string(),
            Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{filled_calculator, test_calculator};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &TipCalculator, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_empty_form() {
        let app = test_calculator();
        let mut tui = TuiState::new();
        let text = screen(&app, &mut tui);

        assert!(text.contains("Tip Calculator"));
        assert!(text.contains("Bill"));
        assert!(text.contains("Select Tip %"));
        assert!(text.contains("Number of People"));
        assert!(text.contains("$0.00"));
        assert!(text.contains("RESET"));
        assert!(text.contains("Esc Quit"));
    }

    #[test]
    fn test_draw_filled_form_shows_amounts() {
        let app = filled_calculator();
        let mut tui = TuiState::new();
        let text = screen(&app, &mut tui);

        assert!(text.contains("$ 100"));
        assert!(text.contains("# 5"));
        assert!(text.contains("$3.00"));
        assert!(text.contains("$23.00"));
    }

    #[test]
    fn test_draw_shows_field_errors() {
        let mut app = test_calculator();
        update(&mut app, Action::BillInput("0".into()));
        update(&mut app, Action::PeopleInput("-3".into()));
        update(&mut app, Action::CustomTipInput("150".into()));
        let mut tui = TuiState::new();
        let text = screen(&app, &mut tui);

        assert!(text.contains("Can't be zero"));
        assert!(text.contains("Only positive numbers allowed"));
        assert!(text.contains("Tip percentage can't exceed 100%"));
        assert!(text.contains("-3"));
    }

    #[test]
    fn test_tip_label_without_error() {
        let app = test_calculator();
        let line = tip_label(&app);
        assert_eq!(line.spans.len(), 1);
    }
}
