use super::{PAUSE_ICON, PLAY_ICON};
use crate::{
    session::ControllerState,
    ui_state::{DARK_WHITE, GOLD, GOOD_GREEN, GOOD_RED, MID_GRAY, Pane, UiState},
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, StatefulWidget, Widget},
};

const REPEAT_FIELD_WIDTH: u16 = 10;

pub struct Controls;
impl StatefulWidget for Controls {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(MID_GRAY)
            .title_top(Line::from(" Recite ").centered().fg(GOLD))
            .title_bottom(Line::from(key_hints(state.get_pane())).centered().fg(MID_GRAY))
            .padding(Padding::new(2, 2, 1, 0));

        let inner = block.inner(area);
        block.render(area, buf);

        let [elapsed, state_line, _, repeat, shutdown] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        Line::from(state.snapshot.elapsed.as_str())
            .bold()
            .fg(DARK_WHITE)
            .render(elapsed, buf);

        state_display(state).render(state_line, buf);
        render_repeat_field(repeat, buf, state);

        let check = match state.shutdown {
            true => "[x]",
            false => "[ ]",
        };
        Line::from(format!("{check} Shutdown after finish"))
            .fg(DARK_WHITE)
            .render(shutdown, buf);
    }
}

/// Bare letters go to the repeat field while it has focus
fn key_hints(pane: Pane) -> &'static str {
    match pane {
        Pane::Repeat => " [^space] play/pause  [^s]top  [tab] sections  [esc] back ",
        _ => " [space] play/pause  [s]top  [h]istory  [x] shutdown  [q]uit ",
    }
}

fn state_display(state: &UiState) -> Line<'static> {
    let repeat = match state.snapshot.repeat {
        Some((k, n)) => format!("  {k}/{n}"),
        None => String::new(),
    };

    let (icon, label, color) = match state.snapshot.state {
        ControllerState::Idle => (" ", "Idle", MID_GRAY),
        ControllerState::Playing => (PLAY_ICON, "Playing", GOOD_GREEN),
        ControllerState::Paused => (PAUSE_ICON, "Paused", GOLD),
        ControllerState::Stopping => (" ", "Stopping", GOOD_RED),
        ControllerState::Ended => (" ", "Finished", GOOD_GREEN),
    };

    Line::from_iter([
        Span::from(format!("{icon} {label}")).fg(color),
        Span::from(repeat).fg(MID_GRAY),
    ])
}

fn render_repeat_field(area: Rect, buf: &mut ratatui::prelude::Buffer, state: &mut UiState) {
    let [label, field] = Layout::horizontal([
        Constraint::Length(8),
        Constraint::Length(REPEAT_FIELD_WIDTH),
    ])
    .areas(area);

    Paragraph::new("\nRepeat:").fg(DARK_WHITE).render(label, buf);

    let border = match (state.get_pane() == Pane::Repeat, state.is_locked()) {
        (_, true) => MID_GRAY,
        (true, false) => GOLD,
        (false, false) => DARK_WHITE,
    };

    state
        .repeat_input
        .set_block(Block::bordered().border_type(BorderType::Rounded).fg(border));
    Widget::render(&state.repeat_input, field, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        key_handler::{Action, handle_key_event},
    };
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn hints_match_the_keys_the_focused_pane_accepts() {
        let mut state = UiState::new(&AppConfig::default());
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        let bare = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);

        state.set_pane(Pane::Repeat);
        assert!(key_hints(state.get_pane()).contains("[^space]"));
        assert_eq!(handle_key_event(ctrl(' '), &state), Some(Action::TogglePlay));
        assert_eq!(handle_key_event(ctrl('s'), &state), Some(Action::Stop));
        assert_eq!(handle_key_event(bare('s'), &state), None);

        state.set_pane(Pane::Sections);
        assert!(key_hints(state.get_pane()).contains("[space]"));
        assert_eq!(handle_key_event(bare(' '), &state), Some(Action::TogglePlay));
        assert_eq!(handle_key_event(bare('s'), &state), Some(Action::Stop));
    }
}
