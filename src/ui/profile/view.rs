use crate::api::{LinkedAccount, UserProfile};
use crate::host::HostUser;
use crate::ui::profile::ProfileState;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT};
use crate::ui::widgets::{fetch_placeholder, format_bonus, screen_block};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

/// Where the avatar shown on the profile comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSource {
    Profile(String),
    Host(String),
    Placeholder,
}

/// Profile avatar first, then the host user's photo, then a placeholder.
pub fn avatar_source(profile: &UserProfile, host_user: Option<&HostUser>) -> AvatarSource {
    if let Some(url) = profile.avatar_url.as_ref().filter(|url| !url.is_empty()) {
        return AvatarSource::Profile(url.clone());
    }
    match host_user.and_then(|user| user.photo_url.clone()) {
        Some(url) => AvatarSource::Host(url),
        None => AvatarSource::Placeholder,
    }
}

/// Profile name, falling back to the host user's name.
pub fn display_name(profile: &UserProfile, host_user: Option<&HostUser>) -> String {
    let name = profile.full_name.trim();
    if !name.is_empty() {
        return name.to_string();
    }
    host_user
        .and_then(HostUser::display_name)
        .unwrap_or_else(|| "No name".to_string())
}

pub fn render_profile(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ProfileState,
    host_user: Option<&HostUser>,
) {
    let block = screen_block("Profile");
    if let Some(placeholder) = fetch_placeholder(state, block.clone(), "Loading profile...") {
        frame.render_widget(placeholder, area);
        return;
    }
    let Some(profile) = state.data() else {
        return;
    };

    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![Line::from(Span::styled(
        display_name(profile, host_user),
        value.add_modifier(Modifier::BOLD),
    ))];
    if let Some(username) = &profile.username {
        lines.push(Line::from(Span::styled(format!("@{username}"), label)));
    }

    let avatar = match avatar_source(profile, host_user) {
        AvatarSource::Profile(url) | AvatarSource::Host(url) => url,
        AvatarSource::Placeholder => "(no photo)".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("Avatar: ", label),
        Span::styled(avatar, value),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Role: ", label),
        Span::styled(profile.role.label(), value),
    ]));
    lines.push(Line::from(vec![
        Span::styled("TG ID: ", label),
        Span::styled(profile.tg_id.to_string(), value),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Bonus balance: ", label),
        Span::styled(
            format_bonus(profile.bonus_balance),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Game progress: ", label),
        Span::styled(profile.game_progress.to_string(), value),
    ]));
    lines.push(Line::from(""));

    let linked = match profile.linked_account() {
        LinkedAccount::Parent(Some(id)) => format!("Linked parent: TG ID {id}"),
        LinkedAccount::Parent(None) => "No parent linked yet.".to_string(),
        LinkedAccount::Child(Some(id)) => format!("Linked child: TG ID {id}"),
        LinkedAccount::Child(None) => "No child linked yet.".to_string(),
    };
    lines.push(Line::from(Span::styled(linked, value)));

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
