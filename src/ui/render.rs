use crate::ui::app::{App, Tab};
use crate::ui::cart::render_cart;
use crate::ui::footer::Footer;
use crate::ui::game::render_game;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::news::render_news;
use crate::ui::profile::render_profile;
use crate::ui::referrals::render_referrals;
use crate::ui::shop::render_shop;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    match app.active_tab() {
        Tab::News => render_news(frame, body, app.news()),
        Tab::Profile => render_profile(frame, body, app.profile(), app.host_user()),
        Tab::Game => render_game(frame, body, app.game()),
        Tab::Referrals => render_referrals(frame, body, app.referrals()),
        Tab::Shop => render_shop(frame, body, app.shop(), app.cart()),
        Tab::Cart => render_cart(frame, body, app.cart_screen(), app.cart()),
    }
    frame.render_widget(Footer::new().widget(app, footer), footer);
}
