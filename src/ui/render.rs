use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::render_form;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::toast::render_toasts;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.endpoint()).widget(), header);
    frame.render_widget(Clear, body);
    render_form(frame, body, app.form());
    frame.render_widget(Footer::widget(footer), footer);

    render_toasts(frame, body, &app.toasts());
}
