mod landing;
mod library;
mod quiz;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::Screen;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Landing => landing::render(frame, area, app),
        Screen::Quiz => quiz::render(frame, area, app),
        Screen::Library => library::render(frame, area, app),
    }
}
