//! UI module for rendering the TUI

mod about;
mod forms;
mod home;
mod layout;
mod projects;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, main_area) = layout::create_layout(area);

    // Sidebar nav with the active page highlighted
    layout::draw_sidebar(frame, sidebar_area, app);

    // Main content for the current page
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::About => about::draw(frame, main_area, app),
        View::Projects => projects::draw(frame, main_area, app),
        View::Contact => forms::draw_contact(frame, main_area, app),
        View::Survey => forms::draw_survey(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);
}
