pub mod app;
pub mod book_view;
pub mod hint_overlay;
pub mod page_panel;
pub mod spread_counter;
