//! Terminal front end: Elm-style event loop, layout, theme, step views and widgets.

pub mod app;
pub mod events;
pub mod layout;
pub mod theme;
pub mod views;
pub mod widgets;
