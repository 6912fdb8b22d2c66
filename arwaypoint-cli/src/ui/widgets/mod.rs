//! Reusable UI widget components.

mod ar_view;
mod loading;
mod map_view;

pub use ar_view::ArWidget;
pub use loading::LoadingWidget;
pub use map_view::MapWidget;
