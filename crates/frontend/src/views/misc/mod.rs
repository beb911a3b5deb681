mod view;

pub use view::{is_current_view, MiscInfoView, MISC_VIEWS};
