mod badge;
mod button;
mod input;
mod progress;
mod select;

pub use badge::StatusBadge;
pub use button::Button;
pub use input::TextInput;
pub use progress::ProgressBar;
pub use select::Select;
