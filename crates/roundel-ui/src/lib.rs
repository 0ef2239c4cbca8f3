//! Controls: the popup-indicator slider, decorated buttons, text views and
//! round images.

pub mod decoration;
pub mod gestures;
pub mod layout;
pub mod round_image;
pub mod rounded;
pub mod selectable;
pub mod slider;
pub mod stacked;
pub mod tests;
pub mod text;
pub mod text_view;
pub mod widget;

pub use decoration::Decoration;
pub use gestures::ControlTracker;
pub use round_image::RoundImageView;
pub use rounded::{ButtonState, RoundedCornerButton, RoundedCornerView};
pub use selectable::SelectableButton;
pub use slider::{BetterSlider, IndicatorPhase, SliderAppearance, SliderConfig, SliderRange};
pub use stacked::StackedButton;
pub use text_view::{BorderedTextView, PlaceholderTextView};
pub use widget::{Control, Widget};
