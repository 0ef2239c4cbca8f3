use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use roundel_canvas::{Scene, paint_at};
use roundel_core::animation::Clock;
use roundel_core::{Color, PointerEvent, Size, Vec2};
use roundel_ui::*;

/// One of each control, wired the way a demo screen would wire them.
pub struct ShowcaseScreen {
    pub slider: BetterSlider,
    pub rounded_view: RoundedCornerView,
    pub rounded_button: RoundedCornerButton,
    pub selectable_button: SelectableButton,
    pub stacked_button: StackedButton,
    pub text_view: BorderedTextView,
    pub round_image: RoundImageView,
    toggle_requested: Rc<Cell<bool>>,
    last_value: Rc<Cell<Option<i32>>>,
}

impl ShowcaseScreen {
    pub fn new(config: SliderConfig, clock: Arc<dyn Clock>) -> Self {
        let mut slider = BetterSlider::from_config(config, clock.clone());
        let last_value = Rc::new(Cell::new(None));
        {
            let last_value = last_value.clone();
            slider.set_on_value_changed(move |v| {
                log::info!("slider value changed: {v}");
                last_value.set(Some(v));
            });
        }

        let mut rounded_button = RoundedCornerButton::new("Toggle border");
        rounded_button.layout(Size::new(160.0, 44.0));
        let toggle_requested = Rc::new(Cell::new(false));
        {
            let toggle_requested = toggle_requested.clone();
            rounded_button.set_on_click(move || toggle_requested.set(true));
        }

        let mut selectable_button = SelectableButton::new("Select me");
        selectable_button.layout(Size::new(120.0, 44.0));

        let mut stacked_button = StackedButton::new("Stacked");
        stacked_button.set_image(Some(("star", Size::new(24.0, 24.0))));
        stacked_button.layout(Size::new(100.0, 80.0));

        let mut text_view = BorderedTextView::with_clock(Size::new(300.0, 120.0), clock);
        text_view
            .text_view_mut()
            .set_placeholder_text("Type something...");

        let mut round_image = RoundImageView::new();
        round_image.set_image(Some(("avatar", Size::new(300.0, 200.0))));

        Self {
            slider,
            rounded_view: RoundedCornerView::new(Size::new(300.0, 60.0)),
            rounded_button,
            selectable_button,
            stacked_button,
            text_view,
            round_image,
            toggle_requested,
            last_value,
        }
    }

    /// Red goes to blue; anything else goes to red.
    pub fn toggle_text_view_border_color(&mut self) {
        let next = if self.text_view.border_color() == Color::RED {
            Color::BLUE
        } else {
            Color::RED
        };
        self.text_view.set_border_color(next);
    }

    /// Taps the rounded button, which toggles the text view's border.
    pub fn tap_rounded_button(&mut self) {
        let center = Vec2::new(80.0, 22.0);
        self.rounded_button
            .handle_pointer(&PointerEvent::touch_down(center));
        self.rounded_button.handle_pointer(&PointerEvent::touch_up(center));
        if self.toggle_requested.replace(false) {
            self.toggle_text_view_border_color();
        }
    }

    pub fn last_slider_value(&self) -> Option<i32> {
        self.last_value.get()
    }

    pub fn tick(&mut self) {
        self.slider.tick();
        self.text_view.tick();
    }

    /// Every control's display list at its place on the screen, top to
    /// bottom.
    pub fn paint(&self) -> Vec<(&'static str, Scene)> {
        let mut y = 0.0;
        let mut place = |name: &'static str, widget: &dyn Widget| {
            let scene = paint_at(widget.layers(), Vec2::new(16.0, y));
            y += widget.layers().root_layer().frame.h + 16.0;
            (name, scene)
        };
        vec![
            place("slider", &self.slider),
            place("rounded view", &self.rounded_view),
            place("rounded button", &self.rounded_button),
            place("selectable button", &self.selectable_button),
            place("stacked button", &self.stacked_button),
            place("text view", &self.text_view),
            place("round image", &self.round_image),
        ]
    }
}

#[cfg(test)]
mod tests {
    use roundel_core::animation::TestClock;
    use web_time::Duration;

    use super::*;

    fn screen() -> (ShowcaseScreen, TestClock) {
        let clock = TestClock::new();
        (
            ShowcaseScreen::new(SliderConfig::default(), Arc::new(clock.clone())),
            clock,
        )
    }

    #[test]
    fn border_toggles_between_red_and_blue() {
        let (mut s, clock) = screen();
        assert_eq!(s.text_view.border_color(), Color::LIGHT_GRAY);
        s.toggle_text_view_border_color();
        assert_eq!(s.text_view.border_color(), Color::RED);
        s.toggle_text_view_border_color();
        assert_eq!(s.text_view.border_color(), Color::BLUE);
        s.toggle_text_view_border_color();
        assert_eq!(s.text_view.border_color(), Color::RED);

        clock.advance(Duration::from_millis(300));
        s.tick();
        assert_eq!(s.text_view.layers().root_layer().border_color, Color::RED);
    }

    #[test]
    fn tapping_the_button_toggles_the_border() {
        let (mut s, _) = screen();
        s.tap_rounded_button();
        assert_eq!(s.text_view.border_color(), Color::RED);
        s.tap_rounded_button();
        assert_eq!(s.text_view.border_color(), Color::BLUE);
    }

    #[test]
    fn every_control_paints() {
        let (s, _) = screen();
        let scenes = s.paint();
        assert_eq!(scenes.len(), 7);
        assert!(scenes.iter().all(|(_, scene)| !scene.is_empty()));
    }
}
