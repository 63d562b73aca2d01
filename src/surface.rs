use crate::error::WidgetError;
use crate::random::UniformIndex;
use crate::widget::RosterWidget;

/// The passive surfaces a host exposes to the widget.
pub trait Surface {
    /// Current text of the name input field.
    fn input_value(&self) -> &str;

    fn set_input_value(&mut self, value : &str);

    fn clear_input(&mut self);

    fn set_error_visible(&mut self, visible : bool);

    /// Replaces the whole visible list with `items`.
    fn replace_list(&mut self, items : &[String]);

    /// Sets the result display text and makes it visible.
    fn show_result(&mut self, message : &str);

    /// Blocking notification. Returns once the user has been told.
    fn alert(&mut self, message : &str);
}

/// Connects the add and draw triggers of a surface to a widget.
#[derive(Debug)]
pub struct Host<S, R> {
    pub surface : S,
    pub widget : RosterWidget<R>,
}

impl<S : Surface, R : UniformIndex> Host<S, R> {
    pub fn new(surface : S, widget : RosterWidget<R>) -> Self {
        Host { surface, widget }
    }

    /// Submits the input field's current value. The field is only cleared when the name was
    /// accepted.
    pub fn on_add(&mut self) -> Result<(), WidgetError> {
        let raw = self.surface.input_value().to_string();

        match self.widget.add_name(&raw) {
            Ok(_) => {
                self.surface.set_error_visible(false);
                self.surface.clear_input();
                self.render();
                Ok(())
            },
            Err(error) => {
                self.surface.set_error_visible(true);
                Err(error)
            },
        }
    }

    pub fn on_draw(&mut self) -> Result<(), WidgetError> {
        match self.widget.draw_name() {
            Ok(draw) => {
                self.surface.show_result(&draw.message);
                Ok(())
            },
            Err(error) => {
                self.surface.alert(&error.to_string());
                Err(error)
            },
        }
    }

    pub fn render(&mut self) {
        self.surface.replace_list(self.widget.render());
    }
}

#[cfg(test)]
pub mod recording {
    use super::Surface;

    /// In-memory surface that records everything written to it.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub input : String,
        pub error_visible : bool,
        pub list : Vec<String>,
        pub renders : usize,
        pub result : Option<String>,
        pub alerts : Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn input_value(&self) -> &str {
            &self.input
        }

        fn set_input_value(&mut self, value : &str) {
            self.input = value.to_string();
        }

        fn clear_input(&mut self) {
            self.input.clear();
        }

        fn set_error_visible(&mut self, visible : bool) {
            self.error_visible = visible;
        }

        fn replace_list(&mut self, items : &[String]) {
            self.list = items.to_vec();
            self.renders += 1;
        }

        fn show_result(&mut self, message : &str) {
            self.result = Some(message.to_string());
        }

        fn alert(&mut self, message : &str) {
            self.alerts.push(message.to_string());
        }
    }
}
