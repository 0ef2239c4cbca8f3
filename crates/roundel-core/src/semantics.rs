/// What kind of control a node is, for assistive technology.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Button,
    TextField,
    Image,
    Container,
    Slider,
}

/// Accessibility description of one control.
#[derive(Clone, Debug, PartialEq)]
pub struct Semantics {
    pub role: Role,
    /// Name announced for the control, e.g. a button's title.
    pub label: Option<String>,
    /// Current value as announced (slider position, text content).
    pub value: Option<String>,
    /// Toggle state for selectable controls.
    pub selected: Option<bool>,
    /// Set while a text control is taking keyboard input.
    pub focused: bool,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            value: None,
            selected: None,
            focused: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }
}
