/// The kind of element, mirroring the handful of HTML tags a form needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Form,
    Label,
    Input(InputType),
    Select,
    Option,
    Button,
}

/// The `type` attribute of an input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputType {
    #[default]
    Text,
    Date,
    Tel,
    Email,
}

impl Tag {
    /// Controls whose native widget already constrains the value format.
    pub fn is_constrained(&self) -> bool {
        matches!(self, Self::Select | Self::Input(InputType::Date))
    }
}
