/// High-level form events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The value of a control changed while the user is editing it
    Input { target: String },
    /// The value of a control was committed (select picked, date chosen)
    Change { target: String },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
    /// A form was submitted
    Submit { target: String },
}

impl Event {
    pub fn input(target: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
        }
    }

    pub fn change(target: impl Into<String>) -> Self {
        Self::Change {
            target: target.into(),
        }
    }

    pub fn focus(target: impl Into<String>) -> Self {
        Self::Focus {
            target: target.into(),
        }
    }

    pub fn blur(target: impl Into<String>) -> Self {
        Self::Blur {
            target: target.into(),
        }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Self::Submit {
            target: target.into(),
        }
    }
}
