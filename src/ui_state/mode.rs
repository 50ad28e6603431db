#[derive(Default, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    #[default]
    Running,
    QUIT,
}

/// Which control receives plain keystrokes
#[derive(Default, PartialEq, Eq, Copy, Clone, Debug)]
pub enum Pane {
    #[default]
    Sections,
    Repeat,
    Popup,
}
