#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// Editable single-line value.
    TextInput {
        value: String,
        placeholder: Option<String>,
        focused: bool,
    },
    Children(Vec<super::Element>),
}
