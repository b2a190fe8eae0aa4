#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("missing style variable `{0}`")]
    MissingVar(&'static str),
    #[error("invalid length `{0}`")]
    Length(String),
    #[error("invalid color `{0}`")]
    Color(String),
    #[error("`{value}` is not a {field} option")]
    UnknownOption { field: &'static str, value: String },
}
