/// Side effects the form asks its host to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpIntent {
    NavigateTo { path: String },
}

pub const HOME_PATH: &str = "/";

impl SignUpIntent {
    pub fn navigate_home() -> Self {
        SignUpIntent::NavigateTo {
            path: HOME_PATH.to_string(),
        }
    }
}
