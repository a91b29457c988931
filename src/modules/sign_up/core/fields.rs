use crate::modules::sign_up::core::submission::SubmissionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Username, Field::Email, Field::Password];

    /// Label the input is rendered under.
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "user name",
            Field::Email => "email address",
            Field::Password => "password",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub submission: SubmissionState,
}

impl FormState {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_in_flight()
    }

    /// Empties the three inputs. The submission state is left alone.
    pub fn clear_fields(&mut self) {
        self.username.clear();
        self.email.clear();
        self.password.clear();
    }
}
