use crate::config::OperatorCredentials;

/// Login gate in front of the menu.
pub trait Authenticator: Send + Sync {
    /// A disabled gate lets the session straight through.
    fn is_enabled(&self) -> bool {
        true
    }

    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Checks against the operator from the configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredOperator {
    credentials: Option<OperatorCredentials>,
}

impl ConfiguredOperator {
    pub fn new(credentials: Option<OperatorCredentials>) -> Self {
        Self { credentials }
    }
}

impl Authenticator for ConfiguredOperator {
    fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    fn verify(&self, username: &str, password: &str) -> bool {
        match &self.credentials {
            Some(c) => c.username == username && c.password == password,
            None => true,
        }
    }
}
