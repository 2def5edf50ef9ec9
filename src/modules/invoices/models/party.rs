use serde::Serialize;

/// Seller or buyer block printed at the top of the invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Party {
    /// Always non-empty once validated
    pub name: String,

    /// Free-form, possibly multi-line postal address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Contact email, syntactically checked when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Party {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            email: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
