use super::{NewTicket, TicketPatch};

/// Builder for creating [`NewTicket`] instances
#[derive(Default)]
pub struct TicketBuilder {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    issue: Option<String>,
    price: Option<u32>,
    confirmation_number: Option<u32>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requester name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the requester email
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the requester phone number
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the requester address
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the resolved issue description and its price
    #[must_use]
    pub fn issue(mut self, issue: impl Into<String>, price: u32) -> Self {
        self.issue = Some(issue.into());
        self.price = Some(price);
        self
    }

    /// Set the confirmation number
    #[must_use]
    pub const fn confirmation_number(mut self, confirmation_number: u32) -> Self {
        self.confirmation_number = Some(confirmation_number);
        self
    }

    /// Build the new-ticket record
    #[must_use]
    pub fn build(self) -> NewTicket {
        NewTicket {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            issue: self.issue.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            confirmation_number: self.confirmation_number.unwrap_or_default(),
        }
    }
}

/// Builder for [`TicketPatch`] instances
#[derive(Default)]
pub struct PatchBuilder {
    patch: TicketPatch,
}

impl PatchBuilder {
    /// Create a new patch builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the phone number
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.patch.phone = Some(phone.into());
        self
    }

    /// Update the address
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.patch.address = Some(address.into());
        self
    }

    /// Update the issue description and price together
    #[must_use]
    pub fn issue(mut self, issue: impl Into<String>, price: u32) -> Self {
        self.patch.issue = Some(issue.into());
        self.patch.price = Some(price);
        self
    }

    /// Build the patch
    #[must_use]
    pub fn build(self) -> TicketPatch {
        self.patch
    }
}
