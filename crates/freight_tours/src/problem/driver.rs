/// Capability marker handed to the processors alongside the vehicle. It has
/// no behaviour of its own yet; driver specific rules hang off this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Driver {
    external_id: Option<String>,
}

impl Driver {
    pub fn new(external_id: impl Into<String>) -> Self {
        Driver {
            external_id: Some(external_id.into()),
        }
    }

    pub fn external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }
}
