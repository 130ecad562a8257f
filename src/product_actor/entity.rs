use std::fmt;
use std::str::FromStr;

use crate::actor_framework::{Entity, IdAssignment};
use crate::domain::{Product, ProductId};

impl Entity for Product {
    type Id = ProductId;
    const KIND: &'static str = "product";

    fn id(&self) -> &ProductId { &self.id }

    fn assign_id(&mut self, id: ProductId) {
        self.id = id;
    }
}

/// Identifier assignment strategy for the product registry.
///
/// Chosen once at startup; a registry never mixes the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// The registry sets `id = count + 1` on every create.
    #[default]
    AutoAssign,
    /// The registry stores whatever `id` the caller sent, duplicates included.
    CallerSupplied,
}

impl IdPolicy {
    pub fn assignment(self) -> IdAssignment<Product> {
        match self {
            IdPolicy::AutoAssign => IdAssignment::sequential(|count| count as ProductId + 1),
            IdPolicy::CallerSupplied => IdAssignment::CallerSupplied,
        }
    }
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" | "auto-assign" | "auto_assign" => Ok(IdPolicy::AutoAssign),
            "caller" | "caller-supplied" | "caller_supplied" => Ok(IdPolicy::CallerSupplied),
            other => Err(format!("unknown id policy `{other}`")),
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::AutoAssign => f.write_str("auto-assign"),
            IdPolicy::CallerSupplied => f.write_str("caller-supplied"),
        }
    }
}
