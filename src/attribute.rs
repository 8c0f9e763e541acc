//! Attribute model: which fields a record has, which are required, and the
//! defaults for the rest.

/// Whether an attribute must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional { default: i64 },
}

/// One named attribute of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub requirement: Requirement,
}

impl Attribute {
    pub const fn required(name: &'static str) -> Self {
        Attribute {
            name,
            requirement: Requirement::Required,
        }
    }

    pub const fn optional(name: &'static str, default: i64) -> Self {
        Attribute {
            name,
            requirement: Requirement::Optional { default },
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self.requirement, Requirement::Required)
    }

    /// The documented default, `None` for required attributes.
    pub fn default_value(&self) -> Option<i64> {
        match self.requirement {
            Requirement::Required => None,
            Requirement::Optional { default } => Some(default),
        }
    }
}

/// A record type that publishes its attribute model in declaration order.
pub trait AttributeSet {
    const ATTRIBUTES: &'static [Attribute];

    fn attribute(name: &str) -> Option<&'static Attribute> {
        Self::ATTRIBUTES.iter().find(|attr| attr.name == name)
    }

    fn required() -> impl Iterator<Item = &'static Attribute> {
        Self::ATTRIBUTES.iter().filter(|attr| attr.is_required())
    }

    fn optional() -> impl Iterator<Item = &'static Attribute> {
        Self::ATTRIBUTES.iter().filter(|attr| !attr.is_required())
    }
}
