//! The translation call shapes recognized by the extractor.
//!
//! Each entry describes which argument plays which role. Positions are 0-based
//! and count every argument, including a leading domain literal.

/// Where the catalog domain of an extracted message comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainSource {
    /// The current domain of the extraction context.
    Current,
    /// The unquoted string literal at this argument position.
    Argument(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSignature {
    pub method: &'static str,
    pub min_args: usize,
    pub domain: DomainSource,
    pub msgid: usize,
    pub plural: Option<usize>,
    /// Position of the plural count, which must be an integer literal or a
    /// variable/constant identifier.
    pub count: Option<usize>,
    pub context: Option<usize>,
}

impl CallSignature {
    /// Positions that must hold string literals, in ascending order.
    pub fn string_positions(&self) -> Vec<usize> {
        let domain = match self.domain {
            DomainSource::Argument(pos) => Some(pos),
            DomainSource::Current => None,
        };
        let mut positions: Vec<usize> = domain
            .into_iter()
            .chain(Some(self.msgid))
            .chain(self.plural)
            .chain(self.context)
            .collect();
        positions.sort_unstable();
        positions
    }

    pub fn is_plural(&self) -> bool {
        self.plural.is_some()
    }
}

pub const SIGNATURES: [CallSignature; 8] = [
    CallSignature {
        method: "Get",
        min_args: 1,
        domain: DomainSource::Current,
        msgid: 0,
        plural: None,
        count: None,
        context: None,
    },
    CallSignature {
        method: "GetN",
        min_args: 3,
        domain: DomainSource::Current,
        msgid: 0,
        plural: Some(1),
        count: Some(2),
        context: None,
    },
    CallSignature {
        method: "GetD",
        min_args: 2,
        domain: DomainSource::Argument(0),
        msgid: 1,
        plural: None,
        count: None,
        context: None,
    },
    // The count of GetND is not constrained.
    CallSignature {
        method: "GetND",
        min_args: 3,
        domain: DomainSource::Argument(0),
        msgid: 1,
        plural: Some(2),
        count: None,
        context: None,
    },
    CallSignature {
        method: "GetC",
        min_args: 2,
        domain: DomainSource::Current,
        msgid: 0,
        plural: None,
        count: None,
        context: Some(1),
    },
    CallSignature {
        method: "GetNC",
        min_args: 4,
        domain: DomainSource::Current,
        msgid: 0,
        plural: Some(1),
        count: Some(2),
        context: Some(3),
    },
    CallSignature {
        method: "GetDC",
        min_args: 3,
        domain: DomainSource::Argument(0),
        msgid: 1,
        plural: None,
        count: None,
        context: Some(2),
    },
    CallSignature {
        method: "GetNDC",
        min_args: 5,
        domain: DomainSource::Argument(0),
        msgid: 1,
        plural: Some(2),
        count: Some(3),
        context: Some(4),
    },
];

/// Look up the signature triggered by an exact method name.
pub fn lookup(method: &str) -> Option<&'static CallSignature> {
    SIGNATURES.iter().find(|sig| sig.method == method)
}
