//! Call-site matching: decides whether a call is a translation call and
//! decodes its arguments into an [`ExtractionRecord`].
//!
//! Matching is lenient by design of the catalog format: translation calls are
//! expected to use literal strings, so a call whose required arguments are not
//! literals is skipped rather than reported as an error. The only fatal
//! condition is a domain literal that cannot be decoded.

use std::fmt;

use anyhow::{Context, Result, bail};

use crate::core::literal::unquote;
use crate::core::signature::{CallSignature, DomainSource, lookup};
use crate::core::source::{Argument, CallSite, Callee, DeclKind, SourceLocation};


/// A translation call decoded into catalog fields.
///
/// Literal fields hold source tokens verbatim, quotes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRecord {
    pub domain: String,
    pub msgid: String,
    pub msgid_plural: Option<String>,
    pub context: Option<String>,
    pub location: SourceLocation,
    pub call_label: String,
}

/// Why a call with a recognized method name produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooFewArguments { expected: usize, found: usize },
    NonLiteralArgument { position: usize },
    InvalidCount { position: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewArguments { expected, found } => {
                write!(f, "expected at least {} arguments, found {}", expected, found)
            }
            SkipReason::NonLiteralArgument { position } => {
                write!(f, "argument {} is not a string literal", position + 1)
            }
            SkipReason::InvalidCount { position } => write!(
                f,
                "argument {} is not an integer literal, variable or constant",
                position + 1
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCall {
    pub location: SourceLocation,
    pub call_label: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Not a translation call at all.
    Ignored,
    /// Translation method name, but the arguments do not qualify.
    Skipped(SkippedCall),
    Extracted(ExtractionRecord),
}

/// Classify a call site against the signature table.
///
/// `current_domain` is used by variants that do not carry a domain argument.
/// Returns `Err` only when a domain literal fails to decode to a usable name.
pub fn match_call_site(call: &CallSite, current_domain: &str) -> Result<MatchOutcome> {
    let Callee::Selector { method, .. } = &call.callee else {
        return Ok(MatchOutcome::Ignored);
    };
    let Some(signature) = lookup(method) else {
        return Ok(MatchOutcome::Ignored);
    };
    let call_label = call.label().unwrap_or_default();

    if let Err(reason) = check_arguments(signature, &call.arguments) {
        return Ok(MatchOutcome::Skipped(SkippedCall {
            location: call.location.clone(),
            call_label,
            reason,
        }));
    }

    let domain = match signature.domain {
        DomainSource::Current => current_domain.to_string(),
        DomainSource::Argument(pos) => decode_domain(literal_at(&call.arguments, pos))
            .with_context(|| format!("invalid domain in {} at {}", call_label, call.location))?,
    };

    Ok(MatchOutcome::Extracted(ExtractionRecord {
        domain,
        msgid: literal_at(&call.arguments, signature.msgid).to_string(),
        msgid_plural: signature
            .plural
            .map(|pos| literal_at(&call.arguments, pos).to_string()),
        context: signature
            .context
            .map(|pos| literal_at(&call.arguments, pos).to_string()),
        location: call.location.clone(),
        call_label,
    }))
}

fn check_arguments(signature: &CallSignature, arguments: &[Argument]) -> Result<(), SkipReason> {
    if arguments.len() < signature.min_args {
        return Err(SkipReason::TooFewArguments {
            expected: signature.min_args,
            found: arguments.len(),
        });
    }

    if let Some(position) = signature
        .string_positions()
        .into_iter()
        .find(|&pos| arguments[pos].as_str_literal().is_none())
    {
        return Err(SkipReason::NonLiteralArgument { position });
    }

    if let Some(position) = signature.count
        && !is_count_argument(&arguments[position])
    {
        return Err(SkipReason::InvalidCount { position });
    }

    Ok(())
}

fn is_count_argument(argument: &Argument) -> bool {
    match argument {
        Argument::Int(_) => true,
        Argument::Ident { decl, .. } => matches!(decl, Some(DeclKind::Var | DeclKind::Const)),
        Argument::Str(_) | Argument::Other => false,
    }
}

/// Raw token at a position already checked by `check_arguments`.
fn literal_at(arguments: &[Argument], pos: usize) -> &str {
    arguments[pos].as_str_literal().unwrap_or_default()
}

/// Unquote a domain literal and make sure it can name a catalog file.
pub fn decode_domain(token: &str) -> Result<String> {
    let domain = unquote(token)?;
    validate_domain(&domain)?;
    Ok(domain)
}

/// A domain becomes `<domain>.po` inside the output directory.
pub fn validate_domain(domain: &str) -> Result<()> {
    if domain.is_empty() {
        bail!("domain name is empty");
    }
    if domain == "." || domain == ".." || domain.contains(['/', '\\', '\0']) {
        bail!("domain name {:?} cannot be used as a file name", domain);
    }
    Ok(())
}
