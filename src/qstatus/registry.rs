//! The ordered table mapping statuses to persisted tokens and labels.

use thiserror::Error;

use super::Qualification;
use crate::i18n::{EnglishTranslator, Translator};
use crate::version::FormatVersion;

/// One row of the registry: status, persisted token, label key.
///
/// Only `Unknown` has no token; it is persisted by omitting the
/// attribute entirely. It also carries no label key and displays as an
/// empty string.
#[derive(Debug, Clone, Copy)]
struct Row {
    q: Qualification,
    token: Option<&'static str>,
    label_key: Option<&'static str>,
}

const fn row(
    q: Qualification,
    token: Option<&'static str>,
    label_key: Option<&'static str>,
) -> Row {
    Row { q, token, label_key }
}

/// Token set without FEO. "NA" is last.
const CLASSIC_ROWS: &[Row] = &[
    row(Qualification::Unknown, None, None),
    row(Qualification::SuperQ, Some("SQ"), Some("qtype.sq")),
    row(Qualification::Qualified, Some("Q"), Some("qtype.q")),
    row(Qualification::NotQualified, Some("NQ"), Some("qtype.nq")),
    row(Qualification::Eliminated, Some("E"), Some("qtype.e")),
    row(Qualification::DidNotRun, Some("DNR"), Some("qtype.dnr")),
    row(Qualification::NotApplicable, Some("NA"), Some("qtype.na")),
];

/// Token set with "FEO" between Eliminated and Did Not Run.
const FEO_ROWS: &[Row] = &[
    row(Qualification::Unknown, None, None),
    row(Qualification::SuperQ, Some("SQ"), Some("qtype.sq")),
    row(Qualification::Qualified, Some("Q"), Some("qtype.q")),
    row(Qualification::NotQualified, Some("NQ"), Some("qtype.nq")),
    row(Qualification::Eliminated, Some("E"), Some("qtype.e")),
    row(Qualification::Feo, Some("FEO"), Some("qtype.feo")),
    row(Qualification::DidNotRun, Some("DNR"), Some("qtype.dnr")),
    row(Qualification::NotApplicable, Some("NA"), Some("qtype.na")),
];

/// Which token set the registry writes.
///
/// Both sets are always accepted when parsing; the schema only controls
/// what [`Registry::token`] produces and which rows the indexed and
/// label operations see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenSchema {
    /// Seven-row set without FEO.
    #[default]
    Classic,
    /// Eight-row set including the "FEO" token.
    Feo,
}

impl TokenSchema {
    fn rows(self) -> &'static [Row] {
        match self {
            Self::Classic => CLASSIC_ROWS,
            Self::Feo => FEO_ROWS,
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Classic => Self::Feo,
            Self::Feo => Self::Classic,
        }
    }
}

/// A persisted token that matches no known token set.
///
/// This is a recoverable condition: callers continue loading with
/// [`Qualification::Unknown`] and may surface the message as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized qualification '{token}' (file format {version})")]
pub struct UnrecognizedToken {
    /// The token as it appeared in the file.
    pub token: String,
    /// Format version of the file being read.
    pub version: FormatVersion,
}

/// The single source of truth mapping persisted tokens, statuses and
/// localized labels.
///
/// The row tables are immutable static data; every operation is a pure
/// read, so a registry can be shared freely across threads. The
/// translation provider is injected at construction so display text is
/// never resolved through hidden global state.
pub struct Registry {
    schema: TokenSchema,
    translator: Box<dyn Translator>,
}

impl Registry {
    /// Registry writing the default (classic) schema.
    pub fn new(translator: Box<dyn Translator>) -> Self {
        Self::with_schema(TokenSchema::default(), translator)
    }

    /// Registry writing the given schema.
    pub fn with_schema(schema: TokenSchema, translator: Box<dyn Translator>) -> Self {
        Self { schema, translator }
    }

    /// Registry with built-in English labels and the default schema.
    pub fn english() -> Self {
        Self::new(Box::new(EnglishTranslator))
    }

    /// The active write schema.
    pub fn schema(&self) -> TokenSchema {
        self.schema
    }

    /// Number of rows in the registry.
    ///
    /// Use with [`variant_at`](Self::variant_at) for bounds-checked
    /// indexed access from selection controls.
    pub fn num_variants(&self) -> usize {
        self.schema.rows().len()
    }

    /// Status at the given ordinal.
    ///
    /// Out-of-range indices (including negative ones) silently degrade
    /// to `Unknown`; no error is raised.
    pub fn variant_at(&self, index: isize) -> Qualification {
        let rows = self.schema.rows();
        if index < 0 {
            return Qualification::Unknown;
        }
        rows.get(index as usize)
            .map(|row| row.q)
            .unwrap_or_default()
    }

    /// Localized label for a status.
    ///
    /// `Unknown` carries no label key and yields the empty string, as
    /// does any key the translator has no text for.
    pub fn label(&self, q: Qualification) -> String {
        self.schema
            .rows()
            .iter()
            .find(|row| row.q == q)
            .and_then(|row| row.label_key)
            .and_then(|key| self.translator.translate(key))
            .unwrap_or_default()
    }

    /// Localized labels of every labelled row, in registry order.
    ///
    /// `Unknown` has no label and is excluded, so the result is one
    /// shorter than [`num_variants`](Self::num_variants).
    pub fn labels(&self) -> Vec<String> {
        self.schema
            .rows()
            .iter()
            .filter(|row| row.label_key.is_some())
            .map(|row| self.label(row.q))
            .collect()
    }

    /// Ordered `(status, label)` pairs for populating a selector.
    ///
    /// The caller owns the selection index; mapping it back to a status
    /// does not require knowing the token strings.
    pub fn choices(&self) -> Vec<(Qualification, String)> {
        self.schema
            .rows()
            .iter()
            .filter(|row| row.label_key.is_some())
            .map(|row| (row.q, self.label(row.q)))
            .collect()
    }

    /// Parse a persisted token.
    ///
    /// First exact, case-sensitive match over the active schema's rows
    /// wins; tokens from the other known schema are also accepted so
    /// files written under either revision load. An unrecognized token
    /// is an `Err`, and callers are expected to continue with
    /// `Unknown` (`parse(..).unwrap_or_default()`), optionally routing
    /// the message to a warning. The format version does not currently
    /// alter matching; it is carried for diagnostics and forward
    /// compatibility.
    pub fn parse(
        &self,
        token: &str,
        version: FormatVersion,
    ) -> Result<Qualification, UnrecognizedToken> {
        let match_in = |rows: &'static [Row]| {
            rows.iter()
                .find(|row| row.token == Some(token))
                .map(|row| row.q)
        };

        if let Some(q) = match_in(self.schema.rows()).or_else(|| match_in(self.schema.other().rows()))
        {
            return Ok(q);
        }

        tracing::warn!("Unrecognized qualification token '{}'", token);
        Err(UnrecognizedToken {
            token: token.to_string(),
            version,
        })
    }

    /// Persisted token for a status under the active write schema.
    ///
    /// `None` for `Unknown` and for statuses the active schema cannot
    /// express; callers must then omit the attribute entirely rather
    /// than writing an empty value, keeping the "absent attribute means
    /// Unknown" convention stable.
    pub fn token(&self, q: Qualification) -> Option<&'static str> {
        self.schema
            .rows()
            .iter()
            .find(|row| row.q == q)
            .and_then(|row| row.token)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::english()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}
