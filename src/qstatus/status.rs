//! The qualification outcome of a single run.

/// Qualifying status of a run.
///
/// In the persisted format this is only ever an attribute value, never
/// an element. A freshly constructed status is [`Unknown`]; values are
/// populated by parsing a persisted token through
/// [`Registry::parse`](super::Registry::parse) or by indexed selection
/// through [`Registry::variant_at`](super::Registry::variant_at).
///
/// Variant order is the canonical list order shown to users, so the
/// derived `Ord` sorts statuses the way the run list does.
///
/// [`Unknown`]: Qualification::Unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Qualification {
    /// No result recorded.
    #[default]
    Unknown,
    /// Super Qualifier (USDAA Snooker top 15%).
    SuperQ,
    /// Qualified.
    Qualified,
    /// Not qualified.
    NotQualified,
    /// Eliminated.
    Eliminated,
    /// For Exhibition Only. Only persisted by the FEO token schema.
    Feo,
    /// Did not run.
    DidNotRun,
    /// Cannot qualify in this run.
    NotApplicable,
}

impl Qualification {
    /// Whether this status earned a qualifying score.
    pub fn is_qualified(self) -> bool {
        matches!(self, Self::SuperQ | Self::Qualified)
    }

    /// Whether this is the default, no-result status.
    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unknown() {
        assert_eq!(Qualification::default(), Qualification::Unknown);
        assert!(Qualification::default().is_unknown());
    }

    #[test]
    fn only_q_and_super_q_are_qualifying() {
        assert!(Qualification::SuperQ.is_qualified());
        assert!(Qualification::Qualified.is_qualified());
        assert!(!Qualification::NotQualified.is_qualified());
        assert!(!Qualification::Eliminated.is_qualified());
        assert!(!Qualification::Feo.is_qualified());
        assert!(!Qualification::DidNotRun.is_qualified());
        assert!(!Qualification::NotApplicable.is_qualified());
        assert!(!Qualification::Unknown.is_qualified());
    }

    #[test]
    fn sorts_in_list_order() {
        let mut statuses = vec![
            Qualification::NotApplicable,
            Qualification::Qualified,
            Qualification::Unknown,
            Qualification::SuperQ,
        ];
        statuses.sort();
        assert_eq!(
            statuses,
            vec![
                Qualification::Unknown,
                Qualification::SuperQ,
                Qualification::Qualified,
                Qualification::NotApplicable,
            ]
        );
    }
}
