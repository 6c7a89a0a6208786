/// Semantic meaning a spreadsheet column may fulfill. The pipeline only ever
/// cares about these five; everything else is carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Date,
    Amount,
    Type,
    Bank,
    Message,
}

impl Role {
    pub(crate) fn all() -> &'static [Role] {
        &[
            Self::Date,
            Self::Amount,
            Self::Type,
            Self::Bank,
            Self::Message,
        ]
    }

    /// Ordered, exact, case-insensitive header synonyms. First match wins.
    fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Date => &["datetime", "date"],
            Self::Amount => &["amount", "amt"],
            Self::Type => &["type"],
            Self::Bank => &["bank"],
            Self::Message => &["message", "msg"],
        }
    }
}

/// Which column index (into the header row) fills each role, built once per
/// worksheet schema. Unresolved roles stay `None` and downstream stages fall
/// back to inference or skip the feature entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RoleMap {
    pub(crate) date: Option<usize>,
    pub(crate) amount: Option<usize>,
    pub(crate) kind: Option<usize>,
    pub(crate) bank: Option<usize>,
    pub(crate) message: Option<usize>,
}

impl RoleMap {
    pub(crate) fn get(&self, role: Role) -> Option<usize> {
        match role {
            Role::Date => self.date,
            Role::Amount => self.amount,
            Role::Type => self.kind,
            Role::Bank => self.bank,
            Role::Message => self.message,
        }
    }
}

/// Map raw headers to roles. Total: never errors, any headers (including
/// none) produce a RoleMap, and every resolved index is in range.
pub(crate) fn resolve_roles(headers: &[String]) -> RoleMap {
    let lowered: Vec<String> = headers
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    RoleMap {
        date: find_column(&lowered, Role::Date),
        amount: find_column(&lowered, Role::Amount),
        kind: find_column(&lowered, Role::Type),
        bank: find_column(&lowered, Role::Bank),
        message: find_column(&lowered, Role::Message),
    }
}

fn find_column(lowered: &[String], role: Role) -> Option<usize> {
    role.synonyms()
        .iter()
        .find_map(|syn| lowered.iter().position(|h| h == syn))
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
