use regex::Regex;
use rust_decimal::Decimal;

use crate::models::Kind;

/// Debit/credit inference over noisy categorization fields. The keyword
/// vocabulary is data so it can be tuned; the precedence order is fixed:
///
/// 1. explicit type value equal to "debit"/"credit"
/// 2. type value containing "deb"/"cred"
/// 3. (only when no type column exists) message keywords
/// 4. sign of the amount
/// 5. unknown
pub(crate) struct Classifier {
    debit_keywords: Vec<String>,
    credit_keywords: Vec<String>,
    merchant_pattern: Option<Regex>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(
            &["deb", "withdraw", "paid"],
            &["cred", "credited"],
        )
    }
}

impl Classifier {
    pub(crate) fn new(debit_keywords: &[&str], credit_keywords: &[&str]) -> Self {
        Self {
            debit_keywords: debit_keywords.iter().map(|s| s.to_lowercase()).collect(),
            credit_keywords: credit_keywords.iter().map(|s| s.to_lowercase()).collect(),
            merchant_pattern: Regex::new(r"(?i)\b(?:to|at)\s+([A-Za-z0-9 &./-]{3,60})|@\s*([A-Za-z0-9 &./-]{3,60})").ok(),
        }
    }

    /// `type_value` is `Some` exactly when the type role resolved (the cell
    /// may still be empty); same for `message`. An explicit type always wins
    /// over message heuristics, and an unrecognized type value falls through
    /// to the amount sign, not to the message.
    pub(crate) fn classify(
        &self,
        type_value: Option<&str>,
        message: Option<&str>,
        amount: Option<Decimal>,
    ) -> Kind {
        if let Some(raw) = type_value {
            let t = raw.trim().to_lowercase();
            if t == "debit" {
                return Kind::Debit;
            }
            if t == "credit" {
                return Kind::Credit;
            }
            if t.contains("deb") {
                return Kind::Debit;
            }
            if t.contains("cred") {
                return Kind::Credit;
            }
        } else if let Some(msg) = message {
            let m = msg.to_lowercase();
            if self.debit_keywords.iter().any(|k| m.contains(k)) {
                return Kind::Debit;
            }
            if self.credit_keywords.iter().any(|k| m.contains(k)) {
                return Kind::Credit;
            }
        }

        match amount {
            Some(a) if a < Decimal::ZERO => Kind::Debit,
            Some(a) if a > Decimal::ZERO => Kind::Credit,
            _ => Kind::Unknown,
        }
    }

    /// Best-effort merchant name: the text following "to", "at" or "@" in
    /// the message.
    pub(crate) fn merchant(&self, message: &str) -> Option<String> {
        let re = self.merchant_pattern.as_ref()?;
        let caps = re.captures(message)?;
        let m = caps.get(1).or_else(|| caps.get(2))?;
        let name = m.as_str().trim();
        if name.chars().count() >= 3 {
            Some(name.to_string())
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
