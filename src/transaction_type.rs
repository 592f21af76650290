//! The four-way transaction classification shared by transactions and
//! categories.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The classification of a transaction.
///
/// The type determines which summary bucket the transaction's amount
/// contributes to and which subset of categories the transaction may
/// reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned, e.g. salary or freelance work.
    Income,
    /// Money spent, e.g. rent or groceries.
    Expense,
    /// Something owned, e.g. savings or property.
    Asset,
    /// Something owed, e.g. a credit card balance or a mortgage.
    Liability,
}

impl TransactionType {
    /// The lowercase name used on the wire and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Asset => "asset",
            TransactionType::Liability => "liability",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            "asset" => Ok(TransactionType::Asset),
            "liability" => Ok(TransactionType::Liability),
            other => Err(Error::InvalidTransactionType(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod transaction_type_tests {
    use crate::{Error, transaction_type::TransactionType};

    #[test]
    fn round_trips_through_strings() {
        for transaction_type in [
            TransactionType::Income,
            TransactionType::Expense,
            TransactionType::Asset,
            TransactionType::Liability,
        ] {
            let parsed: TransactionType = transaction_type.as_str().parse().unwrap();

            assert_eq!(parsed, transaction_type);
        }
    }

    #[test]
    fn rejects_unknown_type() {
        let result = "equity".parse::<TransactionType>();

        assert_eq!(
            result,
            Err(Error::InvalidTransactionType("equity".to_owned()))
        );
    }

    #[test]
    fn serializes_as_lowercase() {
        let json = serde_json::to_string(&TransactionType::Liability).unwrap();

        assert_eq!(json, "\"liability\"");
    }
}
