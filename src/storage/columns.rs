//! SQLite column conversions for model value types
//!
//! Money is stored as INTEGER cents, currencies as their TEXT code and IDs as
//! the INTEGER row id.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::models::{AccountId, Currency, Money, TransactionId};

impl ToSql for Money {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.cents()))
    }
}

impl FromSql for Money {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_i64().map(Money::from_cents)
    }
}

impl ToSql for Currency {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for Currency {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = value.as_str()?;
        code.parse::<Currency>()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

macro_rules! id_column {
    ($name:ident) => {
        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.get()))
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value.as_i64().map($name::new)
            }
        }
    };
}

id_column!(AccountId);
id_column!(TransactionId);

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_money_and_currency_round_trip_through_sqlite() {
        let conn = Connection::open_in_memory().unwrap();
        let (money, currency): (Money, Currency) = conn
            .query_row(
                "SELECT ?1, ?2",
                rusqlite::params![Money::from_cents(-1234), Currency::Gbp],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();

        assert_eq!(money, Money::from_cents(-1234));
        assert_eq!(currency, Currency::Gbp);
    }

    #[test]
    fn test_unknown_currency_in_column() {
        let conn = Connection::open_in_memory().unwrap();
        let result: rusqlite::Result<Currency> =
            conn.query_row("SELECT 'JPY'", [], |row| row.get(0));
        assert!(result.is_err());
    }
}
