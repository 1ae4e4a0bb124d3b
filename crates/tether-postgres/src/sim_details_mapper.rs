use tether_domain::{DomainError, DomainResult, SimDetails};

use crate::row::{CursorError, ResultRow};

/// Maps one row of the SIM-details join into a [`SimDetails`] record.
///
/// Columns are read by name in the order of `schema::SIM_DETAILS_COLUMNS`.
/// The caller positions the row and supplies the 1-based ordinal; the ordinal
/// is stored verbatim without range checks. A NULL in a required column
/// aborts the mapping, so no partially populated record can escape.
pub struct SimDetailsMapper;

impl SimDetailsMapper {
    pub fn map_row(row: &dyn ResultRow, row_num: i64) -> DomainResult<SimDetails> {
        Ok(SimDetails {
            row_num,
            device_id: required_string(row, "device_id")?,
            user_id: nullable_string(row, "user_id")?,
            imei: required_string(row, "imei")?,
            serial_number: required_string(row, "serial_number")?,
            iccid: nullable_string(row, "iccid")?,
            msisdn: nullable_string(row, "msisdn")?,
            imsi: nullable_string(row, "imsi")?,
            ssid: nullable_string(row, "ssid")?,
            bssid: nullable_string(row, "bssid")?,
            association_type: required_string(row, "association_type")?,
            activated_at: row.try_timestamp("activated_at").map_err(cursor_read)?,
        })
    }
}

fn required_string(row: &dyn ResultRow, column: &'static str) -> DomainResult<String> {
    row.try_string(column)
        .map_err(cursor_read)?
        .ok_or(DomainError::MissingRequiredField(column))
}

fn nullable_string(row: &dyn ResultRow, column: &'static str) -> DomainResult<Option<String>> {
    row.try_string(column).map_err(cursor_read)
}

fn cursor_read(e: CursorError) -> DomainError {
    DomainError::CursorReadError(e.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::HashMap;

    /// In-memory row: absent keys model columns missing from the projection,
    /// `None` values model SQL NULL.
    struct FakeRow {
        strings: HashMap<&'static str, Option<String>>,
        timestamps: HashMap<&'static str, Option<DateTime<Utc>>>,
    }

    impl FakeRow {
        fn complete() -> Self {
            let mut strings = HashMap::new();
            strings.insert("device_id", Some("device-123".to_string()));
            strings.insert("user_id", Some("user-456".to_string()));
            strings.insert("imei", Some("356938035643809".to_string()));
            strings.insert("serial_number", Some("SN-0001".to_string()));
            strings.insert("iccid", Some("8991101200003204510".to_string()));
            strings.insert("msisdn", Some("14155552671".to_string()));
            strings.insert("imsi", Some("310150123456789".to_string()));
            strings.insert("ssid", Some("shop-floor".to_string()));
            strings.insert("bssid", Some("00:11:22:33:44:55".to_string()));
            strings.insert("association_type", Some("PRIMARY".to_string()));

            let mut timestamps = HashMap::new();
            timestamps.insert(
                "activated_at",
                Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
            );

            Self {
                strings,
                timestamps,
            }
        }

        fn with_null(mut self, column: &'static str) -> Self {
            if self.strings.contains_key(column) {
                self.strings.insert(column, None);
            } else {
                self.timestamps.insert(column, None);
            }
            self
        }

        fn without_column(mut self, column: &'static str) -> Self {
            self.strings.remove(column);
            self.timestamps.remove(column);
            self
        }
    }

    impl ResultRow for FakeRow {
        fn try_string(&self, column: &str) -> Result<Option<String>, CursorError> {
            self.strings
                .get(column)
                .cloned()
                .ok_or_else(|| CursorError::new(column, anyhow::anyhow!("column not in projection")))
        }

        fn try_timestamp(&self, column: &str) -> Result<Option<DateTime<Utc>>, CursorError> {
            self.timestamps
                .get(column)
                .copied()
                .ok_or_else(|| CursorError::new(column, anyhow::anyhow!("column not in projection")))
        }
    }

    #[test]
    fn test_map_row_complete() {
        let details = SimDetailsMapper::map_row(&FakeRow::complete(), 2).unwrap();

        assert_eq!(details.row_num, 2);
        assert_eq!(details.device_id, "device-123");
        assert_eq!(details.user_id.as_deref(), Some("user-456"));
        assert_eq!(details.imei, "356938035643809");
        assert_eq!(details.association_type, "PRIMARY");
        assert!(details.activated_at.is_some());
    }

    #[test]
    fn test_required_null_fails_naming_the_column() {
        let row = FakeRow::complete().with_null("imei");

        let err = SimDetailsMapper::map_row(&row, 1).unwrap_err();

        match err {
            DomainError::MissingRequiredField(column) => assert_eq!(column, "imei"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_nullable_null_maps_to_absent_not_empty() {
        let row = FakeRow::complete().with_null("iccid").with_null("activated_at");

        let details = SimDetailsMapper::map_row(&row, 1).unwrap();

        assert_eq!(details.iccid, None);
        assert_eq!(details.activated_at, None);
    }

    #[test]
    fn test_missing_projection_column_is_a_cursor_error() {
        let row = FakeRow::complete().without_column("serial_number");

        let err = SimDetailsMapper::map_row(&row, 1).unwrap_err();

        match err {
            DomainError::CursorReadError(source) => {
                assert!(source.to_string().contains("serial_number"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_row_ordinal_is_stored_verbatim() {
        let details = SimDetailsMapper::map_row(&FakeRow::complete(), -7).unwrap();
        assert_eq!(details.row_num, -7);

        let details = SimDetailsMapper::map_row(&FakeRow::complete(), 0).unwrap();
        assert_eq!(details.row_num, 0);
    }
}
