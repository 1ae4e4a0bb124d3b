use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Filter payload for a downstream identity lookup.
///
/// Both collections are independently optional: an absent field means "do not
/// filter on it", which is distinct from an empty list. Absent fields are
/// omitted from the serialized form entirely and deserialize back to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLookupRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
}

impl UserLookupRequest {
    /// Collapses empty filter lists to absent and rejects a request that
    /// names no filter at all.
    pub fn normalized(self) -> DomainResult<UserLookupRequest> {
        let user_names = self.user_names.filter(|names| !names.is_empty());
        let emails = self.emails.filter(|emails| !emails.is_empty());

        if user_names.is_none() && emails.is_none() {
            return Err(DomainError::EmptyLookupRequest);
        }

        Ok(UserLookupRequest { user_names, emails })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_field_is_omitted_from_serialized_form() {
        let request = UserLookupRequest {
            user_names: Some(vec!["alice".to_string()]),
            emails: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("userNames"));
        assert!(!object.contains_key("emails"));
    }

    #[test]
    fn test_round_trip_keeps_absent_field_absent() {
        let request = UserLookupRequest {
            user_names: Some(vec!["alice".to_string(), "bob".to_string()]),
            emails: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        let decoded: UserLookupRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(
            decoded.user_names,
            Some(vec!["alice".to_string(), "bob".to_string()])
        );
        assert_eq!(decoded.emails, None);
    }

    #[test]
    fn test_deserialize_without_keys_yields_absent_fields() {
        let decoded: UserLookupRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded.user_names, None);
        assert_eq!(decoded.emails, None);
    }

    #[test]
    fn test_normalized_collapses_empty_lists() {
        let request = UserLookupRequest {
            user_names: Some(vec![]),
            emails: Some(vec!["alice@example.com".to_string()]),
        };

        let normalized = request.normalized().unwrap();
        assert_eq!(normalized.user_names, None);
        assert_eq!(
            normalized.emails,
            Some(vec!["alice@example.com".to_string()])
        );
    }

    #[test]
    fn test_normalized_rejects_empty_request() {
        let request = UserLookupRequest {
            user_names: Some(vec![]),
            emails: None,
        };

        assert!(matches!(
            request.normalized(),
            Err(DomainError::EmptyLookupRequest)
        ));
    }
}
