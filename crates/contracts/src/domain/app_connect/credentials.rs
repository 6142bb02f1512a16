use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Private Key
// ============================================================================

/// Закрытый ключ App Store Connect в форме настроек.
///
/// `Unchanged` — отдельное состояние "новое значение не введено": при
/// редактировании сохранённого подключения секрет повторно не показывается
/// и не перезаписывается. Пустая строка — это НЕ `Unchanged`.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum PrivateKey {
    #[default]
    Unchanged,
    New(String),
}

impl PrivateKey {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Введённое новое значение, если оно есть
    pub fn as_new(&self) -> Option<&str> {
        match self {
            Self::Unchanged => None,
            Self::New(value) => Some(value),
        }
    }
}

// Секрет не должен попадать в логи и panic-сообщения
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => f.write_str("Unchanged"),
            Self::New(_) => f.write_str("New(<redacted>)"),
        }
    }
}

impl From<Option<String>> for PrivateKey {
    fn from(value: Option<String>) -> Self {
        match value {
            None => Self::Unchanged,
            Some(v) => Self::New(v),
        }
    }
}

// ============================================================================
// Field selector
// ============================================================================

/// Поля записи учётных данных
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Issuer,
    KeyId,
    PrivateKey,
}

impl CredentialField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Issuer => "issuer",
            Self::KeyId => "keyId",
            Self::PrivateKey => "privateKey",
        }
    }
}

// ============================================================================
// Credentials record
// ============================================================================

/// Учётные данные API App Store Connect — значение формы.
///
/// Запись принадлежит владельцу формы и передаётся вниз при каждом рендере;
/// шаг формы её не хранит и не мутирует, а строит замену через [`Self::with_field`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConnectCredentials {
    pub issuer: String,
    pub key_id: String,
    pub private_key: PrivateKey,
}

impl AppConnectCredentials {
    /// Копия записи с одним заменённым полем.
    ///
    /// Исходная запись не изменяется; остальные поля переносятся как есть.
    /// Для [`CredentialField::PrivateKey`] значение оборачивается в
    /// [`PrivateKey::New`].
    pub fn with_field(&self, field: CredentialField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            CredentialField::Issuer => next.issuer = value,
            CredentialField::KeyId => next.key_id = value,
            CredentialField::PrivateKey => next.private_key = PrivateKey::New(value),
        }
        next
    }

    /// Валидация формы перед сохранением.
    ///
    /// `existing` — редактирование сохранённого подключения: в этом режиме
    /// `Unchanged` допустим, секрет остаётся прежним.
    pub fn validate(&self, existing: bool) -> Result<(), String> {
        if self.issuer.trim().is_empty() {
            return Err("Issuer is required".into());
        }
        if self.key_id.trim().is_empty() {
            return Err("Key ID is required".into());
        }
        match &self.private_key {
            PrivateKey::Unchanged if !existing => Err("Private Key is required".into()),
            PrivateKey::New(value) if value.trim().is_empty() => {
                Err("Private Key is required".into())
            }
            _ => Ok(()),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO учётных данных для внешнего потока сохранения.
///
/// `private_key: None` означает "секрет не менялся" и в JSON не передаётся.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppConnectCredentialsDto {
    pub issuer: String,
    pub key_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

impl fmt::Debug for AppConnectCredentialsDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConnectCredentialsDto")
            .field("issuer", &self.issuer)
            .field("key_id", &self.key_id)
            .field(
                "private_key",
                &self.private_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl From<AppConnectCredentials> for AppConnectCredentialsDto {
    fn from(form: AppConnectCredentials) -> Self {
        Self {
            issuer: form.issuer,
            key_id: form.key_id,
            private_key: match form.private_key {
                PrivateKey::Unchanged => None,
                PrivateKey::New(value) => Some(value),
            },
        }
    }
}

impl From<AppConnectCredentialsDto> for AppConnectCredentials {
    fn from(dto: AppConnectCredentialsDto) -> Self {
        Self {
            issuer: dto.issuer,
            key_id: dto.key_id,
            private_key: PrivateKey::from(dto.private_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> AppConnectCredentials {
        AppConnectCredentials {
            issuer: "X".to_string(),
            key_id: "Y".to_string(),
            private_key: PrivateKey::New("secret".to_string()),
        }
    }

    #[test]
    fn test_with_field_replaces_only_issuer() {
        let record = AppConnectCredentials::default();
        let next = record.with_field(CredentialField::Issuer, "ABC123".to_string());

        assert_eq!(next.issuer, "ABC123");
        assert_eq!(next.key_id, "");
        assert_eq!(next.private_key, PrivateKey::Unchanged);
    }

    #[test]
    fn test_with_field_replaces_only_key_id() {
        let record = populated();
        let next = record.with_field(CredentialField::KeyId, "2X9R4HXF34".to_string());

        assert_eq!(next.issuer, "X");
        assert_eq!(next.key_id, "2X9R4HXF34");
        assert_eq!(next.private_key, PrivateKey::New("secret".to_string()));
    }

    #[test]
    fn test_with_field_replaces_only_private_key() {
        let record = populated();
        let next = record.with_field(CredentialField::PrivateKey, "newsecret".to_string());

        assert_eq!(next.issuer, "X");
        assert_eq!(next.key_id, "Y");
        assert_eq!(next.private_key, PrivateKey::New("newsecret".to_string()));
    }

    #[test]
    fn test_with_field_does_not_mutate_original() {
        let record = populated();
        let _ = record.with_field(CredentialField::Issuer, "other".to_string());

        assert_eq!(record, populated());
    }

    #[test]
    fn test_edit_sequence_no_cross_field_leakage() {
        let record = AppConnectCredentials::default()
            .with_field(CredentialField::Issuer, "i1".to_string())
            .with_field(CredentialField::KeyId, "k1".to_string())
            .with_field(CredentialField::PrivateKey, "p1".to_string())
            .with_field(CredentialField::Issuer, "i2".to_string());

        assert_eq!(record.issuer, "i2");
        assert_eq!(record.key_id, "k1");
        assert_eq!(record.private_key, PrivateKey::New("p1".to_string()));
    }

    #[test]
    fn test_empty_private_key_is_not_unchanged() {
        let record =
            AppConnectCredentials::default().with_field(CredentialField::PrivateKey, String::new());

        assert_eq!(record.private_key, PrivateKey::New(String::new()));
        assert!(!record.private_key.is_unchanged());
    }

    #[test]
    fn test_validate_requires_issuer_and_key_id() {
        let mut record = populated();
        record.issuer = "  ".to_string();
        assert!(record.validate(false).is_err());

        let mut record = populated();
        record.key_id = String::new();
        assert!(record.validate(false).is_err());

        assert!(populated().validate(false).is_ok());
    }

    #[test]
    fn test_validate_unchanged_key_only_for_existing() {
        let record = AppConnectCredentials {
            issuer: "X".to_string(),
            key_id: "Y".to_string(),
            private_key: PrivateKey::Unchanged,
        };

        assert!(record.validate(true).is_ok());
        assert!(record.validate(false).is_err());
    }

    #[test]
    fn test_validate_rejects_blank_new_key() {
        let record = populated().with_field(CredentialField::PrivateKey, "   ".to_string());

        assert!(record.validate(true).is_err());
    }

    #[test]
    fn test_dto_skips_unchanged_private_key() {
        let dto = AppConnectCredentialsDto::from(AppConnectCredentials {
            issuer: "X".to_string(),
            key_id: "Y".to_string(),
            private_key: PrivateKey::Unchanged,
        });
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["issuer"], "X");
        assert_eq!(json["keyId"], "Y");
        assert!(json.get("privateKey").is_none());
    }

    #[test]
    fn test_dto_round_trip_new_key() {
        let dto = AppConnectCredentialsDto::from(populated());
        let json = serde_json::to_string(&dto).unwrap();
        let back: AppConnectCredentialsDto = serde_json::from_str(&json).unwrap();

        assert_eq!(back, dto);
        assert_eq!(
            AppConnectCredentials::from(back),
            populated()
        );
    }

    #[test]
    fn test_dto_missing_or_null_private_key_is_unchanged() {
        let dto: AppConnectCredentialsDto =
            serde_json::from_str(r#"{"issuer":"X","keyId":"Y"}"#).unwrap();
        assert_eq!(
            AppConnectCredentials::from(dto).private_key,
            PrivateKey::Unchanged
        );

        let dto: AppConnectCredentialsDto =
            serde_json::from_str(r#"{"issuer":"X","keyId":"Y","privateKey":null}"#).unwrap();
        assert_eq!(
            AppConnectCredentials::from(dto).private_key,
            PrivateKey::Unchanged
        );
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let debug = format!("{:?}", populated());
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));

        let dto_debug = format!("{:?}", AppConnectCredentialsDto::from(populated()));
        assert!(!dto_debug.contains("secret"));
    }

    #[test]
    fn test_field_as_str() {
        assert_eq!(CredentialField::Issuer.as_str(), "issuer");
        assert_eq!(CredentialField::KeyId.as_str(), "keyId");
        assert_eq!(CredentialField::PrivateKey.as_str(), "privateKey");
    }
}
