//! Type conversions into ShopError

use super::types::{FieldMessage, ShopError};
use sea_orm::{DbErr, SqlErr};
use validator::{ValidationErrors, ValidationErrorsKind};

impl From<ValidationErrors> for ShopError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Vec::new();
        collect_field_messages("", &errors, &mut fields);
        fields.sort_by(|a, b| a.field_name.cmp(&b.field_name));
        ShopError::Validation(fields)
    }
}

fn collect_field_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldMessage>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(FieldMessage::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_field_messages(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_messages(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

impl ShopError {
    /// Classify a failed write: foreign key violations become integrity errors
    pub fn from_write(err: DbErr, integrity_message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                ShopError::DatabaseIntegrity(integrity_message.to_string())
            }
            _ => ShopError::Database(err),
        }
    }

    /// Classify a failed write against a unique index as a field error on `field`
    pub fn from_unique_write(err: DbErr, field: &str, message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ShopError::field(field, message),
            _ => ShopError::Database(err),
        }
    }
}
