use crate::domain::errors::DomainError;

/// Unique slug constraints are named `{table}_slug_key`.
const SLUG_CONSTRAINT_SUFFIX: &str = "_slug_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                if let Some(table) = constraint.strip_suffix(SLUG_CONSTRAINT_SUFFIX) {
                    return DomainError::Conflict(format!("slug already exists in {table}"));
                }
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    // invalid_text_representation, e.g. a malformed uuid
                    "22P02" => {
                        return DomainError::Validation(db_err.message().to_string());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
