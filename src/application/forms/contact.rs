use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Public contact form. Stored as a proposal for the admin inbox.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ContactForm {
    #[validate(length(min = 2, message = "El nombre debe tener al menos 2 caracteres"))]
    pub nombre: String,
    #[validate(length(min = 2, message = "El apellido debe tener al menos 2 caracteres"))]
    pub apellido: String,
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[validate(length(min = 10, message = "El mensaje debe tener al menos 10 caracteres"))]
    pub mensaje: String,
}
