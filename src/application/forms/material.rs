// src/application/forms/material.rs
//! The "envía material" application form and the step-by-step wizard that
//! gates it.
//!
//! Each step owns a fixed set of fields and only those fields are checked
//! when leaving the step. Submission is allowed from the last step only and
//! re-checks the whole form, including the responsible-adult rule for
//! minors.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        forms::blank_to_none,
    },
    domain::material::{ADULT_AGE, ApplicantProfile},
};

fn validate_edad(edad: &str) -> Result<(), ValidationError> {
    match edad.trim().parse::<i32>() {
        Ok(value) if (0..=150).contains(&value) => Ok(()),
        _ => Err(ValidationError::new("edad").with_message("La edad debe ser un número válido".into())),
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct MaterialForm {
    #[validate(length(min = 2, message = "El nombre es requerido"))]
    pub nombre_completo: String,
    #[validate(length(min = 2, message = "El apellido es requerido"))]
    pub apellido: String,
    #[validate(
        length(min = 1, message = "La edad es requerida"),
        custom(function = "validate_edad")
    )]
    pub edad: String,
    #[validate(length(min = 1, message = "La fecha de nacimiento es requerida"))]
    pub fecha_nacimiento: String,
    pub nombre_artistico: Option<String>,
    pub nombre_adulto_responsable: Option<String>,

    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "WhatsApp es requerido"))]
    pub whatsapp: String,
    pub tik_tok: Option<String>,
    pub instagram: Option<String>,

    #[validate(length(min = 1, message = "La nacionalidad es requerida"))]
    pub nacionalidad: String,
    pub residencia_actual: Option<String>,
    pub pasaporte: Option<String>,
    pub dni: Option<String>,
    pub licencia_conducir: Option<String>,

    pub altura: Option<String>,
    pub peso: Option<String>,
    pub contextura: Option<String>,
    pub color_pelo: Option<String>,
    pub color_ojos: Option<String>,
    pub talle_remera: Option<String>,
    pub pantalon: Option<String>,
    pub calzado: Option<String>,

    pub tatuajes: Option<String>,
    pub cicatrices: Option<String>,
    pub alergias: Option<String>,

    pub alimentacion: Option<String>,
    pub alimentacion_otros: Option<String>,
    pub hijos: Option<String>,
    pub obra_social: Option<String>,
    pub contacto_emergencia: Option<String>,

    pub instrumentos: Option<String>,
    pub canta: Option<String>,
    pub idiomas: Option<String>,
    pub acento_neutro: Option<String>,
    pub deportes: Option<String>,
    pub baila: Option<String>,
    pub otras_habilidades: Option<String>,

    #[validate(url(message = "URL inválida"))]
    pub reel_url: Option<String>,
}

impl MaterialForm {
    /// Assigns a field by its wire (camelCase) name. Returns `false` for
    /// names the form does not know.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let text = value.trim().to_owned();
        let optional = blank_to_none(Some(value.to_owned()));
        match name {
            "nombreCompleto" => self.nombre_completo = text,
            "apellido" => self.apellido = text,
            "edad" => self.edad = text,
            "fechaNacimiento" => self.fecha_nacimiento = text,
            "nombreArtistico" => self.nombre_artistico = optional,
            "nombreAdultoResponsable" => self.nombre_adulto_responsable = optional,
            "email" => self.email = text,
            "whatsapp" => self.whatsapp = text,
            "tikTok" => self.tik_tok = optional,
            "instagram" => self.instagram = optional,
            "nacionalidad" => self.nacionalidad = text,
            "residenciaActual" => self.residencia_actual = optional,
            "pasaporte" => self.pasaporte = optional,
            "dni" => self.dni = optional,
            "licenciaConducir" => self.licencia_conducir = optional,
            "altura" => self.altura = optional,
            "peso" => self.peso = optional,
            "contextura" => self.contextura = optional,
            "colorPelo" => self.color_pelo = optional,
            "colorOjos" => self.color_ojos = optional,
            "talleRemera" => self.talle_remera = optional,
            "pantalon" => self.pantalon = optional,
            "calzado" => self.calzado = optional,
            "tatuajes" => self.tatuajes = optional,
            "cicatrices" => self.cicatrices = optional,
            "alergias" => self.alergias = optional,
            "alimentacion" => self.alimentacion = optional,
            "alimentacionOtros" => self.alimentacion_otros = optional,
            "hijos" => self.hijos = optional,
            "obraSocial" => self.obra_social = optional,
            "contactoEmergencia" => self.contacto_emergencia = optional,
            "instrumentos" => self.instrumentos = optional,
            "canta" => self.canta = optional,
            "idiomas" => self.idiomas = optional,
            "acentoNeutro" => self.acento_neutro = optional,
            "deportes" => self.deportes = optional,
            "baila" => self.baila = optional,
            "otrasHabilidades" => self.otras_habilidades = optional,
            "reelUrl" => self.reel_url = optional,
            _ => return false,
        }
        true
    }

    fn parsed_edad(&self) -> Option<i32> {
        self.edad.trim().parse().ok()
    }

    /// Field checks plus the rule that minors name a responsible adult.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        let minor = self.parsed_edad().is_some_and(|edad| edad < ADULT_AGE);
        if minor && self.nombre_adulto_responsable.is_none() {
            errors.add(
                "nombre_adulto_responsable",
                ValidationError::new("responsible_adult").with_message(
                    "El nombre del adulto responsable es requerido para menores de edad".into(),
                ),
            );
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    fn into_application(self) -> ApplicationResult<MaterialApplication> {
        let edad = self
            .parsed_edad()
            .ok_or_else(|| ApplicationError::validation("edad must be a number"))?;
        let profile = ApplicantProfile {
            nombre_completo: self.nombre_completo,
            apellido: self.apellido,
            edad,
            fecha_nacimiento: self.fecha_nacimiento,
            nombre_artistico: self.nombre_artistico,
            nombre_adulto_responsable: self.nombre_adulto_responsable,
            email: self.email,
            whatsapp: self.whatsapp,
            tik_tok: self.tik_tok,
            instagram: self.instagram,
            nacionalidad: self.nacionalidad,
            residencia_actual: self.residencia_actual,
            pasaporte: self.pasaporte,
            dni: self.dni,
            licencia_conducir: self.licencia_conducir,
            altura: self.altura,
            peso: self.peso,
            contextura: self.contextura,
            color_pelo: self.color_pelo,
            color_ojos: self.color_ojos,
            talle_remera: self.talle_remera,
            pantalon: self.pantalon,
            calzado: self.calzado,
            tatuajes: self.tatuajes,
            cicatrices: self.cicatrices,
            alergias: self.alergias,
            alimentacion: self.alimentacion,
            alimentacion_otros: self.alimentacion_otros,
            hijos: self.hijos,
            obra_social: self.obra_social,
            contacto_emergencia: self.contacto_emergencia,
            instrumentos: self.instrumentos,
            canta: self.canta,
            idiomas: self.idiomas,
            acento_neutro: self.acento_neutro,
            deportes: self.deportes,
            baila: self.baila,
            otras_habilidades: self.otras_habilidades,
        };
        Ok(MaterialApplication {
            profile,
            reel_url: self.reel_url,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialStep {
    PersonalInfo,
    Contact,
    Documents,
    Physical,
    Medical,
    Lifestyle,
    Skills,
    Material,
}

impl MaterialStep {
    pub const ALL: [MaterialStep; 8] = [
        MaterialStep::PersonalInfo,
        MaterialStep::Contact,
        MaterialStep::Documents,
        MaterialStep::Physical,
        MaterialStep::Medical,
        MaterialStep::Lifestyle,
        MaterialStep::Skills,
        MaterialStep::Material,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            MaterialStep::PersonalInfo => "Información Personal",
            MaterialStep::Contact => "Contacto",
            MaterialStep::Documents => "Documentación",
            MaterialStep::Physical => "Características Físicas",
            MaterialStep::Medical => "Información Médica",
            MaterialStep::Lifestyle => "Estilo de Vida",
            MaterialStep::Skills => "Habilidades",
            MaterialStep::Material => "Material",
        }
    }

    /// Form fields owned by the step, as reported in validation errors.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            MaterialStep::PersonalInfo => &[
                "nombre_completo",
                "apellido",
                "edad",
                "fecha_nacimiento",
                "nombre_artistico",
                "nombre_adulto_responsable",
            ],
            MaterialStep::Contact => &["email", "whatsapp", "tik_tok", "instagram"],
            MaterialStep::Documents => &[
                "nacionalidad",
                "residencia_actual",
                "pasaporte",
                "dni",
                "licencia_conducir",
            ],
            MaterialStep::Physical => &[
                "altura",
                "peso",
                "contextura",
                "color_pelo",
                "color_ojos",
                "talle_remera",
                "pantalon",
                "calzado",
            ],
            MaterialStep::Medical => &["tatuajes", "cicatrices", "alergias"],
            MaterialStep::Lifestyle => &[
                "alimentacion",
                "alimentacion_otros",
                "hijos",
                "obra_social",
                "contacto_emergencia",
            ],
            MaterialStep::Skills => &[
                "instrumentos",
                "canta",
                "idiomas",
                "acento_neutro",
                "deportes",
                "baila",
                "otras_habilidades",
            ],
            MaterialStep::Material => &["reel_url"],
        }
    }

    pub fn next(self) -> Option<MaterialStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<MaterialStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

/// A checked submission ready to be stored.
#[derive(Debug, Clone)]
pub struct MaterialApplication {
    pub profile: ApplicantProfile,
    pub reel_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MaterialWizard {
    form: MaterialForm,
    step: MaterialStep,
}

impl Default for MaterialWizard {
    fn default() -> Self {
        Self::new(MaterialForm::default())
    }
}

impl MaterialWizard {
    pub fn new(form: MaterialForm) -> Self {
        Self {
            form,
            step: MaterialStep::PersonalInfo,
        }
    }

    pub fn step(&self) -> MaterialStep {
        self.step
    }

    pub fn form(&self) -> &MaterialForm {
        &self.form
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        self.form.set_field(name, value)
    }

    /// Errors belonging to `step`'s fields only.
    pub fn step_errors(&self, step: MaterialStep) -> Result<(), ValidationErrors> {
        let Err(all) = self.form.check() else {
            return Ok(());
        };
        let mut scoped = ValidationErrors::new();
        let field_errors = all.field_errors();
        for field in step.fields() {
            if let Some(errors) = field_errors.get(*field) {
                for error in errors.iter() {
                    scoped.add(*field, error.clone());
                }
            }
        }
        if scoped.is_empty() { Ok(()) } else { Err(scoped) }
    }

    /// Leaves the current step if its fields are valid. Stays put on the
    /// last step.
    pub fn advance(&mut self) -> Result<MaterialStep, ValidationErrors> {
        self.step_errors(self.step)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> MaterialStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    pub fn submit(self) -> ApplicationResult<MaterialApplication> {
        if !self.step.is_last() {
            return Err(ApplicationError::validation(format!(
                "cannot submit from step '{}'",
                self.step.label()
            )));
        }
        self.form.check()?;
        self.form.into_application()
    }

    /// Walks a fully filled form through every step and submits it.
    pub fn complete(form: MaterialForm) -> ApplicationResult<MaterialApplication> {
        let mut wizard = Self::new(form);
        while !wizard.step.is_last() {
            wizard.advance()?;
        }
        wizard.submit()
    }
}
