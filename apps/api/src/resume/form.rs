//! The resume form model. Every field is optional at the data-model level —
//! the prompt builder substitutes defaults for missing values, so even a fully
//! empty form produces a well-formed prompt.

use crate::errors::AppError;

/// Maximum length for short form fields.
const MAX_FIELD_CHARS: usize = 200;
/// Maximum length for free-text description fields.
const MAX_DESCRIPTION_CHARS: usize = 2000;

#[derive(Debug, Clone, Default)]
pub struct ResumeForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_info: Option<String>,
    pub degree: Option<String>,
    pub university: Option<String>,
    pub education_dates: Option<String>,
    pub gpa: Option<String>,
    pub relevant_coursework: Option<String>,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub job_location: Option<String>,
    pub job_dates: Option<String>,
    pub responsibility_1: Option<String>,
    pub responsibility_2: Option<String>,
    pub responsibility_3: Option<String>,
    pub project_title: Option<String>,
    pub project_description: Option<String>,
    pub project_tech: Option<String>,
    pub certification_name: Option<String>,
    pub certification_org: Option<String>,
    pub certification_date: Option<String>,
    pub award_name: Option<String>,
    pub extracurricular: Option<String>,
    pub extracurricular_description: Option<String>,
}

impl ResumeForm {
    /// Assigns one multipart text field by name. Unknown field names are
    /// ignored; empty values are treated as absent.
    pub fn set(&mut self, field: &str, value: String) {
        let value = value.trim().to_string();
        if value.is_empty() {
            return;
        }
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "contact_info" => &mut self.contact_info,
            "degree" => &mut self.degree,
            "university" => &mut self.university,
            "education_dates" => &mut self.education_dates,
            "gpa" => &mut self.gpa,
            "relevant_coursework" => &mut self.relevant_coursework,
            "job_title" => &mut self.job_title,
            "company_name" => &mut self.company_name,
            "job_location" => &mut self.job_location,
            "job_dates" => &mut self.job_dates,
            "responsibility_1" => &mut self.responsibility_1,
            "responsibility_2" => &mut self.responsibility_2,
            "responsibility_3" => &mut self.responsibility_3,
            "project_title" => &mut self.project_title,
            "project_description" => &mut self.project_description,
            "project_tech" => &mut self.project_tech,
            "certification_name" => &mut self.certification_name,
            "certification_org" => &mut self.certification_org,
            "certification_date" => &mut self.certification_date,
            "award_name" => &mut self.award_name,
            "extracurricular" => &mut self.extracurricular,
            "extracurricular_description" => &mut self.extracurricular_description,
            _ => return,
        };
        *slot = Some(value);
    }

    /// Field-level validation. All fields are optional; present values are
    /// length-capped so attacker-controlled input cannot balloon the prompt.
    pub fn validate(&self) -> Result<(), AppError> {
        let short_fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("contact_info", &self.contact_info),
            ("degree", &self.degree),
            ("university", &self.university),
            ("education_dates", &self.education_dates),
            ("gpa", &self.gpa),
            ("job_title", &self.job_title),
            ("company_name", &self.company_name),
            ("job_location", &self.job_location),
            ("job_dates", &self.job_dates),
            ("project_title", &self.project_title),
            ("project_tech", &self.project_tech),
            ("certification_name", &self.certification_name),
            ("certification_org", &self.certification_org),
            ("certification_date", &self.certification_date),
            ("award_name", &self.award_name),
            ("extracurricular", &self.extracurricular),
        ];
        for (field, value) in short_fields {
            check_len(field, value, MAX_FIELD_CHARS)?;
        }

        let long_fields = [
            ("relevant_coursework", &self.relevant_coursework),
            ("responsibility_1", &self.responsibility_1),
            ("responsibility_2", &self.responsibility_2),
            ("responsibility_3", &self.responsibility_3),
            ("project_description", &self.project_description),
            ("extracurricular_description", &self.extracurricular_description),
        ];
        for (field, value) in long_fields {
            check_len(field, value, MAX_DESCRIPTION_CHARS)?;
        }

        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(AppError::Validation(
                    "email must be a valid address".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Display name used for the document title, the attachment filename, and
    /// the persisted record. Defaults to "resume" when no name was supplied.
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "resume".to_string())
    }
}

fn check_len(field: &str, value: &Option<String>, max: usize) -> Result<(), AppError> {
    if let Some(v) = value {
        if v.chars().count() > max {
            return Err(AppError::Validation(format!(
                "{field} must be at most {max} characters"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_is_valid() {
        assert!(ResumeForm::default().validate().is_ok());
        assert_eq!(ResumeForm::default().display_name(), "resume");
    }

    #[test]
    fn test_set_known_field() {
        let mut form = ResumeForm::default();
        form.set("name", "Ada Lovelace".to_string());
        assert_eq!(form.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(form.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_set_unknown_field_is_ignored() {
        let mut form = ResumeForm::default();
        form.set("shoe_size", "42".to_string());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_blank_value_treated_as_absent() {
        let mut form = ResumeForm::default();
        form.set("name", "   ".to_string());
        assert!(form.name.is_none());
    }

    #[test]
    fn test_overlong_field_rejected() {
        let mut form = ResumeForm::default();
        form.name = Some("x".repeat(MAX_FIELD_CHARS + 1));
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut form = ResumeForm::default();
        form.email = Some("not-an-address".to_string());
        assert!(form.validate().is_err());

        form.email = Some("ada@example.org".to_string());
        assert!(form.validate().is_ok());
    }
}
