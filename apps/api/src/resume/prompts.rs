//! Prompt construction for resume generation.
//!
//! The template is deterministic: every absent field gets an explicit default
//! ("N/A" unless noted), so the prompt is well-formed even for an empty form.

use crate::resume::form::ResumeForm;

fn safe<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

/// Builds the generation prompt from the submitted form.
pub fn build_prompt(form: &ResumeForm) -> String {
    format!(
        "Generate a professional resume using clear headings and bullet points.\n\
         \n\
         Full Name: {name}\n\
         Contact Information:\n\
         - Address: {contact_info}\n\
         - Email: {email}\n\
         - Phone: {phone}\n\
         \n\
         Professional Summary:\n\
         - Write a 5 sentence summary showcasing the candidate's strengths.\n\
         \n\
         Skills:\n\
         - Highlight 5 relevant skills (technical and soft).\n\
         \n\
         Education:\n\
         - Degree: {degree}\n\
         - University: {university}\n\
         - Dates of Attendance: {education_dates}\n\
         - GPA: {gpa}\n\
         - Relevant Coursework: {relevant_coursework}\n\
         \n\
         Experience:\n\
         - Job Title: {job_title}\n\
         - Company: {company_name}\n\
         - Location: {job_location}\n\
         - Dates: {job_dates}\n\
         - Responsibilities:\n\
         - {responsibility_1}\n\
         - {responsibility_2}\n\
         - {responsibility_3}\n\
         \n\
         Projects:\n\
         - Title: {project_title}\n\
         - Description: {project_description}\n\
         - Technologies: {project_tech}\n\
         \n\
         Certifications & Awards:\n\
         - Certification: {certification_name}\n\
         - Organization: {certification_org}\n\
         - Date: {certification_date}\n\
         - Award: {award_name}\n\
         \n\
         Extracurricular:\n\
         - Activity: {extracurricular}\n\
         - Description: {extracurricular_description}\n",
        name = safe(&form.name, "N/A"),
        contact_info = safe(&form.contact_info, "N/A"),
        email = safe(&form.email, "N/A"),
        phone = safe(&form.phone, "N/A"),
        degree = safe(&form.degree, "N/A"),
        university = safe(&form.university, "N/A"),
        education_dates = safe(&form.education_dates, "N/A"),
        gpa = safe(&form.gpa, "Not specified"),
        relevant_coursework = safe(&form.relevant_coursework, "Not provided"),
        job_title = safe(&form.job_title, "N/A"),
        company_name = safe(&form.company_name, "N/A"),
        job_location = safe(&form.job_location, "N/A"),
        job_dates = safe(&form.job_dates, "N/A"),
        responsibility_1 = safe(&form.responsibility_1, "N/A"),
        responsibility_2 = safe(&form.responsibility_2, ""),
        responsibility_3 = safe(&form.responsibility_3, ""),
        project_title = safe(&form.project_title, "N/A"),
        project_description = safe(&form.project_description, "N/A"),
        project_tech = safe(&form.project_tech, "N/A"),
        certification_name = safe(&form.certification_name, "N/A"),
        certification_org = safe(&form.certification_org, "N/A"),
        certification_date = safe(&form.certification_date, "N/A"),
        award_name = safe(&form.award_name, "N/A"),
        extracurricular = safe(&form.extracurricular, "N/A"),
        extracurricular_description = safe(&form.extracurricular_description, "N/A"),
    )
}
