//! Documented column sets for the known import workflows.
//!
//! Templates are shown to users as guidance. Nothing in the preview pipeline enforces them; the
//! remote import step is the only place a column set is validated.

use crate::types::Header;

/// Documented column set and example content for one import workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportTemplate {
    /// Human-readable title.
    pub title: &'static str,
    /// Columns the remote importer expects.
    pub expected_fields: &'static [&'static str],
    /// Example file content (header + a few rows).
    pub example: &'static str,
}

impl ImportTemplate {
    /// Teacher roster import.
    pub const TEACHERS: Self = Self {
        title: "Teachers",
        expected_fields: &[
            "code_smartex_ens",
            "nom_ens",
            "prenom_ens",
            "email_ens",
            "grade_code_ens",
            "participe_surveillance",
        ],
        example: "code_smartex_ens,nom_ens,prenom_ens,email_ens,grade_code_ens,participe_surveillance\n\
                  57,Karoui,Wafa,wafa.karoui@isi.utm.tn,PR,1",
    };

    /// Availability wishes import.
    pub const WISHES: Self = Self {
        title: "Availability wishes",
        expected_fields: &["code_smartex_ens", "nom_ens", "prenom_ens", "jour", "seance"],
        example: "code_smartex_ens,nom_ens,prenom_ens,jour,seance\n57,Karoui,Wafa,6,S3",
    };

    /// Exam time slot import. A `session` column is appended before upload.
    pub const EXAM_SLOTS: Self = Self {
        title: "Exam time slots",
        expected_fields: &[
            "dateExam",
            "h_debut",
            "h_fin",
            "type_ex",
            "semestre",
            "enseignant",
            "cod_salle",
        ],
        example: "dateExam,h_debut,h_fin,type_ex,semestre,enseignant,cod_salle\n\
                  13/05/2025,08:30:00,10:00:00,E,SEMESTRE 2,A102,B203\n\
                  13/05/2025,10:30:00,12:00:00,E,SEMESTRE 2,A124,B203\n\
                  13/05/2025,14:30:00,16:00:00,E,SEMESTRE 2,A405,A208",
    };

    /// Expected fields absent from `header`, in template order.
    pub fn missing_fields(&self, header: &Header) -> Vec<&'static str> {
        self.expected_fields
            .iter()
            .copied()
            .filter(|f| !header.contains(f))
            .collect()
    }

    /// Columns in `header` the template does not list.
    pub fn unexpected_fields<'h>(&self, header: &'h Header) -> Vec<&'h str> {
        header
            .names
            .iter()
            .map(String::as_str)
            .filter(|n| !self.expected_fields.iter().any(|f| f == n))
            .collect()
    }
}
