//! Organization (company/person) form validation
//!
//! Mirrors the rules of the organization edit screen: the company-info tab
//! (name, civility, client reference, SIRET) and the billing tab
//! (accounting codes).

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::reference::{
    is_valid_client_ref, normalize_client_ref, trim_form_value, CLIENT_REF_MAX_LEN,
    CLIENT_REF_MIN_LEN,
};
use crate::siret::{is_valid_siret, strip_whitespace};

/// Maximum length of customer and supplier accounting codes
pub const ACCOUNT_CODE_MAX_LEN: usize = 10;

/// Whether the organization is a company or a natural person
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganizationKind {
    #[default]
    Company,
    Person,
}

/// The validated subset of the organization form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyForm {
    #[serde(rename = "type", default)]
    pub kind: OrganizationKind,
    /// Civility, required for persons
    #[serde(rename = "Title")]
    pub title: Option<String>,
    pub firstname: Option<String>,
    pub name: String,
    #[serde(rename = "ref")]
    pub client_ref: Option<String>,
    #[serde(rename = "idprof3")]
    pub siret: Option<String>,
    pub customer_account: Option<String>,
    pub supplier_account: Option<String>,
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| trim_form_value(v).is_empty())
}

impl CompanyForm {
    pub fn new(kind: OrganizationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Every rule violation, in form order. Empty means the form can be saved.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.kind == OrganizationKind::Person && is_blank(self.title.as_deref()) {
            errors.push(FieldError::Required { field: "Title" });
        }

        if trim_form_value(&self.name).is_empty() {
            errors.push(FieldError::Required { field: "name" });
        }

        match self.client_ref.as_deref() {
            r if is_blank(r) => errors.push(FieldError::Required { field: "ref" }),
            r if !is_valid_client_ref(r) => errors.push(FieldError::TooShort {
                field: "ref",
                min: CLIENT_REF_MIN_LEN,
            }),
            Some(r) if r.chars().count() > CLIENT_REF_MAX_LEN => {
                errors.push(FieldError::TooLong {
                    field: "ref",
                    max: CLIENT_REF_MAX_LEN,
                })
            }
            _ => {}
        }

        if !is_blank(self.siret.as_deref()) && !is_valid_siret(self.siret.as_deref()) {
            errors.push(FieldError::InvalidSiret { field: "idprof3" });
        }

        for (field, account) in [
            ("customerAccount", &self.customer_account),
            ("supplierAccount", &self.supplier_account),
        ] {
            if account
                .as_deref()
                .is_some_and(|a| a.chars().count() > ACCOUNT_CODE_MAX_LEN)
            {
                errors.push(FieldError::TooLong {
                    field,
                    max: ACCOUNT_CODE_MAX_LEN,
                });
            }
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Copy of the form in stored shape: ref and accounting codes trimmed
    /// and uppercased, SIRET without whitespace. Blank optionals become `None`.
    pub fn normalized(&self) -> Self {
        let upper = |value: &Option<String>| {
            value
                .as_deref()
                .map(normalize_client_ref)
                .filter(|v| !v.is_empty())
        };

        Self {
            kind: self.kind,
            title: self.title.clone(),
            firstname: self.firstname.clone(),
            name: trim_form_value(&self.name).to_string(),
            client_ref: upper(&self.client_ref),
            siret: self
                .siret
                .as_deref()
                .map(strip_whitespace)
                .filter(|s| !s.is_empty()),
            customer_account: upper(&self.customer_account),
            supplier_account: upper(&self.supplier_account),
        }
    }
}
