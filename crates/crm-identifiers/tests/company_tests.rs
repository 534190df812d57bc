//! Organization form validation tests

use crm_identifiers::{CompanyForm, FieldError, OrganizationKind};
use rstest::rstest;

fn form_from_json(value: serde_json::Value) -> CompanyForm {
    serde_json::from_value(value).expect("form should deserialize")
}

#[test]
fn test_deserialize_form_fields() {
    let form = form_from_json(serde_json::json!({
        "type": "Person",
        "Title": "MR",
        "firstname": "Jean",
        "name": "Dupont",
        "ref": "CLT001",
        "idprof3": "732 829 320 00074",
        "customerAccount": "411DUP"
    }));

    assert_eq!(form.kind, OrganizationKind::Person);
    assert_eq!(form.title.as_deref(), Some("MR"));
    assert_eq!(form.siret.as_deref(), Some("732 829 320 00074"));
    assert!(form.is_valid());
}

#[test]
fn test_kind_defaults_to_company() {
    let form = form_from_json(serde_json::json!({ "name": "Acme", "ref": "ACME" }));
    assert_eq!(form.kind, OrganizationKind::Company);
    assert!(form.is_valid());
}

#[test]
fn test_collects_every_error_in_form_order() {
    let form = form_from_json(serde_json::json!({
        "type": "Person",
        "name": "  ",
        "ref": "AB",
        "idprof3": "73282932000075",
        "customerAccount": "41100000000",
        "supplierAccount": "40100000000"
    }));

    assert_eq!(
        form.validate(),
        vec![
            FieldError::Required { field: "Title" },
            FieldError::Required { field: "name" },
            FieldError::TooShort {
                field: "ref",
                min: 4
            },
            FieldError::InvalidSiret { field: "idprof3" },
            FieldError::TooLong {
                field: "customerAccount",
                max: 10
            },
            FieldError::TooLong {
                field: "supplierAccount",
                max: 10
            },
        ]
    );
}

#[rstest]
#[case("ABCD", true)]
#[case("ABCDEFGHIJKLM", true)] // 13 characters
#[case("ABCDEFGHIJKLMN", false)] // 14 characters
#[case("  ABCD  ", true)]
#[case("  AB  ", false)]
#[case("", false)]
fn test_ref_bounds(#[case] client_ref: &str, #[case] expected: bool) {
    let form = CompanyForm {
        client_ref: Some(client_ref.to_string()),
        ..CompanyForm::new(OrganizationKind::Company, "Acme")
    };
    assert_eq!(form.is_valid(), expected);
}

#[test]
fn test_errors_serialize_for_display() {
    let errors = CompanyForm::new(OrganizationKind::Company, "Acme").validate();
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "kind": "required", "field": "ref" }])
    );
    assert_eq!(errors[0].to_string(), "ref is required");
}

#[test]
fn test_normalized_form_stays_valid() {
    let form = CompanyForm {
        client_ref: Some(" clt001 ".to_string()),
        siret: Some("732 829 320 00074".to_string()),
        ..CompanyForm::new(OrganizationKind::Company, "Acme")
    };

    let normalized = form.normalized();
    assert!(normalized.is_valid());
    assert_eq!(normalized.client_ref.as_deref(), Some("CLT001"));
}
