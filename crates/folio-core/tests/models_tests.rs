// Rust guideline compliant 2026-10-13

//! Unit tests for data models and validation.

use folio_core::{
    BlobRef, Certificate, Contact, Education, Error, Experience, Organization, Project, Record,
    Section,
};

fn valid_education() -> Education {
    Education {
        id: "edu-a1b2c3".to_string(),
        institution: "State University".to_string(),
        degree: "BSc".to_string(),
        field_of_study: "Computer Science".to_string(),
        start_date: "2016".to_string(),
        end_date: Some("2020".to_string()),
        subjects: vec!["Compilers".to_string()],
        ..Education::default()
    }
}

#[test]
fn test_section_round_trips_through_str() {
    for section in Section::ALL {
        assert_eq!(section.as_str().parse::<Section>().unwrap(), section);
    }
}

#[test]
fn test_section_aliases() {
    assert_eq!("Project".parse::<Section>().unwrap(), Section::Projects);
    assert_eq!("org".parse::<Section>().unwrap(), Section::Organizations);
    assert_eq!("certs".parse::<Section>().unwrap(), Section::Certificates);
    assert!("blog".parse::<Section>().is_err());
}

#[test]
fn test_section_file_names() {
    assert_eq!(Section::Experience.file_name(), "experience.jsonl");
    assert_eq!(Section::Contacts.file_name(), "contacts.jsonl");
}

#[test]
fn test_valid_record_passes() {
    assert!(valid_education().validate().is_ok());
}

#[test]
fn test_missing_id_fails() {
    let mut education = valid_education();
    education.id.clear();
    assert!(matches!(education.validate(), Err(Error::InvalidRecord(_))));
}

#[test]
fn test_required_fields() {
    let mut education = valid_education();
    education.degree = " ".to_string();
    let err = education.validate().unwrap_err();
    assert!(err.to_string().contains("degree"));
}

#[test]
fn test_invalid_dates_fail_validation() {
    let mut education = valid_education();
    education.end_date = Some("after graduation".to_string());
    let err = education.validate().unwrap_err();
    assert!(err.to_string().contains("end_date"));
}

#[test]
fn test_url_fields_are_checked() {
    let project = Project {
        id: "prj-a1b2c3".to_string(),
        title: "Site".to_string(),
        link: "ftp://example.com".to_string(),
        ..Project::default()
    };
    assert!(project.validate().is_err());

    let contact = Contact {
        id: "cnt-a1b2c3".to_string(),
        platform: "Email".to_string(),
        url: "mailto:jane@example.com".to_string(),
        ..Contact::default()
    };
    assert!(contact.validate().is_ok());
}

#[test]
fn test_certificate_issue_date_is_optional_but_checked() {
    let mut certificate = Certificate {
        id: "crt-a1b2c3".to_string(),
        title: "Cloud Practitioner".to_string(),
        issuer: "AWS".to_string(),
        ..Certificate::default()
    };
    assert!(certificate.validate().is_ok());
    certificate.issue_date = "2023-13".to_string();
    assert!(certificate.validate().is_err());
}

#[test]
fn test_blank_end_date_deserializes_as_absent() {
    let json = r#"{"name":"Robotics Club","start_date":"2018","end_date":"  "}"#;
    let organization: Organization = serde_json::from_str(json).unwrap();
    assert_eq!(organization.end_date, None);
    assert_eq!(organization.timeframe(), Some(("2018", None)));
}

#[test]
fn test_project_timeframe_requires_start() {
    let mut project = Project {
        title: "Site".to_string(),
        end_date: Some("2024".to_string()),
        ..Project::default()
    };
    assert_eq!(project.timeframe(), None);
    project.start_date = Some("2023".to_string());
    assert_eq!(project.timeframe(), Some(("2023", Some("2024"))));
}

#[test]
fn test_set_image_returns_previous() {
    let mut experience = Experience::default();
    let first = BlobRef {
        url: "/media/a-logo.png".to_string(),
        key: "a-logo.png".to_string(),
    };
    assert_eq!(experience.set_image(Some(first.clone())).unwrap(), None);
    assert_eq!(experience.set_image(None).unwrap(), Some(first));
}

#[test]
fn test_contacts_cannot_carry_images() {
    let mut contact = Contact::default();
    assert!(contact.set_image(None).is_err());
}

#[test]
fn test_display_fields_join_lists() {
    let fields = valid_education().display_fields();
    assert!(fields.contains(&("Subjects", "Compilers".to_string())));
}
