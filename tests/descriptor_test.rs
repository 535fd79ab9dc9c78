use chrono::NaiveDate;
use melt_the_code::domain::model::count_labels;
use melt_the_code::utils::validation::Validate;
use melt_the_code::{MeltError, ModuleDescriptor, Variant};

#[test]
fn test_every_variant_parses_and_validates() {
    for variant in Variant::ALL {
        let descriptor = variant.descriptor().unwrap();

        assert!(descriptor.validate().is_ok(), "{variant} failed validation");
        assert_eq!(descriptor.website, variant.website());
        assert_eq!(descriptor.license, "MIT");
        assert!(descriptor.copyright.ends_with("Mark Shaffer. All Rights Reserved."));
    }
}

#[test]
fn test_render_reproduces_compiled_text() {
    for variant in Variant::ALL {
        assert_eq!(variant.descriptor().unwrap().render(), variant.about_text());
    }
}

#[test]
fn test_deno_variant_is_prerelease() {
    let descriptor = Variant::Deno.descriptor().unwrap();

    assert_eq!(descriptor.title, "melt_the_code Deno Module");
    assert_eq!(descriptor.version, "v0.3.0-alpha");
    assert_eq!(
        descriptor.release_date,
        NaiveDate::from_ymd_opt(2022, 11, 10).unwrap()
    );
    assert!(descriptor.copyright.starts_with("© 2022"));
}

#[test]
fn test_json_export() {
    let descriptor = Variant::Cpp.descriptor().unwrap();
    let json = descriptor.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["title"], "melt_the_code C++ Module");
    assert_eq!(value["release_date"], "2023-02-18");
    assert_eq!(ModuleDescriptor::from_json(&json).unwrap(), descriptor);
}

#[test]
fn test_toml_export() {
    let descriptor = Variant::Web.descriptor().unwrap();
    let toml_text = descriptor.to_toml().unwrap();

    assert!(toml_text.contains("title = \"melt_the_code_web Module\""));
    assert!(toml_text.contains("website = \"https://codemelted.dev/modules/deno/melt_the_code\""));
    assert_eq!(ModuleDescriptor::from_toml(&toml_text).unwrap(), descriptor);
}

#[test]
fn test_import_rejects_invalid_website() {
    let json = r#"{
        "title": "melt_the_code",
        "version": "v0.1.0",
        "release_date": "2023-02-18",
        "website": "ftp://codemelted.dev",
        "license": "MIT",
        "copyright": "© 2023 Mark Shaffer. All Rights Reserved."
    }"#;

    let err = ModuleDescriptor::from_json(json).unwrap_err();
    assert!(matches!(err, MeltError::InvalidConfigValueError { .. }));
}

#[test]
fn test_import_rejects_malformed_documents() {
    assert!(matches!(
        ModuleDescriptor::from_json("{\"title\": 1}"),
        Err(MeltError::SerializationError(_))
    ));
    assert!(matches!(
        ModuleDescriptor::from_toml("title = "),
        Err(MeltError::TomlDeserializeError(_))
    ));
}

fn import_with(field: &str, value: &str) -> melt_the_code::Result<ModuleDescriptor> {
    let mut json = serde_json::to_value(Variant::Cpp.descriptor().unwrap()).unwrap();
    json[field] = serde_json::Value::String(value.to_string());
    ModuleDescriptor::from_json(&json.to_string())
}

fn assert_rejected(field: &str, value: &str) {
    let err = import_with(field, value).unwrap_err();
    assert!(
        matches!(err, MeltError::InvalidConfigValueError { field: ref name, .. } if name == field),
        "{field} = {value:?} was not rejected: {err:?}"
    );
}

#[test]
fn test_import_rejects_multiline_website() {
    assert_rejected("website", "https://codemelted.dev/\nLICENSE:  evil");
    assert_rejected("website", "https://codemelted.dev/\r\n");
}

#[test]
fn test_import_rejects_non_semver_version() {
    assert_rejected("version", "latest");
    assert_rejected("version", "v1.0");
    assert_rejected("version", "v0.1.0 (Released on 18 Feb 2023)");
}

#[test]
fn test_import_rejects_slash_in_license() {
    assert_rejected("license", "MIT/Apache-2.0");
}

#[test]
fn test_import_rejects_embedded_labels() {
    assert_rejected("title", "melt_the_code VERSION: v9.9.9");
    assert_rejected("copyright", "© 2023 Mark Shaffer. WEBSITE: elsewhere");
}

#[test]
fn test_accepted_import_renders_parseable_text() {
    let descriptor = import_with("version", "v1.2.3-beta.1").unwrap();
    let rendered = descriptor.render();

    assert!(count_labels(&rendered).iter().all(|(_, count)| *count == 1));
    assert_eq!(ModuleDescriptor::parse(&rendered).unwrap(), descriptor);
}
