//! # 简历解析测试

use crate::*;

const SAMPLE: &str = "
    ★ BIODATA ★
    • Name: Ahmed Raza Khan
    • Gender: Male
    • Age: 29 years
    • Height: 5 feet 9 inches
    • Marital Status: Single
    • Cast: Rajput
    • Education: MBA
    • Post: Finance
    • Occupation:   Banker at HBL
    • City: Lahore
    • Polygamy: No
    - Requirements for Match: 24 to 28
    - Partner Complexion: Fair
";

#[test]
fn parse_is_deterministic() {
    assert_eq!(parse_profile_text(SAMPLE), parse_profile_text(SAMPLE));
}

#[test]
fn age_line_sets_only_age() {
    let parsed = parse_profile_text("Age: 27");
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.number(ProfileField::Age), Some(27));
}

#[test]
fn partner_range_from_requirements() {
    let parsed = parse_profile_text("Requirements for Match: 21-30");
    assert_eq!(parsed.number(ProfileField::PartnerAgeFrom), Some(21));
    assert_eq!(parsed.number(ProfileField::PartnerAgeTo), Some(30));
    assert!(!parsed.contains(ProfileField::Age));
}

#[test]
fn height_is_normalized_or_kept() {
    let h = |raw: &str| parse_profile_text(raw).text(ProfileField::Height).map(str::to_string);
    assert_eq!(h("Height: 5'3").as_deref(), Some("5'3"));
    assert_eq!(h("Height: 6 2").as_deref(), Some("6'2"));
    assert_eq!(h("Height: tall").as_deref(), Some("tall"));
}

#[test]
fn name_is_split() {
    let parsed = parse_profile_text("Name: Ahmed Raza Khan");
    assert_eq!(parsed.text(ProfileField::FirstName), Some("Ahmed"));
    assert_eq!(parsed.text(ProfileField::LastName), Some("Raza Khan"));
    assert_eq!(parsed.len(), 2);
}

#[test]
fn full_sample_is_parsed() {
    let parsed = parse_profile_text(SAMPLE);
    assert_eq!(parsed.text(ProfileField::FirstName), Some("Ahmed"));
    assert_eq!(parsed.text(ProfileField::Gender), Some("male"));
    assert_eq!(parsed.number(ProfileField::Age), Some(29));
    assert_eq!(parsed.text(ProfileField::Height), Some("5'9"));
    assert_eq!(parsed.text(ProfileField::MaritalStatus), Some("never_married"));
    assert_eq!(parsed.text(ProfileField::Caste), Some("Rajput"));
    assert_eq!(parsed.text(ProfileField::FieldOfStudy), Some("Finance"));
    assert_eq!(parsed.text(ProfileField::Occupation), Some("Banker at HBL"));
    assert_eq!(parsed.text(ProfileField::Polygamy), Some("no"));
    assert_eq!(parsed.number(ProfileField::PartnerAgeFrom), Some(24));
    assert_eq!(parsed.number(ProfileField::PartnerAgeTo), Some(28));
    assert_eq!(parsed.text(ProfileField::PartnerReligiousValues), Some("Fair"));
    assert!(!parsed.contains(ProfileField::About));
}

#[test]
fn synonyms_follow_priority() {
    let parsed = parse_profile_text("Cast: Arain\nCaste: Jatt");
    assert_eq!(parsed.text(ProfileField::Caste), Some("Jatt"));

    let parsed = parse_profile_text("Cast: Arain");
    assert_eq!(parsed.text(ProfileField::Caste), Some("Arain"));
}

#[test]
fn last_duplicate_label_wins() {
    let parsed = parse_profile_text("City: Karachi\nCITY: Lahore");
    assert_eq!(parsed.text(ProfileField::City), Some("Lahore"));
}

#[test]
fn garbage_yields_nothing() {
    assert!(parse_profile_text("").is_empty());
    assert!(parse_profile_text("hello world\n\n   \n***").is_empty());
    assert!(parse_profile_text("Age: unknown").is_empty());
    assert!(parse_profile_text("Favourite colour: blue").is_empty());
}

#[test]
fn merge_overwrites_only_present_keys() {
    let mut form = ProfileFieldMap::new();
    form.set_text(ProfileField::City, "Karachi");
    form.set_text(ProfileField::About, "Typed by hand");

    let parsed = parse_profile_text("City: Lahore\nAge: 27");
    parsed.merge_into(&mut form);
    let once = form.clone();
    parsed.merge_into(&mut form);

    assert_eq!(form, once);
    assert_eq!(form.text(ProfileField::City), Some("Lahore"));
    assert_eq!(form.text(ProfileField::About), Some("Typed by hand"));
    assert_eq!(form.number(ProfileField::Age), Some(27));
}

#[test]
fn custom_table_remaps_labels() {
    let mut table = LabelTable::default();
    table.set_synonyms(
        LabelTarget::Field(ProfileField::PartnerReligiousValues, FieldKind::Text),
        &["religious values"],
    );
    table.remove(LabelTarget::Field(ProfileField::FieldOfStudy, FieldKind::Text));
    let parser = BiodataParser::with_table(table);

    let parsed = parser.parse("Partner Complexion: Fair\nPost: Finance\nReligious   Values: Moderate");
    assert_eq!(parsed.text(ProfileField::PartnerReligiousValues), Some("Moderate"));
    assert!(!parsed.contains(ProfileField::FieldOfStudy));
}

#[test]
fn entries_are_profile_bytes() {
    let parsed = parse_profile_text("Name: Sana\nAge: 26\nGender: Female");
    assert_eq!(
        parsed.to_entries(),
        vec![
            (ProfileField::FirstName, b"Sana".to_vec()),
            (ProfileField::Gender, b"female".to_vec()),
            (ProfileField::Age, b"26".to_vec()),
        ]
    );
}

#[test]
fn serializes_with_form_keys() {
    let parsed = parse_profile_text("Name: Sana\nAge: 26");
    let json = serde_json::to_string(&parsed).unwrap();
    assert_eq!(json, r#"{"first_name":"Sana","age":26}"#);
}

#[test]
fn keywords_do_not_match_inside_words() {
    let parsed = parse_profile_text("Gender: Roman Catholic\nPolygamy: Unknown");
    assert_eq!(parsed.text(ProfileField::Gender), Some("Roman Catholic"));
    assert_eq!(parsed.text(ProfileField::Polygamy), Some("Unknown"));
}

#[test]
fn range_ignores_longer_numbers() {
    let parsed = parse_profile_text("Requirements for Match: 121-130");
    assert!(!parsed.contains(ProfileField::PartnerAgeFrom));
    assert!(!parsed.contains(ProfileField::PartnerAgeTo));

    let parsed = parse_profile_text("Requirements for Match: 21to30");
    assert_eq!(parsed.number(ProfileField::PartnerAgeFrom), Some(21));
    assert_eq!(parsed.number(ProfileField::PartnerAgeTo), Some(30));
}

#[test]
fn dot_leaders_are_not_part_of_value() {
    let parsed = parse_profile_text("Name..... Ahmed Khan\nCity.......Lahore");
    assert_eq!(parsed.text(ProfileField::FirstName), Some("Ahmed"));
    assert_eq!(parsed.text(ProfileField::LastName), Some("Khan"));
    assert_eq!(parsed.text(ProfileField::City), Some("Lahore"));
}
