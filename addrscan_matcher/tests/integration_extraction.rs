//! Integration tests for address extraction.
//!
//! These tests verify that:
//! - Well-formed addresses embedded in noisy notes are split into fields
//! - Every state matches by code and by full name
//! - ZIP codes are fixed-width (5 or 5+4 digits)
//! - Incomplete addresses yield nothing
//! - Several addresses come back in order of appearance

use addrscan_matcher::{AddressMatcher, AddressRecord, GrammarDef, US_STATES};

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn matcher() -> AddressMatcher {
    AddressMatcher::with_defaults().expect("default grammar should compile")
}

fn fields(record: &AddressRecord) -> (&str, &str, &str, &str) {
    (
        record.street_address.as_str(),
        record.city.as_str(),
        record.state.as_str(),
        record.zip_code.as_str(),
    )
}

#[test]
fn test_full_state_name_without_punctuation() {
    let records = matcher().extract("1234 Elm St Apt 56 Springfield Illinois 62704.");
    assert_eq!(records.len(), 1);
    assert_eq!(
        fields(&records[0]),
        ("1234 Elm St Apt 56", "Springfield", "Illinois", "62704")
    );
}

#[test]
fn test_state_code_glued_to_zip_plus4() {
    let records = matcher().extract("5678 Oak Ave Ste 12,Chicago IL60616-1234!");
    assert_eq!(records.len(), 1);
    assert_eq!(
        fields(&records[0]),
        ("5678 Oak Ave Ste 12", "Chicago", "IL", "60616-1234")
    );
}

#[test]
fn test_missing_state_and_zip_yields_nothing() {
    let m = matcher();
    let text = "Incorrect format without state or zip: 123 Fake St";
    assert!(m.extract(text).is_empty());
    assert!(m.extract_first(text).is_none());
}

#[test]
fn test_two_addresses_in_order() {
    let text = "Shipping problem from 9876 Pine Dr Los Angeles, California 90210 was noted. \
                Another report has 4567 Birch Ln, Denver CO 80014-5567.";
    let records = matcher().extract(text);
    assert_eq!(records.len(), 2);
    assert_eq!(
        fields(&records[0]),
        ("9876 Pine Dr", "Los Angeles", "California", "90210")
    );
    assert_eq!(
        fields(&records[1]),
        ("4567 Birch Ln", "Denver", "CO", "80014-5567")
    );
    assert!(records[0].end <= records[1].start);
}

#[test]
fn test_zip_plus4_is_split() {
    let records = matcher().extract("987 Maple Blvd, Austin, TX 73301-3212.");
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(fields(record), ("987 Maple Blvd", "Austin", "TX", "73301-3212"));
    assert_eq!(record.zip_base(), "73301");
    assert_eq!(record.zip_plus4(), Some("3212"));
}

#[test]
fn test_every_state_by_code_and_name() {
    let m = matcher();
    for state in &US_STATES {
        for spelling in [
            state.code.to_string(),
            state.name.to_string(),
            state.code.to_lowercase(),
            state.name.to_uppercase(),
        ] {
            let text = format!("Deliver to 42 Main St Springfield, {spelling} 12345 today");
            let records = m.extract(&text);
            assert_eq!(records.len(), 1, "no match for {spelling:?}");
            assert_eq!(records[0].state, spelling);
            assert_eq!(records[0].city, "Springfield");
            assert_eq!(records[0].state_identity(), Some(state));
        }
    }
}

#[test]
fn test_unknown_state_yields_nothing() {
    let m = matcher();
    assert!(m.extract("42 Main St Springfield ZZ 12345").is_empty());
    assert!(m.extract("42 Main St Springfield 62704").is_empty());
    assert!(m.extract("42 Main St Springfield, Indianapolis 46204").is_empty());
}

#[test]
fn test_zip_width_is_fixed() {
    let m = matcher();
    assert!(m.extract("12 Main St Albany NY 1220").is_empty());
    assert!(m.extract("12 Main St Albany NY 122071").is_empty());

    let records = m.extract("12 Main St Albany NY 12207-12345");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].zip_code, "12207");
}

#[test]
fn test_street_number_is_at_most_six_digits() {
    let m = matcher();
    assert!(m.extract("1234567 Main St Albany NY 12207").is_empty());
    assert_eq!(m.extract("123456 Main St Albany NY 12207").len(), 1);
}

#[test]
fn test_multi_word_state_and_city() {
    let m = matcher();
    let records = m.extract("12 Main St Albany New York 12207-1234");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].state, "New York");

    let records = m.extract("12 Main St Charleston West Virginia 25301");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].city, "Charleston");
    assert_eq!(records[0].state, "West Virginia");
}

#[test]
fn test_two_letter_code_needs_word_boundary() {
    let records = matcher().extract("12 Main St Indianapolis IN 46204");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].city, "Indianapolis");
    assert_eq!(records[0].state, "IN");
}

#[test]
fn test_street_name_runs_to_roadway_type() {
    let records = matcher().extract("1234 Martin Luther King Jr Blvd Atlanta GA 30303");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].street_name, "Martin Luther King Jr Blvd");
    assert_eq!(records[0].city, "Atlanta");

    let records = matcher().extract("42 foo Pine Rd Reno NV 89501");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].street_name, "foo Pine Rd");
    assert_eq!(records[0].city, "Reno");
}

#[test]
fn test_street_name_keeps_consecutive_roadway_types() {
    let m = matcher();

    let records = m.extract("123 Park Place Dr Springfield IL 62704");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].street_name, "Park Place Dr");
    assert_eq!(records[0].city, "Springfield");

    let records = m.extract("12 Cherry Lane Ct Reno NV 89501");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].street_name, "Cherry Lane Ct");
    assert_eq!(records[0].city, "Reno");

    let text = "Visit 123 Park Place Dr Springfield IL 62704 \
                then 12 Cherry Lane Ct, Reno, NV 89501.";
    let records = m.extract(text);
    let streets: Vec<_> = records.iter().map(|r| r.street_address.as_str()).collect();
    assert_eq!(streets, ["123 Park Place Dr", "12 Cherry Lane Ct"]);
}

#[test]
fn test_unit_forms() {
    let m = matcher();

    let records = m.extract("1 Elm St #4 Reno NV 89501");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].unit.as_deref(), Some("#4"));

    let records = m.extract("Stay at 7 Ocean Way Apt. 3 Miami FL 33101");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].street_address, "7 Ocean Way Apt. 3");

    let records = m.extract("100 Broadway Apt 5 Boston MA 02101");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].street_name, "Broadway");
    assert_eq!(records[0].unit.as_deref(), Some("Apt 5"));
    assert_eq!(records[0].city, "Boston");
}

#[test]
fn test_quoted_note_with_punctuated_suffix() {
    let records = matcher()
        .extract(r#"A note says "4321 Maple St., Suite 5B,SomeCity Kansas 12345" could be wrong."#);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].street_address, "4321 Maple St., Suite 5B");
    assert_eq!(records[0].street_name, "Maple St.");
    assert_eq!(records[0].unit.as_deref(), Some("Suite 5B"));
    assert_eq!(records[0].city, "SomeCity");
}

#[test]
fn test_line_breaks_between_addresses() {
    let text = "\n    Returned from 10 Pine Rd Reno NV 89501;\n    later moved to 20 Cedar Ct, Boise, Idaho 83702-1111.\n";
    let records = matcher().extract(text);
    let cities: Vec<_> = records.iter().map(|r| r.city.as_str()).collect();
    assert_eq!(cities, ["Reno", "Boise"]);
}

#[test]
fn test_non_ascii_text_never_panics() {
    let m = matcher();
    assert!(m.extract("Адрес: ул. Ленина 5, Москва").is_empty());
    let records = m.extract("Café note → 5 Elm St Reno NV 89501 ✓");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].city, "Reno");
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_custom_suffix_becomes_anchor() {
    let text = "77 Old Coast Hwy Santa Cruz CA 95060";

    let default_record = matcher().extract_first(text).expect("address should match");
    assert_eq!(default_record.street_name, "Old");

    let custom = AddressMatcher::new(&GrammarDef::default().with_street_suffix("Hwy"))
        .expect("custom grammar should compile");
    let record = custom.extract_first(text).expect("address should match");
    assert_eq!(record.street_name, "Old Coast Hwy");
    assert_eq!(record.city, "Santa Cruz");
}
