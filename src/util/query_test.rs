use super::*;

// =============================================================
// encode_component
// =============================================================

#[test]
fn unreserved_characters_pass_through() {
    assert_eq!(encode_component("Abc-123._~"), "Abc-123._~");
}

#[test]
fn spaces_and_ampersands_are_encoded() {
    assert_eq!(
        encode_component("Data Science & Analytics"),
        "Data%20Science%20%26%20Analytics"
    );
}

#[test]
fn multibyte_characters_are_encoded_per_byte() {
    assert_eq!(encode_component("café"), "caf%C3%A9");
}

// =============================================================
// contact_href
// =============================================================

#[test]
fn contact_href_carries_course_and_action() {
    assert_eq!(
        contact_href("Digital Marketing", "enroll"),
        "/contact?course=Digital%20Marketing&action=enroll"
    );
}

#[test]
fn contact_href_learn_more_action_is_literal() {
    assert_eq!(
        contact_href("Cloud Computing", "learn-more"),
        "/contact?course=Cloud%20Computing&action=learn-more"
    );
}
