use super::*;

#[test]
fn popular_course_names_are_distinct() {
    let courses = popular_courses();
    for (i, a) in courses.iter().enumerate() {
        for b in courses.iter().skip(i + 1) {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn popular_courses_fill_every_card_field() {
    for course in popular_courses() {
        assert!(!course.name.is_empty());
        assert!(!course.short_description.is_empty());
        assert!(!course.duration.is_empty());
        assert!(!course.level.is_empty());
        assert!(!course.icon.is_empty());
    }
}

#[test]
fn content_sections_are_populated() {
    assert!(!FEATURES.is_empty());
    assert!(!TESTIMONIALS.is_empty());
    assert!(!STATISTICS.is_empty());
    assert!(!VALUES.is_empty());
    assert!(!TEAM.is_empty());
    assert!(!TIMELINE.is_empty());
}
