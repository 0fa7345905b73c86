//! Fixed marketing content for the homepage and about page.
//!
//! Everything here is display data assembled at construction and never
//! mutated; nothing is fetched. The popular-course cards reuse the wire
//! [`Course`] shape so the marketing actions can hand a course straight to
//! the contact route.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::net::types::Course;

/// A selling point shown in the homepage feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A quote shown in the homepage testimonial strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

/// A staff bio for the about page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

/// A headline number for the statistics band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Statistic {
    pub value: &'static str,
    pub label: &'static str,
}

/// One milestone on the about-page timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A core value shown on the about page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "school",
        title: "Expert Faculty",
        description: "Learn from industry professionals with years of hands-on experience.",
    },
    Feature {
        icon: "work",
        title: "Job Assistance",
        description: "Dedicated placement cell with resume reviews and mock interviews.",
    },
    Feature {
        icon: "devices",
        title: "Hands-on Projects",
        description: "Every course ends with a portfolio project reviewed by mentors.",
    },
    Feature {
        icon: "schedule",
        title: "Flexible Batches",
        description: "Weekday, weekend, and evening batches to fit around your job.",
    },
    Feature {
        icon: "verified",
        title: "Certification",
        description: "Industry-recognized certificates awarded on course completion.",
    },
    Feature {
        icon: "groups",
        title: "Small Class Sizes",
        description: "Capped batch sizes so every student gets mentor attention.",
    },
];

/// Courses pinned to the homepage. The full catalog lives behind the course
/// endpoint; these cards are the marketing subset.
pub fn popular_courses() -> Vec<Course> {
    vec![
        Course {
            name: "Full Stack Web Development".to_owned(),
            short_description: "Build modern web applications end to end with JavaScript, \
                                Node.js, and React."
                .to_owned(),
            duration: "6 months".to_owned(),
            level: "Beginner to Advanced".to_owned(),
            icon: "code".to_owned(),
        },
        Course {
            name: "Data Science & Analytics".to_owned(),
            short_description: "Python, statistics, and machine learning applied to real \
                                datasets."
                .to_owned(),
            duration: "8 months".to_owned(),
            level: "Intermediate".to_owned(),
            icon: "analytics".to_owned(),
        },
        Course {
            name: "Digital Marketing".to_owned(),
            short_description: "SEO, paid campaigns, and content strategy with live accounts."
                .to_owned(),
            duration: "4 months".to_owned(),
            level: "Beginner".to_owned(),
            icon: "campaign".to_owned(),
        },
        Course {
            name: "Cloud Computing".to_owned(),
            short_description: "Deploy and operate production workloads on AWS and Kubernetes."
                .to_owned(),
            duration: "5 months".to_owned(),
            level: "Intermediate".to_owned(),
            icon: "cloud".to_owned(),
        },
    ]
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The full stack course took me from zero to a developer job in seven months. \
                The mentors never let a doubt sit overnight.",
        author: "Priya Sharma",
        role: "Software Engineer",
    },
    Testimonial {
        quote: "Placement support was real, not a brochure line. Three interviews in my final \
                month, two offers.",
        author: "Marcus Chen",
        role: "Data Analyst",
    },
    Testimonial {
        quote: "I switched from accounts to digital marketing while working full time. The \
                weekend batch made it possible.",
        author: "Fatima Noor",
        role: "Marketing Specialist",
    },
];

pub const STATISTICS: &[Statistic] = &[
    Statistic {
        value: "500+",
        label: "Students Trained",
    },
    Statistic {
        value: "95%",
        label: "Placement Rate",
    },
    Statistic {
        value: "50+",
        label: "Expert Trainers",
    },
    Statistic {
        value: "10+",
        label: "Years of Experience",
    },
];

pub const VALUES: &[ValueItem] = &[
    ValueItem {
        icon: "star",
        title: "Excellence",
        description: "Courses are rebuilt every year against what employers actually hire for.",
    },
    ValueItem {
        icon: "handshake",
        title: "Integrity",
        description: "Honest admissions counselling, transparent fees, no inflated promises.",
    },
    ValueItem {
        icon: "lightbulb",
        title: "Innovation",
        description: "Project-first teaching with the tools used in industry today.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Dr. Anita Desai",
        role: "Founder & Director",
        bio: "Former university professor who left academia to close the gap between degrees \
              and employable skills.",
    },
    TeamMember {
        name: "Rahul Verma",
        role: "Head of Training",
        bio: "Fifteen years building engineering teams; designs the curriculum and mentors the \
              mentors.",
    },
    TeamMember {
        name: "Sofia Alvarez",
        role: "Placement Lead",
        bio: "Runs the hiring-partner network and every student's interview preparation.",
    },
];

pub const TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        year: "2014",
        title: "Founded",
        description: "Opened with one classroom and a single web development batch.",
    },
    TimelineEvent {
        year: "2017",
        title: "Placement Cell",
        description: "Formal placement partnerships signed with the first twenty companies.",
    },
    TimelineEvent {
        year: "2020",
        title: "Online Programs",
        description: "Every course made available remotely with live instruction.",
    },
    TimelineEvent {
        year: "2023",
        title: "New Campus",
        description: "Moved to the Tech City campus with dedicated project labs.",
    },
];
