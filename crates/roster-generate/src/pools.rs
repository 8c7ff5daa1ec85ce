//! Fixed value pools for synthetic employees.
//!
//! "Lisa" appears twice in [`FIRST_NAMES`]; the duplicate is part of the
//! sampling distribution and must stay.

pub const FIRST_NAMES: [&str; 30] = [
    "John",
    "Sarah",
    "Michael",
    "Emily",
    "David",
    "Lisa",
    "Robert",
    "Jennifer",
    "Christopher",
    "Amanda",
    "James",
    "Jessica",
    "William",
    "Ashley",
    "Daniel",
    "Stephanie",
    "Matthew",
    "Nicole",
    "Anthony",
    "Elizabeth",
    "Joshua",
    "Helen",
    "Andrew",
    "Deborah",
    "Ryan",
    "Lisa",
    "Jacob",
    "Nancy",
    "Gary",
    "Karen",
];

pub const LAST_NAMES: [&str; 30] = [
    "Smith",
    "Johnson",
    "Brown",
    "Davis",
    "Wilson",
    "Anderson",
    "Taylor",
    "Martinez",
    "Garcia",
    "Rodriguez",
    "Miller",
    "Moore",
    "Jackson",
    "Martin",
    "Lee",
    "Thompson",
    "White",
    "Harris",
    "Clark",
    "Lewis",
    "Robinson",
    "Walker",
    "Young",
    "Allen",
    "King",
    "Wright",
    "Scott",
    "Torres",
    "Nguyen",
    "Hill",
];

pub const DEPARTMENTS: [&str; 8] = [
    "Engineering",
    "Marketing",
    "HR",
    "Finance",
    "Sales",
    "Operations",
    "IT",
    "Legal",
];

/// Youngest generated age.
pub const MIN_AGE: i32 = 22;
/// Number of distinct ages drawn, starting at [`MIN_AGE`].
pub const AGE_SPAN: i32 = 58;
/// Lower bound of generated salaries.
pub const MIN_SALARY: f64 = 30_000.0;
/// Width of the generated salary range.
pub const SALARY_SPAN: f64 = 120_000.0;
