//! Seed data
//!
//! The fixed fallback dataset served when no database is configured, and a
//! deterministic generator for bulk-seeding an empty store.

use crate::models::Advocate;

/// Degrees assigned by the synthetic generator
pub const DEGREES: [&str; 7] = ["MD", "PhD", "MSW", "DO", "RN", "NP", "PsyD"];

/// Specialty catalogue
pub const SPECIALTIES: [&str; 26] = [
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "Suicide History/Attempts",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Men's issues",
    "Relationship Issues (family, friends, couple, etc)",
    "Trauma & PTSD",
    "Personality disorders",
    "Personal growth",
    "Substance use/abuse",
    "Pediatrics",
    "Women's issues (post-partum, infertility, family planning)",
    "Chronic pain",
    "Weight loss & nutrition",
    "Eating disorders",
    "Diabetic Diet and nutrition",
    "Coaching (leadership, career, academic and wellness)",
    "Life coaching",
    "Obsessive-compulsive disorders",
    "Neuropsychological evaluations & testing (ADHD testing)",
    "Attention and Hyperactivity (ADHD)",
    "Sleep issues",
    "Schizophrenia and psychotic disorders",
    "Learning disorders",
    "Domestic abuse",
];

const FIRST_NAMES: [&str; 16] = [
    "Olivia", "Liam", "Emma", "Noah", "Ava", "Ethan", "Sophia", "Mason", "Isabella", "Lucas",
    "Mia", "Logan", "Charlotte", "Elijah", "Harper", "Oliver",
];

const LAST_NAMES: [&str; 16] = [
    "Anderson", "Baker", "Carter", "Diaz", "Evans", "Foster", "Garcia", "Hughes", "Irwin",
    "Jenkins", "Kim", "Lopez", "Morgan", "Nguyen", "Ortiz", "Patel",
];

const CITIES: [&str; 12] = [
    "Seattle", "Denver", "Boston", "Atlanta", "Portland", "Miami", "Detroit", "Nashville",
    "Baltimore", "Memphis", "Louisville", "Milwaukee",
];

fn advocate(
    first_name: &str,
    last_name: &str,
    city: &str,
    degree: &str,
    specialties: &[&str],
    years_of_experience: u32,
    phone_number: i64,
) -> Advocate {
    Advocate {
        id: 0,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        city: city.to_string(),
        degree: degree.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        years_of_experience,
        phone_number,
    }
}

/// The fallback dataset, with ids 1..=15 in list order.
pub fn fallback_advocates() -> Vec<Advocate> {
    let mut advocates = vec![
        advocate(
            "John",
            "Doe",
            "New York",
            "MD",
            &["Bipolar", "LGBTQ"],
            10,
            5551234567,
        ),
        advocate(
            "Jane",
            "Smith",
            "Los Angeles",
            "PhD",
            &["Trauma & PTSD", "Personal growth"],
            8,
            5559876543,
        ),
        advocate(
            "Alice",
            "Johnson",
            "Chicago",
            "MSW",
            &["Pediatrics", "Learning disorders"],
            5,
            5554567890,
        ),
        advocate(
            "Michael",
            "Brown",
            "Houston",
            "MD",
            &["Men's issues", "Substance use/abuse", "Chronic pain"],
            12,
            5556543210,
        ),
        advocate(
            "Emily",
            "Davis",
            "Phoenix",
            "PhD",
            &["Eating disorders", "Weight loss & nutrition"],
            7,
            5553210987,
        ),
        advocate(
            "Chris",
            "Martinez",
            "Philadelphia",
            "MSW",
            &["Sleep issues"],
            9,
            5557890123,
        ),
        advocate(
            "Jessica",
            "Taylor",
            "San Antonio",
            "MD",
            &["Medication/Prescribing", "Bipolar"],
            11,
            5554561234,
        ),
        advocate(
            "David",
            "Harris",
            "San Diego",
            "PhD",
            &["Personality disorders", "Life coaching"],
            6,
            5557896543,
        ),
        advocate(
            "Laura",
            "Clark",
            "Dallas",
            "MSW",
            &["Relationship Issues (family, friends, couple, etc)"],
            4,
            5550123456,
        ),
        advocate(
            "Daniel",
            "Lewis",
            "San Jose",
            "MD",
            &["Attention and Hyperactivity (ADHD)", "Pediatrics"],
            13,
            5553217654,
        ),
        advocate(
            "Sarah",
            "Lee",
            "Austin",
            "PhD",
            &["Obsessive-compulsive disorders"],
            10,
            5551238765,
        ),
        advocate(
            "James",
            "King",
            "Jacksonville",
            "MSW",
            &["Suicide History/Attempts", "Trauma & PTSD"],
            5,
            5556540987,
        ),
        advocate(
            "Megan",
            "Green",
            "San Francisco",
            "MD",
            &["Diabetic Diet and nutrition", "Chronic pain"],
            14,
            5558762345,
        ),
        advocate(
            "Joshua",
            "Walker",
            "Columbus",
            "PhD",
            &["Schizophrenia and psychotic disorders"],
            9,
            5553214567,
        ),
        advocate(
            "Amanda",
            "Hall",
            "Fort Worth",
            "MSW",
            &["Domestic abuse", "Personal growth"],
            3,
            5559873456,
        ),
    ];

    for (i, a) in advocates.iter_mut().enumerate() {
        a.id = i as i64 + 1;
    }
    advocates
}

/// Generates `count` advocates deterministically from the catalogues.
///
/// Each record gets 1-5 distinct specialties, 1-30 years of experience and
/// a 10-digit phone number in `2000000000..=9999999999`. Ids are 1..=count.
pub fn synthetic_advocates(count: usize) -> Vec<Advocate> {
    (0..count)
        .map(|i| {
            let specialty_count = 1 + i % 5;
            let start = (i * 7) % SPECIALTIES.len();
            // Stride 3 is coprime with 26, so picks never repeat
            let specialties = (0..specialty_count)
                .map(|k| SPECIALTIES[(start + k * 3) % SPECIALTIES.len()].to_string())
                .collect();

            Advocate {
                id: i as i64 + 1,
                first_name: FIRST_NAMES[i % FIRST_NAMES.len()].to_string(),
                last_name: LAST_NAMES[(i / FIRST_NAMES.len() + i * 5) % LAST_NAMES.len()]
                    .to_string(),
                city: CITIES[(i * 11) % CITIES.len()].to_string(),
                degree: DEGREES[i % DEGREES.len()].to_string(),
                specialties,
                years_of_experience: 1 + ((i * 13) % 30) as u32,
                phone_number: 2_000_000_000 + (i as i64 * 7_919) % 8_000_000_000,
            }
        })
        .collect()
}
