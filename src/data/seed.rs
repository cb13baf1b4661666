use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::SqliteConnection;

use crate::data::models::{ApiError, NewWordlist, Role};
use crate::data::repositories::{UserRepository, WordlistRepository};

const DEFAULT_PASSWORD: &str = "password123";

const USERS: &[(&str, &str, Role)] = &[
    ("admin@school.edu", "Admin User", Role::Admin),
    ("teacher@school.edu", "Teacher User", Role::Teacher),
    ("student@school.edu", "Student User", Role::Student),
    ("student2@school.edu", "Student Two", Role::Student),
];

struct SeedList {
    name: &'static str,
    description: &'static str,
    words: [&'static str; 10],
    assigned: &'static [i32],
    day: u32,
}

const WORDLISTS: &[SeedList] = &[
    SeedList {
        name: "Basic Words",
        description: "Common everyday words for beginners",
        words: ["apple", "banana", "cherry", "date", "elderberry", "fig", "grape", "honey", "ice", "jam"],
        assigned: &[3],
        day: 1,
    },
    SeedList {
        name: "Advanced Vocabulary",
        description: "Challenging words for advanced learners",
        words: [
            "ubiquitous", "serendipity", "ephemeral", "quintessential", "labyrinthine",
            "perspicacious", "pulchritude", "ebullient", "mellifluous", "quiescent",
        ],
        assigned: &[],
        day: 15,
    },
    SeedList {
        name: "Week 1: Colors & Shapes",
        description: "Basic colors and shapes vocabulary",
        words: ["red", "blue", "green", "yellow", "orange", "purple", "circle", "square", "triangle", "rectangle"],
        assigned: &[3, 4],
        day: 20,
    },
    SeedList {
        name: "Week 2: Animals",
        description: "Common animal names",
        words: ["dog", "cat", "bird", "fish", "horse", "cow", "pig", "sheep", "chicken", "duck"],
        assigned: &[3, 4],
        day: 21,
    },
    SeedList {
        name: "Week 3: Family",
        description: "Family member vocabulary",
        words: ["mother", "father", "brother", "sister", "grandmother", "grandfather", "aunt", "uncle", "cousin", "baby"],
        assigned: &[3, 4],
        day: 22,
    },
    SeedList {
        name: "Week 4: Food",
        description: "Common food items",
        words: ["bread", "milk", "cheese", "butter", "egg", "rice", "pasta", "soup", "salad", "fruit"],
        assigned: &[3, 4],
        day: 23,
    },
    SeedList {
        name: "Week 5: Numbers",
        description: "Numbers and counting",
        words: ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"],
        assigned: &[3, 4],
        day: 24,
    },
];

fn october(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Seeds default accounts and word lists into an empty database.
/// Returns false when users already exist.
pub fn seed_if_empty(conn: &mut SqliteConnection) -> Result<bool, ApiError> {
    if UserRepository::count(conn)? > 0 {
        return Ok(false);
    }

    log::info!("Seeding database...");
    let password_hash = UserRepository::hash_password(DEFAULT_PASSWORD)?;
    let now = Utc::now().naive_utc();

    let mut teacher_id = 0;
    for (email, name, role) in USERS {
        let user = UserRepository::create_user(conn, email, name, *role, &password_hash, now)?;
        if *role == Role::Teacher {
            teacher_id = user.user_id;
        }
    }

    for list in WORDLISTS {
        WordlistRepository::create(
            conn,
            &NewWordlist {
                name: list.name,
                description: Some(list.description),
                words: serde_json::to_string(&list.words)?,
                assigned_students: serde_json::to_string(list.assigned)?,
                created_by: teacher_id,
                created_at: october(list.day),
            },
        )?;
    }

    log::info!(
        "Seeded {} users and {} word lists",
        USERS.len(),
        WORDLISTS.len()
    );
    Ok(true)
}
