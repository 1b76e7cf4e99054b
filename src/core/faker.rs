//! Fabricated US-style names, places and contact details.
//!
//! Every value is drawn from the caller's RNG, so a seeded generator yields the
//! same rows on every run. None of the word lists contain a single quote,
//! which keeps the naive SQL quoting valid.

use rand::seq::SliceRandom;
use rand::Rng;

pub const PHONE_MASK: &str = "(###) ###-####";
pub const ZIP_MASK: &str = "#####";

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
    "Sarah", "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty",
    "Mark", "Sandra", "Steven", "Ashley", "Andrew", "Emily", "Joshua", "Donna", "Kevin",
    "Michelle", "Brian", "Carol", "George", "Amanda",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore",
    "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez", "Clark",
    "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright", "Scott",
    "Torres", "Nguyen", "Hill", "Flores", "Green",
];

const CITY_PREFIXES: &[&str] = &["North", "East", "West", "South", "New", "Lake", "Port"];

const CITY_SUFFIXES: &[&str] = &[
    "town", "ton", "land", "ville", "berg", "burgh", "borough", "bury", "view", "port",
    "mouth", "stad", "furt", "chester", "fort", "haven", "side", "shire",
];

const STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
    "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire",
    "New Jersey", "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio",
    "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
    "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington", "West Virginia",
    "Wisconsin", "Wyoming",
];

const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Way", "Boulevard",
    "Terrace", "Parkway", "Circle", "Square", "Trail", "Crossing",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "PLC", "Ltd"];

const FREE_EMAIL_DOMAINS: &[&str] = &[
    "example.com", "example.net", "example.org", "gmail.com", "yahoo.com", "hotmail.com",
];

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &'static [&'static str]) -> &'static str {
    // 詞庫皆為非空常數
    words.choose(rng).copied().unwrap_or_default()
}

/// 把 mask 裡每個 `#` 換成一個隨機數字
pub fn numerify<R: Rng + ?Sized>(rng: &mut R, mask: &str) -> String {
    mask.chars()
        .map(|c| match c {
            '#' => char::from(b'0' + rng.gen_range(0..10u8)),
            other => other,
        })
        .collect()
}

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, FIRST_NAMES)
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, LAST_NAMES)
}

pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..4) {
        0 => format!(
            "{} {}{}",
            pick(rng, CITY_PREFIXES),
            first_name(rng),
            pick(rng, CITY_SUFFIXES)
        ),
        1 => format!("{} {}", pick(rng, CITY_PREFIXES), first_name(rng)),
        2 => format!("{}{}", first_name(rng), pick(rng, CITY_SUFFIXES)),
        _ => format!("{}{}", last_name(rng), pick(rng, CITY_SUFFIXES)),
    }
}

pub fn state<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, STATES).to_string()
}

pub fn street_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let building = rng.gen_range(100..100_000u32);
    let name = if rng.gen_bool(0.5) {
        first_name(rng)
    } else {
        last_name(rng)
    };
    format!("{} {} {}", building, name, pick(rng, STREET_SUFFIXES))
}

pub fn zipcode<R: Rng + ?Sized>(rng: &mut R) -> String {
    numerify(rng, ZIP_MASK)
}

pub fn company<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("{} {}", last_name(rng), pick(rng, COMPANY_SUFFIXES)),
        1 => format!("{}-{}", last_name(rng), last_name(rng)),
        _ => format!(
            "{}, {} and {}",
            last_name(rng),
            last_name(rng),
            last_name(rng)
        ),
    }
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = first_name(rng).to_ascii_lowercase();
    let last = last_name(rng).to_ascii_lowercase();
    let domain = pick(rng, FREE_EMAIL_DOMAINS);
    match rng.gen_range(0..3) {
        0 => format!("{}.{}@{}", first, last, domain),
        1 => format!("{}{}@{}", &first[..1], last, domain),
        _ => format!("{}{}@{}", last, rng.gen_range(1..100u8), domain),
    }
}

pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    numerify(rng, PHONE_MASK)
}
