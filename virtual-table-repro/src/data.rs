//! Synthetic person records, generated once at startup from a fixed seed.

use std::fmt;

use chrono::{DateTime, Utc};

/// 2024-01-01T00:00:00Z. Every generated timestamp falls in the year before it, so the
/// dataset is bit-identical across runs and machines.
const TIMESTAMP_ANCHOR_SECS: i64 = 1_704_067_200;

const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Marcus", "Elena", "Tobias", "Nadia", "Victor", "Priya", "Samuel", "Ingrid", "Mateo",
    "Clara", "Dmitri", "Yuki", "Omar", "Freya", "Lucas",
];

const LAST_NAMES: &[&str] = &[
    "Archer", "Bennett", "Castillo", "Dubois", "Eriksen", "Fontaine", "Grant", "Haines", "Ivanov",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Novak", "Okafor", "Petrov",
];

/// Relationship status of a person record. Renders lowercase, as stored in the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Relationship,
    Complicated,
    Single,
}

const STATUSES: [Status; 3] = [Status::Relationship, Status::Complicated, Status::Single];

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Relationship => "relationship",
            Status::Complicated => "complicated",
            Status::Single => "single",
        })
    }
}

/// One synthetic record. Identifiers restart at 1 on every nesting level.
#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub visits: u32,
    pub status: Status,
    pub progress: u32,
    pub created_at: DateTime<Utc>,
    pub sub_rows: Vec<Person>,
}

/// Builds the dataset.
///
/// `lens` sizes each nesting level: `lens[0]` top-level records, `lens[1]` children under
/// each of those, and so on. An empty slice produces no records. A given `(seed, lens)`
/// pair always produces the same dataset.
pub fn make_people(seed: u64, lens: &[usize]) -> Vec<Person> {
    let mut rng = Lcg::new(seed);
    make_level(&mut rng, lens)
}

fn make_level(rng: &mut Lcg, lens: &[usize]) -> Vec<Person> {
    let Some((&len, rest)) = lens.split_first() else {
        return Vec::new();
    };
    (0..len).map(|index| make_person(rng, index, rest)).collect()
}

fn make_person(rng: &mut Lcg, index: usize, rest: &[usize]) -> Person {
    Person {
        id: index as u64 + 1,
        first_name: pick(rng, FIRST_NAMES).to_string(),
        last_name: pick(rng, LAST_NAMES).to_string(),
        age: rng.gen_range_u32(0, 40),
        visits: rng.gen_range_u32(0, 1000),
        status: STATUSES[rng.gen_range_usize(0, STATUSES.len())],
        progress: rng.gen_range_u32(0, 101),
        created_at: created_at(rng),
        sub_rows: make_level(rng, rest),
    }
}

fn pick<'a>(rng: &mut Lcg, pool: &'a [&'a str]) -> &'a str {
    pool[rng.gen_range_usize(0, pool.len())]
}

fn created_at(rng: &mut Lcg) -> DateTime<Utc> {
    let back = rng.gen_range_u64(0, SECONDS_PER_YEAR) as i64;
    DateTime::from_timestamp(TIMESTAMP_ANCHOR_SECS - back, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Small deterministic PRNG so the dataset never depends on an external entropy source.
#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn for_each_person(people: &[Person], f: &mut impl FnMut(&Person)) {
        for person in people {
            f(person);
            for_each_person(&person.sub_rows, f);
        }
    }

    #[test]
    fn equal_seeds_reproduce_equal_datasets() {
        assert_eq!(make_people(7, &[10, 3]), make_people(7, &[10, 3]));
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(make_people(1, &[10]), make_people(2, &[10]));
    }

    #[test]
    fn lens_drive_the_nested_shape() {
        let people = make_people(42, &[4, 2, 1]);
        assert_eq!(people.len(), 4);
        for (i, person) in people.iter().enumerate() {
            assert_eq!(person.id, i as u64 + 1);
            assert_eq!(person.sub_rows.len(), 2);
            for (j, child) in person.sub_rows.iter().enumerate() {
                assert_eq!(child.id, j as u64 + 1);
                assert_eq!(child.sub_rows.len(), 1);
                assert!(child.sub_rows[0].sub_rows.is_empty());
            }
        }
    }

    #[test]
    fn empty_lens_make_no_rows() {
        assert!(make_people(5, &[]).is_empty());
    }

    #[test]
    fn field_domains_hold() {
        let anchor = DateTime::from_timestamp(TIMESTAMP_ANCHOR_SECS, 0).expect("anchor");
        let people = make_people(99, &[50, 2]);
        let mut seen = 0usize;
        for_each_person(&people, &mut |person| {
            seen += 1;
            assert!(person.age < 40);
            assert!(person.visits < 1000);
            assert!(person.progress <= 100);
            assert!(!person.first_name.is_empty());
            assert!(!person.last_name.is_empty());
            assert!(person.created_at <= anchor);
            assert!(person.created_at > anchor - Duration::days(365));
        });
        assert_eq!(seen, 50 + 50 * 2);
    }

    #[test]
    fn status_displays_lowercase() {
        assert_eq!(Status::Relationship.to_string(), "relationship");
        assert_eq!(Status::Complicated.to_string(), "complicated");
        assert_eq!(Status::Single.to_string(), "single");
    }
}
