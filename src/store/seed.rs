use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::model::person::Person;

pub const FIRST_NAMES: [&str; 26] = [
    "Arne", "Berta", "Cord", "Dagmar", "Ernst", "Frieda", "Günter", "Hanna", "Ingo", "Johanna",
    "Klaus", "Luise", "Martin", "Nadja", "Otto", "Patrizia", "Quirin", "Rebecca", "Stefan",
    "Tanja", "Uwe", "Veronika", "Walter", "Xaver", "Yvonne", "Zwantje",
];

pub const LAST_NAMES: [&str; 26] = [
    "Arndt", "Bauer", "Conrad", "Diehl", "Engel", "Fischer", "Graf", "Hoffmann", "Imhoff", "Jung",
    "Klein", "Lang", "Meier", "Neumann", "Olbrich", "Peters", "Quart", "Richter", "Schmidt",
    "Thormann", "Ulrich", "Vogel", "Wagner", "Xander", "Yakov", "Zander",
];

pub const EMAIL_PROVIDERS: [&str; 10] = [
    "gmail.com",
    "icloud.com",
    "outlook.com",
    "yahoo.com",
    "t-online.de",
    "gmx.de",
    "freenet.de",
    "mailbox.org",
    "yahoo.com",
    "web.de",
];

const SEED: u64 = 0;

/// Development fixture set: one person per name pair, emails rotating
/// through the provider list, phone numbers from a fixed seed. Ids are the
/// only non-deterministic part.
pub fn seed_people() -> Vec<Person> {
    let mut rng = StdRng::seed_from_u64(SEED);

    FIRST_NAMES
        .iter()
        .zip(LAST_NAMES.iter())
        .enumerate()
        .map(|(index, (first_name, last_name))| {
            let email = format!(
                "{}.{}@{}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                EMAIL_PROVIDERS[index % EMAIL_PROVIDERS.len()]
            );

            let phone = format!(
                "0{} {}-{}",
                rng.gen_range(1234..9999),
                rng.gen_range(100..999),
                rng.gen_range(10..9999)
            );

            Person::new(
                first_name.to_string(),
                last_name.to_string(),
                Some(email),
                Some(phone),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_one_person_per_name_pair() {
        let people = seed_people();

        assert_eq!(people.len(), FIRST_NAMES.len());

        assert_eq!(people[0].first_name, "Arne");
        assert_eq!(people[0].last_name, "Arndt");
        assert_eq!(people[0].email.as_deref(), Some("arne.arndt@gmail.com"));
    }

    #[test]
    fn email_provider_rotates_through_the_list() {
        let people = seed_people();

        // Person 10 wraps back to the first provider
        assert_eq!(
            people[10].email.as_deref(),
            Some("klaus.klein@gmail.com")
        );
    }

    #[test]
    fn fixture_set_is_deterministic_apart_from_ids() {
        let first_run = seed_people();
        let second_run = seed_people();

        for (first, second) in first_run.iter().zip(second_run.iter()) {
            assert_eq!(first.first_name, second.first_name);
            assert_eq!(first.last_name, second.last_name);
            assert_eq!(first.email, second.email);
            assert_eq!(first.phone, second.phone);
            assert_ne!(first.id, second.id);
        }
    }
}
