use chrono::{Duration, NaiveDate};
use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, PostCode, StateAbbr, StreetName,
};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{DomainSuffix, FreeEmail};
use fake::faker::job::en::{Field, Title as JobTitle};
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName, Name, Suffix};
use fake::faker::phone_number::en::PhoneNumber;
use rand::{Rng, RngCore};

use contactgen_core::alias_email;

/// Semantic category of a column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    FirstName,
    MiddleName,
    LastName,
    FullName,
    Suffix,
    ZodiacSign,
    Word,
    AliasEmail,
    FreeEmail,
    PhoneNumber,
    JobTitle,
    JobArea,
    CompanyName,
    StreetAddress,
    City,
    StateAbbr,
    ZipCode,
    Country,
    Url,
    PastDate,
}

/// Per-row inputs shared by every column of the row.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub seed_email: &'a str,
    pub row_index: u64,
    /// Anchor that past dates are counted back from.
    pub base_date: NaiveDate,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(seed_email: &'a str, row_index: u64, base_date: NaiveDate) -> Self {
        Self {
            seed_email,
            row_index,
            base_date,
        }
    }
}

impl FieldKind {
    /// Produce a value of this category.
    ///
    /// Only [`FieldKind::AliasEmail`] can fail, when the seed has no `@`.
    pub fn generate(
        self,
        ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> contactgen_core::Result<String> {
        let value: String = match self {
            FieldKind::AliasEmail => return alias_email(ctx.seed_email, ctx.row_index),
            FieldKind::FirstName | FieldKind::MiddleName => FirstName().fake_with_rng(rng),
            FieldKind::LastName => LastName().fake_with_rng(rng),
            FieldKind::FullName => Name().fake_with_rng(rng),
            FieldKind::Suffix => Suffix().fake_with_rng(rng),
            FieldKind::ZodiacSign => pick(ZODIAC_SIGNS, rng).to_string(),
            FieldKind::Word => Word().fake_with_rng(rng),
            FieldKind::FreeEmail => FreeEmail().fake_with_rng(rng),
            FieldKind::PhoneNumber => PhoneNumber().fake_with_rng(rng),
            FieldKind::JobTitle => JobTitle().fake_with_rng(rng),
            FieldKind::JobArea => Field().fake_with_rng(rng),
            FieldKind::CompanyName => CompanyName().fake_with_rng(rng),
            FieldKind::StreetAddress => street_address(rng),
            FieldKind::City => CityName().fake_with_rng(rng),
            FieldKind::StateAbbr => StateAbbr().fake_with_rng(rng),
            FieldKind::ZipCode => PostCode().fake_with_rng(rng),
            FieldKind::Country => CountryName().fake_with_rng(rng),
            FieldKind::Url => url(rng),
            FieldKind::PastDate => past_date(ctx.base_date, rng),
        };
        Ok(value)
    }
}

const ZODIAC_SIGNS: &[&str] = &[
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

fn street_address(rng: &mut dyn RngCore) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    format!("{number} {street}")
}

fn url(rng: &mut dyn RngCore) -> String {
    let first: String = Word().fake_with_rng(rng);
    let second: String = Word().fake_with_rng(rng);
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    format!("https://{}-{}.{suffix}/", first.to_lowercase(), second.to_lowercase())
}

/// A day within the year before `base_date`, formatted as an en-US date.
fn past_date(base_date: NaiveDate, rng: &mut dyn RngCore) -> String {
    let offset = rng.random_range(1..=365_i64);
    let date = base_date - Duration::days(offset);
    date.format("%-m/%-d/%Y").to_string()
}

fn pick<'a>(values: &[&'a str], rng: &mut dyn RngCore) -> &'a str {
    values[rng.random_range(0..values.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn ctx() -> GeneratorContext<'static> {
        GeneratorContext {
            seed_email: "a@b.com",
            row_index: 7,
            base_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default(),
        }
    }

    #[test]
    fn alias_email_uses_row_index() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let value = FieldKind::AliasEmail.generate(&ctx(), &mut rng).unwrap();
        assert_eq!(value, "a+GoToDev-7@b.com");
    }

    #[test]
    fn alias_email_fails_without_at_sign() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let ctx = GeneratorContext {
            seed_email: "nope",
            ..ctx()
        };
        assert!(FieldKind::AliasEmail.generate(&ctx, &mut rng).is_err());
    }

    #[test]
    fn past_date_is_within_previous_year() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let base_date = ctx().base_date;
        for _ in 0..200 {
            let value = FieldKind::PastDate.generate(&ctx(), &mut rng).unwrap();
            let date = NaiveDate::parse_from_str(&value, "%m/%d/%Y").expect("en-US date");
            assert!(date < base_date);
            assert!(date >= base_date - Duration::days(365));
        }
    }

    #[test]
    fn random_kinds_are_plausible() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let ctx = ctx();

        let email = FieldKind::FreeEmail.generate(&ctx, &mut rng).unwrap();
        assert!(email.contains('@'));

        let url = FieldKind::Url.generate(&ctx, &mut rng).unwrap();
        assert!(url.starts_with("https://"));

        let sign = FieldKind::ZodiacSign.generate(&ctx, &mut rng).unwrap();
        assert!(ZODIAC_SIGNS.contains(&sign.as_str()));

        let phone = FieldKind::PhoneNumber.generate(&ctx, &mut rng).unwrap();
        assert!(phone.chars().any(|ch| ch.is_ascii_digit()));

        let state = FieldKind::StateAbbr.generate(&ctx, &mut rng).unwrap();
        assert_eq!(state.len(), 2);

        let street = FieldKind::StreetAddress.generate(&ctx, &mut rng).unwrap();
        assert!(street.contains(' '));

        for kind in [
            FieldKind::FirstName,
            FieldKind::MiddleName,
            FieldKind::LastName,
            FieldKind::FullName,
            FieldKind::Suffix,
            FieldKind::Word,
            FieldKind::JobTitle,
            FieldKind::JobArea,
            FieldKind::CompanyName,
            FieldKind::City,
            FieldKind::Country,
        ] {
            let value = kind.generate(&ctx, &mut rng).unwrap();
            assert!(!value.trim().is_empty(), "{kind:?} produced an empty value");
        }
    }

    #[test]
    fn zip_codes_are_five_digits_or_zip_plus_four() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let is_digits = |part: &str, len: usize| {
            part.len() == len && part.chars().all(|ch| ch.is_ascii_digit())
        };
        for _ in 0..200 {
            let zip = FieldKind::ZipCode.generate(&ctx(), &mut rng).unwrap();
            let valid = match zip.split_once('-') {
                Some((head, tail)) => is_digits(head, 5) && is_digits(tail, 4),
                None => is_digits(&zip, 5),
            };
            assert!(valid, "implausible zip code '{zip}'");
        }
    }

    #[test]
    fn past_date_replays_for_fixed_seed_and_base_date() {
        let draw = || {
            let mut rng = ChaCha8Rng::seed_from_u64(1234);
            (0..10)
                .map(|_| FieldKind::PastDate.generate(&ctx(), &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(), draw());
    }

    #[test]
    fn same_seed_produces_same_values() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(42);
        let mut rng_b = ChaCha8Rng::seed_from_u64(42);
        let a = FieldKind::FullName.generate(&ctx(), &mut rng_a).unwrap();
        let b = FieldKind::FullName.generate(&ctx(), &mut rng_b).unwrap();
        assert_eq!(a, b);
    }
}
