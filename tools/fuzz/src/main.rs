use afl::fuzz;
use chrono::{Days, NaiveDate};
use nid::{Nid, NidConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_reference_date(rng: &mut StdRng) -> NaiveDate {
    let start = NaiveDate::from_ymd_opt(1800, 1, 1).unwrap();
    start
        .checked_add_days(Days::new(rng.gen_range(0..100_000)))
        .unwrap()
}

fn gen_delimiter(rng: &mut StdRng) -> &'static str {
    match rng.gen_range::<u8, _>(0..4) {
        0 => "",
        1 => "-",
        2 => " ",
        _ => "/",
    }
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
    }

    let reference = gen_reference_date(&mut rng);
    let delimiter = gen_delimiter(&mut rng);
    let processor = NidConfig::new().delimiter(delimiter).build();

    // none of these may panic, whatever the input
    let raw = Some(input);
    let individual = processor.is_individual(raw);
    let company = processor.is_company(raw);
    assert!(!(individual && company));

    let is_valid = processor.validate(raw);
    let normalized = nid::normalize(raw).unwrap();
    if is_valid {
        assert_eq!(normalized.len(), nid::NID_LENGTH);
        assert!(normalized.chars().all(|c| c.is_ascii_digit()));
        assert!(Nid::parse(input).is_ok());
    }

    let formatted = nid::format(raw);
    if !formatted.is_empty() {
        assert_eq!(nid::normalize(Some(&formatted)).unwrap(), normalized);
    }
    let _ = processor.format(raw);

    let _ = nid::day_of_birth(raw);
    let _ = nid::month_of_birth(raw);
    let year = nid::year_of_birth(raw);
    let date_of_birth = processor.date_of_birth(raw);
    if let Ok(Some(date)) = date_of_birth {
        assert!(individual);
        assert_eq!(year, Some(chrono::Datelike::year(&date)));
        if let Ok(Some(age)) = processor.age(raw, Some(reference)) {
            assert_eq!(age, nid::age_at_date(date, reference));
        }
    }

    if let Ok(Some(next)) = processor.next_birthday(reference, raw) {
        assert!(next >= reference);
    }
}
