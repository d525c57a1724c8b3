//! People, companies, and internet identities.

use rand::Rng;

use super::pick;
use crate::kwargs::{self, Kwargs};
use crate::words::{
    COMPANY_SUFFIXES, FIRST_NAMES, FREE_EMAIL_DOMAINS, IMAGE_SERVICES, LAST_NAMES, LOREM, TLDS,
};
use crate::{FakeError, Faker, NativeValue};

fn first() -> String {
    pick(&mut rand::thread_rng(), FIRST_NAMES).to_string()
}

fn last() -> String {
    pick(&mut rand::thread_rng(), LAST_NAMES).to_string()
}

fn full_name() -> String {
    format!("{} {}", first(), last())
}

fn make_username() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{}_{}{}",
        pick(&mut rng, FIRST_NAMES).to_lowercase(),
        pick(&mut rng, LOREM),
        rng.gen_range(1..=99)
    )
}

fn make_domain(tld: Option<&str>) -> String {
    let mut rng = rand::thread_rng();
    let tld = tld.unwrap_or_else(|| pick(&mut rng, TLDS));
    format!("{}.{}", pick(&mut rng, LOREM), tld.trim_start_matches('.'))
}

fn make_email(domain: Option<&str>) -> String {
    let local = make_username();
    match domain {
        Some(d) => format!("{}@{}", local, d),
        None => format!("{}@{}", local, make_domain(None)),
    }
}

pub fn first_name(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(first().into())
}

pub fn last_name(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(last().into())
}

pub fn name(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(full_name().into())
}

pub fn first_names(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let nb = kwargs::count(kw, "nb", 5)?;
    Ok((0..nb).map(|_| first()).collect::<Vec<_>>().into())
}

pub fn last_names(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let nb = kwargs::count(kw, "nb", 5)?;
    Ok((0..nb).map(|_| last()).collect::<Vec<_>>().into())
}

pub fn names(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let nb = kwargs::count(kw, "nb", 5)?;
    Ok((0..nb).map(|_| full_name()).collect::<Vec<_>>().into())
}

pub fn username(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(make_username().into())
}

pub fn usernames(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let nb = kwargs::count(kw, "nb", 5)?;
    Ok((0..nb).map(|_| make_username()).collect::<Vec<_>>().into())
}

pub fn email(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(make_email(kwargs::string(kw, "domain")?).into())
}

pub fn company_email(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let domain = match kwargs::string(kw, "domain")? {
        Some(d) => d.to_string(),
        None => format!("{}.com", pick(&mut rand::thread_rng(), LOREM)),
    };
    Ok(make_email(Some(&domain)).into())
}

pub fn free_email_domain(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(pick(&mut rand::thread_rng(), FREE_EMAIL_DOMAINS).into())
}

pub fn free_email(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    let domain = pick(&mut rand::thread_rng(), FREE_EMAIL_DOMAINS);
    Ok(make_email(Some(domain)).into())
}

pub fn domain_name(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(make_domain(kwargs::string(kw, "tld")?).into())
}

pub fn tld(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(pick(&mut rand::thread_rng(), TLDS).into())
}

pub fn url(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    let mut rng = rand::thread_rng();
    let protocol = if rng.gen_bool(0.5) { "https" } else { "http" };
    Ok(format!("{}://{}/{}", protocol, make_domain(None), pick(&mut rng, LOREM)).into())
}

pub fn image_url(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let width = kwargs::int(kw, "width")?.unwrap_or(800);
    let height = kwargs::int(kw, "height")?.unwrap_or(600);
    let service = match kwargs::string(kw, "service")? {
        Some(s) => s.to_string(),
        None => pick(&mut rand::thread_rng(), IMAGE_SERVICES).to_string(),
    };
    Ok(service
        .replace("{width}", &width.to_string())
        .replace("{height}", &height.to_string())
        .into())
}

pub fn ipv4(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    let mut rng = rand::thread_rng();
    let octets: [u8; 4] = rng.gen();
    Ok(std::net::Ipv4Addr::from(octets).to_string().into())
}

pub fn company(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    let suffix = pick(&mut rand::thread_rng(), COMPANY_SUFFIXES);
    Ok(format!("{} {}", last(), suffix).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kw(value: serde_json::Value) -> Kwargs {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_email_uses_domain() {
        let value = email(&Faker::new(), &kw(json!({ "domain": "example.org" }))).unwrap();
        assert!(value.as_str().unwrap().ends_with("@example.org"));
    }

    #[test]
    fn test_email_without_domain_has_at() {
        let value = email(&Faker::new(), &Kwargs::new()).unwrap();
        assert_eq!(value.as_str().unwrap().matches('@').count(), 1);
    }

    #[test]
    fn test_image_url_substitutes_size() {
        let args = kw(json!({
            "width": 10,
            "height": 20,
            "service": "https://x/{width}/{height}"
        }));
        let value = image_url(&Faker::new(), &args).unwrap();
        assert_eq!(value.as_str().unwrap(), "https://x/10/20");
    }

    #[test]
    fn test_ipv4_parses() {
        let value = ipv4(&Faker::new(), &Kwargs::new()).unwrap();
        assert!(value.as_str().unwrap().parse::<std::net::Ipv4Addr>().is_ok());
    }

    #[test]
    fn test_names_count() {
        let value = names(&Faker::new(), &kw(json!({ "nb": 2 }))).unwrap();
        match value {
            NativeValue::StrList(v) => {
                assert_eq!(v.len(), 2);
                assert!(v.iter().all(|n| n.contains(' ')));
            }
            other => panic!("expected list, got {:?}", other),
        }
    }
}
