//! Recorded-shape fixtures for the `google` organization.
//!
//! Trimmed to the fields the client reads plus enough surrounding data to
//! look like a real API response.

use serde_json::{Value, json};

pub const ORG: &str = "google";

pub const EXPECTED_REPOS: [&str; 8] = [
    "episodes.dart",
    "cpp-netlib",
    "dagger",
    "ios-webkit-debug-proxy",
    "google.github.io",
    "kratu",
    "build-debian-cloud",
    "traceur-compiler",
];

pub const APACHE2_REPOS: [&str; 3] = ["dagger", "kratu", "traceur-compiler"];

pub fn repos_path() -> String {
    format!("/orgs/{ORG}/repos")
}

pub fn org_payload(base_url: &str) -> Value {
    json!({
        "login": ORG,
        "id": 1_342_004,
        "url": format!("{base_url}/orgs/{ORG}"),
        "repos_url": format!("{base_url}{}", repos_path()),
        "description": "Google ❤️ Open Source",
        "public_repos": 2284,
        "type": "Organization",
    })
}

fn repo(id: u64, name: &str, license: Option<(&str, &str)>) -> Value {
    let license = license.map_or(Value::Null, |(key, name)| {
        json!({
            "key": key,
            "name": name,
            "spdx_id": key.to_ascii_uppercase(),
        })
    });
    json!({
        "id": id,
        "name": name,
        "full_name": format!("{ORG}/{name}"),
        "private": false,
        "fork": false,
        "license": license,
    })
}

pub fn repos_payload() -> Value {
    let apache = Some(("apache-2.0", "Apache License 2.0"));
    let bsd = Some(("bsd-3-clause", "BSD 3-Clause \"New\" or \"Revised\" License"));
    let other = Some(("other", "Other"));
    json!([
        repo(7_697_149, "episodes.dart", bsd),
        repo(7_776_515, "cpp-netlib", Some(("bsl-1.0", "Boost Software License 1.0"))),
        repo(7_968_417, "dagger", apache),
        repo(8_165_161, "ios-webkit-debug-proxy", other),
        repo(8_459_994, "google.github.io", None),
        repo(8_566_972, "kratu", apache),
        repo(8_858_648, "build-debian-cloud", other),
        repo(9_060_347, "traceur-compiler", apache),
    ])
}
