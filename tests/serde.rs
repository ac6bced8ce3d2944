use http_accept_language::{Language, Preferences};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
struct Session {
    user: String,
    languages: Vec<Language>,
}

#[test]
fn session_languages_round_trip_verbatim() {
    let session: Session =
        serde_json::from_str(r#"{"user":"anna","languages":["nl-BE","EN-us"]}"#).unwrap();
    assert_eq!(session.user, "anna");
    assert_eq!(session.languages, ["nl-BE", "EN-us"]);

    let json = serde_json::to_string(&session).unwrap();
    assert_eq!(json, r#"{"user":"anna","languages":["nl-BE","EN-us"]}"#);
}

#[test]
fn session_languages_override_header() {
    let _ = pretty_env_logger::try_init();
    let session: Session =
        serde_json::from_str(r#"{"user":"anna","languages":["fr","en"]}"#).unwrap();

    let mut prefs = Preferences::new(Some("de, en;q=0.5"));
    prefs.set(session.languages);
    assert_eq!(prefs.get(), ["fr", "en"]);
    assert_eq!(prefs.compatible_language_from(&["de-DE", "fr-CA"]), Some(&"fr-CA"));
}
