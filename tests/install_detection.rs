// Installation-status detection from the page URL.

use url::Url;

use comet_beacon::{detect_installation, resolve_installation, NoMarker};

fn url(s: &str) -> Url {
    Url::parse(s).expect("test URL must parse")
}

#[test]
fn installed_true_detected() {
    assert!(detect_installation(&url("https://cometsai.app/?installed=true")));
}

#[test]
fn missing_query_defaults_to_not_installed() {
    assert!(!detect_installation(&url("https://cometsai.app/")));
}

#[test]
fn installed_false_is_not_installed() {
    assert!(!detect_installation(&url(
        "https://cometsai.app/?installed=false"
    )));
}

#[test]
fn unrelated_parameters_do_not_trigger() {
    assert!(!detect_installation(&url(
        "https://cometsai.app/?utm_source=installed&installed=1"
    )));
}

#[test]
fn resolution_without_marker_follows_query() {
    assert!(resolve_installation(
        &url("https://cometsai.app/?installed=true"),
        &NoMarker
    ));
    assert!(!resolve_installation(&url("https://cometsai.app/"), &NoMarker));
}
