//! Rendering derivations from JSON files

use std::fs;

use tempfile::TempDir;
use turnstile::render_file;
use turnstile_calculus::{la3, lk};
use turnstile_render::Renderer;
use turnstile_types::Formula;

use super::shown;

const CUT: &str = r#"{
  "kind": "transformation",
  "rule": "Cut",
  "result": {
    "antecedent": [{ "kind": "atom", "value": "Γ" }, { "kind": "atom", "value": "Σ" }],
    "succedent": [{ "kind": "atom", "value": "Δ" }, { "kind": "atom", "value": "Π" }]
  },
  "deps": [
    {
      "kind": "premise",
      "result": {
        "antecedent": [{ "kind": "atom", "value": "Γ" }],
        "succedent": [{ "kind": "atom", "value": "Δ" }, { "kind": "atom", "value": "A" }]
      }
    },
    {
      "kind": "premise",
      "result": {
        "antecedent": [{ "kind": "atom", "value": "A" }, { "kind": "atom", "value": "Σ" }],
        "succedent": [{ "kind": "atom", "value": "Π" }]
      }
    }
  ]
}"#;

#[test]
fn renders_hand_written_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cut.json");
    fs::write(&path, CUT).unwrap();

    let block = render_file(&Renderer::default(), &path).unwrap();
    assert_eq!(
        shown(&block),
        "   Γ ⊢ Δ,A  A,Σ ⊢ Π\n  ―――――――――――――――――― (Cut)\n      Γ,Σ ⊢ Δ,Π"
    );
}

#[test]
fn serialized_derivations_render_like_built_ones() {
    let dir = TempDir::new().unwrap();
    let renderer = Renderer::default();
    for (name, derivation) in [
        ("lk.json", lk::sandbox().unwrap()),
        ("la3.json", la3::sandbox().unwrap()),
    ] {
        let path = dir.path().join(name);
        fs::write(&path, serde_json::to_string_pretty(&derivation).unwrap()).unwrap();
        assert_eq!(
            render_file(&renderer, &path).unwrap(),
            renderer.render(&derivation)
        );
    }
}

#[test]
fn deep_chains_load_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deep.json");
    let p = Formula::atom("p");
    let mut derivation = lk::i(p.clone());
    for _ in 0..200 {
        derivation = lk::swl(p.clone(), derivation);
    }
    fs::write(&path, serde_json::to_string(&derivation).unwrap()).unwrap();

    let renderer = Renderer::default();
    assert_eq!(
        render_file(&renderer, &path).unwrap(),
        renderer.render(&derivation)
    );
}

#[test]
fn trailing_content_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("twice.json");
    let json = serde_json::to_string(&lk::i(Formula::atom("p"))).unwrap();
    fs::write(&path, format!("{json}{json}")).unwrap();

    assert!(render_file(&Renderer::default(), &path).is_err());
}

#[test]
fn malformed_json_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{ "kind": "lemma" }"#).unwrap();

    let err = render_file(&Renderer::default(), &path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.json"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = render_file(&Renderer::default(), &dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().starts_with("reading "));
}
