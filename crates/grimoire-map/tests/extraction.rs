use grimoire_map::{EfficiencyCalculator, ElementMapper, Extractor, MatchReason, SlotOrigin};
use grimoire_model::{Category, ComponentSet};
use grimoire_standards::embedded_context;

fn components(effect: &str, element: &str, level: u8, duration: &str, range: &str) -> ComponentSet {
    ComponentSet {
        effect: effect.to_string(),
        element: element.to_string(),
        level,
        duration: duration.to_string(),
        range: range.to_string(),
    }
}

#[test]
fn extracts_every_slot_from_a_full_prompt() {
    let context = embedded_context().expect("load embedded context");
    let extracted =
        Extractor::new(&context).extract("a level 3 fire blast that lasts 10 minutes at 60 feet");
    assert_eq!(
        extracted,
        components("Damage", "Fire", 3, "10_minute", "60ft")
    );
}

#[test]
fn empty_prompt_yields_defaults() {
    let context = embedded_context().expect("load embedded context");
    let extracted = Extractor::new(&context).extract("");
    assert_eq!(extracted, components("Creation", "Moon", 1, "10_minute", "30ft"));
}

#[test]
fn synonyms_fill_effect_range_and_duration() {
    let context = embedded_context().expect("load embedded context");
    let extraction =
        Extractor::new(&context).extract_detailed("shield myself for five minutes");
    assert_eq!(extraction.components.effect, "Shield");
    assert_eq!(extraction.components.range, "Self");
    assert_eq!(extraction.components.duration, "5_minute");
    match extraction.origin(Category::Duration) {
        SlotOrigin::Matched(candidate) => assert_eq!(candidate.reason, MatchReason::Synonym),
        other => panic!("unexpected origin: {other:?}"),
    }
}

#[test]
fn duration_patterns_catch_unlisted_phrasing() {
    let context = embedded_context().expect("load embedded context");
    let extraction = Extractor::new(&context).extract_detailed("a ward lasting 8 hrs");
    assert_eq!(extraction.components.duration, "8_hour");
    match extraction.origin(Category::Duration) {
        SlotOrigin::Matched(candidate) => assert_eq!(candidate.reason, MatchReason::Pattern),
        other => panic!("unexpected origin: {other:?}"),
    }
}

#[test]
fn out_of_range_level_falls_back() {
    let context = embedded_context().expect("load embedded context");
    let extracted = Extractor::new(&context).extract("a level 15 spell");
    assert_eq!(extracted.level, 1);
}

#[test]
fn generation_elements_map_onto_template_elements() {
    let context = embedded_context().expect("load embedded context");
    let mapper = ElementMapper::new(&context);
    assert_eq!(mapper.map_element("Wind", &["Air", "Fire"]), "Air");
    assert_eq!(mapper.map_element("Dark", &["Shadow", "Light"]), "Shadow");
    assert_eq!(mapper.map_element("Zzz", &["Air", "Fire"]), "Any");
}

#[test]
fn bloodline_efficiency_uses_embedded_affinities() {
    let context = embedded_context().expect("load embedded context");
    let calculator = EfficiencyCalculator::new(&context);
    assert_eq!(calculator.efficiency("Fire", "Lightning").label, "Best 80%");
    assert_eq!(calculator.efficiency("Water", "Fire").label, "Weak 20%");
    assert_eq!(calculator.efficiency("Light", "Moon").label, "Neutral 50%");
    assert_eq!(calculator.efficiency("Fire", "Fire").percentage, 100);
    assert_eq!(calculator.efficiency("Sun", "Fire").percentage, 50);
    assert_eq!(calculator.efficiency("Fire", "Sun").percentage, 50);
}

#[test]
fn extraction_serializes_with_provenance() {
    let context = embedded_context().expect("load embedded context");
    let extraction = Extractor::new(&context)
        .extract_detailed("a level 3 fire blast that lasts 10 minutes at 60 feet");
    insta::assert_json_snapshot!(extraction, @r#"
    {
      "components": {
        "effect": "Damage",
        "element": "Fire",
        "level": 3,
        "duration": "10_minute",
        "range": "60ft"
      },
      "origins": {
        "Effect": {
          "source": "matched",
          "name": "Damage",
          "score": 10,
          "reason": "Synonym"
        },
        "Element": {
          "source": "matched",
          "name": "Fire",
          "score": 10,
          "reason": "Exact"
        },
        "Level": {
          "source": "explicit"
        },
        "Duration": {
          "source": "matched",
          "name": "10_minute",
          "score": 10,
          "reason": "Synonym"
        },
        "Range": {
          "source": "matched",
          "name": "60ft",
          "score": 10,
          "reason": "Synonym"
        }
      }
    }
    "#);
}
