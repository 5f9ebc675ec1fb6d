use grimoire_model::{
    AffinityTier, BloodlineAffinityTable, Category, ComponentSlots, SpellContext, Vocabulary,
    VocabularyEntry,
};

#[test]
fn context_builder_keeps_every_table() {
    let vocabulary = Vocabulary::new().with_names(Category::Element, ["Fire", "Water"]);
    let affinities = BloodlineAffinityTable::new().with("Fire", AffinityTier::Weak, ["Water"]);
    let context = SpellContext::new(vocabulary).with_affinities(affinities);

    assert_eq!(context.vocabulary().names(Category::Element), ["Fire", "Water"]);
    assert_eq!(
        context.affinities().elements("Fire", AffinityTier::Weak),
        ["Water".to_string()]
    );
    assert!(context.affinities().elements("Water", AffinityTier::Weak).is_empty());
}

#[test]
fn affix_falls_back_to_name() {
    let mut vocabulary = Vocabulary::new();
    vocabulary.insert(
        Category::Effect,
        vec![
            VocabularyEntry::new("Damage").with_affix("Bolt"),
            VocabularyEntry::new("Heal"),
        ],
    );
    assert_eq!(vocabulary.affix(Category::Effect, "Damage"), "Bolt");
    assert_eq!(vocabulary.affix(Category::Effect, "Heal"), "Heal");
    assert_eq!(vocabulary.affix(Category::Effect, "Unknown"), "Unknown");
}

#[test]
fn slots_complete_only_when_filled() {
    let mut slots = ComponentSlots::default();
    slots.set_name(Category::Effect, "Heal".to_string());
    assert!(slots.clone().complete().is_none());

    slots.set_name(Category::Element, "Water".to_string());
    slots.set_name(Category::Duration, "Instant".to_string());
    slots.set_name(Category::Range, "Touch".to_string());
    slots.level = Some(2);
    let set = slots.complete().expect("all slots filled");
    assert_eq!(set.to_string(), "Heal / Water / level 2 / Instant / Touch");
}

#[test]
fn tier_labels_parse_back() {
    for tier in AffinityTier::PRIORITY {
        assert_eq!(tier.label().parse::<AffinityTier>().ok(), Some(tier));
    }
}
