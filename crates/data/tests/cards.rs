use eldritch_core::{
    resolve_skill_test, Asset, Card, CardDatabase, ChaosToken, Condition, DescriptorPolicy,
    DrawPolicy, Effect, EffectBase, EffectCategory, Event, Faction, GameConfig, Hability,
    HasSkill, Investigator, ScriptedTokens, Skill, SkillAxis, SkillCard, Slot, StaticQuery,
    TokenKind, TokenSource,
};
use eldritch_data::{load_card_database, load_card_records, load_chaos_bag, load_game_config};
use std::path::PathBuf;

fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

fn database() -> CardDatabase {
    let config = load_game_config(&assets_root()).expect("load config");
    load_card_database(&assets_root(), &config).expect("load cards")
}

fn strict_database() -> CardDatabase {
    let config = GameConfig {
        descriptors: DescriptorPolicy::Strict,
        ..load_game_config(&assets_root()).expect("load config")
    };
    load_card_database(&assets_root(), &config).expect("load cards")
}

fn asset(db: &CardDatabase, name: &str) -> Asset {
    db.asset(name)
        .expect("build asset")
        .unwrap_or_else(|| panic!("missing asset {name}"))
}

#[test]
fn shipped_config() {
    let config = load_game_config(&assets_root()).expect("load config");
    assert_eq!(config.descriptors, DescriptorPolicy::Lenient);
    assert_eq!(config.chaos_bag.draw_policy, DrawPolicy::Replace);
    assert_eq!(config.chaos_bag.tokens.len(), 16);
    assert_eq!(config.chaos_bag.count(TokenKind::AutoFail), 1);
}

#[test]
fn every_shipped_card_builds_strictly() {
    let records = load_card_records(&assets_root().join("cards.json")).expect("records");
    let db = strict_database();
    for record in &records.investigators {
        let report = db
            .card_report::<Investigator>(&record.name)
            .expect("investigator")
            .expect("present");
        assert!(report.warnings.is_empty(), "{}", record.name);
    }
    for record in &records.assets {
        let report = db.card_report::<Asset>(&record.name).expect("asset").expect("present");
        assert!(report.warnings.is_empty(), "{}", record.name);
    }
    for record in &records.events {
        assert!(db.event(&record.name).expect("event").is_some());
    }
    for record in &records.habilities {
        assert!(db.hability(&record.name).expect("hability").is_some());
    }
    for record in &records.skills {
        assert!(db.skill_card(&record.name).expect("skill").is_some());
    }
}

#[test]
fn roland_banks() {
    let roland = database()
        .investigator("Roland Banks")
        .expect("build")
        .expect("present");
    assert_eq!(roland.faction(), Faction::Guardian);
    assert_eq!(roland.subname(), "The Fed");
    assert_eq!(roland.skill(), Skill::new(3, 3, 4, 2));
    assert_eq!(roland.health(), 9);
    assert_eq!(roland.sanity(), 5);
    assert_eq!(roland.elder_sign(), None);
}

#[test]
fn daisy_elder_sign() {
    let daisy = database()
        .investigator("Daisy Walker")
        .expect("build")
        .expect("present");
    let elder_sign = daisy.elder_sign().expect("elder sign");
    assert!(matches!(elder_sign, Effect::SkillBonus(_)));
    assert_eq!(elder_sign.skill(), Skill::new(0, 1, 0, 0));
}

#[test]
fn roland_38_special() {
    let gun = asset(&database(), "Roland's .38 Special");
    assert_eq!(gun.faction(), Faction::Neutral);
    assert_eq!(gun.skill(), Skill::new(0, 0, 1, 1).with_wild(1));
    assert_eq!(gun.cost(), 3);
    assert_eq!(gun.uses(), Some(4));
    assert_eq!(gun.slot(), Some(Slot::Hand));
    let effect = gun.effects().get(EffectCategory::Activate)[0];
    let clues = StaticQuery {
        undiscovered_clues: true,
        ..StaticQuery::default()
    };
    assert_eq!(effect.additional_damage(), Some(1));
    assert_eq!(effect.skill_bonus(&clues), Skill::new(0, 0, 4, 0));
    assert_eq!(effect.skill_bonus(&StaticQuery::default()), Skill::new(0, 0, 1, 0));
}

#[test]
fn automatic_45() {
    let gun = asset(&database(), ".45 Automatic");
    assert_eq!(gun.faction(), Faction::Guardian);
    assert_eq!(gun.skill(), Skill::new(0, 0, 0, 1));
    assert_eq!(
        gun.effects().get(EffectCategory::Activate),
        &[Effect::FightWithDamage {
            base: EffectBase::new(Skill::new(0, 0, 1, 0), 1),
            additional_damage: 1,
        }]
    );
}

#[test]
fn physical_training_triggers() {
    let training = asset(&database(), "Physical Training");
    assert_eq!(training.slot(), None);
    let triggers = training.effects().get(EffectCategory::Trigger);
    assert_eq!(triggers.len(), 2);
    assert_eq!(triggers[0].skill(), Skill::new(1, 0, 0, 0));
    assert_eq!(triggers[1].skill(), Skill::new(0, 0, 1, 0));
    assert!(triggers.iter().all(|effect| effect.activation_cost() == 1));
}

#[test]
fn machete_needs_a_lone_enemy() {
    let machete = asset(&database(), "Machete");
    let fight = machete.effects().get(EffectCategory::Activate)[0];
    assert_eq!(fight.condition(), Some(Condition::OnlyEnemyEngaged));
    assert!(!fight.condition_holds(&StaticQuery::default()));
    let engaged = StaticQuery {
        only_enemy_engaged: true,
        ..StaticQuery::default()
    };
    assert_eq!(
        machete.effects().first_usable(EffectCategory::Activate, &engaged),
        Some(&fight)
    );
}

#[test]
fn flashlight_lowers_shroud() {
    let flashlight = asset(&database(), "Flashlight");
    assert!(matches!(
        flashlight.effects().get(EffectCategory::Activate),
        [Effect::InvestigateWithShroud {
            shroud_modification: -2,
            ..
        }]
    ));
}

#[test]
fn allies_carry_soak_and_effects() {
    let db = database();
    let cop = asset(&db, "Beat Cop");
    assert_eq!(cop.slot(), Some(Slot::Ally));
    assert_eq!((cop.health(), cop.sanity()), (Some(2), Some(2)));
    assert_eq!(cop.effects().get(EffectCategory::Passive).len(), 1);
    assert!(matches!(
        cop.effects().get(EffectCategory::Discard),
        [Effect::DamageAtCurrentLocation { amount: 1, .. }]
    ));

    let dog = asset(&db, "Guard Dog");
    assert!(matches!(
        dog.effects().get(EffectCategory::Trigger),
        [Effect::DamageToAttacker { amount: 1, .. }]
    ));
}

#[test]
fn events_habilities_and_skills() {
    let db = database();
    let blast: Event = db.card("Dynamite Blast").expect("build").expect("present");
    assert_eq!(blast.cost(), 5);
    assert!(matches!(
        blast.effects().get(EffectCategory::Activate),
        [Effect::DamageAtCurrentLocation { amount: 3, .. }]
    ));

    let ability: Hability = db.card("Roland Banks").expect("build").expect("present");
    assert_eq!(ability.effects().len(), 1);

    let courage: SkillCard = db
        .card("Unexpected Courage")
        .expect("build")
        .expect("present");
    assert_eq!(courage.skill(), Skill::default().with_wild(2));
}

#[test]
fn unknown_card_is_none() {
    assert_eq!(database().asset("Necronomicon").expect("lookup"), None);
}

#[test]
fn committed_cards_from_the_database() {
    let db = database();
    let roland = db.investigator("Roland Banks").expect("build").expect("present");
    let overpower = db.skill_card("Overpower").expect("build").expect("present");
    let courage = db.skill_card("Unexpected Courage").expect("build").expect("present");
    let mut tokens = ScriptedTokens::new([ChaosToken::value(-4)]);
    let result = resolve_skill_test(
        SkillAxis::Combat,
        &Skill::new(0, 0, 1, 0),
        &roland,
        &mut tokens,
        &[&overpower, &courage],
    )
    .expect("token");
    assert!(result.succeeded);
    assert_eq!(result.margin, 3);
}

#[test]
fn seeded_bags_repeat() {
    let mut first = load_chaos_bag(&assets_root(), 42).expect("bag");
    let mut second = load_chaos_bag(&assets_root(), 42).expect("bag");
    for _ in 0..32 {
        assert_eq!(first.draw().expect("draw"), second.draw().expect("draw"));
    }
    assert_eq!(first.len(), 16);
}
