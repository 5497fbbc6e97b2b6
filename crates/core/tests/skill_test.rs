use eldritch_core::{
    comparison_value, resolve_skill_test, Card, ChaosBag, ChaosToken, DrawPolicy, Faction,
    ScriptedTokens, Skill, SkillAxis, SkillCard, SkillTest, TokenKind,
};

fn resolve(
    axis: SkillAxis,
    tested: Skill,
    player: Skill,
    token: ChaosToken,
    committed: &[&dyn Card],
) -> (bool, i32) {
    let mut tokens = ScriptedTokens::new([token]);
    let result = resolve_skill_test(axis, &tested, &player, &mut tokens, committed)
        .expect("one token scripted");
    assert_eq!(tokens.remaining(), 0);
    assert_eq!(result.token, token);
    (result.succeeded, result.margin)
}

macro_rules! comparison_case {
    ($name:ident, $tested:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let tested = Skill::new(0, $tested, 0, 0);
            assert_eq!(comparison_value(SkillAxis::Intellect, &tested), $expected);
        }
    };
}

comparison_case!(comparison_negative, -3, 0);
comparison_case!(comparison_zero, 0, 0);
comparison_case!(comparison_positive, 4, 4);

macro_rules! margin_case {
    ($name:ident, $axis:expr, $tested:expr, $player:expr, $token:expr, $succeeded:expr, $margin:expr) => {
        #[test]
        fn $name() {
            assert_eq!(
                resolve($axis, $tested, $player, ChaosToken::value($token), &[]),
                ($succeeded, $margin)
            );
        }
    };
}

margin_case!(
    willpower_meets_difficulty,
    SkillAxis::Willpower,
    Skill::new(1, 0, 0, 0),
    Skill::new(2, 0, 0, 0),
    0,
    true,
    1
);
margin_case!(
    willpower_token_drops_below,
    SkillAxis::Willpower,
    Skill::new(1, 0, 0, 0),
    Skill::new(2, 0, 0, 0),
    -2,
    false,
    -1
);
margin_case!(
    exact_tie_succeeds,
    SkillAxis::Agility,
    Skill::new(0, 0, 0, 3),
    Skill::new(0, 0, 0, 4),
    -1,
    true,
    0
);
margin_case!(
    player_wild_counts,
    SkillAxis::Combat,
    Skill::new(0, 0, 2, 0),
    Skill::new(0, 0, 1, 0).with_wild(1),
    0,
    true,
    0
);
margin_case!(
    tested_wild_raises_difficulty,
    SkillAxis::Intellect,
    Skill::new(0, 2, 0, 0).with_wild(1),
    Skill::new(0, 3, 0, 0),
    0,
    true,
    0
);
margin_case!(
    negative_difficulty_clamps,
    SkillAxis::Combat,
    Skill::new(0, 0, -2, 0),
    Skill::new(0, 0, 0, 0),
    -1,
    false,
    -1
);
margin_case!(
    other_axes_ignored,
    SkillAxis::Intellect,
    Skill::new(9, 1, 9, 9),
    Skill::new(0, 1, 0, 0),
    0,
    true,
    0
);

#[test]
fn committed_wild_adds_to_combat() {
    let courage = SkillCard::new(
        "Unexpected Courage",
        Faction::Neutral,
        Skill::default().with_wild(1),
    );
    let tested = Skill::new(0, 0, 1, 0);
    let without = resolve(SkillAxis::Combat, tested, Skill::default(), ChaosToken::value(0), &[]);
    let with = resolve(
        SkillAxis::Combat,
        tested,
        Skill::default(),
        ChaosToken::value(0),
        &[&courage],
    );
    assert_eq!(without, (false, -1));
    assert_eq!(with, (true, 0));
}

#[test]
fn each_commitment_adds_axis_plus_wild() {
    let overpower = SkillCard::new("Overpower", Faction::Neutral, Skill::new(0, 0, 2, 0));
    let blow = SkillCard::new("Vicious Blow", Faction::Guardian, Skill::new(0, 0, 1, 0).with_wild(1));
    let guts = SkillCard::new("Guts", Faction::Neutral, Skill::new(2, 0, 0, 0));
    let tested = Skill::new(0, 0, 4, 0);
    let player = Skill::new(0, 0, 3, 0);
    let token = ChaosToken::value(-1);

    let (_, base) = resolve(SkillAxis::Combat, tested, player, token, &[]);
    let (_, one) = resolve(SkillAxis::Combat, tested, player, token, &[&overpower]);
    let (_, two) = resolve(SkillAxis::Combat, tested, player, token, &[&overpower, &blow]);
    let (_, three) = resolve(
        SkillAxis::Combat,
        tested,
        player,
        token,
        &[&overpower, &blow, &guts],
    );
    assert_eq!(one - base, 2);
    assert_eq!(two - one, 2);
    assert_eq!(three - two, 0);
}

#[test]
fn auto_fail_beats_any_total() {
    let courage = SkillCard::new("Unexpected Courage", Faction::Neutral, Skill::default().with_wild(2));
    let (succeeded, margin) = resolve(
        SkillAxis::Willpower,
        Skill::default(),
        Skill::new(5, 5, 5, 5),
        ChaosToken::auto_fail(),
        &[&courage],
    );
    assert!(!succeeded);
    assert_eq!(margin, 0);
}

#[test]
fn symbol_tokens_use_their_effect() {
    let elder = ChaosToken::new(TokenKind::ElderSign, 1);
    assert_eq!(
        resolve(SkillAxis::Agility, Skill::new(0, 0, 0, 3), Skill::new(0, 0, 0, 2), elder, &[]),
        (true, 0)
    );
}

#[test]
fn resolves_against_a_seeded_bag() {
    let mut bag = ChaosBag::new(DrawPolicy::Remove, 5);
    bag.add_token(ChaosToken::value(-1));
    let test = SkillTest::new(SkillAxis::Intellect);
    let result = test
        .resolve(&Skill::new(0, 2, 0, 0), &Skill::new(0, 3, 0, 0), &mut bag, &[])
        .expect("one token");
    assert!(result.succeeded);
    assert_eq!(result.margin, 0);
    assert!(bag.is_empty());
    assert!(test
        .resolve(&Skill::new(0, 2, 0, 0), &Skill::new(0, 3, 0, 0), &mut bag, &[])
        .is_err());
}
