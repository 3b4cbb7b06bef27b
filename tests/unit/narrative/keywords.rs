use super::*;

#[test]
fn first_action_in_table_order_wins() {
    // "hop" (jump) and "spin" (roll) both occur; jump comes first in the table.
    assert_eq!(action_in("spin and hop"), Some(AnimationType::Jump));
    assert_eq!(action_in("waddles along"), Some(AnimationType::Walk));
    assert_eq!(action_in("sits quietly"), None);
}

#[test]
fn props_are_unique_and_in_table_order() {
    assert_eq!(
        props_in("love the coin and the die and more dice"),
        vec![Prop::Dice, Prop::Coin, Prop::Heart]
    );
    assert!(props_in("nothing here").is_empty());
}

#[test]
fn emotion_defaults_to_neutral() {
    assert_eq!(emotion_in("plain clause"), Emotion::Neutral);
    assert_eq!(emotion_in("jumps cheering"), Emotion::Excited);
    assert_eq!(emotion_in("glad and thrilled"), Emotion::Happy);
}

#[test]
fn success_is_checked_before_failure() {
    assert_eq!(outcome_in("wins or fails"), Some(Outcome::Success));
    assert_eq!(outcome_in("it fails"), Some(Outcome::Failure));
    assert_eq!(outcome_in("it rolls"), None);
}

#[test]
fn blink_has_no_keywords() {
    assert!(ACTION_KEYWORDS
        .iter()
        .all(|(kind, _)| *kind != AnimationType::Blink));
}
